use crate::domain::ports::{AlertKind, UiPresenter};

/// [`UiPresenter`] for the CLI binary: alerts and navigation become stdout
/// lines, the QR modal becomes a printed data URI.
#[derive(Debug, Default, Clone)]
pub struct ConsolePresenter;

impl ConsolePresenter {
    pub fn new() -> Self {
        Self
    }
}

impl UiPresenter for ConsolePresenter {
    fn render_alert(&self, kind: AlertKind, text: &str) {
        match kind {
            AlertKind::Success => println!("OK: {text}"),
            AlertKind::Error => eprintln!("ERROR: {text}"),
        }
    }

    fn show_qr_modal(&self, data_uri: &str) {
        println!("Scan this QR code with your banking application to complete the payment:");
        println!("{data_uri}");
    }

    fn navigate_to(&self, url: &str) {
        println!("Redirecting to: {url}");
    }

    // The CLI has no persistent submit control to toggle.
    fn disable_submit(&self) {}

    fn restore_submit(&self) {}
}
