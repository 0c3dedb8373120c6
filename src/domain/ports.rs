use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// A completed HTTP exchange as seen by the response classifier: whether the
/// status was 2xx, plus the parsed JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayReply {
    pub ok: bool,
    pub body: Value,
}

/// Read-only view of the form field values.
///
/// The UI layer owns field storage; the core only reads through this port,
/// so payload assembly stays pure and testable without a rendering
/// environment.
pub trait FieldSource {
    /// Returns the raw value for a logical field name, or `None` if the
    /// field has no source element.
    fn value(&self, key: &str) -> Option<String>;
}

/// Outbound HTTP port used to submit assembled payloads.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// POSTs `body` as JSON to `path` (relative to the gateway's base URL)
    /// and returns the parsed reply.
    async fn post(&self, path: &str, body: &Value) -> Result<GatewayReply>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

/// Terminal UI actions the checkout flow dispatches to.
///
/// All rendering mechanics (alert markup, modal display, navigation) live
/// behind this port; the core never touches a DOM or terminal directly.
pub trait UiPresenter: Send + Sync {
    fn render_alert(&self, kind: AlertKind, text: &str);
    fn show_qr_modal(&self, data_uri: &str);
    fn navigate_to(&self, url: &str);
    fn disable_submit(&self);
    fn restore_submit(&self);
}

pub type PaymentGatewayBox = Box<dyn PaymentGateway>;
pub type UiPresenterBox = Box<dyn UiPresenter>;
