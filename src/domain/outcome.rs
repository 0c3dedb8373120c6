use crate::domain::method::PaymentMethod;
use serde_json::Value;

/// The classified result of one submission, driving which terminal UI state
/// is shown. Derived once per response and handed to the presenter.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseOutcome {
    /// Navigate to a payment gateway or success page.
    Redirect(String),
    /// Display a QR code image (data URI) for the customer to scan.
    QrImage(String),
    /// Payment initiated; no further client action required.
    Success {
        order_id: Option<String>,
        method: Option<PaymentMethod>,
    },
    /// The submission failed, with a best-effort human-readable message.
    Failure {
        code: Option<String>,
        message: String,
    },
}

/// Classifies an HTTP outcome into a [`ResponseOutcome`].
///
/// The server does not transmit an outcome tag; the client infers it from
/// which body fields are present. First match wins, in this order:
///
/// 1. non-2xx status -> `Failure`
/// 2. `qr_image` present -> `QrImage`
/// 3. `redirect_url` present -> `Redirect`
/// 4. otherwise -> `Success`
///
/// `qr_image` is checked before `redirect_url`; servers are assumed never
/// to set both.
pub fn interpret(http_ok: bool, body: &Value, method: Option<PaymentMethod>) -> ResponseOutcome {
    if !http_ok {
        return failure_from_body(body);
    }
    if let Some(qr_image) = body.get("qr_image").and_then(Value::as_str) {
        return ResponseOutcome::QrImage(qr_image.to_string());
    }
    if let Some(redirect_url) = body.get("redirect_url").and_then(Value::as_str) {
        return ResponseOutcome::Redirect(redirect_url.to_string());
    }
    ResponseOutcome::Success {
        order_id: body
            .get("order_id")
            .and_then(Value::as_str)
            .map(str::to_string),
        method,
    }
}

/// Composes the failure message from the `error` and `message` body fields:
/// both -> "{error}: {message}", one -> that one, neither -> a generic text.
fn failure_from_body(body: &Value) -> ResponseOutcome {
    let error = body.get("error").and_then(Value::as_str);
    let message = body.get("message").and_then(Value::as_str);

    let text = match (error, message) {
        (Some(error), Some(message)) => format!("{error}: {message}"),
        (Some(error), None) => error.to_string(),
        (None, Some(message)) => message.to_string(),
        (None, None) => "Payment processing failed.".to_string(),
    };

    ResponseOutcome::Failure {
        code: error.map(str::to_string),
        message: text,
    }
}
