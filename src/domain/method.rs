use crate::error::CheckoutError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Endpoint for payment status inquiries.
pub const INQUIRY_ENDPOINT: &str = "/api/payment/inquiry";
/// Endpoint for void and refund requests.
pub const VOID_REFUND_ENDPOINT: &str = "/api/payment/void-refund";
/// Webhook path appended to the merchant origin as `backend_url`.
pub const WEBHOOK_PATH: &str = "/api/webhook";

/// One of the supported checkout flows.
///
/// Each method has a distinct set of form fields and a distinct backend
/// endpoint. Selected exactly once per submission.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    QrPayment,
    RabbitLinePay,
    Installment,
    InternetBanking,
}

impl PaymentMethod {
    /// All supported methods, in form display order.
    pub const ALL: [PaymentMethod; 5] = [
        PaymentMethod::CreditCard,
        PaymentMethod::QrPayment,
        PaymentMethod::RabbitLinePay,
        PaymentMethod::Installment,
        PaymentMethod::InternetBanking,
    ];

    /// Returns the backend endpoint path for this method.
    ///
    /// The routing table is total and static; there is no runtime
    /// configuration of routes.
    pub fn endpoint(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "/api/credit-card/payment",
            PaymentMethod::QrPayment => "/api/qr/generate",
            PaymentMethod::RabbitLinePay => "/api/rabbit-line-pay/payment",
            PaymentMethod::Installment => "/api/installment/payment",
            PaymentMethod::InternetBanking => "/api/banking/payment",
        }
    }

    /// The wire key used by the form radio group and the payload.
    pub fn key(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "credit_card",
            PaymentMethod::QrPayment => "qr_payment",
            PaymentMethod::RabbitLinePay => "rabbit_line_pay",
            PaymentMethod::Installment => "installment",
            PaymentMethod::InternetBanking => "internet_banking",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = CheckoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "credit_card" => Ok(PaymentMethod::CreditCard),
            "qr_payment" => Ok(PaymentMethod::QrPayment),
            "rabbit_line_pay" => Ok(PaymentMethod::RabbitLinePay),
            "installment" => Ok(PaymentMethod::Installment),
            "internet_banking" => Ok(PaymentMethod::InternetBanking),
            other => Err(CheckoutError::UnsupportedMethod(other.to_string())),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
