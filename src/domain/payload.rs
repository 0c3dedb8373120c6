use crate::error::CheckoutError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The assembled request body for one payment submission.
///
/// Built fresh per attempt and never mutated afterwards. Optional fields
/// that were absent or empty in the form are omitted from the serialized
/// JSON entirely, never sent as null or empty string.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct PaymentPayload {
    pub merchant_id: String,
    pub order_id: String,
    pub amount: Decimal,
    pub currency: String,
    pub description: String,
    pub backend_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installment_plan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installment_bank: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
}

/// Request body for a payment status inquiry.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct InquiryRequest {
    pub merchant_id: String,
    pub order_id: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "UPPERCASE")]
pub enum RefundType {
    Void,
    Refund,
}

/// Request body for voiding or refunding a completed payment.
///
/// A full void carries no amount; a refund must name the amount to return.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct RefundRequest {
    pub merchant_id: String,
    pub order_id: String,
    pub refund_type: RefundType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RefundRequest {
    /// Checks the refund-type/amount rule the backend enforces, so the
    /// request can be rejected before it is sent.
    pub fn validate(&self) -> Result<(), CheckoutError> {
        if self.refund_type == RefundType::Refund && self.amount.is_none() {
            return Err(CheckoutError::Validation(
                "Amount is required for refund".to_string(),
            ));
        }
        Ok(())
    }
}
