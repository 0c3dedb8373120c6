use crate::domain::method::{PaymentMethod, WEBHOOK_PATH};
use crate::domain::payload::PaymentPayload;
use crate::domain::ports::FieldSource;
use crate::error::{CheckoutError, Result};
use rust_decimal::Decimal;
use url::Url;

/// Per-method source keys for the shared customer detail fields.
///
/// Each sub-form carries its own copies of the customer inputs, so the same
/// logical field reads from a different key per method.
struct CustomerFieldKeys {
    email: &'static str,
    name: &'static str,
    phone: Option<&'static str>,
}

/// Which sub-form supplies the customer fields for each method. QR payment
/// collects no customer details at all.
fn customer_field_keys(method: PaymentMethod) -> Option<CustomerFieldKeys> {
    match method {
        PaymentMethod::CreditCard => Some(CustomerFieldKeys {
            email: "customer_email",
            name: "cardholder_name",
            phone: None,
        }),
        PaymentMethod::QrPayment => None,
        PaymentMethod::RabbitLinePay => Some(CustomerFieldKeys {
            email: "rlp_customer_email",
            name: "rlp_customer_name",
            phone: Some("rlp_customer_phone"),
        }),
        PaymentMethod::Installment => Some(CustomerFieldKeys {
            email: "installment_customer_email",
            name: "installment_customer_name",
            phone: None,
        }),
        PaymentMethod::InternetBanking => Some(CustomerFieldKeys {
            email: "ib_customer_email",
            name: "ib_customer_name",
            phone: None,
        }),
    }
}

/// Method-specific extra payload keys, read from same-named fields.
fn extra_field_keys(method: PaymentMethod) -> &'static [&'static str] {
    match method {
        PaymentMethod::Installment => &["installment_plan", "installment_bank"],
        PaymentMethod::InternetBanking => &["bank_code"],
        _ => &[],
    }
}

/// Builds a [`PaymentPayload`] from a field snapshot for a selected method.
///
/// Pure data transformation: no I/O, idempotent, reentrant. The assembler
/// only knows the merchant origin, from which it derives the webhook
/// `backend_url`.
pub struct FormAssembler {
    origin: Url,
}

impl FormAssembler {
    pub fn new(origin: Url) -> Self {
        Self { origin }
    }

    /// Assembles the payload for one submission attempt.
    ///
    /// Mandatory fields must be present and non-empty; `amount` must parse
    /// as a decimal number. Both are checked here so a malformed form is
    /// rejected before anything is sent. Optional fields enter the payload
    /// iff their source exists and its trimmed value is non-empty.
    pub fn assemble(
        &self,
        method: PaymentMethod,
        fields: &dyn FieldSource,
    ) -> Result<PaymentPayload> {
        let amount_raw = required(fields, "amount")?;
        let amount: Decimal = amount_raw.parse().map_err(|_| {
            CheckoutError::Validation(format!("Amount is not a valid number: {amount_raw}"))
        })?;

        let customer = customer_field_keys(method);
        let extras = extra_field_keys(method);
        let extra = |key: &'static str| {
            if extras.contains(&key) {
                present(fields, key)
            } else {
                None
            }
        };

        Ok(PaymentPayload {
            merchant_id: required(fields, "merchant_id")?,
            order_id: required(fields, "order_id")?,
            amount,
            currency: required(fields, "currency")?,
            description: required(fields, "description")?,
            backend_url: self.origin.join(WEBHOOK_PATH)?.to_string(),
            customer_email: customer.as_ref().and_then(|k| present(fields, k.email)),
            customer_name: customer.as_ref().and_then(|k| present(fields, k.name)),
            customer_phone: customer
                .as_ref()
                .and_then(|k| k.phone)
                .and_then(|key| present(fields, key)),
            installment_plan: extra("installment_plan"),
            installment_bank: extra("installment_bank"),
            bank_code: extra("bank_code"),
            redirect_url: present(fields, "redirect_url"),
        })
    }
}

/// Uniform presence filter: a field counts as present iff its source exists
/// and the trimmed value is non-empty.
fn present(fields: &dyn FieldSource, key: &str) -> Option<String> {
    fields
        .value(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn required(fields: &dyn FieldSource, key: &str) -> Result<String> {
    present(fields, key)
        .ok_or_else(|| CheckoutError::Validation(format!("Missing required field: {key}")))
}
