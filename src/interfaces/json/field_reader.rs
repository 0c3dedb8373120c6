use crate::error::{CheckoutError, Result};
use crate::infrastructure::in_memory::MapFieldSource;
use std::collections::HashMap;
use std::io::Read;

/// Reads a form field snapshot from a JSON source.
///
/// The expected shape is a flat object of string values, one entry per form
/// field, e.g. `{"merchant_id": "MERCH-12345", "amount": "100.00"}`.
/// Numbers and booleans are accepted and stringified; nested values are
/// rejected.
pub struct FieldFileReader<R: Read> {
    source: R,
}

impl<R: Read> FieldFileReader<R> {
    /// Creates a new `FieldFileReader` from any `Read` source (e.g. File, Stdin).
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Parses the source into a [`MapFieldSource`].
    pub fn read_fields(mut self) -> Result<MapFieldSource> {
        let mut raw = String::new();
        self.source.read_to_string(&mut raw)?;

        let value: serde_json::Value = serde_json::from_str(&raw)?;
        let object = value.as_object().ok_or_else(|| {
            CheckoutError::Validation("Field file must be a JSON object".to_string())
        })?;

        let mut fields = HashMap::new();
        for (key, value) in object {
            let text = match value {
                serde_json::Value::String(text) => text.clone(),
                serde_json::Value::Number(number) => number.to_string(),
                serde_json::Value::Bool(flag) => flag.to_string(),
                serde_json::Value::Null => continue,
                _ => {
                    return Err(CheckoutError::Validation(format!(
                        "Field {key} must be a scalar value"
                    )));
                }
            };
            fields.insert(key.clone(), text);
        }

        Ok(fields.into())
    }
}
