use crate::domain::ports::{GatewayReply, PaymentGateway};
use crate::error::{CheckoutError, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// [`PaymentGateway`] adapter backed by a `reqwest` client.
///
/// Posts JSON to `base_url` + endpoint path. Network and body-parse
/// failures both surface as [`CheckoutError::Transport`]; non-2xx statuses
/// are not errors here, they are carried in the reply for the classifier.
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpGateway {
    pub fn new(base_url: Url) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|error| CheckoutError::Transport(error.to_string()))?;
        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl PaymentGateway for HttpGateway {
    async fn post(&self, path: &str, body: &Value) -> Result<GatewayReply> {
        let url = self.base_url.join(path)?;
        debug!(%url, "POST");

        let response = self
            .client
            .post(url.clone())
            .json(body)
            .send()
            .await
            .map_err(|error| {
                warn!(%url, error = %error, "request failed");
                CheckoutError::Transport(error.to_string())
            })?;

        let ok = response.status().is_success();
        let body: Value = response
            .json()
            .await
            .map_err(|error| CheckoutError::Transport(error.to_string()))?;

        Ok(GatewayReply { ok, body })
    }
}
