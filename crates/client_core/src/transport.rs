//! Outbound delivery of submitted task messages.

use async_trait::async_trait;
use reqwest::Client;
use shared::protocol::{SubmitMessageRequest, SUBMIT_MESSAGE_PATH};
use tracing::{debug, warn};
use url::Url;

use crate::error::TransportError;

#[async_trait]
pub trait MessageTransport: Send + Sync {
    /// Sends one message and returns the raw response body on a 2xx status.
    async fn submit_message(&self, request: &SubmitMessageRequest)
        -> Result<String, TransportError>;
}

#[derive(Debug, Clone)]
pub struct HttpMessageTransport {
    http: Client,
    endpoint: Url,
}

impl HttpMessageTransport {
    pub fn new(server_url: &str) -> Result<Self, TransportError> {
        Self::with_client(Client::new(), server_url)
    }

    pub fn with_client(http: Client, server_url: &str) -> Result<Self, TransportError> {
        let invalid = |source| TransportError::InvalidEndpoint {
            url: server_url.to_string(),
            source,
        };
        let endpoint = Url::parse(server_url)
            .and_then(|base| base.join(SUBMIT_MESSAGE_PATH))
            .map_err(invalid)?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl MessageTransport for HttpMessageTransport {
    async fn submit_message(
        &self,
        request: &SubmitMessageRequest,
    ) -> Result<String, TransportError> {
        debug!(endpoint = %self.endpoint, "posting task message");
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .and_then(|res| res.error_for_status());
        let response = match response {
            Ok(response) => response,
            Err(err) => {
                warn!(endpoint = %self.endpoint, "task message request failed: {err}");
                return Err(err.into());
            }
        };
        Ok(response.text().await?)
    }
}

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod tests;
