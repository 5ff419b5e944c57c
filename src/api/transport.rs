use std::time::Duration;

use tracing::{debug, instrument, warn};

use crate::{GantryError, Result};

use super::{OperationRequest, RemoteEnvelope};

/// Executes operation requests against a remote endpoint.
///
/// One call is one blocking round trip. Implementations never retry and
/// never cache; failures are returned to the caller as they happened.
pub trait Transport {
    /// Sends `request` and decodes the response envelope.
    ///
    /// # Errors
    /// * `GantryError::Transport` - Connection, framing or HTTP failure
    /// * `GantryError::Remote` - The server returned a non-empty error list,
    ///   alongside or instead of data
    fn execute(&self, request: &OperationRequest) -> Result<RemoteEnvelope>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &OperationRequest) -> Result<RemoteEnvelope> {
        (**self).execute(request)
    }
}

/// Blocking HTTP transport posting JSON operation bodies.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    endpoint: String,
    agent: ureq::Agent,
    access_token: Option<String>,
}

impl HttpTransport {
    /// Creates a transport for `endpoint`.
    ///
    /// `timeout` bounds the whole request when set; otherwise the agent's
    /// defaults apply.
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Self {
        let mut builder = ureq::AgentBuilder::new();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Self {
            endpoint: endpoint.into(),
            agent: builder.build(),
            access_token: None,
        }
    }

    /// Sends `Authorization: Bearer <token>` with every request.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// The endpoint requests are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn transport_error(&self, details: impl ToString) -> GantryError {
        GantryError::Transport {
            endpoint: self.endpoint.clone(),
            details: details.to_string(),
        }
    }

    fn decode(&self, body: &str) -> Result<RemoteEnvelope> {
        RemoteEnvelope::from_body(body).map_err(|e| self.transport_error(e))
    }
}

impl Transport for HttpTransport {
    #[instrument(skip(self, request), fields(endpoint = %self.endpoint, kind = request.kind().as_str()))]
    fn execute(&self, request: &OperationRequest) -> Result<RemoteEnvelope> {
        let mut http_request = self
            .agent
            .post(&self.endpoint)
            .set("Content-Type", "application/json");

        if let Some(token) = &self.access_token {
            http_request = http_request.set("Authorization", &format!("Bearer {token}"));
        }

        debug!(variables = request.variables().len(), "sending operation");

        match http_request.send_json(request.to_body()) {
            Ok(response) => {
                let body = response
                    .into_string()
                    .map_err(|e| self.transport_error(e))?;
                let envelope = self.decode(&body)?;
                envelope.check_errors()?;
                Ok(envelope)
            }
            Err(ureq::Error::Status(status, response)) => {
                let body = response.into_string().unwrap_or_default();

                match RemoteEnvelope::from_body(&body) {
                    Ok(envelope) if !envelope.errors.is_empty() => {
                        warn!(status, "remote rejected operation");
                        Err(GantryError::Remote {
                            messages: envelope.error_messages(),
                        })
                    }
                    _ => Err(self.transport_error(format!("HTTP status {status}"))),
                }
            }
            Err(ureq::Error::Transport(transport)) => Err(self.transport_error(transport)),
        }
    }
}
