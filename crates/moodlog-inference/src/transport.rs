//! Authenticated POST transport with endpoint fallback
//!
//! Every request walks the configured endpoints in order. Per endpoint the
//! response status is classified into a small set of states:
//!
//! - success: parse and return the JSON body
//! - model loading (503): wait once, retry the same endpoint once
//! - unsupported (404/410): skip to the next endpoint silently
//! - unauthorized (401): stop, no other endpoint is tried
//! - anything else, or a network failure: remember the error, try the next
//!
//! When the list is exhausted the last remembered error is returned.

use crate::config::InferenceConfig;
use moodlog_core::{Credential, Disposition, Error, Result};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Header asking the service to block until a cold model is loaded
pub const WAIT_FOR_MODEL_HEADER: &str = "X-Wait-For-Model";

/// One base URL in the ranked endpoint list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base_url: String,
}

impl Endpoint {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a resource path such as `/models/gpt2`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// How a response status is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusClass {
    Success,
    ModelLoading,
    Unsupported,
    Unauthorized,
    Failed,
}

impl From<StatusCode> for StatusClass {
    fn from(status: StatusCode) -> Self {
        match status {
            s if s.is_success() => Self::Success,
            StatusCode::SERVICE_UNAVAILABLE => Self::ModelLoading,
            StatusCode::NOT_FOUND | StatusCode::GONE => Self::Unsupported,
            StatusCode::UNAUTHORIZED => Self::Unauthorized,
            _ => Self::Failed,
        }
    }
}

/// HTTP transport to the inference service
pub struct Transport {
    client: Client,
    endpoints: Vec<Endpoint>,
    credential: Credential,
    retry_delay: Duration,
}

impl Transport {
    /// Create a transport from configuration and a validated credential
    pub fn new(config: &InferenceConfig, credential: Credential) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(|e| Error::config(format!("failed to build HTTP client: {e}")))?;

        Self::with_client(client, &config.endpoints, credential, config.retry_delay())
    }

    /// Create a transport around an existing HTTP client
    pub fn with_client(
        client: Client,
        endpoints: &[String],
        credential: Credential,
        retry_delay: Duration,
    ) -> Result<Self> {
        if endpoints.is_empty() {
            return Err(Error::config("at least one inference endpoint is required"));
        }

        Ok(Self {
            client,
            endpoints: endpoints.iter().map(Endpoint::new).collect(),
            credential,
            retry_delay,
        })
    }

    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }

    /// POST `payload` to `path` on the first endpoint that answers
    pub async fn post<P>(&self, path: &str, payload: &P) -> Result<Value>
    where
        P: Serialize + ?Sized,
    {
        let mut last_error: Option<Error> = None;

        for endpoint in &self.endpoints {
            let url = endpoint.url(path);
            let start = Instant::now();
            let result = self.post_endpoint(&url, payload).await;

            metrics::histogram!("moodlog_inference_latency_us")
                .record(start.elapsed().as_micros() as f64);

            match result {
                Ok(body) => {
                    record_outcome(endpoint, "success");
                    debug!(url = %url, "inference request succeeded");
                    return Ok(body);
                }
                Err(err) => match err.disposition() {
                    Disposition::Fatal => {
                        record_outcome(endpoint, "fatal");
                        warn!(url = %url, error = %err, "inference request rejected, not trying other endpoints");
                        return Err(err);
                    }
                    Disposition::Skip => {
                        record_outcome(endpoint, "skipped");
                        debug!(url = %url, "endpoint does not serve this resource, trying next");
                    }
                    Disposition::Advance => {
                        record_outcome(endpoint, "failed");
                        warn!(url = %url, error = %err, "inference request failed, trying next endpoint");
                        last_error = Some(err);
                    }
                },
            }
        }

        Err(last_error.unwrap_or(Error::Unreachable))
    }

    /// One endpoint, including the single retry for a loading model
    async fn post_endpoint<P>(&self, url: &str, payload: &P) -> Result<Value>
    where
        P: Serialize + ?Sized,
    {
        let mut response = self.send(url, payload).await?;

        if StatusClass::from(response.status()) == StatusClass::ModelLoading {
            info!(url = %url, delay = ?self.retry_delay, "model is loading, retrying once");
            tokio::time::sleep(self.retry_delay).await;
            response = self.send(url, payload).await?;
        }

        let status = response.status();
        match StatusClass::from(status) {
            StatusClass::Success => {
                let text = response
                    .text()
                    .await
                    .map_err(|e| Error::network(format!("{url}: {e}")))?;
                serde_json::from_str(&text)
                    .map_err(|e| Error::invalid_response(format!("{url}: {e}")))
            }
            StatusClass::Unsupported => Err(Error::NotFound {
                url: url.to_string(),
            }),
            StatusClass::ModelLoading | StatusClass::Unauthorized | StatusClass::Failed => {
                let body = response.text().await.unwrap_or_default();
                Err(Error::from_status(status.as_u16(), url, body))
            }
        }
    }

    async fn send<P>(&self, url: &str, payload: &P) -> Result<Response>
    where
        P: Serialize + ?Sized,
    {
        self.client
            .post(url)
            .header(AUTHORIZATION, self.credential.bearer())
            .header(CONTENT_TYPE, "application/json")
            .header(WAIT_FOR_MODEL_HEADER, "true")
            .json(payload)
            .send()
            .await
            .map_err(|e| Error::network(format!("{url}: {e}")))
    }
}

fn record_outcome(endpoint: &Endpoint, outcome: &'static str) {
    metrics::counter!(
        "moodlog_inference_requests_total",
        "endpoint" => endpoint.base_url().to_string(),
        "outcome" => outcome
    )
    .increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_joins_without_double_slash() {
        let endpoint = Endpoint::new("https://example.test/hf-inference/");
        assert_eq!(
            endpoint.url("/models/gpt2"),
            "https://example.test/hf-inference/models/gpt2"
        );
    }

    #[test]
    fn test_status_classes() {
        assert_eq!(StatusClass::from(StatusCode::OK), StatusClass::Success);
        assert_eq!(
            StatusClass::from(StatusCode::SERVICE_UNAVAILABLE),
            StatusClass::ModelLoading
        );
        assert_eq!(StatusClass::from(StatusCode::GONE), StatusClass::Unsupported);
        assert_eq!(
            StatusClass::from(StatusCode::UNAUTHORIZED),
            StatusClass::Unauthorized
        );
        assert_eq!(
            StatusClass::from(StatusCode::TOO_MANY_REQUESTS),
            StatusClass::Failed
        );
    }

    #[test]
    fn test_empty_endpoint_list_is_rejected() {
        let credential = Credential::parse("hf_test").unwrap();
        let result = Transport::with_client(Client::new(), &[], credential, Duration::ZERO);
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
