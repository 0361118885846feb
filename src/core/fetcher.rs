use crate::config::RegistryConfig;
use crate::domain::model::Issn;
use crate::domain::ports::RegistryClient;
use crate::utils::error::{IssnError, Result};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde_json::Value;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Blocking client for the per-ISSN registry resource.
#[derive(Debug, Clone)]
pub struct HttpRegistryClient {
    config: RegistryConfig,
    client: Client,
}

impl HttpRegistryClient {
    pub fn new(config: RegistryConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Best-effort fetch: every failure is logged and turned into `None`.
    pub fn fetch_or_none(&self, issn: &str) -> Option<Value> {
        match self.fetch_record(issn) {
            Ok(data) => Some(data),
            Err(e) => {
                log_fetch_error(issn, &e);
                None
            }
        }
    }
}

impl RegistryClient for HttpRegistryClient {
    fn fetch_record(&self, issn: &str) -> Result<Value> {
        Issn::parse(issn)?;

        let url = self.config.url_for(issn)?;
        tracing::debug!("Making registry request to: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| transport_error(e, issn))?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        tracing::debug!(
            "Registry response status: {}, content type: {:?}",
            status,
            content_type
        );

        if status != StatusCode::OK || !content_type.starts_with(JSON_CONTENT_TYPE) {
            return Err(IssnError::UnexpectedResponse {
                status: status.as_u16(),
                content_type: if content_type.is_empty() {
                    "none".to_string()
                } else {
                    content_type
                },
            });
        }

        response.json::<Value>().map_err(|e| transport_error(e, issn))
    }
}

fn transport_error(e: reqwest::Error, issn: &str) -> IssnError {
    if e.is_timeout() {
        IssnError::Timeout {
            issn: issn.to_string(),
        }
    } else {
        IssnError::Http(e)
    }
}

fn log_fetch_error(issn: &str, e: &IssnError) {
    match e {
        IssnError::InvalidLength { .. }
        | IssnError::InvalidFormat
        | IssnError::CheckDigitMismatch { .. } => {
            tracing::warn!("Invalid ISSN provided ({:?}): {}", issn, e);
        }
        IssnError::Timeout { .. } | IssnError::UnexpectedResponse { .. } => {
            tracing::error!("{}", e);
        }
        other => {
            tracing::error!("Error fetching data for ISSN {}: {}", issn, other);
        }
    }
}

/// Fetches the registry record for `issn` with the default registry settings.
///
/// Returns `None` without touching the network when `issn` does not validate,
/// and `None` on any transport or response failure.
pub fn fetch_issn_record(issn: &str) -> Option<Value> {
    match HttpRegistryClient::new(RegistryConfig::default()) {
        Ok(client) => client.fetch_or_none(issn),
        Err(e) => {
            tracing::error!("Failed to build HTTP client: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_issn_never_builds_a_request() {
        // Unroutable template: reaching the network would fail with an Http error instead.
        let config = RegistryConfig::default().with_url_template("http://127.0.0.1:9/{issn}");
        let client = HttpRegistryClient::new(config).unwrap();

        assert!(matches!(
            client.fetch_record("1234-5678"),
            Err(IssnError::CheckDigitMismatch { .. })
        ));
        assert!(client.fetch_or_none("not-an-issn").is_none());
    }

    #[test]
    fn test_default_fetch_rejects_invalid_issn() {
        assert!(fetch_issn_record("0378-595X").is_none());
    }
}
