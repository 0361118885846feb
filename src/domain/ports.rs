use crate::utils::error::Result;
use serde_json::Value;

/// Source of raw registry records. The HTTP client is one implementation;
/// tests substitute canned responses.
pub trait RegistryClient: Send + Sync {
    /// Returns the parsed JSON document for `issn`, validating it first.
    fn fetch_record(&self, issn: &str) -> Result<Value>;
}
