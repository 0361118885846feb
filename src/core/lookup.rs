use crate::domain::model::{Issn, IssnRecord};
use crate::domain::ports::RegistryClient;
use crate::utils::error::Result;

/// Validate, fetch and extract in one call.
pub struct IssnLookup<C: RegistryClient> {
    client: C,
}

impl<C: RegistryClient> IssnLookup<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn lookup(&self, issn: &str) -> Result<IssnRecord> {
        let parsed = Issn::parse(issn)?;
        tracing::debug!("Looking up ISSN {}", parsed);

        let data = self.client.fetch_record(issn)?;
        let record = IssnRecord::from_response(parsed.to_string(), &data)?;

        if record.is_empty() {
            tracing::warn!("Registry returned no title, country or URL for {}", parsed);
        } else {
            tracing::info!(
                "Found {}: title={:?}, country={:?}",
                parsed,
                record.title,
                record.country
            );
        }
        Ok(record)
    }
}
