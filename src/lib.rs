pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::RegistryConfig;
pub use crate::core::extract::{
    extract_country, extract_title, extract_url, try_extract_country, try_extract_title,
    try_extract_url,
};
pub use crate::core::fetcher::{fetch_issn_record, HttpRegistryClient};
pub use crate::core::lookup::IssnLookup;
pub use crate::core::search::{search_data, try_search_data};
pub use crate::core::validator::{is_valid_issn, normalize};
pub use crate::domain::model::{Issn, IssnRecord};
pub use crate::domain::ports::RegistryClient;
pub use crate::utils::error::{IssnError, Result};
