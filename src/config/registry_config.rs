use crate::utils::error::{IssnError, Result};
use crate::utils::validation::{validate_positive_number, validate_url_template, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;
use url::Url;

pub const ISSN_PLACEHOLDER: &str = "{issn}";
pub const DEFAULT_URL_TEMPLATE: &str = "https://portal.issn.org/resource/ISSN/{issn}?format=json";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

const ENV_VAR_PATTERN: &str = r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}";
static ENV_VAR_REGEX: OnceLock<Regex> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Per-ISSN resource URL; `{issn}` is replaced by the requested ISSN.
    pub url_template: String,
    pub timeout_seconds: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            url_template: DEFAULT_URL_TEMPLATE.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    registry: RegistryConfig,
}

impl RegistryConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses the `[registry]` table; missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        let file: ConfigFile =
            toml::from_str(&processed_content).map_err(|e| IssnError::ConfigError {
                field: "toml_parsing".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;
        Ok(file.registry)
    }

    /// Expands `${VAR}` from the environment. Unset variables stay literal so
    /// the later URL validation reports them.
    fn substitute_env_vars(content: &str) -> String {
        let pattern = ENV_VAR_REGEX.get_or_init(|| {
            Regex::new(ENV_VAR_PATTERN).expect("ENV_VAR_PATTERN is a valid regex pattern")
        });

        pattern
            .replace_all(content, |caps: &Captures| match std::env::var(&caps[1]) {
                Ok(value) => value,
                Err(_) => {
                    tracing::debug!("Environment variable {} is not set", &caps[1]);
                    caps[0].to_string()
                }
            })
            .into_owned()
    }

    pub fn with_url_template(mut self, url_template: impl Into<String>) -> Self {
        self.url_template = url_template.into();
        self
    }

    pub fn with_timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Fills the template with `issn` exactly as given (surrounding whitespace trimmed).
    pub fn url_for(&self, issn: &str) -> Result<Url> {
        let url = self.url_template.replace(ISSN_PLACEHOLDER, issn.trim());
        Ok(Url::parse(&url)?)
    }
}

impl Validate for RegistryConfig {
    fn validate(&self) -> Result<()> {
        validate_url_template("registry.url_template", &self.url_template, ISSN_PLACEHOLDER)?;
        validate_positive_number("registry.timeout_seconds", self.timeout_seconds, 1)?;
        Ok(())
    }
}
