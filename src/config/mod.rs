pub mod registry_config;

pub use registry_config::RegistryConfig;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
mod cli {
    use super::RegistryConfig;
    use crate::utils::error::Result;
    use clap::Parser;
    use std::path::PathBuf;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "issn")]
    #[command(about = "Validate ISSNs and look up journal metadata on the ISSN portal")]
    pub struct CliConfig {
        /// ISSNs to check, with or without the hyphen
        #[arg(required = true)]
        pub issns: Vec<String>,

        #[arg(long, help = "Only check the checksum, do not contact the registry")]
        pub validate_only: bool,

        #[arg(long, help = "TOML file with a [registry] table")]
        pub config: Option<PathBuf>,

        #[arg(long, help = "Registry URL template containing {issn}")]
        pub url_template: Option<String>,

        #[arg(long, help = "Request timeout in seconds")]
        pub timeout_seconds: Option<u64>,

        #[arg(long, help = "Print records as JSON lines")]
        pub json: bool,

        #[arg(long, help = "Emit logs as JSON")]
        pub json_logs: bool,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl CliConfig {
        /// Config file (or defaults) with command-line overrides applied on top.
        pub fn registry_config(&self) -> Result<RegistryConfig> {
            let mut config = match &self.config {
                Some(path) => RegistryConfig::from_file(path)?,
                None => RegistryConfig::default(),
            };
            if let Some(template) = &self.url_template {
                config = config.with_url_template(template.clone());
            }
            if let Some(timeout) = self.timeout_seconds {
                config = config.with_timeout_seconds(timeout);
            }
            Ok(config)
        }
    }

}
