use anyhow::Context;
use clap::Parser;
use issn_tools::utils::logger::{self, LogFormat};
use issn_tools::utils::validation::Validate;
use issn_tools::{is_valid_issn, normalize, CliConfig, HttpRegistryClient, IssnLookup, IssnRecord};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    let log_format = if config.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(config.verbose, log_format);
    tracing::debug!("CLI config: {:?}", config);

    let failures = if config.validate_only {
        validate_all(&config)
    } else {
        let registry_config = match config.registry_config() {
            Ok(registry_config) => registry_config,
            Err(e) => {
                tracing::error!("❌ Failed to load configuration: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(2);
            }
        };
        if let Err(e) = registry_config.validate() {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }

        let client =
            HttpRegistryClient::new(registry_config).context("failed to build HTTP client")?;
        lookup_all(&config, &IssnLookup::new(client))?
    };

    if failures > 0 {
        tracing::debug!("{} of {} ISSNs failed", failures, config.issns.len());
        std::process::exit(1);
    }
    Ok(())
}

fn validate_all(config: &CliConfig) -> usize {
    let mut failures = 0;
    for issn in &config.issns {
        let valid = is_valid_issn(issn);
        if !valid {
            failures += 1;
        }
        if config.json {
            println!(
                "{}",
                serde_json::json!({ "issn": issn, "normalized": normalize(issn), "valid": valid })
            );
        } else {
            println!("{}: {}", issn, if valid { "valid" } else { "invalid" });
        }
    }
    failures
}

fn lookup_all(config: &CliConfig, lookup: &IssnLookup<HttpRegistryClient>) -> anyhow::Result<usize> {
    let mut failures = 0;
    for issn in &config.issns {
        match lookup.lookup(issn) {
            Ok(record) => {
                if config.json {
                    println!("{}", serde_json::to_string(&record)?);
                } else {
                    print_record(&record);
                }
            }
            Err(e) => {
                failures += 1;
                tracing::error!("❌ {} failed: {} (Category: {:?})", issn, e, e.category());
                eprintln!("❌ {}: {}", issn, e);
            }
        }
    }
    Ok(failures)
}

fn print_record(record: &IssnRecord) {
    let show = |field: &Option<String>| field.clone().unwrap_or_else(|| "-".to_string());
    println!("{}", record.issn);
    println!("  title:   {}", show(&record.title));
    println!("  country: {}", show(&record.country));
    println!("  url:     {}", show(&record.url));
}
