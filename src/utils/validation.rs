use crate::utils::error::{IssnError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(IssnError::ConfigError {
            field: field_name.to_string(),
            message: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(IssnError::ConfigError {
                field: field_name.to_string(),
                message: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(IssnError::ConfigError {
            field: field_name.to_string(),
            message: format!("Invalid URL format: {}", e),
        }),
    }
}

/// A template must carry `placeholder` and still be a valid URL once it is filled in.
pub fn validate_url_template(field_name: &str, template: &str, placeholder: &str) -> Result<()> {
    if !template.contains(placeholder) {
        return Err(IssnError::ConfigError {
            field: field_name.to_string(),
            message: format!("Template must contain the {} placeholder", placeholder),
        });
    }
    validate_url(field_name, &template.replace(placeholder, "0378-5955"))
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(IssnError::ConfigError {
            field: field_name.to_string(),
            message: format!("Value must be at least {}, got {}", min_value, value),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("url_template", "https://portal.issn.org").is_ok());
        assert!(validate_url("url_template", "http://localhost:8080").is_ok());
        assert!(validate_url("url_template", "").is_err());
        assert!(validate_url("url_template", "invalid-url").is_err());
        assert!(validate_url("url_template", "ftp://portal.issn.org").is_err());
    }

    #[test]
    fn test_validate_url_template() {
        assert!(validate_url_template(
            "url_template",
            "https://portal.issn.org/resource/ISSN/{issn}?format=json",
            "{issn}"
        )
        .is_ok());
        assert!(validate_url_template(
            "url_template",
            "https://portal.issn.org/resource/ISSN/?format=json",
            "{issn}"
        )
        .is_err());
        assert!(validate_url_template("url_template", "portal/{issn}", "{issn}").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("timeout_seconds", 30, 1).is_ok());
        assert!(validate_positive_number("timeout_seconds", 0, 1).is_err());
    }
}
