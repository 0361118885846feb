use crate::core::search::try_search_data;
use crate::domain::model::EntryRole;
use crate::utils::error::Result;
use serde_json::Value;

fn as_text(attribute: &str, value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => items.iter().find_map(Value::as_str).map(str::to_string),
        other => {
            tracing::debug!("Ignoring non-text value for {}: {}", attribute, other);
            None
        }
    }
}

fn search_text(data: &Value, attribute: &str, keyword: Option<&str>) -> Result<Option<String>> {
    Ok(as_text(attribute, try_search_data(data, attribute, keyword)?))
}

/// Key title first, then the main title. An empty key title falls through.
pub fn try_extract_title(data: &Value) -> Result<Option<String>> {
    let key_title = search_text(data, "value", EntryRole::KeyTitle.id_keyword())?
        .filter(|t| !t.is_empty());
    match key_title {
        Some(title) => Ok(Some(title)),
        None => search_text(data, "mainTitle", None),
    }
}

pub fn try_extract_country(data: &Value) -> Result<Option<String>> {
    search_text(data, "label", EntryRole::Country.id_keyword())
}

pub fn try_extract_url(data: &Value) -> Result<Option<String>> {
    search_text(data, "url", None)
}

pub fn extract_title(data: &Value) -> Option<String> {
    try_extract_title(data).unwrap_or_else(|e| {
        tracing::error!("Error getting journal title: {}", e);
        None
    })
}

pub fn extract_country(data: &Value) -> Option<String> {
    try_extract_country(data).unwrap_or_else(|e| {
        tracing::error!("Error getting journal country: {}", e);
        None
    })
}

pub fn extract_url(data: &Value) -> Option<String> {
    try_extract_url(data).unwrap_or_else(|e| {
        tracing::error!("Error getting journal URL: {}", e);
        None
    })
}
