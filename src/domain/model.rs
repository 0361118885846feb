use crate::utils::error::{IssnError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// A checksum-valid ISSN, stored in compact form (`03785955`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Issn {
    compact: String,
}

impl Issn {
    pub fn parse(input: &str) -> Result<Self> {
        crate::core::validator::parse_issn(input)
    }

    /// Caller guarantees `compact` already passed the checksum.
    pub(crate) fn from_validated(compact: String) -> Self {
        Self { compact }
    }

    pub fn compact(&self) -> &str {
        &self.compact
    }

    pub fn check_character(&self) -> char {
        self.compact.chars().last().unwrap_or('0')
    }
}

impl fmt::Display for Issn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", &self.compact[..4], &self.compact[4..])
    }
}

impl FromStr for Issn {
    type Err = IssnError;

    fn from_str(s: &str) -> Result<Self> {
        Issn::parse(s)
    }
}

impl Serialize for Issn {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Issn {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Issn::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Journal metadata assembled from one registry response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssnRecord {
    pub issn: String,
    pub title: Option<String>,
    pub country: Option<String>,
    pub url: Option<String>,
}

impl IssnRecord {
    /// Runs every field extractor; fails only when the response itself is malformed.
    pub fn from_response(issn: impl Into<String>, data: &Value) -> Result<Self> {
        Ok(Self {
            issn: issn.into(),
            title: crate::core::extract::try_extract_title(data)?,
            country: crate::core::extract::try_extract_country(data)?,
            url: crate::core::extract::try_extract_url(data)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.country.is_none() && self.url.is_none()
    }
}

pub const KEY_TITLE_HINT: &str = "KeyTitle";
pub const COUNTRY_HINT: &str = "countries";

/// What a graph entry describes, judged from its `@id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryRole {
    KeyTitle,
    Country,
    Other,
}

impl EntryRole {
    /// Substring of `@id` that marks the role; `Other` has none.
    pub fn id_keyword(self) -> Option<&'static str> {
        match self {
            EntryRole::KeyTitle => Some(KEY_TITLE_HINT),
            EntryRole::Country => Some(COUNTRY_HINT),
            EntryRole::Other => None,
        }
    }
}

/// Borrowed view over one `@graph` entry.
#[derive(Debug, Clone, Copy)]
pub struct GraphEntry<'a> {
    attributes: &'a serde_json::Map<String, Value>,
}

impl<'a> GraphEntry<'a> {
    pub fn new(attributes: &'a serde_json::Map<String, Value>) -> Self {
        Self { attributes }
    }

    /// The `@id` hint; empty when missing or not a string.
    pub fn id_hint(&self) -> &'a str {
        self.attributes
            .get("@id")
            .and_then(Value::as_str)
            .unwrap_or("")
    }

    pub fn role(&self) -> EntryRole {
        let hint = self.id_hint();
        [EntryRole::KeyTitle, EntryRole::Country]
            .into_iter()
            .find(|role| role.id_keyword().is_some_and(|k| hint.contains(k)))
            .unwrap_or(EntryRole::Other)
    }

    pub fn get(&self, attribute: &str) -> Option<&'a Value> {
        self.attributes.get(attribute)
    }

    /// Empty or absent keywords match every entry.
    pub fn matches(&self, attribute: &str, keyword: Option<&str>) -> bool {
        if !self.attributes.contains_key(attribute) {
            return false;
        }
        match keyword {
            None | Some("") => true,
            Some(keyword) => self.id_hint().contains(keyword),
        }
    }
}
