use crate::domain::model::GraphEntry;
use crate::utils::error::{IssnError, Result};
use serde_json::Value;

pub const GRAPH_FIELD: &str = "@graph";

/// Entries of the response's linked-data graph, in document order.
///
/// Errors when the response has no `@graph` array. A non-object entry yields
/// an error item when the iteration reaches it.
pub fn graph_entries(data: &Value) -> Result<impl Iterator<Item = Result<GraphEntry<'_>>>> {
    let graph = data
        .as_object()
        .ok_or_else(|| IssnError::malformed("response is not a JSON object"))?
        .get(GRAPH_FIELD)
        .ok_or_else(|| IssnError::malformed(format!("missing {} field", GRAPH_FIELD)))?
        .as_array()
        .ok_or_else(|| IssnError::malformed(format!("{} is not an array", GRAPH_FIELD)))?;

    Ok(graph.iter().enumerate().map(|(index, item)| {
        item.as_object().map(GraphEntry::new).ok_or_else(|| {
            IssnError::malformed(format!(
                "{} entry {} is not an object: {}",
                GRAPH_FIELD, index, item
            ))
        })
    }))
}

/// First value of `attribute` among entries whose `@id` contains `keyword`.
///
/// `Ok(None)` means the response was well formed but nothing matched. Entries
/// after the first match are not inspected.
pub fn try_search_data<'a>(
    data: &'a Value,
    attribute: &str,
    keyword: Option<&str>,
) -> Result<Option<&'a Value>> {
    for entry in graph_entries(data)? {
        let entry = entry?;
        if entry.matches(attribute, keyword) {
            tracing::debug!(
                "Found {} in {:?} entry {:?}",
                attribute,
                entry.role(),
                entry.id_hint()
            );
            return Ok(entry.get(attribute));
        }
    }
    Ok(None)
}

/// Best-effort form of [`try_search_data`]: a malformed response is logged and yields `None`.
pub fn search_data(data: &Value, attribute: &str, keyword: Option<&str>) -> Option<Value> {
    match try_search_data(data, attribute, keyword) {
        Ok(found) => found.cloned(),
        Err(e) => {
            tracing::error!("Error searching data: {}", e);
            None
        }
    }
}
