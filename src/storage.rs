//! Local Storage Lists
//!
//! Favorites and cart are persisted as JSON arrays of item ids.
//! Reads never fail from the caller's point of view: anything missing
//! or malformed comes back as an empty list.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("storage access failed for key `{0}`")]
    Access(String),
    #[error("invalid JSON under `{key}`: {source}")]
    Json {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("value under `{0}` is not an array")]
    NotAnArray(String),
}

fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .ok_or(StorageError::Unavailable)
}

/// Parse a stored id list. `None` (key absent) is an empty list.
pub fn parse_id_list(key: &str, raw: Option<&str>) -> Result<Vec<String>, StorageError> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };

    let value: Value = serde_json::from_str(raw).map_err(|source| StorageError::Json {
        key: key.to_string(),
        source,
    })?;

    match value {
        Value::Array(entries) => Ok(entries.into_iter().map(id_text).collect()),
        _ => Err(StorageError::NotAnArray(key.to_string())),
    }
}

/// Ids are opaque; strings are kept as-is, anything else keeps its JSON text
fn id_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Raw stored text under `key`; `None` when the key is absent
pub fn read_raw(key: &str) -> Result<Option<String>, StorageError> {
    local_storage()?
        .get_item(key)
        .map_err(|_| StorageError::Access(key.to_string()))
}

/// Parse, degrading to an empty list on malformed input
pub fn parse_id_list_lossy(key: &str, raw: Option<&str>) -> Vec<String> {
    parse_id_list(key, raw).unwrap_or_else(|err| degrade(key, err))
}

/// Raw text under `key`, or `None` (logged) when storage cannot be read
pub fn read_raw_lossy(key: &str) -> Option<String> {
    read_raw(key).unwrap_or_else(|err| {
        log::warn!("[STORAGE] {}; treating `{}` as empty", err, key);
        None
    })
}

fn degrade(key: &str, err: StorageError) -> Vec<String> {
    log::warn!("[STORAGE] {}; treating `{}` as empty", err, key);
    Vec::new()
}

pub fn write_id_list(key: &str, ids: &[String]) -> Result<(), StorageError> {
    let storage = local_storage()?;
    let raw = serde_json::to_string(ids).map_err(|source| StorageError::Json {
        key: key.to_string(),
        source,
    })?;
    storage
        .set_item(key, &raw)
        .map_err(|_| StorageError::Access(key.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_key_is_empty() {
        assert!(parse_id_list("cart", None).unwrap().is_empty());
    }

    #[test]
    fn test_string_and_number_ids() {
        let ids = parse_id_list("cart", Some(r#"["sku-1", 42, "sku-1"]"#)).unwrap();
        assert_eq!(ids, vec!["sku-1", "42", "sku-1"]);
    }

    #[test]
    fn test_malformed_json_is_error() {
        let err = parse_id_list("favorites", Some("[1, 2")).unwrap_err();
        assert!(matches!(err, StorageError::Json { .. }));
    }

    #[test]
    fn test_non_array_is_error() {
        let err = parse_id_list("favorites", Some(r#"{"a": 1}"#)).unwrap_err();
        assert!(matches!(err, StorageError::NotAnArray(ref k) if k == "favorites"));
        assert!(parse_id_list("favorites", Some("\"abc\"")).is_err());
    }

    #[test]
    fn test_lossy_parse_degrades_to_empty() {
        assert_eq!(parse_id_list_lossy("cart", Some("not json")).len(), 0);
        assert_eq!(parse_id_list_lossy("cart", Some("42")).len(), 0);
        assert_eq!(parse_id_list_lossy("cart", None).len(), 0);
        assert_eq!(parse_id_list_lossy("cart", Some(r#"["a", 7]"#)), vec!["a", "7"]);
    }

    #[test]
    fn test_empty_array() {
        assert!(parse_id_list("cart", Some("[]")).unwrap().is_empty());
    }
}
