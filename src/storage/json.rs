// ============================================================================
// JSON Storage Helpers
// Failure-swallowing parse and typed reads/writes over a StringStore
// ============================================================================

use super::store::StringStore;
use crate::structural::Value;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

/// Parse JSON text into `T`, falling back to `default` on any failure.
///
/// Empty text and malformed JSON both yield the default; parse errors are
/// logged at debug level and never propagate.
///
/// # Example
/// ```ignore
/// let retries: u32 = safe_parse_json("3", 0);
/// let broken: u32 = safe_parse_json("{oops", 0); // 0
/// ```
pub fn safe_parse_json<T: DeserializeOwned>(text: &str, default: T) -> T {
    if text.is_empty() {
        return default;
    }
    match serde_json::from_str(text) {
        Ok(parsed) => parsed,
        Err(error) => {
            debug!(%error, "json parse failed, using default");
            default
        },
    }
}

/// Read and parse the JSON stored under `key`, falling back to `default`
/// when the key is absent or its text does not parse.
pub fn get_item<T, S>(store: &S, key: &str, default: T) -> T
where
    T: DeserializeOwned,
    S: StringStore + ?Sized,
{
    match store.get(key) {
        Some(text) => safe_parse_json(&text, default),
        None => default,
    }
}

/// Serialize `value` as JSON and store it under `key`.
///
/// Returns whether the value both serialized and was accepted by the
/// store; neither failure propagates.
pub fn set_item<T, S>(store: &mut S, key: &str, value: &T) -> bool
where
    T: Serialize,
    S: StringStore + ?Sized,
{
    match serde_json::to_string(value) {
        Ok(text) => store.set(key, &text),
        Err(error) => {
            debug!(%error, "json serialize failed, write skipped");
            false
        },
    }
}

/// Read the structural value stored under `key`, falling back to `default`
/// when the key is absent or unparsable.
pub fn get_value<S>(store: &S, key: &str, default: Value) -> Value
where
    S: StringStore + ?Sized,
{
    match store.get(key) {
        Some(text) => match serde_json::from_str::<serde_json::Value>(&text) {
            Ok(json) => Value::from(json),
            Err(error) => {
                debug!(%error, "stored value unparsable, using default");
                default
            },
        },
        None => default,
    }
}

/// Store a structural value as JSON text under `key`.
///
/// Instants and patterns go through their textual JSON renderings, so a
/// value read back gains text where those kinds were stored.
pub fn set_value<S>(store: &mut S, key: &str, value: &Value) -> bool
where
    S: StringStore + ?Sized,
{
    let json = serde_json::Value::from(value.deep_clone());
    store.set(key, &json.to_string())
}

#[cfg(test)]
mod tests {
    use super::super::store::MemoryStore;
    use super::*;
    use crate::structural::Map;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Settings {
        theme: String,
        retries: u32,
    }

    #[test]
    fn test_safe_parse_json() {
        assert_eq!(safe_parse_json("42", 0), 42);
        assert_eq!(safe_parse_json("", 7), 7);
        assert_eq!(safe_parse_json("{broken", 7), 7);
        assert_eq!(
            safe_parse_json::<Vec<u32>>("[1,2,3]", Vec::new()),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_typed_round_trip() {
        let mut store = MemoryStore::new();
        let settings = Settings {
            theme: "dark".to_string(),
            retries: 3,
        };

        assert!(set_item(&mut store, "settings", &settings));
        let loaded: Settings = get_item(
            &store,
            "settings",
            Settings {
                theme: "light".to_string(),
                retries: 0,
            },
        );
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_get_item_defaults() {
        let mut store = MemoryStore::new();
        assert_eq!(get_item(&store, "missing", 5), 5);

        store.set("corrupt", "{not json");
        assert_eq!(get_item(&store, "corrupt", 5), 5);
    }

    #[test]
    fn test_value_round_trip() {
        let mut store = MemoryStore::new();
        let value = Value::Mapping(Map::new())
            .with_path("user.name", Value::Text("ada".to_string()))
            .with_path("user.tags.0", Value::Text("admin".to_string()))
            .with_path("count", Value::Number(2.0));

        assert!(set_value(&mut store, "state", &value));
        let loaded = get_value(&store, "state", Value::Null);
        assert!(loaded.deep_equal(&value));
    }

    #[test]
    fn test_value_default_when_absent() {
        let store = MemoryStore::new();
        let fallback = Value::Text("fallback".to_string());
        assert_eq!(get_value(&store, "nothing", fallback.deep_clone()), fallback);
    }

    #[test]
    fn test_rejected_write_reports_false() {
        let mut store = MemoryStore::with_quota(4);
        let value = Value::Text("a long piece of text".to_string());
        assert!(!set_value(&mut store, "key", &value));
        assert_eq!(store.get("key"), None);
    }
}
