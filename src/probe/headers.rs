//! Case-insensitive response header map.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize, Serializer};

/// Response headers keyed by lowercase header name.
///
/// Keys are lowercased on insertion and later inserts replace earlier ones
/// (last write wins). Values are kept verbatim; structured header syntax is
/// never parsed. A `BTreeMap` keeps iteration (and therefore serialized
/// output) in a stable order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "BTreeMap<String, String>")]
pub struct ResponseHeaders(BTreeMap<String, String>);

impl ResponseHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a header, replacing any value stored under the same name in
    /// any letter case.
    pub fn insert(&mut self, name: &str, value: impl Into<String>) {
        self.0.insert(name.to_ascii_lowercase(), value.into());
    }

    /// Returns the raw value for `name`, matched case-insensitively.
    pub fn get(&self, name: &str) -> Option<&str> {
        if name.bytes().any(|b| b.is_ascii_uppercase()) {
            self.0.get(&name.to_ascii_lowercase()).map(String::as_str)
        } else {
            self.0.get(name).map(String::as_str)
        }
    }

    /// Returns the value for `name` only when it is non-empty.
    pub fn get_non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|v| !v.is_empty())
    }

    /// A header counts as present when its key matches and its value is non-empty.
    pub fn has(&self, name: &str) -> bool {
        self.get_non_empty(name).is_some()
    }

    /// Case-sensitive substring test on a present header's value.
    pub fn value_contains(&self, name: &str, needle: &str) -> bool {
        self.get_non_empty(name)
            .map(|v| v.contains(needle))
            .unwrap_or(false)
    }

    /// Case-insensitive substring test on a present header's value.
    pub fn value_contains_ignore_case(&self, name: &str, needle: &str) -> bool {
        self.get_non_empty(name)
            .map(|v| v.to_lowercase().contains(&needle.to_lowercase()))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Converts a `reqwest` header map.
    ///
    /// Multi-valued headers collapse to their last value. Non-UTF-8 bytes
    /// are replaced lossily rather than dropping the header.
    pub fn from_header_map(map: &reqwest::header::HeaderMap) -> Self {
        let mut headers = Self::new();
        for (name, value) in map {
            headers.insert(
                name.as_str(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            );
        }
        headers
    }
}

impl Serialize for ResponseHeaders {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<K, V> FromIterator<(K, V)> for ResponseHeaders
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = Self::new();
        for (name, value) in iter {
            headers.insert(name.as_ref(), value);
        }
        headers
    }
}

impl From<BTreeMap<String, String>> for ResponseHeaders {
    fn from(map: BTreeMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

/// Keys are folded in sorted order so that two keys differing only in case
/// resolve the same way on every run.
impl From<&HashMap<String, String>> for ResponseHeaders {
    fn from(map: &HashMap<String, String>) -> Self {
        let mut entries: Vec<_> = map.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
            .into_iter()
            .map(|(k, v)| (k.as_str(), v.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_lowercased() {
        let mut headers = ResponseHeaders::new();
        headers.insert("CF-Ray", "abc");
        assert_eq!(headers.get("cf-ray"), Some("abc"));
        assert_eq!(headers.get("CF-RAY"), Some("abc"));
        assert_eq!(headers.iter().next(), Some(("cf-ray", "abc")));
    }

    #[test]
    fn test_last_write_wins() {
        let headers: ResponseHeaders =
            vec![("X-Cache", "MISS"), ("x-cache", "HIT")].into_iter().collect();
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("x-cache"), Some("HIT"));
    }

    #[test]
    fn test_empty_value_is_not_present() {
        let mut headers = ResponseHeaders::new();
        headers.insert("cf-ray", "");
        assert_eq!(headers.get("cf-ray"), Some(""));
        assert!(!headers.has("cf-ray"));
        assert!(!headers.value_contains("cf-ray", ""));
    }

    #[test]
    fn test_value_contains_case_handling() {
        let mut headers = ResponseHeaders::new();
        headers.insert("server", "CloudFlare");
        assert!(!headers.value_contains("server", "cloudflare"));
        assert!(headers.value_contains_ignore_case("server", "cloudflare"));
        assert!(!headers.value_contains_ignore_case("via", "cloudflare"));
    }

    #[test]
    fn test_from_hashmap_is_deterministic() {
        let mut map = HashMap::new();
        map.insert("CF-Ray".to_string(), "upper".to_string());
        map.insert("cf-ray".to_string(), "lower".to_string());
        // "CF-Ray" sorts before "cf-ray", so the lowercase entry is written last
        for _ in 0..10 {
            let headers = ResponseHeaders::from(&map);
            assert_eq!(headers.get("cf-ray"), Some("lower"));
        }
    }

    #[test]
    fn test_from_reqwest_header_map() {
        let mut map = reqwest::header::HeaderMap::new();
        map.insert("x-amz-cf-id", "abc".parse().unwrap());
        map.append("set-cookie", "a=1".parse().unwrap());
        map.append("set-cookie", "b=2".parse().unwrap());
        let headers = ResponseHeaders::from_header_map(&map);
        assert_eq!(headers.get("x-amz-cf-id"), Some("abc"));
        assert_eq!(headers.get("set-cookie"), Some("b=2"));
    }

    #[test]
    fn test_serde_normalizes_keys() {
        let headers: ResponseHeaders =
            serde_json::from_str(r#"{"Server":"nginx","X-Cache":"HIT"}"#).unwrap();
        assert_eq!(headers.get("server"), Some("nginx"));
        let json = serde_json::to_string(&headers).unwrap();
        assert_eq!(json, r#"{"server":"nginx","x-cache":"HIT"}"#);
    }
}
