use serde::Serialize;
use std::collections::BTreeMap;

/// The parameters of a single API request.
///
/// A `RequestParams` is built fresh for every call: the session defaults go in first,
/// per-call parameters override them, and the action is set last.
/// It serializes as a flat map, for `reqwest` query strings and form bodies alike.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RequestParams {
    params: BTreeMap<String, String>,
}

impl RequestParams {
    /// Returns a copy with `key` set to `value`, replacing any earlier value.
    pub fn with<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Returns a copy with all `pairs` set, later pairs winning over earlier ones.
    pub fn with_all<I, K, V>(self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        pairs
            .into_iter()
            .fold(self, |params, (key, value)| params.with(key, value))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(|s| s.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_order() {
        let defaults = RequestParams::default()
            .with("format", "json")
            .with("maxlag", "5");
        let params = defaults
            .clone()
            .with_all([("maxlag", "10"), ("action", "query")])
            .with("action", "wbgetentities");
        assert_eq!(params.get("format"), Some("json"));
        assert_eq!(params.get("maxlag"), Some("10"));
        assert_eq!(params.get("action"), Some("wbgetentities"));
        assert_eq!(params.len(), 3);
        // The defaults are untouched
        assert_eq!(defaults.get("maxlag"), Some("5"));
        assert_eq!(defaults.get("action"), None);
    }

    #[test]
    fn test_serialize_flat() {
        let params = RequestParams::default().with("b", "2").with("a", "1");
        assert_eq!(
            serde_json::to_string(&params).unwrap(),
            r#"{"a":"1","b":"2"}"#
        );
        let pairs: Vec<(&str, &str)> = params.iter().collect();
        assert_eq!(pairs, vec![("a", "1"), ("b", "2")]);
    }

    #[test]
    fn test_empty() {
        let params = RequestParams::default();
        assert!(params.is_empty());
        assert_eq!(params.get("action"), None);
    }
}
