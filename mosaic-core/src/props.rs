//! The opaque key-value bag passed to middleware and render handlers.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A JSON object of props.
///
/// Props are opaque to the framework. The only operation it performs on them
/// is [`Props::merged`], the key union applied at the end of the middleware
/// chain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Props(Map<String, Value>);

impl Props {
    /// Create an empty props bag.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Build props from a JSON value. Returns `None` unless it is an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// Get a prop by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Get a boolean prop. Non-boolean values read as `None`.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.0.get(key).and_then(Value::as_bool)
    }

    /// Get a string prop. Non-string values read as `None`.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Insert a prop, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Insert a prop and return `self`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Remove a prop.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    /// Check whether a prop is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of props.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether the bag is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the keys.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    /// Iterate over key-value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Key union of `self` and `overrides`. Keys in `overrides` win.
    pub fn merged(&self, overrides: &Props) -> Props {
        let mut merged = self.0.clone();
        for (key, value) in &overrides.0 {
            merged.insert(key.clone(), value.clone());
        }
        Props(merged)
    }

    /// Borrow the underlying JSON map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Convert into the underlying JSON map.
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    /// Convert into a JSON object value.
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for Props {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Props> for Value {
    fn from(props: Props) -> Self {
        props.into_value()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Props {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl IntoIterator for Props {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Build a [`Props`] bag from `key => value` pairs.
///
/// # Example
///
/// ```rust
/// use mosaic_core::props;
///
/// let props = props! { "title" => "test", "count" => 3 };
/// assert_eq!(props.get_str("title"), Some("test"));
/// ```
#[macro_export]
macro_rules! props {
    () => { $crate::Props::new() };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut props = $crate::Props::new();
        $(
            props.insert($key, $value);
        )+
        props
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_is_key_union() {
        let component = props! { "title" => "test" };
        let middleware = props! { "skipRender" => true };

        let merged = component.merged(&middleware);

        assert_eq!(
            merged.into_value(),
            json!({ "title": "test", "skipRender": true })
        );
    }

    #[test]
    fn test_merge_overrides_win() {
        let component = props! { "title" => "component", "kept" => 1 };
        let middleware = props! { "title" => "middleware" };

        let merged = component.merged(&middleware);

        assert_eq!(merged.get_str("title"), Some("middleware"));
        assert_eq!(merged.get("kept"), Some(&json!(1)));
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_from_value_rejects_non_objects() {
        assert!(Props::from_value(json!([1, 2])).is_none());
        assert!(Props::from_value(json!("title")).is_none());
        assert_eq!(
            Props::from_value(json!({ "a": true })).and_then(|p| p.get_bool("a")),
            Some(true)
        );
    }

    #[test]
    fn test_typed_getters_ignore_other_types() {
        let props = props! { "flag" => "yes", "name" => false };
        assert_eq!(props.get_bool("flag"), None);
        assert_eq!(props.get_str("name"), None);
    }
}
