//! Insertion-ordered attribute collection.

use super::value::AttributeValue;
use serde::de::{MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Ordered mapping from attribute name to value.
///
/// Output order follows insertion order. Inserting an existing name replaces
/// its value in place, so the attribute keeps its original position.
///
/// # Example
///
/// ```rust
/// use viewkit::attributes::AttributeMap;
///
/// let attribs = AttributeMap::new()
///     .with("id", "main")
///     .with("class", vec!["nav", "nav-top"])
///     .with("hidden", true);
///
/// let names: Vec<_> = attribs.keys().collect();
/// assert_eq!(names, ["id", "class", "hidden"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeMap {
    entries: Vec<(String, AttributeValue)>,
}

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an attribute, returning the map for chaining.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Inserts an attribute and returns the previous value, if any.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Option<AttributeValue> {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    /// Removes an attribute, keeping the order of the remaining ones.
    pub fn remove(&mut self, name: &str) -> Option<AttributeValue> {
        let pos = self.entries.iter().position(|(k, _)| k == name)?;
        Some(self.entries.remove(pos).1)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Parses a JSON object, keeping the document order of its keys.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl<K: Into<String>, V: Into<AttributeValue>> FromIterator<(K, V)> for AttributeMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = AttributeMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>, V: Into<AttributeValue>> Extend<(K, V)> for AttributeMap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl IntoIterator for AttributeMap {
    type Item = (String, AttributeValue);
    type IntoIter = std::vec::IntoIter<(String, AttributeValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for AttributeMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct AttributeMapVisitor;

impl<'de> Visitor<'de> for AttributeMapVisitor {
    type Value = AttributeMap;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of attribute names to values")
    }

    fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(AttributeMap::new())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = AttributeMap::new();
        while let Some((key, value)) = access.next_entry::<String, AttributeValue>()? {
            map.insert(key, value);
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for AttributeMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(AttributeMapVisitor)
    }
}

/// Builds an [`AttributeMap`] from `name => value` pairs.
///
/// ```rust
/// use viewkit::attributes;
///
/// let attribs = attributes! { "id" => "x", "open" => true };
/// assert_eq!(attribs.len(), 2);
/// ```
#[macro_export]
macro_rules! attributes {
    () => {
        $crate::attributes::AttributeMap::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {
        $crate::attributes::AttributeMap::new()$(.with($name, $value))+
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_preserves_order() {
        let map = AttributeMap::new()
            .with("b", "1")
            .with("a", "2")
            .with("c", "3");
        let keys: Vec<_> = map.keys().collect();
        assert_eq!(keys, ["b", "a", "c"]);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut map = AttributeMap::new().with("id", "x").with("class", "c");
        let previous = map.insert("id", "y");

        assert_eq!(previous, Some(AttributeValue::from("x")));
        assert_eq!(map.len(), 2);
        let keys: Vec<_> = map.keys().collect();
        assert_eq!(keys, ["id", "class"]);
        assert_eq!(map.get("id"), Some(&AttributeValue::from("y")));
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut map = AttributeMap::new()
            .with("a", 1)
            .with("b", 2)
            .with("c", 3);
        assert_eq!(map.remove("b"), Some(AttributeValue::Int(2)));
        assert_eq!(map.remove("b"), None);
        let keys: Vec<_> = map.keys().collect();
        assert_eq!(keys, ["a", "c"]);
        assert!(!map.contains_key("b"));
    }

    #[test]
    fn test_from_json_keeps_document_order() {
        let map =
            AttributeMap::from_json(r#"{"title": "", "id": "x", "class": ["a", "b"], "open": true}"#)
                .unwrap();
        let keys: Vec<_> = map.keys().collect();
        assert_eq!(keys, ["title", "id", "class", "open"]);
        assert_eq!(
            map.get("class"),
            Some(&AttributeValue::List(vec!["a".into(), "b".into()]))
        );
    }

    #[test]
    fn test_from_json_null_is_empty() {
        let map = AttributeMap::from_json("null").unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_from_json_rejects_non_objects() {
        assert!(AttributeMap::from_json("[1, 2]").is_err());
        assert!(AttributeMap::from_json(r#""id""#).is_err());
    }

    #[test]
    fn test_serialize_in_order() {
        let map = AttributeMap::new().with("z", 1).with("a", "x");
        assert_eq!(serde_json::to_string(&map).unwrap(), r#"{"z":1,"a":"x"}"#);
    }

    #[test]
    fn test_collect_and_macro() {
        let collected: AttributeMap = vec![("id", "x"), ("class", "c")].into_iter().collect();
        let built = attributes! { "id" => "x", "class" => "c" };
        assert_eq!(collected, built);
        assert!(attributes! {}.is_empty());
    }
}
