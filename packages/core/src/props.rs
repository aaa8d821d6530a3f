use crate::error::{ElementError, ElementResult};
use crate::value::Value;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;

/// Property key under which a node's descendants are stored
pub const CHILDREN_KEY: &str = "children";

/// Key/value record passed to a component
///
/// Keys are kept sorted so that serialized output and iteration order are
/// stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Props(BTreeMap<String, Value>);

impl Props {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn get_number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    /// Reads a flag by truthiness; absent props read as `false`
    pub fn get_bool(&self, key: &str) -> bool {
        self.get(key).is_some_and(Value::is_truthy)
    }

    pub fn require(&self, key: &str) -> ElementResult<&Value> {
        self.get(key).ok_or_else(|| ElementError::missing_prop(key))
    }

    pub fn require_str(&self, key: &str) -> ElementResult<&str> {
        let value = self.require(key)?;
        value
            .as_str()
            .ok_or_else(|| ElementError::invalid_prop(key, "string", value))
    }

    pub fn require_number(&self, key: &str) -> ElementResult<f64> {
        let value = self.require(key)?;
        value
            .as_f64()
            .ok_or_else(|| ElementError::invalid_prop(key, "number", value))
    }

    /// Children stored under the default key
    pub fn children(&self) -> Option<&Value> {
        self.get(CHILDREN_KEY)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn into_map(self) -> BTreeMap<String, Value> {
        self.0
    }

    /// Decode the record into a component-specific props struct.
    ///
    /// Elements and instances decode from their serialized form, so schemas
    /// that need live child elements should read them through [`Props::get`].
    pub fn decode<T: DeserializeOwned>(&self) -> ElementResult<T> {
        let json = serde_json::to_value(self)?;
        Ok(serde_json::from_value(json)?)
    }

    pub(crate) fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
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

impl From<BTreeMap<String, Value>> for Props {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Self(map)
    }
}
