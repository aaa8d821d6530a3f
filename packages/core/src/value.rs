use crate::component::Instance;
use crate::element::Element;
use crate::error::{ElementError, ElementResult};
use crate::props::Props;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Dynamic value held in props and produced by components
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
    Element(Element),
    Instance(Instance),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Value::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn as_instance(&self) -> Option<&Instance> {
        match self {
            Value::Instance(instance) => Some(instance),
            _ => None,
        }
    }

    /// Short name of the variant, as reported by `InvalidProp`
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Element(_) => "element",
            Value::Instance(_) => "instance",
        }
    }

    /// Falsy values are null, false, zero, and the empty string
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0,
            Value::String(s) => !s.is_empty(),
            Value::List(_) | Value::Map(_) | Value::Element(_) | Value::Instance(_) => true,
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            // Integral numbers print without a trailing ".0"
            Value::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_EXACT_INTEGER as f64 => {
                serializer.serialize_i64(*n as i64)
            }
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::List(items) => serializer.collect_seq(items),
            Value::Map(map) => serializer.collect_map(map),
            Value::Element(element) => element.serialize(serializer),
            Value::Instance(instance) => instance.serialize(serializer),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(n as f64)
    }
}

impl From<Element> for Value {
    fn from(element: Element) -> Self {
        Value::Element(element)
    }
}

impl From<Instance> for Value {
    fn from(instance: Instance) -> Self {
        Value::Instance(instance)
    }
}

impl From<Props> for Value {
    fn from(props: Props) -> Self {
        Value::Map(props.into_map())
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Value::Map(map)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Null)
    }
}

/// Largest integer magnitude an `f64` holds exactly
const MAX_EXACT_INTEGER: u64 = 1 << 53;

impl Value {
    /// Convert parsed JSON, rejecting integers a `Number` cannot hold exactly
    pub fn from_json(json: serde_json::Value) -> ElementResult<Value> {
        Ok(match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(exact_number(&n)?),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => Value::List(
                items
                    .into_iter()
                    .map(Value::from_json)
                    .collect::<ElementResult<_>>()?,
            ),
            serde_json::Value::Object(map) => Value::Map(
                map.into_iter()
                    .map(|(key, value)| Ok((key, Value::from_json(value)?)))
                    .collect::<ElementResult<_>>()?,
            ),
        })
    }
}

fn exact_number(n: &serde_json::Number) -> ElementResult<f64> {
    let exact = match (n.as_i64(), n.as_u64()) {
        (Some(i), _) => i.unsigned_abs() <= MAX_EXACT_INTEGER,
        (None, Some(u)) => u <= MAX_EXACT_INTEGER,
        (None, None) => true,
    };

    match n.as_f64() {
        Some(f) if exact => Ok(f),
        _ => Err(ElementError::InexactNumber {
            value: n.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_numbers_serialize_as_integers() {
        let json = serde_json::to_string(&Value::from(vec![2.0, 2.5])).unwrap();
        assert_eq!(json, "[2,2.5]");
    }

    #[test]
    fn test_option_none_is_null() {
        let value: Value = Option::<&str>::None.into();
        assert!(value.is_null());
        assert!(!value.is_truthy());
    }

    #[test]
    fn test_from_json_object() {
        let json: serde_json::Value = serde_json::from_str(r#"{"a": [1, "x"], "b": null}"#).unwrap();
        let value = Value::from_json(json).unwrap();
        let map = value.as_map().unwrap();
        assert_eq!(
            map["a"],
            Value::List(vec![Value::Number(1.0), Value::from("x")])
        );
        assert!(map["b"].is_null());
    }

    #[test]
    fn test_from_json_keeps_exact_integers() {
        let json: serde_json::Value = serde_json::from_str("[9007199254740992, -9007199254740992, 0.1]").unwrap();
        let value = Value::from_json(json).unwrap();
        assert_eq!(
            value,
            Value::from(vec![9007199254740992.0, -9007199254740992.0, 0.1])
        );
    }

    #[test]
    fn test_from_json_rejects_integers_past_f64_precision() {
        let json: serde_json::Value = serde_json::from_str(r#"{"id": 9007199254740993}"#).unwrap();
        let err = Value::from_json(json).unwrap_err();
        assert!(matches!(err, ElementError::InexactNumber { ref value } if value == "9007199254740993"));

        let json: serde_json::Value = serde_json::from_str("18446744073709551615").unwrap();
        assert!(Value::from_json(json).is_err());
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Value::Null.type_name(), "null");
        assert_eq!(Value::from(vec![1]).type_name(), "list");
        assert_eq!(Value::from("x").type_name(), "string");
    }
}
