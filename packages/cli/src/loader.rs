//! Loads element trees from JSON documents.
//!
//! An element is an object with a `tag` and optional `props` and `children`:
//!
//! ```json
//! { "tag": "ul", "props": { "class": "menu" }, "children": [
//!     { "tag": "li", "children": ["Home"] },
//!     "plain text", 42, null
//! ] }
//! ```
//!
//! Strings, numbers, booleans, and null are leaves; arrays are nested child
//! lists. Any other object is rejected as an invalid element.

use arbor_core::{create, ComponentRef, Element, ElementError, ElementResult, Props, Value};
use serde_json::Value as Json;
use tracing::debug;

pub fn load_tree(json: &Json) -> ElementResult<Element> {
    let root = load_node(json)?;
    let root = Element::try_from(root)?;
    debug!(root = %root.component().name(), "Loaded element tree");
    Ok(root)
}

fn load_node(json: &Json) -> ElementResult<Value> {
    match json {
        Json::Object(object) => {
            let tag = match object.get("tag").and_then(Json::as_str) {
                Some(tag) => tag,
                None => return Err(ElementError::invalid_element(Value::from_json(json.clone())?)),
            };

            let props = match object.get("props") {
                None => Props::new(),
                Some(Json::Object(props)) => props
                    .iter()
                    .map(|(key, value)| Ok((key.clone(), Value::from_json(value.clone())?)))
                    .collect::<ElementResult<Props>>()?,
                Some(other) => {
                    let found = Value::from_json(other.clone())?;
                    return Err(ElementError::invalid_prop("props", "object", &found));
                }
            };

            let children = match object.get("children") {
                None => Vec::new(),
                Some(Json::Array(items)) => items.iter().map(load_node).collect::<ElementResult<_>>()?,
                Some(single) => vec![load_node(single)?],
            };

            Ok(create(ComponentRef::intrinsic(tag), props, children).into())
        }
        Json::Array(items) => Ok(Value::List(
            items.iter().map(load_node).collect::<ElementResult<_>>()?,
        )),
        leaf => Value::from_json(leaf.clone()),
    }
}
