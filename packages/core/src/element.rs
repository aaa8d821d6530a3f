use crate::component::ComponentRef;
use crate::error::{ElementError, ElementResult};
use crate::props::Props;
use crate::value::Value;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::sync::Arc;

/// Immutable node pairing a component reference with its merged props.
///
/// Cloning is cheap: clones share the same node. Elements are only made by
/// [`crate::create`].
#[derive(Clone)]
pub struct Element(Arc<ElementNode>);

struct ElementNode {
    component: ComponentRef,
    props: Props,
}

impl Element {
    pub(crate) fn new(component: ComponentRef, props: Props) -> Self {
        Self(Arc::new(ElementNode { component, props }))
    }

    pub fn component(&self) -> &ComponentRef {
        &self.0.component
    }

    pub fn props(&self) -> &Props {
        &self.0.props
    }

    /// Children stored under the default key, if any
    pub fn children(&self) -> Option<&Value> {
        self.0.props.children()
    }

    /// Returns true if both handles point at the same node
    pub fn ptr_eq(&self, other: &Element) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Drop for ElementNode {
    /// Tears the subtree down with a work list so deep trees cannot overflow
    /// the stack. Nodes still shared elsewhere are left to their other owners.
    fn drop(&mut self) {
        let mut pending: Vec<Value> = std::mem::take(&mut self.props)
            .into_map()
            .into_values()
            .collect();

        while let Some(value) = pending.pop() {
            match value {
                Value::Element(Element(node)) => {
                    if let Ok(mut node) = Arc::try_unwrap(node) {
                        pending.extend(std::mem::take(&mut node.props).into_map().into_values());
                    }
                }
                Value::List(items) => pending.extend(items),
                Value::Map(map) => pending.extend(map.into_values()),
                _ => {}
            }
        }
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
            || (self.component() == other.component() && self.props() == other.props())
    }
}

impl std::fmt::Debug for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element")
            .field("component", self.component())
            .field("props", self.props())
            .finish()
    }
}

impl Serialize for Element {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Element", 3)?;
        state.serialize_field("component", self.component().name())?;
        state.serialize_field("kind", &self.component().kind())?;
        state.serialize_field("props", self.props())?;
        state.end()
    }
}

impl TryFrom<Value> for Element {
    type Error = ElementError;

    fn try_from(value: Value) -> ElementResult<Self> {
        match value {
            Value::Element(element) => Ok(element),
            other => Err(ElementError::invalid_element(other)),
        }
    }
}

/// Returns true if a value was produced by [`crate::create`]
pub fn is_element(value: &Value) -> bool {
    matches!(value, Value::Element(_))
}

/// Borrow a value as an element, failing with `InvalidElement` otherwise
pub fn expect_element(value: &Value) -> ElementResult<&Element> {
    value
        .as_element()
        .ok_or_else(|| ElementError::invalid_element(value.clone()))
}
