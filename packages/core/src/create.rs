use crate::children::merge_children;
use crate::classify::is_class_component;
use crate::component::{ComponentKind, ComponentRef};
use crate::element::Element;
use crate::error::{ElementError, ElementResult};
use crate::props::Props;
use crate::value::Value;
use tracing::{debug, trace};

/// Create an element without invoking or instantiating anything.
///
/// This is the call a tag like `<Panel title="x">child</Panel>` stands for.
pub fn create(
    component: impl Into<ComponentRef>,
    props: Props,
    children: Vec<Value>,
) -> Element {
    let component = component.into();
    trace!(
        component = %component.name(),
        kind = %component.kind(),
        children = children.len(),
        "Creating element"
    );
    let props = merge_children(&props, children);
    Element::new(component, props)
}

/// Create an element and immediately produce its value.
///
/// Functions and factories are called, classes are instantiated, and
/// intrinsic elements are returned as they are.
pub fn build(
    component: impl Into<ComponentRef>,
    props: Props,
    children: Vec<Value>,
) -> ElementResult<Value> {
    produce(&create(component, props, children))
}

/// Produce the value an element describes
pub fn produce(element: &Element) -> ElementResult<Value> {
    let component = element.component();
    let props = element.props();
    debug!(component = %component.name(), kind = %component.kind(), "Producing element");

    let result = if is_class_component(component) {
        component.instantiate(props).map(Value::Instance)
    } else if component.kind() == ComponentKind::Intrinsic {
        return Ok(Value::Element(element.clone()));
    } else {
        component.call(props)
    };

    result.map_err(|source| ElementError::ComponentFailed {
        component: component.name().to_string(),
        source: Box::new(source),
    })
}
