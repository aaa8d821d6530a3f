use crate::component::{ComponentRef, TypeTag};
use crate::value::Value;

/// Returns true if `child` is a class strictly derived from `parent`
pub fn is_subtype(child: &ComponentRef, parent: &TypeTag) -> bool {
    match child {
        ComponentRef::Class(class) => {
            class.type_tag() != *parent && class.lineage().contains(parent)
        }
        _ => false,
    }
}

/// Returns true if a component must be instantiated rather than invoked.
///
/// Only the reference is inspected: a factory whose return value is an
/// instance is still not a class component.
pub fn is_class_component(component: &ComponentRef) -> bool {
    is_subtype(component, &TypeTag::component())
}

/// Returns true if a value is a constructed component, whichever kind of
/// component produced it
pub fn is_component_instance(value: &Value) -> bool {
    matches!(value, Value::Instance(_))
}
