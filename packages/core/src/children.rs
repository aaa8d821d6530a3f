use crate::props::{Props, CHILDREN_KEY};
use crate::value::Value;

/// Returns a copy of the props with the children stored under `"children"`,
/// if there are any
pub fn merge_children(props: &Props, children: Vec<Value>) -> Props {
    merge_children_with_key(props, children, CHILDREN_KEY)
}

/// Returns a copy of the props with the children stored under `key`.
///
/// An empty list leaves the copy untouched: no key is added and an existing
/// one is kept. A non-empty list always lands as a list, even for one child.
pub fn merge_children_with_key(props: &Props, children: Vec<Value>, key: &str) -> Props {
    let mut copy = props.clone();
    if !children.is_empty() {
        copy.insert(key, Value::List(children));
    }
    copy
}
