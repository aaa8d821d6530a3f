use arbor_core::{Element, Value, CHILDREN_KEY};

/// A node handed to a visitor.
///
/// Lists are flattened before this point, so a visitor only ever sees
/// elements and leaf values (text, numbers, nulls, maps, instances).
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Element(&'a Element),
    Leaf(&'a Value),
}

impl<'a> Node<'a> {
    pub fn as_element(&self) -> Option<&'a Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Leaf(_) => None,
        }
    }
}

/// Whether a walk descends into the element just visited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WalkControl {
    #[default]
    Continue,
    SkipChildren,
}

/// Visitor pattern for walking element trees synchronously
///
/// The walk is pre-order, left to right, and keeps its own stack, so tree
/// depth is not limited by the call stack. `leave_element` runs once the
/// element's children are done, including when they were skipped.
pub trait Visitor: Sized {
    fn visit_element(&mut self, _element: &Element, _parent: Option<&Element>) -> WalkControl {
        WalkControl::Continue
    }

    fn leave_element(&mut self, _element: &Element) {
        // Nothing to close by default
    }

    fn visit_leaf(&mut self, _leaf: &Value, _parent: Option<&Element>) {
        // Leaf node, no children to walk
    }
}

enum Step<'a> {
    Enter(&'a Element, Option<&'a Element>),
    Value(&'a Value, Option<&'a Element>),
    Leave(&'a Element),
}

/// Walk a whole tree starting at its root
pub fn walk_tree<V: Visitor>(visitor: &mut V, root: &Element) {
    drive(visitor, vec![Step::Enter(root, None)]);
}

/// Walk the children of an element without visiting the element itself
pub fn walk_element<V: Visitor>(visitor: &mut V, element: &Element) {
    if let Some(children) = element.props().get(CHILDREN_KEY) {
        drive(visitor, vec![Step::Value(children, Some(element))]);
    }
}

pub fn walk_value<V: Visitor>(visitor: &mut V, value: &Value, parent: Option<&Element>) {
    drive(visitor, vec![Step::Value(value, parent)]);
}

fn drive<'a, V: Visitor>(visitor: &mut V, mut stack: Vec<Step<'a>>) {
    while let Some(step) = stack.pop() {
        let (element, parent) = match step {
            Step::Enter(element, parent) => (element, parent),
            Step::Value(Value::Element(element), parent) => (element, parent),
            Step::Value(Value::List(items), parent) => {
                stack.extend(items.iter().rev().map(|item| Step::Value(item, parent)));
                continue;
            }
            Step::Value(leaf, parent) => {
                visitor.visit_leaf(leaf, parent);
                continue;
            }
            Step::Leave(element) => {
                visitor.leave_element(element);
                continue;
            }
        };

        let control = visitor.visit_element(element, parent);
        stack.push(Step::Leave(element));
        if control == WalkControl::Continue {
            if let Some(children) = element.props().get(CHILDREN_KEY) {
                stack.push(Step::Value(children, Some(element)));
            }
        }
    }
}
