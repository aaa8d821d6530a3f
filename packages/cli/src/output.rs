use arbor_common::{walk_tree, Visitor, WalkControl};
use arbor_core::{Element, Value, CHILDREN_KEY};
use serde::Serialize;

/// Pretty JSON with a configurable indent width
pub fn to_json<T: Serialize>(value: &T, indent: usize) -> anyhow::Result<String> {
    let indent = " ".repeat(indent);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(Vec::new(), formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8(serializer.into_inner())?)
}

/// Render a tree as an indented outline, one node per line
pub fn to_outline(root: &Element, indent: usize) -> String {
    let mut renderer = OutlineRenderer {
        indent,
        depth: 0,
        out: String::new(),
    };
    walk_tree(&mut renderer, root);
    renderer.out
}

struct OutlineRenderer {
    indent: usize,
    depth: usize,
    out: String,
}

impl OutlineRenderer {
    fn line(&mut self, content: &str) {
        self.out.push_str(&" ".repeat(self.indent * self.depth));
        self.out.push_str(content);
        self.out.push('\n');
    }
}

impl Visitor for OutlineRenderer {
    fn visit_element(&mut self, element: &Element, _parent: Option<&Element>) -> WalkControl {
        let component = element.component();
        let mut head = format!("{} [{}]", component.name(), component.kind());
        for (key, value) in element.props().iter() {
            if key != CHILDREN_KEY {
                head.push_str(&format!(" {}={}", key, inline_value(value)));
            }
        }
        self.line(&head);
        self.depth += 1;
        WalkControl::Continue
    }

    fn leave_element(&mut self, _element: &Element) {
        self.depth -= 1;
    }

    fn visit_leaf(&mut self, leaf: &Value, _parent: Option<&Element>) {
        let content = inline_value(leaf);
        self.line(&content);
    }
}

fn inline_value(value: &Value) -> String {
    match value {
        Value::Element(element) => format!("<{}>", element.component().name()),
        Value::Instance(instance) => format!("<instance {}>", instance.type_name()),
        other => serde_json::to_string(other).unwrap_or_else(|_| format!("{:?}", other)),
    }
}
