/// Tests for the synchronous visitor
use crate::*;
use arbor_core::{create, Element, Props, Value};

/// Collects one line per node, indented by depth
#[derive(Default)]
struct Outline {
    depth: usize,
    lines: Vec<String>,
}

impl Visitor for Outline {
    fn visit_element(&mut self, element: &Element, _parent: Option<&Element>) -> WalkControl {
        self.lines.push(format!(
            "{}{}",
            "  ".repeat(self.depth),
            element.component().name()
        ));
        self.depth += 1;
        WalkControl::Continue
    }

    fn leave_element(&mut self, _element: &Element) {
        self.depth -= 1;
    }

    fn visit_leaf(&mut self, leaf: &Value, _parent: Option<&Element>) {
        self.lines
            .push(format!("{}{:?}", "  ".repeat(self.depth), leaf));
    }
}

/// Only counts elements; leaves fall through to the default
#[derive(Default)]
struct ElementCounter {
    count: usize,
}

impl Visitor for ElementCounter {
    fn visit_element(&mut self, _element: &Element, _parent: Option<&Element>) -> WalkControl {
        self.count += 1;
        WalkControl::Continue
    }
}

/// Records elements but never descends below `B`
#[derive(Default)]
struct SkipB {
    seen: Vec<String>,
    left: Vec<String>,
}

impl Visitor for SkipB {
    fn visit_element(&mut self, element: &Element, _parent: Option<&Element>) -> WalkControl {
        let name = element.component().name();
        self.seen.push(name.to_string());
        if name == "B" {
            WalkControl::SkipChildren
        } else {
            WalkControl::Continue
        }
    }

    fn leave_element(&mut self, element: &Element) {
        self.left.push(element.component().name().to_string());
    }

    fn visit_leaf(&mut self, leaf: &Value, _parent: Option<&Element>) {
        self.seen.push(format!("{:?}", leaf));
    }
}

fn sample_tree() -> Element {
    create(
        "A",
        Props::new(),
        vec![
            create("B", Props::new(), vec!["b".into()]).into(),
            "text".into(),
            Value::from(vec![
                create("C", Props::new(), vec![]),
                create("D", Props::new(), vec![]),
            ]),
        ],
    )
}

#[test]
fn test_outline_follows_pre_order() {
    let mut outline = Outline::default();
    walk_tree(&mut outline, &sample_tree());
    assert_eq!(
        outline.lines,
        vec![
            "A",
            "  B",
            "    String(\"b\")",
            "  String(\"text\")",
            "  C",
            "  D",
        ]
    );
    assert_eq!(outline.depth, 0);
}

#[test]
fn test_default_leaf_visit_does_nothing() {
    let mut counter = ElementCounter::default();
    walk_tree(&mut counter, &sample_tree());
    assert_eq!(counter.count, 4);
}

#[test]
fn test_skipped_children_still_leave() {
    let mut visitor = SkipB::default();
    walk_tree(&mut visitor, &sample_tree());
    assert_eq!(visitor.seen, vec!["A", "B", "String(\"text\")", "C", "D"]);
    assert_eq!(visitor.left, vec!["B", "C", "D", "A"]);
}

#[test]
fn test_walk_element_skips_the_element_itself() {
    let mut outline = Outline::default();
    walk_element(&mut outline, &sample_tree());
    assert_eq!(outline.lines[0], "B");
    assert_eq!(outline.lines.len(), 5);
}

#[test]
fn test_walk_value_flattens_lists() {
    let mut outline = Outline::default();
    let list = Value::from(vec![
        Value::from(vec![Value::from(1)]),
        create("E", Props::new(), vec![]).into(),
    ]);
    walk_value(&mut outline, &list, None);
    assert_eq!(outline.lines, vec!["Number(1.0)", "E"]);
}

#[test]
fn test_walk_handles_deep_chains() {
    let mut node = create("leaf", Props::new(), vec![]);
    for _ in 0..100_000 {
        node = create("n", Props::new(), vec![node.into()]);
    }

    let mut counter = ElementCounter::default();
    walk_tree(&mut counter, &node);
    assert_eq!(counter.count, 100_001);
}
