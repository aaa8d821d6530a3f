/// Tests for the asynchronous traversal
/// Covers ordering, suspension, failure, and cancellation
use crate::*;
use arbor_core::{create, Element, Props, Value, CHILDREN_KEY};
use std::convert::Infallible;
use std::time::Duration;

fn label(node: Node<'_>) -> String {
    match node {
        Node::Element(element) => element.component().name().to_string(),
        Node::Leaf(Value::String(s)) => s.clone(),
        Node::Leaf(other) => format!("{:?}", other),
    }
}

fn parent_label(parent: Option<&Element>) -> Option<String> {
    parent.map(|p| p.component().name().to_string())
}

/// A { B, "text", [C, D] }
fn sample_tree() -> Element {
    create(
        "A",
        Props::new(),
        vec![
            create("B", Props::new(), vec![]).into(),
            "text".into(),
            Value::from(vec![
                create("C", Props::new(), vec![]),
                create("D", Props::new(), vec![]),
            ]),
        ],
    )
}

async fn collect(root: &Element) -> Vec<(String, Option<String>)> {
    let mut seen = Vec::new();
    visit_fn(root, |node, parent| {
        seen.push((label(node), parent_label(parent)));
        std::future::ready(Ok::<(), Infallible>(()))
    })
    .await
    .unwrap();
    seen
}

fn pair(node: &str, parent: Option<&str>) -> (String, Option<String>) {
    (node.to_string(), parent.map(str::to_string))
}

#[tokio::test]
async fn test_pre_order_with_flattened_lists() {
    let seen = collect(&sample_tree()).await;
    assert_eq!(
        seen,
        vec![
            pair("A", None),
            pair("B", Some("A")),
            pair("text", Some("A")),
            pair("C", Some("A")),
            pair("D", Some("A")),
        ]
    );
}

#[tokio::test]
async fn test_repeated_visits_are_identical() {
    let tree = sample_tree();
    let first = collect(&tree).await;
    let second = collect(&tree).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_nested_elements_get_their_own_parent() {
    let tree = create(
        "root",
        Props::new(),
        vec![create(
            "section",
            Props::new(),
            vec![create("p", Props::new(), vec!["hello".into()]).into()],
        )
        .into()],
    );

    let seen = collect(&tree).await;
    assert_eq!(
        seen,
        vec![
            pair("root", None),
            pair("section", Some("root")),
            pair("p", Some("section")),
            pair("hello", Some("p")),
        ]
    );
}

#[tokio::test]
async fn test_elements_without_children_are_not_descended() {
    let leafless = create("img", Props::new().with("src", "a.png"), vec![]);
    assert_eq!(collect(&leafless).await, vec![pair("img", None)]);

    let empty = create(
        "ul",
        Props::new().with(CHILDREN_KEY, Vec::<Value>::new()),
        vec![],
    );
    assert_eq!(collect(&empty).await, vec![pair("ul", None)]);
}

#[tokio::test]
async fn test_null_children_are_visited_as_leaves() {
    let tree = create("div", Props::new(), vec![Value::Null, 7.into()]);
    let seen = collect(&tree).await;
    assert_eq!(
        seen,
        vec![
            pair("div", None),
            pair("Null", Some("div")),
            pair("Number(7.0)", Some("div")),
        ]
    );
}

/// Records when each visit starts and ends; earlier nodes sleep longer
struct SlowVisitor {
    events: Vec<String>,
    delay_ms: u64,
}

impl AsyncVisitor for SlowVisitor {
    type Error = Infallible;

    async fn visit(&mut self, node: Node<'_>, _parent: Option<&Element>) -> Result<(), Infallible> {
        let name = label(node);
        self.events.push(format!("start {}", name));
        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        self.delay_ms = self.delay_ms.saturating_sub(1);
        self.events.push(format!("end {}", name));
        Ok(())
    }
}

#[tokio::test]
async fn test_pending_visits_complete_before_the_next_one_starts() {
    let mut visitor = SlowVisitor {
        events: Vec::new(),
        delay_ms: 5,
    };
    visit(&sample_tree(), &mut visitor).await.unwrap();

    let expected: Vec<String> = ["A", "B", "text", "C", "D"]
        .iter()
        .flat_map(|name| [format!("start {}", name), format!("end {}", name)])
        .collect();
    assert_eq!(visitor.events, expected);
}

#[tokio::test]
async fn test_failing_visitor_aborts_the_walk() {
    let mut seen = Vec::new();
    let result = visit_fn(&sample_tree(), |node, _parent| {
        let name = label(node);
        seen.push(name.clone());
        async move {
            if name == "text" {
                Err(format!("cannot visit {}", name))
            } else {
                Ok(())
            }
        }
    })
    .await;

    match result {
        Err(VisitError::Visitor(message)) => assert_eq!(message, "cannot visit text"),
        other => panic!("Expected visitor error, got {:?}", other),
    }
    assert_eq!(seen, vec!["A", "B", "text"]);
}

#[tokio::test]
async fn test_cancelling_stops_before_the_next_node() {
    let token = CancellationToken::new();
    let mut seen = Vec::new();
    let mut visitor = FnVisitor::new(|node: Node<'_>, _parent: Option<&Element>| {
        let name = label(node);
        if name == "B" {
            token.cancel();
        }
        seen.push(name);
        std::future::ready(Ok::<(), Infallible>(()))
    });

    let result = visit_with_cancel(&sample_tree(), &mut visitor, &token).await;
    assert!(matches!(result, Err(VisitError::Cancelled)));
    drop(visitor);
    assert_eq!(seen, vec!["A", "B"]);
}

#[tokio::test(start_paused = true)]
async fn test_cancelling_interrupts_a_pending_visit() {
    let token = CancellationToken::new();
    let canceller = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(10)).await;
        canceller.cancel();
    });

    let mut visitor = FnVisitor::new(|_node: Node<'_>, _parent: Option<&Element>| {
        std::future::pending::<Result<(), Infallible>>()
    });

    let result = visit_with_cancel(&sample_tree(), &mut visitor, &token).await;
    assert!(result.unwrap_err().is_cancelled());
}

#[tokio::test]
async fn test_deep_chain_is_visited_and_dropped() {
    let mut node = create("leaf", Props::new(), vec![]);
    for _ in 0..100_000 {
        node = create("n", Props::new(), vec![node.into()]);
    }

    let mut visited = 0usize;
    visit_fn(&node, |_node, _parent| {
        visited += 1;
        std::future::ready(Ok::<(), Infallible>(()))
    })
    .await
    .unwrap();

    assert_eq!(visited, 100_001);
    drop(node);
}
