//! Asynchronous depth-first traversal of element trees.
//!
//! ## Ordering
//!
//! Nodes are visited in pre-order, siblings left to right. Nested lists are
//! flattened in place: their items keep the parent of the list and the list
//! itself is never visited. The root is visited with no parent.
//!
//! ## Suspension
//!
//! Each visit is awaited before the walk moves on, so at most one visitor
//! call is in flight and a subtree's side effects complete before its next
//! sibling is visited.
//!
//! ## Cancellation
//!
//! [`visit_with_cancel`] takes a [`CancellationToken`]. The token is checked
//! before each visitor call and raced against the pending result; once it
//! fires the walk stops with [`VisitError::Cancelled`].

use crate::error::VisitError;
use crate::result::VisitResult;
use crate::visitor::Node;
use arbor_core::{Element, Value, CHILDREN_KEY};
use std::future::Future;
use std::marker::PhantomData;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

/// Visitor whose calls may suspend
#[allow(async_fn_in_trait)]
pub trait AsyncVisitor {
    type Error;

    async fn visit(&mut self, node: Node<'_>, parent: Option<&Element>) -> Result<(), Self::Error>;
}

/// Adapts a closure returning a future into an [`AsyncVisitor`]
pub struct FnVisitor<F, Fut> {
    f: F,
    _future: PhantomData<fn() -> Fut>,
}

impl<F, Fut> FnVisitor<F, Fut> {
    pub fn new(f: F) -> Self {
        Self {
            f,
            _future: PhantomData,
        }
    }
}

impl<F, Fut, E> AsyncVisitor for FnVisitor<F, Fut>
where
    F: FnMut(Node<'_>, Option<&Element>) -> Fut,
    Fut: Future<Output = Result<(), E>>,
{
    type Error = E;

    async fn visit(&mut self, node: Node<'_>, parent: Option<&Element>) -> Result<(), E> {
        (self.f)(node, parent).await
    }
}

/// Traverse the tree under `root`, calling the visitor on every node
pub async fn visit<V: AsyncVisitor>(root: &Element, visitor: &mut V) -> VisitResult<(), V::Error> {
    visit_with_cancel(root, visitor, &CancellationToken::new()).await
}

/// Traverse with a closure.
///
/// The returned future must not borrow the node; clone what it needs.
pub async fn visit_fn<F, Fut, E>(root: &Element, f: F) -> VisitResult<(), E>
where
    F: FnMut(Node<'_>, Option<&Element>) -> Fut,
    Fut: Future<Output = Result<(), E>>,
{
    visit(root, &mut FnVisitor::new(f)).await
}

enum Pending<'a> {
    Root(&'a Element),
    Value(&'a Value),
}

/// Traverse until done, a visit fails, or the token is cancelled
#[instrument(skip_all, fields(root = %root.component().name()))]
pub async fn visit_with_cancel<V: AsyncVisitor>(
    root: &Element,
    visitor: &mut V,
    token: &CancellationToken,
) -> VisitResult<(), V::Error> {
    // Work stack in reverse: the next node to visit is on top
    let mut stack = vec![(Pending::Root(root), None::<&Element>)];
    let mut visited = 0usize;

    while let Some((pending, parent)) = stack.pop() {
        let node = match pending {
            Pending::Root(element) => Node::Element(element),
            Pending::Value(Value::Element(element)) => Node::Element(element),
            Pending::Value(Value::List(items)) => {
                stack.extend(items.iter().rev().map(|item| (Pending::Value(item), parent)));
                continue;
            }
            Pending::Value(leaf) => Node::Leaf(leaf),
        };

        // Biased so a cancelled token wins before the visitor is polled
        tokio::select! {
            biased;
            _ = token.cancelled() => {
                debug!(visited, "Traversal cancelled");
                return Err(VisitError::Cancelled);
            }
            result = visitor.visit(node, parent) => {
                result.map_err(VisitError::Visitor)?;
            }
        }
        visited += 1;

        if let Node::Element(element) = node {
            if let Some(children) = element.props().get(CHILDREN_KEY) {
                stack.push((Pending::Value(children), Some(element)));
            }
        }
    }

    debug!(visited, "Traversal complete");
    Ok(())
}
