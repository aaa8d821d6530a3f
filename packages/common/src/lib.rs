pub mod error;
pub mod result;
pub mod traversal;
pub mod visitor;

#[cfg(test)]
mod tests_traversal;

#[cfg(test)]
mod tests_visitor;

pub use error::*;
pub use result::*;
pub use traversal::*;
pub use visitor::*;

pub use tokio_util::sync::CancellationToken;
