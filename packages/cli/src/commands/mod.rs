pub mod files;
pub mod render;
pub mod tree;

pub use files::{files, FilesArgs};
pub use render::{render, RenderArgs};
pub use tree::{tree, TreeArgs};
