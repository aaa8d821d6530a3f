//! # Arbor Core
//!
//! Element trees over intrinsic tags and three kinds of components.
//!
//! An [`Element`] pairs a [`ComponentRef`] with the [`Props`] it was created
//! with. Creating an element never runs anything, so the same tree can be
//! serialized, inspected, or walked (see `arbor-common`) by any consumer.
//!
//! ## Two ways to create
//!
//! - [`create`] always returns an [`Element`]. Class, function, and factory
//!   components are recorded, not run.
//! - [`build`] creates the element and then [`produce`]s it: classes are
//!   instantiated, functions and factories are called, intrinsic elements are
//!   returned unchanged.
//!
//! Children passed to either call are folded into the props by
//! [`merge_children`] before anything else happens.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use arbor_core::{build, create, ComponentRef, Props, Value};
//!
//! let double = ComponentRef::function("Double", |props| {
//!     Ok(Value::from(props.require_number("n")? * 2.0))
//! });
//!
//! let tree = create("section", Props::new(), vec![
//!     create(&double, Props::new().with("n", 1), vec![]).into(),
//! ]);
//! let two = build(&double, Props::new().with("n", 1), vec![])?;
//! ```

pub mod children;
pub mod classify;
pub mod component;
pub mod create;
pub mod element;
pub mod error;
pub mod props;
pub mod value;

pub use children::{merge_children, merge_children_with_key};
pub use classify::{is_class_component, is_component_instance, is_subtype};
pub use component::{
    AsAny, ClassComponent, Component, ComponentKind, ComponentRef, Instance, TypeTag,
};
pub use create::{build, create, produce};
pub use element::{expect_element, is_element, Element};
pub use error::{ElementError, ElementResult};
pub use props::{Props, CHILDREN_KEY};
pub use value::Value;
