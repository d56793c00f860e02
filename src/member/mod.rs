//! Member identities consumed by the proxy state.
//!
//! The binding layer resolves methods and properties of the mocked type once
//! and hands them over as [`MethodToken`] and [`PropertyDescriptor`] values.
//! Nothing in this crate performs reflection; these types are plain,
//! hashable identity keys.

mod method;
mod property;

pub use method::{AccessorKind, MethodToken};
pub use property::PropertyDescriptor;
