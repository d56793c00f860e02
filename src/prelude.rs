//! Convenient re-exports of the most commonly used types.
//!
//! ```rust
//! use dotmock::prelude::*;
//!
//! let token = MethodToken::new("Shop.Cart", "get_Count");
//! assert_eq!(token.accessor(), Some(AccessorKind::Getter));
//! ```

pub use crate::{
    member::{AccessorKind, MethodToken, PropertyDescriptor},
    proxy::{Dispatch, MockRepository, ProxyConfig, ProxyHash, ProxyState, ProxyStateBuilder},
    value::{Callback, CallbackChain, ObjectRef, Value},
    Error, Result,
};
