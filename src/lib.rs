// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # dotmock
//!
//! Runtime state for dynamically generated mock objects.
//!
//! A proxy generator produces a subclass or interface implementation of the
//! mocked type and routes every call into a [`proxy::ProxyState`]. The state
//! decides, per call, whether to
//!
//! - run the real implementation (call-through),
//! - emulate a property with plain storage,
//! - emulate an event with a subscriber chain, or
//! - forward the call to the expectation engine ([`proxy::MockRepository`]).
//!
//! Member identities arrive as already-resolved [`member::MethodToken`] and
//! [`member::PropertyDescriptor`] values; this crate performs no reflection
//! and generates no code.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use dotmock::prelude::*;
//!
//! struct Expectations;
//!
//! impl MockRepository for Expectations {
//!     fn handle_call(&self, _: ProxyHash, method: &MethodToken, _: &[Value]) -> Result<Option<Value>> {
//!         Err(Error::Repository(format!("unexpected call to {method}")))
//!     }
//! }
//!
//! let name = PropertyDescriptor::read_write("Shop.Customer", "Name", false);
//! let mut proxy = ProxyStateBuilder::new(Arc::new(Expectations))
//!     .property(name.clone())
//!     .build();
//!
//! let getter = name.getter().unwrap();
//! let setter = name.setter().unwrap();
//!
//! // Unset reference-typed properties read as `None`
//! assert_eq!(proxy.intercept(getter, &[], |_| None)?, None);
//!
//! proxy.intercept(setter, &[Value::from("Ada")], |_| None)?;
//! assert_eq!(proxy.intercept(getter, &[], |_| None)?, Some(Value::from("Ada")));
//! # Ok::<(), dotmock::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`prelude`] - Convenient re-exports of commonly used types
//! - [`member`] - Method and property identities
//! - [`value`] - Argument values, callbacks and subscriber chains
//! - [`proxy`] - Per-instance state, stores, identity and dispatch
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Logging
//!
//! Dispatch decisions and store mutations are emitted as `tracing` events at
//! `trace` level, proxy construction at `debug` level. Install any `tracing`
//! subscriber to see them.

pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and traits.
pub mod prelude;

/// Method and property identities handed over by the binding layer.
pub mod member;

/// Per-instance proxy state: identity, registries, stores and dispatch.
pub mod proxy;

/// Argument values, callbacks and callback chains.
pub mod value;

/// `dotmock` Result type
///
/// A type alias for `std::result::Result<T, Error>` where the error type is
/// always [`Error`].
///
/// # Examples
///
/// ```rust
/// use dotmock::{proxy::ProxyState, value::Value, member::MethodToken, Result};
///
/// fn read(proxy: &mut ProxyState, getter: &MethodToken) -> Result<Option<Value>> {
///     proxy.handle_property_call(getter, &[])
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `dotmock` Error type
///
/// The main error type for all operations in this crate.
///
/// # Examples
///
/// ```rust,ignore
/// match proxy.handle_property_call(&getter, &[]) {
///     Ok(value) => println!("value: {:?}", value),
///     Err(Error::UninitializedValueTypeProperty { property }) => {
///         println!("{} was never set", property)
///     }
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub use error::Error;
