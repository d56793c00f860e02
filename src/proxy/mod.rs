//! Runtime state behind mocked instances.
//!
//! This module contains everything a proxy needs at call time:
//!
//! - [`ProxyState`] - Per-instance state and the [`intercept`](ProxyState::intercept) dispatcher
//! - [`ProxyHash`] - Process-unique identity, independent of the mocked type's hashing
//! - [`IdentityRegistry`] - Call-through and simulated-property method sets
//! - [`PropertyStore`] / [`PropertyKey`] - Simulated getter/setter storage
//! - [`EventStore`] - Simulated event subscriber chains
//! - [`MockRepository`] - The expectation engine unhandled calls are forwarded to
//! - [`ProxyConfig`] - Which calls are simulated
//!
//! # Dispatch Order
//!
//! 1. Call-through methods run their real implementation
//! 2. Simulated property accessors read/write the [`PropertyStore`]
//! 3. Event adders/removers update the [`EventStore`]
//! 4. Everything else goes to the [`MockRepository`]

mod config;
mod event;
mod identity;
mod property;
mod registry;
mod repository;
mod state;

pub use config::ProxyConfig;
pub use event::EventStore;
pub use identity::ProxyHash;
pub use property::{PropertyKey, PropertyStore};
pub use registry::IdentityRegistry;
pub use repository::MockRepository;
pub use state::{Dispatch, ProxyState, ProxyStateBuilder};
