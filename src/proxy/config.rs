//! Proxy simulation configuration.
//!
//! [`ProxyConfig`] decides which calls the proxy state answers on its own
//! before consulting the expectation engine.
//!
//! # Configuration Presets
//!
//! - [`ProxyConfig::mock()`] - Registered properties simulated, events simulated (default)
//! - [`ProxyConfig::stub()`] - Every property and event simulated
//! - [`ProxyConfig::strict()`] - Only registered properties simulated; events go to the repository
//!
//! # Example
//!
//! ```rust
//! use dotmock::proxy::ProxyConfig;
//!
//! let config = ProxyConfig {
//!     simulate_events: false,
//!     ..ProxyConfig::stub()
//! };
//! assert!(config.simulate_all_properties);
//! ```

/// Controls the simulated dispatch paths of a proxy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProxyConfig {
    /// Handle event adders/removers in the event store instead of forwarding them.
    pub simulate_events: bool,

    /// Treat every getter/setter as a simulated property, registered or not.
    pub simulate_all_properties: bool,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        ProxyConfig {
            simulate_events: true,
            simulate_all_properties: false,
        }
    }
}

impl ProxyConfig {
    /// Regular mock: only properties registered for simulation are stored.
    #[must_use]
    pub fn mock() -> Self {
        Self::default()
    }

    /// Stub: all properties behave like simple fields.
    #[must_use]
    pub fn stub() -> Self {
        ProxyConfig {
            simulate_events: true,
            simulate_all_properties: true,
        }
    }

    /// Strict mock: event subscriptions are recorded as expectations too.
    #[must_use]
    pub fn strict() -> Self {
        ProxyConfig {
            simulate_events: false,
            simulate_all_properties: false,
        }
    }
}
