//! Per-instance proxy state and call dispatch.
//!
//! [`ProxyState`] is the runtime state behind one mocked instance. The
//! interception layer routes every call on the instance into
//! [`ProxyState::intercept`], which resolves it in a fixed order:
//!
//! ```text
//!  intercepted call
//!        |
//!        v
//!  call-through?  --yes--> real implementation
//!        | no
//!        v
//!  simulated property? --yes--> PropertyStore
//!        | no
//!        v
//!  simulated event? --yes--> EventStore
//!        | no
//!        v
//!  MockRepository (expectations)
//! ```
//!
//! # Thread Safety
//!
//! A proxy is driven by one test thread at a time; the stores are mutated
//! through `&mut self` and carry no locks. Only identity assignment is
//! shared between threads, see [`ProxyHash`].

use std::{
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

use crate::{
    member::{MethodToken, PropertyDescriptor},
    proxy::{
        EventStore, IdentityRegistry, MockRepository, PropertyStore, ProxyConfig, ProxyHash,
    },
    value::{CallbackChain, Value},
    Result,
};

/// The route an intercepted call takes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// Run the real implementation.
    CallOriginal,
    /// Read or write simulated property storage.
    Property,
    /// Subscribe or unsubscribe a simulated event handler.
    Event,
    /// Defer to the expectation engine.
    Repository,
}

/// Runtime state of one mocked instance.
///
/// Equality and hashing use only the [`ProxyHash`], so proxies can key maps
/// without touching the mocked type's own (possibly intercepted) equality.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use dotmock::prelude::*;
///
/// struct NoExpectations;
///
/// impl MockRepository for NoExpectations {
///     fn handle_call(&self, _: ProxyHash, _: &MethodToken, _: &[Value]) -> dotmock::Result<Option<Value>> {
///         Ok(None)
///     }
/// }
///
/// let count = PropertyDescriptor::read_write("Shop.Cart", "Count", true);
/// let mut proxy = ProxyState::new(Arc::new(NoExpectations));
/// proxy.mark_property_accessor(&count);
///
/// proxy.handle_property_call(count.setter().unwrap(), &[Value::I32(3)])?;
/// let value = proxy.handle_property_call(count.getter().unwrap(), &[])?;
/// assert_eq!(value, Some(Value::I32(3)));
/// # Ok::<(), dotmock::Error>(())
/// ```
pub struct ProxyState {
    repository: Arc<dyn MockRepository>,
    proxy_hash: ProxyHash,
    config: ProxyConfig,
    registry: IdentityRegistry,
    properties: PropertyStore,
    events: EventStore,
}

impl ProxyState {
    /// Creates the state for a new mocked instance with the default configuration.
    ///
    /// A fresh [`ProxyHash`] is drawn from the process-wide counter.
    #[must_use]
    pub fn new(repository: Arc<dyn MockRepository>) -> Self {
        Self::with_config(repository, ProxyConfig::default())
    }

    /// Creates the state for a new mocked instance with a custom configuration.
    #[must_use]
    pub fn with_config(repository: Arc<dyn MockRepository>, config: ProxyConfig) -> Self {
        let proxy_hash = ProxyHash::next();
        tracing::debug!(proxy = %proxy_hash, ?config, "created proxy state");

        ProxyState {
            repository,
            proxy_hash,
            config,
            registry: IdentityRegistry::new(),
            properties: PropertyStore::new(),
            events: EventStore::new(),
        }
    }

    /// The process-unique identity of this proxy.
    #[must_use]
    pub fn proxy_hash(&self) -> ProxyHash {
        self.proxy_hash
    }

    /// The expectation engine this proxy falls back to.
    #[must_use]
    pub fn repository(&self) -> &Arc<dyn MockRepository> {
        &self.repository
    }

    /// The active simulation configuration.
    #[must_use]
    pub fn config(&self) -> &ProxyConfig {
        &self.config
    }

    /// Marks a method to run its real implementation.
    pub fn mark_call_original(&mut self, method: MethodToken) {
        self.registry.mark_call_original(method);
    }

    /// Returns `true` if calls to `method` should run the real implementation.
    #[must_use]
    pub fn should_call_original(&self, method: &MethodToken) -> bool {
        self.registry.should_call_original(method)
    }

    /// Marks the accessors of `property` as simulated.
    pub fn mark_property_accessor(&mut self, property: &PropertyDescriptor) {
        self.registry.mark_property_accessor(property);
    }

    /// Returns `true` if `method` was registered as a simulated property accessor.
    #[must_use]
    pub fn is_property_accessor(&self, method: &MethodToken) -> bool {
        self.registry.is_property_accessor(method)
    }

    /// Performs a simulated property get or set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UninitializedValueTypeProperty`](crate::Error::UninitializedValueTypeProperty)
    /// when a value-typed property is read before it was written, and
    /// argument errors for malformed calls; see [`PropertyStore::handle`].
    pub fn handle_property_call(
        &mut self,
        method: &MethodToken,
        args: &[Value],
    ) -> Result<Option<Value>> {
        self.properties.handle(method, args)
    }

    /// Performs a simulated event subscribe or unsubscribe.
    ///
    /// # Errors
    ///
    /// Returns argument errors for malformed calls; see [`EventStore::handle`].
    pub fn handle_event_call(&mut self, method: &MethodToken, args: &[Value]) -> Result<()> {
        self.events.handle(method, args)
    }

    /// The current subscribers of `event`, or `None` if there are none.
    #[must_use]
    pub fn get_subscribers(&self, event: &str) -> Option<&CallbackChain> {
        self.events.subscribers(event)
    }

    /// Invokes the subscribers of `event` in order, returning the last result.
    pub fn raise_event(&self, event: &str, args: &[Value]) -> Option<Value> {
        self.get_subscribers(event).and_then(|chain| chain.invoke(args))
    }

    /// Decides the route a call to `method` takes, without executing it.
    #[must_use]
    pub fn classify(&self, method: &MethodToken) -> Dispatch {
        if self.should_call_original(method) {
            Dispatch::CallOriginal
        } else if self.is_property_accessor(method)
            || (self.config.simulate_all_properties && method.is_property_accessor())
        {
            Dispatch::Property
        } else if self.config.simulate_events && method.is_event_accessor() {
            Dispatch::Event
        } else {
            Dispatch::Repository
        }
    }

    /// Resolves an intercepted call.
    ///
    /// `call_original` runs the real implementation and is only invoked for
    /// call-through methods.
    ///
    /// # Errors
    ///
    /// Propagates errors from the property store, the event store and the
    /// repository.
    pub fn intercept<F>(
        &mut self,
        method: &MethodToken,
        args: &[Value],
        call_original: F,
    ) -> Result<Option<Value>>
    where
        F: FnOnce(&[Value]) -> Option<Value>,
    {
        let route = self.classify(method);
        tracing::trace!(proxy = %self.proxy_hash, method = %method, ?route, "intercepted call");

        match route {
            Dispatch::CallOriginal => Ok(call_original(args)),
            Dispatch::Property => self.handle_property_call(method, args),
            Dispatch::Event => self.handle_event_call(method, args).map(|()| None),
            Dispatch::Repository => self.repository.handle_call(self.proxy_hash, method, args),
        }
    }
}

impl PartialEq for ProxyState {
    fn eq(&self, other: &Self) -> bool {
        self.proxy_hash == other.proxy_hash
    }
}

impl Eq for ProxyState {}

impl Hash for ProxyState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.proxy_hash.hash(state);
    }
}

impl fmt::Debug for ProxyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyState")
            .field("proxy_hash", &self.proxy_hash)
            .field("config", &self.config)
            .field("registry", &self.registry)
            .field("properties", &self.properties)
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}

/// Fluent builder for [`ProxyState`].
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use dotmock::prelude::*;
///
/// struct NoExpectations;
///
/// impl MockRepository for NoExpectations {
///     fn handle_call(&self, _: ProxyHash, _: &MethodToken, _: &[Value]) -> dotmock::Result<Option<Value>> {
///         Ok(None)
///     }
/// }
///
/// let to_string = MethodToken::new("Shop.Cart", "ToString");
/// let count = PropertyDescriptor::read_write("Shop.Cart", "Count", true);
///
/// let proxy = ProxyStateBuilder::new(Arc::new(NoExpectations))
///     .config(ProxyConfig::strict())
///     .call_original(to_string.clone())
///     .property(count.clone())
///     .build();
///
/// assert_eq!(proxy.classify(&to_string), Dispatch::CallOriginal);
/// assert_eq!(proxy.classify(count.getter().unwrap()), Dispatch::Property);
/// assert_eq!(proxy.classify(&MethodToken::new("Shop.Cart", "add_Changed")), Dispatch::Repository);
/// ```
pub struct ProxyStateBuilder {
    repository: Arc<dyn MockRepository>,
    config: ProxyConfig,
    call_original: Vec<MethodToken>,
    properties: Vec<PropertyDescriptor>,
}

impl ProxyStateBuilder {
    /// Starts a builder for a proxy backed by `repository`.
    #[must_use]
    pub fn new(repository: Arc<dyn MockRepository>) -> Self {
        ProxyStateBuilder {
            repository,
            config: ProxyConfig::default(),
            call_original: Vec::new(),
            properties: Vec::new(),
        }
    }

    /// Sets the simulation configuration.
    #[must_use]
    pub fn config(mut self, config: ProxyConfig) -> Self {
        self.config = config;
        self
    }

    /// Registers a call-through method.
    #[must_use]
    pub fn call_original(mut self, method: MethodToken) -> Self {
        self.call_original.push(method);
        self
    }

    /// Registers a simulated property.
    #[must_use]
    pub fn property(mut self, property: PropertyDescriptor) -> Self {
        self.properties.push(property);
        self
    }

    /// Builds the state, assigning a fresh [`ProxyHash`].
    #[must_use]
    pub fn build(self) -> ProxyState {
        let mut state = ProxyState::with_config(self.repository, self.config);
        for method in self.call_original {
            state.mark_call_original(method);
        }
        for property in &self.properties {
            state.mark_property_accessor(property);
        }
        state
    }
}
