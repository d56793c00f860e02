//! Event callbacks and their combined subscriber chains.

use std::{fmt, sync::Arc};

use crate::value::Value;

/// Signature of a callback body.
///
/// Callbacks receive the event arguments and may return a value; when a
/// chain is invoked, the last subscriber's result wins.
pub type CallbackFn = dyn Fn(&[Value]) -> Option<Value> + Send + Sync;

/// A shared, reference-compared callback.
///
/// Cloning a `Callback` yields the *same* callback: clones compare equal and
/// can unsubscribe each other. Two callbacks built from identical closures
/// are different callbacks.
///
/// # Examples
///
/// ```rust
/// use dotmock::value::{Callback, Value};
///
/// let cb = Callback::new(|args| args.first().cloned());
/// assert_eq!(cb, cb.clone());
/// assert_ne!(cb, Callback::new(|args| args.first().cloned()));
/// assert_eq!(cb.invoke(&[Value::I32(5)]), Some(Value::I32(5)));
/// ```
#[derive(Clone)]
pub struct Callback(Arc<CallbackFn>);

impl Callback {
    /// Wraps a closure as a callback.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Option<Value> + Send + Sync + 'static,
    {
        Callback(Arc::new(f))
    }

    /// Calls the callback.
    pub fn invoke(&self, args: &[Value]) -> Option<Value> {
        (self.0)(args)
    }

    /// Address of the shared closure, used for identity comparison.
    pub(crate) fn addr(&self) -> usize {
        Arc::as_ptr(&self.0).cast::<()>() as usize
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        self.addr() == other.addr()
    }
}

impl Eq for Callback {}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Callback(0x{:x})", self.addr())
    }
}

/// Ordered list of subscribers for a single event.
///
/// Adding keeps insertion order and duplicates. Removing drops the first
/// occurrence that is reference-equal to the given callback, so a callback
/// added twice has to be removed twice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallbackChain {
    callbacks: Vec<Callback>,
}

impl CallbackChain {
    /// Creates an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a subscriber.
    pub fn combine(&mut self, callback: Callback) {
        self.callbacks.push(callback);
    }

    /// Removes the first occurrence of `callback`.
    ///
    /// Returns `false` if the callback was not subscribed; that is not an
    /// error.
    pub fn remove(&mut self, callback: &Callback) -> bool {
        match self.callbacks.iter().position(|cb| cb == callback) {
            Some(index) => {
                self.callbacks.remove(index);
                true
            }
            None => false,
        }
    }

    /// Invokes every subscriber in order and returns the last result.
    ///
    /// An empty chain returns `None`.
    pub fn invoke(&self, args: &[Value]) -> Option<Value> {
        self.callbacks
            .iter()
            .fold(None, |_, callback| callback.invoke(args))
    }

    /// Returns `true` if `callback` is subscribed at least once.
    #[must_use]
    pub fn contains(&self, callback: &Callback) -> bool {
        self.callbacks.contains(callback)
    }

    /// Number of subscriptions, counting duplicates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// Returns `true` if there are no subscribers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// Iterates subscribers in invocation order.
    pub fn iter(&self) -> impl Iterator<Item = &Callback> {
        self.callbacks.iter()
    }

    /// The subscribers as a slice, in invocation order.
    #[must_use]
    pub fn as_slice(&self) -> &[Callback] {
        &self.callbacks
    }
}
