//! Simulated event subscription.

use std::collections::HashMap;

use crate::{
    member::{AccessorKind, MethodToken},
    value::{CallbackChain, Value},
    Error, Result,
};

/// Subscriber chains of one proxy, keyed by logical event name.
///
/// An event that was never subscribed to, or whose last subscriber was
/// removed, has no chain at all.
#[derive(Debug, Default)]
pub struct EventStore {
    subscribers: HashMap<String, CallbackChain>,
}

impl EventStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Performs the subscribe or unsubscribe that `method` stands for.
    ///
    /// Adders append `args[0]` to the event's chain. Removers drop the first
    /// reference-equal occurrence; removing an unknown callback does nothing.
    /// A null handler is accepted by both and leaves the chain untouched.
    ///
    /// # Errors
    ///
    /// - [`Error::NotAnAccessor`] if `method` is not an adder or remover
    /// - [`Error::MissingArgument`] if no callback argument was passed
    /// - [`Error::NotACallback`] if the first argument is neither a callback nor null
    pub fn handle(&mut self, method: &MethodToken, args: &[Value]) -> Result<()> {
        let kind = match method.accessor() {
            Some(kind) if kind.is_event() => kind,
            _ => {
                return Err(Error::NotAnAccessor {
                    method: method.name().to_string(),
                    expected: "event",
                })
            }
        };

        let Some(first) = args.first() else {
            return Err(Error::MissingArgument {
                method: method.name().to_string(),
                expected: 1,
            });
        };
        let callback = match first {
            Value::Callback(callback) => callback,
            Value::Null => {
                tracing::trace!(event = method.member_name(), "ignored null handler");
                return Ok(());
            }
            _ => {
                return Err(Error::NotACallback {
                    method: method.name().to_string(),
                })
            }
        };

        let event = method.member_name();
        if kind == AccessorKind::Adder {
            tracing::trace!(event, "event subscribed");
            self.subscribers
                .entry(event.to_string())
                .or_default()
                .combine(callback.clone());
            return Ok(());
        }

        if let Some(chain) = self.subscribers.get_mut(event) {
            let removed = chain.remove(callback);
            tracing::trace!(event, removed, "event unsubscribed");
            if chain.is_empty() {
                self.subscribers.remove(event);
            }
        }
        Ok(())
    }

    /// The current subscribers of `event`, or `None` if there are none.
    #[must_use]
    pub fn subscribers(&self, event: &str) -> Option<&CallbackChain> {
        self.subscribers.get(event)
    }
}
