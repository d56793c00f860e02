use thiserror::Error;

/// The generic Error type, which covers every failure this library can report.
///
/// Only [`Error::UninitializedValueTypeProperty`] is part of normal mock
/// semantics: it is raised when a test reads a value-typed simulated property
/// that was never written. The remaining variants report malformed input from
/// the interception layer, or failures surfaced by the expectation engine.
///
/// # Examples
///
/// ```rust
/// use dotmock::Error;
///
/// let err = Error::UninitializedValueTypeProperty {
///     property: "Count".to_string(),
/// };
/// assert!(err.to_string().contains("Count"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A value-typed simulated property was read before any value was set.
    ///
    /// Value types cannot be `null`, and returning a default would hide a
    /// missing setup call in the test. This error is never retried.
    #[error("Can't return a value for property {property} because no value was set and the property returns a value type")]
    UninitializedValueTypeProperty {
        /// Logical name of the property (accessor prefix stripped)
        property: String,
    },

    /// An accessor was invoked with fewer arguments than it requires.
    #[error("Method {method} expects at least {expected} argument(s)")]
    MissingArgument {
        /// Name of the invoked method
        method: String,
        /// Minimum number of arguments required
        expected: usize,
    },

    /// An event accessor received an argument that is not a callback.
    #[error("Event accessor {method} requires a callback argument")]
    NotACallback {
        /// Name of the invoked accessor
        method: String,
    },

    /// A method was routed to a store that does not handle its accessor kind.
    #[error("Method {method} is not a valid {expected} accessor")]
    NotAnAccessor {
        /// Name of the invoked method
        method: String,
        /// The accessor family that was expected (`property` or `event`)
        expected: &'static str,
    },

    /// The expectation engine rejected or failed to handle a call.
    #[error("Repository - {0}")]
    Repository(String),
}
