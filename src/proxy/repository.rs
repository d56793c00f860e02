//! Interface to the expectation engine.

use crate::{member::MethodToken, proxy::ProxyHash, value::Value, Result};

/// The expectation record/replay engine a proxy falls back to.
///
/// Calls that are neither call-through nor simulated are handed to the
/// repository, which decides the result from recorded expectations. A single
/// repository is typically shared by many proxies, hence the `proxy`
/// argument.
///
/// # Examples
///
/// ```rust
/// use dotmock::{member::MethodToken, proxy::{MockRepository, ProxyHash}, value::Value, Result};
///
/// struct ReturnsDefault;
///
/// impl MockRepository for ReturnsDefault {
///     fn handle_call(&self, _proxy: ProxyHash, _method: &MethodToken, _args: &[Value]) -> Result<Option<Value>> {
///         Ok(None)
///     }
/// }
/// ```
pub trait MockRepository: Send + Sync {
    /// Resolves an intercepted call on the proxy identified by `proxy`.
    ///
    /// # Errors
    ///
    /// Implementations report unexpected or failing calls as
    /// [`Error::Repository`](crate::Error::Repository).
    fn handle_call(
        &self,
        proxy: ProxyHash,
        method: &MethodToken,
        args: &[Value],
    ) -> Result<Option<Value>>;
}
