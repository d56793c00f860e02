//! Runtime values exchanged with intercepted calls.
//!
//! [`Value`] represents every argument and return value the proxy state
//! handles: primitives, strings, opaque object references, other proxies and
//! event callbacks. Index arguments of indexed properties are reduced to a
//! [`Value::hash_code()`] when building property keys.

mod callback;

pub use callback::{Callback, CallbackChain, CallbackFn};

use std::{
    fmt,
    hash::{DefaultHasher, Hash, Hasher},
    sync::Arc,
};

use crate::proxy::ProxyHash;

/// Runtime value passed to or returned from an intercepted call.
///
/// | Host type | Variant |
/// |-----------|---------|
/// | `null` reference | [`Value::Null`] |
/// | `bool` | [`Value::Bool`] |
/// | `int32` and narrower | [`Value::I32`] |
/// | `int64` | [`Value::I64`] |
/// | `float32`, `float64` | [`Value::F64`] |
/// | `char` | [`Value::Char`] |
/// | `string` | [`Value::String`] |
/// | Other object | [`Value::Object`] |
/// | Mocked object | [`Value::Proxy`] |
/// | Delegate | [`Value::Callback`] |
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Null reference.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 32-bit signed integer.
    I32(i32),
    /// 64-bit signed integer.
    I64(i64),
    /// Floating point number.
    F64(f64),
    /// Unicode character.
    Char(char),
    /// Immutable string.
    String(Arc<str>),
    /// Reference to an object owned by the host.
    Object(ObjectRef),
    /// Reference to another mocked object, identified by its proxy hash.
    Proxy(ProxyHash),
    /// Event handler or other delegate.
    Callback(Callback),
}

impl Value {
    /// Returns the hash code used to key indexed property storage.
    ///
    /// Floating point values hash by bit pattern, so `0.0` and `-0.0` address
    /// different slots. Proxies hash by their [`ProxyHash`], callbacks by
    /// reference identity.
    #[must_use]
    pub fn hash_code(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        std::mem::discriminant(self).hash(&mut hasher);
        match self {
            Value::Null => {}
            Value::Bool(v) => v.hash(&mut hasher),
            Value::I32(v) => v.hash(&mut hasher),
            Value::I64(v) => v.hash(&mut hasher),
            Value::F64(v) => v.to_bits().hash(&mut hasher),
            Value::Char(v) => v.hash(&mut hasher),
            Value::String(v) => v.hash(&mut hasher),
            Value::Object(v) => v.hash(&mut hasher),
            Value::Proxy(v) => v.hash(&mut hasher),
            Value::Callback(v) => v.addr().hash(&mut hasher),
        }
        hasher.finish()
    }

    /// Returns `true` for [`Value::Null`].
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the callback if this value is one.
    #[must_use]
    pub fn as_callback(&self) -> Option<&Callback> {
        match self {
            Value::Callback(cb) => Some(cb),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::I32(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::I64(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::F64(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Char(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(Arc::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(Arc::from(value))
    }
}

impl From<ObjectRef> for Value {
    fn from(value: ObjectRef) -> Self {
        Value::Object(value)
    }
}

impl From<ProxyHash> for Value {
    fn from(value: ProxyHash) -> Self {
        Value::Proxy(value)
    }
}

impl From<Callback> for Value {
    fn from(value: Callback) -> Self {
        Value::Callback(value)
    }
}

/// Opaque reference to a host-owned object.
///
/// The id is assigned by the host and compared by value; the proxy state
/// never dereferences it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectRef(pub u64);

impl ObjectRef {
    /// Creates a reference with the given host id.
    #[must_use]
    pub fn new(id: u64) -> Self {
        ObjectRef(id)
    }

    /// Returns the host id.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectRef({})", self.0)
    }
}
