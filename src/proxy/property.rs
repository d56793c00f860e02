//! Simulated property storage.
//!
//! Getter and setter calls on a simulated property read and write a plain
//! key/value map. The key is the logical property name, extended with the
//! hash code of every index argument for indexed properties, so `this[1]`
//! and `this[2]` are stored apart while the getter and setter of `this[1]`
//! share a slot.

use std::{collections::HashMap, sync::Arc};

use crate::{
    member::{AccessorKind, MethodToken},
    value::Value,
    Error, Result,
};

/// Storage key of one simulated property slot.
///
/// Keys are structured rather than concatenated strings, so a property
/// `Item` indexed by `12` cannot collide with a property `Item1` indexed
/// by `2`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PropertyKey {
    name: Arc<str>,
    index: Vec<u64>,
}

impl PropertyKey {
    /// Derives the key for an accessor invoked with `args`.
    ///
    /// A getter with no arguments or a setter with exactly one argument maps
    /// to the bare property name. Otherwise every index argument contributes
    /// its hash code in positional order; the trailing value argument of a
    /// setter is not part of the key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAnAccessor`] if `method` is not a getter or setter.
    pub fn derive(method: &MethodToken, args: &[Value]) -> Result<Self> {
        let index_args = match method.accessor() {
            Some(AccessorKind::Getter) => args,
            Some(AccessorKind::Setter) => args.split_last().map_or(args, |(_, index)| index),
            _ => {
                return Err(Error::NotAnAccessor {
                    method: method.name().to_string(),
                    expected: "property",
                })
            }
        };

        Ok(PropertyKey {
            name: Arc::from(method.member_name()),
            index: index_args.iter().map(Value::hash_code).collect(),
        })
    }

    /// The logical property name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if the key addresses an indexed slot.
    #[must_use]
    pub fn is_indexed(&self) -> bool {
        !self.index.is_empty()
    }
}

/// Backing store for simulated getter/setter pairs of one proxy.
#[derive(Debug, Default)]
pub struct PropertyStore {
    values: HashMap<PropertyKey, Value>,
}

impl PropertyStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Performs the get or set that `method` stands for.
    ///
    /// Getters return `Some(value)` once the slot was written, and `None`
    /// (the unset sentinel) for reference-typed slots that never were.
    /// Setters store their trailing argument and return `None`.
    ///
    /// # Errors
    ///
    /// - [`Error::UninitializedValueTypeProperty`] if a value-typed getter is
    ///   read before its slot was written
    /// - [`Error::MissingArgument`] if a setter is called without a value
    /// - [`Error::NotAnAccessor`] if `method` is not a getter or setter
    pub fn handle(&mut self, method: &MethodToken, args: &[Value]) -> Result<Option<Value>> {
        let key = PropertyKey::derive(method, args)?;

        if method.accessor() == Some(AccessorKind::Getter) {
            return match self.values.get(&key) {
                Some(value) => Ok(Some(value.clone())),
                None if method.returns_value_type() => {
                    Err(Error::UninitializedValueTypeProperty {
                        property: key.name().to_string(),
                    })
                }
                None => Ok(None),
            };
        }

        let Some(value) = args.last() else {
            return Err(Error::MissingArgument {
                method: method.name().to_string(),
                expected: 1,
            });
        };

        tracing::trace!(property = key.name(), indexed = key.is_indexed(), "property set");
        self.values.insert(key, value.clone());
        Ok(None)
    }

    /// Number of stored slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if nothing was stored yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn getter(name: &str, value_type: bool) -> MethodToken {
        MethodToken::accessor_for("A.B", AccessorKind::Getter, name).with_value_type_return(value_type)
    }

    fn setter(name: &str) -> MethodToken {
        MethodToken::accessor_for("A.B", AccessorKind::Setter, name)
    }

    #[test]
    fn test_key_getter_and_setter_agree() {
        let plain_get = PropertyKey::derive(&getter("Name", false), &[]).unwrap();
        let plain_set = PropertyKey::derive(&setter("Name"), &[Value::from("x")]).unwrap();
        assert_eq!(plain_get, plain_set);
        assert!(!plain_get.is_indexed());

        let idx_get = PropertyKey::derive(&getter("Item", false), &[Value::I32(1)]).unwrap();
        let idx_set =
            PropertyKey::derive(&setter("Item"), &[Value::I32(1), Value::from("v")]).unwrap();
        assert_eq!(idx_get, idx_set);
        assert!(idx_get.is_indexed());
        assert_eq!(idx_get.name(), "Item");
    }

    #[test]
    fn test_key_index_sensitive() {
        let one = PropertyKey::derive(&getter("Item", false), &[Value::I32(1)]).unwrap();
        let two = PropertyKey::derive(&getter("Item", false), &[Value::I32(2)]).unwrap();
        let pair = PropertyKey::derive(&getter("Item", false), &[Value::I32(1), Value::I32(2)]).unwrap();
        let swapped =
            PropertyKey::derive(&getter("Item", false), &[Value::I32(2), Value::I32(1)]).unwrap();

        assert_ne!(one, two);
        assert_ne!(pair, swapped);
    }

    #[test]
    fn test_key_rejects_non_property() {
        let adder = MethodToken::new("A.B", "add_Click");
        assert!(matches!(
            PropertyKey::derive(&adder, &[]),
            Err(Error::NotAnAccessor { expected: "property", .. })
        ));
        assert!(PropertyKey::derive(&MethodToken::new("A.B", "Run"), &[]).is_err());
    }

    #[test]
    fn test_value_type_getter_unset_fails() {
        let mut store = PropertyStore::new();
        let err = store.handle(&getter("Count", true), &[]).unwrap_err();
        assert_eq!(
            err,
            Error::UninitializedValueTypeProperty {
                property: "Count".to_string()
            }
        );
    }

    #[test]
    fn test_reference_getter_unset_returns_none() {
        let mut store = PropertyStore::new();
        assert_eq!(store.handle(&getter("Label", false), &[]).unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_then_get() {
        let mut store = PropertyStore::new();
        assert_eq!(store.handle(&setter("Count"), &[Value::I32(9)]).unwrap(), None);
        assert_eq!(
            store.handle(&getter("Count", true), &[]).unwrap(),
            Some(Value::I32(9))
        );

        store.handle(&setter("Count"), &[Value::I32(10)]).unwrap();
        assert_eq!(
            store.handle(&getter("Count", true), &[]).unwrap(),
            Some(Value::I32(10))
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_stored_null_is_distinct_from_unset() {
        let mut store = PropertyStore::new();
        store.handle(&setter("Owner"), &[Value::Null]).unwrap();
        assert_eq!(
            store.handle(&getter("Owner", true), &[]).unwrap(),
            Some(Value::Null)
        );
    }

    #[test]
    fn test_indexed_slots_independent() {
        let mut store = PropertyStore::new();
        store
            .handle(&setter("Item"), &[Value::I32(2), Value::from("two")])
            .unwrap();
        store
            .handle(&setter("Item"), &[Value::I32(1), Value::from("one")])
            .unwrap();

        assert_eq!(
            store.handle(&getter("Item", false), &[Value::I32(1)]).unwrap(),
            Some(Value::from("one"))
        );
        assert_eq!(
            store.handle(&getter("Item", false), &[Value::I32(2)]).unwrap(),
            Some(Value::from("two"))
        );
        assert_eq!(store.handle(&getter("Item", false), &[]).unwrap(), None);
    }

    #[test]
    fn test_indexed_value_type_has_no_fallback() {
        let mut store = PropertyStore::new();
        store
            .handle(&setter("Item"), &[Value::I32(1), Value::I32(100)])
            .unwrap();
        assert!(matches!(
            store.handle(&getter("Item", true), &[Value::I32(3)]),
            Err(Error::UninitializedValueTypeProperty { .. })
        ));
    }

    #[test]
    fn test_setter_without_value() {
        let mut store = PropertyStore::new();
        assert_eq!(
            store.handle(&setter("Count"), &[]).unwrap_err(),
            Error::MissingArgument {
                method: "set_Count".to_string(),
                expected: 1
            }
        );
    }
}
