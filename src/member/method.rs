//! Method identity tokens.
//!
//! A [`MethodToken`] is produced once by the binding layer for every member it
//! resolves on the mocked type, and is then used purely as an identity key by
//! the proxy state. Accessor classification is resolved when the token is
//! built and stored as an [`AccessorKind`], so dispatch never inspects names.

use std::{fmt, sync::Arc};

use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

/// The role of a compiler-synthesized accessor method.
///
/// | Kind | Name prefix | Backs |
/// |------|-------------|-------|
/// | [`Getter`](Self::Getter) | `get_` | property read |
/// | [`Setter`](Self::Setter) | `set_` | property write |
/// | [`Adder`](Self::Adder) | `add_` | event subscribe |
/// | [`Remover`](Self::Remover) | `remove_` | event unsubscribe |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
pub enum AccessorKind {
    /// Property getter (`get_Name`)
    Getter,
    /// Property setter (`set_Name`)
    Setter,
    /// Event subscription (`add_Name`)
    Adder,
    /// Event unsubscription (`remove_Name`)
    Remover,
}

impl AccessorKind {
    /// The method name prefix used by this accessor kind.
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            AccessorKind::Getter => "get_",
            AccessorKind::Setter => "set_",
            AccessorKind::Adder => "add_",
            AccessorKind::Remover => "remove_",
        }
    }

    /// Splits a method name into its accessor kind and logical member name.
    ///
    /// Returns `None` for names that do not follow the accessor naming
    /// convention, or whose member part would be empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotmock::member::AccessorKind;
    ///
    /// assert_eq!(AccessorKind::parse("get_Item"), Some((AccessorKind::Getter, "Item")));
    /// assert_eq!(AccessorKind::parse("remove_Click"), Some((AccessorKind::Remover, "Click")));
    /// assert_eq!(AccessorKind::parse("Dispose"), None);
    /// ```
    #[must_use]
    pub fn parse(method_name: &str) -> Option<(AccessorKind, &str)> {
        AccessorKind::iter().find_map(|kind| {
            method_name
                .strip_prefix(kind.prefix())
                .filter(|member| !member.is_empty())
                .map(|member| (kind, member))
        })
    }

    /// Returns `true` for getters and setters.
    #[must_use]
    pub fn is_property(self) -> bool {
        matches!(self, AccessorKind::Getter | AccessorKind::Setter)
    }

    /// Returns `true` for event adders and removers.
    #[must_use]
    pub fn is_event(self) -> bool {
        matches!(self, AccessorKind::Adder | AccessorKind::Remover)
    }
}

impl fmt::Display for AccessorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name: &'static str = self.into();
        f.write_str(name)
    }
}

/// Immutable identity of a callable member on a mocked type.
///
/// Two tokens are equal when declaring type, name, parameter signature and
/// classification all match, which distinguishes overloads from each other.
/// Tokens are cheap to clone: all strings are shared.
///
/// # Examples
///
/// ```rust
/// use dotmock::member::{AccessorKind, MethodToken};
///
/// let getter = MethodToken::new("Shop.Cart", "get_Total").with_value_type_return(true);
/// assert_eq!(getter.accessor(), Some(AccessorKind::Getter));
/// assert_eq!(getter.member_name(), "Total");
///
/// let run = MethodToken::new("Shop.Cart", "Checkout").with_params(["System.String"]);
/// assert_eq!(run.accessor(), None);
/// assert_eq!(run.member_name(), "Checkout");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct MethodToken {
    declaring_type: Arc<str>,
    name: Arc<str>,
    params: Arc<[Arc<str>]>,
    accessor: Option<AccessorKind>,
    member_name: Arc<str>,
    returns_value_type: bool,
}

impl MethodToken {
    /// Creates a token, classifying the method by the accessor naming convention.
    ///
    /// # Arguments
    ///
    /// * `declaring_type` - Full name of the type that declares the method
    /// * `name` - The method name as emitted by the compiler (e.g. `get_Count`)
    #[must_use]
    pub fn new(declaring_type: impl Into<Arc<str>>, name: impl Into<Arc<str>>) -> Self {
        let name: Arc<str> = name.into();
        let (accessor, member_name) = match AccessorKind::parse(&name) {
            Some((kind, member)) => (Some(kind), Arc::from(member)),
            None => (None, name.clone()),
        };

        MethodToken {
            declaring_type: declaring_type.into(),
            name,
            params: Arc::from(Vec::new()),
            accessor,
            member_name,
            returns_value_type: false,
        }
    }

    /// Creates an accessor token with an explicit classification.
    ///
    /// Use this when the binding layer knows the accessor role from metadata
    /// rather than from the method name.
    #[must_use]
    pub fn accessor_for(
        declaring_type: impl Into<Arc<str>>,
        kind: AccessorKind,
        member_name: impl Into<Arc<str>>,
    ) -> Self {
        let member_name: Arc<str> = member_name.into();
        MethodToken {
            declaring_type: declaring_type.into(),
            name: Arc::from(format!("{}{}", kind.prefix(), member_name)),
            params: Arc::from(Vec::new()),
            accessor: Some(kind),
            member_name,
            returns_value_type: false,
        }
    }

    /// Sets the parameter type signature.
    #[must_use]
    pub fn with_params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Arc<str>>,
    {
        self.params = params.into_iter().map(Into::into).collect();
        self
    }

    /// Marks whether the method returns a non-nullable value type.
    #[must_use]
    pub fn with_value_type_return(mut self, returns_value_type: bool) -> Self {
        self.returns_value_type = returns_value_type;
        self
    }

    /// Full name of the declaring type.
    #[must_use]
    pub fn declaring_type(&self) -> &str {
        &self.declaring_type
    }

    /// The method name, including any accessor prefix.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameter type names, in declaration order.
    #[must_use]
    pub fn params(&self) -> &[Arc<str>] {
        &self.params
    }

    /// The accessor role, or `None` for ordinary methods.
    #[must_use]
    pub fn accessor(&self) -> Option<AccessorKind> {
        self.accessor
    }

    /// The logical property or event name for accessors, the method name otherwise.
    #[must_use]
    pub fn member_name(&self) -> &str {
        &self.member_name
    }

    /// Whether the return type is a non-nullable value type.
    #[must_use]
    pub fn returns_value_type(&self) -> bool {
        self.returns_value_type
    }

    /// Returns `true` if this token is a property getter or setter.
    #[must_use]
    pub fn is_property_accessor(&self) -> bool {
        self.accessor.is_some_and(AccessorKind::is_property)
    }

    /// Returns `true` if this token is an event adder or remover.
    #[must_use]
    pub fn is_event_accessor(&self) -> bool {
        self.accessor.is_some_and(AccessorKind::is_event)
    }
}

impl fmt::Debug for MethodToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MethodToken({self})")
    }
}

impl fmt::Display for MethodToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}(", self.declaring_type, self.name)?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(param)?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_parse_all_prefixes() {
        for kind in AccessorKind::iter() {
            let name = format!("{}Value", kind.prefix());
            assert_eq!(AccessorKind::parse(&name), Some((kind, "Value")));
        }
    }

    #[test]
    fn test_parse_rejects_plain_and_bare_prefix() {
        assert_eq!(AccessorKind::parse("Execute"), None);
        assert_eq!(AccessorKind::parse("get_"), None);
        assert_eq!(AccessorKind::parse("getter"), None);
    }

    #[test]
    fn test_kind_families() {
        assert!(AccessorKind::Getter.is_property());
        assert!(AccessorKind::Setter.is_property());
        assert!(AccessorKind::Adder.is_event());
        assert!(AccessorKind::Remover.is_event());
        assert!(!AccessorKind::Adder.is_property());
        assert_eq!(AccessorKind::Remover.to_string(), "Remover");
    }

    #[test]
    fn test_new_classifies_by_name() {
        let setter = MethodToken::new("A.B", "set_Name");
        assert_eq!(setter.accessor(), Some(AccessorKind::Setter));
        assert_eq!(setter.member_name(), "Name");
        assert!(setter.is_property_accessor());
        assert!(!setter.is_event_accessor());

        let adder = MethodToken::new("A.B", "add_Changed");
        assert!(adder.is_event_accessor());
        assert_eq!(adder.member_name(), "Changed");
    }

    #[test]
    fn test_accessor_for_builds_conventional_name() {
        let token = MethodToken::accessor_for("A.B", AccessorKind::Remover, "Closed");
        assert_eq!(token.name(), "remove_Closed");
        assert_eq!(token, MethodToken::new("A.B", "remove_Closed"));
    }

    #[test]
    fn test_overloads_are_distinct() {
        let a = MethodToken::new("A.B", "Send").with_params(["System.Int32"]);
        let b = MethodToken::new("A.B", "Send").with_params(["System.String"]);
        let c = MethodToken::new("A.C", "Send").with_params(["System.Int32"]);

        let set: HashSet<_> = [a.clone(), b, c, a].into_iter().collect();
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_display() {
        let token = MethodToken::new("A.B", "get_Item").with_params(["System.Int32", "System.String"]);
        assert_eq!(token.to_string(), "A.B::get_Item(System.Int32, System.String)");
        assert_eq!(format!("{token:?}"), "MethodToken(A.B::get_Item(System.Int32, System.String))");
    }
}
