//! Property descriptors.

use std::sync::Arc;

use crate::member::{AccessorKind, MethodToken};

/// A resolved property: its name plus whichever accessors it declares.
///
/// Read-only properties have no setter and write-only properties have no
/// getter. Indexed properties share this shape; their index parameters live
/// in the accessor tokens' signatures.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PropertyDescriptor {
    declaring_type: Arc<str>,
    name: Arc<str>,
    getter: Option<MethodToken>,
    setter: Option<MethodToken>,
}

impl PropertyDescriptor {
    /// Creates a descriptor with no accessors.
    #[must_use]
    pub fn new(declaring_type: impl Into<Arc<str>>, name: impl Into<Arc<str>>) -> Self {
        PropertyDescriptor {
            declaring_type: declaring_type.into(),
            name: name.into(),
            getter: None,
            setter: None,
        }
    }

    /// Creates a read/write descriptor with conventional `get_`/`set_` accessors.
    ///
    /// # Arguments
    ///
    /// * `declaring_type` - Full name of the declaring type
    /// * `name` - Property name
    /// * `value_type` - Whether the property type is a non-nullable value type
    #[must_use]
    pub fn read_write(
        declaring_type: impl Into<Arc<str>>,
        name: impl Into<Arc<str>>,
        value_type: bool,
    ) -> Self {
        let declaring_type = declaring_type.into();
        let name = name.into();
        let getter =
            MethodToken::accessor_for(declaring_type.clone(), AccessorKind::Getter, name.clone())
                .with_value_type_return(value_type);
        let setter =
            MethodToken::accessor_for(declaring_type.clone(), AccessorKind::Setter, name.clone());

        PropertyDescriptor::new(declaring_type, name)
            .with_getter(getter)
            .with_setter(setter)
    }

    /// Attaches the getter token.
    #[must_use]
    pub fn with_getter(mut self, getter: MethodToken) -> Self {
        self.getter = Some(getter);
        self
    }

    /// Attaches the setter token.
    #[must_use]
    pub fn with_setter(mut self, setter: MethodToken) -> Self {
        self.setter = Some(setter);
        self
    }

    /// Full name of the declaring type.
    #[must_use]
    pub fn declaring_type(&self) -> &str {
        &self.declaring_type
    }

    /// The property name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The getter token, if the property is readable.
    #[must_use]
    pub fn getter(&self) -> Option<&MethodToken> {
        self.getter.as_ref()
    }

    /// The setter token, if the property is writable.
    #[must_use]
    pub fn setter(&self) -> Option<&MethodToken> {
        self.setter.as_ref()
    }

    /// Iterates over the accessors that are present.
    pub fn accessors(&self) -> impl Iterator<Item = &MethodToken> {
        self.getter.iter().chain(self.setter.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_write_accessors() {
        let prop = PropertyDescriptor::read_write("A.B", "Count", true);
        let getter = prop.getter().unwrap();
        let setter = prop.setter().unwrap();

        assert_eq!(getter.name(), "get_Count");
        assert!(getter.returns_value_type());
        assert_eq!(setter.name(), "set_Count");
        assert!(!setter.returns_value_type());
        assert_eq!(prop.accessors().count(), 2);
    }

    #[test]
    fn test_read_only_has_single_accessor() {
        let prop = PropertyDescriptor::new("A.B", "Id")
            .with_getter(MethodToken::new("A.B", "get_Id"));
        assert!(prop.setter().is_none());
        assert_eq!(prop.accessors().count(), 1);
        assert_eq!(prop.name(), "Id");
        assert_eq!(prop.declaring_type(), "A.B");
    }
}
