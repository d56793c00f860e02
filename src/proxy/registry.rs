//! Registry of methods that bypass interception or are simulated as properties.

use std::collections::HashSet;

use crate::member::{MethodToken, PropertyDescriptor};

/// Two independent method sets: call-through methods and simulated property accessors.
///
/// The sets are kept apart because the dispatcher asks two separate
/// questions ("run the real code?" and then "simulate as a property?"), and
/// registration order between them must not matter.
#[derive(Debug, Default)]
pub struct IdentityRegistry {
    call_original: HashSet<MethodToken>,
    property_accessors: HashSet<MethodToken>,
}

impl IdentityRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a method to run its real implementation. Idempotent.
    pub fn mark_call_original(&mut self, method: MethodToken) {
        tracing::trace!(method = %method, "registered call-through");
        self.call_original.insert(method);
    }

    /// Returns `true` if the method was marked with [`mark_call_original`](Self::mark_call_original).
    #[must_use]
    pub fn should_call_original(&self, method: &MethodToken) -> bool {
        self.call_original.contains(method)
    }

    /// Marks the getter and setter of `property` as simulated accessors.
    ///
    /// Accessors the property does not declare are skipped.
    pub fn mark_property_accessor(&mut self, property: &PropertyDescriptor) {
        tracing::trace!(
            property = property.name(),
            declaring_type = property.declaring_type(),
            "registered property behavior"
        );
        self.property_accessors.extend(property.accessors().cloned());
    }

    /// Returns `true` if the method is a registered simulated property accessor.
    #[must_use]
    pub fn is_property_accessor(&self, method: &MethodToken) -> bool {
        self.property_accessors.contains(method)
    }
}
