//! Explicit registry of name-service backends keyed by type tag.

use std::collections::BTreeMap;

use super::{NameService, NameServiceDescriptor, ResolverError};

/// Owns the descriptors available for resolver construction.
///
/// There is no global instance: callers build one, register the backends
/// they want, and hand it to [`super::Resolver::new`]. When several providers
/// share a type tag the first registered one is used.
#[derive(Default)]
pub struct NameServiceRegistry {
    by_type: BTreeMap<String, Vec<Box<dyn NameServiceDescriptor>>>,
}

impl NameServiceRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor under its type tag.
    ///
    /// Fails if a descriptor with the same type and provider name exists.
    pub fn register(
        &mut self,
        descriptor: Box<dyn NameServiceDescriptor>,
    ) -> Result<(), ResolverError> {
        let kind = descriptor.get_type().to_ascii_lowercase();
        let slot = self.by_type.entry(kind.clone()).or_default();
        if slot
            .iter()
            .any(|d| d.get_provider_name() == descriptor.get_provider_name())
        {
            return Err(ResolverError::DuplicateProvider {
                kind,
                provider: descriptor.get_provider_name().to_string(),
            });
        }
        slot.push(descriptor);
        Ok(())
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(
        mut self,
        descriptor: impl NameServiceDescriptor + 'static,
    ) -> Result<Self, ResolverError> {
        self.register(Box::new(descriptor))?;
        Ok(self)
    }

    /// The preferred descriptor for `kind` (case-insensitive).
    pub fn descriptor(&self, kind: &str) -> Option<&dyn NameServiceDescriptor> {
        self.by_type
            .get(&kind.to_ascii_lowercase())
            .and_then(|v| v.first())
            .map(|d| d.as_ref())
    }

    /// All descriptors registered for `kind`, in registration order.
    pub fn providers(&self, kind: &str) -> impl Iterator<Item = &dyn NameServiceDescriptor> {
        self.by_type
            .get(&kind.to_ascii_lowercase())
            .into_iter()
            .flatten()
            .map(|d| d.as_ref())
    }

    /// Instantiate the preferred service for `kind`.
    pub fn create(&self, kind: &str) -> Result<Box<dyn NameService>, ResolverError> {
        self.descriptor(kind)
            .map(|d| d.create_name_service())
            .ok_or_else(|| ResolverError::UnknownType(kind.to_string()))
    }

    /// Registered type tags, sorted.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.by_type.keys().map(String::as_str)
    }

    /// Number of registered descriptors across all types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_type.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty()
    }
}

impl std::fmt::Debug for NameServiceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (kind, descriptors) in &self.by_type {
            let providers: Vec<&str> = descriptors.iter().map(|d| d.get_provider_name()).collect();
            map.entry(kind, &providers);
        }
        map.finish()
    }
}
