//! In-memory name service with fixed answers.

use std::collections::BTreeMap;

use super::{Address, NameService, NameServiceDescriptor};

/// A name service answering from a fixed table.
///
/// Hostnames are matched case-insensitively. Reverse entries are derived from
/// forward entries (first name registered for an address wins) unless set
/// explicitly with [`with_reverse`](Self::with_reverse).
#[derive(Debug, Clone, Default)]
pub struct StaticNameService {
    forward: BTreeMap<String, Vec<Address>>,
    reverse: BTreeMap<Address, String>,
}

impl StaticNameService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `name` resolving to `addrs`, in the given order.
    #[must_use]
    pub fn with_host(mut self, name: &str, addrs: Vec<Address>) -> Self {
        for addr in &addrs {
            self.reverse.entry(*addr).or_insert_with(|| name.to_string());
        }
        self.forward
            .entry(name.to_ascii_lowercase())
            .or_default()
            .extend(addrs);
        self
    }

    /// Set the reverse answer for `addr`, replacing any derived one.
    #[must_use]
    pub fn with_reverse(mut self, addr: Address, name: &str) -> Self {
        self.reverse.insert(addr, name.to_string());
        self
    }
}

impl NameService for StaticNameService {
    fn lookup_all_host_addr(&self, host: &str) -> Option<Vec<Address>> {
        self.forward
            .get(&host.to_ascii_lowercase())
            .filter(|addrs| !addrs.is_empty())
            .cloned()
    }

    fn get_host_by_addr(&self, addr: &Address) -> Option<String> {
        self.reverse.get(addr).cloned()
    }
}

/// Descriptor handing out clones of a prepared [`StaticNameService`].
#[derive(Debug, Clone)]
pub struct StaticDescriptor {
    kind: String,
    provider: String,
    service: StaticNameService,
}

impl StaticDescriptor {
    pub fn new(kind: &str, provider: &str, service: StaticNameService) -> Self {
        Self {
            kind: kind.to_string(),
            provider: provider.to_string(),
            service,
        }
    }
}

impl NameServiceDescriptor for StaticDescriptor {
    fn create_name_service(&self) -> Box<dyn NameService> {
        Box::new(self.service.clone())
    }

    fn get_provider_name(&self) -> &str {
        &self.provider
    }

    fn get_type(&self) -> &str {
        &self.kind
    }
}
