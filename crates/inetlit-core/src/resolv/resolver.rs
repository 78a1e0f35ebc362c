//! Literal-aware host resolution over an ordered set of name services.

use super::{Address, LookupPolicy, NameService, NameServiceRegistry, ResolverError};

/// Resolves hosts by consulting name services in policy order.
///
/// Address literals never reach a name service: `lookup_all` answers them
/// from the codec alone.
pub struct Resolver {
    services: Vec<(String, Box<dyn NameService>)>,
}

impl Resolver {
    /// Instantiate one service per policy source.
    ///
    /// Sources with no registered descriptor are skipped.
    pub fn new(
        registry: &NameServiceRegistry,
        policy: &LookupPolicy,
    ) -> Result<Self, ResolverError> {
        if policy.is_empty() {
            return Err(ResolverError::EmptyPolicy);
        }
        let services = policy
            .sources()
            .iter()
            .filter_map(|kind| {
                registry
                    .create(kind)
                    .ok()
                    .map(|service| (kind.clone(), service))
            })
            .collect();
        Ok(Self { services })
    }

    /// A resolver that only answers literals.
    #[must_use]
    pub fn literal_only() -> Self {
        Self {
            services: Vec::new(),
        }
    }

    /// Type tags of the instantiated services, in lookup order.
    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.services.iter().map(|(kind, _)| kind.as_str())
    }

    /// Resolve `host` to its addresses.
    ///
    /// IPv4 literals (including shorthand forms) are tried first, then IPv6
    /// literals, optionally wrapped in `[...]`. Otherwise the first service
    /// with a non-empty answer wins.
    pub fn lookup_all(&self, host: &str) -> Option<Vec<Address>> {
        if host.is_empty() {
            return None;
        }
        if let Some(addr) = classify_literal(host) {
            return Some(vec![addr]);
        }
        self.services
            .iter()
            .filter_map(|(_, svc)| svc.lookup_all_host_addr(host))
            .find(|addrs| !addrs.is_empty())
    }

    /// Reverse-resolve `addr`; the first service returning a name wins.
    pub fn reverse(&self, addr: &Address) -> Option<String> {
        self.services
            .iter()
            .find_map(|(_, svc)| svc.get_host_by_addr(addr))
    }

    /// Reverse-resolve an address given as text.
    pub fn reverse_literal(&self, text: &str) -> Option<String> {
        self.reverse(&classify_literal(text)?)
    }
}

impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("sources", &self.sources().collect::<Vec<_>>())
            .finish()
    }
}

fn classify_literal(host: &str) -> Option<Address> {
    if let Some(inner) = host.strip_prefix('[').and_then(|h| h.strip_suffix(']')) {
        return crate::inet::decode_ipv6(inner.as_bytes()).map(Address::V6);
    }
    Address::parse(host)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolv::{HostsDescriptor, StaticDescriptor, StaticNameService};

    fn registry() -> NameServiceRegistry {
        let dns = StaticNameService::new()
            .with_host("web.example", vec![Address::V4([93, 184, 216, 34])])
            .with_host("shared", vec![Address::V4([10, 9, 9, 9])]);
        NameServiceRegistry::new()
            .with(HostsDescriptor::new("inetlit", "10.0.0.1 shared\n"))
            .unwrap()
            .with(StaticDescriptor::new("dns", "stub", dns))
            .unwrap()
    }

    #[test]
    fn literals_bypass_services() {
        let resolver = Resolver::literal_only();
        assert_eq!(
            resolver.lookup_all("192.168.1"),
            Some(vec![Address::V4([192, 168, 0, 1])])
        );
        let mut lo = [0u8; 16];
        lo[15] = 1;
        assert_eq!(resolver.lookup_all("::1"), Some(vec![Address::V6(lo)]));
        assert_eq!(resolver.lookup_all("[::1]"), Some(vec![Address::V6(lo)]));
        assert_eq!(resolver.lookup_all("[10.0.0.1]"), None);
        assert_eq!(resolver.lookup_all("web.example"), None);
        assert_eq!(resolver.lookup_all(""), None);
    }

    #[test]
    fn policy_order_decides() {
        let files_first = Resolver::new(&registry(), &LookupPolicy::default()).unwrap();
        assert_eq!(files_first.sources().collect::<Vec<_>>(), vec!["files", "dns"]);
        assert_eq!(
            files_first.lookup_all("shared"),
            Some(vec![Address::V4([10, 0, 0, 1])])
        );

        let dns_first =
            Resolver::new(&registry(), &LookupPolicy::from_sources(["dns", "files"])).unwrap();
        assert_eq!(
            dns_first.lookup_all("shared"),
            Some(vec![Address::V4([10, 9, 9, 9])])
        );
    }

    #[test]
    fn falls_through_to_later_sources() {
        let resolver = Resolver::new(&registry(), &LookupPolicy::default()).unwrap();
        assert_eq!(
            resolver.lookup_all("web.example"),
            Some(vec![Address::V4([93, 184, 216, 34])])
        );
        assert_eq!(resolver.lookup_all("missing.example"), None);
    }

    #[test]
    fn unknown_sources_skipped() {
        let resolver =
            Resolver::new(&registry(), &LookupPolicy::from_sources(["nis", "dns"])).unwrap();
        assert_eq!(resolver.sources().collect::<Vec<_>>(), vec!["dns"]);
    }

    #[test]
    fn empty_policy_rejected() {
        let err = Resolver::new(&registry(), &LookupPolicy::from_sources([])).unwrap_err();
        assert_eq!(err, ResolverError::EmptyPolicy);
    }

    #[test]
    fn reverse_lookup() {
        let resolver = Resolver::new(&registry(), &LookupPolicy::default()).unwrap();
        assert_eq!(resolver.reverse_literal("10.0.0.1").as_deref(), Some("shared"));
        assert_eq!(
            resolver.reverse(&Address::V4([93, 184, 216, 34])).as_deref(),
            Some("web.example")
        );
        assert_eq!(resolver.reverse_literal("[::ffff:10.0.0.1]").as_deref(), Some("shared"));
        assert_eq!(resolver.reverse_literal("web.example"), None);
    }
}
