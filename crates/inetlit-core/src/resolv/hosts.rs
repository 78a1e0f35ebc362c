//! `/etc/hosts`-format backend.
//!
//! Format: `<address> <hostname> [<alias>...]`, `#` starts a comment.
//! The content is supplied by the caller; this module never touches the
//! filesystem.

use std::sync::Arc;

use super::{Address, NameService, NameServiceDescriptor};

/// Type tag for hosts-file backends.
pub const HOSTS_TYPE: &str = "files";

/// One parsed hosts line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostsEntry {
    pub addr: Address,
    /// Canonical name first, then aliases.
    pub names: Vec<String>,
}

/// Parse a single hosts line.
///
/// Returns `None` for blank and comment lines, lines without a hostname, and
/// lines whose address field is not a literal.
pub fn parse_hosts_line(line: &str) -> Option<HostsEntry> {
    let line = match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    };

    let mut fields = line.split_ascii_whitespace();
    let addr = Address::parse(fields.next()?)?;
    let names: Vec<String> = fields.map(str::to_string).collect();
    if names.is_empty() {
        return None;
    }
    Some(HostsEntry { addr, names })
}

/// Name service over parsed hosts content.
#[derive(Debug, Clone, Default)]
pub struct HostsNameService {
    entries: Vec<HostsEntry>,
}

impl HostsNameService {
    /// Parse hosts content, skipping lines that do not parse.
    pub fn parse(content: &str) -> Self {
        Self {
            entries: content.lines().filter_map(parse_hosts_line).collect(),
        }
    }

    pub fn entries(&self) -> &[HostsEntry] {
        &self.entries
    }
}

impl NameService for HostsNameService {
    /// Every address whose line lists `host`, in file order.
    fn lookup_all_host_addr(&self, host: &str) -> Option<Vec<Address>> {
        let found: Vec<Address> = self
            .entries
            .iter()
            .filter(|e| e.names.iter().any(|n| n.eq_ignore_ascii_case(host)))
            .map(|e| e.addr)
            .collect();
        (!found.is_empty()).then_some(found)
    }

    /// Canonical name of the first line whose address matches.
    ///
    /// Mapped IPv6 and plain IPv4 spellings of one address compare equal.
    fn get_host_by_addr(&self, addr: &Address) -> Option<String> {
        let wanted = addr.unmapped();
        self.entries
            .iter()
            .find(|e| e.addr.unmapped() == wanted)
            .and_then(|e| e.names.first().cloned())
    }
}

/// Descriptor for [`HostsNameService`]; every created service parses the same
/// shared content.
#[derive(Debug, Clone)]
pub struct HostsDescriptor {
    provider: String,
    content: Arc<str>,
}

impl HostsDescriptor {
    pub fn new(provider: &str, content: impl Into<Arc<str>>) -> Self {
        Self {
            provider: provider.to_string(),
            content: content.into(),
        }
    }
}

impl NameServiceDescriptor for HostsDescriptor {
    fn create_name_service(&self) -> Box<dyn NameService> {
        Box::new(HostsNameService::parse(&self.content))
    }

    fn get_provider_name(&self) -> &str {
        &self.provider
    }

    fn get_type(&self) -> &str {
        HOSTS_TYPE
    }
}
