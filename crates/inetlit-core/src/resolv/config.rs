//! Host lookup order.
//!
//! The order is taken from the `hosts:` line of nsswitch.conf-style content:
//!
//! ```text
//! hosts: files dns [NOTFOUND=return] nis
//! ```
//!
//! Bracketed action items are ignored. The `INETLIT_HOSTS_ORDER` environment
//! variable (comma or whitespace separated) overrides any parsed order.

/// Environment variable overriding the lookup order.
pub const HOSTS_ORDER_ENV: &str = "INETLIT_HOSTS_ORDER";

/// Maximum number of sources kept from a policy line.
pub const MAX_SOURCES: usize = 8;

/// Default order when nothing is configured.
pub const DEFAULT_SOURCES: [&str; 2] = ["files", "dns"];

/// Ordered list of name-service type tags to consult.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupPolicy {
    sources: Vec<String>,
}

impl Default for LookupPolicy {
    fn default() -> Self {
        Self {
            sources: DEFAULT_SOURCES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl LookupPolicy {
    /// Policy from an explicit list. Tags are lowercased and deduplicated.
    pub fn from_sources<'a>(sources: impl IntoIterator<Item = &'a str>) -> Self {
        let mut policy = Self {
            sources: Vec::new(),
        };
        for source in sources {
            policy.push(source);
        }
        policy
    }

    /// Parse nsswitch.conf content, falling back to the default order when
    /// there is no usable `hosts:` line.
    pub fn parse(content: &str) -> Self {
        content
            .lines()
            .filter_map(parse_hosts_line)
            .last()
            .unwrap_or_default()
    }

    /// Apply the environment override on top of `fallback`.
    pub fn from_env_or(fallback: Self) -> Self {
        Self::from_env_value(std::env::var(HOSTS_ORDER_ENV).ok().as_deref(), fallback)
    }

    /// Resolve an override value; blank or missing values keep `fallback`.
    pub fn from_env_value(raw: Option<&str>, fallback: Self) -> Self {
        let Some(raw) = raw else {
            return fallback;
        };
        let policy = Self::from_sources(
            raw.split(|c: char| c == ',' || c.is_ascii_whitespace())
                .filter(|s| !s.is_empty()),
        );
        if policy.is_empty() { fallback } else { policy }
    }

    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    fn push(&mut self, source: &str) {
        if self.sources.len() >= MAX_SOURCES {
            return;
        }
        let source = source.to_ascii_lowercase();
        if !self.sources.contains(&source) {
            self.sources.push(source);
        }
    }
}

/// Parse one line; only a non-empty `hosts:` line yields a policy.
fn parse_hosts_line(line: &str) -> Option<LookupPolicy> {
    let line = line.split('#').next().unwrap_or("").trim();
    let rest = line.strip_prefix("hosts")?.trim_start().strip_prefix(':')?;
    let policy = LookupPolicy::from_sources(
        rest.split_ascii_whitespace()
            .filter(|tok| !tok.starts_with('[')),
    );
    (!policy.is_empty()).then_some(policy)
}
