//! Name-service contract and literal-aware resolution.
//!
//! The codec in [`crate::inet`] never resolves names. Backends that do
//! (DNS, NIS, hosts files) implement [`NameService`] and are published through
//! a [`NameServiceDescriptor`] registered in a [`NameServiceRegistry`].
//! [`Resolver`] walks the services named by a [`LookupPolicy`] and answers
//! address literals directly without consulting any of them.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use thiserror::Error;

use crate::inet::{
    AF_INET, AF_INET6, decode_ipv4, decode_ipv6, extract_mapped_ipv4, format_ipv4, format_ipv6,
};

pub mod config;
pub mod hosts;
pub mod memory;
pub mod registry;
pub mod resolver;

pub use config::LookupPolicy;
pub use hosts::{HostsDescriptor, HostsNameService};
pub use memory::{StaticDescriptor, StaticNameService};
pub use registry::NameServiceRegistry;
pub use resolver::Resolver;

// ---------------------------------------------------------------------------
// Address
// ---------------------------------------------------------------------------

/// A decoded network address exchanged with name services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Address {
    V4([u8; 4]),
    V6([u8; 16]),
}

impl Address {
    /// Classifies a literal, trying IPv4 before IPv6.
    ///
    /// Returns `None` for anything that is not an address literal, including
    /// hostnames.
    pub fn parse(text: &str) -> Option<Self> {
        Self::parse_bytes(text.as_bytes())
    }

    /// Byte-slice form of [`Address::parse`].
    pub fn parse_bytes(src: &[u8]) -> Option<Self> {
        if let Some(v4) = decode_ipv4(src) {
            return Some(Self::V4(v4));
        }
        decode_ipv6(src).map(Self::V6)
    }

    /// Address family constant (`AF_INET` or `AF_INET6`).
    #[must_use]
    pub const fn family(&self) -> i32 {
        match self {
            Self::V4(_) => AF_INET,
            Self::V6(_) => AF_INET6,
        }
    }

    /// Network-order bytes.
    #[must_use]
    pub fn octets(&self) -> &[u8] {
        match self {
            Self::V4(o) => o,
            Self::V6(o) => o,
        }
    }

    /// Folds an IPv4-mapped IPv6 address to its IPv4 form.
    #[must_use]
    pub fn unmapped(self) -> Self {
        match self {
            Self::V6(o) => extract_mapped_ipv4(&o).map_or(self, Self::V4),
            v4 => v4,
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4(o) => f.write_str(&format_ipv4(o)),
            Self::V6(o) => f.write_str(&format_ipv6(o)),
        }
    }
}

impl From<[u8; 4]> for Address {
    fn from(octets: [u8; 4]) -> Self {
        Self::V4(octets)
    }
}

impl From<[u8; 16]> for Address {
    fn from(octets: [u8; 16]) -> Self {
        Self::V6(octets)
    }
}

impl From<IpAddr> for Address {
    fn from(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(v4) => Self::V4(v4.octets()),
            IpAddr::V6(v6) => Self::V6(v6.octets()),
        }
    }
}

impl From<Address> for IpAddr {
    fn from(addr: Address) -> Self {
        match addr {
            Address::V4(o) => IpAddr::V4(Ipv4Addr::from(o)),
            Address::V6(o) => IpAddr::V6(Ipv6Addr::from(o)),
        }
    }
}

// ---------------------------------------------------------------------------
// Contract
// ---------------------------------------------------------------------------

/// A name-resolution backend.
pub trait NameService: Send + Sync {
    /// Resolves `host` to its addresses, or `None` if it is unknown.
    fn lookup_all_host_addr(&self, host: &str) -> Option<Vec<Address>>;

    /// Reverse lookup; `None` if no name is associated with `addr`.
    fn get_host_by_addr(&self, addr: &Address) -> Option<String>;

    /// Reverse lookup for an address given as text.
    ///
    /// Returns `None` when `text` is not an address literal.
    fn get_host_by_literal(&self, text: &str) -> Option<String> {
        let addr = Address::parse(text)?;
        self.get_host_by_addr(&addr)
    }
}

/// Factory and identity for a [`NameService`] backend.
pub trait NameServiceDescriptor: Send + Sync {
    /// Builds a fresh service instance.
    fn create_name_service(&self) -> Box<dyn NameService>;

    /// Provider name, e.g. `"inetlit"` or a vendor name.
    fn get_provider_name(&self) -> &str;

    /// Backend type tag used for selection, e.g. `"dns"`, `"nis"`, `"files"`.
    fn get_type(&self) -> &str;
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Registry and resolver configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolverError {
    #[error("no name service registered for type {0:?}")]
    UnknownType(String),
    #[error("provider {provider:?} already registered for type {kind:?}")]
    DuplicateProvider { kind: String, provider: String },
    #[error("lookup policy names no sources")]
    EmptyPolicy,
}
