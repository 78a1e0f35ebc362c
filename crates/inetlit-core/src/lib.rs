//! # inetlit-core
//!
//! Safe Rust conversion of IPv4 and IPv6 address literals into their binary
//! network representation, following the BSD `inet_pton` family.
//!
//! The [`inet`] module is the codec proper: pure functions with no I/O and no
//! shared state. The [`resolv`] module defines the name-service contract that
//! resolver backends implement, plus a registry and a literal-aware resolver
//! built on top of the codec.

#![forbid(unsafe_code)]

pub mod inet;
pub mod resolv;

pub use inet::{
    LiteralError, LiteralErrorKind, decode_ipv4, decode_ipv6, extract_mapped_ipv4,
    is_ipv4_literal, is_ipv6_literal,
};
pub use resolv::{Address, NameService, NameServiceDescriptor, NameServiceRegistry, Resolver};
