//! Dispatch a fixture case to the codec and render the result as text.
//!
//! Rendering rules:
//! - decoded bytes: Rust slice debug form, e.g. `[127, 0, 0, 1]`
//! - rejection: `none`
//! - predicates: `true` / `false`
//! - `classify_*`: `ok` or the `LiteralErrorKind` tag

use inetlit_core::inet::{
    self, LiteralError, decode_ipv6_detailed, format_ipv4, format_ipv6,
};

use crate::HarnessError;

/// Functions a fixture case may name.
pub const SUPPORTED_FUNCTIONS: &[&str] = &[
    "decode_ipv4",
    "decode_ipv6",
    "is_ipv4_literal",
    "is_ipv6_literal",
    "extract_mapped_ipv4",
    "classify_ipv4",
    "classify_ipv6",
    "canonical_ipv4",
    "canonical_ipv6",
    "zone_ipv6",
];

/// Run `function` on `input` and render its output.
pub fn execute_case(function: &str, input: &str) -> Result<String, HarnessError> {
    let src = input.as_bytes();
    let out = match function {
        "decode_ipv4" => render_bytes(inet::decode_ipv4(src)),
        "decode_ipv6" => render_bytes(inet::decode_ipv6(src)),
        "is_ipv4_literal" => inet::is_ipv4_literal(src).to_string(),
        "is_ipv6_literal" => inet::is_ipv6_literal(src).to_string(),
        // The input is an IPv6 literal; a literal that does not decode renders as `none`.
        "extract_mapped_ipv4" => {
            render_bytes(inet::decode_ipv6(src).and_then(|o| inet::extract_mapped_ipv4(&o)))
        }
        "classify_ipv4" => render_classification(inet::try_decode_ipv4(src).err()),
        "classify_ipv6" => render_classification(inet::try_decode_ipv6(src).err()),
        "canonical_ipv4" => inet::decode_ipv4(src).map_or_else(none, |o| format_ipv4(&o)),
        "canonical_ipv6" => inet::decode_ipv6(src).map_or_else(none, |o| format_ipv6(&o)),
        "zone_ipv6" => match decode_ipv6_detailed(src) {
            Ok(decoded) => decoded
                .zone
                .map_or_else(none, |z| String::from_utf8_lossy(z).into_owned()),
            Err(_) => none(),
        },
        other => return Err(HarnessError::UnsupportedFunction(other.to_string())),
    };
    Ok(out)
}

fn none() -> String {
    String::from("none")
}

fn render_bytes<const N: usize>(octets: Option<[u8; N]>) -> String {
    octets.map_or_else(none, |o| format!("{o:?}"))
}

fn render_classification(err: Option<LiteralError>) -> String {
    err.map_or_else(|| String::from("ok"), |e| e.kind().as_str().to_string())
}
