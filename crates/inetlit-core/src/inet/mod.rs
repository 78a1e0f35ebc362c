//! Internet address literal codec.
//!
//! Converts human-readable IPv4 and IPv6 literals into binary network
//! representation with `inet_pton` semantics, and back into canonical text.
//! All logic is safe Rust with no I/O.

mod error;
mod format;
mod mapped;
mod v4;
mod v6;

pub use error::{LiteralError, LiteralErrorKind};
pub use format::{format_ipv4, format_ipv6};
pub use mapped::{extract_mapped_ipv4, is_ipv4_mapped, to_ipv4_mapped};
pub use v4::{MAX_V4_LITERAL_LEN, decode_ipv4, try_decode_ipv4};
pub use v6::{DecodedV6, decode_ipv6, decode_ipv6_detailed, try_decode_ipv6};

/// IPv4 address family.
pub const AF_INET: i32 = 2;

/// IPv6 address family.
pub const AF_INET6: i32 = 10;

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Returns true if `src` is a valid IPv4 literal.
#[inline]
pub fn is_ipv4_literal(src: &[u8]) -> bool {
    decode_ipv4(src).is_some()
}

/// Returns true if `src` is a valid IPv6 literal (zone suffix allowed).
#[inline]
pub fn is_ipv6_literal(src: &[u8]) -> bool {
    decode_ipv6(src).is_some()
}

// ---------------------------------------------------------------------------
// inet_pton / inet_ntop
// ---------------------------------------------------------------------------

/// Converts an IP address from text to binary form.
///
/// Equivalent to C `inet_pton`. Returns 1 on success, 0 if `src` is not a
/// valid literal for `af`, or -1 for an unsupported family or a `dst` too
/// short for it. `dst` is untouched unless the call returns 1.
pub fn inet_pton(af: i32, src: &[u8], dst: &mut [u8]) -> i32 {
    match af {
        AF_INET => {
            if dst.len() < 4 {
                return -1;
            }
            match decode_ipv4(src) {
                Some(octets) => {
                    dst[..4].copy_from_slice(&octets);
                    1
                }
                None => 0,
            }
        }
        AF_INET6 => {
            if dst.len() < 16 {
                return -1;
            }
            match decode_ipv6(src) {
                Some(octets) => {
                    dst[..16].copy_from_slice(&octets);
                    1
                }
                None => 0,
            }
        }
        _ => -1,
    }
}

/// Converts an IP address from binary to text form.
///
/// Equivalent to C `inet_ntop`. Returns `None` for an unsupported family or a
/// `src` shorter than the family's address size.
pub fn inet_ntop(af: i32, src: &[u8]) -> Option<String> {
    match af {
        AF_INET => {
            let addr: [u8; 4] = src.get(..4)?.try_into().ok()?;
            Some(format_ipv4(&addr))
        }
        AF_INET6 => {
            let addr: [u8; 16] = src.get(..16)?.try_into().ok()?;
            Some(format_ipv6(&addr))
        }
        _ => None,
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // -- Properties --

    #[test]
    fn test_documented_examples() {
        assert_eq!(decode_ipv4(b"255.255.255.255"), Some([255; 4]));
        assert_eq!(decode_ipv4(b"0.0.0.0"), Some([0; 4]));
        assert_eq!(decode_ipv4(b"256.0.0.1"), None);
        assert_eq!(decode_ipv4(b"192.168.1"), Some([192, 168, 0, 1]));

        let mut lo = [0u8; 16];
        lo[15] = 1;
        assert_eq!(decode_ipv6(b"::1"), Some(lo));

        let mapped = decode_ipv6(b"::ffff:127.0.0.1").unwrap();
        assert_eq!(extract_mapped_ipv4(&mapped), Some([127, 0, 0, 1]));

        assert_eq!(decode_ipv6(b"1::2::3"), None);
        assert_eq!(decode_ipv6(b"fe80::1%eth0"), decode_ipv6(b"fe80::1"));
    }

    #[test]
    fn test_classification() {
        assert!(is_ipv4_literal(b"10.0.0.1"));
        assert!(is_ipv4_literal(b"10.1"));
        assert!(!is_ipv4_literal(b"::1"));
        assert!(!is_ipv4_literal(b"example.com"));
        assert!(is_ipv6_literal(b"::1"));
        assert!(is_ipv6_literal(b"fe80::1%lo0"));
        assert!(!is_ipv6_literal(b"10.0.0.1"));
        assert!(!is_ipv6_literal(b"example.com"));
    }

    proptest! {
        #[test]
        fn prop_dotted_quad_decodes_exactly(a: u8, b: u8, c: u8, d: u8) {
            let text = format!("{a}.{b}.{c}.{d}");
            prop_assert_eq!(decode_ipv4(text.as_bytes()), Some([a, b, c, d]));
        }

        #[test]
        fn prop_classification_matches_decode(text in "[0-9a-fA-F:.%x ]{0,48}") {
            let bytes = text.as_bytes();
            prop_assert_eq!(is_ipv4_literal(bytes), decode_ipv4(bytes).is_some());
            prop_assert_eq!(is_ipv6_literal(bytes), decode_ipv6(bytes).is_some());
        }

        #[test]
        fn prop_arbitrary_bytes_never_panic(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
            let _ = decode_ipv4(&bytes);
            let _ = decode_ipv6(&bytes);
        }

        #[test]
        fn prop_ipv4_roundtrip(octets: [u8; 4]) {
            let text = format_ipv4(&octets);
            prop_assert_eq!(decode_ipv4(text.as_bytes()), Some(octets));
        }

        #[test]
        fn prop_ipv6_roundtrip(octets: [u8; 16]) {
            let text = format_ipv6(&octets);
            prop_assert_eq!(decode_ipv6(text.as_bytes()), Some(octets));
        }

        #[test]
        fn prop_mapped_text_form_roundtrips(v4: [u8; 4]) {
            let text = format!("::ffff:{}", format_ipv4(&v4));
            let octets = decode_ipv6(text.as_bytes()).unwrap();
            prop_assert_eq!(octets, to_ipv4_mapped(&v4));
            prop_assert_eq!(extract_mapped_ipv4(&octets), Some(v4));
        }
    }

    // -- inet_pton --

    #[test]
    fn test_pton_ipv4() {
        let mut buf = [0u8; 4];
        assert_eq!(inet_pton(AF_INET, b"127.0.0.1", &mut buf), 1);
        assert_eq!(buf, [127, 0, 0, 1]);
        assert_eq!(inet_pton(AF_INET, b"not_an_ip", &mut buf), 0);
        assert_eq!(buf, [127, 0, 0, 1]);
    }

    #[test]
    fn test_pton_ipv6() {
        let mut buf = [0xffu8; 16];
        assert_eq!(inet_pton(AF_INET6, b"::", &mut buf), 1);
        assert_eq!(buf, [0u8; 16]);
        assert_eq!(inet_pton(AF_INET6, b"1::2::3", &mut buf), 0);
    }

    #[test]
    fn test_pton_bad_family_or_short_dst() {
        let mut small = [0u8; 3];
        assert_eq!(inet_pton(AF_INET, b"1.2.3.4", &mut small), -1);
        let mut v4 = [0u8; 4];
        assert_eq!(inet_pton(AF_INET6, b"::1", &mut v4), -1);
        assert_eq!(inet_pton(99, b"1.2.3.4", &mut v4), -1);
    }

    #[test]
    fn test_pton_dst_larger_than_needed() {
        let mut buf = [0xffu8; 32];
        assert_eq!(inet_pton(AF_INET6, b"::1", &mut buf), 1);
        assert_eq!(buf[15], 1);
        assert_eq!(buf[16], 0xff);
    }

    // -- inet_ntop --

    #[test]
    fn test_ntop() {
        assert_eq!(inet_ntop(AF_INET, &[192, 168, 0, 1]).as_deref(), Some("192.168.0.1"));
        assert_eq!(inet_ntop(AF_INET, &[1, 2, 3]), None);
        let mut lo = [0u8; 16];
        lo[15] = 1;
        assert_eq!(inet_ntop(AF_INET6, &lo).as_deref(), Some("::1"));
        assert_eq!(inet_ntop(AF_INET6, &[0u8; 15]), None);
        assert_eq!(inet_ntop(42, &[0u8; 16]), None);
    }

    #[test]
    fn test_roundtrip_shorthand_canonicalizes() {
        let cases: &[(&[u8], &str)] = &[
            (b"10.1", "10.0.0.1"),
            (b"192.168.258", "192.168.1.2"),
            (b"3232235777", "192.168.1.1"),
        ];
        for &(input, expected) in cases {
            let mut bin = [0u8; 4];
            assert_eq!(inet_pton(AF_INET, input, &mut bin), 1);
            assert_eq!(inet_ntop(AF_INET, &bin).as_deref(), Some(expected));
        }
    }

    #[test]
    fn test_roundtrip_ipv6_canonical() {
        let cases: &[(&[u8], &str)] = &[
            (b"2001:0db8:0000:0000:0000:0000:0000:0001", "2001:db8::1"),
            (b"FE80::1%eth0", "fe80::1"),
            (b"::ffff:1.2.3.4", "::ffff:102:304"),
            (b"1:0:0:2:0:0:0:3", "1:0:0:2::3"),
        ];
        for &(input, expected) in cases {
            let mut bin = [0u8; 16];
            assert_eq!(inet_pton(AF_INET6, input, &mut bin), 1);
            assert_eq!(inet_ntop(AF_INET6, &bin).as_deref(), Some(expected));
        }
    }
}
