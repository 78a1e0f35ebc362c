//! Colon-hex IPv6 decoding.
//!
//! Supports:
//! - Full form (8 groups of up to 4 hex digits)
//! - A single `::` zero-compression
//! - A trailing embedded IPv4 literal (`::ffff:192.168.1.1`)
//! - A `%zone` suffix, which is returned separately and never affects the bytes

use super::error::LiteralError;
use super::mapped::extract_mapped_ipv4;
use super::v4::try_decode_ipv4;

const IN6ADDRSZ: usize = 16;
const INT16SZ: usize = 2;
const INADDRSZ: usize = 4;

/// A successfully decoded IPv6 literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedV6<'a> {
    /// The 16 address bytes in network order.
    pub octets: [u8; 16],
    /// Zone identifier text after `%`, if one was given.
    pub zone: Option<&'a [u8]>,
    /// Embedded IPv4 payload when the address is IPv4-mapped.
    pub mapped: Option<[u8; 4]>,
}

/// Decodes an IPv6 literal, keeping the zone id and mapped payload.
pub fn decode_ipv6_detailed(src: &[u8]) -> Result<DecodedV6<'_>, LiteralError> {
    if src.len() < 2 {
        return Err(LiteralError::InvalidFormat("shorter than \"::\""));
    }

    let (addr, zone) = match src.iter().position(|&b| b == b'%') {
        Some(pos) if pos + 1 == src.len() => {
            return Err(LiteralError::StructuralViolation("empty zone id"));
        }
        Some(pos) => (&src[..pos], Some(&src[pos + 1..])),
        None => (src, None),
    };

    let mut start = 0usize;
    if addr.first() == Some(&b':') {
        if addr.get(1) != Some(&b':') {
            return Err(LiteralError::StructuralViolation("single leading colon"));
        }
        // The second colon of the leading "::" is handled by the scan.
        start = 1;
    }

    let mut out = [0u8; IN6ADDRSZ];
    let mut filled = 0usize;
    let mut double_colon: Option<usize> = None;
    let mut group: u32 = 0;
    let mut saw_hex_digit = false;
    let mut group_start = start;
    let mut i = start;

    while i < addr.len() {
        let ch = addr[i];
        if let Some(digit) = hex_value(ch) {
            group = (group << 4) | u32::from(digit);
            if group > 0xffff {
                return Err(LiteralError::GroupOverflow("group exceeds 0xffff"));
            }
            saw_hex_digit = true;
            i += 1;
            continue;
        }
        match ch {
            b':' => {
                group_start = i + 1;
                if !saw_hex_digit {
                    if double_colon.is_some() {
                        return Err(LiteralError::StructuralViolation("more than one \"::\""));
                    }
                    double_colon = Some(filled);
                    i += 1;
                    continue;
                }
                if i + 1 == addr.len() {
                    return Err(LiteralError::StructuralViolation("trailing single colon"));
                }
                put_group(&mut out, &mut filled, group)?;
                group = 0;
                saw_hex_digit = false;
            }
            b'.' => {
                if filled + INADDRSZ > IN6ADDRSZ {
                    return Err(LiteralError::StructuralViolation(
                        "no room for embedded IPv4",
                    ));
                }
                let tail = &addr[group_start..];
                if tail.iter().filter(|&&b| b == b'.').count() != 3 {
                    return Err(LiteralError::StructuralViolation(
                        "embedded IPv4 needs exactly three dots",
                    ));
                }
                let v4 = try_decode_ipv4(tail)?;
                out[filled..filled + INADDRSZ].copy_from_slice(&v4);
                filled += INADDRSZ;
                saw_hex_digit = false;
                // The embedded IPv4 literal always ends the address.
                break;
            }
            _ => return Err(LiteralError::InvalidFormat("non-hex character")),
        }
        i += 1;
    }

    if saw_hex_digit {
        put_group(&mut out, &mut filled, group)?;
    }

    if let Some(gap_at) = double_colon {
        if filled == IN6ADDRSZ {
            return Err(LiteralError::StructuralViolation(
                "\"::\" in an address with 8 groups",
            ));
        }
        let tail_len = filled - gap_at;
        out.copy_within(gap_at..filled, IN6ADDRSZ - tail_len);
        out[gap_at..IN6ADDRSZ - tail_len].fill(0);
        filled = IN6ADDRSZ;
    }

    if filled != IN6ADDRSZ {
        return Err(LiteralError::StructuralViolation("wrong number of groups"));
    }
    debug_assert_eq!(out.len(), IN6ADDRSZ);

    Ok(DecodedV6 {
        octets: out,
        zone,
        mapped: extract_mapped_ipv4(&out),
    })
}

/// Decodes an IPv6 literal into 16 network-order bytes.
pub fn try_decode_ipv6(src: &[u8]) -> Result<[u8; 16], LiteralError> {
    decode_ipv6_detailed(src).map(|d| d.octets)
}

/// Decodes an IPv6 literal, or `None` if it is not one.
#[inline]
pub fn decode_ipv6(src: &[u8]) -> Option<[u8; 16]> {
    try_decode_ipv6(src).ok()
}

fn put_group(out: &mut [u8; IN6ADDRSZ], filled: &mut usize, group: u32) -> Result<(), LiteralError> {
    if *filled + INT16SZ > IN6ADDRSZ {
        return Err(LiteralError::StructuralViolation("more than 8 groups"));
    }
    out[*filled] = (group >> 8) as u8;
    out[*filled + 1] = group as u8;
    *filled += INT16SZ;
    Ok(())
}

#[inline]
fn hex_value(ch: u8) -> Option<u8> {
    match ch {
        b'0'..=b'9' => Some(ch - b'0'),
        b'a'..=b'f' => Some(ch - b'a' + 10),
        b'A'..=b'F' => Some(ch - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inet::LiteralErrorKind;

    fn kind(src: &[u8]) -> LiteralErrorKind {
        try_decode_ipv6(src).unwrap_err().kind()
    }

    fn loopback() -> [u8; 16] {
        let mut a = [0u8; 16];
        a[15] = 1;
        a
    }

    #[test]
    fn test_loopback_and_unspecified() {
        assert_eq!(decode_ipv6(b"::1"), Some(loopback()));
        assert_eq!(decode_ipv6(b"::"), Some([0u8; 16]));
        assert_eq!(decode_ipv6(b"0:0:0:0:0:0:0:1"), Some(loopback()));
    }

    #[test]
    fn test_full_form() {
        assert_eq!(
            decode_ipv6(b"2001:db8:85a3:0:0:8a2e:370:7334"),
            Some([
                0x20, 0x01, 0x0d, 0xb8, 0x85, 0xa3, 0x00, 0x00, 0x00, 0x00, 0x8a, 0x2e, 0x03,
                0x70, 0x73, 0x34
            ])
        );
        assert_eq!(
            decode_ipv6(b"FFFF:ffff:FfFf:ffff:ffff:ffff:ffff:ffff"),
            Some([0xff; 16])
        );
    }

    #[test]
    fn test_compression_positions() {
        let mut front = [0u8; 16];
        front[0] = 0xfe;
        front[1] = 0x80;
        assert_eq!(decode_ipv6(b"fe80::"), Some(front));

        assert_eq!(
            decode_ipv6(b"1:2::7:8"),
            Some([0, 1, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 7, 0, 8])
        );
        // "::" standing for a single zero group.
        assert_eq!(
            decode_ipv6(b"1:2:3:4:5:6::8"),
            Some([0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 0, 6, 0, 0, 0, 8])
        );
        assert_eq!(
            decode_ipv6(b"::2:3:4:5:6:7:8"),
            Some([0, 0, 0, 2, 0, 3, 0, 4, 0, 5, 0, 6, 0, 7, 0, 8])
        );
    }

    #[test]
    fn test_double_compression_rejected() {
        assert_eq!(decode_ipv6(b"1::2::3"), None);
        assert_eq!(kind(b"1::2::3"), LiteralErrorKind::StructuralViolation);
        assert_eq!(kind(b":::"), LiteralErrorKind::StructuralViolation);
        assert_eq!(kind(b"::1::"), LiteralErrorKind::StructuralViolation);
    }

    #[test]
    fn test_colon_misuse() {
        assert_eq!(kind(b":1"), LiteralErrorKind::StructuralViolation);
        assert_eq!(kind(b":1:2:3:4:5:6:7:8"), LiteralErrorKind::StructuralViolation);
        assert_eq!(kind(b"1:2:3:4:5:6:7:"), LiteralErrorKind::StructuralViolation);
        assert_eq!(kind(b"1:"), LiteralErrorKind::StructuralViolation);
    }

    #[test]
    fn test_group_count() {
        assert_eq!(kind(b"1:2:3:4:5:6:7"), LiteralErrorKind::StructuralViolation);
        assert_eq!(kind(b"1:2:3:4:5:6:7:8:9"), LiteralErrorKind::StructuralViolation);
        assert_eq!(kind(b"1:2:3:4:5:6:7:8::"), LiteralErrorKind::StructuralViolation);
        assert_eq!(kind(b"::1:2:3:4:5:6:7:8"), LiteralErrorKind::StructuralViolation);
    }

    #[test]
    fn test_group_overflow() {
        assert_eq!(kind(b"12345::"), LiteralErrorKind::GroupOverflow);
        assert_eq!(kind(b"::fffff"), LiteralErrorKind::GroupOverflow);
        // Magnitude is bounded, not digit count.
        assert_eq!(decode_ipv6(b"00001::"), decode_ipv6(b"1::"));
    }

    #[test]
    fn test_invalid_characters() {
        assert_eq!(kind(b"1:g::"), LiteralErrorKind::InvalidFormat);
        assert_eq!(kind(b"::1 "), LiteralErrorKind::InvalidFormat);
        assert_eq!(kind(b"[::1]"), LiteralErrorKind::InvalidFormat);
        assert_eq!(kind(b"x"), LiteralErrorKind::InvalidFormat);
        assert_eq!(kind(b""), LiteralErrorKind::InvalidFormat);
    }

    #[test]
    fn test_embedded_ipv4() {
        let decoded = decode_ipv6_detailed(b"::ffff:127.0.0.1").unwrap();
        assert_eq!(
            decoded.octets,
            [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, 127, 0, 0, 1]
        );
        assert_eq!(decoded.mapped, Some([127, 0, 0, 1]));

        assert_eq!(
            decode_ipv6(b"::1.2.3.4"),
            Some([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 3, 4])
        );
        assert_eq!(
            decode_ipv6(b"1:2:3:4:5:6:1.2.3.4"),
            Some([0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 0, 6, 1, 2, 3, 4])
        );
        assert_eq!(
            decode_ipv6(b"64:ff9b::192.0.2.33"),
            Some([0, 0x64, 0xff, 0x9b, 0, 0, 0, 0, 0, 0, 0, 0, 192, 0, 2, 33])
        );
    }

    #[test]
    fn test_embedded_ipv4_rejections() {
        // Shorthand forms are not allowed inside IPv6.
        assert_eq!(kind(b"::ffff:1.2.3"), LiteralErrorKind::StructuralViolation);
        assert_eq!(kind(b"::1.2.3.4.5"), LiteralErrorKind::StructuralViolation);
        assert_eq!(kind(b"::ffff:256.0.0.1"), LiteralErrorKind::GroupOverflow);
        // No room left: 7 groups plus 4 bytes.
        assert_eq!(
            kind(b"1:2:3:4:5:6:7:1.2.3.4"),
            LiteralErrorKind::StructuralViolation
        );
        // IPv4 must be the final part.
        assert_eq!(kind(b"::1.2.3.4:5"), LiteralErrorKind::InvalidFormat);
        // Too few groups without compression.
        assert_eq!(kind(b"1:2:3:4:5:1.2.3.4"), LiteralErrorKind::StructuralViolation);
        // No colon at all.
        assert_eq!(kind(b"1.2.3.4"), LiteralErrorKind::StructuralViolation);
    }

    #[test]
    fn test_zone_suffix() {
        let mut expected = [0u8; 16];
        expected[0] = 0xfe;
        expected[1] = 0x80;
        expected[15] = 1;
        let decoded = decode_ipv6_detailed(b"fe80::1%eth0").unwrap();
        assert_eq!(decoded.octets, expected);
        assert_eq!(decoded.zone, Some(&b"eth0"[..]));
        assert_eq!(decode_ipv6(b"fe80::1%2"), Some(expected));
        assert_eq!(decode_ipv6_detailed(b"fe80::1").unwrap().zone, None);
    }

    #[test]
    fn test_zone_rejections() {
        assert_eq!(kind(b"fe80::1%"), LiteralErrorKind::StructuralViolation);
        assert_eq!(kind(b"%eth0"), LiteralErrorKind::StructuralViolation);
        assert_eq!(kind(b"fe80::1:%eth0"), LiteralErrorKind::StructuralViolation);
    }

    #[test]
    fn test_mapped_flag_only_for_mapped_prefix() {
        assert_eq!(decode_ipv6_detailed(b"::1").unwrap().mapped, None);
        assert_eq!(
            decode_ipv6_detailed(b"::ffff:7f00:1").unwrap().mapped,
            Some([127, 0, 0, 1])
        );
    }
}
