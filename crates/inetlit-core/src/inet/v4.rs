//! Dotted-decimal IPv4 decoding.
//!
//! Accepts the classic `inet_aton` shorthands: with fewer than three dots the
//! final number spans every remaining byte, so `10.1` is `10.0.0.1` and
//! `3232235777` is `192.168.1.1`.

use super::error::LiteralError;

/// Longest accepted literal (`255.255.255.255`).
pub const MAX_V4_LITERAL_LEN: usize = 15;

/// Decodes an IPv4 literal into 4 network-order bytes.
///
/// Rejects any byte other than ASCII digits and `.`.
pub fn try_decode_ipv4(src: &[u8]) -> Result<[u8; 4], LiteralError> {
    if src.is_empty() || src.len() > MAX_V4_LITERAL_LEN {
        return Err(LiteralError::InvalidFormat("length outside 1..=15"));
    }

    let mut octets = [0u8; 4];
    let mut filled = 0usize;
    let mut value: u64 = 0;

    for &ch in src {
        match ch {
            b'0'..=b'9' => {
                // At most 15 digits, so this cannot overflow a u64.
                value = value * 10 + u64::from(ch - b'0');
            }
            b'.' => {
                if filled == 3 {
                    return Err(LiteralError::StructuralViolation("more than three dots"));
                }
                if value > 255 {
                    return Err(LiteralError::GroupOverflow("component exceeds 255"));
                }
                octets[filled] = value as u8;
                filled += 1;
                value = 0;
            }
            _ => return Err(LiteralError::InvalidFormat("non-digit character")),
        }
    }

    let remaining = 4 - filled;
    let bound = 1u64 << (8 * remaining);
    if value >= bound {
        return Err(LiteralError::GroupOverflow(
            "trailing component exceeds remaining bytes",
        ));
    }

    // Slot `k` takes the 8 bits that sit `3 - k` bytes above the lowest byte.
    for (slot, octet) in octets.iter_mut().enumerate().skip(filled) {
        let shift = 8 * (3 - slot);
        *octet = ((value >> shift) & 0xff) as u8;
    }

    Ok(octets)
}

/// Decodes an IPv4 literal, or `None` if it is not one.
#[inline]
pub fn decode_ipv4(src: &[u8]) -> Option<[u8; 4]> {
    try_decode_ipv4(src).ok()
}
