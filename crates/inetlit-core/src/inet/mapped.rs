//! IPv4-mapped IPv6 addresses (`::ffff:0:0/96`).

const MAPPED_PREFIX: [u8; 12] = [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff];

/// Returns true if `addr` lies in `::ffff:0:0/96`.
#[inline]
pub fn is_ipv4_mapped(addr: &[u8; 16]) -> bool {
    addr[..12] == MAPPED_PREFIX
}

/// Extracts the embedded IPv4 address from an IPv4-mapped IPv6 address.
///
/// Returns `None` unless bytes 0-9 are zero and bytes 10-11 are `0xff`.
pub fn extract_mapped_ipv4(addr: &[u8; 16]) -> Option<[u8; 4]> {
    if !is_ipv4_mapped(addr) {
        return None;
    }
    Some([addr[12], addr[13], addr[14], addr[15]])
}

/// Builds `::ffff:a.b.c.d` from an IPv4 address.
pub fn to_ipv4_mapped(v4: &[u8; 4]) -> [u8; 16] {
    let mut out = [0u8; 16];
    out[..12].copy_from_slice(&MAPPED_PREFIX);
    out[12..].copy_from_slice(v4);
    out
}
