//! Canonical text output for decoded addresses.

use std::fmt::Write;

/// Formats 4 bytes as dotted decimal.
pub fn format_ipv4(addr: &[u8; 4]) -> String {
    format!("{}.{}.{}.{}", addr[0], addr[1], addr[2], addr[3])
}

/// Formats 16 bytes as RFC 5952 canonical IPv6 text.
///
/// The longest run of zero groups is replaced by `::` (first run on ties);
/// a single zero group is written out as `0`.
pub fn format_ipv6(addr: &[u8; 16]) -> String {
    let mut groups = [0u16; 8];
    for (i, group) in groups.iter_mut().enumerate() {
        *group = u16::from_be_bytes([addr[i * 2], addr[i * 2 + 1]]);
    }

    let (best_start, best_len) = longest_zero_run(&groups);

    let mut out = String::with_capacity(39);
    let mut i = 0usize;
    while i < groups.len() {
        if best_len > 1 && i == best_start {
            out.push_str("::");
            i += best_len;
            continue;
        }
        if !out.is_empty() && !out.ends_with(':') {
            out.push(':');
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{:x}", groups[i]);
        i += 1;
    }
    out
}

fn longest_zero_run(groups: &[u16; 8]) -> (usize, usize) {
    let mut best = (0usize, 0usize);
    let mut cur_start = 0usize;
    let mut cur_len = 0usize;
    for (i, &g) in groups.iter().enumerate() {
        if g == 0 {
            if cur_len == 0 {
                cur_start = i;
            }
            cur_len += 1;
            if cur_len > best.1 {
                best = (cur_start, cur_len);
            }
        } else {
            cur_len = 0;
        }
    }
    best
}
