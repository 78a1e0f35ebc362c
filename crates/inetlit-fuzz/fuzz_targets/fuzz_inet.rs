#![no_main]
use inetlit_core::inet::{
    decode_ipv4, decode_ipv6, decode_ipv6_detailed, extract_mapped_ipv4, format_ipv4,
    format_ipv6, is_ipv4_literal, is_ipv6_literal,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let v4 = decode_ipv4(data);
    assert_eq!(is_ipv4_literal(data), v4.is_some());
    if let Some(octets) = v4 {
        assert_eq!(decode_ipv4(format_ipv4(&octets).as_bytes()), Some(octets));
    }

    let v6 = decode_ipv6(data);
    assert_eq!(is_ipv6_literal(data), v6.is_some());
    if let Some(octets) = v6 {
        assert_eq!(decode_ipv6(format_ipv6(&octets).as_bytes()), Some(octets));
        let detailed = decode_ipv6_detailed(data).ok();
        assert_eq!(detailed.map(|d| d.mapped), Some(extract_mapped_ipv4(&octets)));
    }
});
