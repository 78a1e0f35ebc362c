//! Benchmark inputs shared by the criterion suites.

/// IPv4 literals spanning the accepted shorthand forms.
pub const V4_INPUTS: &[(&str, &str)] = &[
    ("dotted_quad", "192.168.100.200"),
    ("two_part", "10.65535"),
    ("single_number", "3232235777"),
    ("overflow", "256.256.256.256"),
];

/// IPv6 literals covering each decoder path.
pub const V6_INPUTS: &[(&str, &str)] = &[
    ("loopback", "::1"),
    ("full", "2001:0db8:85a3:0000:0000:8a2e:0370:7334"),
    ("compressed", "2001:db8::ff00:42:8329"),
    ("mapped", "::ffff:192.168.100.200"),
    ("zoned", "fe80::1ff:fe23:4567:890a%eth0"),
    ("double_compression", "1::2::3"),
];
