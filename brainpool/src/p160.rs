//! brainpoolP160t1 and brainpoolP160r1 ([RFC 5639] § 3.1).
//!
//! [RFC 5639]: https://datatracker.ietf.org/doc/html/rfc5639#section-3.1

brainpool_curve!(
    bits: 160,
    t1: p160t1,
    r1: p160r1,
    p: "e95e4a5f737059dc60dfc7ad95b3d8139515620f",
    n: "e95e4a5f737059dc60df5991d45029409e60fc09",
    t1_b: "7a556b6dae535b7b51ed2c4d7daa7a0b5c55f380",
    t1_generator: (
        "b199b13b9b34efc1397e64baeb05acc265ff2378",
        "add6718b7c7c1961f0991b842443772152c9e0ad",
    ),
    r1_generator: (
        "bed5af16ea3f6a4f62938c4631eb5af7bdbcdbc3",
        "1667cb477a1a8ec338f94741669c976316da6321",
    ),
    z: "24dbff5dec9b986bbfe5295a29bfbae45e0f5d0b",
);
