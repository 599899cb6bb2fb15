//! brainpoolP224t1 and brainpoolP224r1 ([RFC 5639] § 3.3).
//!
//! [RFC 5639]: https://datatracker.ietf.org/doc/html/rfc5639#section-3.3

brainpool_curve!(
    bits: 224,
    t1: p224t1,
    r1: p224r1,
    p: "d7c134aa264366862a18302575d1d787b09f075797da89f57ec8c0ff",
    n: "d7c134aa264366862a18302575d0fb98d116bc4b6ddebca3a5a7939f",
    t1_b: "4b337d934104cd7bef271bf60ced1ed20da14c08b3bb64f18a60888d",
    t1_generator: (
        "6ab1e344ce25ff3896424e7ffe14762ecb49f8928ac0c76029b4d580",
        "0374e9f5143e568cd23f3f4d7c0d4b1e41c8cc0d1c6abd5f1a46db4c",
    ),
    r1_generator: (
        "0d9029ad2c7e5cf4340823b2a87dc68c9e4ce3174c1e6efdee12c07d",
        "58aa56f772c0726f24c6b89e4ecdac24354b9e99caa3f6d3761402cd",
    ),
    z: "2df271e14427a346910cf7a2e6cfa7b3f484e5c2cce1c8b730e28b3f",
);
