#![allow(missing_docs)]

/// The reference seed used by most deterministic tests.
pub const SEED: f64 = 0.123456;

/// A second seed, guaranteed to produce a different poster than [SEED].
pub const SEED2: f64 = 0.999999;
