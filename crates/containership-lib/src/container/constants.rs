//! Container-related constants used across loading and unloading rules.

/// Fraction of cargo that stays behind when a gas container is unloaded.
/// Pressurized cargo cannot be fully purged.
pub const GAS_RESIDUE_FRACTION: f64 = 0.05;

/// Effective capacity fraction for liquid containers carrying hazardous cargo.
pub const HAZARDOUS_LIQUID_CAPACITY_FRACTION: f64 = 0.5;

/// Effective capacity fraction for liquid containers carrying safe cargo.
pub const SAFE_LIQUID_CAPACITY_FRACTION: f64 = 0.9;
