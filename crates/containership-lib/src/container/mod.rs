//! Container types and their loading, unloading, and capacity rules.
//!
//! This module is organized into focused submodules:
//!
//! - [`spec`] - Physical container attributes fixed at construction
//! - [`cargo`] - The container entity and per-variant cargo rules
//! - [`hazard`] - Hazard notifications emitted by hazardous variants
//! - [`constants`] - Shared constants used across the cargo rules
//!
//! # Example
//!
//! ```
//! use containership_lib::{Container, ContainerSpec, SerialSequence};
//!
//! let serials = SerialSequence::new();
//! let spec = ContainerSpec::new(2.6, 12.0, 2200.0, 20000.0).unwrap();
//!
//! let container = Container::liquid(spec, false, &serials).unwrap();
//! assert_eq!(container.serial_number(), "KON-L-1");
//! ```

pub mod cargo;
pub mod constants;
pub mod hazard;
pub mod spec;

pub use cargo::{Container, ContainerKind};
pub use constants::{
    GAS_RESIDUE_FRACTION, HAZARDOUS_LIQUID_CAPACITY_FRACTION, SAFE_LIQUID_CAPACITY_FRACTION,
};
pub use hazard::HazardNotice;
pub use spec::ContainerSpec;
