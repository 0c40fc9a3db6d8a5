//! Containership library entry points.
//!
//! This crate models shipping containers, the ships that carry them, and the
//! harbor registry that moves containers between the yard and the fleet.
//! Higher-level consumers (the harbor console) should only depend on the
//! types exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod container;
pub mod error;
pub mod harbor;
pub mod registration;
pub mod serial;
pub mod ship;
pub mod temperature;

pub use container::{Container, ContainerKind, ContainerSpec, HazardNotice};
pub use error::{Error, Result};
pub use harbor::{load_ship_roster, load_ship_roster_from_path, Harbor};
pub use serial::{SerialSequence, TypeCode};
pub use ship::{RejectedContainer, Ship};
pub use temperature::ProductType;
