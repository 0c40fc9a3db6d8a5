//! Ship entity and fleet-level admission rules.
//!
//! A ship owns the containers aboard it, in boarding order. Admission is
//! gated by two aggregate rules checked on every load: the container count
//! limit first, then the total-weight limit. Both aggregates are recomputed
//! from the live collection, never cached.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::container::Container;
use crate::error::{Error, Result};

/// A container ship with fixed limits and an ordered hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    name: String,
    max_speed: f64,
    max_container_count: usize,
    max_weight: f64,
    containers: Vec<Container>,
}

/// A container a ship refused to admit, handed back to the caller together
/// with the admission error.
#[derive(Debug)]
pub struct RejectedContainer {
    pub container: Container,
    pub reason: Error,
}

impl From<RejectedContainer> for Error {
    fn from(rejected: RejectedContainer) -> Self {
        rejected.reason
    }
}

impl Ship {
    /// Create a ship, validating its name and limits.
    pub fn new(
        name: &str,
        max_speed: f64,
        max_container_count: usize,
        max_weight: f64,
    ) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::InvalidArgument {
                message: "ship name must not be empty".to_string(),
            });
        }
        if !max_speed.is_finite() || max_speed <= 0.0 {
            return Err(Error::InvalidArgument {
                message: format!("max_speed must be a finite positive number, got {max_speed}"),
            });
        }
        if max_container_count == 0 {
            return Err(Error::InvalidArgument {
                message: "max_container_count must be greater than zero".to_string(),
            });
        }
        if !max_weight.is_finite() || max_weight <= 0.0 {
            return Err(Error::InvalidArgument {
                message: format!("max_weight must be a finite positive number, got {max_weight}"),
            });
        }

        Ok(Self {
            name: name.to_string(),
            max_speed,
            max_container_count,
            max_weight,
            containers: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    pub fn max_container_count(&self) -> usize {
        self.max_container_count
    }

    pub fn max_weight(&self) -> f64 {
        self.max_weight
    }

    /// Containers aboard, in boarding order.
    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    /// Number of containers currently aboard.
    pub fn container_count(&self) -> usize {
        self.containers.len()
    }

    /// Total weight aboard: cargo mass plus tare weight over every container.
    pub fn current_weight(&self) -> f64 {
        self.containers.iter().map(Container::complete_weight).sum()
    }

    /// Admit a container, appending it to the hold in boarding order.
    ///
    /// The count limit is checked before the weight limit, so a full ship
    /// rejects on count even with weight budget remaining. On rejection the
    /// container travels back to the caller inside [`RejectedContainer`].
    pub fn load_container(
        &mut self,
        container: Container,
    ) -> std::result::Result<(), RejectedContainer> {
        if self.containers.len() >= self.max_container_count {
            return Err(RejectedContainer {
                reason: Error::ContainerLimitReached {
                    ship: self.name.clone(),
                    limit: self.max_container_count,
                },
                container,
            });
        }

        if self.current_weight() + container.complete_weight() > self.max_weight {
            return Err(RejectedContainer {
                reason: Error::WeightLimitExceeded {
                    ship: self.name.clone(),
                    serial: container.serial_number().to_string(),
                    limit: self.max_weight,
                },
                container,
            });
        }

        self.containers.push(container);
        Ok(())
    }

    /// Remove and return the first container matching the serial number.
    pub fn unload_container(&mut self, serial_number: &str) -> Result<Container> {
        if serial_number.trim().is_empty() {
            return Err(Error::InvalidArgument {
                message: "serial number must not be empty".to_string(),
            });
        }

        let position = self
            .containers
            .iter()
            .position(|c| c.serial_number() == serial_number)
            .ok_or_else(|| Error::ContainerNotFound {
                serial: serial_number.to_string(),
            })?;

        Ok(self.containers.remove(position))
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Ship: {}", self.name)?;
        writeln!(f, "Speed: {}", self.max_speed)?;
        writeln!(f, "Maximum containers: {}", self.max_container_count)?;
        writeln!(f, "Weight limit: {}", self.max_weight)?;
        writeln!(f, "Current weight: {}", self.current_weight())?;
        writeln!(f, "Containers aboard: {}", self.container_count())?;
        for container in &self.containers {
            writeln!(
                f,
                "- {} (cargo mass: {})",
                container.serial_number(),
                container.cargo_mass()
            )?;
        }
        Ok(())
    }
}
