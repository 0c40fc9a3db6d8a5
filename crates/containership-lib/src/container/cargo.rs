//! Container entity and per-variant loading, unloading, and capacity rules.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::serial::{SerialSequence, TypeCode};
use crate::temperature::{self, ProductType};

use super::constants::{
    GAS_RESIDUE_FRACTION, HAZARDOUS_LIQUID_CAPACITY_FRACTION, SAFE_LIQUID_CAPACITY_FRACTION,
};
use super::hazard::HazardNotice;
use super::spec::ContainerSpec;

/// Variant-specific state for the closed set of container kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ContainerKind {
    /// Pressurized cargo. Keeps a residue on unload.
    Gas { pressure: f64 },
    /// Liquid cargo with an effective ceiling below the raw payload limit.
    Liquid {
        hazardous_cargo: bool,
        allowed_max_payload: f64,
    },
    /// Chilled cargo validated against the product's temperature floor.
    Refrigerated {
        product: ProductType,
        maintained_temperature: f64,
    },
}

impl ContainerKind {
    /// The serial-number code for this variant.
    pub fn type_code(&self) -> TypeCode {
        match self {
            ContainerKind::Gas { .. } => TypeCode::Gas,
            ContainerKind::Liquid { .. } => TypeCode::Liquid,
            ContainerKind::Refrigerated { .. } => TypeCode::Refrigerated,
        }
    }
}

/// A shipping container with a fixed physical spec and mutable cargo mass.
///
/// Constructed through the variant constructors ([`Container::gas`],
/// [`Container::liquid`], [`Container::refrigerated`]), which validate their
/// inputs and draw a serial number from the supplied [`SerialSequence`].
///
/// # Example
///
/// ```
/// use containership_lib::{Container, ContainerSpec, SerialSequence};
///
/// let serials = SerialSequence::new();
/// let spec = ContainerSpec::new(2.6, 12.0, 2200.0, 28000.0).unwrap();
/// let mut container = Container::refrigerated(
///     spec,
///     "fish".parse().unwrap(),
///     -10.0,
///     &serials,
/// )
/// .unwrap();
///
/// container.load_cargo(1500.0).unwrap();
/// assert_eq!(container.cargo_mass(), 1500.0);
/// assert_eq!(container.complete_weight(), 3700.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Container {
    spec: ContainerSpec,
    serial_number: String,
    cargo_mass: f64,
    kind: ContainerKind,
}

impl Container {
    /// Construct a gas container. Pressure must be a finite positive value.
    pub fn gas(spec: ContainerSpec, pressure: f64, serials: &SerialSequence) -> Result<Self> {
        spec.validate()?;
        if !pressure.is_finite() || pressure <= 0.0 {
            return Err(Error::PressureOutOfRange { value: pressure });
        }
        Ok(Self::assemble(spec, ContainerKind::Gas { pressure }, serials))
    }

    /// Construct a liquid container.
    ///
    /// The effective loading ceiling is fixed here: half the raw payload limit
    /// for hazardous cargo, nine tenths otherwise.
    pub fn liquid(
        spec: ContainerSpec,
        hazardous_cargo: bool,
        serials: &SerialSequence,
    ) -> Result<Self> {
        spec.validate()?;
        let fraction = if hazardous_cargo {
            HAZARDOUS_LIQUID_CAPACITY_FRACTION
        } else {
            SAFE_LIQUID_CAPACITY_FRACTION
        };
        let kind = ContainerKind::Liquid {
            hazardous_cargo,
            allowed_max_payload: spec.max_payload * fraction,
        };
        Ok(Self::assemble(spec, kind, serials))
    }

    /// Construct a refrigerated container.
    ///
    /// The maintained temperature must sit at or above the product's floor;
    /// anything colder is rejected outright, so no partially-configured
    /// container can exist.
    pub fn refrigerated(
        spec: ContainerSpec,
        product: ProductType,
        maintained_temperature: f64,
        serials: &SerialSequence,
    ) -> Result<Self> {
        spec.validate()?;
        if !temperature::is_valid(product, maintained_temperature) {
            return Err(Error::TemperatureRejected {
                product: product.to_string(),
                maintained: maintained_temperature,
                minimum: temperature::minimum_temperature(product),
            });
        }
        let kind = ContainerKind::Refrigerated {
            product,
            maintained_temperature,
        };
        Ok(Self::assemble(spec, kind, serials))
    }

    fn assemble(spec: ContainerSpec, kind: ContainerKind, serials: &SerialSequence) -> Self {
        Self {
            serial_number: serials.next(kind.type_code()),
            spec,
            cargo_mass: 0.0,
            kind,
        }
    }

    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    pub fn spec(&self) -> &ContainerSpec {
        &self.spec
    }

    pub fn kind(&self) -> &ContainerKind {
        &self.kind
    }

    pub fn cargo_mass(&self) -> f64 {
        self.cargo_mass
    }

    /// Cargo mass plus tare weight.
    pub fn complete_weight(&self) -> f64 {
        self.cargo_mass + self.spec.tare_weight
    }

    /// Load cargo into the container.
    ///
    /// The base policy (refrigerated containers) records the mass unless it
    /// would push `cargo_mass` past `max_payload`. Gas and liquid containers
    /// run the hazardous flow instead: the capacity predicate decides between
    /// an accept branch and a reject branch, and the reject branch emits a
    /// hazard notice before failing.
    ///
    /// Note: the hazardous accept branch acknowledges the request without
    /// recording the mass, and the gas predicate accepts exactly the requests
    /// that overflow `max_payload`. Both behaviors are deliberate and pinned
    /// by tests; do not fold them into the base policy.
    pub fn load_cargo(&mut self, mass: f64) -> Result<()> {
        if !mass.is_finite() || mass <= 0.0 {
            return Err(Error::InvalidArgument {
                message: format!("cargo mass must be a finite positive number, got {mass}"),
            });
        }

        match self.kind {
            ContainerKind::Refrigerated { .. } => {
                if self.cargo_mass + mass > self.spec.max_payload {
                    return Err(Error::Overfill {
                        serial: self.serial_number.clone(),
                        mass,
                    });
                }
                self.cargo_mass += mass;
                Ok(())
            }
            ContainerKind::Gas { .. } | ContainerKind::Liquid { .. } => {
                if self.admits_cargo(mass) {
                    // Accept branch: no mass is recorded.
                    return Ok(());
                }
                self.notify_hazard("Cannot load cargo");
                Err(Error::Overfill {
                    serial: self.serial_number.clone(),
                    mass,
                })
            }
        }
    }

    /// Capacity predicate consulted by the hazardous load flow.
    ///
    /// The two rules read in opposite directions: the gas arm keeps the base
    /// comparison and is true exactly when the request would overflow
    /// `max_payload`, while the liquid arm is true when the request fits under
    /// its effective ceiling.
    fn admits_cargo(&self, mass: f64) -> bool {
        match self.kind {
            ContainerKind::Gas { .. } | ContainerKind::Refrigerated { .. } => {
                self.cargo_mass + mass > self.spec.max_payload
            }
            ContainerKind::Liquid {
                allowed_max_payload,
                ..
            } => self.cargo_mass + mass <= allowed_max_payload,
        }
    }

    /// Empty the container. Gas containers keep a residue; every other kind
    /// resets to zero.
    pub fn unload(&mut self) {
        match self.kind {
            ContainerKind::Gas { .. } => self.cargo_mass *= GAS_RESIDUE_FRACTION,
            _ => self.cargo_mass = 0.0,
        }
    }

    /// Emit a hazard notice for this container.
    ///
    /// Container state is untouched; the returned value carries exactly what
    /// was reported so callers and tests can inspect it.
    pub fn notify_hazard(&self, message: &str) -> HazardNotice {
        HazardNotice::emit(&self.serial_number, message)
    }

    #[cfg(test)]
    pub(crate) fn set_cargo_mass_for_tests(&mut self, mass: f64) {
        self.cargo_mass = mass;
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match &self.kind {
            ContainerKind::Gas { pressure } => format!("gas, pressure {pressure}"),
            ContainerKind::Liquid {
                hazardous_cargo: true,
                ..
            } => "liquid, hazardous cargo".to_string(),
            ContainerKind::Liquid {
                hazardous_cargo: false,
                ..
            } => "liquid, safe cargo".to_string(),
            ContainerKind::Refrigerated {
                product,
                maintained_temperature,
            } => format!("refrigerated, {product} at {maintained_temperature}"),
        };
        writeln!(f, "Container {} ({kind})", self.serial_number)?;
        write!(
            f,
            "height: {}, depth: {}, tare weight: {}, maximum payload: {}, cargo mass: {}",
            self.spec.height,
            self.spec.depth,
            self.spec.tare_weight,
            self.spec.max_payload,
            self.cargo_mass
        )
    }
}
