//! Physical container attributes.
//!
//! This module contains the fixed physical attributes shared by every
//! container variant.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Physical attributes fixed at construction for the container's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerSpec {
    pub height: f64,
    pub depth: f64,
    pub tare_weight: f64,
    pub max_payload: f64,
}

impl ContainerSpec {
    /// Create a spec, validating every attribute.
    pub fn new(height: f64, depth: f64, tare_weight: f64, max_payload: f64) -> Result<Self> {
        let spec = Self {
            height,
            depth,
            tare_weight,
            max_payload,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Validate container attributes for correctness.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            (self.height, "height"),
            (self.depth, "depth"),
            (self.tare_weight, "tare_weight"),
            (self.max_payload, "max_payload"),
        ];

        for (value, field) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidArgument {
                    message: format!("{field} must be a finite positive number, got {value}"),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_attributes_are_accepted() {
        let spec = ContainerSpec::new(2.6, 12.0, 2200.0, 28000.0).expect("valid spec");
        assert_eq!(spec.max_payload, 28000.0);
    }

    #[test]
    fn each_non_positive_attribute_is_rejected() {
        let cases = [
            (0.0, 12.0, 2200.0, 28000.0),
            (2.6, -1.0, 2200.0, 28000.0),
            (2.6, 12.0, 0.0, 28000.0),
            (2.6, 12.0, 2200.0, -28000.0),
        ];
        for (height, depth, tare, payload) in cases {
            let err = ContainerSpec::new(height, depth, tare, payload).unwrap_err();
            assert!(matches!(err, Error::InvalidArgument { .. }));
        }
    }

    #[test]
    fn non_finite_attributes_are_rejected() {
        let err = ContainerSpec::new(f64::NAN, 12.0, 2200.0, 28000.0).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
        let err = ContainerSpec::new(2.6, f64::INFINITY, 2200.0, 28000.0).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
    }
}
