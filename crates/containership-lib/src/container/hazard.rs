//! Hazard notifications emitted by hazardous container variants.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Observable alert emitted when a hazardous container fails to load cargo.
///
/// The notice never mutates container state; it is a value so callers and
/// tests can inspect exactly what was reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HazardNotice {
    pub serial_number: String,
    pub message: String,
}

impl HazardNotice {
    pub(crate) fn emit(serial_number: &str, message: &str) -> Self {
        tracing::warn!(serial = serial_number, message, "hazard notification");
        Self {
            serial_number: serial_number.to_string(),
            message: message.to_string(),
        }
    }
}

impl fmt::Display for HazardNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Hazardous container {}\nMessage: {}",
            self.serial_number, self.message
        )
    }
}
