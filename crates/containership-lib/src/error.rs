use thiserror::Error;

/// Convenient result alias for the containership library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a caller supplies a value that fails a basic argument check
    /// (non-positive physical quantity, empty identifier, non-positive mass).
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Raised when a gas container is constructed with a non-positive pressure.
    #[error("pressure must be a finite positive number, got {value}")]
    PressureOutOfRange { value: f64 },

    /// Raised when loading cargo would violate a container's capacity rule.
    #[error("cannot load {mass} onto container {serial}: capacity rule violated")]
    Overfill { serial: String, mass: f64 },

    /// Raised when a ship already carries its maximum number of containers.
    #[error("ship {ship} is at its container limit of {limit}")]
    ContainerLimitReached { ship: String, limit: usize },

    /// Raised when admitting a container would push a ship past its weight limit.
    #[error("container {serial} would put ship {ship} over its weight limit of {limit}")]
    WeightLimitExceeded {
        ship: String,
        serial: String,
        limit: f64,
    },

    /// Raised when no container with the given serial number can be located.
    #[error("no container with serial number {serial}")]
    ContainerNotFound { serial: String },

    /// Raised when a ship name could not be found in the harbor registry.
    #[error("no ship named {name}")]
    ShipNotFound { name: String },

    /// Raised when registering a ship whose name is already taken.
    #[error("duplicate ship name encountered: {name}")]
    DuplicateShipName { name: String },

    /// Raised when a refrigerated container's maintained temperature is below
    /// the floor its product category allows.
    #[error("temperature {maintained} is below the {minimum} floor for {product}")]
    TemperatureRejected {
        product: String,
        maintained: f64,
        minimum: f64,
    },

    /// Raised when a product category name is outside the known enumeration.
    #[error("unknown product type: {name}")]
    UnknownProduct { name: String },

    /// Raised when a ship roster row cannot be parsed.
    #[error("invalid ship roster row {row}: {message}")]
    RosterParse { row: u64, message: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
