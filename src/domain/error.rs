//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of stowage business rules.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("overfilling container {serial_number}: cargo {cargo_weight} + {weight} exceeds max load {max_load}")]
    Overflow {
        serial_number: String,
        cargo_weight: f64,
        weight: f64,
        max_load: f64,
    },

    #[error("product {0} is not in the temperature table")]
    UnknownProduct(String),

    #[error("cannot load more containers: maximum container count {0} reached")]
    CapacityExceeded(usize),

    #[error("cannot load container {serial_number}: maximum total weight {max_total_weight_tons} tons reached")]
    WeightExceeded {
        serial_number: String,
        max_total_weight_tons: f64,
    },

    #[error("container with serial number {0} not found")]
    NotFound(String),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
