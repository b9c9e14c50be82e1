//! Domain layer: containers, ships, and stowage rules
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod container;
pub mod error;
pub mod hazard;
pub mod serial;
pub mod ship;

pub use container::{
    required_temperature, Container, ContainerKind, GAS_RESIDUAL_FRACTION,
    LIQUID_SAFE_FILL_FRACTION, PRODUCT_TEMPERATURES,
};
pub use error::{DomainError, DomainResult};
pub use hazard::HazardNotifier;
pub use serial::SerialGenerator;
pub use ship::{ContainerShip, Rejected, KG_PER_TON};
