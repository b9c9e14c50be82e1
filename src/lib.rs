//! Container fleet domain model.
//!
//! Typed cargo containers ([`Container`], [`ContainerKind`]) enforce per-kind
//! load and unload policy and raise hazard warnings through the
//! [`HazardNotifier`] capability; a [`ContainerShip`] aggregates containers
//! under count and weight limits with load, unload, replace, and transfer
//! operations. The [`Depot`] service issues containers with serials from one
//! shared [`SerialGenerator`] and wires the console alarms.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use application::{ApplicationError, ApplicationResult, Depot};
pub use config::Settings;
pub use domain::{
    Container, ContainerKind, ContainerShip, DomainError, HazardNotifier, Rejected,
    SerialGenerator,
};
