//! Container ships and fleet-level stowage rules

use std::fmt;

use itertools::Itertools;
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::container::Container;
use crate::domain::error::DomainError;

/// Scale factor applied to the gross kilogram sum before it is compared
/// against the ton limit. Note this makes the effective cap
/// `max_total_weight_tons / 1000` in gross weight units.
pub const KG_PER_TON: f64 = 1000.0;

/// A container refused by a ship, handed back to the caller together with the
/// rule it violated.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct Rejected {
    /// The container that was not loaded; ownership returns to the caller.
    pub container: Container,
    /// The stowage rule that was violated.
    #[source]
    pub error: DomainError,
}

/// A ship carrying containers under count and weight limits.
///
/// The ship owns its containers; a container sits in at most one ship's hold
/// at a time. Insertion order is load order.
pub struct ContainerShip {
    containers: Vec<Container>,
    max_speed_knots: f64,
    max_container_count: usize,
    max_total_weight_tons: f64,
}

impl ContainerShip {
    pub fn new(max_speed_knots: f64, max_container_count: usize, max_total_weight_tons: f64) -> Self {
        Self {
            containers: Vec::new(),
            max_speed_knots,
            max_container_count,
            max_total_weight_tons,
        }
    }

    /// Take a container on board.
    ///
    /// Checks the container count limit, then the aggregate weight limit; a
    /// refused container comes back to the caller inside [`Rejected`].
    pub fn load_container(&mut self, container: Container) -> Result<(), Rejected> {
        if self.containers.len() >= self.max_container_count {
            return Err(Rejected {
                container,
                error: DomainError::CapacityExceeded(self.max_container_count),
            });
        }
        if (self.total_weight() + container.gross_weight()) * KG_PER_TON > self.max_total_weight_tons
        {
            let error = DomainError::WeightExceeded {
                serial_number: container.serial_number().to_string(),
                max_total_weight_tons: self.max_total_weight_tons,
            };
            return Err(Rejected { container, error });
        }
        debug!("loading container {} onto ship", container.serial_number());
        self.containers.push(container);
        Ok(())
    }

    /// Remove a container by serial number.
    ///
    /// Returns `None` (and leaves the ship unchanged) when no such container
    /// is on board.
    pub fn unload_container(&mut self, serial_number: &str) -> Option<Container> {
        let index = self
            .containers
            .iter()
            .position(|c| c.serial_number() == serial_number)?;
        debug!("unloading container {} from ship", serial_number);
        Some(self.containers.remove(index))
    }

    /// Swap the container with the given serial number for `new`.
    ///
    /// The old container is removed before `new` is checked against the
    /// stowage rules. When that check fails the old container is not restored;
    /// it is discarded with a warning, and `new` comes back in [`Rejected`].
    /// On success the displaced container is returned to the caller.
    pub fn replace_container(
        &mut self,
        serial_number: &str,
        new: Container,
    ) -> Result<Container, Rejected> {
        let Some(old) = self.unload_container(serial_number) else {
            return Err(Rejected {
                container: new,
                error: DomainError::NotFound(serial_number.to_string()),
            });
        };
        match self.load_container(new) {
            Ok(()) => Ok(old),
            Err(rejected) => {
                warn!(
                    "container {} was displaced and will not be restored",
                    old.serial_number()
                );
                Err(rejected)
            }
        }
    }

    /// Move a container to another ship.
    ///
    /// Removal and reload are two independent steps: when the destination
    /// refuses the container it is already gone from this ship and is not
    /// restored; it is discarded with a warning.
    pub fn move_container(
        &mut self,
        serial_number: &str,
        destination: &mut ContainerShip,
    ) -> Result<(), DomainError> {
        let container = self
            .unload_container(serial_number)
            .ok_or_else(|| DomainError::NotFound(serial_number.to_string()))?;
        match destination.load_container(container) {
            Ok(()) => Ok(()),
            Err(rejected) => {
                warn!(
                    "container {} is now stranded off both ships",
                    rejected.container.serial_number()
                );
                Err(rejected.error)
            }
        }
    }

    /// Gross weight (cargo plus tare) of everything currently on board.
    pub fn total_weight(&self) -> f64 {
        self.containers.iter().map(Container::gross_weight).sum()
    }

    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    pub fn container_count(&self) -> usize {
        self.containers.len()
    }

    pub fn max_speed_knots(&self) -> f64 {
        self.max_speed_knots
    }

    pub fn max_container_count(&self) -> usize {
        self.max_container_count
    }

    pub fn max_total_weight_tons(&self) -> f64 {
        self.max_total_weight_tons
    }

    /// Serial numbers currently on board, in load order.
    pub fn manifest(&self) -> String {
        self.containers
            .iter()
            .map(Container::serial_number)
            .join(", ")
    }
}

impl fmt::Display for ContainerShip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Max Speed: {} knots", self.max_speed_knots)?;
        writeln!(f, "Max Container Count: {}", self.max_container_count)?;
        writeln!(f, "Max Total Weight: {} tons", self.max_total_weight_tons)?;
        write!(
            f,
            "Number of Loaded Containers: {}",
            self.containers.len()
        )?;
        for container in &self.containers {
            write!(f, "\n{}", container)?;
        }
        Ok(())
    }
}
