//! Cargo containers and per-kind load/unload policy

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::hazard::HazardNotifier;
use crate::domain::serial::SerialGenerator;

/// Fraction of max load a gas container keeps back after unloading.
pub const GAS_RESIDUAL_FRACTION: f64 = 0.05;

/// Fill fraction above which a non-hazardous liquid load raises a warning.
pub const LIQUID_SAFE_FILL_FRACTION: f64 = 0.9;

/// Products accepted by refrigerated containers, with their required
/// transport temperatures.
pub const PRODUCT_TEMPERATURES: [(&str, f64); 3] = [
    ("Bananas", 4.0),
    ("Fish", 6.0),
    ("Eggs", 2.0),
];

/// Look up the required transport temperature for a product.
pub fn required_temperature(product_type: &str) -> Option<f64> {
    PRODUCT_TEMPERATURES
        .iter()
        .find(|(product, _)| *product == product_type)
        .map(|(_, temperature)| *temperature)
}

/// Kind-specific state and policy selector for a container.
#[derive(Debug, Clone, PartialEq)]
pub enum ContainerKind {
    /// General-purpose dry cargo box with the default load policy.
    Dry,
    /// Tank container; hazardous cargo uses a stricter warning threshold.
    Liquid { is_hazardous: bool },
    /// Cooled container bound to a product from the temperature table.
    Refrigerated {
        product_type: String,
        required_temperature: f64,
        temperature: f64,
    },
    /// Pressurized container; keeps residual cargo after unloading.
    Gas { pressure: f64 },
}

/// A cargo container.
///
/// Physical dimensions and tare weight are fixed at creation; only the cargo
/// weight changes over the container's life. Serial numbers come from a shared
/// [`SerialGenerator`] and are unique across all kinds.
pub struct Container {
    serial_number: String,
    height: f64,
    depth: f64,
    container_weight: f64,
    max_load: f64,
    cargo_weight: f64,
    kind: ContainerKind,
    notifier: Option<Arc<dyn HazardNotifier>>,
}

impl Container {
    /// General-purpose dry container.
    pub fn dry(serials: &SerialGenerator, max_load: f64) -> Self {
        Self::with_kind(serials, max_load, ContainerKind::Dry)
    }

    /// Liquid tank container.
    pub fn liquid(serials: &SerialGenerator, max_load: f64, is_hazardous: bool) -> Self {
        Self::with_kind(serials, max_load, ContainerKind::Liquid { is_hazardous })
    }

    /// Refrigerated container.
    ///
    /// Fails when `product_type` is not in [`PRODUCT_TEMPERATURES`]; the
    /// required temperature is derived from that table. The initial temperature
    /// is never validated against the required one.
    pub fn refrigerated(
        serials: &SerialGenerator,
        max_load: f64,
        product_type: &str,
        initial_temperature: f64,
    ) -> DomainResult<Self> {
        let required = required_temperature(product_type)
            .ok_or_else(|| DomainError::UnknownProduct(product_type.to_string()))?;
        Ok(Self::with_kind(
            serials,
            max_load,
            ContainerKind::Refrigerated {
                product_type: product_type.to_string(),
                required_temperature: required,
                temperature: initial_temperature,
            },
        ))
    }

    /// Pressurized gas container.
    pub fn gas(serials: &SerialGenerator, max_load: f64, pressure: f64) -> Self {
        Self::with_kind(serials, max_load, ContainerKind::Gas { pressure })
    }

    fn with_kind(serials: &SerialGenerator, max_load: f64, kind: ContainerKind) -> Self {
        Self {
            serial_number: serials.next_serial(),
            height: 0.0,
            depth: 0.0,
            container_weight: 0.0,
            max_load,
            cargo_weight: 0.0,
            kind,
            notifier: None,
        }
    }

    /// Attach a hazard notifier; warnings raised by the load policy go to it.
    pub fn with_notifier(mut self, notifier: Arc<dyn HazardNotifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Add cargo, applying the kind-specific policy.
    ///
    /// Warning thresholds are evaluated against the pre-load cargo weight, and
    /// a warning never blocks the load by itself; whether the load is then
    /// refused depends on the kind.
    pub fn load_cargo(&mut self, weight: f64) -> DomainResult<()> {
        debug!(
            "load_cargo: {} weight={} cargo={}",
            self.serial_number, weight, self.cargo_weight
        );
        match &self.kind {
            ContainerKind::Liquid { is_hazardous } => {
                // Hazardous cargo compares against half the current cargo
                // weight, so any positive load on a tank trips the alarm.
                let threshold = if *is_hazardous {
                    self.cargo_weight * 0.5
                } else {
                    self.max_load * LIQUID_SAFE_FILL_FRACTION
                };
                if self.cargo_weight + weight > threshold {
                    self.notify_danger();
                }
                self.load_checked(weight)
            }
            ContainerKind::Gas { .. } => {
                // Over-pressure is alarmed but never refused; gas containers
                // may exceed their rated max load.
                if self.cargo_weight + weight > self.max_load {
                    self.notify_danger();
                }
                self.cargo_weight += weight;
                Ok(())
            }
            ContainerKind::Dry | ContainerKind::Refrigerated { .. } => self.load_checked(weight),
        }
    }

    /// Default load policy: refuse anything past the hard cap, leaving the
    /// cargo weight untouched on failure.
    fn load_checked(&mut self, weight: f64) -> DomainResult<()> {
        if self.cargo_weight + weight > self.max_load {
            return Err(DomainError::Overflow {
                serial_number: self.serial_number.clone(),
                cargo_weight: self.cargo_weight,
                weight,
                max_load: self.max_load,
            });
        }
        self.cargo_weight += weight;
        Ok(())
    }

    /// Empty the container.
    ///
    /// Gas containers cannot be fully purged and keep
    /// [`GAS_RESIDUAL_FRACTION`] of their max load on board.
    pub fn unload_cargo(&mut self) {
        self.cargo_weight = 0.0;
        if let ContainerKind::Gas { .. } = self.kind {
            self.cargo_weight = self.max_load * GAS_RESIDUAL_FRACTION;
        }
    }

    /// Set the current temperature of a refrigerated container.
    ///
    /// No effect on other kinds; never validated against the required
    /// temperature.
    pub fn set_temperature(&mut self, value: f64) {
        if let ContainerKind::Refrigerated { temperature, .. } = &mut self.kind {
            *temperature = value;
        }
    }

    fn notify_danger(&self) {
        if let Some(notifier) = &self.notifier {
            notifier.notify_danger(&self.serial_number);
        }
    }

    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn depth(&self) -> f64 {
        self.depth
    }

    pub fn container_weight(&self) -> f64 {
        self.container_weight
    }

    pub fn max_load(&self) -> f64 {
        self.max_load
    }

    pub fn cargo_weight(&self) -> f64 {
        self.cargo_weight
    }

    pub fn kind(&self) -> &ContainerKind {
        &self.kind
    }

    /// Cargo plus tare weight, the quantity ships sum for their weight limit.
    pub fn gross_weight(&self) -> f64 {
        self.cargo_weight + self.container_weight
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Serial Number: {}, Height: {}, Depth: {}, Cargo Weight: {}, Container Weight: {}, Max Load: {}",
            self.serial_number,
            self.height,
            self.depth,
            self.cargo_weight,
            self.container_weight,
            self.max_load
        )?;
        match &self.kind {
            ContainerKind::Dry => Ok(()),
            ContainerKind::Liquid { is_hazardous } => write!(f, ", Hazardous: {}", is_hazardous),
            ContainerKind::Refrigerated {
                product_type,
                required_temperature,
                temperature,
            } => write!(
                f,
                ", Product Type: {}, Required Temperature: {}, Current Temperature: {}",
                product_type, required_temperature, temperature
            ),
            ContainerKind::Gas { pressure } => write!(f, ", Pressure: {}", pressure),
        }
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("serial_number", &self.serial_number)
            .field("cargo_weight", &self.cargo_weight)
            .field("max_load", &self.max_load)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_known_products_when_looking_up_then_temperatures_match_table() {
        assert_eq!(required_temperature("Bananas"), Some(4.0));
        assert_eq!(required_temperature("Fish"), Some(6.0));
        assert_eq!(required_temperature("Eggs"), Some(2.0));
    }

    #[test]
    fn given_unknown_product_when_looking_up_then_none() {
        assert_eq!(required_temperature("Steel"), None);
        assert_eq!(required_temperature(""), None);
    }
}
