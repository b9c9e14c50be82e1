//! Container depot service
//!
//! Issues containers with serial numbers from one shared generator and wires
//! hazard alarms into the kinds that raise them.

use std::sync::Arc;

use tracing::debug;

use crate::application::error::ApplicationResult;
use crate::domain::{Container, HazardNotifier, SerialGenerator};
use crate::infrastructure::ConsoleAlarm;

/// Issues containers for a fleet.
///
/// The depot owns the serial generator, so every container it hands out gets
/// a unique serial regardless of kind. Liquid and gas containers leave the
/// depot with their hazard alarm already attached; refrigerated and dry
/// containers have no alarm to attach.
pub struct Depot {
    serials: Arc<SerialGenerator>,
    liquid_alarm: Arc<dyn HazardNotifier>,
    gas_alarm: Arc<dyn HazardNotifier>,
}

impl Depot {
    /// Depot with console alarms and the default serial prefix.
    pub fn new() -> Self {
        Self::with_prefix(SerialGenerator::DEFAULT_PREFIX)
    }

    /// Depot with console alarms and a custom serial prefix.
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            serials: Arc::new(SerialGenerator::with_prefix(prefix)),
            liquid_alarm: Arc::new(ConsoleAlarm::liquid()),
            gas_alarm: Arc::new(ConsoleAlarm::gas()),
        }
    }

    /// Replace the alarm sinks (tests use this to capture warnings).
    pub fn with_notifiers(
        mut self,
        liquid_alarm: Arc<dyn HazardNotifier>,
        gas_alarm: Arc<dyn HazardNotifier>,
    ) -> Self {
        self.liquid_alarm = liquid_alarm;
        self.gas_alarm = gas_alarm;
        self
    }

    pub fn dry_container(&self, max_load: f64) -> Container {
        let container = Container::dry(&self.serials, max_load);
        debug!("issued dry container {}", container.serial_number());
        container
    }

    pub fn liquid_container(&self, max_load: f64, is_hazardous: bool) -> Container {
        let container = Container::liquid(&self.serials, max_load, is_hazardous)
            .with_notifier(Arc::clone(&self.liquid_alarm));
        debug!("issued liquid container {}", container.serial_number());
        container
    }

    pub fn refrigerated_container(
        &self,
        max_load: f64,
        product_type: &str,
        initial_temperature: f64,
    ) -> ApplicationResult<Container> {
        let container =
            Container::refrigerated(&self.serials, max_load, product_type, initial_temperature)?;
        debug!("issued refrigerated container {}", container.serial_number());
        Ok(container)
    }

    pub fn gas_container(&self, max_load: f64, pressure: f64) -> Container {
        let container = Container::gas(&self.serials, max_load, pressure)
            .with_notifier(Arc::clone(&self.gas_alarm));
        debug!("issued gas container {}", container.serial_number());
        container
    }
}

impl Default for Depot {
    fn default() -> Self {
        Self::new()
    }
}
