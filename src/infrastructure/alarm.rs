//! Console hazard alarm

use colored::Colorize;

use crate::domain::HazardNotifier;

/// Writes hazard warnings to stdout.
///
/// The wording names the container family so an operator can tell a tank
/// alarm from a pressurized-gas alarm at a glance.
#[derive(Debug, Clone)]
pub struct ConsoleAlarm {
    descriptor: &'static str,
}

impl ConsoleAlarm {
    /// Alarm wording for liquid tank containers.
    pub fn liquid() -> Self {
        Self {
            descriptor: "container",
        }
    }

    /// Alarm wording for pressurized gas containers.
    pub fn gas() -> Self {
        Self {
            descriptor: "gas container",
        }
    }
}

impl HazardNotifier for ConsoleAlarm {
    fn notify_danger(&self, serial_number: &str) {
        println!(
            "{}",
            format!(
                "Dangerous situation in {} {}",
                self.descriptor, serial_number
            )
            .yellow()
        );
    }
}
