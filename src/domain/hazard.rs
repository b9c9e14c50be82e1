//! Hazard notification capability

/// Sink for danger warnings raised while loading containers.
///
/// Only some container kinds raise hazard warnings; a container without a
/// notifier attached simply drops them. Notification is a side effect and
/// never blocks or fails the load itself.
pub trait HazardNotifier: Send + Sync {
    /// Report a dangerous situation in the container with the given serial number.
    fn notify_danger(&self, serial_number: &str);
}
