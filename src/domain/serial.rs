//! Serial number issuance

use std::sync::atomic::{AtomicU64, Ordering};

/// Issues unique container serial numbers from a single shared counter.
///
/// One generator is created at startup and shared by every container
/// constructor, so serials are unique across all container kinds. The counter
/// starts at 1 and is never reset mid-run.
#[derive(Debug)]
pub struct SerialGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SerialGenerator {
    /// Prefix used when none is configured.
    pub const DEFAULT_PREFIX: &'static str = "KON-C";

    pub fn new() -> Self {
        Self::with_prefix(Self::DEFAULT_PREFIX)
    }

    /// Generator with a custom serial prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }

    /// Issue the next serial number, e.g. `KON-C-1`.
    pub fn next_serial(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", self.prefix, n)
    }
}

impl Default for SerialGenerator {
    fn default() -> Self {
        Self::new()
    }
}
