//! Infrastructure layer: side-effecting implementations of domain capabilities

pub mod alarm;

pub use alarm::ConsoleAlarm;
