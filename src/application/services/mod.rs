//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.

mod depot;

pub use depot::Depot;
