//! # Core Types
//!
//! The shared vocabulary of the allocator workspace. Every other crate speaks in
//! terms of these structures, so this crate depends on nothing internal.

pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::Sector;
pub use error::CoreError;
pub use structs::{Allocation, Instrument, Portfolio, PortfolioMetrics};
