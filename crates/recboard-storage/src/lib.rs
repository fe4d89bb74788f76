//! recboard-storage
//!
//! The tabular store seam, its Google Sheets and in-memory backends, and the
//! recommendation repository that maps sheet rows to domain values.

pub mod client;
pub mod error;
pub mod memory;
pub mod repository;
pub mod sheets;
pub mod store;
pub mod token;
