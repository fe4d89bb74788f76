//! recboard-core
//!
//! Pure domain types, the recommendation sheet layout, and the seed dataset.
//! No network dependency. This is the shared vocabulary of the board.

pub mod error;
pub mod models;
pub mod seed;
pub mod sheet_layout;
