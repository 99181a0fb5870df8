//! Core traits and types used throughout the library.

pub mod exact;
pub mod grid;
pub mod ode;
pub mod status;
