//! Session configuration
//!
//! Which apps are enabled is fixed when the dispatcher starts listening.

pub mod types;

pub use types::*;
