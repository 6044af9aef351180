//! Session state
//!
//! Holds the most recent values decoded from each dialect. The dispatcher is
//! the only writer; everything else reads through the query methods or takes
//! a snapshot.

pub mod shared;
pub mod state;

pub use shared::SharedSession;
pub use state::{ControlField, SessionState};
