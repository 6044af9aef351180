//! Collaborator traits
//!
//! These traits define the interface between the dispatcher and the
//! transport and display code that surrounds it.

pub mod link;
pub mod sink;

pub use link::{LineSource, LinkEvent};
pub use sink::DispatchSink;
