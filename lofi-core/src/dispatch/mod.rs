//! Line dispatcher
//!
//! Routes each received line through the classifier and the matching
//! decoder, folds the result into the session state, and reports what
//! happened as a [`DecodedEvent`].

pub mod events;
pub mod machine;

pub use events::DecodedEvent;
pub use machine::{DispatchError, Dispatcher, DispatcherState};
