//! Application core for the LOFI Robot Bluetooth apps
//!
//! This crate contains everything between "a line arrived on the UART" and
//! "the robot program reads a value":
//!
//! - Session state holding the latest value per dialect
//! - Dispatcher state machine routing lines through the decoders
//! - Collaborator traits for the line source and the feedback sink
//! - Configuration of which apps are enabled
//!
//! ```text
//! LineSource ──► Dispatcher ──► classify ──► decode_face / decode_control
//!                    │                                   │
//!                    │            SessionState ◄─────────┘
//!                    ▼
//!               DispatchSink (feedback, data received, link events)
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod config;
pub mod dispatch;
pub mod session;
pub mod traits;

pub use config::{AppsConfig, ConfigError, SessionConfig};
pub use dispatch::{DecodedEvent, DispatchError, Dispatcher, DispatcherState};
pub use session::{ControlField, SessionState, SharedSession};
pub use traits::{DispatchSink, LineSource, LinkEvent};
