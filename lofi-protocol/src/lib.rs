//! LOFI Robot Bluetooth line protocol
//!
//! This crate classifies and decodes the text lines that the LOFI smartphone
//! apps send over the micro:bit BLE UART service. Two dialects share the link:
//!
//! ```text
//! Face-App (19 columns, no delimiters):
//! ┌────┬────┬────┬─────┬───────┬───────┬──────┬──────┬──────┬───────┬─────────┐
//! │ X  │ Y  │ Z  │ Yaw │ Pitch │ Mouth │ LEye │ REye │ Roll │ Smile │ Visible │
//! │ 2  │ 2  │ 2  │ 2   │ 2     │ 2     │ 2    │ 2    │ 1    │ 1     │ 1       │
//! └────┴────┴────┴─────┴───────┴───────┴──────┴──────┴──────┴───────┴─────────┘
//!
//! Control:
//!   up | down | left | right | horn | stop     named command
//!   x###  |  c###                               analog joystick reading
//! ```
//!
//! Decoding never fails. A line that matches no enabled dialect is simply
//! unrecognized, and a column that is not a numeral decodes to
//! [`Decoded::NotANumber`] without affecting its neighbours.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod control;
pub mod decoded;
pub mod dialect;
pub mod face;

pub use control::{decode_control, ControlCommand, ControlUpdate, Icon, RawCommand, MAX_RAW_LEN};
pub use decoded::Decoded;
pub use dialect::{classify, Dialect, DialectSet};
pub use face::{decode_face, FaceField, FaceFrame, FACE_LINE_LEN};
