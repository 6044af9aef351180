//! Latest decoded values per dialect

use lofi_protocol::control::truncate_raw;
use lofi_protocol::{ControlUpdate, Decoded, Dialect, FaceField, FaceFrame, RawCommand};

/// Selector for a Control value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ControlField {
    /// Last analog joystick reading (`x###` / `c###`)
    JoystickX,
    /// Value of the last named command
    Command,
}

/// Latest decoded values for one robot link
///
/// The Face-App frame and the two Control values are tracked independently:
/// an update from one dialect never resets the other, and an analog reading
/// never resets the named-command value (or the reverse).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SessionState {
    face: FaceFrame,
    command_value: u8,
    analog_value: Decoded<u16>,
    last_command: RawCommand,
    last_command_truncated: bool,
    last_dialect: Option<Dialect>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    /// State before any line has been decoded: all values zero
    pub const fn new() -> Self {
        Self {
            face: FaceFrame::ZERO,
            command_value: 0,
            analog_value: Decoded::Value(0),
            last_command: RawCommand::new(),
            last_command_truncated: false,
            last_dialect: None,
        }
    }

    /// Current Face-App frame
    pub fn face(&self) -> &FaceFrame {
        &self.face
    }

    /// Current value of one Face-App field
    pub fn face_value(&self, field: FaceField) -> Decoded<u8> {
        self.face.get(field)
    }

    /// Current value of a Control field
    pub fn control_value(&self, field: ControlField) -> Decoded<u16> {
        match field {
            ControlField::JoystickX => self.analog_value,
            ControlField::Command => Decoded::Value(u16::from(self.command_value)),
        }
    }

    /// Value of the last named command (0 before any command)
    pub fn command_value(&self) -> u8 {
        self.command_value
    }

    /// Last analog joystick reading
    pub fn analog_value(&self) -> Decoded<u16> {
        self.analog_value
    }

    /// Raw string of the last Control line, command or analog
    pub fn last_command(&self) -> &str {
        self.last_command.as_str()
    }

    /// Returns true if [`last_command`](Self::last_command) was cut to fit
    /// [`MAX_RAW_LEN`](lofi_protocol::MAX_RAW_LEN) bytes
    pub fn last_command_truncated(&self) -> bool {
        self.last_command_truncated
    }

    /// Dialect of the last successfully decoded line
    pub fn last_dialect(&self) -> Option<Dialect> {
        self.last_dialect
    }

    /// Replace the Face-App frame
    pub(crate) fn apply_face(&mut self, frame: FaceFrame) {
        self.face = frame;
        self.last_dialect = Some(Dialect::FaceApp);
    }

    /// Merge a Control update, touching only the sub-field it carries
    pub(crate) fn apply_control(&mut self, update: &ControlUpdate) {
        match update {
            ControlUpdate::Command { command } => {
                self.command_value = command.value();
                self.last_command = truncate_raw(command.as_str());
            }
            ControlUpdate::Analog { value, raw, .. } => {
                self.analog_value = *value;
                self.last_command = raw.clone();
            }
        }
        self.last_command_truncated = update.is_truncated();
        self.last_dialect = Some(Dialect::Control);
    }
}
