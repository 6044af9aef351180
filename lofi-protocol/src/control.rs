//! Control dialect decoding
//!
//! The Control app sends either one of six command words or an analog
//! joystick reading: an `x` or `c` marker followed by up to three digits.

use heapless::String;

use crate::decoded::{column, parse_numeral, Decoded};

/// Maximum length of a stored raw command string
pub const MAX_RAW_LEN: usize = 64;

/// Raw command string as received, truncated to [`MAX_RAW_LEN`] bytes
pub type RawCommand = String<MAX_RAW_LEN>;

/// Offset of the analog digits after the marker
const ANALOG_OFFSET: usize = 1;

/// Width of the analog digit column
const ANALOG_WIDTH: usize = 3;

/// Display icon suggested for a command
///
/// The decoder only reports the hint; drawing it is up to the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Icon {
    ArrowNorth,
    ArrowSouth,
    ArrowWest,
    ArrowEast,
    EighthNote,
    SmallSquare,
}

/// Named commands of the Control app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ControlCommand {
    Up,
    Down,
    Left,
    Right,
    Horn,
    Stop,
}

impl ControlCommand {
    pub const ALL: [ControlCommand; 6] = [
        ControlCommand::Up,
        ControlCommand::Down,
        ControlCommand::Left,
        ControlCommand::Right,
        ControlCommand::Horn,
        ControlCommand::Stop,
    ];

    /// Parse a command from its exact wire word
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "up" => Some(ControlCommand::Up),
            "down" => Some(ControlCommand::Down),
            "left" => Some(ControlCommand::Left),
            "right" => Some(ControlCommand::Right),
            "horn" => Some(ControlCommand::Horn),
            "stop" => Some(ControlCommand::Stop),
            _ => None,
        }
    }

    /// Wire word for this command
    pub const fn as_str(self) -> &'static str {
        match self {
            ControlCommand::Up => "up",
            ControlCommand::Down => "down",
            ControlCommand::Left => "left",
            ControlCommand::Right => "right",
            ControlCommand::Horn => "horn",
            ControlCommand::Stop => "stop",
        }
    }

    /// Fixed value reported for this command
    pub const fn value(self) -> u8 {
        match self {
            ControlCommand::Up => 100,
            ControlCommand::Down => 50,
            ControlCommand::Left => 25,
            ControlCommand::Right => 75,
            ControlCommand::Horn => 90,
            ControlCommand::Stop => 0,
        }
    }

    /// Icon the display should show for this command
    pub const fn icon(self) -> Icon {
        match self {
            ControlCommand::Up => Icon::ArrowNorth,
            ControlCommand::Down => Icon::ArrowSouth,
            ControlCommand::Left => Icon::ArrowWest,
            ControlCommand::Right => Icon::ArrowEast,
            ControlCommand::Horn => Icon::EighthNote,
            ControlCommand::Stop => Icon::SmallSquare,
        }
    }
}

/// Returns true for the bytes that start an analog reading
pub(crate) fn is_analog_marker(byte: u8) -> bool {
    matches!(byte, b'x' | b'c')
}

/// One decoded Control line
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlUpdate {
    /// A named command word
    Command { command: ControlCommand },
    /// An analog joystick reading
    ///
    /// Nominally 0-180 but not clamped; up to 999 can arrive on the wire.
    /// `truncated` is set when the line did not fit in `raw`.
    Analog {
        value: Decoded<u16>,
        raw: RawCommand,
        truncated: bool,
    },
}

impl ControlUpdate {
    /// The command string as received
    pub fn raw(&self) -> &str {
        match self {
            ControlUpdate::Command { command } => command.as_str(),
            ControlUpdate::Analog { raw, .. } => raw.as_str(),
        }
    }

    /// Returns true if the raw string was cut to fit [`MAX_RAW_LEN`]
    pub fn is_truncated(&self) -> bool {
        match self {
            ControlUpdate::Command { .. } => false,
            ControlUpdate::Analog { truncated, .. } => *truncated,
        }
    }

    /// Named command value, if this is a command update
    pub fn command_value(&self) -> Option<u8> {
        match self {
            ControlUpdate::Command { command } => Some(command.value()),
            ControlUpdate::Analog { .. } => None,
        }
    }

    /// Analog reading, if this is an analog update
    pub fn analog_value(&self) -> Option<Decoded<u16>> {
        match self {
            ControlUpdate::Command { .. } => None,
            ControlUpdate::Analog { value, .. } => Some(*value),
        }
    }

    /// Display icon hint, if this is a command update
    pub fn icon_hint(&self) -> Option<Icon> {
        match self {
            ControlUpdate::Command { command } => Some(command.icon()),
            ControlUpdate::Analog { .. } => None,
        }
    }
}

/// Decode a Control line
///
/// Returns `None` if the line is neither a command word nor an analog
/// reading. Classified lines never take that path.
pub fn decode_control(line: &str) -> Option<ControlUpdate> {
    if let Some(command) = ControlCommand::from_word(line) {
        return Some(ControlUpdate::Command { command });
    }

    let bytes = line.as_bytes();
    if !bytes.first().is_some_and(|&b| is_analog_marker(b)) {
        return None;
    }

    let value = parse_numeral(column(bytes, ANALOG_OFFSET, ANALOG_WIDTH));
    let raw = truncate_raw(line);
    let truncated = raw.len() < line.len();
    Some(ControlUpdate::Analog {
        value,
        raw,
        truncated,
    })
}

/// Copy a line into a [`RawCommand`], cutting at a character boundary
pub fn truncate_raw(line: &str) -> RawCommand {
    let mut raw = RawCommand::new();
    for ch in line.chars() {
        if raw.push(ch).is_err() {
            break;
        }
    }
    raw
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_command_table() {
        let expected = [
            ("up", 100, Icon::ArrowNorth),
            ("down", 50, Icon::ArrowSouth),
            ("left", 25, Icon::ArrowWest),
            ("right", 75, Icon::ArrowEast),
            ("horn", 90, Icon::EighthNote),
            ("stop", 0, Icon::SmallSquare),
        ];

        for (word, value, icon) in expected {
            let update = decode_control(word).unwrap();
            assert_eq!(update.raw(), word);
            assert_eq!(update.command_value(), Some(value));
            assert_eq!(update.icon_hint(), Some(icon));
            assert_eq!(update.analog_value(), None);
        }
    }

    #[test]
    fn test_command_word_roundtrip() {
        for command in ControlCommand::ALL {
            assert_eq!(ControlCommand::from_word(command.as_str()), Some(command));
        }
    }

    #[test]
    fn test_analog_reading() {
        let update = decode_control("x123").unwrap();
        assert_eq!(update.analog_value(), Some(Decoded::Value(123)));
        assert_eq!(update.raw(), "x123");
        assert_eq!(update.command_value(), None);
        assert_eq!(update.icon_hint(), None);
    }

    #[test]
    fn test_analog_c_marker() {
        let update = decode_control("c090").unwrap();
        assert_eq!(update.analog_value(), Some(Decoded::Value(90)));
    }

    #[test]
    fn test_analog_not_clamped() {
        let update = decode_control("x999").unwrap();
        assert_eq!(update.analog_value(), Some(Decoded::Value(999)));
    }

    #[test]
    fn test_analog_reads_three_digits_only() {
        let update = decode_control("x12345").unwrap();
        assert_eq!(update.analog_value(), Some(Decoded::Value(123)));
        assert_eq!(update.raw(), "x12345");
    }

    #[test]
    fn test_analog_short_tail() {
        assert_eq!(
            decode_control("x7").unwrap().analog_value(),
            Some(Decoded::Value(7))
        );
    }

    #[test]
    fn test_analog_non_numeric_tail() {
        assert_eq!(
            decode_control("x").unwrap().analog_value(),
            Some(Decoded::NotANumber)
        );
        assert_eq!(
            decode_control("cabc").unwrap().analog_value(),
            Some(Decoded::NotANumber)
        );
        // "center" starts with the analog marker
        assert_eq!(
            decode_control("center").unwrap().analog_value(),
            Some(Decoded::NotANumber)
        );
    }

    #[test]
    fn test_unrecognized_control_line() {
        assert_eq!(decode_control(""), None);
        assert_eq!(decode_control("go"), None);
        assert_eq!(decode_control("1020304050607080912"), None);
    }

    #[test]
    fn test_raw_kept_whole() {
        let line = "x090,speed=100,mode=turbo,extra=value";
        let update = decode_control(line).unwrap();
        assert_eq!(update.raw(), line);
        assert!(!update.is_truncated());
        assert_eq!(update.analog_value(), Some(Decoded::Value(90)));
    }

    #[test]
    fn test_raw_exactly_full() {
        let line = std::format!("x{}", "1".repeat(MAX_RAW_LEN - 1));
        let update = decode_control(&line).unwrap();
        assert_eq!(update.raw(), line);
        assert!(!update.is_truncated());
    }

    #[test]
    fn test_raw_truncation() {
        let long = std::format!("x{}", "1234567890".repeat(7));
        let update = decode_control(&long).unwrap();
        assert_eq!(update.raw().len(), MAX_RAW_LEN);
        assert!(long.starts_with(update.raw()));
        assert!(update.is_truncated());
    }

    #[test]
    fn test_commands_never_truncated() {
        for command in ControlCommand::ALL {
            assert!(!decode_control(command.as_str()).unwrap().is_truncated());
        }
    }

    #[test]
    fn test_raw_truncation_char_boundary() {
        let mut line = std::string::String::from("x");
        line.push_str(&"é".repeat(40));
        let raw = truncate_raw(&line);
        assert!(raw.len() <= MAX_RAW_LEN);
        assert!(line.starts_with(raw.as_str()));
        assert!(decode_control(&line).unwrap().is_truncated());
    }

    proptest! {
        #[test]
        fn prop_analog_digits(n in 0u16..1000) {
            let line = std::format!("x{:03}", n);
            let update = decode_control(&line).unwrap();
            prop_assert_eq!(update.analog_value(), Some(Decoded::Value(n)));
        }

        #[test]
        fn prop_decode_never_panics(line in "\\PC{0,64}") {
            let _ = decode_control(&line);
        }

        #[test]
        fn prop_truncated_iff_raw_shorter(line in "x[ -~]{0,100}") {
            let update = decode_control(&line).unwrap();
            prop_assert_eq!(update.is_truncated(), update.raw() != line.as_str());
            prop_assert!(line.starts_with(update.raw()));
        }
    }
}
