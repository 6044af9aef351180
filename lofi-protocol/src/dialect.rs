//! Line classification
//!
//! Decides which app dialect a received line belongs to. Classification is a
//! cheap sniff, not full validation: the decoders are responsible for turning
//! bad columns into not-a-number values.

use crate::control::{is_analog_marker, ControlCommand};
use crate::face::FACE_LINE_LEN;

/// App dialects sharing the UART link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Dialect {
    /// Facial tracking values from the Face-App
    FaceApp,
    /// Drive commands and joystick readings from the Control app
    Control,
}

/// Set of dialects enabled on a link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DialectSet {
    pub face_app: bool,
    pub control: bool,
}

impl DialectSet {
    /// No dialect enabled
    pub const fn empty() -> Self {
        Self {
            face_app: false,
            control: false,
        }
    }

    /// Only the Face-App dialect
    pub const fn face_app() -> Self {
        Self {
            face_app: true,
            control: false,
        }
    }

    /// Only the Control dialect
    pub const fn control() -> Self {
        Self {
            face_app: false,
            control: true,
        }
    }

    /// Both dialects on the same stream
    pub const fn both() -> Self {
        Self {
            face_app: true,
            control: true,
        }
    }

    /// Return a copy of this set with `dialect` enabled
    pub const fn with(self, dialect: Dialect) -> Self {
        match dialect {
            Dialect::FaceApp => Self {
                face_app: true,
                ..self
            },
            Dialect::Control => Self {
                control: true,
                ..self
            },
        }
    }

    /// Check if a dialect is enabled
    pub const fn contains(&self, dialect: Dialect) -> bool {
        match dialect {
            Dialect::FaceApp => self.face_app,
            Dialect::Control => self.control,
        }
    }

    /// Check if no dialect is enabled
    pub const fn is_empty(&self) -> bool {
        !self.face_app && !self.control
    }
}

impl From<Dialect> for DialectSet {
    fn from(dialect: Dialect) -> Self {
        DialectSet::empty().with(dialect)
    }
}

/// Classify a received line
///
/// Returns `None` for lines that belong to no enabled dialect. When both
/// dialects are enabled the Face-App sniff runs first and wins.
pub fn classify(line: &str, dialects: DialectSet) -> Option<Dialect> {
    if dialects.face_app && is_face_line(line) {
        return Some(Dialect::FaceApp);
    }

    if dialects.control && is_control_line(line) {
        return Some(Dialect::Control);
    }

    None
}

fn is_face_line(line: &str) -> bool {
    // A line is never longer in UTF-16 units than in bytes
    line.len() >= FACE_LINE_LEN
        && line.encode_utf16().count() >= FACE_LINE_LEN
        && leads_with_non_negative_integer(line.as_bytes())
}

fn is_control_line(line: &str) -> bool {
    ControlCommand::from_word(line).is_some()
        || line.as_bytes().first().is_some_and(|&b| is_analog_marker(b))
}

/// Sniff whether a line starts with a non-negative integer
///
/// Accepts leading whitespace and one optional sign before the digit run.
/// `-0` counts as non-negative.
fn leads_with_non_negative_integer(bytes: &[u8]) -> bool {
    let mut rest = bytes.iter().skip_while(|b| b.is_ascii_whitespace()).peekable();

    let negative = match rest.peek() {
        Some(b'-') => {
            rest.next();
            true
        }
        Some(b'+') => {
            rest.next();
            false
        }
        _ => false,
    };

    let mut any_digit = false;
    let mut any_nonzero = false;
    for &b in rest.take_while(|b| b.is_ascii_digit()) {
        any_digit = true;
        any_nonzero |= b != b'0';
    }

    any_digit && !(negative && any_nonzero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const FACE_LINE: &str = "1020304050607080912";

    #[test]
    fn test_face_line_classified() {
        assert_eq!(
            classify(FACE_LINE, DialectSet::face_app()),
            Some(Dialect::FaceApp)
        );
    }

    #[test]
    fn test_face_line_needs_face_app_enabled() {
        assert_eq!(classify(FACE_LINE, DialectSet::control()), None);
    }

    #[test]
    fn test_face_line_too_short() {
        assert_eq!(classify("102030405060708091", DialectSet::face_app()), None);
    }

    #[test]
    fn test_face_line_longer_than_layout() {
        assert_eq!(
            classify("1020304050607080912999", DialectSet::face_app()),
            Some(Dialect::FaceApp)
        );
    }

    #[test]
    fn test_face_length_counts_utf16_units() {
        // 10 characters, 19 bytes
        assert_eq!(classify("1ééééééééé", DialectSet::face_app()), None);
        // 19 characters, 28 bytes
        assert_eq!(
            classify("1020304050ééééééééé", DialectSet::face_app()),
            Some(Dialect::FaceApp)
        );
    }

    #[test]
    fn test_face_sniff_rejects_leading_garbage() {
        assert_eq!(classify("a020304050607080912", DialectSet::face_app()), None);
        assert_eq!(classify("-120304050607080912", DialectSet::face_app()), None);
    }

    #[test]
    fn test_face_sniff_accepts_sign_and_whitespace() {
        assert_eq!(
            classify(" 020304050607080912", DialectSet::face_app()),
            Some(Dialect::FaceApp)
        );
        assert_eq!(
            classify("+020304050607080912", DialectSet::face_app()),
            Some(Dialect::FaceApp)
        );
        assert_eq!(
            classify("-0a0304050607080912", DialectSet::face_app()),
            Some(Dialect::FaceApp)
        );
    }

    #[test]
    fn test_command_words_classified() {
        for word in ["up", "down", "left", "right", "horn", "stop"] {
            assert_eq!(
                classify(word, DialectSet::control()),
                Some(Dialect::Control)
            );
        }
    }

    #[test]
    fn test_command_words_are_exact() {
        assert_eq!(classify("Up", DialectSet::control()), None);
        assert_eq!(classify("up ", DialectSet::control()), None);
        assert_eq!(classify("stopp", DialectSet::control()), None);
    }

    #[test]
    fn test_analog_markers_classified() {
        assert_eq!(classify("x123", DialectSet::control()), Some(Dialect::Control));
        assert_eq!(classify("c090", DialectSet::control()), Some(Dialect::Control));
        assert_eq!(classify("x", DialectSet::control()), Some(Dialect::Control));
        assert_eq!(classify("X123", DialectSet::control()), None);
    }

    #[test]
    fn test_control_needs_control_enabled() {
        assert_eq!(classify("up", DialectSet::face_app()), None);
        assert_eq!(classify("x123", DialectSet::face_app()), None);
    }

    #[test]
    fn test_empty_line_unrecognized() {
        assert_eq!(classify("", DialectSet::both()), None);
        assert_eq!(classify("", DialectSet::face_app()), None);
        assert_eq!(classify("", DialectSet::control()), None);
    }

    #[test]
    fn test_nothing_enabled() {
        assert_eq!(classify(FACE_LINE, DialectSet::empty()), None);
        assert_eq!(classify("up", DialectSet::empty()), None);
    }

    #[test]
    fn test_face_app_takes_precedence() {
        // A long analog line cannot satisfy the Face-App sniff, a digit line
        // cannot satisfy the Control sniff.
        assert_eq!(
            classify(FACE_LINE, DialectSet::both()),
            Some(Dialect::FaceApp)
        );
        assert_eq!(
            classify("x1234567890123456789", DialectSet::both()),
            Some(Dialect::Control)
        );
    }

    #[test]
    fn test_dialect_set() {
        assert!(DialectSet::empty().is_empty());
        assert!(!DialectSet::both().is_empty());
        assert_eq!(
            DialectSet::face_app().with(Dialect::Control),
            DialectSet::both()
        );
        assert!(DialectSet::control().contains(Dialect::Control));
        assert!(!DialectSet::control().contains(Dialect::FaceApp));
        assert_eq!(DialectSet::from(Dialect::FaceApp), DialectSet::face_app());
    }

    proptest! {
        #[test]
        fn prop_short_lines_never_face_app(line in "[ -~]{0,18}") {
            prop_assert_ne!(classify(&line, DialectSet::both()), Some(Dialect::FaceApp));
        }

        #[test]
        fn prop_digit_lines_are_face_app(line in "[0-9]{19,24}") {
            prop_assert_eq!(classify(&line, DialectSet::both()), Some(Dialect::FaceApp));
        }

        #[test]
        fn prop_classify_never_panics(line in "\\PC{0,40}") {
            let _ = classify(&line, DialectSet::both());
        }
    }
}
