//! Face-App dialect decoding
//!
//! A Face-App line carries eleven positional columns with no delimiters.
//! Eight two-digit fields are followed by three single-digit fields.

use crate::decoded::{column, parse_numeral, Decoded};

/// Number of columns consumed by one Face-App frame
///
/// The length check counts UTF-16 code units, the way the app measures a
/// line; field columns are then read as byte offsets.
pub const FACE_LINE_LEN: usize = 19;

/// Number of fields in a Face-App frame
pub const FACE_FIELD_COUNT: usize = 11;

/// Selector for a single Face-App field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FaceField {
    X,
    Y,
    Z,
    Yaw,
    Pitch,
    Mouth,
    LeftEye,
    RightEye,
    Roll,
    Smile,
    FaceVisible,
}

impl FaceField {
    /// All fields in wire order
    pub const ALL: [FaceField; FACE_FIELD_COUNT] = [
        FaceField::X,
        FaceField::Y,
        FaceField::Z,
        FaceField::Yaw,
        FaceField::Pitch,
        FaceField::Mouth,
        FaceField::LeftEye,
        FaceField::RightEye,
        FaceField::Roll,
        FaceField::Smile,
        FaceField::FaceVisible,
    ];

    /// Position of this field in wire order
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Width of this field in columns
    pub const fn width(self) -> usize {
        match self {
            FaceField::Roll | FaceField::Smile | FaceField::FaceVisible => 1,
            _ => 2,
        }
    }

    /// Column offset of this field within the line
    pub const fn offset(self) -> usize {
        match self {
            FaceField::Roll => 16,
            FaceField::Smile => 17,
            FaceField::FaceVisible => 18,
            two_wide => two_wide.index() * 2,
        }
    }
}

/// One decoded Face-App line
///
/// All fields are replaced together; a frame is never partially updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FaceFrame {
    fields: [Decoded<u8>; FACE_FIELD_COUNT],
}

impl Default for FaceFrame {
    fn default() -> Self {
        Self::ZERO
    }
}

impl FaceFrame {
    /// Frame reported before the first Face-App line arrives
    pub const ZERO: FaceFrame = FaceFrame {
        fields: [Decoded::Value(0); FACE_FIELD_COUNT],
    };

    /// Build a frame from values in wire order
    pub const fn from_values(values: [u8; FACE_FIELD_COUNT]) -> Self {
        let mut fields = [Decoded::NotANumber; FACE_FIELD_COUNT];
        let mut i = 0;
        while i < FACE_FIELD_COUNT {
            fields[i] = Decoded::Value(values[i]);
            i += 1;
        }
        Self { fields }
    }

    /// Get a single field
    pub fn get(&self, field: FaceField) -> Decoded<u8> {
        self.fields[field.index()]
    }

    /// Iterate over all fields in wire order
    pub fn iter(&self) -> impl Iterator<Item = (FaceField, Decoded<u8>)> + '_ {
        FaceField::ALL.into_iter().map(move |f| (f, self.get(f)))
    }

    /// Returns true if every field decoded to a value
    pub fn is_complete(&self) -> bool {
        self.fields.iter().all(|f| !f.is_nan())
    }

    /// Shorthand for the face-visible flag (`Value(0)` means no face in view)
    pub fn face_visible(&self) -> Decoded<u8> {
        self.get(FaceField::FaceVisible)
    }
}

/// Decode a Face-App line
///
/// Each field is decoded on its own; a bad column only affects its own field.
/// Columns beyond the end of a short line decode to not-a-number.
pub fn decode_face(line: &str) -> FaceFrame {
    let bytes = line.as_bytes();
    let mut frame = FaceFrame {
        fields: [Decoded::NotANumber; FACE_FIELD_COUNT],
    };

    for field in FaceField::ALL {
        let raw = column(bytes, field.offset(), field.width());
        // Columns are at most two digits wide, so every value fits in a u8
        frame.fields[field.index()] =
            parse_numeral(raw).and_then(|v| u8::try_from(v).ok().into());
    }

    frame
}
