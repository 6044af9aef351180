//! Decoded numeric values
//!
//! Every numeric column on the wire decodes to a [`Decoded`] value. A column
//! that does not hold a numeral produces [`Decoded::NotANumber`] instead of an
//! error, so one bad column never invalidates the rest of a line.

/// Result of decoding one numeric column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Decoded<T> {
    /// The column held a valid numeral
    Value(T),
    /// The column was empty or not a numeral
    NotANumber,
}

impl<T: Copy> Decoded<T> {
    /// Returns the decoded value, or `None` for the not-a-number marker
    pub fn value(self) -> Option<T> {
        match self {
            Decoded::Value(v) => Some(v),
            Decoded::NotANumber => None,
        }
    }

    /// Returns true if the column failed to decode
    pub fn is_nan(&self) -> bool {
        matches!(self, Decoded::NotANumber)
    }

    /// Returns the decoded value or `default` for the not-a-number marker
    pub fn unwrap_or(self, default: T) -> T {
        self.value().unwrap_or(default)
    }

    /// Transform the decoded value, keeping the not-a-number marker
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Decoded<U> {
        match self {
            Decoded::Value(v) => Decoded::Value(f(v)),
            Decoded::NotANumber => Decoded::NotANumber,
        }
    }

    /// Chain a further decode step that may itself yield not-a-number
    pub fn and_then<U, F: FnOnce(T) -> Decoded<U>>(self, f: F) -> Decoded<U> {
        match self {
            Decoded::Value(v) => f(v),
            Decoded::NotANumber => Decoded::NotANumber,
        }
    }
}

impl<T> From<Option<T>> for Decoded<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Decoded::Value(v),
            None => Decoded::NotANumber,
        }
    }
}

/// Extract a fixed-width column from a line
///
/// Columns that run past the end of the line are clipped; columns that start
/// past the end are empty.
pub fn column(bytes: &[u8], offset: usize, width: usize) -> &[u8] {
    let end = offset.saturating_add(width).min(bytes.len());
    bytes.get(offset..end).unwrap_or(&[])
}

/// Parse a numeral from a column
///
/// Leading ASCII whitespace is skipped, then one optional `+` or `-` sign,
/// then the longest run of ASCII digits is taken as the value. Anything after
/// the run is ignored. A negative sign is only accepted when every digit is
/// zero (`-0` reads as 0). An empty run, a decimal point, a negative value or
/// a value above `u16::MAX` is not a numeral.
pub fn parse_numeral(field: &[u8]) -> Decoded<u16> {
    let mut rest = field
        .iter()
        .skip_while(|b| b.is_ascii_whitespace())
        .peekable();

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

    let mut value: Option<u16> = None;
    for &digit in rest.take_while(|b| b.is_ascii_digit()) {
        let acc = value.unwrap_or(0);
        value = match acc
            .checked_mul(10)
            .and_then(|v| v.checked_add(u16::from(digit - b'0')))
        {
            Some(v) => Some(v),
            None => return Decoded::NotANumber,
        };
    }

    match value {
        Some(v) if negative && v != 0 => Decoded::NotANumber,
        other => other.into(),
    }
}
