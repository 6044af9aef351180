//! Line source trait for the BLE UART link

/// Event delivered by the link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkEvent<'a> {
    /// A central connected to the UART service
    Connected,
    /// The central disconnected
    Disconnected,
    /// One complete line, without its terminator
    Line(&'a str),
}

/// Trait for the transport delivering received lines
///
/// Line framing is the transport's job: each `Line` event carries exactly
/// one message with the newline delimiter already stripped.
pub trait LineSource {
    /// Error type for receive operations
    type Error;

    /// Wait for the next link event
    ///
    /// Returns `Ok(None)` once the stream has ended.
    fn next_event(&mut self) -> Result<Option<LinkEvent<'_>>, Self::Error>;
}
