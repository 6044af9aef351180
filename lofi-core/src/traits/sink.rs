//! Notification sink trait

use crate::dispatch::DecodedEvent;

/// Trait for code reacting to dispatched lines
///
/// All methods are called synchronously from the dispatcher and must not
/// block: the next line is not processed until they return. Every method
/// defaults to doing nothing.
pub trait DispatchSink {
    /// Visual feedback for a successful decode
    ///
    /// Called before [`data_received`](Self::data_received). A display
    /// typically shows [`DecodedEvent::icon_hint`] here.
    fn feedback(&mut self, event: &DecodedEvent) {
        let _ = event;
    }

    /// A line was decoded and the session state changed
    fn data_received(&mut self) {}

    /// The link connected
    fn connected(&mut self) {}

    /// The link disconnected
    fn disconnected(&mut self) {}
}

/// Sink that ignores every notification
impl DispatchSink for () {}
