//! Dispatcher state machine
//!
//! ```text
//! Idle ──listen(dialects)──► Listening(dialects)
//! ```
//!
//! There is no way back to `Idle`: the enabled dialects are fixed for the
//! lifetime of the dispatcher. Create a new one to change them.

use lofi_protocol::{classify, decode_control, decode_face, Dialect, DialectSet};

use crate::config::SessionConfig;
use crate::session::SessionState;
use crate::traits::{DispatchSink, LineSource, LinkEvent};

use super::events::DecodedEvent;

/// Dispatcher states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DispatcherState {
    /// No app initialized yet; every line is ignored
    Idle,
    /// Decoding lines of the enabled dialects
    Listening(DialectSet),
}

impl DispatcherState {
    /// Check if lines are being decoded
    pub fn is_listening(&self) -> bool {
        matches!(self, DispatcherState::Listening(_))
    }

    /// Enabled dialects (empty while idle)
    pub fn dialects(&self) -> DialectSet {
        match self {
            DispatcherState::Idle => DialectSet::empty(),
            DispatcherState::Listening(dialects) => *dialects,
        }
    }
}

/// Errors returned when starting the dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DispatchError {
    /// `listen` was already called on this dispatcher
    AlreadyListening,
    /// `listen` was called with an empty dialect set
    NoDialectEnabled,
}

/// Routes lines to the decoders and owns the session state
#[derive(Debug, Clone)]
pub struct Dispatcher {
    state: DispatcherState,
    session: SessionState,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    /// Create an idle dispatcher with zeroed session state
    pub const fn new() -> Self {
        Self {
            state: DispatcherState::Idle,
            session: SessionState::new(),
        }
    }

    /// Create a dispatcher that is already listening
    ///
    /// An empty set leaves the dispatcher idle.
    pub fn listening(dialects: DialectSet) -> Self {
        let mut dispatcher = Self::new();
        if dialects.is_empty() {
            warn!("dispatcher created with no dialect enabled");
        } else {
            dispatcher.state = DispatcherState::Listening(dialects);
        }
        dispatcher
    }

    /// Create a dispatcher listening to the apps enabled in `config`
    pub fn from_config(config: &SessionConfig) -> Self {
        Self::listening(config.dialects())
    }

    /// Start decoding the given dialects
    pub fn listen(&mut self, dialects: DialectSet) -> Result<(), DispatchError> {
        if self.state.is_listening() {
            warn!("listen called twice, keeping {}", self.state);
            return Err(DispatchError::AlreadyListening);
        }
        if dialects.is_empty() {
            warn!("listen called with no dialect enabled");
            return Err(DispatchError::NoDialectEnabled);
        }

        info!("listening for {}", dialects);
        self.state = DispatcherState::Listening(dialects);
        Ok(())
    }

    /// Current state
    pub fn state(&self) -> DispatcherState {
        self.state
    }

    /// Current session state
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Copy of the current session state
    pub fn snapshot(&self) -> SessionState {
        self.session.clone()
    }

    /// Classify and decode one line, updating the session state
    ///
    /// Never fails: unrecognized lines (and every line while idle) return
    /// [`DecodedEvent::NoOp`] and leave the state untouched.
    pub fn dispatch(&mut self, line: &str) -> DecodedEvent {
        let DispatcherState::Listening(dialects) = self.state else {
            trace!("idle, ignoring line");
            return DecodedEvent::NoOp;
        };

        match classify(line, dialects) {
            Some(Dialect::FaceApp) => {
                let frame = decode_face(line);
                trace!("face frame {}", frame);
                self.session.apply_face(frame);
                DecodedEvent::FaceUpdate(frame)
            }
            Some(Dialect::Control) => match decode_control(line) {
                Some(update) => {
                    trace!("control update {}", update);
                    self.session.apply_control(&update);
                    DecodedEvent::ControlUpdate(update)
                }
                None => {
                    debug!("classified control line did not decode: {=str}", line);
                    DecodedEvent::NoOp
                }
            },
            None => {
                debug!("dropping unrecognized line: {=str}", line);
                DecodedEvent::NoOp
            }
        }
    }

    /// Dispatch one line and notify `sink`
    ///
    /// On a successful decode the sink gets `feedback` first and
    /// `data_received` second. Nothing is called for a `NoOp`.
    pub fn handle_line<K: DispatchSink + ?Sized>(
        &mut self,
        line: &str,
        sink: &mut K,
    ) -> DecodedEvent {
        let event = self.dispatch(line);
        if event.is_update() {
            sink.feedback(&event);
            sink.data_received();
        }
        event
    }

    /// Route one link event to the decoder or the sink
    pub fn handle_link_event<K: DispatchSink + ?Sized>(
        &mut self,
        event: LinkEvent<'_>,
        sink: &mut K,
    ) -> DecodedEvent {
        match event {
            LinkEvent::Connected => {
                debug!("link connected");
                sink.connected();
                DecodedEvent::NoOp
            }
            LinkEvent::Disconnected => {
                debug!("link disconnected");
                sink.disconnected();
                DecodedEvent::NoOp
            }
            LinkEvent::Line(line) => self.handle_line(line, sink),
        }
    }

    /// Drain `source` until it reports end of stream
    ///
    /// Returns the number of lines that updated the session state.
    pub fn pump<S, K>(&mut self, source: &mut S, sink: &mut K) -> Result<usize, S::Error>
    where
        S: LineSource + ?Sized,
        K: DispatchSink + ?Sized,
    {
        let mut decoded = 0;
        while let Some(event) = source.next_event()? {
            if self.handle_link_event(event, sink).is_update() {
                decoded += 1;
            }
        }
        Ok(decoded)
    }
}
