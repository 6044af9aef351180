//! Events produced by dispatching one line

use lofi_protocol::{ControlUpdate, Dialect, FaceFrame, Icon};

/// Outcome of dispatching one line
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodedEvent {
    /// A Face-App frame replaced the stored frame
    FaceUpdate(FaceFrame),
    /// A Control line updated the command or analog value
    ControlUpdate(ControlUpdate),
    /// Nothing was decoded; the session state is unchanged
    NoOp,
}

impl DecodedEvent {
    /// Check if this event changed the session state
    pub fn is_update(&self) -> bool {
        !matches!(self, DecodedEvent::NoOp)
    }

    /// Dialect that produced this event
    pub fn dialect(&self) -> Option<Dialect> {
        match self {
            DecodedEvent::FaceUpdate(_) => Some(Dialect::FaceApp),
            DecodedEvent::ControlUpdate(_) => Some(Dialect::Control),
            DecodedEvent::NoOp => None,
        }
    }

    /// Icon the display should show, if any
    pub fn icon_hint(&self) -> Option<Icon> {
        match self {
            DecodedEvent::ControlUpdate(update) => update.icon_hint(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lofi_protocol::{decode_control, decode_face};

    #[test]
    fn test_noop() {
        assert!(!DecodedEvent::NoOp.is_update());
        assert_eq!(DecodedEvent::NoOp.dialect(), None);
        assert_eq!(DecodedEvent::NoOp.icon_hint(), None);
    }

    #[test]
    fn test_face_event() {
        let event = DecodedEvent::FaceUpdate(decode_face("1020304050607080912"));
        assert!(event.is_update());
        assert_eq!(event.dialect(), Some(Dialect::FaceApp));
        assert_eq!(event.icon_hint(), None);
    }

    #[test]
    fn test_control_event_icons() {
        let up = DecodedEvent::ControlUpdate(decode_control("up").unwrap());
        assert_eq!(up.dialect(), Some(Dialect::Control));
        assert_eq!(up.icon_hint(), Some(Icon::ArrowNorth));

        let analog = DecodedEvent::ControlUpdate(decode_control("x010").unwrap());
        assert_eq!(analog.icon_hint(), None);
    }
}
