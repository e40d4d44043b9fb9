use std::rc::Rc;

use log::debug;
use yew::Reducible;

use crate::gallery::GalleryEntry;

/// What closed the preview. All three paths end in the same state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseTrigger {
    CloseButton,
    Backdrop,
    EscapeKey,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OverlayAction {
    Open(&'static GalleryEntry),
    Close(CloseTrigger),
}

/// The lightbox: closed, or showing exactly one entry.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum OverlayState {
    #[default]
    Closed,
    Open(&'static GalleryEntry),
}

impl OverlayState {
    pub fn is_open(&self) -> bool {
        matches!(self, OverlayState::Open(_))
    }

    pub fn entry(&self) -> Option<&'static GalleryEntry> {
        match *self {
            OverlayState::Open(entry) => Some(entry),
            OverlayState::Closed => None,
        }
    }

    /// Opening replaces whatever is shown; closing from any trigger resets.
    pub fn apply(self, action: OverlayAction) -> OverlayState {
        match action {
            OverlayAction::Open(entry) => OverlayState::Open(entry),
            OverlayAction::Close(_) => OverlayState::Closed,
        }
    }
}

impl Reducible for OverlayState {
    type Action = OverlayAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).apply(action);
        if next == *self {
            return self;
        }
        match (&next, action) {
            (OverlayState::Open(entry), _) => debug!("Opening preview for {}", entry.title),
            (OverlayState::Closed, OverlayAction::Close(trigger)) => {
                debug!("Closing preview ({:?})", trigger)
            }
            _ => {}
        }
        Rc::new(next)
    }
}
