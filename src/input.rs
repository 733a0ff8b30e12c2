//! Button edge detection.

use crate::time::TimeInstant;

/// Trait for abstracting a button input.
///
/// The rest state is inactive. Handle read errors internally; an unreadable
/// button should report inactive.
pub trait ButtonInput {
    /// Returns true while the button is held down.
    fn is_active(&mut self) -> bool;
}

/// Latches press and release edges of a button between queries.
///
/// One pending flag per edge kind: if the button goes down and up again
/// between two polls, only one of those edges is seen.
pub struct InputChannel<I: TimeInstant, B: ButtonInput> {
    button: B,
    held: bool,
    last_press: Option<I>,
    last_release: Option<I>,
    pending_press: bool,
    pending_release: bool,
}

impl<I: TimeInstant, B: ButtonInput> InputChannel<I, B> {
    /// Creates a channel that considers the button released.
    pub fn new(button: B) -> Self {
        Self {
            button,
            held: false,
            last_press: None,
            last_release: None,
            pending_press: false,
            pending_release: false,
        }
    }

    /// Samples the button and latches an edge if its level changed.
    pub fn poll(&mut self, now: I) {
        let active = self.button.is_active();

        if active && !self.held {
            self.held = true;
            self.last_press = Some(now);
            self.pending_press = true;
        } else if !active && self.held {
            self.held = false;
            self.last_release = Some(now);
            self.pending_release = true;
        }
    }

    /// Consumes a pending press edge.
    pub fn press_event(&mut self) -> bool {
        core::mem::take(&mut self.pending_press)
    }

    /// Consumes a pending release edge.
    pub fn release_event(&mut self) -> bool {
        core::mem::take(&mut self.pending_release)
    }

    /// Returns true while the button is considered down.
    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Time of the most recent press edge.
    pub fn last_press(&self) -> Option<I> {
        self.last_press
    }

    /// Time of the most recent release edge.
    pub fn last_release(&self) -> Option<I> {
        self.last_release
    }
}
