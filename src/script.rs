//! Expected button activity for one channel during one step.

use crate::time::TimeDuration;
use crate::types::{ActivityAction, ActivityEvent, MAX_ACTIVITY_EVENTS, TableError};
use heapless::Vec;

/// Ordered list of actions a single button must perform during a step.
///
/// An empty script means the button must stay untouched; it is satisfied
/// from the moment the step starts.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityScript<D: TimeDuration> {
    events: Vec<ActivityEvent<D>, MAX_ACTIVITY_EVENTS>,
}

impl<D: TimeDuration> ActivityScript<D> {
    /// Creates a new script builder.
    pub fn builder() -> ScriptBuilder<D> {
        ScriptBuilder::new()
    }

    /// Script expecting no activity.
    pub fn empty() -> Self {
        Self { events: Vec::new() }
    }

    /// Script expecting exactly one press, at any time.
    pub fn single_press() -> Self {
        let mut events = Vec::new();
        // Capacity is at least one.
        let _ = events.push(ActivityEvent::new(D::ZERO, ActivityAction::Press));
        Self { events }
    }

    /// Number of events needed to satisfy this script.
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Returns true if no activity is expected.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns the event at the given index.
    pub fn get_event(&self, index: usize) -> Option<&ActivityEvent<D>> {
        self.events.get(index)
    }

    /// Expected gap between event `index` and the event before it.
    ///
    /// `None` for the first event, which has no predecessor to measure from.
    pub fn gap_before(&self, index: usize) -> Option<D> {
        if index == 0 {
            return None;
        }
        let previous = self.events.get(index - 1)?;
        let current = self.events.get(index)?;
        Some(D::from_millis(
            current
                .offset
                .as_millis()
                .saturating_sub(previous.offset.as_millis()),
        ))
    }
}

/// Builder for constructing validated activity scripts.
#[derive(Debug)]
pub struct ScriptBuilder<D: TimeDuration> {
    events: Vec<ActivityEvent<D>, MAX_ACTIVITY_EVENTS>,
}

impl<D: TimeDuration> ScriptBuilder<D> {
    /// Creates a new empty script builder.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Adds an expected action at `offset` from the script start.
    ///
    /// # Errors
    /// * `CapacityExceeded` - More than [`MAX_ACTIVITY_EVENTS`] events
    pub fn event(mut self, offset: D, action: ActivityAction) -> Result<Self, TableError> {
        self.events
            .push(ActivityEvent::new(offset, action))
            .map_err(|_| TableError::CapacityExceeded)?;
        Ok(self)
    }

    /// Adds an expected press at `offset`.
    pub fn press(self, offset: D) -> Result<Self, TableError> {
        self.event(offset, ActivityAction::Press)
    }

    /// Adds an expected release at `offset`.
    pub fn release(self, offset: D) -> Result<Self, TableError> {
        self.event(offset, ActivityAction::Release)
    }

    /// Builds and validates the script.
    ///
    /// # Errors
    /// * `DecreasingOffset` - An event is scheduled before its predecessor
    pub fn build(self) -> Result<ActivityScript<D>, TableError> {
        for (index, pair) in self.events.windows(2).enumerate() {
            if pair[1].offset.as_millis() < pair[0].offset.as_millis() {
                return Err(TableError::DecreasingOffset { index: index + 1 });
            }
        }

        Ok(ActivityScript {
            events: self.events,
        })
    }
}

impl<D: TimeDuration> Default for ScriptBuilder<D> {
    fn default() -> Self {
        Self::new()
    }
}
