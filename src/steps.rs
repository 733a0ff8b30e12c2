//! The ordered table of challenge steps.

use crate::animation::Animation;
use crate::script::ActivityScript;
use crate::time::TimeDuration;
use crate::types::{CHANNEL_COUNT, Channel, INDICATOR_COUNT, MAX_STEPS, TableError};
use heapless::Vec;

/// One challenge: what the indicators show and what each button must do.
#[derive(Debug, Clone, Copy)]
pub struct Step<'a, D: TimeDuration> {
    /// Animation per indicator.
    pub animations: [&'a Animation<D>; INDICATOR_COUNT],

    /// Expected activity per button, indexed by [`Channel::index`].
    pub scripts: [&'a ActivityScript<D>; CHANNEL_COUNT],
}

impl<'a, D: TimeDuration> Step<'a, D> {
    /// Creates a new step.
    pub fn new(
        animations: [&'a Animation<D>; INDICATOR_COUNT],
        scripts: [&'a ActivityScript<D>; CHANNEL_COUNT],
    ) -> Self {
        Self {
            animations,
            scripts,
        }
    }

    /// Returns the script for `channel`.
    #[inline]
    pub fn script(&self, channel: Channel) -> &'a ActivityScript<D> {
        self.scripts[channel.index()]
    }
}

/// Animations shown between and around the steps.
#[derive(Debug, Clone)]
pub struct StatusAnimations<D: TimeDuration> {
    /// Shown while resetting.
    pub off: Animation<D>,

    /// Shown during the pause after a completed step.
    pub success: Animation<D>,

    /// Shown during the pause after a mismatch.
    pub failure: Animation<D>,

    /// Shown once every step is complete.
    pub victory: Animation<D>,
}

/// Fixed-capacity, ordered table of steps.
///
/// Index 0 is the entry step. Reaching index `len()` means victory.
#[derive(Debug, Clone)]
pub struct StepSequence<'a, D: TimeDuration> {
    steps: Vec<Step<'a, D>, MAX_STEPS>,
}

impl<'a, D: TimeDuration> StepSequence<'a, D> {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Appends a step.
    ///
    /// # Errors
    /// * `CapacityExceeded` - More than [`MAX_STEPS`] steps
    pub fn push(&mut self, step: Step<'a, D>) -> Result<(), TableError> {
        self.steps
            .push(step)
            .map_err(|_| TableError::CapacityExceeded)
    }

    /// Appends a step, builder style.
    pub fn with_step(mut self, step: Step<'a, D>) -> Result<Self, TableError> {
        self.push(step)?;
        Ok(self)
    }

    /// Number of steps before victory.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if the sequence has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns the step at the given index.
    pub fn get(&self, index: usize) -> Option<&Step<'a, D>> {
        self.steps.get(index)
    }
}

impl<D: TimeDuration> Default for StepSequence<'_, D> {
    fn default() -> Self {
        Self::new()
    }
}
