//! Core types shared by the animation, script and step tables.

use crate::time::TimeDuration;
use palette::Srgb;

/// Maximum number of keyframes in one [`Animation`](crate::Animation).
pub const MAX_KEYFRAMES: usize = 10;

/// Maximum number of events in one [`ActivityScript`](crate::ActivityScript).
pub const MAX_ACTIVITY_EVENTS: usize = 10;

/// Maximum number of steps in one [`StepSequence`](crate::StepSequence).
pub const MAX_STEPS: usize = 10;

/// Number of RGB indicators on the toy.
pub const INDICATOR_COUNT: usize = 2;

/// Number of buttons on the toy.
pub const CHANNEL_COUNT: usize = 3;

/// A color held until `offset` within an animation cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe<D: TimeDuration> {
    /// End of this keyframe, measured from the cycle start.
    pub offset: D,

    /// Color shown up to `offset`.
    pub color: Srgb<u8>,
}

impl<D: TimeDuration> Keyframe<D> {
    /// Creates a new keyframe.
    #[inline]
    pub fn new(offset: D, color: Srgb<u8>) -> Self {
        Self { offset, color }
    }
}

/// What a button is expected (or observed) to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActivityAction {
    /// Nothing happened.
    #[default]
    None,

    /// Button went down.
    Press,

    /// Button came back up.
    Release,
}

/// One expected action in an activity script.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivityEvent<D: TimeDuration> {
    /// Time of the action, measured from the script start.
    pub offset: D,

    /// Expected action.
    pub action: ActivityAction,
}

impl<D: TimeDuration> ActivityEvent<D> {
    /// Creates a new activity event.
    #[inline]
    pub fn new(offset: D, action: ActivityAction) -> Self {
        Self { offset, action }
    }
}

/// The three buttons, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    /// Red button.
    Red,

    /// Green button.
    Green,

    /// Blue button.
    Blue,
}

impl Channel {
    /// All channels in evaluation order.
    pub const ALL: [Channel; CHANNEL_COUNT] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Position of this channel in per-channel arrays.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

/// Table construction errors.
///
/// Tables are fixed at build time, so any of these at startup is a
/// configuration bug rather than a runtime condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TableError {
    /// Animation has no keyframes.
    EmptyAnimation,

    /// Animation cycle would have zero length.
    ZeroPeriod,

    /// Keyframe offset is not strictly after the previous one.
    NonIncreasingOffset {
        /// Index of the offending keyframe.
        index: usize,
    },

    /// Activity event offset is before the previous one.
    DecreasingOffset {
        /// Index of the offending event.
        index: usize,
    },

    /// Table capacity exceeded.
    CapacityExceeded,
}

impl core::fmt::Display for TableError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TableError::EmptyAnimation => {
                write!(f, "animation must have at least one keyframe")
            }
            TableError::ZeroPeriod => {
                write!(f, "animation cycle period must be non-zero")
            }
            TableError::NonIncreasingOffset { index } => {
                write!(
                    f,
                    "keyframe {} offset must be strictly greater than the previous offset",
                    index
                )
            }
            TableError::DecreasingOffset { index } => {
                write!(
                    f,
                    "activity event {} offset must not be before the previous offset",
                    index
                )
            }
            TableError::CapacityExceeded => {
                write!(f, "table capacity exceeded")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TableError {}
