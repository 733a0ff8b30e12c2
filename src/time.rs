//! Time abstraction traits for platform-agnostic timing.
//!
//! Platform instants are expected to wrap at their integer width.
//! Implement [`TimeInstant::duration_since`] with wrapping subtraction so that
//! every duration the crate computes stays correct across a clock rollover.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    ///
    /// Must tolerate counter wraparound between `earlier` and `self`.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}
