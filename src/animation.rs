//! Looping keyframe animations.

use crate::time::TimeDuration;
use crate::types::{Keyframe, MAX_KEYFRAMES, TableError};
use heapless::Vec;
use palette::Srgb;

/// A repeating cycle of color keyframes.
///
/// Each keyframe holds its color from the previous keyframe's offset (or the
/// cycle start) up to its own offset. The last offset is the cycle period.
/// Animations are validated on construction and immutable afterwards, so
/// indicators and steps share them by reference.
///
/// # Type Parameters
/// * `D` - The duration type (e.g., `embassy_time::Duration`)
#[derive(Debug, Clone, PartialEq)]
pub struct Animation<D: TimeDuration> {
    keyframes: Vec<Keyframe<D>, MAX_KEYFRAMES>,
}

impl<D: TimeDuration> Animation<D> {
    /// Creates a new animation builder.
    pub fn builder() -> AnimationBuilder<D> {
        AnimationBuilder::new()
    }

    /// Creates a single-color animation with the given period.
    pub fn solid(color: Srgb<u8>, period: D) -> Result<Self, TableError> {
        Self::builder().keyframe(period, color)?.build()
    }

    fn from_keyframes(keyframes: Vec<Keyframe<D>, MAX_KEYFRAMES>) -> Result<Self, TableError> {
        if keyframes.is_empty() {
            return Err(TableError::EmptyAnimation);
        }

        let mut previous = 0;
        for (index, keyframe) in keyframes.iter().enumerate() {
            let offset = keyframe.offset.as_millis();
            if offset <= previous {
                return Err(TableError::NonIncreasingOffset { index });
            }
            previous = offset;
        }

        Ok(Self { keyframes })
    }

    /// Returns the keyframe active at `elapsed` since the cycle started.
    ///
    /// `elapsed` is reduced modulo the period first, then the first keyframe
    /// whose offset is strictly greater wins. `None` only if no keyframe
    /// qualifies, which a validated animation never produces.
    pub fn keyframe_at(&self, elapsed: D) -> Option<&Keyframe<D>> {
        let period = self.period().as_millis();
        if period == 0 {
            return None;
        }

        let time_in_cycle = elapsed.as_millis() % period;
        self.keyframes
            .iter()
            .find(|keyframe| time_in_cycle < keyframe.offset.as_millis())
    }

    /// Returns the color active at `elapsed` since the cycle started.
    pub fn color_at(&self, elapsed: D) -> Option<Srgb<u8>> {
        self.keyframe_at(elapsed).map(|keyframe| keyframe.color)
    }

    /// Length of one cycle (the last keyframe's offset).
    pub fn period(&self) -> D {
        self.keyframes
            .last()
            .map(|keyframe| keyframe.offset)
            .unwrap_or(D::ZERO)
    }

    /// Appends `other` after one full cycle of `self`.
    ///
    /// # Errors
    /// * `CapacityExceeded` - The combined keyframes do not fit
    pub fn then(&self, other: &Self) -> Result<Self, TableError> {
        let shift = self.period().as_millis();
        let mut keyframes = self.keyframes.clone();
        for keyframe in &other.keyframes {
            let offset = D::from_millis(shift + keyframe.offset.as_millis());
            keyframes
                .push(Keyframe::new(offset, keyframe.color))
                .map_err(|_| TableError::CapacityExceeded)?;
        }
        Self::from_keyframes(keyframes)
    }

    /// Returns a copy with every offset multiplied by `factor`.
    ///
    /// # Errors
    /// * `ZeroPeriod` - `factor` is zero
    pub fn stretched(&self, factor: u32) -> Result<Self, TableError> {
        if factor == 0 {
            return Err(TableError::ZeroPeriod);
        }

        let mut keyframes = Vec::new();
        for keyframe in &self.keyframes {
            let offset = D::from_millis(keyframe.offset.as_millis().saturating_mul(factor as u64));
            keyframes
                .push(Keyframe::new(offset, keyframe.color))
                .map_err(|_| TableError::CapacityExceeded)?;
        }
        Self::from_keyframes(keyframes)
    }

    /// Returns the number of keyframes.
    pub fn keyframe_count(&self) -> usize {
        self.keyframes.len()
    }

    /// Returns the keyframe at the given index.
    pub fn get_keyframe(&self, index: usize) -> Option<&Keyframe<D>> {
        self.keyframes.get(index)
    }
}

/// Builder for constructing validated animations.
#[derive(Debug)]
pub struct AnimationBuilder<D: TimeDuration> {
    keyframes: Vec<Keyframe<D>, MAX_KEYFRAMES>,
}

impl<D: TimeDuration> AnimationBuilder<D> {
    /// Creates a new empty animation builder.
    pub fn new() -> Self {
        Self {
            keyframes: Vec::new(),
        }
    }

    /// Adds a keyframe holding `color` until `offset`.
    ///
    /// # Errors
    /// * `CapacityExceeded` - More than [`MAX_KEYFRAMES`] keyframes
    pub fn keyframe(mut self, offset: D, color: Srgb<u8>) -> Result<Self, TableError> {
        self.keyframes
            .push(Keyframe::new(offset, color))
            .map_err(|_| TableError::CapacityExceeded)?;
        Ok(self)
    }

    /// Builds and validates the animation.
    ///
    /// # Errors
    /// * `EmptyAnimation` - No keyframes were added
    /// * `NonIncreasingOffset` - An offset is zero or not after its predecessor
    pub fn build(self) -> Result<Animation<D>, TableError> {
        Animation::from_keyframes(self.keyframes)
    }
}

impl<D: TimeDuration> Default for AnimationBuilder<D> {
    fn default() -> Self {
        Self::new()
    }
}
