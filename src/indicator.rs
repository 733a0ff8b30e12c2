//! RGB indicator driven by a looping animation.
//!
//! Provides [`Indicator`], which plays an [`Animation`] on an LED, and the
//! [`RgbLed`] trait for hardware abstraction.

use crate::animation::Animation;
use crate::time::TimeInstant;
use palette::Srgb;

/// Trait for abstracting RGB LED hardware.
///
/// Implement this for your LED hardware (GPIO, PWM, SPI, etc.) to allow
/// indicators to control it.
pub trait RgbLed {
    /// Sets the LED to the specified RGB color.
    ///
    /// Components are intensities in 0-255. Implementations convert these to
    /// their hardware's native format and own the output polarity (an
    /// active-low LED inverts here). Handle any hardware errors internally;
    /// this method cannot fail.
    fn set_color(&mut self, color: Srgb<u8>);
}

/// Plays one animation at a time on an RGB LED.
///
/// The animation is borrowed: many indicators and steps can point at the
/// same table entry.
pub struct Indicator<'a, I: TimeInstant, L: RgbLed> {
    led: L,
    animation: &'a Animation<I::Duration>,
    cycle_start: I,
    current_color: Option<Srgb<u8>>,
}

impl<'a, I: TimeInstant, L: RgbLed> Indicator<'a, I, L> {
    /// Creates an indicator playing `animation` from `now`.
    ///
    /// Nothing is written to the LED until the first [`render`](Self::render).
    pub fn new(led: L, animation: &'a Animation<I::Duration>, now: I) -> Self {
        Self {
            led,
            animation,
            cycle_start: now,
            current_color: None,
        }
    }

    /// Switches to `animation`, restarting its cycle at `now`.
    pub fn set_animation(&mut self, animation: &'a Animation<I::Duration>, now: I) {
        self.animation = animation;
        self.cycle_start = now;
    }

    /// Writes the color for `now` to the LED.
    ///
    /// The LED is written only when the color changes. If no keyframe
    /// matches, the last emitted color is held.
    pub fn render(&mut self, now: I) {
        let elapsed = now.duration_since(self.cycle_start);
        let Some(color) = self.animation.color_at(elapsed) else {
            return;
        };

        if self.current_color != Some(color) {
            self.led.set_color(color);
            self.current_color = Some(color);
        }
    }

    /// Returns the animation currently playing.
    pub fn animation(&self) -> &'a Animation<I::Duration> {
        self.animation
    }

    /// Returns the last color written to the LED, if any.
    pub fn current_color(&self) -> Option<Srgb<u8>> {
        self.current_color
    }

    /// Returns a reference to the underlying LED.
    pub fn led(&self) -> &L {
        &self.led
    }
}
