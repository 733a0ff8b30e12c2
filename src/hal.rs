//! `embedded-hal` adapters for the toy's LEDs and buttons.

use crate::indicator::RgbLed;
use crate::input::ButtonInput;
use embedded_hal::digital::InputPin;
use embedded_hal::pwm::SetDutyCycle;
use palette::Srgb;

/// RGB LED on three PWM channels.
///
/// With `active_low` set (common anode wiring) the duty cycle is inverted, so
/// intensity 255 drives the pin fully low.
pub struct PwmRgbLed<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    red: R,
    green: G,
    blue: B,
    active_low: bool,
}

impl<R, G, B> PwmRgbLed<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    /// Creates a new RGB LED controller.
    ///
    /// # Arguments
    /// * `red` - PWM channel for the red die
    /// * `green` - PWM channel for the green die
    /// * `blue` - PWM channel for the blue die
    /// * `active_low` - true for common anode LEDs (inverted logic)
    pub fn new(red: R, green: G, blue: B, active_low: bool) -> Self {
        Self {
            red,
            green,
            blue,
            active_low,
        }
    }

    fn level(&self, intensity: u8) -> u16 {
        if self.active_low {
            u16::from(u8::MAX - intensity)
        } else {
            u16::from(intensity)
        }
    }

    /// Releases the PWM channels.
    pub fn release(self) -> (R, G, B) {
        (self.red, self.green, self.blue)
    }
}

impl<R, G, B> RgbLed for PwmRgbLed<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    fn set_color(&mut self, color: Srgb<u8>) {
        let max = u16::from(u8::MAX);
        let (red, green, blue) = (
            self.level(color.red),
            self.level(color.green),
            self.level(color.blue),
        );

        // A failed write leaves the previous duty; the next color change retries.
        let _ = self.red.set_duty_cycle_fraction(red, max);
        let _ = self.green.set_duty_cycle_fraction(green, max);
        let _ = self.blue.set_duty_cycle_fraction(blue, max);
    }
}

/// Push button wired to ground with a pull-up, active when the pin reads low.
pub struct ActiveLowButton<P: InputPin> {
    pin: P,
}

impl<P: InputPin> ActiveLowButton<P> {
    /// Wraps an input pin already configured with its pull-up.
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Releases the input pin.
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: InputPin> ButtonInput for ActiveLowButton<P> {
    fn is_active(&mut self) -> bool {
        self.pin.is_low().unwrap_or(false)
    }
}
