//! The standard animations, scripts and five-step challenge.

use crate::animation::Animation;
use crate::colors;
use crate::script::ActivityScript;
use crate::steps::{StatusAnimations, Step, StepSequence};
use crate::time::TimeDuration;
use crate::types::TableError;
use palette::Srgb;

/// Owns every table entry of the standard toy.
///
/// Build it once at startup and borrow the step sequence and status
/// animations from it for the lifetime of the program.
#[derive(Debug, Clone)]
pub struct ToyLibrary<D: TimeDuration> {
    /// Solid red.
    pub red: Animation<D>,
    /// Solid green.
    pub green: Animation<D>,
    /// Solid blue.
    pub blue: Animation<D>,
    /// Blue, off, blue, long off.
    pub blink: Animation<D>,
    /// Off, success, failure and victory patterns.
    pub status: StatusAnimations<D>,
    /// No activity expected.
    pub none: ActivityScript<D>,
    /// One press expected.
    pub press: ActivityScript<D>,
}

impl<D: TimeDuration> ToyLibrary<D> {
    /// Builds the standard tables.
    pub fn standard() -> Result<Self, TableError> {
        let off = solid(colors::OFF)?;
        let blue = solid(colors::BLUE)?;
        let blink = blue.then(&off)?.then(&blue)?.then(&off.stretched(5)?)?;

        Ok(Self {
            red: solid(colors::RED)?,
            green: solid(colors::GREEN)?,
            blink,
            status: StatusAnimations {
                success: double_blink(colors::GREEN)?,
                failure: double_blink(colors::RED)?,
                victory: Animation::builder()
                    .keyframe(ms(100), colors::MAGENTA)?
                    .keyframe(ms(200), colors::OFF)?
                    .keyframe(ms(300), colors::MAGENTA)?
                    .keyframe(ms(400), colors::OFF)?
                    .keyframe(ms(500), colors::MAGENTA)?
                    .keyframe(ms(1600), colors::OFF)?
                    .build()?,
                off,
            },
            blue,
            none: ActivityScript::empty(),
            press: ActivityScript::single_press(),
        })
    }

    /// The standard five-step challenge.
    ///
    /// One press each on red, green and blue in turn, then all three during
    /// the blink, then all three once more during the victory preview.
    pub fn step_sequence(&self) -> Result<StepSequence<'_, D>, TableError> {
        let off = &self.status.off;
        let victory = &self.status.victory;
        let (none, press) = (&self.none, &self.press);

        StepSequence::new()
            .with_step(Step::new([&self.red, off], [press, none, none]))?
            .with_step(Step::new([&self.green, off], [none, press, none]))?
            .with_step(Step::new([&self.blue, off], [none, none, press]))?
            .with_step(Step::new([&self.blink, &self.blink], [press, press, press]))?
            .with_step(Step::new([victory, victory], [press, press, press]))
    }
}

fn ms<D: TimeDuration>(millis: u64) -> D {
    D::from_millis(millis)
}

fn solid<D: TimeDuration>(color: Srgb<u8>) -> Result<Animation<D>, TableError> {
    Animation::solid(color, ms(100))
}

fn double_blink<D: TimeDuration>(color: Srgb<u8>) -> Result<Animation<D>, TableError> {
    Animation::builder()
        .keyframe(ms(100), color)?
        .keyframe(ms(200), colors::OFF)?
        .keyframe(ms(300), color)?
        .keyframe(ms(1000), colors::OFF)?
        .build()
}
