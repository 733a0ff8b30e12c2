#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Animation`**: A looping cycle of color keyframes, validated on construction
//! - **`Indicator`**: Plays one `Animation` at a time on an `RgbLed`
//! - **`InputChannel`**: Latches press and release edges of a `ButtonInput`
//! - **`ActivityScript`**: The presses one button must perform during a step
//! - **`StepSequence`**: The ordered table of steps, each binding two animations and three scripts
//! - **`Sequencer`**: The state machine tying it all together, advanced by `tick`
//! - **`ToyLibrary`**: The standard tables for the five-step toy
//! - **`RgbLed`** / **`ButtonInput`**: Traits to implement for your hardware
//! - **`TimeSource`**: Trait to implement for your timing system
//!
//! Colors are `Srgb<u8>` intensities. When implementing `RgbLed` for your
//! hardware, convert these to your device's native format and apply the
//! output polarity there.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

#[macro_use]
mod fmt;

pub mod animation;
pub mod colors;
pub mod hal;
pub mod indicator;
pub mod input;
pub mod library;
pub mod script;
pub mod sequencer;
pub mod steps;
pub mod time;
pub mod types;

pub use animation::{Animation, AnimationBuilder};
pub use hal::{ActiveLowButton, PwmRgbLed};
pub use indicator::{Indicator, RgbLed};
pub use input::{ButtonInput, InputChannel};
pub use library::ToyLibrary;
pub use script::{ActivityScript, ScriptBuilder};
pub use sequencer::{PAUSE_MS, Sequencer, SequencerConfig, TickOutcome, TimingPolicy, ToyState};
pub use steps::{StatusAnimations, Step, StepSequence};
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use types::{
    ActivityAction, ActivityEvent, CHANNEL_COUNT, Channel, INDICATOR_COUNT, Keyframe,
    MAX_ACTIVITY_EVENTS, MAX_KEYFRAMES, MAX_STEPS, TableError,
};
