//! Step sequencing state machine.
//!
//! Provides [`Sequencer`], which owns both indicators and all three button
//! channels, and advances the toy through its [`StepSequence`] one
//! [`tick`](Sequencer::tick) at a time.

use crate::animation::Animation;
use crate::indicator::{Indicator, RgbLed};
use crate::input::{ButtonInput, InputChannel};
use crate::script::ActivityScript;
use crate::steps::{StatusAnimations, Step, StepSequence};
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::{ActivityAction, CHANNEL_COUNT, Channel, INDICATOR_COUNT};
use palette::Srgb;

/// Default display window after a success, failure or reset, in milliseconds.
pub const PAUSE_MS: u64 = 1000;

/// Where the sequencer is in the step table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ToyState {
    /// Restarting. Indicators go dark before step 0 is entered.
    Resetting,
    /// Waiting for the activity of the step at this index.
    Active(usize),
    /// Every step is complete.
    Victory,
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// Inside the display window after a transition. Only rendering happened.
    Paused,
    /// Step in progress, nothing decided yet.
    Waiting,
    /// The step at this index was completed.
    StepComplete {
        /// Index of the completed step.
        step: usize,
    },
    /// A press did not match the step at this index. Back to step 0.
    Failure {
        /// Index of the failed step.
        step: usize,
        /// Button that caused the mismatch.
        channel: Channel,
    },
    /// Indicators went dark; step 0 follows after the display window.
    Reset,
    /// Terminal state. Input is ignored.
    Victory,
}

/// How strictly press timing is checked against activity scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimingPolicy<D> {
    /// Any press advances the script, whenever it happens.
    #[default]
    Permissive,

    /// Each press after the first must follow the previous satisfied press by
    /// the scripted gap, give or take this tolerance. A late or early press
    /// counts as a mismatch.
    Within(D),
}

/// Runtime settings for a [`Sequencer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SequencerConfig<D: TimeDuration> {
    /// Display window after a transition before game logic resumes.
    pub pause: D,

    /// Press timing validation.
    pub timing: TimingPolicy<D>,
}

impl<D: TimeDuration> SequencerConfig<D> {
    /// Creates the default configuration: [`PAUSE_MS`] and permissive timing.
    pub fn new() -> Self {
        Self {
            pause: D::from_millis(PAUSE_MS),
            timing: TimingPolicy::Permissive,
        }
    }

    /// Sets the display window length.
    pub fn pause(mut self, pause: D) -> Self {
        self.pause = pause;
        self
    }

    /// Sets the press timing policy.
    pub fn timing(mut self, timing: TimingPolicy<D>) -> Self {
        self.timing = timing;
        self
    }
}

impl<D: TimeDuration> Default for SequencerConfig<D> {
    fn default() -> Self {
        Self::new()
    }
}

/// Drives two RGB indicators and three buttons through a step table.
///
/// Call [`tick`](Self::tick) from a single polling loop as often as
/// possible. Each tick renders the indicators, polls the buttons, and then,
/// outside of the display window, checks the observed presses against the
/// current step's scripts.
///
/// # Type Parameters
/// * `'a` - Lifetime of the step and animation tables
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `L` - LED implementation type
/// * `B` - Button implementation type
/// * `T` - Time source implementation type
pub struct Sequencer<'a, 't, I, L, B, T>
where
    I: TimeInstant,
    L: RgbLed,
    B: ButtonInput,
    T: TimeSource<I>,
{
    indicators: [Indicator<'a, I, L>; INDICATOR_COUNT],
    inputs: [InputChannel<I, B>; CHANNEL_COUNT],
    time_source: &'t T,
    steps: &'a StepSequence<'a, I::Duration>,
    status: &'a StatusAnimations<I::Duration>,
    config: SequencerConfig<I::Duration>,
    state: ToyState,
    progress: [usize; CHANNEL_COUNT],
    last_satisfied: [Option<I>; CHANNEL_COUNT],
    visuals_set: bool,
    pause_started: Option<I>,
}

impl<'a, 't, I, L, B, T> Sequencer<'a, 't, I, L, B, T>
where
    I: TimeInstant,
    L: RgbLed,
    B: ButtonInput,
    T: TimeSource<I>,
{
    /// Creates a sequencer at step 0 with the default configuration.
    pub fn new(
        leds: [L; INDICATOR_COUNT],
        buttons: [B; CHANNEL_COUNT],
        time_source: &'t T,
        steps: &'a StepSequence<'a, I::Duration>,
        status: &'a StatusAnimations<I::Duration>,
    ) -> Self {
        Self::with_config(
            leds,
            buttons,
            time_source,
            steps,
            status,
            SequencerConfig::default(),
        )
    }

    /// Creates a sequencer at step 0.
    ///
    /// Indicators start dark and the display window is armed, so step 0
    /// appears one pause after power-up.
    pub fn with_config(
        leds: [L; INDICATOR_COUNT],
        buttons: [B; CHANNEL_COUNT],
        time_source: &'t T,
        steps: &'a StepSequence<'a, I::Duration>,
        status: &'a StatusAnimations<I::Duration>,
        config: SequencerConfig<I::Duration>,
    ) -> Self {
        let now = time_source.now();

        Self {
            indicators: leds.map(|led| Indicator::new(led, &status.off, now)),
            inputs: buttons.map(InputChannel::new),
            time_source,
            steps,
            status,
            config,
            state: Self::entry_state(steps),
            progress: [0; CHANNEL_COUNT],
            last_satisfied: [None; CHANNEL_COUNT],
            visuals_set: false,
            pause_started: Some(now),
        }
    }

    /// Runs one iteration of the control loop.
    pub fn tick(&mut self) -> TickOutcome {
        let now = self.time_source.now();

        for indicator in &mut self.indicators {
            indicator.render(now);
        }

        // Edges are consumed here, once, even while paused.
        let mut observed = [ActivityAction::None; CHANNEL_COUNT];
        for (input, action) in self.inputs.iter_mut().zip(observed.iter_mut()) {
            input.poll(now);
            let pressed = input.press_event();
            let released = input.release_event();
            *action = if pressed {
                ActivityAction::Press
            } else if released {
                ActivityAction::Release
            } else {
                ActivityAction::None
            };
        }

        if let Some(started) = self.pause_started {
            if now.duration_since(started).as_millis() < self.config.pause.as_millis() {
                return TickOutcome::Paused;
            }
            self.pause_started = None;
        }

        if !self.visuals_set {
            self.visuals_set = true;
            let steps = self.steps;
            let status = self.status;
            match self.state {
                ToyState::Resetting => {
                    self.show(&status.off, now);
                    self.state = Self::entry_state(steps);
                    self.visuals_set = false;
                    self.pause_started = Some(now);
                    return TickOutcome::Reset;
                }
                ToyState::Victory => self.show(&status.victory, now),
                ToyState::Active(index) => {
                    if let Some(step) = steps.get(index) {
                        self.show_step(step, now);
                    }
                }
            }
        }

        let ToyState::Active(index) = self.state else {
            return TickOutcome::Victory;
        };
        let steps = self.steps;
        let Some(step) = steps.get(index) else {
            return TickOutcome::Victory;
        };

        for channel in Channel::ALL {
            let slot = channel.index();
            let script = step.script(channel);

            match observed[slot] {
                ActivityAction::Press => {
                    if self.progress[slot] >= script.event_count()
                        || !self.press_on_time(script, slot, now)
                    {
                        return self.fail(index, channel, now);
                    }
                    debug!("press on {}", channel);
                    self.progress[slot] += 1;
                    self.last_satisfied[slot] = Some(now);
                }
                ActivityAction::Release => {
                    debug!("release on {}", channel);
                }
                ActivityAction::None => {}
            }
        }

        let complete = Channel::ALL
            .iter()
            .all(|&channel| self.progress[channel.index()] >= step.script(channel).event_count());
        if complete {
            return self.succeed(index, now);
        }

        TickOutcome::Waiting
    }

    /// Restarts the game.
    ///
    /// Progress is dropped immediately. On the next tick the indicators go
    /// dark for one display window, then step 0 begins.
    pub fn reset(&mut self) {
        info!("reset");
        self.state = ToyState::Resetting;
        self.clear_progress();
        self.visuals_set = false;
        self.pause_started = None;
    }

    /// Returns the current state.
    pub fn state(&self) -> ToyState {
        self.state
    }

    /// Number of scripted events `channel` has satisfied in the current step.
    pub fn progress(&self, channel: Channel) -> usize {
        self.progress[channel.index()]
    }

    /// Returns true while the display window after a transition is open.
    pub fn is_paused(&self) -> bool {
        self.pause_started.is_some_and(|started| {
            let elapsed = self.time_source.now().duration_since(started);
            elapsed.as_millis() < self.config.pause.as_millis()
        })
    }

    /// Returns the indicator at `index` (0 or 1).
    pub fn indicator(&self, index: usize) -> Option<&Indicator<'a, I, L>> {
        self.indicators.get(index)
    }

    /// Returns the last color written to the indicator at `index`.
    pub fn current_color(&self, index: usize) -> Option<Srgb<u8>> {
        self.indicators
            .get(index)
            .and_then(|indicator| indicator.current_color())
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &SequencerConfig<I::Duration> {
        &self.config
    }

    fn entry_state(steps: &StepSequence<'_, I::Duration>) -> ToyState {
        if steps.is_empty() {
            ToyState::Victory
        } else {
            ToyState::Active(0)
        }
    }

    fn press_on_time(&self, script: &ActivityScript<I::Duration>, slot: usize, now: I) -> bool {
        let TimingPolicy::Within(tolerance) = self.config.timing else {
            return true;
        };
        let Some(gap) = script.gap_before(self.progress[slot]) else {
            return true;
        };
        let Some(previous) = self.last_satisfied[slot] else {
            return true;
        };

        let actual = now.duration_since(previous).as_millis();
        actual.abs_diff(gap.as_millis()) <= tolerance.as_millis()
    }

    fn fail(&mut self, step: usize, channel: Channel, now: I) -> TickOutcome {
        warn!("failure at step {} on {}", step, channel);
        let status = self.status;
        self.state = Self::entry_state(self.steps);
        self.clear_progress();
        self.visuals_set = false;
        self.show(&status.failure, now);
        self.pause_started = Some(now);
        TickOutcome::Failure { step, channel }
    }

    fn succeed(&mut self, step: usize, now: I) -> TickOutcome {
        info!("success at step {}", step);
        let status = self.status;
        let next = step + 1;
        self.state = if next >= self.steps.len() {
            ToyState::Victory
        } else {
            ToyState::Active(next)
        };
        self.clear_progress();
        self.visuals_set = false;
        self.show(&status.success, now);
        self.pause_started = Some(now);
        TickOutcome::StepComplete { step }
    }

    fn show(&mut self, animation: &'a Animation<I::Duration>, now: I) {
        for indicator in &mut self.indicators {
            indicator.set_animation(animation, now);
        }
    }

    fn show_step(&mut self, step: &Step<'a, I::Duration>, now: I) {
        for (indicator, animation) in self.indicators.iter_mut().zip(step.animations) {
            indicator.set_animation(animation, now);
        }
    }

    fn clear_progress(&mut self) {
        self.progress = [0; CHANNEL_COUNT];
        self.last_satisfied = [None; CHANNEL_COUNT];
    }
}
