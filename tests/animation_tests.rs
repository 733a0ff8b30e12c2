//! Integration tests for Animation and ActivityScript tables

mod common;
use common::*;

use palette::Srgb;
use proptest::prelude::*;
use toy_sequencer::colors::{BLUE, GREEN, OFF, RED};
use toy_sequencer::{ActivityAction, ActivityScript, Animation, MAX_KEYFRAMES, TableError, ToyLibrary};

const WHITE: Srgb<u8> = Srgb::new(0xFF, 0xFF, 0xFF);

fn four_keyframes() -> Animation<TestDuration> {
    Animation::builder()
        .keyframe(ms(100), RED)
        .unwrap()
        .keyframe(ms(200), GREEN)
        .unwrap()
        .keyframe(ms(300), BLUE)
        .unwrap()
        .keyframe(ms(1000), WHITE)
        .unwrap()
        .build()
        .unwrap()
}

fn offsets(animation: &Animation<TestDuration>) -> Vec<u64> {
    (0..animation.keyframe_count())
        .map(|index| animation.get_keyframe(index).unwrap().offset.0)
        .collect()
}

#[test]
fn builder_rejects_empty_animation() {
    let result = Animation::<TestDuration>::builder().build();
    assert_eq!(result, Err(TableError::EmptyAnimation));
}

#[test]
fn builder_rejects_repeated_offset() {
    let result = Animation::builder()
        .keyframe(ms(100), RED)
        .unwrap()
        .keyframe(ms(100), GREEN)
        .unwrap()
        .build();
    assert_eq!(result, Err(TableError::NonIncreasingOffset { index: 1 }));
}

#[test]
fn builder_rejects_keyframes_beyond_capacity() {
    let mut builder = Animation::builder();
    for index in 0..MAX_KEYFRAMES as u64 {
        builder = builder.keyframe(ms((index + 1) * 10), RED).unwrap();
    }

    let result = builder.keyframe(ms(1000), RED);
    assert!(matches!(result, Err(TableError::CapacityExceeded)));
}

#[test]
fn first_keyframe_with_greater_offset_wins() {
    let animation = four_keyframes();

    assert_eq!(animation.color_at(ms(0)), Some(RED));
    assert_eq!(animation.color_at(ms(99)), Some(RED));
    assert_eq!(animation.color_at(ms(100)), Some(GREEN));
    assert_eq!(animation.color_at(ms(299)), Some(BLUE));
    assert_eq!(animation.color_at(ms(300)), Some(WHITE));
    assert_eq!(animation.color_at(ms(999)), Some(WHITE));
}

#[test]
fn elapsed_wraps_at_period() {
    let animation = four_keyframes();

    assert_eq!(animation.period(), ms(1000));
    assert_eq!(animation.color_at(ms(1000)), Some(RED));
    assert_eq!(animation.color_at(ms(2150)), Some(GREEN));
}

#[test]
fn solid_animation_has_one_keyframe() {
    let animation = Animation::solid(RED, ms(100)).unwrap();

    assert_eq!(animation.keyframe_count(), 1);
    assert_eq!(animation.color_at(ms(42)), Some(RED));
    assert_eq!(animation.color_at(ms(12_345)), Some(RED));
}

#[test]
fn then_appends_after_one_cycle() {
    let red = Animation::solid(RED, ms(100)).unwrap();
    let off = Animation::solid(OFF, ms(50)).unwrap();

    let combined = red.then(&off).unwrap();
    assert_eq!(offsets(&combined), vec![100, 150]);
    assert_eq!(combined.color_at(ms(120)), Some(OFF));
}

#[test]
fn then_reports_capacity_overflow() {
    let six = Animation::builder()
        .keyframe(ms(1), RED)
        .unwrap()
        .keyframe(ms(2), OFF)
        .unwrap()
        .keyframe(ms(3), RED)
        .unwrap()
        .keyframe(ms(4), OFF)
        .unwrap()
        .keyframe(ms(5), RED)
        .unwrap()
        .keyframe(ms(6), OFF)
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(six.then(&six), Err(TableError::CapacityExceeded));
}

#[test]
fn stretched_scales_offsets() {
    let stretched = four_keyframes().stretched(2).unwrap();
    assert_eq!(offsets(&stretched), vec![200, 400, 600, 2000]);
}

#[test]
fn stretched_by_zero_is_rejected() {
    assert_eq!(four_keyframes().stretched(0), Err(TableError::ZeroPeriod));
}

#[test]
fn standard_blink_holds_the_long_off() {
    let library = ToyLibrary::<TestDuration>::standard().unwrap();

    assert_eq!(offsets(&library.blink), vec![100, 200, 300, 800]);
    assert_eq!(library.blink.color_at(ms(50)), Some(BLUE));
    assert_eq!(library.blink.color_at(ms(150)), Some(OFF));
    assert_eq!(library.blink.color_at(ms(250)), Some(BLUE));
    assert_eq!(library.blink.color_at(ms(700)), Some(OFF));
}

#[test]
fn standard_status_patterns_match_their_timing() {
    let library = ToyLibrary::<TestDuration>::standard().unwrap();

    assert_eq!(offsets(&library.status.success), vec![100, 200, 300, 1000]);
    assert_eq!(library.status.success.color_at(ms(0)), Some(GREEN));
    assert_eq!(library.status.failure.color_at(ms(0)), Some(RED));
    assert_eq!(library.status.victory.period(), ms(1600));
}

#[test]
fn standard_sequence_has_five_steps() {
    let library = ToyLibrary::<TestDuration>::standard().unwrap();
    let steps = library.step_sequence().unwrap();

    assert_eq!(steps.len(), 5);

    let counts: Vec<[usize; 3]> = (0..steps.len())
        .map(|index| {
            let step = steps.get(index).unwrap();
            step.scripts.map(|script| script.event_count())
        })
        .collect();
    assert_eq!(
        counts,
        vec![[1, 0, 0], [0, 1, 0], [0, 0, 1], [1, 1, 1], [1, 1, 1]]
    );
}

#[test]
fn script_builder_rejects_decreasing_offsets() {
    let result = ActivityScript::builder()
        .press(ms(500))
        .unwrap()
        .press(ms(400))
        .unwrap()
        .build();
    assert_eq!(result, Err(TableError::DecreasingOffset { index: 1 }));
}

#[test]
fn script_gaps_are_measured_from_previous_event() {
    let script = ActivityScript::builder()
        .press(ms(0))
        .unwrap()
        .release(ms(200))
        .unwrap()
        .press(ms(500))
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(script.event_count(), 3);
    assert_eq!(script.get_event(1).unwrap().action, ActivityAction::Release);
    assert_eq!(script.gap_before(0), None);
    assert_eq!(script.gap_before(1), Some(ms(200)));
    assert_eq!(script.gap_before(2), Some(ms(300)));
}

#[test]
fn empty_script_expects_nothing() {
    let script = ActivityScript::<TestDuration>::empty();
    assert!(script.is_empty());
    assert_eq!(script.event_count(), 0);
}

proptest! {
    #[test]
    fn color_repeats_every_period(elapsed in 0u64..100_000, cycles in 0u64..1_000) {
        let animation = four_keyframes();
        let period = animation.period().0;

        prop_assert_eq!(
            animation.color_at(ms(elapsed)),
            animation.color_at(ms(elapsed + cycles * period))
        );
    }
}
