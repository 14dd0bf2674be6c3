//! Behavioural tests for the presentation-utils crate.
//!
//! Scenarios cover long-form date formatting and the numeric helpers applied
//! to the fixed sample sequence.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use chrono::NaiveDate;
use presentation_utils::{
    NumberStats, SAMPLE_NUMBERS, calculate_stats, doubled, format_date, sum,
};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

/// Scenario state shared between steps.
#[derive(Default, ScenarioState)]
struct World {
    date: Slot<NaiveDate>,
    formatted: Slot<String>,
    numbers: Slot<Vec<i64>>,
    doubled: Slot<Vec<i64>>,
    sum: Slot<i64>,
    summaries: Slot<(NumberStats, NumberStats)>,
}

impl World {
    fn numbers(&self) -> Vec<i64> {
        self.numbers.get().expect("numbers should be set")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

// ============================================================================
// Given steps
// ============================================================================

#[given("the calendar date {date}")]
fn the_calendar_date(world: &World, date: NaiveDate) {
    world.date.set(date);
}

#[given("the sample number sequence")]
fn the_sample_number_sequence(world: &World) {
    world.numbers.set(SAMPLE_NUMBERS.to_vec());
}

// ============================================================================
// When steps
// ============================================================================

#[when("the date is formatted")]
fn the_date_is_formatted(world: &World) {
    let date = world.date.get().expect("date should be set");
    world.formatted.set(format_date(date));
}

#[when("the sequence is doubled")]
fn the_sequence_is_doubled(world: &World) {
    world.doubled.set(doubled(&world.numbers()));
}

#[when("the sequence is summed")]
fn the_sequence_is_summed(world: &World) {
    world.sum.set(sum(&world.numbers()));
}

#[when("the sequence is summarised twice")]
fn the_sequence_is_summarised_twice(world: &World) {
    let numbers = world.numbers();
    world
        .summaries
        .set((calculate_stats(&numbers), calculate_stats(&numbers)));
}

// ============================================================================
// Then steps
// ============================================================================

#[then("the formatted date is {expected}")]
fn the_formatted_date_is(world: &World, expected: String) {
    let formatted = world.formatted.get().expect("formatted date should be set");
    assert_eq!(formatted, expected);
}

#[then("the doubled sequence is {expected}")]
fn the_doubled_sequence_is(world: &World, expected: String) {
    let values = world.doubled.get().expect("doubled values should be set");
    let rendered = values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(",");
    assert_eq!(rendered, expected);
}

#[then("the sum is {expected}")]
fn the_sum_is(world: &World, expected: i64) {
    assert_eq!(world.sum.get().expect("sum should be set"), expected);
}

#[then("both summaries are identical")]
fn both_summaries_are_identical(world: &World) {
    let (first, second) = world.summaries.get().expect("summaries should be set");
    assert_eq!(first, second);
    assert_eq!(first.total, 15);
    assert_eq!(first.count, 5);
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/presentation_utils.feature",
    name = "New year's day is formatted in long form"
)]
fn new_years_day_is_formatted_in_long_form(world: World) {
    drop(world);
}

#[scenario(
    path = "tests/features/presentation_utils.feature",
    name = "The sample sequence is doubled"
)]
fn the_sample_sequence_is_doubled(world: World) {
    drop(world);
}

#[scenario(
    path = "tests/features/presentation_utils.feature",
    name = "The sample sequence is summed"
)]
fn the_sample_sequence_is_summed(world: World) {
    drop(world);
}

#[scenario(
    path = "tests/features/presentation_utils.feature",
    name = "Summaries are stable across repeated calls"
)]
fn summaries_are_stable_across_repeated_calls(world: World) {
    drop(world);
}
