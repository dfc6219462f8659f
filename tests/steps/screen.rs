//! Step definitions for terminal contents

use crate::common::world::RoutelineWorld;
use cucumber::then;

#[then(expr = "the screen should show {string}")]
fn then_screen_shows(world: &mut RoutelineWorld, expected: String) {
    let text = world.screen_text();
    assert!(
        text.contains(&expected),
        "Expected '{expected}' on screen:\n{text}"
    );
}

#[then(expr = "the screen should not show {string}")]
fn then_screen_hides(world: &mut RoutelineWorld, unexpected: String) {
    let text = world.screen_text();
    assert!(
        !text.contains(&unexpected),
        "Did not expect '{unexpected}' on screen:\n{text}"
    );
}

#[then(expr = "row {int} should read {string}")]
fn then_row_reads(world: &mut RoutelineWorld, row: usize, expected: String) {
    let text = world.screen_text();
    let actual = text.lines().nth(row).unwrap_or_default();
    assert_eq!(actual, expected, "Screen:\n{text}");
}

#[then(expr = "row {int} should start with {string}")]
fn then_row_starts_with(world: &mut RoutelineWorld, row: usize, expected: String) {
    let text = world.screen_text();
    let actual = text.lines().nth(row).unwrap_or_default();
    assert!(
        actual.starts_with(&expected),
        "Expected row {row} to start with '{expected}', got '{actual}'\nScreen:\n{text}"
    );
}

#[then("the application should quit")]
fn then_application_quits(world: &mut RoutelineWorld) {
    assert!(world.controller().should_quit());
}
