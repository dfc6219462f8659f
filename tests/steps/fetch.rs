//! Step definitions for the fetch lifecycle and resulting state

use crate::common::world::RoutelineWorld;
use cucumber::{then, when};
use serde_json::Value;
use std::time::Duration;

#[when("I fetch the data")]
fn when_fetch(world: &mut RoutelineWorld) {
    world.press_key("Enter").expect("Failed to press key");
}

#[when("the fetch finishes")]
async fn when_fetch_finishes(world: &mut RoutelineWorld) {
    let finished = world.wait_for_fetch().await.expect("Failed to wait for fetch");
    assert!(finished, "Fetch did not finish in time");
}

#[when(expr = "I wait {int} ms")]
async fn when_wait(world: &mut RoutelineWorld, millis: u64) {
    tokio::time::sleep(Duration::from_millis(millis)).await;
    world.tick().expect("Failed to tick");
}

#[then(expr = "loading should be {word}")]
fn then_loading(world: &mut RoutelineWorld, expected: String) {
    let expected: bool = expected.parse().expect("expected true or false");
    assert_eq!(world.state().is_loading(), expected);
}

#[then(expr = "the error should be {string}")]
fn then_error(world: &mut RoutelineWorld, expected: String) {
    assert_eq!(world.state().error(), expected);
}

#[then("the error should be empty")]
fn then_error_empty(world: &mut RoutelineWorld) {
    assert_eq!(world.state().error(), "");
}

#[then(expr = "the data should be {string}")]
fn then_data(world: &mut RoutelineWorld, expected: String) {
    let expected: Value = serde_json::from_str(&expected).expect("expected JSON in step");
    assert_eq!(world.state().data(), Some(&expected));
}

#[then("there should be no data")]
fn then_no_data(world: &mut RoutelineWorld) {
    assert_eq!(world.state().data(), None);
}

#[then(expr = "the route should be {string}")]
fn then_route(world: &mut RoutelineWorld, expected: String) {
    assert_eq!(world.state().route.label(), expected);
}

#[then(expr = "the number should be {string}")]
fn then_number(world: &mut RoutelineWorld, expected: String) {
    assert_eq!(world.state().number, expected);
}

#[then(expr = "the request generation should be {int}")]
fn then_generation(world: &mut RoutelineWorld, expected: u64) {
    assert_eq!(world.state().request, expected);
}

#[then(expr = "the mock server should have received {int} request(s)")]
async fn then_requests_received(world: &mut RoutelineWorld, expected: usize) {
    let received = world
        .mock_server()
        .await
        .received_requests()
        .await
        .unwrap_or_default();
    assert_eq!(received.len(), expected);
}
