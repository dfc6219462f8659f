//! Step definitions for the mock API and application startup

use crate::common::world::RoutelineWorld;
use cucumber::given;
use std::time::Duration;
use tracing::info;

#[given(expr = "the API responds to {string} with {string}")]
async fn given_api_responds(world: &mut RoutelineWorld, path: String, body: String) {
    info!("Mocking GET {} -> {}", path, body);
    world.serve(&path, 200, &body, Duration::ZERO).await;
}

#[given(expr = "the API responds to {string} with status {int} and body {string}")]
async fn given_api_responds_with_status(
    world: &mut RoutelineWorld,
    path: String,
    status: u16,
    body: String,
) {
    info!("Mocking GET {} -> {} {}", path, status, body);
    world.serve(&path, status, &body, Duration::ZERO).await;
}

#[given(expr = "the API responds to {string} with {string} after {int} ms")]
async fn given_api_responds_slowly(
    world: &mut RoutelineWorld,
    path: String,
    body: String,
    delay_ms: u64,
) {
    info!("Mocking GET {} -> {} after {}ms", path, body, delay_ms);
    world
        .serve(&path, 200, &body, Duration::from_millis(delay_ms))
        .await;
}

#[given("the API is unreachable")]
fn given_api_unreachable(world: &mut RoutelineWorld) {
    world.use_unreachable_api();
}

#[given(expr = "the terminal is {int} columns by {int} rows")]
fn given_terminal_size(world: &mut RoutelineWorld, width: u16, height: u16) {
    world.terminal_size = (width, height);
}

#[given("the application is started")]
async fn given_application_started(world: &mut RoutelineWorld) {
    if world.base_url.is_empty() {
        // Scenarios without mocks still get a server so nothing leaves the machine
        world.mock_server().await;
    }
    world
        .start_application()
        .expect("Failed to start application");
}
