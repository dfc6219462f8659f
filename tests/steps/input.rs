//! Step definitions for keyboard input

use crate::common::world::RoutelineWorld;
use cucumber::when;

#[when(expr = "I press {string}")]
fn when_press_key(world: &mut RoutelineWorld, key: String) {
    world.press_key(&key).expect("Failed to press key");
}

#[when(expr = "I press {string} {int} times")]
fn when_press_key_times(world: &mut RoutelineWorld, key: String, times: usize) {
    for _ in 0..times {
        world.press_key(&key).expect("Failed to press key");
    }
}

#[when(expr = "I type {string}")]
fn when_type_text(world: &mut RoutelineWorld, text: String) {
    world.type_text(&text).expect("Failed to type text");
}

#[when(expr = "I select the {string} route")]
fn when_select_route(world: &mut RoutelineWorld, label: String) {
    // Route selector cycles Posts -> Todos -> Users
    for _ in 0..3 {
        if world.state().route.label().eq_ignore_ascii_case(&label) {
            return;
        }
        world.press_key("Right").expect("Failed to press key");
    }
    panic!("Route '{label}' is not selectable");
}

#[when(expr = "I enter {string} as the number")]
fn when_enter_number(world: &mut RoutelineWorld, number: String) {
    world.press_key("Tab").expect("Failed to press key");
    world.type_text(&number).expect("Failed to type text");
    world.press_key("Escape").expect("Failed to press key");
}

#[when(expr = "the terminal is resized to {int} columns by {int} rows")]
fn when_terminal_resized(world: &mut RoutelineWorld, width: u16, height: u16) {
    world
        .send_event(crossterm::event::Event::Resize(width, height))
        .expect("Failed to resize");
}
