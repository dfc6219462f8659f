//! # Route Selector Commands

use super::{Command, CommandContext, CommandEvent};
use crate::app::events::Focus;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

fn on_route_selector(context: &CommandContext, event: &KeyEvent) -> bool {
    context.state.focus == Focus::Route && event.modifiers.is_empty()
}

/// Select the next route (Right or `l` on the selector)
pub struct NextRouteCommand;

impl Command for NextRouteCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        matches!(event.code, KeyCode::Right | KeyCode::Char('l'))
            && on_route_selector(context, event)
    }

    fn execute(&self, _event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::RouteSelectRequested {
            route: context.state.route.next(),
        }])
    }

    fn name(&self) -> &'static str {
        "NextRoute"
    }
}

/// Select the previous route (Left or `h` on the selector)
pub struct PreviousRouteCommand;

impl Command for PreviousRouteCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        matches!(event.code, KeyCode::Left | KeyCode::Char('h'))
            && on_route_selector(context, event)
    }

    fn execute(&self, _event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::RouteSelectRequested {
            route: context.state.route.previous(),
        }])
    }

    fn name(&self) -> &'static str {
        "PreviousRoute"
    }
}
