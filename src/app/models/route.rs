//! # Route Model
//!
//! The resource collections exposed by the placeholder API.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Resource collection selected in the route selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    #[default]
    Posts,
    Todos,
    Users,
}

impl Route {
    /// All routes in selector order
    pub fn all() -> [Route; 3] {
        [Route::Posts, Route::Todos, Route::Users]
    }

    /// Path segment used when building the request URL
    pub fn as_path(&self) -> &'static str {
        match self {
            Route::Posts => "posts",
            Route::Todos => "todos",
            Route::Users => "users",
        }
    }

    /// Human readable label shown in the selector
    pub fn label(&self) -> &'static str {
        match self {
            Route::Posts => "Posts",
            Route::Todos => "Todos",
            Route::Users => "Users",
        }
    }

    /// Next option in the selector, wrapping around
    pub fn next(&self) -> Route {
        match self {
            Route::Posts => Route::Todos,
            Route::Todos => Route::Users,
            Route::Users => Route::Posts,
        }
    }

    /// Previous option in the selector, wrapping around
    pub fn previous(&self) -> Route {
        match self {
            Route::Posts => Route::Users,
            Route::Todos => Route::Posts,
            Route::Users => Route::Todos,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}

impl FromStr for Route {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::all()
            .into_iter()
            .find(|route| route.as_path().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                anyhow::anyhow!("Unknown route '{s}'. Expected one of: posts, todos, users")
            })
    }
}
