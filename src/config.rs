//! Configuration constants and profile loading for routeline
//!
//! Defaults can be kept in an INI profile file, one section per profile:
//!
//! ```ini
//! [default]
//! base_url = https://jsonplaceholder.typicode.com
//! route = todos
//! number = 3
//! ```
//!
//! Command line flags win over the profile, the profile wins over built-in
//! defaults.

use crate::app::models::Route;
use crate::app::services::DEFAULT_BASE_URL;
use crate::cmd_args::CommandLineArgs;
use ini::Ini;
use std::path::PathBuf;
use std::str::FromStr;

/// Default profile file path for routeline
pub const DEFAULT_PROFILE_PATH: &str = "~/.routeline/profile";

/// Environment variable name for overriding the profile path
pub const PROFILE_PATH_ENV_VAR: &str = "ROUTELINE_PROFILE_PATH";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot expand path '{path}': {message}")]
    Expand { path: String, message: String },
    #[error("cannot read profile file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: ini::Error,
    },
    #[error("profile '{profile}' has an invalid route '{value}'")]
    InvalidRoute { profile: String, value: String },
}

/// Get the profile file path, checking environment variable first, then falling back to default
pub fn get_profile_path() -> String {
    std::env::var_os(PROFILE_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_PROFILE_PATH.to_string())
}

/// Expand `~` and environment variables in a user supplied path
pub fn expand_path(path: &str) -> Result<PathBuf, ConfigError> {
    shellexpand::full(path)
        .map(|expanded| PathBuf::from(expanded.as_ref()))
        .map_err(|e| ConfigError::Expand {
            path: path.to_string(),
            message: e.to_string(),
        })
}

/// Values one profile section provides; every key is optional
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Profile {
    pub base_url: Option<String>,
    pub route: Option<Route>,
    pub number: Option<String>,
}

/// Load a profile section from an INI file
///
/// A missing file or section yields an empty profile.
pub fn load_profile(profile_name: &str, profile_path: &str) -> Result<Profile, ConfigError> {
    let path = expand_path(profile_path)?;
    if !path.exists() {
        tracing::debug!("Profile file '{}' not found, using defaults", path.display());
        return Ok(Profile::default());
    }

    let ini = Ini::load_from_file(&path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let Some(section) = ini.section(Some(profile_name)) else {
        tracing::debug!(
            "Profile '{}' not found in '{}', using defaults",
            profile_name,
            path.display()
        );
        return Ok(Profile::default());
    };

    let route = section
        .get("route")
        .map(|value| {
            Route::from_str(value).map_err(|_| ConfigError::InvalidRoute {
                profile: profile_name.to_string(),
                value: value.to_string(),
            })
        })
        .transpose()?;

    let profile = Profile {
        base_url: section.get("base_url").map(str::to_string),
        route,
        number: section.get("number").map(str::to_string),
    };
    tracing::debug!("Loaded profile '{}': {:?}", profile_name, profile);
    Ok(profile)
}

/// Effective startup settings after layering flags over the profile
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub base_url: String,
    pub route: Route,
    pub number: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            route: Route::default(),
            number: String::new(),
        }
    }
}

impl Settings {
    pub fn resolve(cmd_args: &CommandLineArgs, profile: &Profile) -> Self {
        let defaults = Settings::default();
        Self {
            base_url: cmd_args
                .base_url()
                .map(str::to_string)
                .or_else(|| profile.base_url.clone())
                .unwrap_or(defaults.base_url),
            route: cmd_args.route().or(profile.route).unwrap_or(defaults.route),
            number: cmd_args
                .number()
                .map(str::to_string)
                .or_else(|| profile.number.clone())
                .unwrap_or(defaults.number),
        }
    }

    /// Read the profile named on the command line and merge it with the flags
    pub fn load(cmd_args: &CommandLineArgs) -> Result<Self, ConfigError> {
        let profile_path = get_profile_path();
        let profile = load_profile(cmd_args.profile(), &profile_path)?;
        Ok(Self::resolve(cmd_args, &profile))
    }
}
