use crate::app::models::Route;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Profile name
    /// Section of the profile file to read defaults from. Default is 'default'.
    /// A missing profile is not an error; built-in defaults are used instead.
    #[clap(short = 'p', long, default_value = "default", help = "profile name")]
    profile: String,

    #[clap(short = 'r', long, help = "resource route: posts, todos or users")]
    route: Option<Route>,

    #[clap(short = 'n', long, help = "resource identifier appended to the route")]
    number: Option<String>,

    #[clap(long, help = "API base URL")]
    base_url: Option<String>,

    #[clap(long, help = "fetch once, print the JSON and exit")]
    once: bool,

    #[clap(long, value_name = "PATH", help = "append every dispatched action to a journal")]
    journal: Option<PathBuf>,

    #[clap(
        long,
        value_name = "PATH",
        conflicts_with = "once",
        help = "replay a journal and print the resulting state"
    )]
    replay: Option<PathBuf>,

    #[clap(long, value_name = "PATH", help = "write logs to this file")]
    log_file: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    profile: String,
    route: Option<Route>,
    number: Option<String>,
    base_url: Option<String>,
    once: bool,
    journal: Option<PathBuf>,
    replay: Option<PathBuf>,
    log_file: Option<String>,
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            profile: args.profile,
            route: args.route,
            number: args.number,
            base_url: args.base_url,
            once: args.once,
            journal: args.journal,
            replay: args.replay,
            log_file: args.log_file,
        }
    }
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        ClapArgs::parse().into()
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::parse_from(itr).into()
    }

    /// Like [`parse_from`](Self::parse_from) but returns clap's error instead of exiting
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::try_parse_from(itr).map(Into::into)
    }

    pub fn profile(&self) -> &String {
        &self.profile
    }

    pub fn route(&self) -> Option<Route> {
        self.route
    }

    pub fn number(&self) -> Option<&str> {
        self.number.as_deref()
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn once(&self) -> bool {
        self.once
    }

    pub fn journal(&self) -> Option<&Path> {
        self.journal.as_deref()
    }

    pub fn replay(&self) -> Option<&Path> {
        self.replay.as_deref()
    }

    pub fn log_file(&self) -> Option<&str> {
        self.log_file.as_deref()
    }
}
