//! # Routeline Main Entry Point

use anyhow::Result;
use routeline::cmd_args::CommandLineArgs;
use routeline::config::Settings;
use routeline::logging::{self, LogTarget};
use routeline::app::services::ActionJournal;
use routeline::{replay_journal, run_once, AppController};
use routeline::{TerminalEventStream, TerminalRenderStream};

#[tokio::main]
async fn main() -> Result<()> {
    let cmd_args = CommandLineArgs::parse();

    let headless =
        cmd_args.once() || cmd_args.replay().is_some() || !atty::is(atty::Stream::Stdout);
    logging::init(&LogTarget::select(cmd_args.log_file(), headless))?;

    if let Some(path) = cmd_args.replay() {
        replay_journal(path, &mut std::io::stdout())?;
        return Ok(());
    }

    let settings = Settings::load(&cmd_args)?;
    let journal = cmd_args.journal().map(ActionJournal::open).transpose()?;

    if headless {
        let state = run_once(&settings, journal, &mut std::io::stdout()).await?;
        if !state.error().is_empty() {
            eprintln!("{}", state.error());
            std::process::exit(1);
        }
        return Ok(());
    }

    let mut app = AppController::with_io_streams(
        &settings,
        journal,
        TerminalEventStream::new(),
        TerminalRenderStream::new(),
    )?;
    app.run().await
}
