use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use empedia::profile::{ENV_PROFILE_DIR, ProfileStore};
use empedia::remote::RemoteClient;

use crate::Commands;

#[derive(Parser)]
#[command(name = "empedia")]
#[command(about = "Empedia marketplace admin client", long_about = None)]
pub(crate) struct Cli {
    /// Profile directory (defaults to ./.empedia)
    #[arg(long = "profile-dir", value_name = "DIR", env = ENV_PROFILE_DIR)]
    profile_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

pub(crate) fn run() -> Result<()> {
    empedia::logging::init("warn");
    let cli = Cli::parse();
    let profile = open_profile(cli.profile_dir)?;

    match cli.command {
        None => empedia::tui::run(&profile, empedia::tui::TuiRunOptions::default())?,
        Some(command) => crate::cli_exec::handle_command(&profile, command)?,
    }

    Ok(())
}

pub(crate) fn open_profile(explicit: Option<PathBuf>) -> Result<ProfileStore> {
    ProfileStore::locate(explicit).context("locate profile directory")
}

/// Client for the effective config and session of `profile`.
pub(crate) fn connect(profile: &ProfileStore) -> Result<RemoteClient> {
    let (cfg, session) = profile.effective()?;
    RemoteClient::new(cfg, session)
}

/// Same as [`connect`] but refuses to run without a token.
pub(crate) fn connect_authenticated(profile: &ProfileStore) -> Result<RemoteClient> {
    let client = connect(profile)?;
    client
        .session()
        .token()
        .context("not logged in (run `empedia login --token ...`)")?;
    Ok(client)
}
