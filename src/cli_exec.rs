use anyhow::{Context, Result};
use serde::Serialize;

use empedia::profile::ProfileStore;
use empedia::remote::RemoteClient;

use crate::{
    ApplicationCommands, Commands, ConfigCommands, RecordCommands, connect, connect_authenticated,
};

mod applications;
mod catalog;
mod client;
mod dispatch;
mod identity;
mod mentorship;
mod records;
mod wizard;

pub(super) fn handle_command(profile: &ProfileStore, command: Commands) -> Result<()> {
    dispatch::handle_command(profile, command)
}

fn print_json<T: Serialize + ?Sized>(value: &T, what: &str) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).with_context(|| format!("serialize {} json", what))?
    );
    Ok(())
}
