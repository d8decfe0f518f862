use anyhow::Result;

use crate::form::EntityKind;
use crate::profile::ProfileStore;

#[derive(Clone, Debug, Default)]
pub struct TuiRunOptions {
    /// Open this wizard instead of the menu.
    pub wizard: Option<EntityKind>,
    /// Record id to edit with `wizard`.
    pub edit: Option<String>,
    /// Open the booking screen for this mentor.
    pub mentor: Option<String>,
}

pub fn run(profile: &ProfileStore, opts: TuiRunOptions) -> Result<()> {
    crate::tui_shell::run(profile, opts)
}
