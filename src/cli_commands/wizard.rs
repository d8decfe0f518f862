use clap::Args;

use empedia::form::EntityKind;

#[derive(Args)]
pub(crate) struct WizardArgs {
    /// job | internship | course | mentor | company
    pub(crate) kind: EntityKind,

    /// Edit an existing record instead of creating one
    #[arg(long)]
    pub(crate) edit: Option<String>,

    /// Set a field (`key=value`; lists are comma separated)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub(crate) set: Vec<String>,

    /// Toggle one option of a multi-choice field
    #[arg(long = "toggle", value_name = "KEY=VALUE")]
    pub(crate) toggle: Vec<String>,

    /// Attach a file to a file field
    #[arg(long = "file", value_name = "KEY=PATH")]
    pub(crate) file: Vec<String>,

    /// Append a curriculum section (course only)
    #[arg(long = "section", value_name = "TITLE")]
    pub(crate) section: Vec<String>,

    /// Append a lesson to a section, by 1-based section number (course only)
    #[arg(long = "lesson", value_name = "N:TITLE")]
    pub(crate) lesson: Vec<String>,

    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct TuiArgs {
    /// Open a wizard directly
    #[arg(long)]
    pub(crate) wizard: Option<EntityKind>,

    /// Record to edit (requires --wizard)
    #[arg(long, requires = "wizard")]
    pub(crate) edit: Option<String>,

    /// Open the booking screen for a mentor
    #[arg(long, conflicts_with = "wizard")]
    pub(crate) mentor: Option<String>,
}
