use clap::Args;

#[derive(Args)]
pub(crate) struct ProgramsArgs {
    pub(crate) mentor_id: String,
    /// Only show slots that are still open
    #[arg(long)]
    pub(crate) available: bool,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct BookArgs {
    /// Mentor whose programs are refreshed after booking
    #[arg(long)]
    pub(crate) mentor: String,
    #[arg(long)]
    pub(crate) program: String,
    #[arg(long)]
    pub(crate) slot: String,
    /// Note for the mentor
    #[arg(long, default_value = "")]
    pub(crate) note: String,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct BookingsArgs {
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}
