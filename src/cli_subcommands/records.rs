use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum RecordCommands {
    /// List records
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        limit: u32,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one record
    Show {
        id: String,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete a record
    Delete { id: String },
}
