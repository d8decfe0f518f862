use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum ApplicationCommands {
    /// List applications (defaults to every company's, aggregated)
    List {
        /// One company's applications
        #[arg(long, conflicts_with_all = ["mine", "all"])]
        company: Option<String>,
        /// Applications of the signed-in user
        #[arg(long, conflicts_with = "all")]
        mine: bool,
        /// The admin-wide listing
        #[arg(long)]
        all: bool,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one application with its timeline
    Show {
        id: String,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Change an application's status
    Status {
        id: String,
        /// Applied | Screening | Shortlisted | Interview | Offer | Rejected
        status: String,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Apply to a job with a resume
    Apply {
        #[arg(long)]
        job: String,
        #[arg(long)]
        resume: PathBuf,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
}
