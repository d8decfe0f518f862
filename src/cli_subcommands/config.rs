use clap::Subcommand;

use empedia::form::ArrayEncoding;

#[derive(Subcommand)]
pub(crate) enum ConfigCommands {
    /// Show the effective configuration
    Show {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Update stored settings
    Set {
        /// API base URL (also used for media unless --media-url is given)
        #[arg(long)]
        url: Option<String>,
        /// Prefix for server-relative media paths
        #[arg(long = "media-url")]
        media_url: Option<String>,
        #[arg(long = "timeout-secs")]
        timeout_secs: Option<u64>,
        /// How list fields are sent (repeated | json)
        #[arg(long = "array-encoding")]
        array_encoding: Option<ArrayEncoding>,
    },
}
