use clap::Args;

use empedia::session::Role;

#[derive(Args)]
pub(crate) struct LoginArgs {
    /// Bearer token issued by the API
    #[arg(long)]
    pub(crate) token: String,

    /// User id the token belongs to
    #[arg(long = "user-id")]
    pub(crate) user_id: Option<String>,

    /// Display name
    #[arg(long)]
    pub(crate) name: Option<String>,

    /// Role (admin | recruiter | applicant)
    #[arg(long, default_value = "admin")]
    pub(crate) role: Role,
}

#[derive(Args)]
pub(crate) struct WhoamiArgs {
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}
