use clap::Args;

#[derive(Args)]
pub(crate) struct CurriculumArgs {
    pub(crate) course_id: String,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct AddSectionArgs {
    pub(crate) course_id: String,
    pub(crate) title: String,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct EnrollmentsArgs {
    /// Only this user's enrollments (defaults to every enrollment)
    #[arg(long)]
    pub(crate) user: Option<String>,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct MetricsArgs {
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}
