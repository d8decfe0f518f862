use clap::Subcommand;

use crate::{ApplicationCommands, ConfigCommands, RecordCommands};

pub(crate) mod catalog;
pub(crate) mod identity;
pub(crate) mod mentorship;
pub(crate) mod wizard;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show or change the client profile
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Store a session token
    Login(identity::LoginArgs),

    /// Forget the stored session
    Logout,

    /// Show the stored session
    Whoami(identity::WhoamiArgs),

    /// Browse or delete companies
    Companies {
        #[command(subcommand)]
        command: RecordCommands,
    },

    /// Browse or delete jobs
    Jobs {
        #[command(subcommand)]
        command: RecordCommands,
    },

    /// Browse or delete internships
    Internships {
        #[command(subcommand)]
        command: RecordCommands,
    },

    /// Browse or delete courses
    Courses {
        #[command(subcommand)]
        command: RecordCommands,
    },

    /// Browse or delete mentors
    Mentors {
        #[command(subcommand)]
        command: RecordCommands,
    },

    /// Fill and submit a create/edit wizard non-interactively
    Wizard(wizard::WizardArgs),

    /// Show a course's curriculum
    Curriculum(catalog::CurriculumArgs),

    /// Append a section to a course
    #[command(name = "add-section")]
    AddSection(catalog::AddSectionArgs),

    /// Job applications
    Applications {
        #[command(subcommand)]
        command: ApplicationCommands,
    },

    /// List a mentor's programs
    Programs(mentorship::ProgramsArgs),

    /// Book a program slot
    Book(mentorship::BookArgs),

    /// List your bookings
    Bookings(mentorship::BookingsArgs),

    /// List course enrollments
    Enrollments(catalog::EnrollmentsArgs),

    /// Manage users (admin)
    Users {
        #[command(subcommand)]
        command: RecordCommands,
    },

    /// Show dashboard metrics
    Metrics(catalog::MetricsArgs),

    /// Open the terminal UI
    Tui(wizard::TuiArgs),
}
