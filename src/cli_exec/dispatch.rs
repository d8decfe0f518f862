use super::applications::handle_applications_command;
use super::catalog::{
    handle_add_section_command, handle_curriculum_command, handle_enrollments_command,
    handle_metrics_command,
};
use super::client::{with_client, with_session};
use super::identity::{
    handle_config_command, handle_login_command, handle_logout_command, handle_whoami_command,
};
use super::mentorship::{handle_book_command, handle_bookings_command, handle_programs_command};
use super::records::handle_record_command;
use super::wizard::{handle_tui_command, handle_wizard_command};
use super::*;

pub(super) fn handle_command(profile: &ProfileStore, command: Commands) -> Result<()> {
    match command {
        Commands::Config { command } => handle_config_command(profile, command)?,
        Commands::Login(args) => {
            handle_login_command(profile, args.token, args.user_id, args.name, args.role)?
        }
        Commands::Logout => handle_logout_command(profile)?,
        Commands::Whoami(args) => handle_whoami_command(profile, args.json)?,
        Commands::Companies { command } => {
            with_client(profile, |c| handle_record_command(&c.companies(), command))?
        }
        Commands::Jobs { command } => {
            with_client(profile, |c| handle_record_command(&c.jobs(), command))?
        }
        Commands::Internships { command } => {
            with_client(profile, |c| handle_record_command(&c.internships(), command))?
        }
        Commands::Courses { command } => {
            with_client(profile, |c| handle_record_command(&c.courses(), command))?
        }
        Commands::Mentors { command } => {
            with_client(profile, |c| handle_record_command(&c.mentors(), command))?
        }
        Commands::Users { command } => {
            with_client(profile, |c| handle_record_command(&c.users(), command))?
        }
        Commands::Wizard(args) => with_client(profile, |c| handle_wizard_command(c, args))?,
        Commands::Curriculum(args) => with_client(profile, |c| {
            handle_curriculum_command(c, &args.course_id, args.json)
        })?,
        Commands::AddSection(args) => with_client(profile, |c| {
            handle_add_section_command(c, &args.course_id, &args.title, args.json)
        })?,
        Commands::Applications { command } => {
            with_client(profile, |c| handle_applications_command(c, command))?
        }
        Commands::Programs(args) => with_client(profile, |c| {
            handle_programs_command(c, &args.mentor_id, args.available, args.json)
        })?,
        Commands::Book(args) => with_session(profile, |c| handle_book_command(c, args))?,
        Commands::Bookings(args) => {
            with_session(profile, |c| handle_bookings_command(c, args.json))?
        }
        Commands::Enrollments(args) => with_client(profile, |c| {
            handle_enrollments_command(c, args.user.as_deref(), args.json)
        })?,
        Commands::Metrics(args) => with_client(profile, |c| handle_metrics_command(c, args.json))?,
        Commands::Tui(args) => handle_tui_command(profile, args)?,
    }

    Ok(())
}
