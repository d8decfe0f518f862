use std::path::Path;

use empedia::form::Attachment;
use empedia::model::{Application, ApplicationStatus, Identified, Ref};
use empedia::remote::{EntityService, ListQuery};

use super::*;

fn job_title(app: &Application) -> String {
    match &app.job {
        Ref::Embedded(job) => job.title.clone(),
        Ref::Id(id) => id.clone(),
    }
}

fn applicant(app: &Application) -> String {
    match &app.user {
        Some(Ref::Embedded(u)) => format!("{} <{}>", u.full_name, u.email),
        Some(Ref::Id(id)) => id.clone(),
        None => "-".to_string(),
    }
}

fn print_applications(apps: &[Application]) {
    if apps.is_empty() {
        println!("(none)");
    }
    for app in apps {
        println!(
            "{} [{}] {} - {}",
            app.id,
            app.status,
            job_title(app),
            applicant(app)
        );
    }
}

/// Every company's applications, fetched concurrently.
fn aggregated(client: &RemoteClient) -> Result<Vec<Application>> {
    let companies = client.companies().list(ListQuery::default())?;
    let ids: Vec<String> = companies
        .items
        .iter()
        .filter_map(|c| c.id().map(str::to_string))
        .collect();
    client.aggregated_applications(&ids)
}

pub(super) fn handle_applications_command(
    client: &RemoteClient,
    command: ApplicationCommands,
) -> Result<()> {
    match command {
        ApplicationCommands::List {
            company,
            mine,
            all,
            json,
        } => {
            let apps = if let Some(company_id) = company.as_deref() {
                client.company_applications(company_id)?
            } else if mine {
                client.session().token().context(
                    "not logged in (run `empedia login --token ...`)",
                )?;
                client.my_applications()?
            } else if all {
                client.all_applications()?
            } else {
                aggregated(client)?
            };
            if json {
                print_json(&apps, "applications")?;
            } else {
                print_applications(&apps);
            }
        }
        ApplicationCommands::Show { id, json } => {
            let app = client.application(&id)?;
            if json {
                print_json(&app, "application")?;
            } else {
                println!("{} [{}]", app.id, app.status);
                println!("job: {}", job_title(&app));
                println!("applicant: {}", applicant(&app));
                if let Some(resume) = app.resume_url.as_deref() {
                    println!("resume: {}", client.media_url(resume));
                }
                for entry in &app.timeline {
                    let at = entry
                        .updated_at
                        .as_deref()
                        .or(entry.timestamp.as_deref())
                        .unwrap_or("-");
                    println!("  {} {}", at, entry.status);
                }
            }
        }
        ApplicationCommands::Status { id, status, json } => {
            let status: ApplicationStatus = status.parse()?;
            let app = client.update_application_status(&id, status.as_str())?;
            if json {
                print_json(&app, "application")?;
            } else {
                println!("{} is now {}", app.id, app.status);
            }
        }
        ApplicationCommands::Apply { job, resume, json } => {
            client.session().token().context(
                "not logged in (run `empedia login --token ...`)",
            )?;
            let attachment = Attachment::from_path(Path::new(&resume))?;
            let created = client.apply(&job, attachment)?;
            if json {
                print_json(&created, "application")?;
            } else {
                println!("Applied to job {}", job);
            }
        }
    }
    Ok(())
}
