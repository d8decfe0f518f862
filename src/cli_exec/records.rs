use empedia::model::{Company, Course, Internship, Job, Mentor, Ref, User};
use empedia::remote::{EntityService, ListQuery};

use super::*;

/// One-line rendering used by `list` and `show`.
pub(super) trait Listing: Serialize {
    fn line(&self) -> String;
}

fn id_or_dash(id: Option<&str>) -> &str {
    id.unwrap_or("-")
}

fn company_label(company: &Option<Ref<Company>>) -> String {
    match company {
        Some(Ref::Embedded(c)) => c.company_name.clone(),
        Some(Ref::Id(id)) => id.clone(),
        None => "-".to_string(),
    }
}

impl Listing for Company {
    fn line(&self) -> String {
        let verified = if self.verified { " verified" } else { "" };
        format!(
            "{} {} [{}]{}",
            id_or_dash(self.id.as_deref()),
            self.company_name,
            self.industry.as_deref().unwrap_or("-"),
            verified
        )
    }
}

impl Listing for Job {
    fn line(&self) -> String {
        format!(
            "{} {} @ {} ({}, {})",
            id_or_dash(self.id.as_deref()),
            self.title,
            company_label(&self.company),
            self.job_type.as_deref().unwrap_or("-"),
            self.work_mode.as_deref().unwrap_or("-")
        )
    }
}

impl Listing for Internship {
    fn line(&self) -> String {
        format!(
            "{} {} @ {} ({}, {})",
            id_or_dash(self.id.as_deref()),
            self.title,
            company_label(&self.company),
            self.internship_type
                .as_deref()
                .or(self.job_type.as_deref())
                .unwrap_or("-"),
            self.work_mode.as_deref().unwrap_or("-")
        )
    }
}

impl Listing for Course {
    fn line(&self) -> String {
        let lessons: usize = self.sections.iter().map(|s| s.lessons.len()).sum();
        format!(
            "{} {} [{}] {} section(s), {} lesson(s) {}",
            id_or_dash(self.id.as_deref()),
            self.title,
            self.category.as_deref().unwrap_or("-"),
            self.sections.len(),
            lessons,
            self.status.as_deref().unwrap_or("")
        )
    }
}

impl Listing for Mentor {
    fn line(&self) -> String {
        format!(
            "{} {} - {}",
            id_or_dash(self.id.as_deref()),
            self.full_name,
            self.headline.as_deref().unwrap_or("")
        )
    }
}

impl Listing for User {
    fn line(&self) -> String {
        format!(
            "{} {} <{}> {}",
            self.id,
            self.full_name,
            self.email,
            self.role.as_deref().unwrap_or("")
        )
    }
}

pub(super) fn handle_record_command<S>(service: &S, command: RecordCommands) -> Result<()>
where
    S: EntityService,
    S::Record: Listing,
{
    match command {
        RecordCommands::List { page, limit, json } => {
            let listed = service.list(ListQuery { page, limit })?;
            if json {
                print_json(&listed, "list")?;
            } else {
                if listed.items.is_empty() {
                    println!("(none)");
                }
                for item in &listed.items {
                    println!("{}", item.line());
                }
                if listed.total_pages > 1 {
                    println!("page {} of {}", page, listed.total_pages);
                }
            }
        }
        RecordCommands::Show { id, json } => {
            let record = service.get(&id)?;
            if json {
                print_json(&record, "record")?;
            } else {
                println!("{}", record.line());
            }
        }
        RecordCommands::Delete { id } => {
            service.delete(&id)?;
            println!("Deleted {}", id);
        }
    }
    Ok(())
}
