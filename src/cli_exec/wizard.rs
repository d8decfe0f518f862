use std::path::Path;

use empedia::blueprints;
use empedia::form::{Attachment, EntityKind, SubmitTarget, Wizard, WizardError};
use empedia::hydrate::Hydrator;
use empedia::tui::TuiRunOptions;

use crate::cli_commands::wizard::{TuiArgs, WizardArgs};

use super::*;

fn split_pair<'a>(raw: &'a str, flag: &str) -> Result<(&'a str, &'a str)> {
    raw.split_once('=')
        .map(|(k, v)| (k.trim(), v))
        .filter(|(k, _)| !k.is_empty())
        .with_context(|| format!("--{} expects KEY=VALUE, got '{}'", flag, raw))
}

fn apply_curriculum(wizard: &mut Wizard, sections: &[String], lessons: &[String]) -> Result<()> {
    if wizard.blueprint().entity != EntityKind::Course {
        anyhow::bail!("--section/--lesson only apply to the course wizard");
    }
    wizard.edit(|state| -> Result<()> {
        for title in sections {
            state.add_section(title.trim());
        }
        for raw in lessons {
            let (n, title) = raw
                .split_once(':')
                .with_context(|| format!("--lesson expects N:TITLE, got '{}'", raw))?;
            let n: usize = n
                .trim()
                .parse()
                .with_context(|| format!("--lesson section number '{}'", n))?;
            let section_id = n
                .checked_sub(1)
                .and_then(|i| state.sections().get(i))
                .map(|s| s.id.clone())
                .with_context(|| format!("no section {} to add a lesson to", n))?;
            let lesson_id = state
                .add_lesson(&section_id)
                .with_context(|| format!("no section {} to add a lesson to", n))?;
            state.update_lesson(&section_id, &lesson_id, |l| l.title = title.trim().to_string());
        }
        Ok(())
    })
}

/// Error listing every failing field of a step.
fn step_failure(title: &str, err: WizardError) -> anyhow::Error {
    match err {
        WizardError::Invalid(errors) => {
            let lines: Vec<String> = errors
                .iter()
                .map(|(key, msg)| format!("  {}: {}", key, msg))
                .collect();
            anyhow::anyhow!("step '{}' is incomplete:\n{}", title, lines.join("\n"))
        }
        other => other.into(),
    }
}

fn submit_to<T>(wizard: &mut Wizard, target: &T) -> Result<serde_json::Value>
where
    T: SubmitTarget,
    T::Record: Serialize,
{
    let title = wizard.current().title;
    let record = wizard
        .submit(target, |_| {})
        .map_err(|err| step_failure(title, err))?;
    serde_json::to_value(&record).context("serialize submitted record")
}

fn submit(client: &RemoteClient, wizard: &mut Wizard) -> Result<serde_json::Value> {
    match wizard.blueprint().entity {
        EntityKind::Job => submit_to(wizard, &client.jobs()),
        EntityKind::Internship => submit_to(wizard, &client.internships()),
        EntityKind::Course => submit_to(wizard, &client.courses()),
        EntityKind::Mentor => submit_to(wizard, &client.mentors()),
        EntityKind::Company => submit_to(wizard, &client.companies()),
    }
}

pub(super) fn handle_wizard_command(client: &RemoteClient, args: WizardArgs) -> Result<()> {
    let kind = args.kind;
    let wizard = match args.edit.as_deref() {
        Some(id) => Hydrator::load_kind(client, kind, id)?,
        None => Wizard::new(blueprints::blueprint(kind)),
    };
    let mut wizard = wizard.with_encoding(client.config().array_encoding);

    for raw in &args.set {
        let (key, value) = split_pair(raw, "set")?;
        wizard.set(key, value)?;
    }
    for raw in &args.toggle {
        let (key, value) = split_pair(raw, "toggle")?;
        wizard.toggle(key, value.trim())?;
    }
    for raw in &args.file {
        let (key, path) = split_pair(raw, "file")?;
        wizard.attach(key, Attachment::from_path(Path::new(path))?)?;
    }
    if !args.section.is_empty() || !args.lesson.is_empty() {
        apply_curriculum(&mut wizard, &args.section, &args.lesson)?;
    }

    while !wizard.is_final() {
        let title = wizard.current().title;
        wizard.advance().map_err(|err| step_failure(title, err))?;
    }

    let editing = wizard.entity_id().map(str::to_string);
    let record = submit(client, &mut wizard)?;
    if args.json {
        print_json(&record, "submitted record")?;
    } else {
        let id = record.get("_id").and_then(|v| v.as_str()).unwrap_or("-");
        match editing {
            Some(_) => println!("Updated {} {}", kind, id),
            None => println!("Created {} {}", kind, id),
        }
    }
    Ok(())
}

pub(super) fn handle_tui_command(profile: &ProfileStore, args: TuiArgs) -> Result<()> {
    empedia::tui::run(
        profile,
        TuiRunOptions {
            wizard: args.wizard,
            edit: args.edit,
            mentor: args.mentor,
        },
    )
}
