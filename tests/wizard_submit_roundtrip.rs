mod common;

use anyhow::Result;

use empedia::blueprints;
use empedia::form::{ArrayEncoding, Attachment, EntityKind, Wizard, WizardError};
use empedia::hydrate::Hydrator;
use empedia::model::Ref;
use empedia::remote::{EntityService, ListQuery};

/// A job wizard on its last step, every required field filled.
fn job_wizard(title: &str, company: &str) -> Result<Wizard> {
    let mut w = Wizard::new(blueprints::job());
    w.set("title", title)?;
    w.set("company", company)?;
    w.set("jobType", "Full-time")?;
    w.set("workMode", "Onsite")?;
    w.set("location", "Pune")?;
    w.toggle("experienceLevel", "Fresher")?;
    w.advance()?;
    w.set("shortSummary", "Own the release test plan")?;
    w.advance()?;
    w.set("requiredSkills", "Python, Basic SQL")?;
    w.advance()?;
    w.set("responsibilities", "Write and run test suites")?;
    w.toggle("perks", "Health insurance")?;
    w.advance()?;
    w.set("deadline", "2026-12-01")?;
    assert!(w.is_final());
    Ok(w)
}

#[test]
fn job_created_by_wizard_reads_back_and_edits() -> Result<()> {
    let guard = common::spawn_seeded_server()?;
    let client = guard.client()?;

    let mut wizard = job_wizard("QA Engineer", "c1")?;
    let mut seen = None;
    let created = wizard.submit(&client.jobs(), |job| seen = job.id.clone())?;
    let id = created.id.clone().expect("server assigns an id");
    assert_eq!(seen.as_deref(), Some(id.as_str()));

    let job = client.jobs().get(&id)?;
    assert_eq!(job.title, "QA Engineer");
    assert_eq!(job.location.as_deref(), Some("Pune"));
    assert_eq!(job.required_skills, ["Python", "Basic SQL"]);
    assert_eq!(job.experience_level, ["Fresher"]);
    match &job.company {
        Some(Ref::Embedded(c)) => assert_eq!(c.company_name, "Acme Analytics"),
        other => panic!("company not embedded: {:?}", other),
    }

    let page = client.jobs().list(ListQuery::default())?;
    assert_eq!(page.items.len(), 2);

    // Edit: the hydrated form carries the stored values; only the title changes.
    let mut edit = Hydrator::load(&client.jobs(), &id)?;
    assert_eq!(edit.entity_id(), Some(id.as_str()));
    assert_eq!(edit.state().text("title"), "QA Engineer");
    assert_eq!(edit.state().text("company"), "c1");
    assert_eq!(edit.state().list("requiredSkills"), ["Python", "Basic SQL"]);
    edit.set("title", "Senior QA Engineer")?;
    while !edit.is_final() {
        edit.advance()?;
    }
    let updated = edit.submit(&client.jobs(), |_| {})?;
    assert_eq!(updated.id.as_deref(), Some(id.as_str()));

    let job = client.jobs().get(&id)?;
    assert_eq!(job.title, "Senior QA Engineer");
    assert_eq!(job.required_skills, ["Python", "Basic SQL"]);
    assert_eq!(client.jobs().list(ListQuery::default())?.items.len(), 2);
    Ok(())
}

#[test]
fn json_array_encoding_reads_back_the_same_lists() -> Result<()> {
    let guard = common::spawn_seeded_server()?;
    let client = guard.client()?;

    let mut wizard = job_wizard("Data Engineer", "c2")?.with_encoding(ArrayEncoding::Json);
    let created = wizard.submit(&client.jobs(), |_| {})?;
    let job = client.jobs().get(created.id.as_deref().unwrap_or_default())?;
    assert_eq!(job.required_skills, ["Python", "Basic SQL"]);
    assert_eq!(job.perks, ["Health insurance"]);
    Ok(())
}

#[test]
fn failed_submit_keeps_the_form_for_retry() -> Result<()> {
    let guard = common::spawn_seeded_server()?;
    let rejected = guard.client_with_token("expired")?;
    let client = guard.client()?;

    let mut wizard = job_wizard("Support Engineer", "c1")?;
    let before = wizard.state().clone();
    let mut called = false;
    let err = wizard
        .submit(&rejected.jobs(), |_| called = true)
        .expect_err("stale token must fail");
    assert!(matches!(err, WizardError::Remote(_)));
    assert!(!called);
    assert_eq!(wizard.state(), &before);
    assert!(!wizard.state().is_submitting());
    assert_eq!(client.jobs().list(ListQuery::default())?.items.len(), 1);

    // Retrying with a good session submits the untouched form.
    let created = wizard.submit(&client.jobs(), |_| {})?;
    assert_eq!(created.title, "Support Engineer");
    assert_eq!(client.jobs().list(ListQuery::default())?.items.len(), 2);
    Ok(())
}

#[test]
fn company_logo_upload_is_stored_as_media_path() -> Result<()> {
    let guard = common::spawn_server()?;
    let client = guard.client()?;

    let mut wizard = Wizard::new(blueprints::company());
    wizard.set("company_name", "Northwind")?;
    wizard.set("verified", "yes")?;
    wizard.attach("logo", Attachment::new("northwind.png", vec![0x89, b'P', b'N', b'G']))?;
    let company = wizard.submit(&client.companies(), |_| {})?;

    // Blank optional fields are left out rather than sent empty.
    assert_eq!(company.industry, None);
    assert!(company.verified);
    let logo = company.logo_url.clone().expect("logo stored");
    assert_eq!(logo, "uploads/northwind.png");
    assert_eq!(
        client.media_url(&logo),
        format!("{}/uploads/northwind.png", guard.base_url)
    );
    Ok(())
}

#[test]
fn internship_hydrates_company_from_embedded_record() -> Result<()> {
    let guard = common::spawn_seeded_server()?;
    let client = guard.client()?;

    let internship = client.internships().get("i1")?;
    assert!(matches!(internship.company, Some(Ref::Embedded(_))));

    let wizard = Hydrator::load(&client.internships(), "i1")?;
    assert_eq!(wizard.state().text("company"), "c2");
    assert_eq!(wizard.state().text("title"), "Finance Intern");
    assert_eq!(wizard.state().text("workMode"), "Remote");

    let err = Hydrator::load(&client.internships(), "missing").expect_err("unknown id");
    assert!(format!("{:#}", err).contains("internship missing not found"), "{:#}", err);
    Ok(())
}

#[test]
fn every_kind_opens_for_edit_from_its_resource() -> Result<()> {
    let guard = common::spawn_seeded_server()?;
    let client = guard.client()?;

    for (kind, id, key, expected) in [
        (EntityKind::Job, "j1", "title", "Data Analyst"),
        (EntityKind::Internship, "i1", "company", "c2"),
        (EntityKind::Course, "k1", "title", "SQL for Analysts"),
        (EntityKind::Mentor, "m1", "fullName", "Ravi Menon"),
        (EntityKind::Company, "c1", "company_name", "Acme Analytics"),
    ] {
        let wizard = Hydrator::load_kind(&client, kind, id)?;
        assert_eq!(wizard.blueprint().entity, kind);
        assert_eq!(wizard.entity_id(), Some(id));
        assert_eq!(wizard.state().text(key), expected, "{} {}", kind, id);
    }

    let err = Hydrator::load_kind(&client, EntityKind::Mentor, "nobody").expect_err("unknown id");
    assert!(format!("{:#}", err).contains("mentor nobody not found"), "{:#}", err);
    Ok(())
}
