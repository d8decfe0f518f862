use anyhow::Result;
use serde_json::json;

use super::*;
use crate::form::Payload;
use crate::model::Page;
use crate::remote::ListQuery;

fn internship_from(value: serde_json::Value) -> Internship {
    serde_json::from_value(value).unwrap()
}

/// Serves a single internship by id.
struct OneInternship(Internship);

impl EntityService for OneInternship {
    type Record = Internship;

    fn list(&self, _query: ListQuery) -> Result<Page<Internship>> {
        Ok(Page::single(vec![self.0.clone()]))
    }

    fn get(&self, id: &str) -> Result<Internship> {
        match self.0.id.as_deref() {
            Some(own) if own == id => Ok(self.0.clone()),
            _ => anyhow::bail!("internship {} not found", id),
        }
    }

    fn create(&self, _payload: &Payload) -> Result<Internship> {
        anyhow::bail!("read-only")
    }

    fn update(&self, _id: &str, _payload: &Payload) -> Result<Internship> {
        anyhow::bail!("read-only")
    }

    fn delete(&self, _id: &str) -> Result<()> {
        anyhow::bail!("read-only")
    }
}

#[test]
fn internship_company_from_embedded_record() {
    let i = internship_from(json!({
        "_id": "i1",
        "title": "Data Intern",
        "company": { "_id": "c1", "company_name": "Acme" },
    }));
    assert_eq!(hydrate_internship(&i).text("company"), "c1");
}

#[test]
fn internship_company_from_bare_id() {
    let i = internship_from(json!({ "_id": "i1", "company": "c2" }));
    assert_eq!(hydrate_internship(&i).text("company"), "c2");

    let i = internship_from(json!({ "_id": "i1" }));
    assert_eq!(hydrate_internship(&i).text("company"), "");
}

#[test]
fn internship_keeps_defaults_for_missing_values() {
    let i = internship_from(json!({
        "_id": "i1",
        "title": "",
        "internshipType": "Apprenticeship",
        "requiredSkills": [],
        "applicationDeadline": "2026-12-31",
        "recommendedCourses": [{ "_id": "k1", "title": "SQL" }],
    }));
    let s = hydrate_internship(&i);
    assert_eq!(s.text("title"), "Junior Data Science Intern");
    assert_eq!(s.text("jobType"), "Internship");
    assert_eq!(s.list("requiredSkills"), ["Excel", "Basic SQL", "Communication"]);
    assert_eq!(s.text("deadline"), "2026-12-31");
    assert!(s.list("recommendedCourses").is_empty());
}

#[test]
fn internship_type_prefers_known_values() {
    let i = internship_from(json!({ "_id": "i1", "jobType": "Project-based" }));
    assert_eq!(hydrate_internship(&i).text("jobType"), "Project-based");
}

#[test]
fn job_lists_accept_json_text() {
    let job: Job = serde_json::from_value(json!({
        "_id": "j1",
        "title": "QA Engineer",
        "company": "c1",
        "experienceLevel": "[\"Fresher\",\"1–3 years\"]",
        "salaryMin": 40000,
        "perks": "Certificate",
    }))
    .unwrap();
    let s = hydrate_job(&job);
    assert_eq!(s.list("experienceLevel"), ["Fresher", "1–3 years"]);
    assert_eq!(s.text("salaryMin"), "40000");
    assert_eq!(s.list("perks"), ["Certificate"]);
    assert_eq!(s.text("conversionPossible"), "No");
}

#[test]
fn course_numbers_and_lessons() {
    let course: Course = serde_json::from_value(json!({
        "_id": "k1",
        "title": "SQL",
        "priceType": "Paid",
        "priceAmount": 0,
        "accessDuration": "90",
        "maxStudents": null,
        "status": "Archived",
        "sections": [{
            "_id": "s1",
            "title": "Intro",
            "lessons": [
                { "_id": "l1", "title": "Welcome", "type": "Podcast", "duration": "12" },
                { "title": "Notes", "type": "PDF/Notes", "isPreviewFree": "true" },
            ],
        }],
    }))
    .unwrap();
    let s = hydrate_course(&course);
    assert_eq!(s.text("priceType"), "Paid");
    assert_eq!(s.text("priceAmount"), "");
    assert_eq!(s.text("accessDuration"), "90");
    assert_eq!(s.text("maxStudents"), "");
    assert_eq!(s.text("status"), "Draft");

    let sections = s.sections();
    assert_eq!(sections[0].id, "s1");
    let lessons = &sections[0].lessons;
    assert_eq!(lessons[0].kind, "Video");
    assert_eq!(lessons[0].duration, 12);
    assert_eq!(lessons[1].kind, "PDF/Notes");
    assert!(lessons[1].is_preview_free);
    assert!(lessons[1].id.starts_with("local-"));
}

#[test]
fn mentor_and_company_round_into_state() {
    let mentor: Mentor = serde_json::from_value(json!({
        "_id": "m1",
        "fullName": "Asha",
        "headline": "Data analyst",
        "pricingType": "Paid",
        "pricingAmount": "1500",
        "weeklySlots": 0,
        "isPaused": true,
        "subSkills": ["SQL"],
    }))
    .unwrap();
    let s = hydrate_mentor(&mentor);
    assert_eq!(s.text("fullName"), "Asha");
    assert_eq!(s.text("pricingAmount"), "1500");
    assert_eq!(s.text("weeklySlots"), "");
    assert!(s.flag("isPaused"));
    assert_eq!(s.list("subSkills"), ["SQL"]);

    let company: Company = serde_json::from_value(json!({
        "_id": "c1",
        "company_name": "Acme",
        "verified": "true",
    }))
    .unwrap();
    let s = hydrate_company(&company);
    assert_eq!(s.text("company_name"), "Acme");
    assert!(s.flag("verified"));
    assert_eq!(s.text("industry"), "");
}

#[test]
fn load_opens_edit_mode() {
    let service = OneInternship(internship_from(json!({
        "_id": "i1",
        "title": "Data Intern",
        "company": { "_id": "c1", "company_name": "Acme" },
        "workMode": "Remote",
    })));
    let w = Hydrator::load(&service, "i1").unwrap();
    assert_eq!(w.entity_id(), Some("i1"));
    assert_eq!(w.step(), 0);
    assert_eq!(w.reached(), 0);
    assert_eq!(w.state().text("title"), "Data Intern");
    assert_eq!(w.state().text("company"), "c1");
    for field in w.blueprint().fields() {
        assert!(w.state().value(field.key).is_some(), "missing {}", field.key);
    }
}

#[test]
fn load_reports_missing_records() {
    let service = OneInternship(internship_from(json!({ "_id": "i1" })));
    let err = Hydrator::load(&service, "nope").unwrap_err();
    assert_eq!(err.to_string(), "internship nope not found");
}
