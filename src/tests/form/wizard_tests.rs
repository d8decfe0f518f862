use super::*;

#[test]
fn next_with_blank_required_field_stays_and_reports_it() {
    let mut w = Wizard::new(blueprints::job());
    w.set("company", "c1").unwrap();
    w.set("jobType", "Full-time").unwrap();
    w.set("workMode", "Remote").unwrap();
    w.toggle("experienceLevel", "Fresher").unwrap();

    let WizardError::Invalid(errors) = w.advance().unwrap_err() else {
        panic!("expected validation failure");
    };
    assert_eq!(errors.keys().collect::<Vec<_>>(), ["title"]);
    assert_eq!(w.step(), 0);
    assert_eq!(w.state().error("title"), Some("Title is required"));
}

#[test]
fn whitespace_only_text_counts_as_blank() {
    let mut w = Wizard::new(blueprints::company());
    w.set("company_name", "   ").unwrap();
    assert!(w.current().validate(w.state()).contains_key("company_name"));
}

#[test]
fn next_with_required_fields_advances_once_and_clears_errors() {
    let mut w = Wizard::new(blueprints::job());
    assert!(w.advance().is_err());
    assert!(!w.state().errors().is_empty());

    w.set("title", "QA Engineer").unwrap();
    w.set("company", "c1").unwrap();
    w.set("jobType", "Full-time").unwrap();
    w.set("workMode", "Remote").unwrap();
    w.toggle("experienceLevel", "Fresher").unwrap();

    assert_eq!(w.advance().unwrap(), 1);
    assert_eq!(w.step(), 1);
    assert_eq!(w.reached(), 1);
    assert!(w.state().errors().is_empty());
}

#[test]
fn location_is_required_only_on_site() {
    let mut w = Wizard::new(blueprints::job());
    w.set("title", "QA Engineer").unwrap();
    w.set("company", "c1").unwrap();
    w.set("jobType", "Full-time").unwrap();
    w.toggle("experienceLevel", "Fresher").unwrap();

    w.set("workMode", "Hybrid").unwrap();
    let visible: Vec<&str> = w.current().visible_fields(w.state()).map(|f| f.key).collect();
    assert!(visible.contains(&"location"));
    let WizardError::Invalid(errors) = w.advance().unwrap_err() else {
        panic!("expected validation failure");
    };
    assert_eq!(
        errors.get("location").map(String::as_str),
        Some("Location is required for Onsite/Hybrid roles")
    );

    w.set("workMode", "Remote").unwrap();
    let visible: Vec<&str> = w.current().visible_fields(w.state()).map(|f| f.key).collect();
    assert!(!visible.contains(&"location"));
    assert_eq!(w.advance().unwrap(), 1);
}

#[test]
fn jump_only_moves_back() {
    let mut w = filled_job();
    assert_eq!(w.reached(), 4);

    assert_eq!(w.back(), 3);
    w.jump_to(1).unwrap();
    assert_eq!(w.step(), 1);
    assert!(matches!(w.jump_to(1), Err(WizardError::StepOutOfReach(1))));
    assert!(matches!(w.jump_to(4), Err(WizardError::StepOutOfReach(4))));
    assert_eq!(w.step(), 1);

    // Returning forward re-validates every step on the way.
    w.set("shortSummary", "").unwrap();
    assert!(matches!(w.advance(), Err(WizardError::Invalid(_))));
    assert_eq!(w.step(), 1);

    let mut fresh = Wizard::new(blueprints::job());
    assert!(matches!(fresh.jump_to(2), Err(WizardError::StepOutOfReach(2))));
    assert_eq!(fresh.back(), 0);
}

#[test]
fn advance_on_final_step_is_refused() {
    let mut w = filled_job();
    assert!(matches!(w.advance(), Err(WizardError::AlreadyFinal)));
}

#[test]
fn job_submit_creates_with_form_values() {
    let mut w = filled_job();
    let target = FakeTarget::default();
    let mut seen = None;

    let job = w
        .submit(&target, |j: &Job| seen = j.id.clone())
        .unwrap();
    assert_eq!(job.title, "QA Engineer");
    assert_eq!(seen.as_deref(), Some("j1"));

    let created = target.created.borrow();
    let payload = &created[0];
    assert_eq!(payload.get("title"), Some("QA Engineer"));
    assert_eq!(payload.get("company"), Some("c1"));
    assert_eq!(payload.get("jobType"), Some("Full-time"));
    assert_eq!(payload.get("workMode"), Some("Remote"));
    assert_eq!(payload.get("location"), Some(""));
    assert_eq!(
        payload.texts("requiredSkills").collect::<Vec<_>>(),
        ["Python", "Basic SQL"]
    );
    assert!(!w.state().is_submitting());
}

#[test]
fn submit_before_final_step_is_refused() {
    let mut w = Wizard::new(blueprints::company());
    w.set("company_name", "Acme").unwrap();
    let target = FakeTarget::default();
    assert!(w.submit(&target, |_| {}).is_ok());

    let mut w = Wizard::new(blueprints::job());
    assert!(matches!(
        w.submit(&target, |_| {}),
        Err(WizardError::NotFinalStep)
    ));
}

#[test]
fn submit_revalidates_the_final_step() {
    let mut w = filled_job();
    w.set("deadline", "").unwrap();
    let target = FakeTarget::default();

    assert!(matches!(w.submit(&target, |_| {}), Err(WizardError::Invalid(_))));
    assert_eq!(target.calls.get(), 0);
    assert!(w.state().error("deadline").is_some());
}

#[test]
fn failed_create_keeps_every_value() {
    let mut w = filled_job();
    let before = w.state().clone();
    let target = FakeTarget {
        fail: true,
        ..FakeTarget::default()
    };

    let err = w.submit(&target, |_| panic!("no success callback on failure")).unwrap_err();
    assert!(matches!(err, WizardError::Remote(_)));
    assert!(err.to_string().contains("boom"));
    assert!(!w.state().is_submitting());
    assert_eq!(w.state(), &before);

    // the same wizard can simply be submitted again
    let retry = FakeTarget::default();
    assert!(w.submit(&retry, |_| {}).is_ok());
}

#[test]
fn edit_mode_updates_the_record() {
    let filled = filled_job();
    let mut w = Wizard::editing(blueprints::job(), "j9", filled.state().clone());
    assert_eq!(w.step(), 0);
    assert_eq!(w.reached(), 0);
    while !w.is_final() {
        w.advance().unwrap();
    }

    let target = FakeTarget::default();
    w.submit(&target, |_| {}).unwrap();
    assert!(target.created.borrow().is_empty());
    let updated = target.updated.borrow();
    assert_eq!(updated[0].0, "j9");
    assert_eq!(updated[0].1.get("title"), Some("QA Engineer"));
}

#[test]
fn edit_mode_cannot_skip_to_submit_past_blank_fields() {
    let filled = filled_job();
    let mut state = filled.state().clone();
    state.set_text("title", "");
    let mut w = Wizard::editing(blueprints::job(), "j9", state);

    assert!(matches!(w.jump_to(4), Err(WizardError::StepOutOfReach(4))));
    let target = FakeTarget::default();
    assert!(matches!(w.submit(&target, |_| {}), Err(WizardError::NotFinalStep)));
    let WizardError::Invalid(errors) = w.advance().unwrap_err() else {
        panic!("expected validation failure");
    };
    assert!(errors.contains_key("title"));
    assert!(target.updated.borrow().is_empty());
}

#[test]
fn toggling_twice_restores_the_list() {
    let mut w = Wizard::new(blueprints::internship());
    let original = w.state().list("requiredSkills").to_vec();

    assert!(w.toggle("requiredSkills", "Python").unwrap());
    assert_eq!(w.state().list("requiredSkills").len(), original.len() + 1);
    assert!(!w.toggle("requiredSkills", "Python").unwrap());
    assert_eq!(w.state().list("requiredSkills"), original.as_slice());

    assert!(!w.toggle("requiredSkills", "Excel").unwrap());
    assert!(w.toggle("requiredSkills", "Excel").unwrap());
    let mut restored = w.state().list("requiredSkills").to_vec();
    restored.sort();
    let mut expected = original.clone();
    expected.sort();
    assert_eq!(restored, expected);
}

#[test]
fn sub_skills_stop_at_the_cap() {
    let mut w = Wizard::new(blueprints::mentor());
    for skill in &blueprints::options::MENTOR_SUB_SKILLS[..7] {
        w.toggle("subSkills", skill).unwrap();
    }
    let err = w.toggle("subSkills", "UI/UX Design").unwrap_err();
    assert!(matches!(err, WizardError::LimitReached { max: 7, .. }));
    assert_eq!(w.state().list("subSkills").len(), 7);

    // removing still works at the cap
    assert!(!w.toggle("subSkills", "Excel").unwrap());
    let all = blueprints::options::MENTOR_SUB_SKILLS.join(",");
    assert!(w.set("subSkills", &all).is_err());
}

#[test]
fn set_rejects_unknown_and_mistyped_fields() {
    let mut w = Wizard::new(blueprints::company());
    assert!(matches!(w.set("nope", "x"), Err(WizardError::UnknownField(_))));
    assert!(matches!(w.set("logo", "x.png"), Err(WizardError::BadValue { .. })));
    assert!(matches!(w.set("verified", "maybe"), Err(WizardError::BadValue { .. })));
    assert!(matches!(w.toggle("company_name", "x"), Err(WizardError::BadValue { .. })));

    w.set("verified", "yes").unwrap();
    assert!(w.state().flag("verified"));
}

#[test]
fn every_declared_field_starts_present() {
    for kind in EntityKind::ALL {
        let w = Wizard::new(blueprints::blueprint(kind));
        for field in w.blueprint().fields() {
            assert!(
                w.state().value(field.key).is_some(),
                "{} wizard is missing {}",
                kind,
                field.key
            );
        }
    }
}

#[test]
fn entity_kind_parses_case_insensitively() {
    assert_eq!("Job".parse::<EntityKind>().unwrap(), EntityKind::Job);
    assert_eq!(" internship ".parse::<EntityKind>().unwrap(), EntityKind::Internship);
    assert!("program".parse::<EntityKind>().is_err());
}
