use super::*;

fn lesson_file(name: &str) -> Attachment {
    Attachment::new(name, b"bytes".to_vec())
}

#[test]
fn repeated_encoding_writes_one_part_per_item() {
    let w = filled_job();
    let payload = w.payload().unwrap();
    assert_eq!(
        payload.texts("experienceLevel").collect::<Vec<_>>(),
        ["Fresher"]
    );
    // empty lists produce no parts at all
    assert!(!payload.has("perks"));
}

#[test]
fn json_encoding_writes_a_single_array_part() {
    let w = filled_job().with_encoding(ArrayEncoding::Json);
    let payload = w.payload().unwrap();
    assert_eq!(
        payload.texts("requiredSkills").collect::<Vec<_>>(),
        [r#"["Python","Basic SQL"]"#]
    );
    assert_eq!(payload.get("perks"), Some("[]"));
}

#[test]
fn blank_optional_company_fields_are_omitted() {
    let mut w = Wizard::new(blueprints::company());
    w.set("company_name", "Acme").unwrap();
    let payload = w.payload().unwrap();
    assert!(!payload.has("industry"));
    assert!(!payload.has("website"));
    assert_eq!(payload.get("verified"), Some("false"));
    assert!(!payload.has("logo"));

    w.set("website", "https://acme.test").unwrap();
    w.attach("logo", lesson_file("logo.png")).unwrap();
    let payload = w.payload().unwrap();
    assert_eq!(payload.get("website"), Some("https://acme.test"));
    let files: Vec<&str> = payload.files().map(|(name, _)| name).collect();
    assert_eq!(files, ["logo"]);
}

#[test]
fn curriculum_is_one_json_part_plus_lesson_files() {
    let mut w = Wizard::new(blueprints::course());
    let (section, lesson) = w.edit(|state| {
        let section = state.add_section("Intro");
        let lesson = state.add_lesson(&section).unwrap();
        state.update_lesson(&section, &lesson, |l| {
            l.title = "Welcome".to_string();
            l.duration = 5;
            l.video_file = Some(lesson_file("welcome.mp4"));
        });
        (section, lesson)
    });

    let payload = w.payload().unwrap();
    assert_eq!(payload.texts(SECTIONS_KEY).count(), 1);
    let sections: serde_json::Value =
        serde_json::from_str(payload.get(SECTIONS_KEY).unwrap()).unwrap();
    assert_eq!(sections[0]["title"], "Intro");
    assert_eq!(sections[0]["lessons"][0]["title"], "Welcome");
    assert_eq!(sections[0]["lessons"][0]["type"], "Video");
    assert_eq!(sections[0]["lessons"][0]["duration"], 5);
    assert!(sections[0]["lessons"][0].get("videoFile").is_none());

    let files: Vec<String> = payload.files().map(|(name, _)| name.to_string()).collect();
    assert_eq!(files, [format!("videoFile_{}_{}", section, lesson)]);
}

#[test]
fn untitled_lessons_block_the_curriculum_step() {
    let mut w = Wizard::new(blueprints::course());
    w.set("title", "SQL").unwrap();
    w.set("category", "Tech").unwrap();
    w.set("courseType", "Live").unwrap();
    w.advance().unwrap();

    w.edit(|state| {
        let section = state.add_section("Intro");
        state.add_lesson(&section);
    });
    let WizardError::Invalid(errors) = w.advance().unwrap_err() else {
        panic!("expected validation failure");
    };
    assert_eq!(
        errors.get(SECTIONS_KEY).map(String::as_str),
        Some("Please add a title for every lesson.")
    );
}

#[test]
fn attachment_from_path_guesses_mime() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resume.PDF");
    std::fs::write(&path, b"%PDF-1.4").unwrap();

    let file = Attachment::from_path(&path).unwrap();
    assert_eq!(file.file_name, "resume.PDF");
    assert_eq!(file.mime.as_deref(), Some("application/pdf"));
    assert_eq!(file.bytes, b"%PDF-1.4");

    assert!(Attachment::from_path(&dir.path().join("missing.png")).is_err());
}

#[test]
fn array_encoding_parses_both_names() {
    assert_eq!("json".parse::<ArrayEncoding>().unwrap(), ArrayEncoding::Json);
    assert_eq!(" Repeated".parse::<ArrayEncoding>().unwrap(), ArrayEncoding::Repeated);
    assert!("csv".parse::<ArrayEncoding>().is_err());
}

#[test]
fn local_ids_are_unique() {
    let a = local_id();
    let b = local_id();
    assert_ne!(a, b);
    assert!(a.starts_with("local-"));
}
