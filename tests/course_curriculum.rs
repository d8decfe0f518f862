mod common;

use anyhow::Result;

use empedia::blueprints;
use empedia::form::{Attachment, Wizard};
use empedia::hydrate::Hydrator;
use empedia::model::Lesson;
use empedia::remote::EntityService;

#[test]
fn course_wizard_uploads_lesson_videos_with_the_curriculum() -> Result<()> {
    let guard = common::spawn_server()?;
    let client = guard.client()?;

    let mut wizard = Wizard::new(blueprints::course());
    wizard.set("title", "SQL for Analysts")?;
    wizard.set("category", "Tech")?;
    wizard.set("courseType", "Recorded")?;
    wizard.advance()?;
    wizard.edit(|state| {
        let intro = state.add_section("Getting started");
        let welcome = state.add_lesson(&intro).expect("section exists");
        state.update_lesson(&intro, &welcome, |l| {
            l.title = "Welcome".to_string();
            l.video_file = Some(Attachment::new("welcome.mp4", vec![0u8; 32]));
        });
        let joins = state.add_section("Joins");
        let inner = state.add_lesson(&joins).expect("section exists");
        state.update_lesson(&joins, &inner, |l| l.title = "Inner joins".to_string());
    });
    wizard.advance()?;
    let course = wizard.submit(&client.courses(), |_| {})?;
    let course_id = course.id.clone().expect("course id");

    let sections = client.curriculum(&course_id)?;
    let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, ["Getting started", "Joins"]);
    // Client-side ids are replaced by server ids.
    for s in &sections {
        let id = s.id.as_deref().expect("section id");
        assert!(!id.starts_with("local-"), "{}", id);
    }
    let welcome = &sections[0].lessons[0];
    assert_eq!(welcome.title, "Welcome");
    assert_eq!(welcome.video_url.as_deref(), Some("uploads/welcome.mp4"));
    assert_eq!(sections[1].lessons[0].video_url.as_deref(), Some(""));
    Ok(())
}

#[test]
fn sections_and_lessons_append_to_a_seeded_course() -> Result<()> {
    let guard = common::spawn_seeded_server()?;
    let client = guard.client()?;

    let section = client.add_section("k1", "Window functions")?;
    let section_id = section.id.clone().expect("section id");
    assert!(section.lessons.is_empty());

    let lesson = Lesson {
        title: "ROW_NUMBER".to_string(),
        kind: Some("Video".to_string()),
        duration: Some("12".to_string()),
        ..Lesson::default()
    };
    let stored = client.add_lesson("k1", &section_id, &lesson)?;
    assert!(stored.id.is_some());
    assert_eq!(stored.title, "ROW_NUMBER");

    let sections = client.curriculum("k1")?;
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[1].title, "Window functions");
    assert_eq!(sections[1].lessons.len(), 1);

    let err = client
        .add_lesson("k1", "no-such-section", &lesson)
        .expect_err("unknown section");
    assert!(format!("{:#}", err).contains("not found"), "{:#}", err);
    Ok(())
}

#[test]
fn editing_a_course_keeps_server_section_ids() -> Result<()> {
    let guard = common::spawn_seeded_server()?;
    let client = guard.client()?;

    let mut wizard = Hydrator::load(&client.courses(), "k1")?;
    assert_eq!(wizard.state().sections().len(), 1);
    assert_eq!(wizard.state().sections()[0].id, "s1");
    wizard.set("hook", "Query data without waiting on engineering")?;
    while !wizard.is_final() {
        wizard.advance()?;
    }
    wizard.submit(&client.courses(), |_| {})?;

    let course = client.courses().get("k1")?;
    assert_eq!(course.hook.as_deref(), Some("Query data without waiting on engineering"));
    assert_eq!(course.sections.len(), 1);
    assert_eq!(course.sections[0].id.as_deref(), Some("s1"));
    assert_eq!(course.sections[0].lessons[0].id.as_deref(), Some("l1"));
    Ok(())
}
