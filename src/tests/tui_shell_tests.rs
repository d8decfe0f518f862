use std::cell::RefCell;
use std::time::Instant;

use super::*;
use crate::blueprints;
use crate::booking::{AUTO_DISMISS, BookingBackend, BookingStatus};
use crate::form::Wizard;
use crate::model::{Company, MentorshipProgram, Slot};
use crate::profile::ClientConfig;
use crate::session::Session;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn type_str(view: &mut WizardView, s: &str) {
    for c in s.chars() {
        view.handle_key(key(KeyCode::Char(c)));
    }
}

fn job_view() -> WizardView {
    WizardView::ready(EntityKind::Job, Some(Wizard::new(blueprints::job())))
}

#[test]
fn input_edits_by_char_not_byte() {
    let mut input = Input::default();
    for c in "héllo".chars() {
        input.insert_char(c);
    }
    assert_eq!(input.cursor, 5);

    input.move_left();
    input.move_left();
    input.backspace();
    assert_eq!(input.buf, "hélo");
    assert_eq!(input.cursor, 2);

    input.move_left();
    input.delete();
    assert_eq!(input.buf, "hlo");
    assert_eq!(input.cursor, 1);

    input.move_right();
    input.move_right();
    input.move_right();
    assert_eq!(input.cursor, 3);

    assert_eq!(input.take(), "hlo");
    assert!(input.buf.is_empty());
    assert_eq!(input.cursor, 0);
}

#[test]
fn typing_writes_the_focused_text_field() {
    let mut view = job_view();
    type_str(&mut view, "QA Engineer");
    view.handle_key(key(KeyCode::Backspace));

    let wizard = view.wizard().expect("wizard");
    assert_eq!(wizard.state().text("title"), "QA Enginee");
}

#[test]
fn enter_on_incomplete_step_stays_and_reports() {
    let mut view = job_view();
    assert_eq!(view.handle_key(key(KeyCode::Enter)), Outcome::Stay);

    let wizard = view.wizard().expect("wizard");
    assert_eq!(wizard.step(), 0);
    assert!(wizard.state().error("title").is_some());
    assert!(wizard.state().error("company").is_some());
    assert!(view.error().is_some());
}

#[test]
fn esc_on_first_step_leaves() {
    let mut view = job_view();
    assert_eq!(view.handle_key(key(KeyCode::Esc)), Outcome::Leave);
}

#[test]
fn ctrl_s_requests_submit() {
    let mut view = job_view();
    assert_eq!(view.handle_key(ctrl('s')), Outcome::Submit);
}

#[test]
fn keyboard_fills_basics_and_advances() {
    let mut view = job_view();
    view.set_companies(&[Company {
        id: Some("c1".to_string()),
        company_name: "Acme".to_string(),
        ..Company::default()
    }]);

    type_str(&mut view, "QA Engineer");
    // company lookup
    view.handle_key(key(KeyCode::Down));
    view.handle_key(key(KeyCode::Char(' ')));
    // skip cover image, pick the first job type
    view.handle_key(key(KeyCode::Down));
    view.handle_key(key(KeyCode::Down));
    view.handle_key(key(KeyCode::Char(' ')));
    // work mode: Remote keeps location hidden
    view.handle_key(key(KeyCode::Down));
    view.handle_key(key(KeyCode::Char(' ')));
    // experience level
    view.handle_key(key(KeyCode::Down));
    view.handle_key(key(KeyCode::Right));
    view.handle_key(key(KeyCode::Char(' ')));

    {
        let state = view.wizard().expect("wizard").state();
        assert_eq!(state.text("company"), "c1");
        assert_eq!(state.text("jobType"), "Full-time");
        assert_eq!(state.text("workMode"), "Remote");
        assert_eq!(state.list("experienceLevel"), ["0–1 year"]);
    }

    assert_eq!(view.handle_key(key(KeyCode::Enter)), Outcome::Stay);
    let wizard = view.wizard().expect("wizard");
    assert_eq!(wizard.step(), 1);
    assert!(wizard.state().errors().is_empty());

    assert_eq!(view.handle_key(key(KeyCode::Esc)), Outcome::Stay);
    assert_eq!(view.wizard().expect("wizard").step(), 0);
}

#[test]
fn curriculum_keys_add_sections_and_lessons() {
    let mut wizard = Wizard::new(blueprints::course());
    wizard.set("title", "SQL basics").expect("title");
    wizard.set("category", "Tech").expect("category");
    wizard.set("courseType", "Recorded").expect("type");
    wizard.advance().expect("advance");
    let mut view = WizardView::ready(EntityKind::Course, Some(wizard));

    view.handle_key(ctrl('l'));
    assert_eq!(view.error(), Some("add a section first (Ctrl-N)"));

    type_str(&mut view, "Intro");
    view.handle_key(ctrl('n'));
    type_str(&mut view, "Welcome");
    view.handle_key(ctrl('l'));
    assert!(view.error().is_none());

    let sections = view.wizard().expect("wizard").state().sections();
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].title, "Intro");
    assert_eq!(sections[0].lessons.len(), 1);
    assert_eq!(sections[0].lessons[0].title, "Welcome");
    assert_eq!(sections[0].lessons[0].kind, "Video");
}

#[test]
fn view_without_wizard_only_leaves() {
    let mut view = WizardView::ready(EntityKind::Mentor, None);
    assert_eq!(view.handle_key(key(KeyCode::Enter)), Outcome::Stay);
    assert_eq!(view.handle_key(key(KeyCode::Esc)), Outcome::Leave);
}

fn program(booked: &[&str]) -> MentorshipProgram {
    let slot = |id: &str, start: &str| Slot {
        id: id.to_string(),
        date: "2026-11-02".to_string(),
        start_time: start.to_string(),
        end_time: "11:00".to_string(),
        is_booked: booked.contains(&id),
    };
    MentorshipProgram {
        id: "p1".to_string(),
        title: "Resume review".to_string(),
        duration: 30,
        currency: "INR".to_string(),
        available_slots: vec![slot("s1", "10:00"), slot("s2", "10:30")],
        ..MentorshipProgram::default()
    }
}

#[derive(Default)]
struct FakeBackend {
    booked: RefCell<Vec<String>>,
    notes: RefCell<Vec<String>>,
    fail: bool,
}

impl BookingBackend for FakeBackend {
    fn book(&self, _program_id: &str, slot_id: &str, user_notes: &str) -> anyhow::Result<()> {
        if self.fail {
            anyhow::bail!("slot already booked");
        }
        self.booked.borrow_mut().push(slot_id.to_string());
        self.notes.borrow_mut().push(user_notes.to_string());
        Ok(())
    }

    fn programs_by_mentor(&self, _mentor_id: &str) -> anyhow::Result<Vec<MentorshipProgram>> {
        let booked = self.booked.borrow();
        let ids: Vec<&str> = booked.iter().map(|s| s.as_str()).collect();
        Ok(vec![program(&ids)])
    }
}

#[test]
fn booking_view_selects_notes_and_confirms() {
    let backend = FakeBackend::default();
    let mut view = BookingView::ready("m1".to_string(), vec![program(&[])]);

    view.handle_key(key(KeyCode::Down));
    view.handle_key(key(KeyCode::Enter));
    assert_eq!(view.flow().status(), &BookingStatus::SlotSelected);
    assert_eq!(view.flow().selection(), Some(("p1", "s2")));

    for c in "hi".chars() {
        view.handle_key(key(KeyCode::Char(c)));
    }
    assert_eq!(view.handle_key(key(KeyCode::Enter)), Outcome::Confirm);

    let now = Instant::now();
    view.confirm(&backend, now);
    assert!(matches!(view.flow().status(), BookingStatus::Success { .. }));
    assert_eq!(backend.notes.borrow().as_slice(), ["hi"]);
    let open: Vec<&str> = view.programs()[0]
        .available_slots()
        .map(|s| s.id.as_str())
        .collect();
    assert_eq!(open, ["s1"]);

    view.poll(now + AUTO_DISMISS);
    assert_eq!(view.flow().status(), &BookingStatus::Idle);
}

#[test]
fn booking_view_keeps_selection_after_failure() {
    let backend = FakeBackend {
        fail: true,
        ..FakeBackend::default()
    };
    let mut view = BookingView::ready("m1".to_string(), vec![program(&[])]);
    view.handle_key(key(KeyCode::Enter));
    assert_eq!(view.handle_key(key(KeyCode::Enter)), Outcome::Confirm);

    view.confirm(&backend, Instant::now());
    assert!(matches!(view.flow().status(), BookingStatus::Error(_)));
    assert_eq!(view.flow().selection(), Some(("p1", "s1")));
    assert_eq!(view.programs()[0].available_slots().count(), 2);

    // retry is another confirm; Esc drops the selection
    assert_eq!(view.handle_key(key(KeyCode::Enter)), Outcome::Confirm);
    view.handle_key(key(KeyCode::Esc));
    assert_eq!(view.flow().status(), &BookingStatus::Idle);
}

fn offline_app() -> App {
    let client = RemoteClient::new(ClientConfig::for_url("http://127.0.0.1:9"), Session::anonymous())
        .expect("client");
    App::new(client, TuiRunOptions::default())
}

#[test]
fn menu_opens_mentor_prompt_and_returns() {
    let mut app = offline_app();
    assert!(matches!(app.screen, Screen::Menu));
    assert_eq!(app.identity(), "anonymous");

    for _ in 0..10 {
        app.handle_key(key(KeyCode::Down));
    }
    assert_eq!(app.menu, MENU.len() - 1);
    app.handle_key(key(KeyCode::Enter));
    assert!(matches!(app.screen, Screen::MentorPrompt));

    app.handle_key(key(KeyCode::Esc));
    assert!(matches!(app.screen, Screen::Menu));

    app.handle_key(key(KeyCode::Char('q')));
    assert!(app.quit);
}

#[test]
fn ctrl_c_quits_from_any_screen() {
    let mut app = offline_app();
    app.screen = Screen::MentorPrompt;
    app.handle_key(ctrl('c'));
    assert!(app.quit);
}
