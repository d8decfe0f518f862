use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::booking::{BookingBackend, BookingFlow, BookingStatus};
use crate::model::MentorshipProgram;
use crate::remote::RemoteClient;
use crate::task::ViewTask;

use super::Outcome;
use super::input::Input;

pub(super) struct BookingView {
    mentor_id: String,
    programs: Vec<MentorshipProgram>,
    loading: Option<ViewTask<Result<Vec<MentorshipProgram>>>>,
    load_error: Option<String>,
    flow: BookingFlow,
    cursor: usize,
    note: Input,
}

impl BookingView {
    pub(super) fn open(client: Arc<RemoteClient>, mentor_id: String) -> Self {
        let id = mentor_id.clone();
        let task = ViewTask::spawn(move |_| client.programs_by_mentor(&id));
        let mut view = Self::ready(mentor_id, Vec::new());
        view.loading = Some(task);
        view
    }

    pub(super) fn ready(mentor_id: String, programs: Vec<MentorshipProgram>) -> Self {
        Self {
            mentor_id,
            programs,
            loading: None,
            load_error: None,
            flow: BookingFlow::new(),
            cursor: 0,
            note: Input::default(),
        }
    }

    #[cfg(test)]
    pub(super) fn flow(&self) -> &BookingFlow {
        &self.flow
    }

    #[cfg(test)]
    pub(super) fn programs(&self) -> &[MentorshipProgram] {
        &self.programs
    }

    /// Open slots across all programs, as (program index, slot id).
    fn open_slots(&self) -> Vec<(usize, String)> {
        self.programs
            .iter()
            .enumerate()
            .flat_map(|(i, p)| p.available_slots().map(move |s| (i, s.id.clone())))
            .collect()
    }

    pub(super) fn poll(&mut self, now: Instant) {
        if let Some(task) = &self.loading {
            if let Some(result) = task.try_take() {
                self.loading = None;
                match result {
                    Ok(programs) => self.programs = programs,
                    Err(err) => self.load_error = Some(format!("{:#}", err)),
                }
            }
        }
        if self.flow.tick(now) {
            self.note.clear();
        }
    }

    fn selecting(&self) -> bool {
        matches!(
            self.flow.status(),
            BookingStatus::Idle | BookingStatus::Success { .. }
        )
    }

    pub(super) fn handle_key(&mut self, key: KeyEvent) -> Outcome {
        if self.selecting() {
            match key.code {
                KeyCode::Esc => return Outcome::Leave,
                KeyCode::Up => self.cursor = self.cursor.saturating_sub(1),
                KeyCode::Down => {
                    let count = self.open_slots().len();
                    self.cursor = (self.cursor + 1).min(count.saturating_sub(1));
                }
                KeyCode::Enter => {
                    let slots = self.open_slots();
                    if let Some((pi, slot_id)) = slots.get(self.cursor) {
                        if let Err(err) = self.flow.select(&self.programs[*pi], slot_id) {
                            self.load_error = Some(err.to_string());
                        } else {
                            self.load_error = None;
                            self.note.clear();
                        }
                    }
                }
                _ => {}
            }
            return Outcome::Stay;
        }

        match key.code {
            KeyCode::Esc => {
                if !matches!(self.flow.status(), BookingStatus::Confirming) {
                    self.flow = BookingFlow::new();
                    self.note.clear();
                }
            }
            KeyCode::Enter => {
                self.flow.set_note(self.note.buf.clone());
                return Outcome::Confirm;
            }
            KeyCode::Char(c) => self.note.insert_char(c),
            KeyCode::Backspace => self.note.backspace(),
            KeyCode::Left => self.note.move_left(),
            KeyCode::Right => self.note.move_right(),
            _ => {}
        }
        Outcome::Stay
    }

    /// Books the selected slot; a successful booking replaces the program list with the refetch.
    pub(super) fn confirm<B: BookingBackend>(&mut self, backend: &B, now: Instant) {
        match self.flow.confirm(backend, &self.mentor_id, now) {
            Ok(programs) => {
                self.programs = programs;
                self.cursor = 0;
                self.load_error = None;
            }
            Err(err) => self.load_error = Some(err.to_string()),
        }
    }

    pub(super) fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(5)])
            .split(area);

        let slots = self.open_slots();
        let mut rows = Vec::new();
        for (pi, slot_id) in &slots {
            let p = &self.programs[*pi];
            let label = match p.slot(slot_id) {
                Some(s) => format!(
                    "{}  {} {}-{}  ({} min, {} {})",
                    p.title, s.date, s.start_time, s.end_time, p.duration, p.price, p.currency
                ),
                None => p.title.clone(),
            };
            rows.push(ListItem::new(label));
        }
        if rows.is_empty() {
            let msg = if self.loading.is_some() {
                "loading..."
            } else {
                "(no open slots)"
            };
            rows.push(ListItem::new(msg));
        }
        let mut state = ListState::default();
        if !slots.is_empty() {
            state.select(Some(self.cursor.min(slots.len() - 1)));
        }
        let list = List::new(rows)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("mentor {} open slots", self.mentor_id)),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        frame.render_stateful_widget(list, chunks[0], &mut state);

        let mut lines = Vec::new();
        match self.flow.status() {
            BookingStatus::Idle => lines.push(Line::from("Up/Down choose  Enter select  Esc back")),
            BookingStatus::SlotSelected => {
                lines.push(Line::from(format!("note: {}_", self.note.buf)));
                lines.push(Line::from("Enter confirm  Esc cancel"));
            }
            BookingStatus::Confirming => lines.push(Line::from("booking...")),
            BookingStatus::Success { .. } => lines.push(Line::styled(
                "Booked! Refreshing slots...",
                Style::default().fg(Color::Green),
            )),
            BookingStatus::Error(msg) => {
                lines.push(Line::styled(msg.clone(), Style::default().fg(Color::Red)));
                lines.push(Line::from("Enter retry  Esc cancel"));
            }
        }
        if let Some(err) = &self.load_error {
            lines.push(Line::styled(err.clone(), Style::default().fg(Color::Red)));
        }
        let footer = Paragraph::new(lines).block(Block::default().borders(Borders::TOP));
        frame.render_widget(footer, chunks[1]);
    }
}
