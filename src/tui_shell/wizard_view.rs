use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::blueprints;
use crate::form::{
    Attachment, EntityKind, FieldKind, FieldSpec, FieldValue, FormState, Lookup, SubmitTarget,
    Wizard, WizardError,
};
use crate::hydrate::Hydrator;
use crate::model::{Company, Identified};
use crate::remote::{EntityService, ListQuery, RemoteClient};
use crate::task::{ViewTask, fetch_both};

use super::Outcome;
use super::input::Input;

type Mounted = (Result<Option<Wizard>>, Result<Vec<Company>>);

fn submit_with<T>(wizard: &mut Wizard, target: &T) -> Result<String, WizardError>
where
    T: SubmitTarget,
    T::Record: Identified,
{
    let record = wizard.submit(target, |_| {})?;
    Ok(record.id().unwrap_or("-").to_string())
}

/// Text-like fields are edited through the input buffer.
fn is_typed(kind: &FieldKind) -> bool {
    matches!(
        kind,
        FieldKind::Text
            | FieldKind::TextArea
            | FieldKind::ItemList
            | FieldKind::File
            | FieldKind::Curriculum
    )
}

pub(super) struct WizardView {
    kind: EntityKind,
    wizard: Option<Wizard>,
    mount: Option<ViewTask<Mounted>>,
    companies: Vec<(String, String)>,
    focus: usize,
    option: usize,
    input: Input,
    error: Option<String>,
}

impl WizardView {
    /// Opens the wizard and starts the on-mount fetches (record for edit mode, company options).
    pub(super) fn open(client: Arc<RemoteClient>, kind: EntityKind, edit: Option<String>) -> Self {
        let arrays = client.config().array_encoding;
        let wizard = match edit {
            Some(_) => None,
            None => Some(Wizard::new(blueprints::blueprint(kind)).with_encoding(arrays)),
        };
        let needs_companies = blueprints::blueprint(kind)
            .fields()
            .any(|f| matches!(f.kind, FieldKind::Lookup(Lookup::Companies)));
        let mount = ViewTask::spawn(move |_| {
            fetch_both(
                || match edit.as_deref() {
                    Some(id) => Hydrator::load_kind(&client, kind, id)
                        .map(|w| Some(w.with_encoding(arrays))),
                    None => Ok(None),
                },
                || {
                    if needs_companies {
                        client
                            .companies()
                            .list(ListQuery { page: 1, limit: 100 })
                            .map(|p| p.items)
                    } else {
                        Ok(Vec::new())
                    }
                },
            )
        });
        let mut view = Self::ready(kind, wizard);
        view.mount = Some(mount);
        view
    }

    /// A view over an already built wizard, without background fetches.
    pub(super) fn ready(kind: EntityKind, wizard: Option<Wizard>) -> Self {
        let mut view = Self {
            kind,
            wizard,
            mount: None,
            companies: Vec::new(),
            focus: 0,
            option: 0,
            input: Input::default(),
            error: None,
        };
        view.sync_input();
        view
    }

    #[cfg(test)]
    pub(super) fn wizard(&self) -> Option<&Wizard> {
        self.wizard.as_ref()
    }

    #[cfg(test)]
    pub(super) fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(super) fn set_companies(&mut self, companies: &[Company]) {
        self.companies = companies
            .iter()
            .filter_map(|c| c.id().map(|id| (id.to_string(), c.company_name.clone())))
            .collect();
    }

    /// Picks up finished on-mount fetches.
    pub(super) fn poll(&mut self) {
        let Some(task) = &self.mount else {
            return;
        };
        let Some((record, companies)) = task.try_take() else {
            return;
        };
        self.mount = None;
        match record {
            Ok(Some(wizard)) => self.wizard = Some(wizard),
            Ok(None) => {}
            Err(err) => self.error = Some(format!("{:#}", err)),
        }
        match companies {
            Ok(list) => self.set_companies(&list),
            Err(err) => {
                if self.error.is_none() {
                    self.error = Some(format!("load companies: {:#}", err));
                }
            }
        }
        self.sync_input();
    }

    fn fields(&self) -> Vec<FieldSpec> {
        match &self.wizard {
            Some(w) => w.current().visible_fields(w.state()).copied().collect(),
            None => Vec::new(),
        }
    }

    fn focused(&self) -> Option<FieldSpec> {
        self.fields().get(self.focus).copied()
    }

    fn option_count(&self, spec: &FieldSpec) -> usize {
        match spec.kind {
            FieldKind::Lookup(Lookup::Companies) => self.companies.len(),
            FieldKind::Checkbox => 1,
            kind => kind.options().len(),
        }
    }

    fn sync_input(&mut self) {
        let Some(spec) = self.focused() else {
            self.input.clear();
            return;
        };
        let Some(w) = &self.wizard else {
            return;
        };
        match spec.kind {
            FieldKind::Text | FieldKind::TextArea => self.input.set(w.state().text(spec.key)),
            FieldKind::ItemList => self.input.set(w.state().list(spec.key).join(", ")),
            _ => self.input.clear(),
        }
        self.option = 0;
    }

    fn move_focus(&mut self, forward: bool) {
        let count = self.fields().len();
        if count == 0 {
            return;
        }
        self.focus = if forward {
            (self.focus + 1) % count
        } else {
            (self.focus + count - 1) % count
        };
        self.sync_input();
    }

    fn report(&mut self, result: Result<(), WizardError>) {
        self.error = result.err().map(|e| e.to_string());
    }

    /// Writes the buffer back into text and list fields.
    fn commit_input(&mut self, spec: FieldSpec) {
        if !matches!(
            spec.kind,
            FieldKind::Text | FieldKind::TextArea | FieldKind::ItemList
        ) {
            return;
        }
        let Some(w) = self.wizard.as_mut() else {
            return;
        };
        let result = w.set(spec.key, &self.input.buf);
        self.report(result);
    }

    fn choose(&mut self, spec: FieldSpec) {
        let Some(w) = self.wizard.as_mut() else {
            return;
        };
        let result = match spec.kind {
            FieldKind::Select(options) | FieldKind::Radio(options) => match options.get(self.option) {
                Some(v) => w.set(spec.key, v),
                None => Ok(()),
            },
            FieldKind::Lookup(Lookup::Companies) => match self.companies.get(self.option) {
                Some((id, _)) => w.set(spec.key, id),
                None => Ok(()),
            },
            FieldKind::MultiSelect { options, .. } | FieldKind::CheckboxGroup(options) => {
                match options.get(self.option) {
                    Some(v) => w.toggle(spec.key, v).map(|_| ()),
                    None => Ok(()),
                }
            }
            FieldKind::Checkbox => {
                let next = if w.state().flag(spec.key) { "false" } else { "true" };
                w.set(spec.key, next)
            }
            _ => Ok(()),
        };
        self.report(result);
    }

    /// Ctrl-O: attach the file whose path was typed.
    fn attach_typed(&mut self, spec: FieldSpec) {
        if !matches!(spec.kind, FieldKind::File) {
            return;
        }
        let path = self.input.take();
        let attachment = match Attachment::from_path(Path::new(path.trim())) {
            Ok(a) => a,
            Err(err) => {
                self.error = Some(format!("{:#}", err));
                return;
            }
        };
        if let Some(w) = self.wizard.as_mut() {
            let result = w.attach(spec.key, attachment);
            self.report(result);
        }
    }

    /// Ctrl-N adds a section, Ctrl-L a lesson to the last section; both titled from the buffer.
    fn edit_curriculum(&mut self, spec: FieldSpec, lesson: bool) {
        if !matches!(spec.kind, FieldKind::Curriculum) {
            return;
        }
        let title = self.input.take();
        let Some(w) = self.wizard.as_mut() else {
            return;
        };
        if !lesson {
            w.edit(|state| state.add_section(title.trim()));
            self.error = None;
            return;
        }
        let added = w.edit(|state| {
            let section_id = state.sections().last()?.id.clone();
            let lesson_id = state.add_lesson(&section_id)?;
            state.update_lesson(&section_id, &lesson_id, |l| {
                l.title = title.trim().to_string()
            });
            Some(())
        });
        self.error = added.is_none().then(|| "add a section first (Ctrl-N)".to_string());
    }

    fn next_step(&mut self) {
        let Some(w) = self.wizard.as_mut() else {
            return;
        };
        if w.is_final() {
            self.error = Some("final step: press Ctrl-S to submit".to_string());
            return;
        }
        let result = w.advance().map(|_| ());
        let moved = result.is_ok();
        self.report(result);
        if moved {
            self.focus = 0;
            self.sync_input();
        }
    }

    /// Esc: previous step, or leave the wizard from the first one.
    fn previous_step(&mut self) -> Outcome {
        let Some(w) = self.wizard.as_mut() else {
            return Outcome::Leave;
        };
        if w.step() == 0 {
            return Outcome::Leave;
        }
        w.back();
        self.error = None;
        self.focus = 0;
        self.sync_input();
        Outcome::Stay
    }

    pub(super) fn handle_key(&mut self, key: KeyEvent) -> Outcome {
        if self.wizard.is_none() {
            return match key.code {
                KeyCode::Esc => Outcome::Leave,
                _ => Outcome::Stay,
            };
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let focused = self.focused();

        match key.code {
            KeyCode::Char('s') if ctrl => return Outcome::Submit,
            KeyCode::Char('o') if ctrl => {
                if let Some(spec) = focused {
                    self.attach_typed(spec);
                }
            }
            KeyCode::Char('n') if ctrl => {
                if let Some(spec) = focused {
                    self.edit_curriculum(spec, false);
                }
            }
            KeyCode::Char('l') if ctrl => {
                if let Some(spec) = focused {
                    self.edit_curriculum(spec, true);
                }
            }
            KeyCode::Enter => self.next_step(),
            KeyCode::Esc => return self.previous_step(),
            KeyCode::Up | KeyCode::BackTab => self.move_focus(false),
            KeyCode::Down | KeyCode::Tab => self.move_focus(true),
            KeyCode::Left => match focused {
                Some(spec) if is_typed(&spec.kind) => self.input.move_left(),
                Some(_) => self.option = self.option.saturating_sub(1),
                None => {}
            },
            KeyCode::Right => match focused {
                Some(spec) if is_typed(&spec.kind) => self.input.move_right(),
                Some(spec) => {
                    let count = self.option_count(&spec);
                    self.option = (self.option + 1).min(count.saturating_sub(1));
                }
                None => {}
            },
            KeyCode::Char(' ') if focused.is_some_and(|s| !is_typed(&s.kind)) => {
                if let Some(spec) = focused {
                    self.choose(spec);
                }
            }
            KeyCode::Char(c) if !ctrl => {
                if let Some(spec) = focused.filter(|s| is_typed(&s.kind)) {
                    self.input.insert_char(c);
                    self.commit_input(spec);
                }
            }
            KeyCode::Backspace => {
                if let Some(spec) = focused.filter(|s| is_typed(&s.kind)) {
                    self.input.backspace();
                    self.commit_input(spec);
                }
            }
            KeyCode::Delete => {
                if let Some(spec) = focused.filter(|s| is_typed(&s.kind)) {
                    self.input.delete();
                    self.commit_input(spec);
                }
            }
            _ => {}
        }
        Outcome::Stay
    }

    /// Runs the submit; returns the confirmation message on success.
    pub(super) fn submit(&mut self, client: &RemoteClient) -> Option<String> {
        let w = self.wizard.as_mut()?;
        let editing = w.entity_id().is_some();
        let result = match self.kind {
            EntityKind::Job => submit_with(w, &client.jobs()),
            EntityKind::Internship => submit_with(w, &client.internships()),
            EntityKind::Course => submit_with(w, &client.courses()),
            EntityKind::Mentor => submit_with(w, &client.mentors()),
            EntityKind::Company => submit_with(w, &client.companies()),
        };
        match result {
            Ok(id) => {
                self.error = None;
                let verb = if editing { "Updated" } else { "Created" };
                Some(format!("{} {} {}", verb, self.kind, id))
            }
            Err(err) => {
                self.error = Some(err.to_string());
                None
            }
        }
    }

    fn company_name(&self, id: &str) -> Option<&str> {
        self.companies
            .iter()
            .find(|(cid, _)| cid == id)
            .map(|(_, name)| name.as_str())
    }

    fn value_lines(&self, spec: &FieldSpec, state: &FormState, focused: bool) -> Vec<Line<'static>> {
        let dim = Style::default().fg(Color::Gray);
        let pick = Style::default().fg(Color::Black).bg(Color::Cyan);
        let mut lines = Vec::new();
        match spec.kind {
            FieldKind::Text | FieldKind::TextArea | FieldKind::ItemList => {
                let shown = if focused {
                    format!("{}_", self.input.buf)
                } else {
                    match state.value(spec.key) {
                        Some(FieldValue::List(items)) => items.join(", "),
                        _ => state.text(spec.key).to_string(),
                    }
                };
                lines.push(Line::from(format!("    {}", shown)));
            }
            FieldKind::Select(options) | FieldKind::Radio(options) => {
                let current = state.text(spec.key);
                let mut spans = vec![Span::raw("    ")];
                for (i, o) in options.iter().enumerate() {
                    let mark = if *o == current { "(•) " } else { "( ) " };
                    let style = if focused && i == self.option { pick } else { Style::default() };
                    spans.push(Span::styled(format!("{}{}", mark, o), style));
                    spans.push(Span::raw("  "));
                }
                lines.push(Line::from(spans));
            }
            FieldKind::MultiSelect { options, .. } | FieldKind::CheckboxGroup(options) => {
                let selected = state.list(spec.key);
                let mut spans = vec![Span::raw("    ")];
                for (i, o) in options.iter().enumerate() {
                    let mark = if selected.iter().any(|s| s == o) { "[x] " } else { "[ ] " };
                    let style = if focused && i == self.option { pick } else { Style::default() };
                    spans.push(Span::styled(format!("{}{}", mark, o), style));
                    spans.push(Span::raw("  "));
                }
                lines.push(Line::from(spans));
            }
            FieldKind::Lookup(Lookup::Companies) => {
                let current = state.text(spec.key);
                let label = match self.company_name(current) {
                    Some(name) => format!("{} ({})", name, current),
                    None if current.is_empty() => "(none)".to_string(),
                    None => current.to_string(),
                };
                lines.push(Line::from(format!("    {}", label)));
                if focused {
                    if self.companies.is_empty() {
                        lines.push(Line::styled("    (no companies loaded)", dim));
                    }
                    let mut spans = vec![Span::raw("    ")];
                    for (i, (_, name)) in self.companies.iter().enumerate() {
                        let style = if i == self.option { pick } else { Style::default() };
                        spans.push(Span::styled(name.clone(), style));
                        spans.push(Span::raw("  "));
                    }
                    lines.push(Line::from(spans));
                }
            }
            FieldKind::Checkbox => {
                let mark = if state.flag(spec.key) { "[x]" } else { "[ ]" };
                lines.push(Line::from(format!("    {}", mark)));
            }
            FieldKind::File => {
                let name = state
                    .file(spec.key)
                    .map(|f| f.file_name.clone())
                    .unwrap_or_else(|| "(none)".to_string());
                lines.push(Line::from(format!("    {}", name)));
                if focused {
                    lines.push(Line::styled(format!("    path: {}_", self.input.buf), dim));
                }
            }
            FieldKind::Curriculum => {
                let sections = state.sections();
                if sections.is_empty() {
                    lines.push(Line::styled("    (no sections)", dim));
                }
                for (i, s) in sections.iter().enumerate() {
                    lines.push(Line::from(format!("    {}. {}", i + 1, s.title)));
                    for l in &s.lessons {
                        let title = if l.title.trim().is_empty() { "(untitled)" } else { l.title.as_str() };
                        lines.push(Line::from(format!("       - {} [{}]", title, l.kind)));
                    }
                }
                if focused {
                    lines.push(Line::styled(format!("    title: {}_", self.input.buf), dim));
                }
            }
        }
        lines
    }

    /// Read-only summary used by steps without fields (mentor review).
    fn summary_lines(w: &Wizard) -> Vec<Line<'static>> {
        let state = w.state();
        let mut lines = Vec::new();
        for step in &w.blueprint().steps {
            if step.fields.is_empty() {
                continue;
            }
            lines.push(Line::styled(
                step.title.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ));
            for f in step.visible_fields(state) {
                let value = match state.value(f.key) {
                    Some(FieldValue::Text(s)) => s.clone(),
                    Some(FieldValue::List(items)) => items.join(", "),
                    Some(FieldValue::Flag(b)) => (if *b { "yes" } else { "no" }).to_string(),
                    Some(FieldValue::File(Some(a))) => a.file_name.clone(),
                    Some(FieldValue::Sections(s)) => format!("{} section(s)", s.len()),
                    Some(FieldValue::File(None)) | None => String::new(),
                };
                lines.push(Line::from(format!("  {}: {}", f.label, value)));
            }
        }
        lines
    }

    pub(super) fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(4)])
            .split(area);

        let Some(w) = &self.wizard else {
            let msg = match &self.error {
                Some(err) => Line::styled(err.clone(), Style::default().fg(Color::Red)),
                None => Line::from("loading..."),
            };
            let body = Paragraph::new(vec![msg, Line::from("Esc: back")])
                .block(Block::default().borders(Borders::ALL).title(format!("{} wizard", self.kind)));
            frame.render_widget(body, area);
            return;
        };

        let blueprint = w.blueprint();
        let mut steps = Vec::new();
        for (i, step) in blueprint.steps.iter().enumerate() {
            let style = if i == w.step() {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else if i <= w.reached() {
                Style::default()
            } else {
                Style::default().fg(Color::DarkGray)
            };
            steps.push(Span::styled(format!("{}. {}", i + 1, step.title), style));
            steps.push(Span::raw("  "));
        }
        let mode = if w.entity_id().is_some() { "Edit" } else { "New" };
        let header = Paragraph::new(vec![
            Line::from(format!(
                "{} {}  step {}/{}",
                mode,
                blueprint.title,
                w.step() + 1,
                blueprint.steps.len()
            )),
            Line::from(steps),
        ])
        .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(header, chunks[0]);

        let state = w.state();
        let fields = self.fields();
        let mut lines = Vec::new();
        if fields.is_empty() {
            lines.extend(Self::summary_lines(w));
        }
        for (i, spec) in fields.iter().enumerate() {
            let focused = i == self.focus;
            let required = spec.rule.applies(state).is_some();
            let label_style = if focused {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            lines.push(Line::from(vec![
                Span::raw(if focused { "> " } else { "  " }),
                Span::styled(spec.label.to_string(), label_style),
                Span::raw(if required { " *" } else { "" }),
            ]));
            lines.extend(self.value_lines(spec, state, focused));
            if let Some(err) = state.error(spec.key) {
                lines.push(Line::styled(
                    format!("    {}", err),
                    Style::default().fg(Color::Red),
                ));
            }
        }
        let body = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title(w.current().title));
        frame.render_widget(body, chunks[1]);

        let mut footer = vec![Line::styled(
            "Enter next  Esc back  Ctrl-S submit  Up/Down field  Left/Right option  Space choose",
            Style::default().fg(Color::Gray),
        )];
        footer.push(Line::styled(
            "Ctrl-O attach typed path  Ctrl-N add section  Ctrl-L add lesson",
            Style::default().fg(Color::Gray),
        ));
        if state.is_submitting() {
            footer.push(Line::from("submitting..."));
        } else if let Some(err) = &self.error {
            footer.push(Line::styled(err.clone(), Style::default().fg(Color::Red)));
        }
        frame.render_widget(Paragraph::new(footer), chunks[2]);
    }
}
