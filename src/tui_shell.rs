use std::io::{self, IsTerminal};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::form::EntityKind;
use crate::profile::ProfileStore;
use crate::remote::RemoteClient;
use crate::tui::TuiRunOptions;

mod booking_view;
mod input;
mod wizard_view;

use booking_view::BookingView;
use input::Input;
use wizard_view::WizardView;

/// What a screen asks the shell to do after a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Outcome {
    Stay,
    Leave,
    Submit,
    Confirm,
}

enum Screen {
    Menu,
    MentorPrompt,
    Wizard(Box<WizardView>),
    Booking(Box<BookingView>),
}

const MENU: [&str; 6] = [
    "New job",
    "New internship",
    "New course",
    "New mentor",
    "New company",
    "Book a mentor session",
];

struct App {
    client: Arc<RemoteClient>,
    screen: Screen,
    menu: usize,
    prompt: Input,
    notice: Option<String>,
    quit: bool,
}

impl App {
    fn new(client: RemoteClient, opts: TuiRunOptions) -> Self {
        let client = Arc::new(client);
        let screen = match (opts.wizard, opts.mentor) {
            (Some(kind), _) => Screen::Wizard(Box::new(WizardView::open(
                client.clone(),
                kind,
                opts.edit,
            ))),
            (None, Some(mentor)) => {
                Screen::Booking(Box::new(BookingView::open(client.clone(), mentor)))
            }
            (None, None) => Screen::Menu,
        };
        Self {
            client,
            screen,
            menu: 0,
            prompt: Input::default(),
            notice: None,
            quit: false,
        }
    }

    fn identity(&self) -> String {
        let session = self.client.session();
        match &session.user {
            Some(u) => format!("{} ({})", u.full_name, u.role),
            None if session.token().is_some() => "token".to_string(),
            None => "anonymous".to_string(),
        }
    }

    fn tick(&mut self) {
        match &mut self.screen {
            Screen::Wizard(view) => view.poll(),
            Screen::Booking(view) => view.poll(Instant::now()),
            Screen::Menu | Screen::MentorPrompt => {}
        }
    }

    fn open_menu_item(&mut self) {
        match EntityKind::ALL.get(self.menu) {
            Some(kind) => {
                self.screen = Screen::Wizard(Box::new(WizardView::open(
                    self.client.clone(),
                    *kind,
                    None,
                )));
            }
            None => {
                self.prompt.clear();
                self.screen = Screen::MentorPrompt;
            }
        }
        self.notice = None;
    }

    fn menu_key(&mut self, key: KeyEvent) -> Outcome {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Up => self.menu = self.menu.saturating_sub(1),
            KeyCode::Down => self.menu = (self.menu + 1).min(MENU.len() - 1),
            KeyCode::Enter => self.open_menu_item(),
            _ => {}
        }
        Outcome::Stay
    }

    fn prompt_key(&mut self, key: KeyEvent) -> Outcome {
        match key.code {
            KeyCode::Esc => return Outcome::Leave,
            KeyCode::Enter => {
                let mentor = self.prompt.take();
                let mentor = mentor.trim();
                if !mentor.is_empty() {
                    self.screen = Screen::Booking(Box::new(BookingView::open(
                        self.client.clone(),
                        mentor.to_string(),
                    )));
                }
            }
            KeyCode::Char(c) => self.prompt.insert_char(c),
            KeyCode::Backspace => self.prompt.backspace(),
            _ => {}
        }
        Outcome::Stay
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit = true;
            return;
        }

        let outcome = if let Screen::Wizard(view) = &mut self.screen {
            view.handle_key(key)
        } else if let Screen::Booking(view) = &mut self.screen {
            view.handle_key(key)
        } else if matches!(self.screen, Screen::Menu) {
            self.menu_key(key)
        } else {
            self.prompt_key(key)
        };

        match outcome {
            Outcome::Stay => {}
            Outcome::Leave => self.screen = Screen::Menu,
            Outcome::Submit => {
                if let Screen::Wizard(view) = &mut self.screen {
                    if let Some(done) = view.submit(&self.client) {
                        self.notice = Some(done);
                        self.screen = Screen::Menu;
                    }
                }
            }
            Outcome::Confirm => {
                if let Screen::Booking(view) = &mut self.screen {
                    view.confirm(self.client.as_ref(), Instant::now());
                }
            }
        }
    }
}

pub(crate) fn run(profile: &ProfileStore, opts: TuiRunOptions) -> Result<()> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        anyhow::bail!("TUI requires an interactive terminal (TTY)");
    }
    let (cfg, session) = profile.effective()?;
    let client = RemoteClient::new(cfg, session)?;

    let mut stdout = io::stdout();
    enable_raw_mode().context("enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().ok();

    let mut app = App::new(client, opts);
    let res = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    res
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        app.tick();
        terminal.draw(|f| draw(f, app)).context("draw")?;
        if app.quit {
            return Ok(());
        }

        if event::poll(Duration::from_millis(50)).context("poll")? {
            match event::read().context("read event")? {
                Event::Key(k) if k.kind == KeyEventKind::Press => app.handle_key(k),
                _ => {}
            }
        }
    }
}

fn draw(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let header = Paragraph::new(Line::from(vec![
        Span::styled("Empedia", Style::default().fg(Color::Black).bg(Color::White)),
        Span::raw("  "),
        Span::raw(app.client.config().base_url.clone()),
        Span::raw("  "),
        Span::styled(app.identity(), Style::default().fg(Color::Green)),
    ]))
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    match &app.screen {
        Screen::Menu => {
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(2)])
                .split(chunks[1]);
            let rows: Vec<ListItem> = MENU.iter().map(|m| ListItem::new(*m)).collect();
            let mut state = ListState::default();
            state.select(Some(app.menu));
            let list = List::new(rows)
                .block(Block::default().borders(Borders::ALL).title("menu (Enter: open; q: quit)"))
                .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
            frame.render_stateful_widget(list, parts[0], &mut state);
            if let Some(notice) = &app.notice {
                frame.render_widget(
                    Paragraph::new(Line::styled(notice.clone(), Style::default().fg(Color::Green))),
                    parts[1],
                );
            }
        }
        Screen::MentorPrompt => {
            let prompt = Paragraph::new(vec![
                Line::from(format!("mentor id: {}_", app.prompt.buf)),
                Line::styled("Enter: open  Esc: back", Style::default().fg(Color::Gray)),
            ])
            .block(Block::default().borders(Borders::ALL).title("book a session"));
            frame.render_widget(prompt, chunks[1]);
        }
        Screen::Wizard(view) => view.render(frame, chunks[1]),
        Screen::Booking(view) => view.render(frame, chunks[1]),
    }
}

#[cfg(test)]
#[path = "tests/tui_shell_tests.rs"]
mod tests;
