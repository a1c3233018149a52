//! Ratatui implementation of the `Presenter` trait.
//!
//! Rendering and key handling are kept apart: [`ScreenState::handle_key`] is a
//! pure mapping from a key press to an optional [`UserAction`], and the draw
//! functions only read state, so both can be exercised without a terminal.

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use questionnaire::{CompletedAnswers, Presenter, QuestionView, Questionnaire, UserAction};
use ratatui::{
    Frame, Terminal,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::CrosstermBackend,
    style::{Color, Style, Stylize},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::io::{self, Stdout};
use thiserror::Error;

/// Error type for the Ratatui presenter.
#[derive(Debug, Error)]
pub enum RatatuiError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The presenter was asked to render before `begin` set up the terminal.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub text: Color,
    pub highlight: Color,
    pub selected: Color,
    pub disabled: Color,
    pub error: Color,
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Yellow,
            secondary: Color::LightYellow,
            text: Color::White,
            highlight: Color::Cyan,
            selected: Color::Green,
            disabled: Color::DarkGray,
            error: Color::Red,
            border: Color::Gray,
        }
    }
}

/// Which part of the screen receives Enter / Space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The option list; Enter selects the option under the cursor.
    Options,
    /// The Previous button.
    Back,
    /// The Next / Submit button.
    Forward,
}

/// Ratatui-based TUI presenter.
///
/// The terminal is put into raw mode / alternate screen in `begin` and
/// restored in `end`, which the session calls on every exit path.
pub struct RatatuiPresenter {
    /// Title shown at the top of the screen. Overridden by the questionnaire's own title.
    title: String,
    theme: Theme,
    terminal: Option<Terminal<CrosstermBackend<Stdout>>>,
    screen: ScreenState,
}

impl Default for RatatuiPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RatatuiPresenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RatatuiPresenter")
            .field("title", &self.title)
            .field("theme", &self.theme)
            .field("active", &self.terminal.is_some())
            .finish()
    }
}

impl RatatuiPresenter {
    /// Create a new Ratatui presenter with default settings.
    pub fn new() -> Self {
        Self {
            title: "Questionnaire".to_string(),
            theme: Theme::default(),
            terminal: None,
            screen: ScreenState::default(),
        }
    }

    /// Set the fallback title shown at the top of the screen.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set a custom color theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, RatatuiError> {
        enable_raw_mode()?;
        undo_on_error(Self::enter_alternate_screen(), disable_raw_mode)
    }

    fn enter_alternate_screen() -> Result<Terminal<CrosstermBackend<Stdout>>, RatatuiError> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn restore_terminal(
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<(), RatatuiError> {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn terminal(&mut self) -> Result<&mut Terminal<CrosstermBackend<Stdout>>, RatatuiError> {
        self.terminal
            .as_mut()
            .ok_or_else(|| RatatuiError::Terminal("presenter used before begin()".to_string()))
    }
}

/// Run `undo` if `result` is an error. `end` only restores a terminal that was
/// fully set up, so a half-finished setup has to clean up after itself.
fn undo_on_error<T>(
    result: Result<T, RatatuiError>,
    undo: impl FnOnce() -> io::Result<()>,
) -> Result<T, RatatuiError> {
    if result.is_err() {
        let _ = undo();
    }
    result
}

/// Screen-local state that is not part of the questionnaire itself.
#[derive(Debug, Clone)]
struct ScreenState {
    title: String,
    prelude: Option<String>,
    /// Option under the cursor.
    cursor: usize,
    focus: Focus,
    /// Position the cursor was last synced to; `None` before the first render.
    synced_position: Option<usize>,
    /// Local hint, e.g. when the disabled forward button is pressed.
    hint: Option<String>,
}

impl Default for ScreenState {
    fn default() -> Self {
        Self {
            title: String::new(),
            prelude: None,
            cursor: 0,
            focus: Focus::Options,
            synced_position: None,
            hint: None,
        }
    }
}

const ANSWER_REQUIRED: &str = "Select an option first";

impl ScreenState {
    /// Move the cursor onto the recorded answer when a new question comes on screen.
    fn sync(&mut self, view: &QuestionView<'_>) {
        if self.synced_position != Some(view.position) {
            self.cursor = view.selected_index().unwrap_or(0);
            self.focus = Focus::Options;
            self.hint = None;
            self.synced_position = Some(view.position);
        }
    }

    /// Map a key press to a user action. Returns `None` for keys that only
    /// change screen-local state (cursor, focus) or are ignored.
    fn handle_key(&mut self, key: KeyCode, view: &QuestionView<'_>) -> Option<UserAction> {
        let option_count = view.question.options().len();
        self.hint = None;

        match key {
            KeyCode::Esc | KeyCode::Char('q') => Some(UserAction::Quit),
            KeyCode::Up | KeyCode::Char('k') => {
                self.focus = Focus::Options;
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.focus = Focus::Options;
                if self.cursor + 1 < option_count {
                    self.cursor += 1;
                }
                None
            }
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Options => Focus::Back,
                    Focus::Back => Focus::Forward,
                    Focus::Forward => Focus::Options,
                };
                None
            }
            KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Options => Focus::Forward,
                    Focus::Back => Focus::Options,
                    Focus::Forward => Focus::Back,
                };
                None
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if index < option_count {
                    self.cursor = index;
                    Some(UserAction::Select(index))
                } else {
                    None
                }
            }
            KeyCode::Left | KeyCode::Char('p') => self.back(view),
            KeyCode::Right | KeyCode::Char('n') => self.forward(view),
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Options => Some(UserAction::Select(self.cursor)),
                Focus::Back => self.back(view),
                Focus::Forward => self.forward(view),
            },
            _ => None,
        }
    }

    fn back(&self, view: &QuestionView<'_>) -> Option<UserAction> {
        view.can_go_back().then_some(UserAction::Previous)
    }

    /// The forward button is disabled while the question is unanswered.
    fn forward(&mut self, view: &QuestionView<'_>) -> Option<UserAction> {
        if view.can_go_forward() {
            Some(UserAction::Next)
        } else {
            self.hint = Some(ANSWER_REQUIRED.to_string());
            None
        }
    }
}

impl Presenter for RatatuiPresenter {
    type Error = RatatuiError;

    fn begin(&mut self, questionnaire: &Questionnaire) -> Result<(), Self::Error> {
        self.screen = ScreenState {
            title: questionnaire
                .title()
                .map_or_else(|| self.title.clone(), str::to_string),
            prelude: questionnaire.prelude().map(str::to_string),
            ..ScreenState::default()
        };
        self.terminal = Some(Self::setup_terminal()?);
        Ok(())
    }

    fn next_action(
        &mut self,
        view: &QuestionView<'_>,
        notice: Option<&str>,
    ) -> Result<UserAction, Self::Error> {
        self.screen.sync(view);
        let mut notice = notice.map(str::to_string);

        loop {
            let theme = self.theme.clone();
            let screen = self.screen.clone();
            let message = screen.hint.clone().or_else(|| notice.clone());
            self.terminal()?.draw(|frame| {
                draw_question(frame, &theme, &screen, view, message.as_deref());
            })?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                notice = None;
                if let Some(action) = self.screen.handle_key(key.code, view) {
                    return Ok(action);
                }
            }
        }
    }

    fn finish(
        &mut self,
        questionnaire: &Questionnaire,
        answers: &CompletedAnswers,
    ) -> Result<(), Self::Error> {
        let theme = self.theme.clone();
        let epilogue = questionnaire.epilogue().map(str::to_string);

        loop {
            self.terminal()?.draw(|frame| {
                draw_completion(frame, &theme, epilogue.as_deref(), answers);
            })?;

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press
                    && matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q'))
                {
                    return Ok(());
                }
            }
        }
    }

    fn end(&mut self) -> Result<(), Self::Error> {
        if let Some(mut terminal) = self.terminal.take() {
            Self::restore_terminal(&mut terminal)?;
        }
        Ok(())
    }
}

fn draw_question(
    frame: &mut Frame,
    theme: &Theme,
    screen: &ScreenState,
    view: &QuestionView<'_>,
    message: Option<&str>,
) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(2), // Progress bar
            Constraint::Min(8),    // Content
            Constraint::Length(3), // Buttons
            Constraint::Length(3), // Help
        ])
        .split(area);

    let header_text = match &screen.prelude {
        Some(prelude) => format!("{}\n{}", screen.title, prelude),
        None => screen.title.clone(),
    };
    let header = Paragraph::new(header_text)
        .style(Style::default().fg(theme.primary).bold())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(theme.border)),
        );
    frame.render_widget(header, chunks[0]);

    draw_progress(frame, theme, view, chunks[1]);

    let content_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Question text
            Constraint::Min(3),    // Options
            Constraint::Length(1), // Notice
        ])
        .split(chunks[2]);

    let prompt = Paragraph::new(view.question.text().to_string())
        .style(Style::default().fg(theme.text).bold())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary))
                .title(" Question ")
                .title_style(Style::default().fg(theme.highlight)),
        );
    frame.render_widget(prompt, content_chunks[0]);

    let selected = view.selected_index();
    let items: Vec<ListItem> = view
        .question
        .options()
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let marker = if selected == Some(i) { "●" } else { "○" };
            let style = if selected == Some(i) {
                Style::default().fg(theme.selected).bold()
            } else if i == screen.cursor && screen.focus == Focus::Options {
                Style::default().fg(theme.highlight)
            } else {
                Style::default().fg(theme.text)
            };
            ListItem::new(format!(" {} {}. {}", marker, i + 1, option)).style(style)
        })
        .collect();

    let options_border = if screen.focus == Focus::Options {
        theme.highlight
    } else {
        theme.border
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(options_border))
                .title(" Options ")
                .title_style(Style::default().fg(theme.secondary)),
        )
        .highlight_symbol("► ");

    let mut list_state = ListState::default();
    if screen.focus == Focus::Options {
        list_state.select(Some(screen.cursor));
    }
    frame.render_stateful_widget(list, content_chunks[1], &mut list_state);

    if let Some(message) = message {
        let notice = Paragraph::new(message.to_string())
            .style(Style::default().fg(theme.error).bold())
            .alignment(Alignment::Center);
        frame.render_widget(notice, content_chunks[2]);
    }

    draw_buttons(frame, theme, screen, view, chunks[3]);

    let help = Paragraph::new(
        "↑/↓: Move  Enter/Space: Select  ←/p: Previous  →/n: Next  Tab: Buttons  Esc: Quit",
    )
    .style(Style::default().fg(theme.border))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme.border)),
    );
    frame.render_widget(help, chunks[4]);
}

fn draw_progress(frame: &mut Frame, theme: &Theme, view: &QuestionView<'_>, area: Rect) {
    let (current, total) = view.progress();
    let progress_text = format!(" {} / {} ", current, total);

    let bar_width = area.width.saturating_sub(2);
    let text_width = progress_text.len() as u16;
    let ratio = current as f32 / total as f32;
    let filled_width = (ratio * bar_width as f32) as u16;
    let bar_x = area.x + 1;

    let track = "─".repeat(bar_width as usize);
    frame.render_widget(
        Paragraph::new(track).style(Style::default().fg(theme.border)),
        Rect::new(bar_x, area.y, bar_width, 1),
    );

    if filled_width > 0 {
        let filled = "━".repeat(filled_width as usize);
        frame.render_widget(
            Paragraph::new(filled).style(Style::default().fg(theme.primary)),
            Rect::new(bar_x, area.y, filled_width, 1),
        );
    }

    if area.height > 1 {
        let text_x = bar_x + bar_width.saturating_sub(text_width) / 2;
        frame.render_widget(
            Paragraph::new(progress_text).style(Style::default().fg(theme.secondary)),
            Rect::new(text_x, area.y + 1, text_width.min(bar_width), 1),
        );
    }
}

fn draw_buttons(
    frame: &mut Frame,
    theme: &Theme,
    screen: &ScreenState,
    view: &QuestionView<'_>,
    area: Rect,
) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let button = |label: &str, enabled: bool, focused: bool, alignment: Alignment| {
        let color = if !enabled {
            theme.disabled
        } else if focused {
            theme.highlight
        } else {
            theme.primary
        };
        let style = if focused && enabled {
            Style::default().fg(color).bold()
        } else {
            Style::default().fg(color)
        };
        Paragraph::new(format!("[ {} ]", label))
            .style(style)
            .alignment(alignment)
    };

    frame.render_widget(
        button(
            "Previous",
            view.can_go_back(),
            screen.focus == Focus::Back,
            Alignment::Left,
        ),
        halves[0],
    );
    frame.render_widget(
        button(
            view.forward_label(),
            view.can_go_forward(),
            screen.focus == Focus::Forward,
            Alignment::Right,
        ),
        halves[1],
    );
}

fn draw_completion(
    frame: &mut Frame,
    theme: &Theme,
    epilogue: Option<&str>,
    answers: &CompletedAnswers,
) {
    let area = frame.area();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.selected))
        .title(" Submitted ")
        .title_style(Style::default().fg(theme.selected).bold());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        epilogue
            .unwrap_or("All questions answered!")
            .to_string(),
        String::new(),
    ];
    for entry in answers.entries() {
        lines.push(format!("{}  {}", entry.question, entry.answer));
    }
    lines.push(String::new());
    lines.push("Press Enter to finish.".to_string());

    let paragraph = Paragraph::new(lines.join("\n"))
        .style(Style::default().fg(theme.text))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    let centered = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Min(3),
            Constraint::Percentage(25),
        ])
        .split(inner);

    frame.render_widget(paragraph, centered[1]);
}
