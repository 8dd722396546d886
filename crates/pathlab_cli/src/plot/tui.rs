//! Interactive terminal viewer.

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use tracing::debug;

use super::figure::Figure;
use super::render::draw_figure;
use crate::error::Result;

/// Selection and exit state, independent of any terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerState {
    selected: usize,
    n_figures: usize,
    should_quit: bool,
}

impl ViewerState {
    /// State showing the first of `n_figures`.
    pub fn new(n_figures: usize) -> Self {
        Self {
            selected: 0,
            n_figures,
            should_quit: false,
        }
    }

    /// Index of the figure on screen.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Whether the viewer should close.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// `1`..`9` select a figure, Tab/Right/Left cycle, `q`/Esc quit.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c @ '1'..='9') => {
                let index = (c as usize) - ('1' as usize);
                if index < self.n_figures {
                    self.selected = index;
                }
            }
            KeyCode::Tab | KeyCode::Right => {
                if self.n_figures > 0 {
                    self.selected = (self.selected + 1) % self.n_figures;
                }
            }
            KeyCode::BackTab | KeyCode::Left => {
                if self.n_figures > 0 {
                    self.selected = (self.selected + self.n_figures - 1) % self.n_figures;
                }
            }
            _ => {}
        }
    }
}

/// Full-screen viewer over a set of figures.
pub struct FigureViewer {
    figures: Vec<Figure>,
    state: ViewerState,
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl FigureViewer {
    /// Switch the terminal to raw mode on the alternate screen.
    pub fn new(figures: Vec<Figure>) -> Result<Self> {
        enable_raw_mode()?;
        let terminal = restore_on_error(Self::enter_alternate_screen(), || {
            let _ = disable_raw_mode();
        })?;

        let state = ViewerState::new(figures.len());
        Ok(Self {
            figures,
            state,
            terminal,
        })
    }

    fn enter_alternate_screen() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        Terminal::new(CrosstermBackend::new(stdout))
    }

    /// Event loop until the user quits.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let figures = &self.figures;
            let state = &self.state;
            self.terminal.draw(|frame| draw(frame, figures, state))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.state.handle_key(key.code);
                        debug!(selected = self.state.selected(), "viewer key");
                    }
                }
            }

            if self.state.should_quit() {
                break;
            }
        }
        Ok(())
    }
}

impl Drop for FigureViewer {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}

/// Run `restore` when `result` is an error, then pass it through.
fn restore_on_error<T>(result: io::Result<T>, restore: impl FnOnce()) -> io::Result<T> {
    result.map_err(|e| {
        restore();
        e
    })
}

/// Selected figure above a key-binding footer.
pub fn draw(frame: &mut Frame, figures: &[Figure], state: &ViewerState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(frame.size());

    if let Some(figure) = figures.get(state.selected()) {
        draw_figure(frame, chunks[0], figure);
    }

    let keys: Vec<String> = figures
        .iter()
        .enumerate()
        .map(|(i, f)| format!("[{}]{}", i + 1, f.title))
        .collect();
    let footer = Paragraph::new(format!(" {} | [Tab]Next | [q]Quit ", keys.join(" ")))
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, chunks[1]);
}
