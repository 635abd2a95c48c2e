pub mod widgets;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph};
use ratatui::DefaultTerminal;
use tracing::debug;

use crate::color::{
    format_color, is_valid_hex_color, is_valid_incomplete_hsl, is_valid_incomplete_oklch,
    parse_color_string, ColorFormat,
};
use crate::config::Config;
use crate::pipeline::contrast::{ContrastFilter, ContrastGrid, Guideline};
use crate::pipeline::generate::{generate_color_palette, random_seed, Palette};

use widgets::{ContrastGridWidget, PaletteWidget};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Palette,
    Contrast,
}

/// State for the interactive TUI application.
pub struct TuiApp {
    pub seed: String,
    pub palette: Palette,
    pub grid: ContrastGrid,
    pub format: ColorFormat,
    pub guideline: Guideline,
    pub filter: ContrastFilter,
    pub view: View,
    /// Focused swatch, if any.
    pub focused: Option<usize>,
    /// Text being typed, while the seed input is open.
    pub input: Option<String>,
    pub should_quit: bool,
}

impl TuiApp {
    pub fn new(seed: &str, config: &Config) -> Self {
        let palette = generate_color_palette(seed);
        let grid = ContrastGrid::new(&palette, config.guideline);
        Self {
            seed: seed.to_string(),
            palette,
            grid,
            format: config.format,
            guideline: config.guideline,
            filter: config.filter,
            view: View::Palette,
            focused: None,
            input: None,
            should_quit: false,
        }
    }

    /// Replace the seed and regenerate everything derived from it.
    pub fn set_seed(&mut self, seed: &str) {
        debug!(seed, "new seed");
        self.seed = seed.to_string();
        self.palette = generate_color_palette(seed);
        self.grid = ContrastGrid::new(&self.palette, self.guideline);
    }

    pub fn set_guideline(&mut self, guideline: Guideline) {
        self.guideline = guideline;
        self.grid = ContrastGrid::new(&self.palette, guideline);
    }

    pub fn focus_next(&mut self) {
        let len = self.palette.len();
        self.focused = Some(match self.focused {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        });
    }

    pub fn focus_prev(&mut self) {
        let last = self.palette.len() - 1;
        self.focused = Some(match self.focused {
            Some(i) if i > 0 => i - 1,
            _ => last,
        });
    }

    pub fn focus_first(&mut self) {
        self.focused = Some(0);
    }

    pub fn focus_last(&mut self) {
        self.focused = Some(self.palette.len() - 1);
    }

    /// Whether the text being typed looks right for the active notation.
    pub fn input_is_valid(&self) -> bool {
        let Some(input) = &self.input else {
            return true;
        };
        match self.format {
            ColorFormat::Hex => is_valid_hex_color(input.trim()),
            ColorFormat::Hsl => is_valid_incomplete_hsl(input),
            ColorFormat::Oklch => is_valid_incomplete_oklch(input),
        }
    }

    /// Open the input prefilled with the seed in the active notation.
    pub fn start_editing(&mut self) {
        self.input = Some(format_color(&self.seed, self.format));
    }

    /// Apply the typed text as the seed as soon as it parses.
    fn apply_input(&mut self) {
        let Some(input) = &self.input else {
            return;
        };
        let parsed = parse_color_string(input);
        if is_valid_hex_color(&parsed) && parsed != self.seed {
            self.set_seed(&parsed);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if let Some(input) = self.input.as_mut() {
            match key.code {
                KeyCode::Esc | KeyCode::Enter => self.input = None,
                KeyCode::Backspace => {
                    input.pop();
                    self.apply_input();
                }
                KeyCode::Char(c) => {
                    input.push(c);
                    self.apply_input();
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Right | KeyCode::Char('l') => self.focus_next(),
            KeyCode::Left | KeyCode::Char('h') => self.focus_prev(),
            KeyCode::Home => self.focus_first(),
            KeyCode::End => self.focus_last(),
            KeyCode::Char('e') | KeyCode::Char('/') => self.start_editing(),
            KeyCode::Char('f') => self.format = self.format.next(),
            KeyCode::Char('g') => self.set_guideline(match self.guideline {
                Guideline::Apca => Guideline::Wcag2,
                Guideline::Wcag2 => Guideline::Apca,
            }),
            KeyCode::Char('m') => self.filter = self.filter.next(),
            KeyCode::Char('c') | KeyCode::Tab => {
                self.view = match self.view {
                    View::Palette => View::Contrast,
                    View::Contrast => View::Palette,
                }
            }
            KeyCode::Char('r') => {
                let seed = random_seed(&mut rand::rng());
                self.set_seed(&seed);
            }
            KeyCode::Enter => {
                if let Some(i) = self.focused {
                    let color = self.palette[i].color.clone();
                    self.set_seed(&color);
                }
            }
            _ => {}
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let [header, input, body, help] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(
            Paragraph::new(format!(
                " palettor  seed {}  format {}  guideline {}",
                self.seed,
                self.format.label(),
                self.guideline
            )),
            header,
        );

        let (text, style) = match &self.input {
            Some(text) if self.input_is_valid() => (text.clone(), Style::default().fg(Color::Green)),
            Some(text) => (text.clone(), Style::default().fg(Color::Red)),
            None => (format_color(&self.seed, self.format), Style::default()),
        };
        frame.render_widget(
            Paragraph::new(text)
                .style(style)
                .block(Block::bordered().title("Seed")),
            input,
        );

        match self.view {
            View::Palette => frame.render_widget(
                PaletteWidget::new(&self.palette, self.format, self.guideline, self.focused),
                body,
            ),
            View::Contrast => {
                frame.render_widget(ContrastGridWidget::new(&self.grid, self.filter), body)
            }
        }

        frame.render_widget(
            Paragraph::new(
                " ←/→ focus  enter use swatch  e edit  f format  g guideline  m filter  c grid  r random  q quit",
            )
            .style(Style::default().fg(Color::DarkGray)),
            help,
        );
    }

    fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal
                .draw(|frame| self.draw(frame))
                .context("failed to draw frame")?;
            if let Event::Key(key) = event::read().context("failed to read terminal event")? {
                self.handle_key(key);
            }
        }
        Ok(())
    }
}

/// Launch the TUI application.
pub fn run(mut app: TuiApp) -> Result<()> {
    let mut terminal = ratatui::try_init().context("failed to initialize terminal")?;
    let result = app.event_loop(&mut terminal);
    ratatui::try_restore().context("failed to restore terminal")?;
    result
}
