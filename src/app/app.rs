use std::{io, time::Duration};

use anyhow::{Context, Result};
use chrono::Local;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};

use crate::{
    app::{NotificationCenter, TradeSimulator, price::PriceSource, ui},
    models::InputField,
};

const TICK_RATE: Duration = Duration::from_millis(100);

pub struct App<P: PriceSource> {
    simulator: TradeSimulator<P>,
    notifications: NotificationCenter,
    focus: InputField,
    portfolio_title: String,
}

impl<P: PriceSource> App<P> {
    pub fn new(
        simulator: TradeSimulator<P>,
        notifications: NotificationCenter,
        portfolio_title: String,
    ) -> Self {
        Self {
            simulator,
            notifications,
            focus: InputField::default(),
            portfolio_title,
        }
    }

    pub fn simulator(&self) -> &TradeSimulator<P> {
        &self.simulator
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn focus(&self) -> InputField {
        self.focus
    }

    pub fn portfolio_title(&self) -> &str {
        &self.portfolio_title
    }

    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_app(&mut terminal);

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn run_app<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            self.notifications.prune(Local::now());
            terminal
                .draw(|frame| ui::render(frame, self))
                .with_context(|| "Failed to draw dashboard")?;

            if !event::poll(TICK_RATE)? {
                continue;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if self.handle_key(key) {
                    return Ok(());
                }
            }
        }
    }

    /// Applies one key press. Returns true when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => return true,
            KeyCode::Char('c') if ctrl => return true,
            KeyCode::F(2) => self.buy(),
            KeyCode::Char('b') if ctrl => self.buy(),
            KeyCode::F(3) => self.sell(),
            KeyCode::Char('s') if ctrl => self.sell(),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = self.focus.next();
            }
            KeyCode::Backspace => {
                self.simulator.input_field_mut(self.focus).pop();
            }
            KeyCode::Char(c) if !ctrl => {
                self.simulator.input_field_mut(self.focus).push(c);
            }
            _ => {}
        }

        false
    }

    // Rejections are already surfaced as notifications.
    fn buy(&mut self) {
        if self.simulator.buy(&mut self.notifications).is_ok() {
            self.focus = InputField::Symbol;
        }
    }

    fn sell(&mut self) {
        if self.simulator.sell(&mut self.notifications).is_ok() {
            self.focus = InputField::Symbol;
        }
    }
}
