//! Interactive terminal front end
//!
//! [`TerminalSink`] keeps the two display lines plus a status line and
//! lays them out as plain text rows above the keypad legend. The session
//! loop redraws those rows after every key.

use crate::error::CliResult;
use crate::input::{handle_key, KeyCommand};
use crossterm::{
    cursor,
    event::{self, Event},
    execute, queue,
    style::Print,
    terminal::{self, ClearType},
};
use pocketcalc::config::CalculatorConfig;
use pocketcalc::core::Outcome;
use pocketcalc::display::DisplaySink;
use pocketcalc::driver::Driver;
use pocketcalc::input::Keypad;
use std::io::Write;
use tracing::{debug, info};

const HELP: &str = "0-9 . + - * / %  Enter/= equals  Backspace delete  c clear  q/Esc quit";

/// Screen model for the terminal
#[derive(Debug, Clone, Default)]
pub struct TerminalSink {
    expression: String,
    display: String,
    status: String,
    width: usize,
}

impl TerminalSink {
    /// Creates a sink whose display box is `width` characters wide
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    /// Sets the line shown under the keypad
    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = text.into();
    }

    /// Current status line
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Lays the screen out as text rows
    #[must_use]
    pub fn rows(&self, keypad: &Keypad) -> Vec<String> {
        let inner = self
            .width
            .max(self.expression.chars().count())
            .max(self.display.chars().count());
        let border = "─".repeat(inner + 2);

        let mut rows = vec![
            format!("┌{border}┐"),
            format!("│ {:>inner$} │", self.expression),
            format!("│ {:>inner$} │", self.display),
            format!("└{border}┘"),
        ];
        rows.extend(keypad_rows(keypad));
        rows.push(self.status.clone());
        rows.push(HELP.to_string());
        rows
    }

    /// Writes the screen to a terminal
    pub fn draw<W: Write>(&self, out: &mut W, keypad: &Keypad) -> std::io::Result<()> {
        queue!(out, cursor::MoveTo(0, 0), terminal::Clear(ClearType::All))?;
        for (i, row) in self.rows(keypad).iter().enumerate() {
            queue!(out, cursor::MoveTo(0, i as u16), Print(row))?;
        }
        out.flush()
    }
}

impl DisplaySink for TerminalSink {
    fn set_expression(&mut self, text: &str) {
        self.expression = text.to_string();
    }

    fn set_display(&mut self, text: &str) {
        self.display = text.to_string();
    }
}

/// Renders the keypad legend, one text row per keypad row
#[must_use]
pub fn keypad_rows(keypad: &Keypad) -> Vec<String> {
    let (rows, _) = keypad.dimensions();
    (0..rows)
        .map(|row| {
            keypad
                .row(row)
                .map(|button| {
                    let w = 6 * button.span - 3;
                    format!("[{:^w$}]", button.label)
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Applies one key command; returns false when the session should end
pub fn step(driver: &mut Driver<TerminalSink>, command: KeyCommand) -> bool {
    match command {
        KeyCommand::Quit => false,
        KeyCommand::None => true,
        KeyCommand::Calc(event) => {
            let status = match driver.dispatch(event) {
                Outcome::Faulted(err) => {
                    format!("{}: {err}", driver.calculator().config().error_token)
                }
                Outcome::Refreshed | Outcome::Ignored => String::new(),
            };
            driver.sink_mut().set_status(status);
            true
        }
    }
}

/// Raw mode and the alternate screen, undone on drop
#[derive(Debug)]
struct TerminalGuard;

impl TerminalGuard {
    fn enter<W: Write>(out: &mut W) -> CliResult<Self> {
        terminal::enable_raw_mode()?;
        let guard = Self;
        execute!(out, terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore(&mut std::io::stdout());
    }
}

/// Leaves the alternate screen and raw mode; raw mode is left even when
/// the screen write fails
fn restore<W: Write>(out: &mut W) -> std::io::Result<()> {
    let screen = execute!(out, cursor::Show, terminal::LeaveAlternateScreen);
    terminal::disable_raw_mode()?;
    screen
}

/// Runs the interactive session until a quit key
pub fn run_interactive(config: CalculatorConfig) -> CliResult<()> {
    let keypad = Keypad::new();
    let sink = TerminalSink::new(config.display_width);
    let mut driver = Driver::with_config(config, sink);
    let mut stdout = std::io::stdout();

    let guard = TerminalGuard::enter(&mut stdout)?;
    info!("interactive session started");

    let result = session_loop(&mut driver, &keypad, &mut stdout);

    drop(guard);
    info!(events = driver.event_count(), "interactive session ended");

    result
}

fn session_loop<W: Write>(
    driver: &mut Driver<TerminalSink>,
    keypad: &Keypad,
    out: &mut W,
) -> CliResult<()> {
    loop {
        driver.sink().draw(out, keypad)?;

        if let Event::Key(key) = event::read()? {
            let command = handle_key(key);
            debug!(?key, ?command, "key");
            if !step(driver, command) {
                return Ok(());
            }
        }
    }
}
