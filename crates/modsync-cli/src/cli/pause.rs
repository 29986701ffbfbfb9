//! Wait for the user before the console window closes.
//!
//! On a terminal any key continues; otherwise a line (or EOF) on stdin does.

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;
use crossterm::tty::IsTty;
use std::io::{self, BufRead, Write};

/// Keeps raw mode on for its lifetime.
struct RawModeGuard;

impl RawModeGuard {
    fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Prints `prompt` and blocks until the user presses a key.
pub fn pause(prompt: &str) {
    let stdin = io::stdin();
    let stdout = io::stdout();
    print_prompt(prompt, &mut stdout.lock());

    if stdin.is_tty() {
        match wait_for_key() {
            Ok(()) => return,
            Err(e) => tracing::debug!("raw key wait unavailable: {}", e),
        }
    }
    wait_for_line(&mut stdin.lock());
}

fn print_prompt(prompt: &str, out: &mut impl Write) {
    let _ = writeln!(out, "{}", prompt);
    let _ = out.flush();
}

fn wait_for_key() -> io::Result<()> {
    let _raw = RawModeGuard::new()?;
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}

fn wait_for_line(input: &mut impl BufRead) {
    let mut line = String::new();
    let _ = input.read_line(&mut line);
}
