//! Crossterm terminal driver for gridtrace.
//!
//! Provides a [`CrosstermDriver`] that owns the terminal session (raw mode,
//! alternate screen, mouse capture), translates crossterm events into
//! [`gridtrace_core::Msg`] values and flushes [`Frame`] diffs.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEventKind},
    execute, queue,
    style::{Color as CtColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use gridtrace_core::{Color, Frame, Key, MouseAction, Msg, Point};

/// Maps a [`gridtrace_core::Color`] to a [`crossterm::style::Color`].
fn to_ct_color(c: Color) -> CtColor {
    if c == Color::DEFAULT {
        CtColor::Reset
    } else {
        CtColor::Rgb {
            r: c.r(),
            g: c.g(),
            b: c.b(),
        }
    }
}

/// Maps a crossterm [`KeyCode`] to a gridtrace [`Key`].
fn to_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Up => Some(Key::ArrowUp),
        KeyCode::Down => Some(Key::ArrowDown),
        KeyCode::Left => Some(Key::ArrowLeft),
        KeyCode::Right => Some(Key::ArrowRight),
        _ => None,
    }
}

/// Translate one crossterm event. Events with no gridtrace counterpart map
/// to `None`.
pub fn translate(ev: Event) -> Option<Msg> {
    match ev {
        Event::Key(KeyEvent { code, kind, .. }) => {
            if kind == KeyEventKind::Release {
                return None;
            }
            to_key(code).map(Msg::key)
        }
        Event::Mouse(me) => {
            let pos = Point::new(me.column as i32, me.row as i32);
            let action = match me.kind {
                MouseEventKind::Down(MouseButton::Left) => MouseAction::Main,
                MouseEventKind::Down(MouseButton::Right) => MouseAction::Secondary,
                MouseEventKind::Up(_) => MouseAction::Release,
                MouseEventKind::Moved | MouseEventKind::Drag(_) => MouseAction::Move,
                _ => return None,
            };
            Some(Msg::mouse(action, pos))
        }
        Event::Resize(w, h) => Some(Msg::Screen {
            width: w as i32,
            height: h as i32,
        }),
        _ => None,
    }
}

/// A terminal back-end using crossterm.
pub struct CrosstermDriver {
    active: bool,
}

impl CrosstermDriver {
    /// Create a new driver.
    pub fn new() -> Self {
        Self { active: false }
    }

    /// Enter raw mode and the alternate screen, and capture the mouse.
    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        self.active = true;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All),
            event::EnableMouseCapture
        )?;
        Ok(())
    }

    /// Clear the whole terminal, e.g. before drawing a smaller screen.
    pub fn clear(&mut self) -> io::Result<()> {
        execute!(io::stdout(), ResetColor, terminal::Clear(ClearType::All))
    }

    /// Wait up to `timeout` for input and return every message available.
    ///
    /// Returns an empty vector on timeout.
    pub fn poll_msgs(&mut self, timeout: Duration) -> io::Result<Vec<Msg>> {
        let mut msgs = Vec::new();
        if !event::poll(timeout)? {
            return Ok(msgs);
        }
        while event::poll(Duration::ZERO)? {
            if let Some(m) = translate(event::read()?) {
                msgs.push(m);
            }
        }
        Ok(msgs)
    }

    /// Write the changed cells of `frame` to the terminal.
    pub fn flush(&mut self, frame: &Frame) -> io::Result<()> {
        if frame.cells.is_empty() {
            return Ok(());
        }
        let mut stdout = io::stdout().lock();
        for fc in &frame.cells {
            let p = fc.pos;
            queue!(
                stdout,
                cursor::MoveTo(p.x as u16, p.y as u16),
                SetForegroundColor(to_ct_color(fc.cell.fg)),
                SetBackgroundColor(to_ct_color(fc.cell.bg)),
                Print(fc.cell.ch)
            )?;
        }
        queue!(stdout, ResetColor)?;
        stdout.flush()?;
        log::trace!("flushed {} cells", frame.cells.len());
        Ok(())
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn close(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        let _ = execute!(
            io::stdout(),
            event::DisableMouseCapture,
            ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

impl Default for CrosstermDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CrosstermDriver {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers, MouseEvent};

    fn key(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn keys() {
        assert_eq!(
            translate(key(KeyCode::Char('g'), KeyEventKind::Press)),
            Some(Msg::key(Key::Char('g')))
        );
        assert_eq!(
            translate(key(KeyCode::Char(' '), KeyEventKind::Press)),
            Some(Msg::key(Key::Space))
        );
        assert_eq!(translate(key(KeyCode::Char('g'), KeyEventKind::Release)), None);
        assert_eq!(translate(key(KeyCode::F(1), KeyEventKind::Press)), None);
    }

    #[test]
    fn mouse_events() {
        assert_eq!(
            translate(mouse(MouseEventKind::Down(MouseButton::Left), 3, 4)),
            Some(Msg::mouse(MouseAction::Main, Point::new(3, 4)))
        );
        assert_eq!(
            translate(mouse(MouseEventKind::Drag(MouseButton::Left), 5, 1)),
            Some(Msg::mouse(MouseAction::Move, Point::new(5, 1)))
        );
        assert_eq!(
            translate(mouse(MouseEventKind::Up(MouseButton::Left), 0, 0)),
            Some(Msg::mouse(MouseAction::Release, Point::new(0, 0)))
        );
        assert_eq!(translate(mouse(MouseEventKind::ScrollUp, 0, 0)), None);
    }

    #[test]
    fn resize() {
        assert_eq!(
            translate(Event::Resize(80, 24)),
            Some(Msg::Screen {
                width: 80,
                height: 24
            })
        );
    }

    #[test]
    fn colors() {
        assert_eq!(to_ct_color(Color::DEFAULT), CtColor::Reset);
        assert_eq!(
            to_ct_color(Color::from_rgb(1, 2, 3)),
            CtColor::Rgb { r: 1, g: 2, b: 3 }
        );
    }
}
