//! Crossterm terminal input driver for the learn menu.
//!
//! Provides a [`CrosstermInput`] that implements
//! [`learnmenu_core::InputDriver`], turning terminal key and mouse events
//! into [`Msg`] values one frame at a time.

use std::io;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{self, ClearType},
};

use learnmenu_core::{
    driver::InputDriver,
    messages::{Key, MouseAction, Msg},
};

/// Maps a crossterm [`KeyCode`] to a [`Key`]. Keys no binding can name
/// are dropped.
fn to_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::Up => Some(Key::ArrowUp),
        KeyCode::Down => Some(Key::ArrowDown),
        KeyCode::Left => Some(Key::ArrowLeft),
        KeyCode::Right => Some(Key::ArrowRight),
        _ => None,
    }
}

/// Maps a crossterm mouse event kind to a [`MouseAction`]. Releases,
/// drags and pointer motion carry nothing for the menu.
fn to_mouse_action(kind: MouseEventKind) -> Option<MouseAction> {
    match kind {
        MouseEventKind::Down(MouseButton::Left) => Some(MouseAction::Main),
        MouseEventKind::Down(MouseButton::Right) => Some(MouseAction::Secondary),
        MouseEventKind::ScrollUp => Some(MouseAction::WheelUp),
        MouseEventKind::ScrollDown => Some(MouseAction::WheelDown),
        _ => None,
    }
}

/// Translate one terminal event into a menu message, if it is relevant.
pub fn to_msg(ev: Event) -> Option<Msg> {
    match ev {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }) => {
            // Key repeat and release reports would move the cursor twice.
            if kind != KeyEventKind::Press {
                return None;
            }
            // Ctrl-C has no binding in raw mode; treat it as a host quit.
            if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
                return Some(Msg::Quit);
            }
            to_key(code).map(Msg::Key)
        }
        Event::Mouse(MouseEvent { kind, .. }) => to_mouse_action(kind).map(Msg::Mouse),
        _ => None,
    }
}

/// Run every step, even after a failure, and report the first error.
fn run_steps<const N: usize>(steps: [&mut dyn FnMut() -> io::Result<()>; N]) -> io::Result<()> {
    let mut first = Ok(());
    for step in steps {
        if let Err(err) = step() {
            if first.is_ok() {
                first = Err(err);
            }
        }
    }
    first
}

/// A terminal input source backed by crossterm.
///
/// [`init`](InputDriver::init) switches the terminal to raw mode on the
/// alternate screen; [`close`](InputDriver::close) (or dropping the
/// driver) restores it.
pub struct CrosstermInput {
    mouse_enabled: bool,
    active: bool,
}

impl CrosstermInput {
    /// Create a new driver.
    pub fn new() -> Self {
        Self {
            mouse_enabled: true,
            active: false,
        }
    }

    /// Configure whether mouse events are captured.
    pub fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse_enabled = enabled;
        self
    }

    fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        let mouse = self.mouse_enabled;
        // Raw mode must be left even if the screen could not be restored.
        run_steps([
            &mut || {
                if mouse {
                    execute!(io::stdout(), event::DisableMouseCapture)
                } else {
                    Ok(())
                }
            },
            &mut || execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen),
            &mut terminal::disable_raw_mode,
        ])
    }
}

impl Default for CrosstermInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputDriver for CrosstermInput {
    fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        self.active = true;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        if self.mouse_enabled {
            execute!(stdout, event::EnableMouseCapture)?;
        }
        log::debug!("crossterm input ready (mouse: {})", self.mouse_enabled);
        Ok(())
    }

    fn poll_msg(&mut self, timeout: Duration) -> io::Result<Option<Msg>> {
        // At most one message per frame; anything irrelevant is dropped.
        if !event::poll(timeout)? {
            return Ok(None);
        }
        Ok(to_msg(event::read()?))
    }

    fn close(&mut self) -> io::Result<()> {
        self.restore()
    }
}

impl Drop for CrosstermInput {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            log::warn!("failed to restore terminal: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent::new_with_kind(code, modifiers, kind))
    }

    fn mouse_event(kind: MouseEventKind) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn key_mapping() {
        assert_eq!(to_key(KeyCode::Up), Some(Key::ArrowUp));
        assert_eq!(to_key(KeyCode::Down), Some(Key::ArrowDown));
        assert_eq!(to_key(KeyCode::Esc), Some(Key::Escape));
        assert_eq!(to_key(KeyCode::Char(' ')), Some(Key::Space));
        assert_eq!(to_key(KeyCode::Char('j')), Some(Key::Char('j')));
        assert_eq!(to_key(KeyCode::F(1)), None);
    }

    #[test]
    fn modifiers_do_not_change_the_key() {
        let ev = key_event(KeyCode::Down, KeyModifiers::SHIFT, KeyEventKind::Press);
        assert_eq!(to_msg(ev), Some(Msg::Key(Key::ArrowDown)));
    }

    #[test]
    fn teardown_runs_every_step_after_a_failure() {
        let mut ran = [false; 3];
        let [a, b, c] = &mut ran;
        let res = run_steps([
            &mut || -> io::Result<()> {
                *a = true;
                Err(io::Error::other("mouse"))
            },
            &mut || -> io::Result<()> {
                *b = true;
                Err(io::Error::other("screen"))
            },
            &mut || -> io::Result<()> {
                *c = true;
                Ok(())
            },
        ]);
        assert_eq!(res.unwrap_err().to_string(), "mouse");
        assert_eq!(ran, [true, true, true]);
    }

    #[test]
    fn restore_is_a_noop_before_init() {
        let mut input = CrosstermInput::new().with_mouse(false);
        assert!(input.close().is_ok());
    }

    #[test]
    fn key_press_becomes_msg() {
        let ev = key_event(KeyCode::Enter, KeyModifiers::NONE, KeyEventKind::Press);
        assert_eq!(to_msg(ev), Some(Msg::Key(Key::Enter)));
    }

    #[test]
    fn key_release_and_repeat_are_dropped() {
        for kind in [KeyEventKind::Release, KeyEventKind::Repeat] {
            let ev = key_event(KeyCode::Down, KeyModifiers::NONE, kind);
            assert!(to_msg(ev).is_none());
        }
    }

    #[test]
    fn ctrl_c_quits() {
        let ev = key_event(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyEventKind::Press);
        assert_eq!(to_msg(ev), Some(Msg::Quit));
    }

    #[test]
    fn mouse_mapping() {
        let cases = [
            (MouseEventKind::Down(MouseButton::Left), Some(MouseAction::Main)),
            (MouseEventKind::Down(MouseButton::Right), Some(MouseAction::Secondary)),
            (MouseEventKind::ScrollUp, Some(MouseAction::WheelUp)),
            (MouseEventKind::ScrollDown, Some(MouseAction::WheelDown)),
            (MouseEventKind::Down(MouseButton::Middle), None),
            (MouseEventKind::Moved, None),
            (MouseEventKind::Up(MouseButton::Left), None),
        ];
        for (kind, want) in cases {
            assert_eq!(to_msg(mouse_event(kind)), want.map(Msg::Mouse), "{kind:?}");
        }
    }

    #[test]
    fn resize_is_ignored() {
        assert!(to_msg(Event::Resize(80, 24)).is_none());
        assert!(to_msg(Event::FocusGained).is_none());
    }
}
