use learnmenu_core::messages::{Key, MouseAction, Msg};

use crate::dispatch::MenuEvent;

/// Key bindings translating raw input into [`MenuEvent`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MenuKeys {
    pub previous: Vec<Key>,
    pub next: Vec<Key>,
    pub confirm: Vec<Key>,
    pub cancel: Vec<Key>,
}

impl Default for MenuKeys {
    fn default() -> Self {
        Self {
            previous: vec![Key::ArrowUp, Key::ArrowLeft, Key::Char('k'), Key::Char('h')],
            next: vec![Key::ArrowDown, Key::ArrowRight, Key::Char('j'), Key::Char('l')],
            confirm: vec![Key::Enter, Key::Space],
            cancel: vec![Key::Escape, Key::Char('q')],
        }
    }
}

impl MenuKeys {
    /// Map one input message to a menu event.
    ///
    /// Mouse wheel moves the cursor, the main button confirms and the
    /// secondary button cancels. A host [`Msg::Quit`] cancels.
    pub fn event(&self, msg: &Msg) -> MenuEvent {
        match msg {
            Msg::Key(key) => {
                if self.previous.contains(key) {
                    MenuEvent::MovePrevious
                } else if self.next.contains(key) {
                    MenuEvent::MoveNext
                } else if self.confirm.contains(key) {
                    MenuEvent::Confirm
                } else if self.cancel.contains(key) {
                    MenuEvent::Cancel
                } else {
                    MenuEvent::None
                }
            }
            Msg::Mouse(action) => match action {
                MouseAction::WheelUp => MenuEvent::MovePrevious,
                MouseAction::WheelDown => MenuEvent::MoveNext,
                MouseAction::Main => MenuEvent::Confirm,
                MouseAction::Secondary => MenuEvent::Cancel,
            },
            Msg::Quit => MenuEvent::Cancel,
        }
    }
}
