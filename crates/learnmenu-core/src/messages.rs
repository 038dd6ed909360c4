//! Per-frame input messages: [`Msg`], [`Key`], [`MouseAction`].
//!
//! These are the device-independent values an input driver hands to the
//! menu once per frame. Mapping them to menu events is the job of the
//! key-binding layer in `learnmenu-ui`, so only what a binding can name
//! is carried here.

/// A keyboard key a menu binding can refer to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Enter,
    Escape,
    Space,
    Tab,
    /// A printable character.
    Char(char),
}

/// A mouse action. Pointer position is not tracked: the learn menu is
/// driven by focus, not by hit-testing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MouseAction {
    /// Primary (left) button pressed.
    Main,
    /// Secondary (right) button pressed.
    Secondary,
    WheelUp,
    WheelDown,
}

/// An input message delivered to the menu for one frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Msg {
    /// A key was pressed.
    Key(Key),
    /// A mouse button or wheel event.
    Mouse(MouseAction),
    /// The host asks the menu to close (window closed, idle timeout,
    /// input script exhausted, ...).
    Quit,
}

impl From<Key> for Msg {
    fn from(key: Key) -> Self {
        Self::Key(key)
    }
}

impl From<MouseAction> for Msg {
    fn from(action: MouseAction) -> Self {
        Self::Mouse(action)
    }
}
