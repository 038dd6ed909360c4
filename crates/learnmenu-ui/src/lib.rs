//! The ability learn menu: a frame-polled selection state machine over a
//! partially disabled candidate list.
//!
//! [`MenuState`] owns the selection rules, [`MenuState::update`] is the
//! per-frame entry point, and [`LearnMenu`] adds key bindings on top.

mod dispatch;
mod keys;
mod learn_menu;
mod state;

pub use dispatch::{initialize_menu, initialize_menu_at, HighlightObserver, MenuEvent};
pub use keys::MenuKeys;
pub use learn_menu::{LearnMenu, LearnMenuConfig};
pub use state::{Direction, MenuState, Outcome};
