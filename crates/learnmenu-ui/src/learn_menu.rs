use learnmenu_core::{EnabledMask, Msg, Result};

use crate::dispatch::{initialize_menu_at, HighlightObserver, MenuEvent};
use crate::keys::MenuKeys;
use crate::state::{MenuState, Outcome};

/// Configuration for a [`LearnMenu`].
#[derive(Debug, Clone, Default)]
pub struct LearnMenuConfig {
    /// Which candidates are selectable this activation.
    pub mask: EnabledMask,
    /// Key bindings.
    pub keys: MenuKeys,
    /// Candidate to start the cursor scan from (e.g. the one highlighted
    /// when the menu was last closed).
    pub start: usize,
}

/// A learn menu driven directly by input messages.
///
/// Wraps a [`MenuState`] with a [`MenuKeys`] translation step, so a host
/// can feed whatever its input driver produced each frame.
#[derive(Debug, Clone)]
pub struct LearnMenu {
    state: MenuState,
    keys: MenuKeys,
}

impl LearnMenu {
    /// Open the menu and report the initial highlight to `observer`.
    pub fn new<O>(config: LearnMenuConfig, observer: &mut O) -> Result<Self>
    where
        O: HighlightObserver + ?Sized,
    {
        let state = initialize_menu_at(config.mask, config.start, observer)?;
        Ok(Self {
            state,
            keys: config.keys,
        })
    }

    /// Process one frame. `None` means no input arrived this frame.
    pub fn update<O>(&mut self, msg: Option<&Msg>, observer: &mut O) -> Outcome
    where
        O: HighlightObserver + ?Sized,
    {
        let event = msg.map_or(MenuEvent::None, |m| self.keys.event(m));
        self.state.update(event, observer)
    }

    pub fn state(&self) -> &MenuState {
        &self.state
    }

    pub fn keys(&self) -> &MenuKeys {
        &self.keys
    }

    /// Replace the key bindings. Takes effect on the next update.
    pub fn set_keys(&mut self, keys: MenuKeys) {
        self.keys = keys;
    }

    pub fn cursor(&self) -> Option<usize> {
        self.state.cursor()
    }

    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }
}
