//! Per-frame dispatch: [`MenuEvent`] in, [`Outcome`] out, with at most one
//! [`HighlightObserver`] notification per call.

use learnmenu_core::{EnabledMask, Result};

use crate::state::{Direction, MenuState, Outcome};

/// An abstracted input event for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MenuEvent {
    /// Nothing happened this frame.
    #[default]
    None,
    MovePrevious,
    MoveNext,
    Confirm,
    Cancel,
}

/// Receives the highlighted candidate index whenever it changes.
///
/// Any `FnMut(usize)` closure is an observer.
pub trait HighlightObserver {
    fn highlight_changed(&mut self, index: usize);
}

impl<F: FnMut(usize)> HighlightObserver for F {
    fn highlight_changed(&mut self, index: usize) {
        self(index)
    }
}

impl MenuState {
    /// Apply one frame of input and report the activation's status.
    ///
    /// Once the outcome is terminal this returns it unchanged without
    /// touching the state or the observer.
    pub fn update<O>(&mut self, event: MenuEvent, observer: &mut O) -> Outcome
    where
        O: HighlightObserver + ?Sized,
    {
        if !self.is_active() {
            return self.outcome();
        }

        match event {
            MenuEvent::None => {}
            MenuEvent::MovePrevious => self.move_cursor(Direction::Previous),
            MenuEvent::MoveNext => self.move_cursor(Direction::Next),
            MenuEvent::Confirm => self.confirm(),
            MenuEvent::Cancel => self.cancel(),
        }

        self.sync(observer);
        self.outcome()
    }

    /// Notify `observer` if the highlighted candidate differs from the one
    /// it last saw.
    fn sync<O>(&mut self, observer: &mut O)
    where
        O: HighlightObserver + ?Sized,
    {
        let Some(i) = self.cursor() else {
            return;
        };
        if self.last_notified() == Some(i) {
            return;
        }
        log::trace!("learn menu highlight -> {i}");
        observer.highlight_changed(i);
        self.set_last_notified(i);
    }
}

/// Open a learn menu and immediately tell `observer` about the initial
/// highlight, so the host's display is in sync before the first frame.
///
/// Nothing is sent when no candidate is enabled.
pub fn initialize_menu<O>(mask: EnabledMask, observer: &mut O) -> Result<MenuState>
where
    O: HighlightObserver + ?Sized,
{
    let mut state = MenuState::initialize(mask)?;
    state.sync(observer);
    Ok(state)
}

/// Like [`initialize_menu`] but starting the scan for an enabled candidate
/// at `start`.
pub fn initialize_menu_at<O>(
    mask: EnabledMask,
    start: usize,
    observer: &mut O,
) -> Result<MenuState>
where
    O: HighlightObserver + ?Sized,
{
    let mut state = MenuState::initialize_at(mask, start)?;
    state.sync(observer);
    Ok(state)
}
