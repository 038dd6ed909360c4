use learnmenu_core::{ConfigError, EnabledMask, Result};

/// Cursor movement direction over the candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Previous,
    Next,
}

/// Status of one menu activation, returned by [`MenuState::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Keep polling.
    Active,
    /// The player chose the candidate at this index.
    Confirmed(usize),
    /// The player backed out without choosing.
    Cancelled,
}

impl Outcome {
    /// Whether the activation has ended.
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// Selection state of one learn-menu activation.
///
/// The cursor is `None` only when no candidate is enabled. Otherwise it
/// always rests on an enabled candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuState {
    mask: EnabledMask,
    cursor: Option<usize>,
    last_notified: Option<usize>,
    outcome: Outcome,
}

impl MenuState {
    /// Start an activation with the cursor on the lowest enabled candidate.
    ///
    /// No notification is sent; see [`initialize_menu`](crate::initialize_menu)
    /// for the variant that synchronizes an observer right away.
    pub fn initialize(mask: EnabledMask) -> Result<Self> {
        Self::initialize_at(mask, 0)
    }

    /// Start an activation with the cursor on the first enabled candidate
    /// found scanning circularly from `start`. An out-of-range `start` is
    /// treated as 0.
    pub fn initialize_at(mask: EnabledMask, start: usize) -> Result<Self> {
        if mask.is_empty() {
            log::warn!("learn menu rejected: empty candidate list");
            return Err(ConfigError::Empty.into());
        }
        let len = mask.len();
        let start = if start < len { start } else { 0 };
        let cursor = (0..len)
            .map(|k| (start + k) % len)
            .find(|&i| mask.is_enabled(i));

        log::debug!(
            "learn menu opened: {} candidates, {} enabled, cursor {:?}",
            len,
            mask.enabled_count(),
            cursor
        );

        Ok(Self {
            mask,
            cursor,
            last_notified: None,
            outcome: Outcome::Active,
        })
    }

    /// Step the cursor to the next enabled candidate in `direction`,
    /// wrapping around both ends and skipping disabled entries.
    ///
    /// Does nothing with fewer than two enabled candidates or once the
    /// activation has ended.
    pub fn move_cursor(&mut self, direction: Direction) {
        if self.outcome.is_terminal() {
            return;
        }
        let Some(cur) = self.cursor else {
            return;
        };
        if self.mask.enabled_count() < 2 {
            return;
        }

        let len = self.mask.len();
        let next = (1..len)
            .map(|k| match direction {
                Direction::Next => (cur + k) % len,
                Direction::Previous => (cur + len - k) % len,
            })
            .find(|&i| self.mask.is_enabled(i));

        if let Some(i) = next {
            log::trace!("learn menu cursor {cur} -> {i} ({direction:?})");
            self.cursor = Some(i);
        }
    }

    /// Accept the highlighted candidate. Rejected when nothing is
    /// selectable.
    pub fn confirm(&mut self) {
        if self.outcome.is_terminal() {
            return;
        }
        if let Some(i) = self.cursor {
            log::debug!("learn menu confirmed candidate {i}");
            self.outcome = Outcome::Confirmed(i);
        }
    }

    /// Close the menu without a selection. Always accepted while active.
    pub fn cancel(&mut self) {
        if self.outcome.is_terminal() {
            return;
        }
        log::debug!("learn menu cancelled");
        self.outcome = Outcome::Cancelled;
    }

    /// The enabled mask this activation was opened with.
    pub fn mask(&self) -> &EnabledMask {
        &self.mask
    }

    /// The highlighted candidate, or `None` when nothing is enabled.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// The index most recently delivered to an observer.
    pub fn last_notified(&self) -> Option<usize> {
        self.last_notified
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_active(&self) -> bool {
        !self.outcome.is_terminal()
    }

    /// The chosen candidate once confirmed.
    pub fn selection(&self) -> Option<usize> {
        match self.outcome {
            Outcome::Confirmed(i) => Some(i),
            _ => None,
        }
    }

    pub(crate) fn set_last_notified(&mut self, index: usize) {
        self.last_notified = Some(index);
    }
}
