//! The [`InputDriver`] seam between a host's input device and the menu.

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use crate::messages::Msg;

/// A source of per-frame input messages.
///
/// Hosts call [`poll_msg`](Self::poll_msg) once per frame and feed the
/// result (or the absence of one) to the menu.
pub trait InputDriver {
    /// Prepare the device. Called once before the first poll.
    fn init(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Wait at most `timeout` for the next message.
    ///
    /// `Ok(None)` means nothing menu-relevant arrived this frame.
    fn poll_msg(&mut self, timeout: Duration) -> io::Result<Option<Msg>>;

    /// Release the device. Called once after the menu closes.
    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Replays a fixed list of messages, one per poll.
///
/// Once the list is drained every poll reports [`Msg::Quit`], so a host
/// looping until the menu closes always terminates.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    queue: VecDeque<Msg>,
}

impl ScriptedInput {
    pub fn new(msgs: impl IntoIterator<Item = Msg>) -> Self {
        Self {
            queue: msgs.into_iter().collect(),
        }
    }

    /// Number of messages not yet delivered.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.queue.is_empty()
    }
}

impl InputDriver for ScriptedInput {
    fn poll_msg(&mut self, _timeout: Duration) -> io::Result<Option<Msg>> {
        Ok(Some(self.queue.pop_front().unwrap_or(Msg::Quit)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::Key;

    #[test]
    fn scripted_input_drains_in_order() {
        let mut input = ScriptedInput::new([Msg::Key(Key::ArrowDown), Msg::Key(Key::Enter)]);
        input.init().unwrap();
        assert_eq!(input.remaining(), 2);
        assert_eq!(
            input.poll_msg(Duration::ZERO).unwrap(),
            Some(Msg::Key(Key::ArrowDown))
        );
        assert_eq!(input.poll_msg(Duration::ZERO).unwrap(), Some(Msg::Key(Key::Enter)));
        assert!(input.is_exhausted());
        input.close().unwrap();
    }

    #[test]
    fn exhausted_script_keeps_quitting() {
        let mut input = ScriptedInput::new([Msg::Key(Key::Tab)]);
        input.poll_msg(Duration::ZERO).unwrap();
        for _ in 0..3 {
            assert_eq!(input.poll_msg(Duration::ZERO).unwrap(), Some(Msg::Quit));
        }
        assert_eq!(input.remaining(), 0);

        let mut empty = ScriptedInput::default();
        assert_eq!(empty.poll_msg(Duration::ZERO).unwrap(), Some(Msg::Quit));
    }
}
