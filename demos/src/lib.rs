//! Shared pieces for the learn-menu demos: a small ability table, a
//! terminal panel that redraws on highlight changes, and the frame loop.

use std::io::{self, Write};
use std::num::ParseIntError;
use std::time::Duration;

use crossterm::{
    cursor, queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{Clear, ClearType},
};

use learnmenu_core::{EnabledMask, InputDriver};
use learnmenu_ui::{HighlightObserver, LearnMenu, LearnMenuConfig, Outcome};

/// One learnable ability shown in the demo list.
#[derive(Debug, Clone, Copy)]
pub struct Ability {
    pub name: &'static str,
    pub description: &'static str,
}

pub const ABILITIES: &[Ability] = &[
    Ability {
        name: "Wind Blade",
        description: "Slices a single foe with a gust of wind.",
    },
    Ability {
        name: "Thunder Call",
        description: "Strikes every foe with lightning.",
    },
    Ability {
        name: "Healing Rain",
        description: "Restores health to the whole party.",
    },
    Ability {
        name: "Stone Skin",
        description: "Raises one ally's defense for a while.",
    },
    Ability {
        name: "Fire Serpent",
        description: "Burns a row of foes.",
    },
    Ability {
        name: "Soul Bind",
        description: "Leaves a foe unable to act.",
    },
];

/// Abilities learnable by default: bit `i` set means `ABILITIES[i]` is.
pub const DEFAULT_FLAGS: u32 = 0b10_1101;

/// Time budget of one frame.
pub const FRAME: Duration = Duration::from_millis(16);

/// Parse a flags word given as decimal, `0x` hex or `0b` binary.
pub fn parse_flags(s: &str) -> Result<u32, ParseIntError> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix("0x") {
        u32::from_str_radix(hex, 16)
    } else if let Some(bin) = s.strip_prefix("0b") {
        u32::from_str_radix(bin, 2)
    } else {
        s.parse()
    }
}

/// Draws the candidate list and the highlighted ability's description.
pub struct Panel<W: Write> {
    out: W,
    mask: EnabledMask,
}

impl<W: Write> Panel<W> {
    pub fn new(out: W, mask: EnabledMask) -> Self {
        Self { out, mask }
    }

    /// Redraw everything. `None` means no ability can be highlighted.
    pub fn draw(&mut self, highlight: Option<usize>) -> io::Result<()> {
        queue!(
            self.out,
            Clear(ClearType::All),
            cursor::MoveTo(0, 0),
            Print("Learn which ability?  (arrows/jk move, enter learns, esc leaves)")
        )?;

        for (i, ability) in ABILITIES.iter().enumerate() {
            let row = 2 + i as u16;
            let marker = if highlight == Some(i) { "> " } else { "  " };
            queue!(self.out, cursor::MoveTo(0, row), Print(marker))?;
            if self.mask.is_enabled(i) {
                queue!(self.out, Print(ability.name))?;
            } else {
                queue!(
                    self.out,
                    SetAttribute(Attribute::Dim),
                    Print(format!("{} (locked)", ability.name)),
                    SetAttribute(Attribute::Reset)
                )?;
            }
        }

        let text = match highlight.and_then(|i| ABILITIES.get(i)) {
            Some(ability) => ability.description,
            None => "Nothing can be learned right now.",
        };
        let row = 3 + ABILITIES.len() as u16;
        queue!(self.out, cursor::MoveTo(0, row), Print(text))?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> HighlightObserver for Panel<W> {
    fn highlight_changed(&mut self, index: usize) {
        if let Err(err) = self.draw(Some(index)) {
            log::warn!("failed to draw learn menu: {err}");
        }
    }
}

/// Run one menu activation to completion, one poll per frame, drawing
/// into `out`.
///
/// The mask must describe exactly the [`ABILITIES`] table. The returned
/// outcome is always terminal.
pub fn run<D, W>(driver: &mut D, out: W, config: LearnMenuConfig) -> io::Result<Outcome>
where
    D: InputDriver,
    W: Write,
{
    let mask = config
        .mask
        .expect_len(ABILITIES.len())
        .map_err(io::Error::other)?;
    let mut panel = Panel::new(out, mask.clone());
    panel.draw(None)?;

    let config = LearnMenuConfig { mask, ..config };
    let mut menu = LearnMenu::new(config, &mut panel).map_err(io::Error::other)?;
    loop {
        let msg = driver.poll_msg(FRAME)?;
        let outcome = menu.update(msg.as_ref(), &mut panel);
        if outcome.is_terminal() {
            return Ok(outcome);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use learnmenu_core::{Key, Msg, ScriptedInput};

    #[test]
    fn flags_parsing() {
        assert_eq!(parse_flags("45"), Ok(45));
        assert_eq!(parse_flags("0x2d"), Ok(0x2d));
        assert_eq!(parse_flags(" 0b101101 "), Ok(0b10_1101));
        assert!(parse_flags("zz").is_err());
    }

    #[test]
    fn default_flags_fit_the_table() {
        let mask = EnabledMask::from_bits(DEFAULT_FLAGS, ABILITIES.len()).unwrap();
        assert_eq!(mask.iter_enabled().collect::<Vec<_>>(), vec![0, 2, 3, 5]);
    }

    #[test]
    fn scripted_run_learns_an_ability() {
        let mask = EnabledMask::from_bits(DEFAULT_FLAGS, ABILITIES.len()).unwrap();
        let mut out = Vec::new();
        let mut input = ScriptedInput::new([
            Msg::Key(Key::ArrowDown),
            Msg::Key(Key::ArrowDown),
            Msg::Key(Key::Enter),
        ]);
        let config = LearnMenuConfig {
            mask,
            ..Default::default()
        };
        let outcome = run(&mut input, &mut out, config).unwrap();
        assert_eq!(outcome, Outcome::Confirmed(3));

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Stone Skin"));
        assert!(out.contains("Fire Serpent (locked)"));
        assert!(out.contains(ABILITIES[3].description));
    }

    #[test]
    fn scripted_run_with_nothing_learnable() {
        let mask = EnabledMask::from_bits(0, ABILITIES.len()).unwrap();
        let mut out = Vec::new();
        let mut input = ScriptedInput::new([Msg::Key(Key::Enter), Msg::Key(Key::Escape)]);
        let config = LearnMenuConfig {
            mask,
            ..Default::default()
        };
        let outcome = run(&mut input, &mut out, config).unwrap();
        assert_eq!(outcome, Outcome::Cancelled);

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Nothing can be learned right now."));
    }

    #[test]
    fn mask_longer_than_the_table_is_rejected() {
        let mut input = ScriptedInput::new(
            std::iter::repeat_n(Msg::Key(Key::ArrowDown), 6).chain([Msg::Key(Key::Enter)]),
        );
        let config = LearnMenuConfig {
            mask: EnabledMask::new(vec![true; 8]),
            ..Default::default()
        };
        let err = run(&mut input, Vec::<u8>::new(), config).unwrap_err();
        assert!(err.to_string().contains("mask has 8 entries but 6"), "{err}");
        assert_eq!(input.remaining(), 7);
    }

    #[test]
    fn panel_ignores_highlights_past_the_table() {
        let mut panel = Panel::new(Vec::new(), EnabledMask::new(vec![true; 8]));
        panel.draw(Some(7)).unwrap();
        let out = String::from_utf8(panel.into_inner()).unwrap();
        assert!(out.contains("Nothing can be learned right now."));
    }

    #[test]
    fn run_ends_when_the_script_runs_out() {
        let mask = EnabledMask::from_bits(DEFAULT_FLAGS, ABILITIES.len()).unwrap();
        let mut input = ScriptedInput::new([Msg::Key(Key::ArrowDown)]);
        let config = LearnMenuConfig {
            mask,
            ..Default::default()
        };
        let outcome = run(&mut input, Vec::<u8>::new(), config).unwrap();
        assert_eq!(outcome, Outcome::Cancelled);
        assert!(input.is_exhausted());
    }
}
