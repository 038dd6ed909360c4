//! Terminal learn-menu demo using crossterm.
//!
//! Run: cargo run --bin learn [FLAGS]
//!
//! `FLAGS` selects which abilities are learnable (bit `i` = ability `i`),
//! as decimal, `0x` hex or `0b` binary.

use std::io;

use learnmenu_core::{EnabledMask, InputDriver};
use learnmenu_crossterm::CrosstermInput;
use learnmenu_demos::{parse_flags, run, ABILITIES, DEFAULT_FLAGS};
use learnmenu_ui::{LearnMenuConfig, Outcome};

fn main() {
    if let Err(e) = learn() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn learn() -> Result<(), Box<dyn std::error::Error>> {
    let flags = match std::env::args().nth(1) {
        Some(arg) => parse_flags(&arg)?,
        None => DEFAULT_FLAGS,
    };
    let mask = EnabledMask::from_bits(flags, ABILITIES.len())?;

    let mut input = CrosstermInput::new();
    input.init()?;
    let outcome = run(
        &mut input,
        io::stdout(),
        LearnMenuConfig {
            mask,
            ..Default::default()
        },
    )?;
    input.close()?;

    match outcome {
        Outcome::Confirmed(i) => println!("Learned {}.", ABILITIES[i].name),
        Outcome::Cancelled => println!("Left without learning anything."),
        Outcome::Active => unreachable!("run only returns once the menu has closed"),
    }
    Ok(())
}
