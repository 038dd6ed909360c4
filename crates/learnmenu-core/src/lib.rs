//! **learnmenu-core** — core types for the ability learn menu.
//!
//! This crate provides the pieces shared by every part of the menu: the
//! per-frame input messages, the [`InputDriver`] seam, the
//! [`EnabledMask`] describing which candidate abilities are selectable,
//! and the configuration error taxonomy.

pub mod driver;
pub mod error;
pub mod mask;
pub mod messages;

pub use driver::{InputDriver, ScriptedInput};
pub use error::{ConfigError, MenuError, Result};
pub use mask::{EnabledMask, MAX_CANDIDATES};
pub use messages::*;
