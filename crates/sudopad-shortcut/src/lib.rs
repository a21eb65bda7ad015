//! Keyboard shortcuts derived from mnemonic labels.
//!
//! A mnemonic label embeds its own shortcut key between two underscores, for
//! example `"Clear _C_ells"`. Parsing the label yields the text before the key,
//! the key itself, and the text after it, so a widget can draw the label with
//! the key underlined and bind the key to a command in one step.
//!
//! # Examples
//!
//! ```
//! use sudopad_shortcut::ShortcutRegistry;
//!
//! let mut registry = ShortcutRegistry::new();
//!
//! let label = registry.register_command("Save_S_File", "cmd.save");
//! assert_eq!(label.pre, "Save");
//! assert_eq!(label.shortcut, "S");
//! assert_eq!(label.post, "File");
//!
//! // The first command to claim a key keeps it.
//! registry.register_command("Stop_S_Now", "cmd.stop");
//! assert_eq!(registry.command_for("S"), Some("cmd.save"));
//! ```

pub use self::{label::*, registry::*};

mod label;
mod registry;
