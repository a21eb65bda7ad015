use std::collections::{BTreeMap, btree_map::Entry};

use crate::{LabelMatch, MnemonicLabel};

/// Mapping from shortcut key to command identifier.
///
/// Bindings are only ever added. The first registration of a key wins; later
/// registrations of the same key are ignored without error.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ShortcutRegistry {
    bindings: BTreeMap<String, String>,
}

impl ShortcutRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a mnemonic label and binds its key to `command`.
    ///
    /// Returns the label split into `pre`/`shortcut`/`post` for rendering. A
    /// label without a mnemonic yields [`MnemonicLabel::unknown`] and leaves the
    /// registry untouched. A key that is already bound keeps its binding.
    pub fn register_command(&mut self, label: &str, command: &str) -> MnemonicLabel {
        match LabelMatch::parse(label) {
            LabelMatch::Matched(parsed) => {
                self.bind(&parsed.shortcut, command);
                parsed
            }
            LabelMatch::NoMatch => {
                log::trace!("label {label:?} has no mnemonic, {command:?} left unbound");
                MnemonicLabel::unknown()
            }
        }
    }

    /// Reserves a literal key, binding it to itself.
    ///
    /// Does nothing if `key` is already bound.
    pub fn register_key(&mut self, key: &str) {
        self.bind(key, key);
    }

    /// Returns the command bound to `key`.
    #[must_use]
    pub fn command_for(&self, key: &str) -> Option<&str> {
        self.bindings.get(key).map(String::as_str)
    }

    /// Returns `true` if `key` is bound.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.bindings.contains_key(key)
    }

    /// Number of bound keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if no key is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterates over `(key, command)` pairs sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.bindings
            .iter()
            .map(|(key, command)| (key.as_str(), command.as_str()))
    }

    fn bind(&mut self, key: &str, command: &str) {
        match self.bindings.entry(key.to_owned()) {
            Entry::Vacant(entry) => {
                log::debug!("bound shortcut {key:?} to {command:?}");
                entry.insert(command.to_owned());
            }
            Entry::Occupied(entry) if entry.get() != command => {
                log::trace!(
                    "shortcut {key:?} already bound to {:?}, ignoring {command:?}",
                    entry.get()
                );
            }
            Entry::Occupied(_) => {}
        }
    }
}
