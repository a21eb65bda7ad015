//! User-facing commands and their shortcut bindings.
//!
//! Commands with a button or checkbox carry a mnemonic label. The label is
//! registered with the [`ShortcutRegistry`] when the widget is drawn, which binds
//! the underlined key to the command id. Keys without a label (arrows, digits,
//! and editing keys) are reserved up front with [`ShortcutRegistry::register_key`]
//! and resolve through their key name.

use sudopad_core::{Digit, Mode, SelectMode};
use sudopad_shortcut::{LabelMatch, MnemonicLabel, ShortcutRegistry};

use crate::action::{Action, MoveDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SetMode(Mode),
    SetSelectMode(SelectMode),
    ClearCells,
    NewGrid,
    ToggleCrosshair,
    ToggleShortcutHelp,
    ClearSelection,
    MoveSelection(MoveDirection),
    Digit(Digit),
}

/// Literal keys reserved for commands that have no label.
pub const RESERVED_KEYS: [&str; 16] = [
    "ArrowUp",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "Escape",
    "Delete",
    "Backspace",
    "1",
    "2",
    "3",
    "4",
    "5",
    "6",
    "7",
    "8",
    "9",
];

impl Command {
    /// Commands drawn with a mnemonic label, in sidebar order.
    pub const LABELLED: [Self; 10] = [
        Self::SetMode(Mode::Initialise),
        Self::SetMode(Mode::EnterValue),
        Self::SetMode(Mode::PencilIn),
        Self::SetSelectMode(SelectMode::Single),
        Self::SetSelectMode(SelectMode::Multiple),
        Self::SetSelectMode(SelectMode::Clear),
        Self::ClearCells,
        Self::NewGrid,
        Self::ToggleCrosshair,
        Self::ToggleShortcutHelp,
    ];

    /// Mnemonic label, for commands that have one.
    #[must_use]
    pub const fn label(self) -> Option<&'static str> {
        let label = match self {
            Self::SetMode(Mode::Initialise) => "_I_nitialise",
            Self::SetMode(Mode::EnterValue) => "_E_nter value",
            Self::SetMode(Mode::PencilIn) => "_P_encil in",
            Self::SetSelectMode(SelectMode::Single) => "Sin_g_le",
            Self::SetSelectMode(SelectMode::Multiple) => "_M_ultiple",
            Self::SetSelectMode(SelectMode::Clear) => "Dese_l_ect",
            Self::ClearCells => "Clear _C_ells",
            Self::NewGrid => "_N_ew grid",
            Self::ToggleCrosshair => "Cross_h_air",
            Self::ToggleShortcutHelp => "Sh_o_rtcuts",
            Self::ClearSelection | Self::MoveSelection(_) | Self::Digit(_) => return None,
        };
        Some(label)
    }

    /// Stable identifier stored in the shortcut registry.
    ///
    /// Unlabelled commands use the name of their first reserved key.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::SetMode(Mode::Initialise) => "mode.initialise",
            Self::SetMode(Mode::EnterValue) => "mode.enter-value",
            Self::SetMode(Mode::PencilIn) => "mode.pencil-in",
            Self::SetSelectMode(SelectMode::Single) => "select.single",
            Self::SetSelectMode(SelectMode::Multiple) => "select.multiple",
            Self::SetSelectMode(SelectMode::Clear) => "select.clear",
            Self::ClearCells => "cells.clear",
            Self::NewGrid => "grid.new",
            Self::ToggleCrosshair => "view.crosshair",
            Self::ToggleShortcutHelp => "view.shortcuts",
            Self::ClearSelection => "Escape",
            Self::MoveSelection(MoveDirection::Up) => "ArrowUp",
            Self::MoveSelection(MoveDirection::Down) => "ArrowDown",
            Self::MoveSelection(MoveDirection::Left) => "ArrowLeft",
            Self::MoveSelection(MoveDirection::Right) => "ArrowRight",
            Self::Digit(digit) => digit.as_str(),
        }
    }

    /// Resolves a command id or reserved key name.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        if let Some(command) = Self::LABELLED.into_iter().find(|c| c.id() == id) {
            return Some(command);
        }
        let command = match id {
            "Escape" => Self::ClearSelection,
            "Delete" | "Backspace" => Self::ClearCells,
            "ArrowUp" => Self::MoveSelection(MoveDirection::Up),
            "ArrowDown" => Self::MoveSelection(MoveDirection::Down),
            "ArrowLeft" => Self::MoveSelection(MoveDirection::Left),
            "ArrowRight" => Self::MoveSelection(MoveDirection::Right),
            _ => {
                let digit = id.parse::<u8>().ok()?;
                Self::Digit(Digit::try_from(digit).ok()?)
            }
        };
        Some(command)
    }

    /// Label text without underscores, or a short description for unlabelled commands.
    #[must_use]
    pub fn description(self) -> String {
        match self {
            Self::ClearSelection => "Clear selection".to_owned(),
            Self::MoveSelection(direction) => format!("Move {}", direction.name()),
            Self::Digit(digit) => format!("Digit {digit}"),
            Self::SetMode(_)
            | Self::SetSelectMode(_)
            | Self::ClearCells
            | Self::NewGrid
            | Self::ToggleCrosshair
            | Self::ToggleShortcutHelp => self
                .label()
                .map(|label| LabelMatch::parse(label).into_label().to_string())
                .unwrap_or_default(),
        }
    }

    /// Registers this command's label, returning the split label for drawing.
    ///
    /// Returns `None` for commands without a label.
    pub fn register(self, registry: &mut ShortcutRegistry) -> Option<MnemonicLabel> {
        let label = self.label()?;
        Some(registry.register_command(label, self.id()))
    }

    #[must_use]
    pub fn to_action(self) -> Action {
        match self {
            Self::SetMode(mode) => Action::SetMode(mode),
            Self::SetSelectMode(mode) => Action::SetSelectMode(mode),
            Self::ClearCells => Action::ClearCells,
            Self::NewGrid => Action::NewGrid,
            Self::ToggleCrosshair => Action::ToggleCrosshair,
            Self::ToggleShortcutHelp => Action::ToggleShortcutHelp,
            Self::ClearSelection => Action::ClearSelection,
            Self::MoveSelection(dir) => Action::MoveSelection(dir),
            Self::Digit(digit) => Action::RequestDigit(digit),
        }
    }
}

/// Builds a registry with every reserved key and labelled command bound.
///
/// Widgets register their labels again while drawing; those calls are no-ops
/// because the first registration wins.
#[must_use]
pub fn default_registry() -> ShortcutRegistry {
    let mut registry = ShortcutRegistry::new();
    for key in RESERVED_KEYS {
        registry.register_key(key);
    }
    for command in Command::LABELLED {
        command.register(&mut registry);
    }
    registry
}

/// Looks up the command bound to a pressed key.
///
/// Letter keys are tried as reported and then in lowercase, so labels may
/// underline either case.
#[must_use]
pub fn resolve_key(registry: &ShortcutRegistry, key_name: &str) -> Option<Command> {
    let id = registry.command_for(key_name).or_else(|| {
        let lower = key_name.to_lowercase();
        (lower != key_name)
            .then(|| registry.command_for(&lower))
            .flatten()
    })?;
    Command::from_id(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labelled_commands_have_distinct_shortcuts() {
        let registry = default_registry();
        for command in Command::LABELLED {
            let label = command.label().map(LabelMatch::parse);
            let Some(LabelMatch::Matched(label)) = label else {
                panic!("{command:?} has no mnemonic");
            };
            assert_eq!(registry.command_for(&label.shortcut), Some(command.id()));
        }
    }

    #[test]
    fn ids_round_trip() {
        for command in Command::LABELLED {
            assert_eq!(Command::from_id(command.id()), Some(command));
        }
        for digit in Digit::ALL {
            assert_eq!(
                Command::from_id(Command::Digit(digit).id()),
                Some(Command::Digit(digit))
            );
        }
        assert_eq!(Command::from_id("0"), None);
        assert_eq!(Command::from_id("unknown"), None);
    }

    #[test]
    fn reserved_keys_resolve_to_themselves() {
        let registry = default_registry();
        for key in RESERVED_KEYS {
            assert_eq!(registry.command_for(key), Some(key));
            assert!(resolve_key(&registry, key).is_some(), "{key}");
        }
        assert_eq!(
            resolve_key(&registry, "Backspace"),
            Some(Command::ClearCells)
        );
    }

    #[test]
    fn letter_keys_fall_back_to_lowercase() {
        let registry = default_registry();
        // "Sin_g_le" underlines a lowercase letter.
        assert_eq!(
            resolve_key(&registry, "G"),
            Some(Command::SetSelectMode(SelectMode::Single))
        );
        assert_eq!(
            resolve_key(&registry, "C"),
            Some(Command::ClearCells)
        );
        assert_eq!(resolve_key(&registry, "Z"), None);
    }

    #[test]
    fn descriptions_drop_underscores() {
        assert_eq!(Command::ClearCells.description(), "Clear Cells");
        assert_eq!(Command::SetMode(Mode::PencilIn).description(), "Pencil in");
        assert_eq!(
            Command::MoveSelection(MoveDirection::Left).description(),
            "Move left"
        );
        assert_eq!(Command::Digit(Digit::D3).description(), "Digit 3");
    }

    #[test]
    fn digit_command_requests_digit() {
        assert!(matches!(
            Command::Digit(Digit::D4).to_action(),
            Action::RequestDigit(Digit::D4)
        ));
    }
}
