use eframe::egui::{InputState, Key};
use sudopad_shortcut::ShortcutRegistry;

use crate::{action::ActionRequestQueue, command};

/// Keys that may trigger a command, with the names the registry knows them by.
const KEYS: [(Key, &str); 42] = [
    (Key::ArrowUp, "ArrowUp"),
    (Key::ArrowDown, "ArrowDown"),
    (Key::ArrowLeft, "ArrowLeft"),
    (Key::ArrowRight, "ArrowRight"),
    (Key::Escape, "Escape"),
    (Key::Delete, "Delete"),
    (Key::Backspace, "Backspace"),
    (Key::Num1, "1"),
    (Key::Num2, "2"),
    (Key::Num3, "3"),
    (Key::Num4, "4"),
    (Key::Num5, "5"),
    (Key::Num6, "6"),
    (Key::Num7, "7"),
    (Key::Num8, "8"),
    (Key::Num9, "9"),
    (Key::A, "A"),
    (Key::B, "B"),
    (Key::C, "C"),
    (Key::D, "D"),
    (Key::E, "E"),
    (Key::F, "F"),
    (Key::G, "G"),
    (Key::H, "H"),
    (Key::I, "I"),
    (Key::J, "J"),
    (Key::K, "K"),
    (Key::L, "L"),
    (Key::M, "M"),
    (Key::N, "N"),
    (Key::O, "O"),
    (Key::P, "P"),
    (Key::Q, "Q"),
    (Key::R, "R"),
    (Key::S, "S"),
    (Key::T, "T"),
    (Key::U, "U"),
    (Key::V, "V"),
    (Key::W, "W"),
    (Key::X, "X"),
    (Key::Y, "Y"),
    (Key::Z, "Z"),
];

pub fn handle_input(
    i: &InputState,
    registry: &ShortcutRegistry,
    action_queue: &mut ActionRequestQueue,
) {
    // Leave Ctrl/Cmd and Alt chords to the platform.
    if i.modifiers.command || i.modifiers.alt {
        return;
    }
    for (key, name) in KEYS {
        if !i.key_pressed(key) {
            continue;
        }
        if let Some(command) = command::resolve_key(registry, name) {
            log::trace!("key {name} triggered {command:?}");
            action_queue.request(command.to_action());
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use sudopad_shortcut::LabelMatch;

    use super::KEYS;
    use crate::command::{self, Command, RESERVED_KEYS};

    #[test]
    fn every_reserved_key_is_reachable() {
        for reserved in RESERVED_KEYS {
            assert!(KEYS.iter().any(|(_, name)| *name == reserved), "{reserved}");
        }
    }

    #[test]
    fn every_labelled_command_is_reachable() {
        let registry = command::default_registry();
        for command in Command::LABELLED {
            let Some(LabelMatch::Matched(label)) = command.label().map(LabelMatch::parse) else {
                panic!("{command:?} has no mnemonic");
            };
            let upper = label.shortcut.to_uppercase();
            let (_, name) = KEYS
                .iter()
                .find(|(_, name)| *name == upper)
                .unwrap_or_else(|| panic!("no key for {upper}"));
            assert_eq!(command::resolve_key(&registry, name), Some(command));
        }
    }
}
