//! The state of a single grid square.

use crate::{Colour, Digit};

/// Opaque reference to the widget that renders a cell.
///
/// The UI layer owns the widget. A cell only stores this identifier so a
/// renderer can find its own widget again; it is never dereferenced here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayHandle(pub u64);

/// One square of the Sudoku grid and its editable/display state.
///
/// `options` and `colours` keep insertion order, which is the order the UI
/// displays them in. Neither contains duplicates when edited through
/// [`Cell::toggle_option`] and [`Cell::toggle_colour`].
///
/// # Examples
///
/// ```
/// use sudopad_core::{Cell, Digit};
///
/// let mut cell = Cell::new();
/// cell.toggle_option(Digit::D7);
/// cell.toggle_option(Digit::D2);
/// assert_eq!(cell.options, [Digit::D7, Digit::D2]);
///
/// cell.toggle_option(Digit::D7);
/// assert_eq!(cell.options, [Digit::D2]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[expect(clippy::struct_excessive_bools)]
pub struct Cell {
    /// Set once the cell was given its starting value during puzzle setup.
    pub initialised: bool,
    /// The digit in the cell. `None` means empty.
    pub value: Option<Digit>,
    /// Pencilled candidates.
    pub options: Vec<Digit>,
    /// Highlight colours.
    pub colours: Vec<Colour>,
    /// Part of the current selection.
    pub selected: bool,
    /// Clue cell; not editable by the player.
    pub locked: bool,
    /// Violates a puzzle constraint. Maintained by external validation.
    pub error: bool,
    /// Shares a row, column, or box with a selected cell.
    pub crosshair: bool,
    /// Widget currently rendering this cell.
    pub display: Option<DisplayHandle>,
}

impl Cell {
    /// Creates an empty, unlocked, unselected cell.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a clue cell holding `digit`.
    #[must_use]
    pub fn clue(digit: Digit) -> Self {
        Self {
            initialised: true,
            value: Some(digit),
            locked: true,
            ..Self::default()
        }
    }

    /// Returns `true` if the cell holds no digit.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Returns `true` if the player may change the cell.
    #[must_use]
    pub fn is_editable(&self) -> bool {
        !self.locked
    }

    /// Adds `digit` to the candidates, or removes it if already present.
    ///
    /// Returns `true` if the digit is a candidate afterwards.
    pub fn toggle_option(&mut self, digit: Digit) -> bool {
        toggle(&mut self.options, digit)
    }

    /// Adds `colour` to the highlights, or removes it if already present.
    ///
    /// Returns `true` if the colour is applied afterwards.
    pub fn toggle_colour(&mut self, colour: Colour) -> bool {
        toggle(&mut self.colours, colour)
    }

    /// Clears the value, candidates, and colours. Flags are left as they are.
    pub fn clear_entries(&mut self) {
        self.value = None;
        self.options.clear();
        self.colours.clear();
    }
}

fn toggle<T: PartialEq>(items: &mut Vec<T>, item: T) -> bool {
    if let Some(index) = items.iter().position(|existing| *existing == item) {
        items.remove(index);
        false
    } else {
        items.push(item);
        true
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn default_cell_is_blank() {
        let cell = Cell::new();
        assert!(cell.is_empty());
        assert!(cell.is_editable());
        assert!(!cell.initialised);
        assert!(!cell.selected);
        assert!(!cell.error);
        assert!(!cell.crosshair);
        assert!(cell.options.is_empty());
        assert!(cell.colours.is_empty());
        assert_eq!(cell.display, None);
    }

    #[test]
    fn clue_is_locked_and_initialised() {
        let cell = Cell::clue(Digit::D3);
        assert_eq!(cell.value, Some(Digit::D3));
        assert!(cell.locked);
        assert!(cell.initialised);
        assert!(!cell.is_editable());
    }

    #[test]
    fn clear_entries_keeps_flags() {
        let mut cell = Cell::clue(Digit::D9);
        cell.selected = true;
        cell.toggle_option(Digit::D1);
        cell.toggle_colour(Colour::new(2).unwrap());

        cell.clear_entries();

        assert!(cell.is_empty());
        assert!(cell.options.is_empty());
        assert!(cell.colours.is_empty());
        assert!(cell.locked);
        assert!(cell.selected);
    }

    #[test]
    fn toggle_colour_reports_state() {
        let mut cell = Cell::new();
        let red = Colour::new(0).unwrap();
        assert!(cell.toggle_colour(red));
        assert!(!cell.toggle_colour(red));
        assert!(cell.colours.is_empty());
    }

    proptest! {
        #[test]
        fn toggled_options_keep_first_insertion_order(
            values in prop::collection::vec(1u8..=9, 0..30),
        ) {
            let mut cell = Cell::new();
            let mut expected: Vec<Digit> = Vec::new();
            for value in values {
                let digit = Digit::from_value(value);
                cell.toggle_option(digit);
                if let Some(i) = expected.iter().position(|d| *d == digit) {
                    expected.remove(i);
                } else {
                    expected.push(digit);
                }
            }
            prop_assert_eq!(cell.options, expected);
        }
    }
}
