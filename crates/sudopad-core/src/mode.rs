//! Interaction modes.
//!
//! Variants are opaque. No numeric encoding is exposed, so nothing can depend on
//! a particular discriminant value.

/// What a digit keypress does to the selected cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::IsVariant)]
pub enum Mode {
    /// Set up the puzzle: digits become clues.
    Initialise,
    /// Fill in values on editable cells.
    #[default]
    EnterValue,
    /// Toggle pencilled candidates on editable cells.
    PencilIn,
}

impl Mode {
    /// All modes in display order.
    pub const ALL: [Self; 3] = [Self::Initialise, Self::EnterValue, Self::PencilIn];

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Initialise => "Initialise",
            Self::EnterValue => "Enter value",
            Self::PencilIn => "Pencil in",
        }
    }
}

/// What clicking a cell does to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::IsVariant)]
pub enum SelectMode {
    /// The clicked cell becomes the only selected cell.
    #[default]
    Single,
    /// The clicked cell is toggled in or out of the selection.
    Multiple,
    /// The clicked cell is removed from the selection.
    Clear,
}

impl SelectMode {
    /// All selection modes in display order.
    pub const ALL: [Self; 3] = [Self::Single, Self::Multiple, Self::Clear];

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::Multiple => "Multiple",
            Self::Clear => "Deselect",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_and_names() {
        assert!(Mode::default().is_enter_value());
        assert!(SelectMode::default().is_single());
        assert_eq!(Mode::PencilIn.name(), "Pencil in");
        assert_eq!(SelectMode::Clear.name(), "Deselect");
    }
}
