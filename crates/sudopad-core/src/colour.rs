//! Cell highlight colours.

/// A highlight colour, stored as an index into the UI's palette.
///
/// The data model only tracks which palette slot a cell uses. Mapping a slot to
/// an on-screen colour is up to the renderer.
///
/// # Examples
///
/// ```
/// use sudopad_core::Colour;
///
/// let colour = Colour::new(3).unwrap();
/// assert_eq!(colour.index(), 3);
/// assert!(Colour::new(Colour::COUNT).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Colour(u8);

/// Error returned when a palette index is out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("colour index {index} is out of range (palette has {} slots)", Colour::COUNT)]
pub struct ColourError {
    /// The rejected index.
    pub index: u8,
}

impl Colour {
    /// Number of palette slots.
    pub const COUNT: u8 = 9;

    /// Creates a colour from a palette index.
    ///
    /// # Errors
    ///
    /// Returns [`ColourError`] if `index` is not below [`Colour::COUNT`].
    pub const fn new(index: u8) -> Result<Self, ColourError> {
        if index < Self::COUNT {
            Ok(Self(index))
        } else {
            Err(ColourError { index })
        }
    }

    /// Returns the palette index.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Iterates over every palette slot in order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::COUNT).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_covers_palette_in_order() {
        let colours: Vec<_> = Colour::all().map(Colour::index).collect();
        assert_eq!(colours, (0..Colour::COUNT).collect::<Vec<_>>());
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        assert_eq!(Colour::new(9), Err(ColourError { index: 9 }));
        assert_eq!(
            ColourError { index: 12 }.to_string(),
            "colour index 12 is out of range (palette has 9 slots)"
        );
    }
}
