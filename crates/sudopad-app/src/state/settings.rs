#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Highlight the rows, columns, and boxes of selected cells.
    pub crosshair: bool,
    /// Highlight cells holding the same digit as the cursor cell.
    pub highlight_same_digit: bool,
    /// Underline the shortcut key in command labels.
    pub show_shortcut_hints: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            crosshair: true,
            highlight_same_digit: true,
            show_shortcut_hints: true,
        }
    }
}
