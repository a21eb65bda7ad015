use std::{
    fmt::{self, Display},
    sync::LazyLock,
};

use regex::Regex;

static MNEMONIC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.*)_(.)_(.*)").expect("Invalid mnemonic regex"));

/// A label split around its shortcut key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MnemonicLabel {
    /// Text before the shortcut key.
    pub pre: String,
    /// The shortcut key, or [`MnemonicLabel::UNKNOWN_SHORTCUT`].
    pub shortcut: String,
    /// Text after the shortcut key.
    pub post: String,
}

impl MnemonicLabel {
    /// Shortcut reported for labels without a mnemonic.
    pub const UNKNOWN_SHORTCUT: &'static str = "UNKNOWN";

    /// The result for a label that carries no mnemonic.
    #[must_use]
    pub fn unknown() -> Self {
        Self {
            pre: String::new(),
            shortcut: Self::UNKNOWN_SHORTCUT.to_owned(),
            post: String::new(),
        }
    }

    /// Returns `true` if this is the [`MnemonicLabel::unknown`] result.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        *self == Self::unknown()
    }
}

/// Prints the label with the underscores removed.
impl Display for MnemonicLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.pre, self.shortcut, self.post)
    }
}

/// Outcome of parsing a mnemonic label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelMatch {
    /// The label contains `_<key>_`.
    Matched(MnemonicLabel),
    /// The label contains no single-character segment between underscores.
    NoMatch,
}

impl LabelMatch {
    /// Parses `label` as `<pre>_<key>_<post>`.
    ///
    /// `<key>` is exactly one character other than a newline. The prefix is
    /// greedy, so when a label contains several such segments the last one is
    /// the key. Neither `<pre>` nor `<post>` spans a line break.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudopad_shortcut::{LabelMatch, MnemonicLabel};
    ///
    /// let LabelMatch::Matched(label) = LabelMatch::parse("Clear_C_ells") else {
    ///     panic!("expected a match");
    /// };
    /// assert_eq!(label.pre, "Clear");
    /// assert_eq!(label.shortcut, "C");
    /// assert_eq!(label.post, "ells");
    ///
    /// assert_eq!(LabelMatch::parse("Clear cells"), LabelMatch::NoMatch);
    /// ```
    #[must_use]
    pub fn parse(label: &str) -> Self {
        let Some(captures) = MNEMONIC_REGEX.captures(label) else {
            return Self::NoMatch;
        };
        match (captures.get(1), captures.get(2), captures.get(3)) {
            (Some(pre), Some(shortcut), Some(post)) => Self::Matched(MnemonicLabel {
                pre: pre.as_str().to_owned(),
                shortcut: shortcut.as_str().to_owned(),
                post: post.as_str().to_owned(),
            }),
            _ => Self::NoMatch,
        }
    }

    /// Returns the parsed label, or [`MnemonicLabel::unknown`] for [`LabelMatch::NoMatch`].
    #[must_use]
    pub fn into_label(self) -> MnemonicLabel {
        match self {
            Self::Matched(label) => label,
            Self::NoMatch => MnemonicLabel::unknown(),
        }
    }
}
