use bon::bon;
use serde::{Deserialize, Serialize};

/// Highest heading level index that can be numbered (`h6`).
pub const MAX_HEADING_LEVEL: i32 = 5;

/// Numbering configuration for one document.
///
/// The host usually loads this from its own configuration and hands it to a
/// [`DocumentContext`](crate::context::DocumentContext). All fields are
/// public, so they can be adjusted directly or via the generated builder
/// (`Settings::builder()`).
///
/// # Examples
///
/// ```rust
/// use asciimathml::Settings;
///
/// let settings = Settings::builder().level_num(2).header_num(false).build();
/// assert_eq!(settings.max_level(), Some(2));
/// assert!(!settings.header_num);
///
/// // Out-of-range levels are clamped rather than rejected
/// let settings = Settings::builder().level_num(42).build();
/// assert_eq!(settings.max_level(), Some(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Highest heading level index to number, 0 being the top-level heading.
    ///
    /// Headings deeper than this are neither numbered nor counted. A negative
    /// value disables numbering entirely.
    pub level_num: i32,
    /// Whether generated numbers are prepended to heading text.
    ///
    /// When `false` the section counters still advance, so equation numbers
    /// keep their hierarchical prefix.
    pub header_num: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            level_num: 1,
            header_num: true,
        }
    }
}

#[bon]
impl Settings {
    /// Creates a new [`Settings`] instance, defaulting any option left unset.
    ///
    /// # Default Values
    /// - `level_num`: `1` (number `h1` and `h2`)
    /// - `header_num`: `true`
    #[must_use]
    #[builder]
    pub fn new(
        /// Highest heading level index to number; negative disables numbering.
        level_num: Option<i32>,
        /// Show generated numbers in heading text.
        header_num: Option<bool>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            level_num: level_num.unwrap_or(defaults.level_num),
            header_num: header_num.unwrap_or(defaults.header_num),
        }
    }

    /// The effective maximum level index, clamped to [`MAX_HEADING_LEVEL`].
    ///
    /// Returns `None` when numbering is disabled.
    #[must_use]
    pub fn max_level(&self) -> Option<usize> {
        usize::try_from(self.level_num.min(MAX_HEADING_LEVEL)).ok()
    }
}
