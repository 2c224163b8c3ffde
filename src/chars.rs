//! Character classes shared by the cleaning stages.
use unic_ucd::GeneralCategory;

/// `true` for whitespace.
///
/// On top of Unicode whitespace, the ASCII information separators
/// (U+001C..=U+001F) are considered spaces.
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// `true` for characters that end a token during precleaning.
///
/// Non-ASCII characters are never boundaries: they are dropped before being looked at.
pub fn is_boundary(c: char) -> bool {
    c.is_ascii() && is_space(c)
}

/// `true` for letters (general category `L*`).
pub fn is_alpha(c: char) -> bool {
    GeneralCategory::of(c).is_letter()
}
