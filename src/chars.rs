/// Blank cell.
pub const SPACE: char = ' ';
/// Default border glyph.
pub const BORDER: char = '*';

/// Checks whether a character may occupy a screen cell.
/// Returns `Some(ch)` if allowed (with whitespace normalized to space),
/// or `None` if the character should be rejected.
pub fn check_char(ch: char) -> Option<char> {
    let cp = ch as u32;

    // TAB, Mongolian Vowel Separator and the Zs set:
    // U+0020, U+00A0, U+1680, U+2000..U+200A, U+202F, U+205F, U+3000
    if cp == 0x0009
        || cp == 0x180E
        || cp == 0x0020
        || cp == 0x00A0
        || cp == 0x1680
        || (0x2000..=0x200A).contains(&cp)
        || cp == 0x202F
        || cp == 0x205F
        || cp == 0x3000
    {
        return Some(SPACE);
    }

    // C0 controls
    if (0x0000..=0x001F).contains(&cp) {
        return None;
    }
    // DEL and C1 controls
    if (0x007F..=0x009F).contains(&cp) {
        return None;
    }
    // Combining marks
    if (0x0300..=0x036F).contains(&cp) {
        return None;
    }
    // Zero-width / joiner / variation selectors
    if (0x200B..=0x200F).contains(&cp) || cp == 0xFEFF || (0xFE00..=0xFE0F).contains(&cp) {
        return None;
    }
    // Bidirectional control codes
    if (0x202A..=0x202E).contains(&cp) || (0x2066..=0x2069).contains(&cp) {
        return None;
    }

    Some(ch)
}
