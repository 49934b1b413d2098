use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells. Tabs count as 4 cells.
pub fn display_width(s: &str) -> usize {
    s.graphemes(true).map(grapheme_width).sum()
}

/// Truncate to fit within `max_cells`, appending `…` if anything was cut.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    let budget = max_cells - 1; // room for '…'
    let mut width = 0;
    let mut out = String::new();
    for g in s.graphemes(true) {
        let gw = grapheme_width(g);
        if width + gw > budget {
            break;
        }
        width += gw;
        out.push_str(g);
    }
    out.push('\u{2026}');
    out
}

/// Next grapheme boundary after `byte_offset`, `None` at the end.
pub fn next_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset >= s.len() {
        return None;
    }
    let next = s[byte_offset..]
        .grapheme_indices(true)
        .nth(1)
        .map_or(s.len(), |(i, _)| byte_offset + i);
    Some(next)
}

/// Previous grapheme boundary before `byte_offset`, `None` at the start.
pub fn prev_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset == 0 {
        return None;
    }
    s[..byte_offset].grapheme_indices(true).last().map(|(i, _)| i)
}

/// Start of the word left of `byte_offset` (whitespace-delimited).
pub fn word_boundary_left(s: &str, byte_offset: usize) -> usize {
    let graphemes: Vec<(usize, &str)> = s[..byte_offset].grapheme_indices(true).collect();
    let mut idx = graphemes.len();
    while idx > 0 && is_blank(graphemes[idx - 1].1) {
        idx -= 1;
    }
    while idx > 0 && !is_blank(graphemes[idx - 1].1) {
        idx -= 1;
    }
    graphemes.get(idx).map_or(0, |(i, _)| *i)
}

/// Start of the next word right of `byte_offset` (or the end).
pub fn word_boundary_right(s: &str, byte_offset: usize) -> usize {
    if byte_offset >= s.len() {
        return s.len();
    }
    let mut iter = s[byte_offset..].grapheme_indices(true).peekable();
    while iter.next_if(|(_, g)| !is_blank(g)).is_some() {}
    while iter.next_if(|(_, g)| is_blank(g)).is_some() {}
    iter.peek().map_or(s.len(), |(i, _)| byte_offset + i)
}

/// Byte range of `s` to show in a field `width` cells wide so that the
/// cursor at `cursor` (a byte offset) stays visible. Scrolls just enough
/// to keep the cursor on the last column when the text overflows.
pub fn visible_window(s: &str, cursor: usize, width: usize) -> (usize, usize) {
    if width == 0 {
        return (cursor, cursor);
    }
    let cursor = cursor.min(s.len());
    // Reserve one cell for the cursor itself
    let budget = width.saturating_sub(1);
    let mut start = cursor;
    let mut used = 0;
    for (i, g) in s[..cursor].grapheme_indices(true).rev() {
        let gw = grapheme_width(g);
        if used + gw > budget {
            break;
        }
        used += gw;
        start = i;
    }
    let mut end = cursor;
    for (i, g) in s[cursor..].grapheme_indices(true) {
        let gw = grapheme_width(g);
        if used + gw > width {
            break;
        }
        used += gw;
        end = cursor + i + g.len();
    }
    (start, end)
}

fn is_blank(g: &str) -> bool {
    g.chars().all(char::is_whitespace)
}

fn grapheme_width(g: &str) -> usize {
    if g == "\t" {
        return 4;
    }
    UnicodeWidthStr::width(g)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_of_notes_with_emoji() {
        assert_eq!(display_width("lunch"), 5);
        assert_eq!(display_width("cake \u{1F382}"), 7);
        assert_eq!(display_width("a\tb"), 6);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn width_of_combining_accent() {
        assert_eq!(display_width("cafe\u{0301}"), 4);
    }

    #[test]
    fn truncate_prompt() {
        assert_eq!(truncate_to_width("What went well?", 20), "What went well?");
        assert_eq!(truncate_to_width("What went well?", 8), "What we\u{2026}");
        assert_eq!(truncate_to_width("abc", 0), "");
        assert_eq!(truncate_to_width("abc", 1), "\u{2026}");
    }

    #[test]
    fn truncate_never_splits_wide_glyph() {
        let out = truncate_to_width("\u{1F604}\u{1F604}\u{1F604}", 4);
        assert_eq!(out, "\u{1F604}\u{2026}");
    }

    #[test]
    fn grapheme_steps_over_emoji() {
        let s = "a\u{1F642}b";
        assert_eq!(next_grapheme_boundary(s, 0), Some(1));
        assert_eq!(next_grapheme_boundary(s, 1), Some(5));
        assert_eq!(next_grapheme_boundary(s, 6), None);
        assert_eq!(prev_grapheme_boundary(s, 5), Some(1));
        assert_eq!(prev_grapheme_boundary(s, 0), None);
    }

    #[test]
    fn grapheme_steps_over_combining() {
        let s = "cafe\u{0301}!";
        assert_eq!(next_grapheme_boundary(s, 3), Some(6));
        assert_eq!(prev_grapheme_boundary(s, 6), Some(3));
    }

    #[test]
    fn word_moves() {
        let s = "lunch with friends";
        assert_eq!(word_boundary_left(s, s.len()), 11);
        assert_eq!(word_boundary_left(s, 11), 6);
        assert_eq!(word_boundary_left(s, 3), 0);
        assert_eq!(word_boundary_left(s, 0), 0);
        assert_eq!(word_boundary_right(s, 0), 6);
        assert_eq!(word_boundary_right(s, 6), 11);
        assert_eq!(word_boundary_right(s, 11), s.len());
    }

    #[test]
    fn word_left_skips_trailing_spaces() {
        let s = "long day   ";
        assert_eq!(word_boundary_left(s, s.len()), 5);
    }

    #[test]
    fn window_fits_whole_text() {
        assert_eq!(visible_window("hello", 5, 20), (0, 5));
        assert_eq!(visible_window("hello", 2, 20), (0, 5));
    }

    #[test]
    fn window_scrolls_to_cursor_at_end() {
        let s = "lunch with friends";
        let (start, end) = visible_window(s, s.len(), 6);
        assert_eq!(&s[start..end], "iends");
    }

    #[test]
    fn window_keeps_text_after_cursor() {
        let s = "abcdefghij";
        let (start, end) = visible_window(s, 2, 5);
        assert_eq!(&s[start..end], "abcde");
    }
}
