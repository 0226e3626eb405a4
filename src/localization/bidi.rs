//! Logical to visual reordering for right-to-left display.
//!
//! egui lays glyphs out left to right, so mixed Arabic/Latin strings are
//! reordered with the Unicode bidi algorithm before they reach a widget.
//! Each line is its own paragraph and picks its base direction from its
//! first strong character.
use unicode_bidi::BidiInfo;

/// visual order of one line
fn display_line(line: &str) -> String {
    if line.is_empty() {
        return String::new();
    }
    let bidi_info = BidiInfo::new(line, None);
    bidi_info
        .paragraphs
        .iter()
        .map(|para| bidi_info.reorder_line(para, para.range.clone()).into_owned())
        .collect()
}

/// visual order of a possibly multi-line text, line breaks are kept in place
pub fn get_display(text: &str) -> String {
    text.split('\n').map(display_line).collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ltr_text_is_unchanged() {
        assert_eq!(get_display("Change Language"), "Change Language");
        assert_eq!(get_display(""), "");
    }

    #[test]
    fn test_rtl_run_is_reversed() {
        assert_eq!(get_display("\u{0627}\u{0628}\u{062A}"), "\u{062A}\u{0628}\u{0627}");
    }

    #[test]
    fn test_lines_are_reordered_separately() {
        let text = "\u{0627}\u{0628} \u{062A}\nx^2+4";
        assert_eq!(get_display(text), "\u{062A} \u{0628}\u{0627}\nx^2+4");
    }

    #[test]
    fn test_rtl_run_inside_ltr_paragraph() {
        let text = "[x]: Invalid | \u{0627}\u{0628} \u{062A}";
        assert_eq!(get_display(text), "[x]: Invalid | \u{062A} \u{0628}\u{0627}");
    }
}
