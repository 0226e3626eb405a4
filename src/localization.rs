//! Interface language and the text shown in it.
/// logical to visual reordering of right-to-left text
pub mod bidi;
/// current language and the labels generated for it
pub mod language_state;

use ar_reshaper::reshape_line;

/// contextual Arabic letter forms and lam-alef ligatures, line by line
pub fn reshape(text: &str) -> String {
    text.split('\n').map(|line| reshape_line(line)).collect::<Vec<_>>().join("\n")
}

/// Prepares Arabic (or mixed) text for a left-to-right text renderer:
/// contextual reshaping first, then bidi reordering.
pub fn reshape_text(text: &str) -> String {
    bidi::get_display(&reshape(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin_text_is_untouched() {
        assert_eq!(reshape("Plot Function"), "Plot Function");
        assert_eq!(reshape("x^2+4"), "x^2+4");
    }

    #[test]
    fn test_single_letter_is_isolated() {
        assert_eq!(reshape("\u{0628}"), "\u{FE8F}");
    }

    #[test]
    fn test_positional_forms() {
        // reh does not join forward, so seen starts a new join
        assert_eq!(reshape("رسم"), "\u{FEAD}\u{FEB3}\u{FEE2}");
        // initial, medial, final
        assert_eq!(reshape("بيت"), "\u{FE91}\u{FEF4}\u{FE96}");
    }

    #[test]
    fn test_lam_alef_ligature() {
        assert_eq!(reshape("ال"), "\u{FE8D}\u{FEDD}");
        assert_eq!(reshape("لا"), "\u{FEFB}");
        // kaf joins the lam, so the ligature takes its final form
        assert_eq!(reshape("كلا"), "\u{FEDB}\u{FEFC}");
    }

    #[test]
    fn test_harakat_are_dropped_without_breaking_joins() {
        assert_eq!(reshape("بَت"), "\u{FE91}\u{FE96}");
    }

    #[test]
    fn test_word_boundaries() {
        assert_eq!(
            reshape("رسم الدالة"),
            "\u{FEAD}\u{FEB3}\u{FEE2} \u{FE8D}\u{FEDF}\u{FEAA}\u{FE8D}\u{FEDF}\u{FE94}"
        );
    }

    #[test]
    fn test_lines_are_shaped_separately() {
        assert_eq!(reshape("بت\nx^2+4"), "\u{FE91}\u{FE96}\nx^2+4");
    }

    #[test]
    fn test_reshape_then_reorder() {
        assert_eq!(reshape_text("لا بت"), "\u{FE91}\u{FE96} \u{FEFB}");
    }
}
