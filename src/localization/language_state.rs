use crate::localization::reshape_text;
use log::info;
use strum_macros::{Display, EnumIter};

/// interface language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter)]
pub enum Language {
    #[default]
    #[strum(to_string = "en")]
    English,
    #[strum(to_string = "ar")]
    Arabic,
}

impl Language {
    pub fn toggled(self) -> Language {
        match self {
            Language::English => Language::Arabic,
            Language::Arabic => Language::English,
        }
    }

    pub fn is_rtl(self) -> bool {
        self == Language::Arabic
    }
}

/// every piece of text the application shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum LabelKey {
    Prompt,
    PlotButton,
    LanguageButton,
    ChartTitle,
}

/// horizontal alignment of the prompt label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptAlign {
    Center,
    Right,
}

pub const WINDOW_TITLE: &str =
    "f(x) finder | موجد الاقتران التربيعي | by M.Alghoul | بإشراف الأستاذ احمد الفليفل";

/// shown on any failure, in both languages whatever the current one is
pub const ERROR_MESSAGE: &str = "[x]: Invalid Operation | لا يمكنك اجراء هذه العمليه";

/// logical (unshaped) text of a label
fn raw_text(language: Language, key: LabelKey) -> &'static str {
    match (language, key) {
        (Language::English, LabelKey::Prompt) => "Enter a mathematical function for x (eg. x^2+4):",
        (Language::English, LabelKey::PlotButton) => "Plot Function",
        (Language::English, LabelKey::LanguageButton) => "Change Language",
        (Language::English, LabelKey::ChartTitle) => "Function Plot",
        (Language::Arabic, LabelKey::Prompt) => "ادخل الداله البيانية: مثل \nx^2+4",
        (Language::Arabic, LabelKey::PlotButton) => "رسم الدالة",
        (Language::Arabic, LabelKey::LanguageButton) => "تغيير اللغة",
        (Language::Arabic, LabelKey::ChartTitle) => "تمثيل بياني للدالة",
    }
}

/// text of a label ready for display: Arabic is reshaped and put in visual order
pub fn label_text(language: Language, key: LabelKey) -> String {
    let text = raw_text(language, key);
    match language {
        Language::English => text.to_string(),
        Language::Arabic => reshape_text(text),
    }
}

/// the bilingual error message in display order
pub fn error_text() -> String {
    reshape_text(ERROR_MESSAGE)
}

/// Texts currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub prompt: String,
    pub prompt_align: PromptAlign,
    pub plot_button: String,
    pub language_button: String,
    /// empty when there is nothing to report
    pub result: String,
}

impl Labels {
    pub fn for_language(language: Language) -> Labels {
        Labels {
            prompt: label_text(language, LabelKey::Prompt),
            prompt_align: if language.is_rtl() {
                PromptAlign::Right
            } else {
                PromptAlign::Center
            },
            plot_button: label_text(language, LabelKey::PlotButton),
            language_button: label_text(language, LabelKey::LanguageButton),
            result: String::new(),
        }
    }
}

/// Current language together with the labels generated for it.
///
/// The language is only changed through [`LanguageState::toggle`], which
/// regenerates the labels in the same call, so both always agree.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageState {
    language: Language,
    labels: Labels,
}

impl Default for LanguageState {
    fn default() -> Self {
        LanguageState::new(Language::default())
    }
}

impl LanguageState {
    pub fn new(language: Language) -> Self {
        LanguageState {
            language,
            labels: Labels::for_language(language),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// flips the language and rewrites every label, the result line is cleared
    pub fn toggle(&mut self) {
        self.language = self.language.toggled();
        self.labels = Labels::for_language(self.language);
        info!("interface language switched to {}", self.language);
    }

    /// title of the chart window in the current language
    pub fn chart_title(&self) -> String {
        label_text(self.language, LabelKey::ChartTitle)
    }

    pub fn clear_result(&mut self) {
        self.labels.result.clear();
    }

    pub fn show_error(&mut self) {
        self.labels.result = error_text();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_default_is_english() {
        let state = LanguageState::default();
        assert_eq!(state.language(), Language::English);
        assert_eq!(
            state.labels().prompt,
            "Enter a mathematical function for x (eg. x^2+4):"
        );
        assert_eq!(state.labels().plot_button, "Plot Function");
        assert_eq!(state.labels().language_button, "Change Language");
        assert_eq!(state.labels().prompt_align, PromptAlign::Center);
        assert!(state.labels().result.is_empty());
    }

    #[test]
    fn test_toggle_switches_alignment() {
        let mut state = LanguageState::default();
        state.toggle();
        assert_eq!(state.language(), Language::Arabic);
        assert_eq!(state.labels().prompt_align, PromptAlign::Right);
        state.toggle();
        assert_eq!(state.labels().prompt_align, PromptAlign::Center);
    }

    #[test]
    fn test_double_toggle_restores_labels() {
        for language in Language::iter() {
            let mut state = LanguageState::new(language);
            let before = state.labels().clone();
            state.toggle();
            assert_ne!(state.labels(), &before);
            state.toggle();
            assert_eq!(state.labels(), &before);
            assert_eq!(state.language(), language);
        }
    }

    #[test]
    fn test_toggle_clears_result() {
        let mut state = LanguageState::default();
        state.show_error();
        assert!(!state.labels().result.is_empty());
        state.toggle();
        assert!(state.labels().result.is_empty());
    }

    #[test]
    fn test_arabic_labels_are_reshaped() {
        let state = LanguageState::new(Language::Arabic);
        // presentation forms only, no bare letters from the base Arabic block
        for label in [&state.labels().plot_button, &state.labels().language_button] {
            assert!(label.chars().all(|c| !('\u{0621}'..='\u{064A}').contains(&c)));
        }
        // the prompt keeps its example on a separate line
        assert!(state.labels().prompt.ends_with("\nx^2+4"));
    }

    #[test]
    fn test_english_labels_are_verbatim() {
        for key in LabelKey::iter() {
            assert_eq!(label_text(Language::English, key), raw_text(Language::English, key));
        }
    }

    #[test]
    fn test_error_text_is_bilingual_in_both_languages() {
        let text = error_text();
        assert!(text.starts_with("[x]: Invalid Operation | "));
        let mut state = LanguageState::default();
        state.show_error();
        assert_eq!(state.labels().result, text);
        state.toggle();
        state.show_error();
        assert_eq!(state.labels().result, text);
    }

    #[test]
    fn test_error_text_exact_visual_order() {
        // the Arabic half is shaped, then laid out right to left after the Latin half
        let arabic = "\u{FEEA}\u{FEF4}\u{FEE0}\u{FEE4}\u{FECC}\u{FEDF}\u{FE8D} \
                      \u{FEE9}\u{FEAC}\u{FEEB} \
                      \u{FE80}\u{FE8D}\u{FEAE}\u{FE9F}\u{FE8D} \
                      \u{FEDA}\u{FEE8}\u{FEDC}\u{FEE4}\u{FEF3} \
                      \u{FEFB}";
        assert_eq!(error_text(), format!("[x]: Invalid Operation | {}", arabic));
    }

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::English.to_string(), "en");
        assert_eq!(Language::Arabic.to_string(), "ar");
    }
}
