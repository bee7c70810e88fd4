//! Site language selection.
//!
//! Page copy is English only; the chosen language drives the document
//! `lang` attribute and the selector's label.

use leptos::*;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "th")]
    Thai,
    #[serde(rename = "de")]
    German,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::Spanish,
        Language::Thai,
        Language::German,
    ];

    pub const fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
            Language::Thai => "th",
            Language::German => "de",
        }
    }

    /// Name of the language in that language.
    pub const fn native_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Español",
            Language::Thai => "ไทย",
            Language::German => "Deutsch",
        }
    }

    pub const fn abbreviation(self) -> &'static str {
        match self {
            Language::English => "EN",
            Language::Spanish => "ES",
            Language::Thai => "TH",
            Language::German => "DE",
        }
    }

    pub const fn flag(self) -> &'static str {
        match self {
            Language::English => "🇬🇧",
            Language::Spanish => "🇪🇸",
            Language::Thai => "🇹🇭",
            Language::German => "🇩🇪",
        }
    }

    /// Accepts bare codes and region-tagged ones such as `de-AT`.
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code.split(['-', '_']).next().unwrap_or_default();
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(primary))
    }
}

/// The selected language, shared through Leptos context.
#[derive(Debug, Clone, Copy)]
pub struct LanguageContext(RwSignal<Language>);

impl LanguageContext {
    pub fn get(&self) -> Language {
        self.0.get()
    }

    pub fn set(&self, language: Language) {
        logging::log!("[I18N] Language set to {}", language.code());
        self.0.set(language);
    }
}

pub fn provide_language_context() -> LanguageContext {
    let context = LanguageContext(create_rw_signal(Language::default()));
    provide_context(context);
    context
}

/// The language context, created on the spot if no ancestor provided one.
pub fn use_language() -> LanguageContext {
    use_context::<LanguageContext>().unwrap_or_else(provide_language_context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
    }

    #[test]
    fn region_tags_and_case_are_ignored() {
        assert_eq!(Language::from_code("de-AT"), Some(Language::German));
        assert_eq!(Language::from_code("TH"), Some(Language::Thai));
        assert_eq!(Language::from_code("es_MX"), Some(Language::Spanish));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn serializes_as_code() {
        assert_eq!(serde_json::to_string(&Language::Thai).unwrap(), "\"th\"");
    }

    #[test]
    fn context_switches_language() {
        let runtime = create_runtime();
        let language = provide_language_context();
        assert_eq!(language.get(), Language::English);
        language.set(Language::German);
        assert_eq!(language.get(), Language::German);
        runtime.dispose();
    }
}
