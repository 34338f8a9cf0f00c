/// Display name and provider code for one supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub name: &'static str,
    pub code: &'static str,
}

/// The language pairs the session offers for selection.
pub const LANGUAGES: &[Language] = &[
    Language { name: "English", code: "en" },
    Language { name: "Spanish", code: "es" },
    Language { name: "French", code: "fr" },
    Language { name: "German", code: "de" },
    Language { name: "Italian", code: "it" },
    Language { name: "Portuguese", code: "pt" },
    Language { name: "Dutch", code: "nl" },
    Language { name: "Chinese (Simplified)", code: "zh-CN" },
    Language { name: "Japanese", code: "ja" },
    Language { name: "Korean", code: "ko" },
];

pub fn name_for(code: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|lang| lang.code.eq_ignore_ascii_case(code))
        .map(|lang| lang.name)
}

pub fn code_for(name: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|lang| lang.name.eq_ignore_ascii_case(name))
        .map(|lang| lang.code)
}

pub fn is_supported(code: &str) -> bool {
    name_for(code).is_some()
}
