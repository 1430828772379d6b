use std::collections::HashMap;
use std::sync::OnceLock;

/// Per-language voice matching rules and speaking rate
#[derive(Debug, PartialEq, Eq)]
pub struct LanguageProfile {
    pub code: &'static str,
    pub display_name: &'static str,
    /// Lowercase substrings that mark a voice name as speaking this language
    pub voice_keywords: &'static [&'static str],
    /// Lowercase substrings that mark a voice name as female
    pub female_keywords: &'static [&'static str],
    /// Words per minute handed to the speech engine
    pub speech_rate: u32,
}

/// Generic markers for male voices, shared by every language
pub const MALE_KEYWORDS: &[&str] = &["male", "david", "james"];

pub const DEFAULT_CODE: &str = "en";

static PROFILES: [LanguageProfile; 7] = [
    LanguageProfile {
        code: "en",
        display_name: "English",
        voice_keywords: &[
            "zira",
            "hazel",
            "susan",
            "david",
            "mark",
            "james",
            "microsoft english",
            "english",
            "uk",
            "british",
            "american",
            "en-",
            "en_",
        ],
        female_keywords: &["zira", "hazel", "susan", "female", "woman"],
        speech_rate: 180,
    },
    LanguageProfile {
        code: "bn",
        display_name: "Bengali/Bangla",
        voice_keywords: &["bangla", "bengali", "microsoft bangla", "bn-", "bn_"],
        female_keywords: &["female", "bangla female", "bengali female"],
        speech_rate: 160,
    },
    LanguageProfile {
        code: "zh",
        display_name: "Chinese",
        voice_keywords: &[
            "chinese",
            "huihui",
            "microsoft chinese",
            "zh-",
            "zh_",
            "mandarin",
            "cantonese",
            "cmn-",
            "yue-",
        ],
        female_keywords: &["huihui", "chinese female", "mandarin female"],
        speech_rate: 170,
    },
    LanguageProfile {
        code: "ko",
        display_name: "Korean",
        voice_keywords: &["korean", "microsoft korean", "ko-", "ko_"],
        female_keywords: &["korean female"],
        speech_rate: 170,
    },
    LanguageProfile {
        code: "hi",
        display_name: "Hindi",
        voice_keywords: &["hindi", "microsoft hindi", "hi-", "hi_", "indian"],
        female_keywords: &["hindi female", "indian female"],
        speech_rate: 160,
    },
    LanguageProfile {
        code: "fr",
        display_name: "French",
        voice_keywords: &["french", "microsoft french", "fr-", "fr_", "france"],
        female_keywords: &["french female"],
        speech_rate: 175,
    },
    LanguageProfile {
        code: "it",
        display_name: "Italian",
        voice_keywords: &["italian", "microsoft italian", "it-", "it_", "italy"],
        female_keywords: &["italian female"],
        speech_rate: 175,
    },
];

/// All supported languages, in menu order
pub fn profiles() -> &'static [LanguageProfile] {
    &PROFILES
}

/// Look up a profile by its code (exact, lowercase)
pub fn profile(code: &str) -> Option<&'static LanguageProfile> {
    static INDEX: OnceLock<HashMap<&'static str, &'static LanguageProfile>> = OnceLock::new();
    INDEX
        .get_or_init(|| PROFILES.iter().map(|p| (p.code, p)).collect())
        .get(code)
        .copied()
}

/// Profile used when a code has no entry of its own
pub fn default_profile() -> &'static LanguageProfile {
    &PROFILES[0]
}

/// Union of every profile's female keywords
pub fn female_keywords() -> impl Iterator<Item = &'static str> {
    PROFILES
        .iter()
        .flat_map(|p| p.female_keywords.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_codes_unique() {
        let codes: HashSet<_> = PROFILES.iter().map(|p| p.code).collect();
        assert_eq!(codes.len(), PROFILES.len());
    }

    #[test]
    fn test_lookup() {
        assert_eq!(profile("fr").unwrap().display_name, "French");
        assert_eq!(profile("bn").unwrap().speech_rate, 160);
        assert!(profile("de").is_none());
        assert!(profile("EN").is_none());
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(default_profile().code, DEFAULT_CODE);
        assert_eq!(default_profile().speech_rate, 180);
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for p in profiles() {
            for kw in p.voice_keywords.iter().chain(p.female_keywords) {
                assert_eq!(*kw, kw.to_lowercase(), "{} keyword {kw}", p.code);
            }
        }
    }
}
