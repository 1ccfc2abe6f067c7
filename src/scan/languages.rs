//! Recognition language catalogue
//!
//! Language codes are the engine's traineddata names.

/// Language used when none is configured
pub const DEFAULT_LANGUAGE: &str = "eng";

/// Supported recognition languages as `(code, display name)`
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("afr", "Afrikaans"),
    ("amh", "Amharic"),
    ("ara", "Arabic"),
    ("asm", "Assamese"),
    ("aze", "Azerbaijani"),
    ("aze_cyrl", "Azerbaijani - Cyrillic"),
    ("bel", "Belarusian"),
    ("ben", "Bengali"),
    ("bod", "Tibetan"),
    ("bos", "Bosnian"),
    ("bul", "Bulgarian"),
    ("cat", "Catalan"),
    ("ceb", "Cebuano"),
    ("ces", "Czech"),
    ("chi_sim", "Chinese - Simplified"),
    ("chi_tra", "Chinese - Traditional"),
    ("chr", "Cherokee"),
    ("cym", "Welsh"),
    ("dan", "Danish"),
    ("deu", "German"),
    ("dzo", "Dzongkha"),
    ("ell", "Greek - Modern"),
    ("eng", "English"),
    ("enm", "English - Middle"),
    ("epo", "Esperanto"),
    ("est", "Estonian"),
    ("eus", "Basque"),
    ("fas", "Persian"),
    ("fin", "Finnish"),
    ("fra", "French"),
    ("frk", "German Fraktur"),
    ("frm", "French - Middle"),
    ("gle", "Irish"),
    ("glg", "Galician"),
    ("grc", "Greek - Ancient"),
    ("guj", "Gujarati"),
    ("hat", "Haitian"),
    ("heb", "Hebrew"),
    ("hin", "Hindi"),
    ("hrv", "Croatian"),
    ("hun", "Hungarian"),
    ("iku", "Inuktitut"),
    ("ind", "Indonesian"),
    ("isl", "Icelandic"),
    ("ita", "Italian"),
    ("ita_old", "Italian - Old"),
    ("jav", "Javanese"),
    ("jpn", "Japanese"),
    ("kan", "Kannada"),
    ("kat", "Georgian"),
    ("kat_old", "Georgian - Old"),
    ("kaz", "Kazakh"),
    ("khm", "Central"),
    ("kir", "Kirghiz"),
    ("kor", "Korean"),
    ("kur", "Kurdish"),
    ("lao", "Lao"),
    ("lat", "Latin"),
    ("lav", "Latvian"),
    ("lit", "Lithuanian"),
    ("mal", "Malayalam"),
    ("mar", "Marathi"),
    ("mkd", "Macedonian"),
    ("mlt", "Maltese"),
    ("msa", "Malay"),
    ("mya", "Burmese"),
    ("nep", "Nepali"),
    ("nld", "Dutch"),
    ("nor", "Norwegian"),
    ("ori", "Oriya"),
    ("pan", "Panjabi"),
    ("pol", "Polish"),
    ("por", "Portuguese"),
    ("pus", "Pushto"),
    ("ron", "Romanian"),
    ("rus", "Russian"),
    ("san", "Sanskrit"),
    ("sin", "Sinhala"),
    ("slk", "Slovak"),
    ("slv", "Slovenian"),
    ("spa", "Spanish"),
    ("spa_old", "Spanish - Old"),
    ("sqi", "Albanian"),
    ("srp", "Serbian"),
    ("srp_latn", "Serbian - Latin"),
    ("swa", "Swahili"),
    ("swe", "Swedish"),
    ("syr", "Syriac"),
    ("tam", "Tamil"),
    ("tel", "Telugu"),
    ("tgk", "Tajik"),
    ("tgl", "Tagalog"),
    ("tha", "Thai"),
    ("tir", "Tigrinya"),
    ("tur", "Turkish"),
    ("uig", "Uighur"),
    ("ukr", "Ukrainian"),
    ("urd", "Urdu"),
    ("uzb", "Uzbek"),
    ("uzb_cyrl", "Uzbek"),
    ("vie", "Vietnamese"),
    ("yid", "Yiddish"),
];

/// Display name for a language code
pub fn language_name(code: &str) -> Option<&'static str> {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

/// Whether the engine can recognize `code`
pub fn is_supported(code: &str) -> bool {
    language_name(code).is_some()
}

/// All supported languages, ordered by display name
pub fn languages_by_name() -> Vec<(&'static str, &'static str)> {
    let mut languages = SUPPORTED_LANGUAGES.to_vec();
    languages.sort_by(|a, b| a.1.cmp(b.1).then(a.0.cmp(b.0)));
    languages
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_language_is_supported() {
        assert!(is_supported(DEFAULT_LANGUAGE));
        assert_eq!(language_name(DEFAULT_LANGUAGE), Some("English"));
    }

    #[test]
    fn test_lookup() {
        assert_eq!(language_name("deu"), Some("German"));
        assert_eq!(language_name("chi_sim"), Some("Chinese - Simplified"));
        assert_eq!(language_name("xx"), None);
        assert!(!is_supported(""));
    }

    #[test]
    fn test_codes_are_unique() {
        let codes: HashSet<_> = SUPPORTED_LANGUAGES.iter().map(|(c, _)| *c).collect();
        assert_eq!(codes.len(), SUPPORTED_LANGUAGES.len());
    }

    #[test]
    fn test_sorted_by_display_name() {
        let sorted = languages_by_name();
        assert_eq!(sorted.len(), SUPPORTED_LANGUAGES.len());
        assert!(sorted.windows(2).all(|pair| pair[0].1 <= pair[1].1));
        assert_eq!(sorted[0], ("afr", "Afrikaans"));
    }
}
