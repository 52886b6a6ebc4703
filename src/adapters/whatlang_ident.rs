#![forbid(unsafe_code)]

//! Language identification backed by the `whatlang` trigram detector

use super::LanguageIdentifier;

/// Code returned when the detector cannot decide
pub const UNKNOWN_LANG: &str = "unk";

// whatlang reports ISO 639-3; the pipeline speaks ISO 639-1
const ISO_639_3_TO_1: &[(&str, &str)] = &[
    ("afr", "af"),
    ("aka", "ak"),
    ("amh", "am"),
    ("ara", "ar"),
    ("aze", "az"),
    ("bel", "be"),
    ("ben", "bn"),
    ("bul", "bg"),
    ("cat", "ca"),
    ("ces", "cs"),
    ("cmn", "zh"),
    ("dan", "da"),
    ("deu", "de"),
    ("ell", "el"),
    ("eng", "en"),
    ("epo", "eo"),
    ("est", "et"),
    ("fin", "fi"),
    ("fra", "fr"),
    ("guj", "gu"),
    ("heb", "he"),
    ("hin", "hi"),
    ("hrv", "hr"),
    ("hun", "hu"),
    ("hye", "hy"),
    ("ind", "id"),
    ("ita", "it"),
    ("jav", "jv"),
    ("jpn", "ja"),
    ("kan", "kn"),
    ("kat", "ka"),
    ("khm", "km"),
    ("kor", "ko"),
    ("lat", "la"),
    ("lav", "lv"),
    ("lit", "lt"),
    ("mal", "ml"),
    ("mar", "mr"),
    ("mkd", "mk"),
    ("mya", "my"),
    ("nep", "ne"),
    ("nld", "nl"),
    ("nob", "nb"),
    ("ori", "or"),
    ("pan", "pa"),
    ("pes", "fa"),
    ("pol", "pl"),
    ("por", "pt"),
    ("ron", "ro"),
    ("rus", "ru"),
    ("sin", "si"),
    ("slk", "sk"),
    ("slv", "sl"),
    ("sna", "sn"),
    ("spa", "es"),
    ("srp", "sr"),
    ("swe", "sv"),
    ("tam", "ta"),
    ("tel", "te"),
    ("tgl", "tl"),
    ("tha", "th"),
    ("tuk", "tk"),
    ("tur", "tr"),
    ("ukr", "uk"),
    ("urd", "ur"),
    ("uzb", "uz"),
    ("vie", "vi"),
    ("yid", "yi"),
    ("zul", "zu"),
];

/// Maps an ISO 639-3 code to ISO 639-1 when a two-letter code exists
pub fn to_iso_639_1(code: &str) -> &str {
    ISO_639_3_TO_1
        .binary_search_by(|(three, _)| three.cmp(&code))
        .map_or(code, |idx| ISO_639_3_TO_1[idx].1)
}

/// `LanguageIdentifier` running whatlang over the whole sentence
///
/// One instance is built per side. Detection is stateless, so the instance
/// can be shared between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhatlangIdentifier;

impl WhatlangIdentifier {
    pub fn new() -> Self {
        Self
    }
}

impl LanguageIdentifier for WhatlangIdentifier {
    fn getlang(&self, text: &str) -> String {
        match whatlang::detect_lang(text) {
            Some(lang) => to_iso_639_1(lang.code()).to_string(),
            None => UNKNOWN_LANG.to_string(),
        }
    }
}
