#![forbid(unsafe_code)]

//! Text-analysis primitives used by the built-in rules
//!
//! Every primitive is a pure function over one or two raw strings. Character
//! classes follow Unicode properties, never ASCII ranges.

pub mod analysis;
pub mod brackets;
pub mod repeats;
pub mod scripts;

pub use analysis::{
    alpha_ratio, blank_count, case_fold, char_len, contains_literal, digit_ratio,
    has_bad_encoding, has_escaped_unicode, has_glued_words, has_space_noise, has_unicode_noise,
    has_url, is_breadcrumb, is_multiword_title, length_ratio_within, letters_only, same_digits,
};
pub use brackets::brackets_balanced;
pub use repeats::{RepeatScanner, has_repeated_words};
pub use scripts::{ScriptFamily, is_single_script, script_family};

/// Languages written without whitespace word segmentation
pub const CJK_LANGS: &[&str] = &["zh", "ja", "ko"];

/// Languages whose word boundaries are reliable enough for the anchored
/// repeated-word pattern
pub const SAFE_NOISE_DETECTION_LANGS: &[&str] = &[
    "en", "es", "fr", "pl", "de", "it", "pt", "nl", "cs", "ro", "fi", "lv", "et", "bg", "hr", "da",
    "hu", "ga", "eu", "gl", "sl", "sv", "mt", "sk", "is", "lt", "nb", "nn", "no",
];

/// Languages that legitimately use `ã`
pub const ATILDE_LANGS: &[&str] = &["pt"];

/// Languages that legitimately use `â`
pub const ACIRCUMFLEX_LANGS: &[&str] = &["cy", "fr", "fa", "it", "pt", "tr", "vi"];

/// Languages with words made of long runs of Latin-1 supplement letters
/// (Icelandic `þýðir`, some Finnish)
pub const RELAXED_NOISE_LANGS: &[&str] = &["is", "fi"];

/// Returns true for Chinese, Japanese and Korean
pub fn is_cjk(lang: &str) -> bool {
    CJK_LANGS.contains(&lang)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_cjk() {
        assert!(is_cjk("zh"));
        assert!(is_cjk("ja"));
        assert!(is_cjk("ko"));
        assert!(!is_cjk("en"));
        assert!(!is_cjk("zh-Hant"));
    }

    #[test]
    fn test_language_sets_are_disjoint_where_expected() {
        for lang in CJK_LANGS {
            assert!(!SAFE_NOISE_DETECTION_LANGS.contains(lang));
        }
        assert!(ACIRCUMFLEX_LANGS.contains(&"pt"));
        assert!(ATILDE_LANGS.contains(&"pt"));
    }
}
