#![forbid(unsafe_code)]

//! Character-class and pattern checks on raw sentences

use super::{ACIRCUMFLEX_LANGS, ATILDE_LANGS};
use regex::Regex;
use std::sync::LazyLock;

static NON_LETTER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\P{L}+").unwrap());

// ASCII only: fullwidth and other script digits are not counted
static DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]").unwrap());

static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(https?://.)?(www\.)?[-a-zA-Z0-9@:%._+~#=]{2,256}\.[a-z]{2,6}\b([-a-zA-Z0-9@:%_+.~#?&/=]*)",
    )
    .unwrap()
});

// Sparse separators: " - ", " / ", "<", ">", "*", " : "
static BREADCRUMBS_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ ][-/][ ]|[<>*]|[ ][:][ ]").unwrap());

// Navigation glyphs
static BREADCRUMBS_GLYPHS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ ][»][ ]|[|→←•·¬]").unwrap());

static GLUED_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\p{Alphabetic}*\p{Uppercase}\p{Lowercase}+){3}").unwrap()
});

static UNICODE_NOISE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x{80}-\x{FF}]{3,}").unwrap());

static UNICODE_NOISE_RELAXED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x{80}-\x{FF}]{7,}").unwrap());

static SPACE_NOISE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?:[ ]\D){4,}[ ]").unwrap());

static ESCAPED_UNICODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\[xu][0-9a-fA-F]{2,}").unwrap());

/// Number of Unicode scalar values
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Number of word separators (plain and no-break spaces)
pub fn blank_count(text: &str) -> usize {
    text.chars().filter(|&c| c == ' ' || c == '\u{00A0}').count()
}

/// Removes every character whose general category is not a letter
pub fn letters_only(text: &str) -> String {
    NON_LETTER.replace_all(text, "").into_owned()
}

/// Full Unicode case folding (ligatures and `ß` expand, final sigma folds)
pub fn case_fold(text: &str) -> String {
    caseless::default_case_fold_str(text)
}

/// Checks that the length ratio `left / right` lies in `[1/max_ratio, max_ratio]`
///
/// Lengths are counted in characters, or in UTF-8 bytes when `use_bytes` is
/// set (CJK pairs). An empty right side has no defined ratio and fails.
pub fn length_ratio_within(left: &str, right: &str, max_ratio: f64, use_bytes: bool) -> bool {
    let (left_len, right_len) = if use_bytes {
        (left.len(), right.len())
    } else {
        (char_len(left), char_len(right))
    };
    if right_len == 0 {
        return false;
    }
    let ratio = left_len as f64 / right_len as f64;
    1.0 / max_ratio <= ratio && ratio <= max_ratio
}

/// Fraction of characters that are alphabetic
pub fn alpha_ratio(text: &str) -> f64 {
    let total = char_len(text);
    if total == 0 {
        return 0.0;
    }
    let alpha = text.chars().filter(|c| c.is_alphabetic()).count();
    alpha as f64 / total as f64
}

/// Fraction of characters that are ASCII digits
pub fn digit_ratio(text: &str) -> f64 {
    let total = char_len(text);
    if total == 0 {
        return 0.0;
    }
    DIGIT.find_iter(text).count() as f64 / total as f64
}

/// Returns true if the sentence contains anything that looks like a URL or domain
pub fn has_url(text: &str) -> bool {
    URL.is_match(text)
}

/// Returns true if the sentence looks like a navigation breadcrumb
///
/// Both sub-patterns must reach their thresholds (3 separators and 2 glyphs);
/// staying below either one is enough to pass.
pub fn is_breadcrumb(text: &str) -> bool {
    BREADCRUMBS_SEPARATORS.find_iter(text).count() >= 3
        && BREADCRUMBS_GLYPHS.find_iter(text).count() >= 2
}

/// Returns true if three or more capitalised words are glued together
pub fn has_glued_words(text: &str) -> bool {
    GLUED_WORDS.is_match(text)
}

/// Returns true on runs of Latin-1 supplement characters typical of mojibake
///
/// `relaxed` raises the run length from 3 to 7.
pub fn has_unicode_noise(text: &str, relaxed: bool) -> bool {
    if relaxed {
        UNICODE_NOISE_RELAXED.is_match(text)
    } else {
        UNICODE_NOISE.is_match(text)
    }
}

/// Returns true on letter-spaced text such as ` s p a c e d `
pub fn has_space_noise(text: &str) -> bool {
    SPACE_NOISE.is_match(text)
}

/// Returns true on literal `\xNN` / `\uNNNN` escape sequences
pub fn has_escaped_unicode(text: &str) -> bool {
    ESCAPED_UNICODE.is_match(text)
}

/// Returns true on the `Ã` / `Â` double-encoding artifacts, unless the
/// language legitimately uses the character
pub fn has_bad_encoding(text: &str, lang: &str) -> bool {
    (!ATILDE_LANGS.contains(&lang) && text.contains('Ã'))
        || (!ACIRCUMFLEX_LANGS.contains(&lang) && text.contains('Â'))
}

/// Returns true if any of the literals occurs in the sentence
pub fn contains_literal<S: AsRef<str>>(text: &str, literals: &[S]) -> bool {
    literals.iter().any(|literal| text.contains(literal.as_ref()))
}

/// Returns true if the sentence has more than one word and every word is capitalised
pub fn is_multiword_title(text: &str) -> bool {
    text.trim().contains(' ') && is_title_case(text)
}

/// Title-case test over cased characters
///
/// Upper/titlecase letters may only follow uncased characters, lowercase
/// letters only cased ones, and at least one cased character is required.
fn is_title_case(text: &str) -> bool {
    let mut previous_cased = false;
    let mut cased = false;
    for c in text.chars() {
        if c.is_uppercase() || is_titlecase_letter(c) {
            if previous_cased {
                return false;
            }
            previous_cased = true;
            cased = true;
        } else if c.is_lowercase() {
            if !previous_cased {
                return false;
            }
            previous_cased = true;
            cased = true;
        } else {
            previous_cased = false;
        }
    }
    cased
}

// Titlecase digraphs (ǅ, ǈ, ǋ, ǲ) differ from both their upper and lower forms.
fn is_titlecase_letter(c: char) -> bool {
    !c.is_uppercase()
        && !c.is_lowercase()
        && c.to_uppercase().ne(std::iter::once(c))
        && c.to_lowercase().ne(std::iter::once(c))
}

/// Compares the sorted ASCII digits of both sides
pub fn same_digits(left: &str, right: &str) -> bool {
    sorted_digits(left) == sorted_digits(right)
}

fn sorted_digits(text: &str) -> Vec<u8> {
    let mut digits: Vec<u8> = text.bytes().filter(u8::is_ascii_digit).collect();
    digits.sort_unstable();
    digits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_only_and_fold() {
        assert_eq!(letters_only("Hello, world!"), "Helloworld");
        assert_eq!(letters_only("¿Qué tal? 123"), "Quétal");
        assert_eq!(case_fold("Helloworld"), "helloworld");
        assert_eq!(case_fold("Straße"), "strasse");
        assert_eq!(case_fold("ΣΟΦΟΣ"), case_fold("σοφος"));
        assert_eq!(case_fold("ẞ"), "ss");
    }

    #[test]
    fn test_case_fold_ligatures() {
        assert_eq!(case_fold("ﬁle"), "file");
        assert_eq!(case_fold("oﬃce"), "office");
        assert_eq!(case_fold("ﬁle oﬃce"), case_fold("FILE OFFICE"));
        assert_eq!(case_fold("ŉ"), "ʼn");
    }

    #[test]
    fn test_blank_count() {
        assert_eq!(blank_count("one two three"), 2);
        assert_eq!(blank_count("one\u{00A0}two"), 1);
        assert_eq!(blank_count("one\ttwo"), 0);
    }

    #[test]
    fn test_length_ratio_boundaries() {
        assert!(length_ratio_within("ab", "abcd", 2.0, false));
        assert!(length_ratio_within("abcd", "ab", 2.0, false));
        assert!(!length_ratio_within("a", "abcde", 2.0, false));
        assert!(!length_ratio_within("abc", "", 2.0, false));
    }

    #[test]
    fn test_length_ratio_bytes() {
        // 2 chars / 6 bytes vs 6 ASCII chars
        assert!(!length_ratio_within("中文", "abcdef", 2.0, false));
        assert!(length_ratio_within("中文", "abcdef", 2.0, true));
    }

    #[test]
    fn test_alpha_and_digit_ratio() {
        assert_eq!(alpha_ratio(""), 0.0);
        assert!(alpha_ratio("abc") > 0.99);
        assert!(alpha_ratio("!!! ... ???") < 0.1);
        assert!((digit_ratio("12ab") - 0.5).abs() < f64::EPSILON);
        assert_eq!(digit_ratio("２０２３年"), 0.0);
        assert_eq!(digit_ratio("٣٤ab"), 0.0);
        assert!((digit_ratio("2023年") - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_has_url() {
        assert!(has_url("visit http://example.com/page now"));
        assert!(has_url("see www.example.org"));
        assert!(has_url("mail me at foo.com"));
        assert!(!has_url("No links in this sentence."));
    }

    #[test]
    fn test_breadcrumbs() {
        assert!(is_breadcrumb("Home > Products > Shoes > Boots | Sale | Offers"));
        // Three separators but no navigation glyphs
        assert!(!is_breadcrumb("a - b - c - d"));
        // Glyphs but only two separators
        assert!(!is_breadcrumb("Home > Shoes | Sale | Offers"));
    }

    #[test]
    fn test_glued_words() {
        assert!(has_glued_words("HomeProductsContact us"));
        assert!(!has_glued_words("Home Products Contact"));
        assert!(!has_glued_words("McDonald is here"));
    }

    #[test]
    fn test_unicode_noise() {
        assert!(has_unicode_noise("cafÃ©Ã©", false));
        assert!(!has_unicode_noise("café", false));
        assert!(has_unicode_noise("þýðir", false));
        assert!(!has_unicode_noise("þýðir", true));
    }

    #[test]
    fn test_space_noise() {
        assert!(has_space_noise("this is s p a c e d out"));
        assert!(!has_space_noise("a normal sentence here"));
        assert!(!has_space_noise("list 1 2 3 4 5 "));
    }

    #[test]
    fn test_escaped_unicode() {
        assert!(has_escaped_unicode(r"caf\xc3\xa9"));
        assert!(has_escaped_unicode(r"\u00e9t\u00e9"));
        assert!(!has_escaped_unicode(r"path\to\file"));
    }

    #[test]
    fn test_bad_encoding() {
        assert!(has_bad_encoding("SÃ£o Paulo", "en"));
        assert!(!has_bad_encoding("Ãrvore", "pt"));
        assert!(has_bad_encoding("Â bientôt", "en"));
        assert!(!has_bad_encoding("Â bientôt", "fr"));
        assert!(!has_bad_encoding("plain text", "en"));
    }

    #[test]
    fn test_literals() {
        let literals = ["Re:", "{{"];
        assert!(contains_literal("Re: your message", &literals));
        assert!(contains_literal("value {{x}}", &literals));
        assert!(!contains_literal("Regarding your message", &literals));
        let empty: [&str; 0] = [];
        assert!(!contains_literal("anything", &empty));
    }

    #[test]
    fn test_title_case() {
        assert!(is_multiword_title("Terms And Conditions"));
        assert!(!is_multiword_title("Home"));
        assert!(!is_multiword_title("Terms and conditions"));
        assert!(!is_multiword_title("  Home  "));
        assert!(is_multiword_title("Política De Privacidad"));
        assert!(!is_multiword_title("123 456"));
    }

    #[test]
    fn test_same_digits() {
        assert!(same_digits("Call 123 now", "Llame al 321"));
        assert!(same_digits("no numbers", "sin números"));
        assert!(!same_digits("Room 12", "Habitación 13"));
    }
}
