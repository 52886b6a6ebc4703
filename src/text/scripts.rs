#![forbid(unsafe_code)]

//! Writing-script families for alphabetic characters

use serde::Serialize;
use std::fmt;

/// Broad writing-script family
///
/// Scripts that legitimately mix inside one sentence share a family: Han,
/// kana, Bopomofo and Hangul are all `Cjk`; Syriac and Thaana go with `Arabic`;
/// the Brahmic scripts of India and Sri Lanka are `Indic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptFamily {
    Latin,
    Greek,
    Cyrillic,
    Armenian,
    Georgian,
    Hebrew,
    Arabic,
    Indic,
    Thai,
    Lao,
    Tibetan,
    Myanmar,
    Ethiopic,
    Khmer,
    Mongolian,
    Cjk,
}

impl ScriptFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScriptFamily::Latin => "latin",
            ScriptFamily::Greek => "greek",
            ScriptFamily::Cyrillic => "cyrillic",
            ScriptFamily::Armenian => "armenian",
            ScriptFamily::Georgian => "georgian",
            ScriptFamily::Hebrew => "hebrew",
            ScriptFamily::Arabic => "arabic",
            ScriptFamily::Indic => "indic",
            ScriptFamily::Thai => "thai",
            ScriptFamily::Lao => "lao",
            ScriptFamily::Tibetan => "tibetan",
            ScriptFamily::Myanmar => "myanmar",
            ScriptFamily::Ethiopic => "ethiopic",
            ScriptFamily::Khmer => "khmer",
            ScriptFamily::Mongolian => "mongolian",
            ScriptFamily::Cjk => "cjk",
        }
    }
}

impl fmt::Display for ScriptFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Code point ranges per family, sorted by start
const SCRIPT_RANGES: &[(u32, u32, ScriptFamily)] = &[
    (0x0041, 0x005A, ScriptFamily::Latin),
    (0x0061, 0x007A, ScriptFamily::Latin),
    (0x00AA, 0x00AA, ScriptFamily::Latin),
    (0x00BA, 0x00BA, ScriptFamily::Latin),
    (0x00C0, 0x02AF, ScriptFamily::Latin),
    (0x0370, 0x03FF, ScriptFamily::Greek),
    (0x0400, 0x052F, ScriptFamily::Cyrillic),
    (0x0530, 0x058F, ScriptFamily::Armenian),
    (0x0590, 0x05FF, ScriptFamily::Hebrew),
    (0x0600, 0x07BF, ScriptFamily::Arabic),
    (0x0860, 0x08FF, ScriptFamily::Arabic),
    (0x0900, 0x0DFF, ScriptFamily::Indic),
    (0x0E00, 0x0E7F, ScriptFamily::Thai),
    (0x0E80, 0x0EFF, ScriptFamily::Lao),
    (0x0F00, 0x0FFF, ScriptFamily::Tibetan),
    (0x1000, 0x109F, ScriptFamily::Myanmar),
    (0x10A0, 0x10FF, ScriptFamily::Georgian),
    (0x1100, 0x11FF, ScriptFamily::Cjk),
    (0x1200, 0x139F, ScriptFamily::Ethiopic),
    (0x1780, 0x17FF, ScriptFamily::Khmer),
    (0x1800, 0x18AF, ScriptFamily::Mongolian),
    (0x1C80, 0x1C8F, ScriptFamily::Cyrillic),
    (0x1C90, 0x1CBF, ScriptFamily::Georgian),
    (0x1D00, 0x1DBF, ScriptFamily::Latin),
    (0x1E00, 0x1EFF, ScriptFamily::Latin),
    (0x1F00, 0x1FFF, ScriptFamily::Greek),
    (0x2C60, 0x2C7F, ScriptFamily::Latin),
    (0x2D00, 0x2D2F, ScriptFamily::Georgian),
    (0x2D80, 0x2DDF, ScriptFamily::Ethiopic),
    (0x2DE0, 0x2DFF, ScriptFamily::Cyrillic),
    (0x2E80, 0x2FDF, ScriptFamily::Cjk),
    (0x3000, 0x31FF, ScriptFamily::Cjk),
    (0x3400, 0x4DBF, ScriptFamily::Cjk),
    (0x4E00, 0x9FFF, ScriptFamily::Cjk),
    (0xA640, 0xA69F, ScriptFamily::Cyrillic),
    (0xA720, 0xA7FF, ScriptFamily::Latin),
    (0xA8E0, 0xA8FF, ScriptFamily::Indic),
    (0xA960, 0xA97F, ScriptFamily::Cjk),
    (0xAB30, 0xAB6F, ScriptFamily::Latin),
    (0xAC00, 0xD7FF, ScriptFamily::Cjk),
    (0xF900, 0xFAFF, ScriptFamily::Cjk),
    (0xFB00, 0xFB06, ScriptFamily::Latin),
    (0xFB13, 0xFB17, ScriptFamily::Armenian),
    (0xFB1D, 0xFB4F, ScriptFamily::Hebrew),
    (0xFB50, 0xFDFF, ScriptFamily::Arabic),
    (0xFE70, 0xFEFF, ScriptFamily::Arabic),
    (0xFF21, 0xFF3A, ScriptFamily::Latin),
    (0xFF41, 0xFF5A, ScriptFamily::Latin),
    (0xFF66, 0xFFDC, ScriptFamily::Cjk),
    (0x20000, 0x2FA1F, ScriptFamily::Cjk),
];

/// Returns the script family of a character, if it belongs to a known one
pub fn script_family(c: char) -> Option<ScriptFamily> {
    let cp = c as u32;
    let idx = SCRIPT_RANGES.partition_point(|&(start, _, _)| start <= cp);
    let (start, end, family) = *SCRIPT_RANGES.get(idx.checked_sub(1)?)?;
    (start..=end).contains(&cp).then_some(family)
}

/// Returns true if every alphabetic character with a known family belongs
/// to the same family
pub fn is_single_script(text: &str) -> bool {
    let mut families = text
        .chars()
        .filter(|c| c.is_alphabetic())
        .filter_map(script_family);

    match families.next() {
        Some(first) => families.all(|family| family == first),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges_are_sorted_and_disjoint() {
        for pair in SCRIPT_RANGES.windows(2) {
            assert!(pair[0].0 <= pair[0].1);
            assert!(pair[0].1 < pair[1].0, "overlap at {:#x}", pair[1].0);
        }
    }

    #[test]
    fn test_script_family() {
        assert_eq!(script_family('a'), Some(ScriptFamily::Latin));
        assert_eq!(script_family('é'), Some(ScriptFamily::Latin));
        assert_eq!(script_family('ж'), Some(ScriptFamily::Cyrillic));
        assert_eq!(script_family('λ'), Some(ScriptFamily::Greek));
        assert_eq!(script_family('ש'), Some(ScriptFamily::Hebrew));
        assert_eq!(script_family('ب'), Some(ScriptFamily::Arabic));
        assert_eq!(script_family('क'), Some(ScriptFamily::Indic));
        assert_eq!(script_family('中'), Some(ScriptFamily::Cjk));
        assert_eq!(script_family('か'), Some(ScriptFamily::Cjk));
        assert_eq!(script_family('한'), Some(ScriptFamily::Cjk));
        assert_eq!(script_family('1'), None);
        assert_eq!(script_family(' '), None);
    }

    #[test]
    fn test_is_single_script() {
        assert!(is_single_script("Hello, world!"));
        assert!(is_single_script("Привет, мир!"));
        assert!(is_single_script("日本語のテキストです"));
        assert!(is_single_script("1234 !!!"));
        assert!(!is_single_script("Hello мир"));
        assert!(!is_single_script("Ελληνικά and English"));
    }
}
