#![forbid(unsafe_code)]

//! Detection of immediately repeated substrings
//!
//! The pattern being emulated is `(.+)\1`, optionally anchored as
//! `\b(.+)\1\b`. Backreferences are outside what the `regex` crate offers, so
//! the scanner below reproduces the match sequence a backtracking engine
//! produces: leftmost start, longest repeated unit (greedy), non-overlapping,
//! with the unit never spanning a newline.

/// Iterator over non-overlapping immediate repetitions in a string
///
/// Each item is the full match, i.e. both copies of the repeated unit.
pub struct RepeatScanner<'a> {
    text: &'a str,
    chars: Vec<char>,
    // Byte offset of every char, plus the end of the text
    offsets: Vec<usize>,
    // Index of the first newline at or after each position
    line_end: Vec<usize>,
    word_bounded: bool,
    pos: usize,
}

impl<'a> RepeatScanner<'a> {
    /// Scanner for `(.+)\1`
    pub fn unanchored(text: &'a str) -> Self {
        Self::new(text, false)
    }

    /// Scanner for `\b(.+)\1\b`
    pub fn word_bounded(text: &'a str) -> Self {
        Self::new(text, true)
    }

    fn new(text: &'a str, word_bounded: bool) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let mut offsets: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        offsets.push(text.len());

        let n = chars.len();
        let mut line_end = vec![n; n + 1];
        for i in (0..n).rev() {
            line_end[i] = if chars[i] == '\n' { i } else { line_end[i + 1] };
        }

        Self {
            text,
            chars,
            offsets,
            line_end,
            word_bounded,
            pos: 0,
        }
    }

    fn is_word_char(c: char) -> bool {
        c.is_alphanumeric() || c == '_'
    }

    fn is_boundary(&self, idx: usize) -> bool {
        let before = idx > 0 && Self::is_word_char(self.chars[idx - 1]);
        let after = idx < self.chars.len() && Self::is_word_char(self.chars[idx]);
        before != after
    }

    /// Longest repeated unit starting at `start`, as the end index of the match
    fn match_at(&self, start: usize) -> Option<usize> {
        if self.word_bounded && !self.is_boundary(start) {
            return None;
        }
        let max_unit = (self.line_end[start] - start) / 2;
        (1..=max_unit).rev().find_map(|unit| {
            let end = start + 2 * unit;
            let repeated = self.chars[start..start + unit] == self.chars[start + unit..end];
            let bounded = !self.word_bounded || self.is_boundary(end);
            (repeated && bounded).then_some(end)
        })
    }
}

impl<'a> Iterator for RepeatScanner<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.chars.len() {
            let start = self.pos;
            if let Some(end) = self.match_at(start) {
                self.pos = end;
                return Some(&self.text[self.offsets[start]..self.offsets[end]]);
            }
            self.pos += 1;
        }
        None
    }
}

/// Returns true if the sentence repeats a chunk longer than `min_chars`
/// characters back to back, and the chunk holds at least one letter
///
/// `word_bounded` selects the anchored pattern, suitable only for languages
/// with reliable word boundaries.
pub fn has_repeated_words(text: &str, word_bounded: bool, min_chars: usize) -> bool {
    let mut scanner = if word_bounded {
        RepeatScanner::word_bounded(text)
    } else {
        RepeatScanner::unanchored(text)
    };

    scanner.any(|found| {
        let found = found.trim();
        found.chars().count() > min_chars && found.chars().any(char::is_alphabetic)
    })
}
