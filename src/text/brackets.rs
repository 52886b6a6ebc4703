#![forbid(unsafe_code)]

//! Bracket-balance heuristic evaluated jointly on both sides of a pair

const BRACKETS: [char; 8] = ['[', ']', '(', ')', '{', '}', '⟨', '⟩'];

// Families checked strictly: equal open/close counts, at most 6 in total
const STRICT_FAMILIES: [(char, char); 3] = [('[', ']'), ('{', '}'), ('⟨', '⟩')];

const MAX_STRICT_BRACKETS: usize = 6;

#[derive(Debug, Default)]
struct BracketCounts {
    counts: [usize; BRACKETS.len()],
}

impl BracketCounts {
    fn of(text: &str) -> Self {
        let mut counts = [0; BRACKETS.len()];
        for c in text.chars() {
            if let Some(idx) = BRACKETS.iter().position(|&b| b == c) {
                counts[idx] += 1;
            }
        }
        Self { counts }
    }

    fn get(&self, bracket: char) -> usize {
        BRACKETS
            .iter()
            .position(|&b| b == bracket)
            .map_or(0, |idx| self.counts[idx])
    }

    fn is_empty(&self) -> bool {
        self.counts.iter().all(|&n| n == 0)
    }

    fn strict_families_ok(&self) -> bool {
        STRICT_FAMILIES.iter().all(|&(open, close)| {
            let (open, close) = (self.get(open), self.get(close));
            open + close <= MAX_STRICT_BRACKETS && open == close
        })
    }

    fn parens_balanced(&self) -> bool {
        self.get('(') == self.get(')')
    }
}

/// Checks bracket usage on a sentence pair
///
/// Pairs without any bracket pass. Otherwise, on each side, `[]`, `{}` and
/// `⟨⟩` must each be balanced and used at most 6 times. Parentheses may be
/// unbalanced only if both sides have the same number of `)`, which keeps
/// enumerations such as "a) ... b) ..." that are mirrored in the translation.
pub fn brackets_balanced(left: &str, right: &str) -> bool {
    let left = BracketCounts::of(left);
    let right = BracketCounts::of(right);

    if left.is_empty() && right.is_empty() {
        return true;
    }

    if !left.strict_families_ok() || !right.strict_families_ok() {
        return false;
    }

    if left.parens_balanced() && right.parens_balanced() {
        return true;
    }

    left.get(')') == right.get(')')
}
