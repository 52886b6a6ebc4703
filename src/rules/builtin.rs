#![forbid(unsafe_code)]

//! Built-in rule table
//!
//! `rules()` returns the predicates in evaluation order. Each check answers
//! "does this sentence (or pair) look acceptable?"; `false` discards the pair.

use crate::rules::{RuleContext, RuleParam, RuleSpec};
use crate::text::{self, RELAXED_NOISE_LANGS, SAFE_NOISE_DETECTION_LANGS, is_cjk};
use crate::types::Side;

/// Literals that betray e-mail subjects, templates and markup
pub const DEFAULT_LITERALS: &[&str] = &["Re:", "{{", "%s", "}}", "+++", "***", "=\""];

pub const DEFAULT_MAX_LENGTH: usize = 1024;

pub const DEFAULT_MIN_WORDS: usize = 3;

pub const DEFAULT_LENGTH_RATIO: f64 = 2.0;

const MIN_ALPHA_RATIO: f64 = 0.1;

const MAX_DIGIT_RATIO: f64 = 0.5;

const MAX_DIGIT_RATIO_CJK: f64 = 0.7;

/// The built-in rules in evaluation order
pub fn rules() -> Vec<RuleSpec> {
    vec![
        RuleSpec::per_side("no_empty", "Sentence is not empty", RuleParam::Flag, no_empty)
            .gating(),
        RuleSpec::per_side(
            "not_too_long",
            "Sentence is shorter than the given number of characters",
            RuleParam::Count(DEFAULT_MAX_LENGTH),
            not_too_long,
        ),
        RuleSpec::per_side(
            "not_too_short",
            "Sentence has at least the given number of words (characters for CJK)",
            RuleParam::Count(DEFAULT_MIN_WORDS),
            not_too_short,
        ),
        RuleSpec::paired(
            "length_ratio",
            "Length ratio of the two sides stays within [1/R, R]",
            RuleParam::Ratio(DEFAULT_LENGTH_RATIO),
            length_ratio,
        ),
        RuleSpec::paired(
            "no_identical",
            "Sides differ once punctuation and case are ignored",
            RuleParam::Flag,
            no_identical,
        ),
        RuleSpec::per_side(
            "no_literals",
            "Sentence contains none of the given literals",
            RuleParam::Literals(DEFAULT_LITERALS.iter().map(|s| s.to_string()).collect()),
            no_literals,
        ),
        RuleSpec::per_side(
            "no_only_symbols",
            "More than 10% of the characters are letters",
            RuleParam::Flag,
            no_only_symbols,
        ),
        RuleSpec::per_side(
            "no_only_numbers",
            "Less than half of the characters are digits (70% for CJK)",
            RuleParam::Flag,
            no_only_numbers,
        ),
        RuleSpec::per_side(
            "no_urls",
            "Sentence contains no URL or domain name",
            RuleParam::Flag,
            no_urls,
        )
        .disabled_by_default(),
        RuleSpec::per_side(
            "no_breadcrumbs",
            "Sentence is not a navigation breadcrumb",
            RuleParam::Flag,
            no_breadcrumbs,
        ),
        RuleSpec::per_side(
            "no_glued_words",
            "No run of three capitalised words glued together",
            RuleParam::Flag,
            no_glued_words,
        ),
        RuleSpec::per_side(
            "no_repeated_words",
            "No chunk of text repeated back to back",
            RuleParam::Flag,
            no_repeated_words,
        ),
        RuleSpec::per_side(
            "no_unicode_noise",
            "No runs of Latin-1 supplement characters",
            RuleParam::Flag,
            no_unicode_noise,
        ),
        RuleSpec::per_side(
            "no_space_noise",
            "Sentence is not letter-spaced",
            RuleParam::Flag,
            no_space_noise,
        ),
        RuleSpec::paired(
            "no_paren",
            "Brackets are balanced and not overused",
            RuleParam::Flag,
            no_paren,
        ),
        RuleSpec::per_side(
            "no_escaped_unicode",
            "No literal \\x or \\u escape sequences",
            RuleParam::Flag,
            no_escaped_unicode,
        ),
        RuleSpec::per_side(
            "no_bad_encoding",
            "No double-encoding artifacts for the side language",
            RuleParam::Flag,
            no_bad_encoding,
        ),
        RuleSpec::paired(
            "no_titles",
            "Sides are not both multi-word title-cased headings",
            RuleParam::Flag,
            no_titles,
        ),
        RuleSpec::paired(
            "no_number_inconsistencies",
            "Both sides contain the same digits",
            RuleParam::Flag,
            no_number_inconsistencies,
        )
        .disabled_by_default(),
        RuleSpec::per_side(
            "no_script_inconsistencies",
            "Letters of a sentence come from a single script family",
            RuleParam::Flag,
            no_script_inconsistencies,
        )
        .disabled_by_default(),
        RuleSpec::per_side(
            "no_wrong_language",
            "Detected language matches the side language",
            RuleParam::Flag,
            no_wrong_language,
        ),
        RuleSpec::paired(
            "no_porn",
            "Porn classifier labels the inspected side as clean",
            RuleParam::Flag,
            no_porn,
        ),
        RuleSpec::paired(
            "lm_filter",
            "Fluency score reaches the threshold",
            RuleParam::Flag,
            lm_filter,
        ),
    ]
}

fn no_empty(_: &RuleContext<'_>, _: &RuleParam, sentence: &str, _: Side) -> bool {
    !sentence.is_empty()
}

fn not_too_long(_: &RuleContext<'_>, param: &RuleParam, sentence: &str, _: Side) -> bool {
    let max = param.as_count().unwrap_or(DEFAULT_MAX_LENGTH);
    text::char_len(sentence) < max
}

fn not_too_short(ctx: &RuleContext<'_>, param: &RuleParam, sentence: &str, side: Side) -> bool {
    if ctx.disable_minimal_length {
        return true;
    }
    let min = param.as_count().unwrap_or(DEFAULT_MIN_WORDS);

    // CJK has no word separators
    if is_cjk(ctx.lang(side)) {
        return text::char_len(sentence) >= min;
    }
    text::blank_count(sentence) >= min.saturating_sub(1)
}

fn length_ratio(ctx: &RuleContext<'_>, param: &RuleParam, left: &str, right: &str) -> bool {
    let max_ratio = param.as_ratio().unwrap_or(DEFAULT_LENGTH_RATIO);
    let use_bytes = is_cjk(ctx.source_lang) || is_cjk(ctx.target_lang);
    text::length_ratio_within(left, right, max_ratio, use_bytes)
}

fn no_identical(_: &RuleContext<'_>, _: &RuleParam, left: &str, right: &str) -> bool {
    text::case_fold(&text::letters_only(left)) != text::case_fold(&text::letters_only(right))
}

fn no_literals(_: &RuleContext<'_>, param: &RuleParam, sentence: &str, _: Side) -> bool {
    !text::contains_literal(sentence, param.as_literals())
}

fn no_only_symbols(_: &RuleContext<'_>, _: &RuleParam, sentence: &str, _: Side) -> bool {
    text::alpha_ratio(sentence) > MIN_ALPHA_RATIO
}

fn no_only_numbers(ctx: &RuleContext<'_>, _: &RuleParam, sentence: &str, side: Side) -> bool {
    if sentence.is_empty() {
        return false;
    }
    let threshold = if is_cjk(ctx.lang(side)) {
        MAX_DIGIT_RATIO_CJK
    } else {
        MAX_DIGIT_RATIO
    };
    text::digit_ratio(sentence) < threshold
}

fn no_urls(_: &RuleContext<'_>, _: &RuleParam, sentence: &str, _: Side) -> bool {
    !text::has_url(sentence)
}

fn no_breadcrumbs(_: &RuleContext<'_>, _: &RuleParam, sentence: &str, _: Side) -> bool {
    !text::is_breadcrumb(sentence)
}

fn no_glued_words(_: &RuleContext<'_>, _: &RuleParam, sentence: &str, _: Side) -> bool {
    !text::has_glued_words(sentence)
}

fn no_repeated_words(ctx: &RuleContext<'_>, _: &RuleParam, sentence: &str, side: Side) -> bool {
    let lang = ctx.lang(side);
    let word_bounded = SAFE_NOISE_DETECTION_LANGS.contains(&lang);
    let min_chars = if is_cjk(lang) { 4 } else { 7 };
    !text::has_repeated_words(sentence, word_bounded, min_chars)
}

fn no_unicode_noise(ctx: &RuleContext<'_>, _: &RuleParam, sentence: &str, side: Side) -> bool {
    let relaxed = RELAXED_NOISE_LANGS.contains(&ctx.lang(side));
    !text::has_unicode_noise(sentence, relaxed)
}

fn no_space_noise(_: &RuleContext<'_>, _: &RuleParam, sentence: &str, _: Side) -> bool {
    !text::has_space_noise(sentence)
}

fn no_paren(_: &RuleContext<'_>, _: &RuleParam, left: &str, right: &str) -> bool {
    text::brackets_balanced(left, right)
}

fn no_escaped_unicode(_: &RuleContext<'_>, _: &RuleParam, sentence: &str, _: Side) -> bool {
    !text::has_escaped_unicode(sentence)
}

fn no_bad_encoding(ctx: &RuleContext<'_>, _: &RuleParam, sentence: &str, side: Side) -> bool {
    !text::has_bad_encoding(sentence, ctx.lang(side))
}

fn no_titles(_: &RuleContext<'_>, _: &RuleParam, left: &str, right: &str) -> bool {
    !(text::is_multiword_title(left) && text::is_multiword_title(right))
}

fn no_number_inconsistencies(_: &RuleContext<'_>, _: &RuleParam, left: &str, right: &str) -> bool {
    text::same_digits(left, right)
}

fn no_script_inconsistencies(_: &RuleContext<'_>, _: &RuleParam, sentence: &str, _: Side) -> bool {
    text::is_single_script(sentence)
}

fn no_wrong_language(ctx: &RuleContext<'_>, _: &RuleParam, sentence: &str, side: Side) -> bool {
    let Some(ident) = &ctx.adapters.lang_ident else {
        return true;
    };
    let detector = match side {
        Side::Left => &ident.source,
        Side::Right => &ident.target,
    };
    detector.getlang(sentence) == ctx.lang(side)
}

fn no_porn(ctx: &RuleContext<'_>, _: &RuleParam, left: &str, right: &str) -> bool {
    match &ctx.adapters.porn {
        Some(porn) => porn.is_clean(left, right),
        None => true,
    }
}

fn lm_filter(ctx: &RuleContext<'_>, _: &RuleParam, left: &str, right: &str) -> bool {
    match &ctx.adapters.fluency {
        Some(scorer) => scorer.score(left, right) >= ctx.lm_threshold,
        None => true,
    }
}
