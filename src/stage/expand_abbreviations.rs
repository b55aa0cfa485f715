//! stage/expand_abbreviations.rs – table-driven abbreviation expansion
//! * English: `\bdr\.` style matchers, case-insensitive (`Dr.` → `doctor`)
//! * Arabic: literal substring keys (`كجم` → `كيلوغرام`, also inside words)
//! * Rules run strictly in table order; each one rewrites the output of the
//!   previous one
use crate::{
    context::Context,
    lang::{AbbreviationMatch, LangEntry, all_langs},
    stage::Stage,
};
use regex::{NoExpand, Regex, RegexBuilder};
use std::{borrow::Cow, collections::HashMap, sync::LazyLock};

struct CompiledRule {
    pattern: Regex,
    expansion: &'static str,
}

type RuleKey = (&'static str, AbbreviationMatch);

// Every (language, matching mode) pair is compiled once, on first use.
static COMPILED_RULES: LazyLock<HashMap<RuleKey, Vec<CompiledRule>>> = LazyLock::new(|| {
    let mut rules = HashMap::new();
    for lang in all_langs() {
        for matching in [AbbreviationMatch::Boundary, AbbreviationMatch::Substring] {
            rules.insert((lang.code(), matching), compile(lang.entry(), matching));
        }
    }
    rules
});

fn compile(entry: &LangEntry, matching: AbbreviationMatch) -> Vec<CompiledRule> {
    entry
        .abbreviations
        .iter()
        .map(|abbr| CompiledRule {
            pattern: RegexBuilder::new(&pattern_for(abbr.short, matching))
                .case_insensitive(entry.abbreviations_ignore_case)
                .build()
                .expect("escaped abbreviation key is always a valid pattern"),
            expansion: abbr.expansion,
        })
        .collect()
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// `\b` is only meaningful next to a word character, so boundaries are added
/// on the sides of the key that start or end with one (`mr.` → `\bmr\.`).
fn pattern_for(short: &str, matching: AbbreviationMatch) -> String {
    let escaped = regex::escape(short);
    match matching {
        AbbreviationMatch::Substring => escaped,
        AbbreviationMatch::Boundary => {
            let lead = if short.chars().next().is_some_and(is_word_char) {
                r"\b"
            } else {
                ""
            };
            let trail = if short.chars().next_back().is_some_and(is_word_char) {
                r"\b"
            } else {
                ""
            };
            format!("{lead}{escaped}{trail}")
        }
    }
}

/// Expands the context language's abbreviation table.
///
/// The matching mode defaults to the one the language table declares
/// (boundary for English, substring for Arabic). Use
/// [`ExpandAbbreviations::with_matching`] to override it, e.g. to get
/// boundary-safe Arabic expansion that leaves `حكم` alone.
///
/// Replacements are inserted verbatim: `DR.` and `dr.` both become `doctor`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExpandAbbreviations {
    matching: Option<AbbreviationMatch>,
}

/// Expansion with each language's own matching mode.
pub const EXPAND_ABBREVIATIONS: ExpandAbbreviations = ExpandAbbreviations { matching: None };

impl ExpandAbbreviations {
    pub const fn with_matching(matching: AbbreviationMatch) -> Self {
        Self {
            matching: Some(matching),
        }
    }

    #[inline]
    fn rules(&self, ctx: &Context) -> &'static [CompiledRule] {
        let matching = self
            .matching
            .unwrap_or(ctx.lang_entry().abbreviation_match);
        COMPILED_RULES
            .get(&(ctx.lang.code(), matching))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl Stage for ExpandAbbreviations {
    fn name(&self) -> &'static str {
        "expand_abbreviations"
    }

    #[inline]
    fn needs_apply(&self, text: &str, ctx: &Context) -> bool {
        if text.is_empty() || !ctx.lang_entry().has_abbreviations() {
            return false;
        }
        self.rules(ctx).iter().any(|rule| rule.pattern.is_match(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !self.needs_apply(&text, ctx) {
            return text;
        }
        let mut current = text.into_owned();
        for rule in self.rules(ctx) {
            let rewritten = match rule
                .pattern
                .replace_all(&current, NoExpand(rule.expansion))
            {
                Cow::Owned(s) => Some(s),
                Cow::Borrowed(_) => None,
            };
            if let Some(rewritten) = rewritten {
                current = rewritten;
            }
        }
        Cow::Owned(current)
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::{assert_stage_contract, lang::Lang, testing::stage_contract::StageTestConfig};

    impl StageTestConfig for ExpandAbbreviations {
        fn samples(lang: Lang) -> &'static [&'static str] {
            match lang.code() {
                "ARA" => &["د. أحمد", "وزنه 5 كجم", "م. علي و أ.د سمير", "مرحبا", ""],
                _ => &["Dr. Smith", "Mrs. Jones & Mr. Jones", "no abbreviations", ""],
            }
        }

        fn should_transform(lang: Lang) -> &'static [(&'static str, &'static str)] {
            match lang.code() {
                "ARA" => &[("وزنه 5 كجم", "وزنه 5 كيلوغرام")],
                _ => &[("Dr. Smith", "doctor Smith")],
            }
        }
    }

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(EXPAND_ABBREVIATIONS);
        assert_stage_contract!(ExpandAbbreviations::with_matching(
            AbbreviationMatch::Boundary
        ));
    }
}
