use crate::{context::Context, numbers::normalize_numbers, stage::Stage};
use std::borrow::Cow;

/// Spells out currency, decimals, ordinals and cardinals in English words.
///
/// The rules are English-only and ignore the context language. Text
/// without an ASCII digit is passed through without allocating.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExpandNumbers;

impl Stage for ExpandNumbers {
    fn name(&self) -> &'static str {
        "expand_numbers"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        // Every rule is anchored on a digit, and every digit is rewritten.
        text.bytes().any(|b| b.is_ascii_digit())
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !self.needs_apply(&text, ctx) {
            return text;
        }
        Cow::Owned(normalize_numbers(&text))
    }
}
