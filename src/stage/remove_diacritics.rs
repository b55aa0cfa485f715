//! src/stage/remove_diacritics.rs
//!
//! Removes the combining marks of the context language's diacritic range.

use crate::{context::Context, stage::Stage};
use std::borrow::Cow;

/// Deletes every character inside the language's diacritic range
/// (for Arabic, the harakat U+064B..=U+065F).
///
/// Unlike accent stripping for Latin scripts this does **not** decompose
/// first: a precomposed letter such as `أ` is kept whole, and only marks
/// that are already separate code points are dropped. Languages without a
/// diacritic range pass text through untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct RemoveDiacritics;

impl Stage for RemoveDiacritics {
    fn name(&self) -> &'static str {
        "remove_diacritics"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, ctx: &Context) -> bool {
        // Every diacritic range lives outside ASCII.
        if text.is_ascii() || !ctx.lang.has_diacritics() {
            return false;
        }
        text.chars().any(|c| ctx.lang.is_diacritic(c))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !self.needs_apply(&text, ctx) {
            return text;
        }
        Cow::Owned(
            text.chars()
                .filter(|&c| !ctx.lang.is_diacritic(c))
                .collect(),
        )
    }
}
