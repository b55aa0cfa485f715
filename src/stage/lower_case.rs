use crate::{context::Context, stage::Stage};
use std::borrow::Cow;

/// Full Unicode lowercasing (`str::to_lowercase`), including the
/// context-sensitive final sigma.
///
/// Zero-copy when no character has a lowercase mapping of its own.
#[derive(Debug, Default, Clone, Copy)]
pub struct LowerCase;

#[inline(always)]
fn lowers(c: char) -> bool {
    let mut lower = c.to_lowercase();
    !(lower.next() == Some(c) && lower.next().is_none())
}

impl Stage for LowerCase {
    fn name(&self) -> &'static str {
        "lowercase"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        if text.is_ascii() {
            return text.bytes().any(|b| b.is_ascii_uppercase());
        }
        text.chars().any(lowers)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !self.needs_apply(&text, ctx) {
            return text;
        }
        if text.is_ascii() {
            let mut owned = text.into_owned();
            owned.make_ascii_lowercase();
            return Cow::Owned(owned);
        }
        Cow::Owned(text.to_lowercase())
    }
}
