//! stage/transliterate.rs – **Lossy ASCII approximation**
//! * `Café` → `Cafe`, `Straße` → `Strasse`, `Œuvre` → `OEuvre`
//! * Case is kept; lowercasing is a separate stage
//! * Characters without an approximation are dropped
//! * Pure ASCII input is returned untouched
use crate::{context::Context, stage::Stage};
use std::borrow::Cow;
use unidecode::unidecode;

#[derive(Debug, Default, Clone, Copy)]
pub struct Transliterate;

impl Stage for Transliterate {
    fn name(&self) -> &'static str {
        "convert_to_ascii"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        !text.is_ascii()
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Cow<'a, str> {
        if text.is_ascii() {
            return text;
        }
        Cow::Owned(unidecode(&text))
    }
}
