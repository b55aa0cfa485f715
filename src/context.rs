// src/context.rs
// Tiny, Copy, and contains only 'static data.

use crate::lang::{DEFAULT_LANG, Lang, LangEntry};

/// Runtime context passed to every stage.
///
/// The language selects the abbreviation table and the diacritic range a
/// stage works with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    pub lang: Lang,
}

impl Default for Context {
    #[inline(always)]
    fn default() -> Self {
        Self::new(DEFAULT_LANG)
    }
}

impl Context {
    #[inline(always)]
    pub const fn new(lang: Lang) -> Self {
        Self { lang }
    }

    #[inline(always)]
    pub const fn lang_entry(&self) -> &'static LangEntry {
        self.lang.entry()
    }
}
