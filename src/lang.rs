pub mod data;

pub use data::{ARA, ENG, LANG_TABLE, all_langs, from_code};

/// A language the cleaners know rule tables for.
///
/// `Lang` values are only ever created from the constants in [`data`], so
/// every `Lang` carries a valid [`LangEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lang {
    pub(crate) code: &'static str,
    pub(crate) name: &'static str,
    pub(crate) entry: &'static LangEntry,
}

impl Lang {
    #[inline(always)]
    pub const fn code(&self) -> &'static str {
        self.code
    }
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }
    #[inline(always)]
    pub const fn entry(&self) -> &'static LangEntry {
        self.entry
    }

    #[inline(always)]
    pub fn is_diacritic(&self, c: char) -> bool {
        self.entry.diacritics.is_some_and(|d| d.contains(c))
    }

    #[inline(always)]
    pub fn has_diacritics(&self) -> bool {
        self.entry.diacritics.is_some()
    }
}

pub const DEFAULT_LANG: Lang = ENG;

/// One `short → expansion` pair of an abbreviation table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Abbreviation {
    pub short: &'static str,
    pub expansion: &'static str,
}

/// How the keys of an abbreviation table are located in text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AbbreviationMatch {
    /// The key must not be glued to a word character on either side where
    /// the key itself starts or ends with a word character.
    Boundary,
    /// Raw substring match: a key inside a longer word is rewritten too.
    Substring,
}

/// Inclusive code point range of combining marks stripped by
/// [`RemoveDiacritics`](crate::RemoveDiacritics).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DiacriticRange {
    pub start: char,
    pub end: char,
}

impl DiacriticRange {
    #[inline(always)]
    pub const fn contains(&self, c: char) -> bool {
        self.start <= c && c <= self.end
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LangEntry {
    pub abbreviations: &'static [Abbreviation],
    pub abbreviation_match: AbbreviationMatch,
    pub abbreviations_ignore_case: bool,
    pub diacritics: Option<DiacriticRange>,
}

impl LangEntry {
    #[inline]
    pub fn has_abbreviations(&self) -> bool {
        !self.abbreviations.is_empty()
    }
}
