//! Named cleaners: the entry points a TTS front end calls.
//!
//! Every function here is total and returns the input borrowed when it has
//! nothing to change. Cleaners are also addressable by name, so a
//! configuration string such as `"basic_cleaners"` or
//! `"expand_numbers, english_cleaners"` can be turned into a
//! [`CleanerChain`].
use crate::{
    ARA, COLLAPSE_WHITESPACE, ENG, EXPAND_ABBREVIATIONS, ExpandNumbers, LowerCase,
    RemoveDiacritics, Transliterate,
    context::Context,
    lang::Lang,
    process::Process,
    profile::{Profile, preset},
    stage::Stage,
};
use phf::{Map, phf_map};
use std::{borrow::Cow, fmt, str::FromStr};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CleanerError {
    #[error("unknown cleaner `{0}`")]
    UnknownCleaner(String),
    #[error("cleaner list is empty")]
    EmptyCleanerList,
    #[error("unknown language code `{0}`")]
    UnknownLang(String),
}

#[inline(always)]
fn run_stage<'a, S: Stage>(stage: S, lang: Lang, text: Cow<'a, str>) -> Cow<'a, str> {
    stage.apply(text, &Context::new(lang))
}

#[inline(always)]
fn run_profile<'a, P: Process>(profile: Profile<P>, lang: Lang, text: Cow<'a, str>) -> Cow<'a, str> {
    profile.run(text, &Context::new(lang))
}

/// Drops Arabic harakat (U+064B..=U+065F).
pub fn remove_diacritics(text: &str) -> Cow<'_, str> {
    Cleaner::RemoveDiacritics.apply(Cow::Borrowed(text))
}

/// NFKC, diacritic removal, Arabic abbreviation expansion, quote removal,
/// then whitespace collapsed and trimmed.
///
/// ```
/// use tts_cleaners::cleaners::normalize_arabic_text;
///
/// assert_eq!(normalize_arabic_text("  مَرْحَبًا   \"د. أحمد\" "), "مرحبا دكتور أحمد");
/// ```
pub fn normalize_arabic_text(text: &str) -> Cow<'_, str> {
    Cleaner::NormalizeArabicText.apply(Cow::Borrowed(text))
}

/// English abbreviations (`Dr.` → `doctor`), case-insensitive, on word boundaries.
pub fn expand_abbreviations(text: &str) -> Cow<'_, str> {
    Cleaner::ExpandAbbreviations.apply(Cow::Borrowed(text))
}

/// Numbers, currency and ordinals into English words.
pub fn expand_numbers(text: &str) -> Cow<'_, str> {
    Cleaner::ExpandNumbers.apply(Cow::Borrowed(text))
}

pub fn lowercase(text: &str) -> Cow<'_, str> {
    Cleaner::Lowercase.apply(Cow::Borrowed(text))
}

/// Every whitespace run becomes one space. Edges are kept.
pub fn collapse_whitespace(text: &str) -> Cow<'_, str> {
    Cleaner::CollapseWhitespace.apply(Cow::Borrowed(text))
}

pub fn convert_to_ascii(text: &str) -> Cow<'_, str> {
    Cleaner::ConvertToAscii.apply(Cow::Borrowed(text))
}

/// Lowercase and collapse whitespace.
pub fn basic_cleaners(text: &str) -> Cow<'_, str> {
    Cleaner::Basic.apply(Cow::Borrowed(text))
}

/// Transliterate to ASCII, lowercase, collapse whitespace.
pub fn transliteration_cleaners(text: &str) -> Cow<'_, str> {
    Cleaner::Transliteration.apply(Cow::Borrowed(text))
}

/// Same result as [`normalize_arabic_text`]. English abbreviation and
/// number expansion are not part of this pipeline.
pub fn english_cleaners(text: &str) -> Cow<'_, str> {
    Cleaner::English.apply(Cow::Borrowed(text))
}

/// A cleaner selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cleaner {
    Basic,
    Transliteration,
    English,
    NormalizeArabicText,
    RemoveDiacritics,
    ExpandAbbreviations,
    ExpandNumbers,
    Lowercase,
    CollapseWhitespace,
    ConvertToAscii,
}

static CLEANERS: Map<&'static str, Cleaner> = phf_map! {
    "basic_cleaners" => Cleaner::Basic,
    "transliteration_cleaners" => Cleaner::Transliteration,
    "english_cleaners" => Cleaner::English,
    "normalize_arabic_text" => Cleaner::NormalizeArabicText,
    "remove_diacritics" => Cleaner::RemoveDiacritics,
    "expand_abbreviations" => Cleaner::ExpandAbbreviations,
    "expand_numbers" => Cleaner::ExpandNumbers,
    "lowercase" => Cleaner::Lowercase,
    "collapse_whitespace" => Cleaner::CollapseWhitespace,
    "convert_to_ascii" => Cleaner::ConvertToAscii,
};

impl Cleaner {
    pub const ALL: [Cleaner; 10] = [
        Cleaner::Basic,
        Cleaner::Transliteration,
        Cleaner::English,
        Cleaner::NormalizeArabicText,
        Cleaner::RemoveDiacritics,
        Cleaner::ExpandAbbreviations,
        Cleaner::ExpandNumbers,
        Cleaner::Lowercase,
        Cleaner::CollapseWhitespace,
        Cleaner::ConvertToAscii,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        CLEANERS.get(name).copied()
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Cleaner::Basic => "basic_cleaners",
            Cleaner::Transliteration => "transliteration_cleaners",
            Cleaner::English => "english_cleaners",
            Cleaner::NormalizeArabicText => "normalize_arabic_text",
            Cleaner::RemoveDiacritics => "remove_diacritics",
            Cleaner::ExpandAbbreviations => "expand_abbreviations",
            Cleaner::ExpandNumbers => "expand_numbers",
            Cleaner::Lowercase => "lowercase",
            Cleaner::CollapseWhitespace => "collapse_whitespace",
            Cleaner::ConvertToAscii => "convert_to_ascii",
        }
    }

    /// The language whose rule tables the cleaner runs with.
    pub const fn lang(&self) -> Lang {
        match self {
            Cleaner::English | Cleaner::NormalizeArabicText | Cleaner::RemoveDiacritics => ARA,
            _ => ENG,
        }
    }

    pub fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        let lang = self.lang();
        match self {
            Cleaner::Basic => run_profile(preset::basic(), lang, text),
            Cleaner::Transliteration => run_profile(preset::transliteration(), lang, text),
            Cleaner::English => run_profile(preset::english(), lang, text),
            Cleaner::NormalizeArabicText => run_profile(preset::arabic(), lang, text),
            Cleaner::RemoveDiacritics => run_stage(RemoveDiacritics, lang, text),
            Cleaner::ExpandAbbreviations => run_stage(EXPAND_ABBREVIATIONS, lang, text),
            Cleaner::ExpandNumbers => run_stage(ExpandNumbers, lang, text),
            Cleaner::Lowercase => run_stage(LowerCase, lang, text),
            Cleaner::CollapseWhitespace => run_stage(COLLAPSE_WHITESPACE, lang, text),
            Cleaner::ConvertToAscii => run_stage(Transliterate, lang, text),
        }
    }
}

impl fmt::Display for Cleaner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Cleaner {
    type Err = CleanerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Cleaner::from_name(name).ok_or_else(|| CleanerError::UnknownCleaner(name.to_string()))
    }
}

/// Cleaners applied left to right, each on the previous output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanerChain {
    cleaners: Vec<Cleaner>,
}

impl CleanerChain {
    pub fn new(cleaners: Vec<Cleaner>) -> Result<Self, CleanerError> {
        if cleaners.is_empty() {
            return Err(CleanerError::EmptyCleanerList);
        }
        Ok(Self { cleaners })
    }

    pub fn cleaners(&self) -> &[Cleaner] {
        &self.cleaners
    }

    pub fn clean<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let mut out = Cow::Borrowed(text);
        for cleaner in &self.cleaners {
            debug!(cleaner = cleaner.name(), lang = cleaner.lang().code(), "running cleaner");
            out = cleaner.apply(out);
        }
        out
    }
}

impl Default for CleanerChain {
    fn default() -> Self {
        Self {
            cleaners: vec![Cleaner::English],
        }
    }
}

/// Parses `"name, name, ..."`. Blank segments are skipped.
impl FromStr for CleanerChain {
    type Err = CleanerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaners = s
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(Cleaner::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(cleaners)
    }
}

impl fmt::Display for CleanerChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cleaner) in self.cleaners.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(cleaner.name())?;
        }
        Ok(())
    }
}
