//! Text cleaners for speech-synthesis front ends.
//!
//! Raw English or Arabic text goes in, a canonical string comes out: NFKC,
//! no harakat, abbreviations expanded, quotes removed, whitespace collapsed.
//! The named pipelines live in [`cleaners`]; the building blocks are the
//! [`Stage`](stage::Stage)s, composed into [`Profile`](profile::Profile)s.
//!
//! ```
//! use tts_cleaners::cleaners::{basic_cleaners, english_cleaners};
//!
//! assert_eq!(basic_cleaners("HELLO   WORLD"), "hello world");
//! assert_eq!(english_cleaners("  مرحبا  "), "مرحبا");
//! ```
pub mod cleaners;
pub mod context;
pub mod lang;
pub mod normalizer;
pub mod numbers;
pub mod process;
pub mod profile;
pub mod stage;
pub mod unicode;

#[cfg(test)]
pub(crate) mod testing;

pub use cleaners::{Cleaner, CleanerChain, CleanerError};
pub use context::Context;
pub use lang::{ARA, ENG, Lang};
pub use normalizer::Normalizer;
pub use stage::expand_abbreviations::{EXPAND_ABBREVIATIONS, ExpandAbbreviations};
pub use stage::expand_numbers::ExpandNumbers;
pub use stage::lower_case::LowerCase;
pub use stage::normalization::{NFKC, Nfkc};
pub use stage::normalize_whitespace::{
    COLLAPSE_WHITESPACE, NORMALIZE_WHITESPACE_FULL, NormalizeWhitespace, TRIM_WHITESPACE,
};
pub use stage::remove_diacritics::RemoveDiacritics;
pub use stage::strip_quotes::StripQuotes;
pub use stage::transliterate::Transliterate;
