//! The named cleaner pipelines.
use crate::{
    COLLAPSE_WHITESPACE, EXPAND_ABBREVIATIONS, LowerCase, NFKC, NORMALIZE_WHITESPACE_FULL,
    RemoveDiacritics, StripQuotes, Transliterate, process::Process, profile::Profile,
};

/// Lowercase, then collapse whitespace runs. Script agnostic.
pub fn basic() -> Profile<impl Process> {
    Profile::builder("basic")
        .add_stage(LowerCase)
        .add_stage(COLLAPSE_WHITESPACE)
        .build()
}

/// For non-English text that should be read as ASCII.
pub fn transliteration() -> Profile<impl Process> {
    Profile::builder("transliteration")
        .add_stage(Transliterate)
        .add_stage(LowerCase)
        .add_stage(COLLAPSE_WHITESPACE)
        .build()
}

/// Arabic normalization. Run it under an Arabic [`Context`](crate::context::Context)
/// so the Arabic diacritic range and abbreviation table are selected.
///
/// Quotes are removed before the whitespace pass so that a quote between
/// two spaces cannot leave a double space behind.
pub fn arabic() -> Profile<impl Process> {
    arabic_normalization("arabic")
}

/// The `english` pipeline name is kept for configuration compatibility; it
/// performs the Arabic normalization of [`arabic`].
pub fn english() -> Profile<impl Process> {
    arabic_normalization("english")
}

fn arabic_normalization(name: &'static str) -> Profile<impl Process> {
    Profile::builder(name)
        .add_stage(NFKC)
        .add_stage(RemoveDiacritics)
        .add_stage(EXPAND_ABBREVIATIONS)
        .add_stage(StripQuotes)
        .add_stage(NORMALIZE_WHITESPACE_FULL)
        .build()
}
