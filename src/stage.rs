//! Core normalization stage abstraction.
//!
//! A stage is one pure `text → text` rewrite. Every cleaner pipeline is an
//! ordered list of stages, each one seeing the output of the previous one.
//!
//! Stages work on `Cow<str>`: when a stage has nothing to do it hands the
//! input back untouched, so a pipeline over already-clean text does not
//! allocate.

pub mod expand_abbreviations;
pub mod expand_numbers;
pub mod lower_case;
pub mod normalization;
pub mod normalize_whitespace;
pub mod remove_diacritics;
pub mod strip_quotes;
pub mod transliterate;

use crate::context::Context;
use std::borrow::Cow;

/// A single normalisation step.
///
/// Stages are total: every string is valid input and no stage can fail.
pub trait Stage: Send + Sync {
    /// Human-readable name, used for tracing and cleaner lookup.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Must return `true` exactly when [`apply`](Self::apply)
    /// would change the text.
    fn needs_apply(&self, text: &str, ctx: &Context) -> bool;

    /// The transformation. Returns the input as-is when nothing changes.
    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str>;
}
