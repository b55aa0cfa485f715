use crate::{context::Context, stage::Stage};
use std::{borrow::Cow, sync::LazyLock};

use icu_normalizer::{ComposingNormalizer, ComposingNormalizerBorrowed};

// ── ICU4X ──
static ICU4X_NFKC: LazyLock<ComposingNormalizerBorrowed> =
    LazyLock::new(ComposingNormalizer::new_nfkc);

/// Unicode Normalization Form KC (Compatibility Composition).
///
/// Folds Arabic presentation forms (`ﻛ` → `ك`), ligatures (`ﬁ` → `fi`) and
/// fullwidth characters onto their canonical letters before any
/// table-driven matching runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct Nfkc;

pub const NFKC: Nfkc = Nfkc;

impl Stage for Nfkc {
    fn name(&self) -> &'static str {
        "nfkc"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        !ICU4X_NFKC.is_normalized(text)
    }

    #[inline(always)]
    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Cow<'a, str> {
        if let Cow::Owned(normalized) = ICU4X_NFKC.normalize(text.as_ref()) {
            return Cow::Owned(normalized);
        }
        text
    }
}
