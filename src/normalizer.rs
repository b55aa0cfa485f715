use crate::{
    cleaners::CleanerError,
    context::Context,
    lang::{DEFAULT_LANG, Lang, from_code},
    process::{DynamicProcess, Process},
    profile::Profile,
    stage::Stage,
};
use std::borrow::Cow;

/// Runs a custom, runtime-assembled list of stages under one language.
///
/// ```
/// use tts_cleaners::{ARA, NORMALIZE_WHITESPACE_FULL, Normalizer, RemoveDiacritics, StripQuotes};
///
/// let normalizer = Normalizer::builder()
///     .lang(ARA)
///     .add_stage(RemoveDiacritics)
///     .add_stage(StripQuotes)
///     .add_stage(NORMALIZE_WHITESPACE_FULL)
///     .build();
/// assert_eq!(normalizer.normalize(" \"كِتَاب\" "), "كتاب");
/// ```
#[derive(Clone)]
pub struct Normalizer {
    ctx: Context,
    process: DynamicProcess,
}

impl Normalizer {
    pub fn builder() -> NormalizerBuilder {
        NormalizerBuilder::default()
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    pub fn normalize<'a>(&self, text: impl Into<Cow<'a, str>>) -> Cow<'a, str> {
        self.process.process(text.into(), &self.ctx)
    }

    /// Runs `profile` instead of the configured stages, under this
    /// normalizer's language.
    pub fn normalize_with_profile<'a, P: Process>(
        &self,
        profile: &Profile<P>,
        text: impl Into<Cow<'a, str>>,
    ) -> Cow<'a, str> {
        profile.run(text.into(), &self.ctx)
    }
}

pub struct NormalizerBuilder {
    lang: Lang,
    process: DynamicProcess,
}

impl Default for NormalizerBuilder {
    fn default() -> Self {
        Self {
            lang: DEFAULT_LANG,
            process: DynamicProcess::new(),
        }
    }
}

impl NormalizerBuilder {
    pub fn lang(mut self, lang: Lang) -> Self {
        self.lang = lang;
        self
    }

    /// Like [`lang`](Self::lang), resolving `ara`, `ar`, `arabic`, `eng`, ...
    pub fn lang_code(self, code: &str) -> Result<Self, CleanerError> {
        let lang = from_code(code).ok_or_else(|| CleanerError::UnknownLang(code.to_string()))?;
        Ok(self.lang(lang))
    }

    pub fn add_stage<T: Stage + 'static>(mut self, stage: T) -> Self {
        self.process = self.process.push(stage);
        self
    }

    pub fn build(self) -> Normalizer {
        Normalizer {
            ctx: Context::new(self.lang),
            process: self.process,
        }
    }
}
