use crate::{
    ENG,
    context::Context,
    lang::{Lang, all_langs},
    stage::Stage,
};
use std::borrow::Cow;

/// Trait that stages implement to opt into the universal test suite.
pub trait StageTestConfig: Stage + Sized {
    /// Languages the contract is checked under.
    fn languages() -> &'static [Lang] {
        all_langs()
    }

    /// General test samples (may or may not trigger changes).
    /// Every sample must reach a fixed point after one application.
    fn samples(_lang: Lang) -> &'static [&'static str] {
        &["Hello World 123", " déjà-vu ", "TEST", ""]
    }

    /// Samples that must pass through unchanged and without allocating.
    fn should_pass_through(_lang: Lang) -> &'static [&'static str] {
        &[
            "hello",   // Simple lowercase
            "world",   // Another simple word
            "test123", // Alphanumeric
            "abc def", // Simple phrase with space
            "",        // Empty string
        ]
    }

    /// Input/output pairs that verify correct transformations.
    fn should_transform(_lang: Lang) -> &'static [(&'static str, &'static str)] {
        &[]
    }

    /// Plain ASCII the stage must leave semantically untouched.
    fn untouched_ascii() -> &'static str {
        "hello world 123 !@#"
    }
}

/// Assert that a stage satisfies every universal stage contract.
///
/// 1. `zero_copy_when_no_changes` → no allocation when input == output
/// 2. `stage_is_idempotent` → applying twice yields same result as once
/// 3. `needs_apply_is_accurate` → correctly predicts whether apply() would change text
/// 4. `handles_empty_string_and_ascii` → graceful on edge cases
/// 5. `no_panic_on_mixed_scripts` → survives pathological real-world input
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        $crate::testing::stage_contract::zero_copy_when_no_changes($stage);
        $crate::testing::stage_contract::stage_is_idempotent($stage);
        $crate::testing::stage_contract::needs_apply_is_accurate($stage);
        $crate::testing::stage_contract::handles_empty_string_and_ascii($stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts($stage);
    };
}

pub fn zero_copy_when_no_changes<S: StageTestConfig>(stage: S) {
    for &lang in S::languages() {
        let ctx = Context::new(lang);

        for &input in S::samples(lang) {
            let mut text = Cow::Borrowed(input);

            // First pass – respect needs_apply
            if stage.needs_apply(&text, &ctx) {
                let old_ptr = text.as_ref() as *const str;
                text = stage.apply(text, &ctx);
                assert_ne!(old_ptr, text.as_ref() as *const str);
            } else {
                assert_eq!(input as *const str, text.as_ref() as *const str);
            }

            // Second pass – must never allocate again
            let old_ptr = text.as_ref() as *const str;
            if stage.needs_apply(&text, &ctx) {
                text = stage.apply(text, &ctx);
            }
            assert_eq!(
                old_ptr,
                text.as_ref() as *const str,
                "zero-copy violated on second pass (stage: {}, lang: {}, input: `{input}`)",
                stage.name(),
                lang.code()
            );
        }

        for &pass_through in S::should_pass_through(lang) {
            let text = stage.apply(Cow::Borrowed(pass_through), &ctx);
            assert!(
                !stage.needs_apply(pass_through, &ctx),
                "needs_apply fired on pass-through sample (stage: {}, input: `{pass_through}`)",
                stage.name()
            );
            assert_eq!(text.as_ref(), pass_through);
            assert!(
                matches!(text, Cow::Borrowed(s) if std::ptr::eq(s, pass_through)),
                "zero-copy violated on pass-through sample (stage: {}, lang: {}, input: `{pass_through}`)",
                stage.name(),
                lang.code()
            );
        }

        for &(input, expected) in S::should_transform(lang) {
            let mut text = Cow::Borrowed(input);
            if stage.needs_apply(&text, &ctx) {
                text = stage.apply(text, &ctx);
            }
            assert_eq!(
                text.as_ref(),
                expected,
                "stage `{}` in {}",
                stage.name(),
                lang.code()
            );
        }
    }
}

pub fn stage_is_idempotent<S: StageTestConfig>(stage: S) {
    for &lang in S::languages() {
        let ctx = Context::new(lang);
        for &input in S::samples(lang) {
            let once = stage.apply(Cow::Borrowed(input), &ctx);
            let twice = stage.apply(once.clone(), &ctx);
            assert_eq!(
                once,
                twice,
                "apply() of `{}` not idempotent in {} on `{input}`",
                stage.name(),
                lang.code()
            );
        }
    }
}

pub fn needs_apply_is_accurate<S: StageTestConfig>(stage: S) {
    for &lang in S::languages() {
        let ctx = Context::new(lang);
        for &sample in S::samples(lang) {
            check_accuracy(&stage, sample, &ctx);
        }
        for &(sample, _) in S::should_transform(lang) {
            check_accuracy(&stage, sample, &ctx);
        }
        for &clean in &["", "hello", "world123", " !@#"] {
            check_accuracy(&stage, clean, &ctx);
        }
    }
}

#[inline(always)]
fn check_accuracy<S: Stage>(stage: &S, input: &str, ctx: &Context) {
    let predicted = stage.needs_apply(input, ctx);
    // Owned input so stages that always rebuild are not penalised.
    let output = stage.apply(Cow::Owned(input.to_owned()), ctx);
    let actually_changes = output != input;
    assert_eq!(
        predicted,
        actually_changes,
        "needs_apply() mismatch for stage `{}` in {} on `{input}`\n\
         predicted: {predicted}\n\
         actual   : {actually_changes} (output = {output:?})",
        stage.name(),
        ctx.lang.code()
    );
}

pub fn handles_empty_string_and_ascii<S: StageTestConfig>(stage: S) {
    let ctx = Context::new(ENG);
    let empty: &str = "";
    let result_empty = if stage.needs_apply(empty, &ctx) {
        stage.apply(Cow::Borrowed(empty), &ctx)
    } else {
        Cow::Borrowed(empty)
    };
    assert_eq!(result_empty.as_ref(), "");

    let ascii = S::untouched_ascii();
    let result_ascii = stage.apply(Cow::Borrowed(ascii), &ctx);
    assert_eq!(result_ascii.as_ref(), ascii);
}

pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: S) {
    for &lang in all_langs() {
        let ctx = Context::new(lang);
        let _ = stage.apply(
            Cow::Borrowed("Hello 世界 русский Türkçe العَرَبِيَّة \"د.\" $3.50 21st\t\u{3000}"),
            &ctx,
        );
    }
}
