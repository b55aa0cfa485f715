use crate::{context::Context, stage::Stage, unicode::QUOTE};
use memchr::{memchr, memchr_iter};
use std::borrow::Cow;

/// Deletes every ASCII double quote (`"`).
///
/// Typographic quotes are not touched here; fullwidth `＂` becomes `"` under
/// NFKC, so run [`Nfkc`](crate::stage::normalization::Nfkc) first to catch it.
#[derive(Debug, Default, Clone, Copy)]
pub struct StripQuotes;

impl Stage for StripQuotes {
    fn name(&self) -> &'static str {
        "strip_quotes"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        memchr(QUOTE, text.as_bytes()).is_some()
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Cow<'a, str> {
        let bytes = text.as_bytes();
        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for pos in memchr_iter(QUOTE, bytes) {
            out.push_str(&text[last..pos]);
            last = pos + 1;
        }
        if last == 0 {
            return text;
        }
        out.push_str(&text[last..]);
        Cow::Owned(out)
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::{assert_stage_contract, lang::Lang, testing::stage_contract::StageTestConfig};

    impl StageTestConfig for StripQuotes {
        fn samples(_lang: Lang) -> &'static [&'static str] {
            &["say \"hi\"", "\"\"\"", "قال \"مرحبا\"", "no quotes", ""]
        }

        fn should_transform(_lang: Lang) -> &'static [(&'static str, &'static str)] {
            &[("\"quoted\"", "quoted"), ("a\"b\"c", "abc"), ("\"", "")]
        }
    }

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(StripQuotes);
    }
}
