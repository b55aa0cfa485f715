use crate::{
    context::Context,
    stage::Stage,
    unicode::{could_be_unicode_ws_start, is_ascii_whitespace_fast, is_tts_whitespace},
};
use std::borrow::Cow;

/// Collapse and/or trim whitespace in a single pass.
///
/// Whitespace is [`is_tts_whitespace`]: Unicode `White_Space` (ASCII space
/// and controls, NBSP, the U+2000 block, ideographic space, line and
/// paragraph separators) plus the information separators U+001C..=U+001F.
///
/// | Flag               | Effect                                                      |
/// |--------------------|-------------------------------------------------------------|
/// | `collapse`         | every whitespace run, even a lone tab, → `replacement_char` |
/// | `trim`             | leading and trailing whitespace removed                     |
/// | `replacement_char` | what a collapsed run becomes (default `' '`)                |
///
/// A run that is already a single `replacement_char` is left alone, so clean
/// text is returned as `Cow::Borrowed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeWhitespace {
    pub collapse: bool,
    pub trim: bool,
    pub replacement_char: char,
}

/// Collapse runs, keep edges (`"  a \t b "` → `" a b "`).
pub const COLLAPSE_WHITESPACE: NormalizeWhitespace = NormalizeWhitespace {
    collapse: true,
    trim: false,
    replacement_char: ' ',
};

/// Trim edges, keep interior spacing.
pub const TRIM_WHITESPACE: NormalizeWhitespace = NormalizeWhitespace {
    collapse: false,
    trim: true,
    replacement_char: ' ',
};

/// Collapse and trim (`"  a \t b "` → `"a b"`).
pub const NORMALIZE_WHITESPACE_FULL: NormalizeWhitespace = NormalizeWhitespace {
    collapse: true,
    trim: true,
    replacement_char: ' ',
};

impl Default for NormalizeWhitespace {
    fn default() -> Self {
        NORMALIZE_WHITESPACE_FULL
    }
}

impl NormalizeWhitespace {
    /// Change the character a collapsed run is replaced with.
    ///
    /// ```rust
    /// use tts_cleaners::NORMALIZE_WHITESPACE_FULL;
    /// let underscores = NORMALIZE_WHITESPACE_FULL.replace_whitespace_with('_');
    /// assert_eq!(underscores.replacement_char, '_');
    /// ```
    #[inline(always)]
    pub const fn replace_whitespace_with(mut self, c: char) -> Self {
        self.replacement_char = c;
        self
    }

    #[inline(always)]
    fn edges_need_trim(&self, text: &str) -> bool {
        text.chars().next().is_some_and(is_tts_whitespace)
            || text.chars().next_back().is_some_and(is_tts_whitespace)
    }

    fn has_uncollapsed_run(&self, text: &str) -> bool {
        let bytes = text.as_bytes();
        if text.is_ascii() {
            let mut prev_ws = false;
            for &b in bytes {
                let is_ws = is_ascii_whitespace_fast(b);
                if is_ws && (prev_ws || b as char != self.replacement_char) {
                    return true;
                }
                prev_ws = is_ws;
            }
            return false;
        }

        // No candidate byte at all means no whitespace at all.
        if !bytes
            .iter()
            .any(|&b| is_ascii_whitespace_fast(b) || could_be_unicode_ws_start(b))
        {
            return false;
        }

        let mut prev_ws = false;
        for c in text.chars() {
            let is_ws = is_tts_whitespace(c);
            if is_ws && (prev_ws || c != self.replacement_char) {
                return true;
            }
            prev_ws = is_ws;
        }
        false
    }

    fn trim_only<'a>(text: Cow<'a, str>) -> Cow<'a, str> {
        match text {
            Cow::Borrowed(s) => Cow::Borrowed(s.trim_matches(is_tts_whitespace)),
            Cow::Owned(s) => Cow::Owned(s.trim_matches(is_tts_whitespace).to_owned()),
        }
    }

    fn collapse_runs(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut started = false;
        let mut pending = false;
        for c in text.chars() {
            if is_tts_whitespace(c) {
                pending = true;
                continue;
            }
            if pending && (started || !self.trim) {
                out.push(self.replacement_char);
            }
            pending = false;
            out.push(c);
            started = true;
        }
        if pending && !self.trim {
            out.push(self.replacement_char);
        }
        out
    }
}

impl Stage for NormalizeWhitespace {
    fn name(&self) -> &'static str {
        match (self.collapse, self.trim) {
            (true, false) => "collapse_whitespace",
            (false, true) => "trim_whitespace",
            _ => "normalize_whitespace",
        }
    }

    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        if text.is_empty() || (!self.trim && !self.collapse) {
            return false;
        }
        if self.trim && self.edges_need_trim(text) {
            return true;
        }
        self.collapse && self.has_uncollapsed_run(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !self.needs_apply(&text, ctx) {
            return text;
        }
        if !self.collapse {
            return Self::trim_only(text);
        }
        Cow::Owned(self.collapse_runs(&text))
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::{assert_stage_contract, lang::Lang, testing::stage_contract::StageTestConfig};

    impl StageTestConfig for NormalizeWhitespace {
        fn samples(_lang: Lang) -> &'static [&'static str] {
            &[
                "Hello World 123",
                " déjà-vu ",
                "  مرحبا   بالعالم  ",
                "a\t\tb\n\nc",
                "a\u{00A0}\u{3000}b",
                "   ",
                "",
            ]
        }
    }

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(COLLAPSE_WHITESPACE);
        assert_stage_contract!(TRIM_WHITESPACE);
        assert_stage_contract!(NORMALIZE_WHITESPACE_FULL);
    }
}
