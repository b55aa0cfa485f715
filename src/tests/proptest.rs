mod prop_tests {
    use crate::{
        ARA, COLLAPSE_WHITESPACE, NFKC, Normalizer,
        cleaners::{basic_cleaners, collapse_whitespace, normalize_arabic_text, remove_diacritics},
        numbers::cardinal,
        unicode::is_tts_whitespace,
    };
    use proptest::prelude::*;
    use unicode_normalization::UnicodeNormalization;

    fn is_harakah(c: char) -> bool {
        ('\u{064B}'..='\u{065F}').contains(&c)
    }

    proptest! {
        #[test]
        fn collapse_idempotent(s in ".{0,500}") {
            let once = collapse_whitespace(&s).into_owned();
            let twice = collapse_whitespace(&once).into_owned();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn collapse_leaves_no_runs(s in "[a \\t\\n\u{00A0}\u{3000}]{0,200}") {
            let out = collapse_whitespace(&s);
            let chars: Vec<char> = out.chars().collect();
            prop_assert!(chars.windows(2).all(|w| !(w[0].is_whitespace() && w[1].is_whitespace())));
            prop_assert!(chars.iter().all(|&c| !c.is_whitespace() || c == ' '));
        }

        #[test]
        fn remove_diacritics_idempotent(s in "[\u{0621}-\u{0670} a-z]{0,300}") {
            let once = remove_diacritics(&s).into_owned();
            let twice = remove_diacritics(&once).into_owned();
            prop_assert!(!once.chars().any(is_harakah));
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn arabic_output_invariants(s in "[\u{0600}-\u{06FF}\u{FE70}-\u{FEFC}\u{1C}-\u{1F} \\t\\n\"a-zA-Z0-9.]{0,300}") {
            let out = normalize_arabic_text(&s);
            prop_assert!(!out.chars().any(is_harakah), "harakah left in {:?}", out);
            prop_assert!(!out.contains('"'));
            prop_assert_eq!(out.trim_matches(is_tts_whitespace), &*out);
            let chars: Vec<char> = out.chars().collect();
            prop_assert!(chars.windows(2).all(|w| !(is_tts_whitespace(w[0]) && is_tts_whitespace(w[1]))));
        }

        #[test]
        fn basic_cleaners_idempotent(s in ".{0,500}") {
            let once = basic_cleaners(&s).into_owned();
            let twice = basic_cleaners(&once).into_owned();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn nfkc_agrees_with_unicode_normalization(s in "[\u{0600}-\u{06FF}\u{FB50}-\u{FDFF}\u{FE70}-\u{FEFC}\u{FF01}-\u{FF5E} a-zA-Zéﬁ½]{0,200}") {
            let normalizer = Normalizer::builder().lang(ARA).add_stage(NFKC).build();
            let expected: String = s.nfkc().collect();
            prop_assert_eq!(normalizer.normalize(&s).into_owned(), expected);
        }

        #[test]
        fn zero_copy_when_collapsed(s in "[a-z]{1,20}( [a-z]{1,20}){0,20}") {
            let normalizer = Normalizer::builder().add_stage(COLLAPSE_WHITESPACE).build();
            let input = s.as_str();
            let result = normalizer.normalize(input);
            prop_assert!(matches!(result, std::borrow::Cow::Borrowed(b) if b.as_ptr() == input.as_ptr()));
        }

        #[test]
        fn cardinals_are_words(n in any::<u64>()) {
            let words = cardinal(n, "");
            prop_assert!(words.chars().all(|c| c.is_ascii_lowercase() || c == ' ' || c == '-' || c == ','));
        }
    }
}
