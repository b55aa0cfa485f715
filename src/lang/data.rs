use crate::lang::{Abbreviation, AbbreviationMatch, DiacriticRange, Lang, LangEntry};

use phf::{Map, phf_map};

/// ---------------------------------------------------------------------------
///    Macro – one table literal per language
/// ---------------------------------------------------------------------------
macro_rules! abbreviations {
    ($($short:literal => $expansion:literal),* $(,)?) => {
        &[$(Abbreviation { short: $short, expansion: $expansion }),*]
    };
}

// ---------------------------------------------------------------------------
//    English
//    Keys carry their trailing period. Order matters: `mrs.` must be tried
//    before `mr.`, and each rule sees the output of the previous one.
// ---------------------------------------------------------------------------
const ENG_ENTRY: LangEntry = LangEntry {
    abbreviations: abbreviations![
        "mrs." => "misess",
        "mr." => "mister",
        "dr." => "doctor",
        "st." => "saint",
        "co." => "company",
        "jr." => "junior",
        "maj." => "major",
        "gen." => "general",
        "drs." => "doctors",
        "rev." => "reverend",
        "lt." => "lieutenant",
        "hon." => "honorable",
        "sgt." => "sergeant",
        "capt." => "captain",
        "esq." => "esquire",
        "ltd." => "limited",
        "col." => "colonel",
        "ft." => "fort",
    ],
    abbreviation_match: AbbreviationMatch::Boundary,
    abbreviations_ignore_case: true,
    diacritics: None,
};

// ---------------------------------------------------------------------------
//    Arabic
//    Keys are matched as raw substrings: `كم` also fires inside `حكم`.
//    `دولار` expands to a string that still contains `دولار`, so this table
//    is not idempotent.
// ---------------------------------------------------------------------------
const ARA_ENTRY: LangEntry = LangEntry {
    abbreviations: abbreviations![
        "د." => "دكتور",
        "أ.د" => "أستاذ دكتور",
        "م." => "مهندس",
        "كجم" => "كيلوغرام",
        "كم" => "كيلومتر",
        "دولار" => "دولار أمريكي",
    ],
    abbreviation_match: AbbreviationMatch::Substring,
    abbreviations_ignore_case: false,
    // Tanween, short vowels, shadda, sukun and the extended harakat block.
    diacritics: Some(DiacriticRange {
        start: '\u{064B}',
        end: '\u{065F}',
    }),
};

pub const ENG: Lang = Lang {
    code: "ENG",
    name: "English",
    entry: &ENG_ENTRY,
};

pub const ARA: Lang = Lang {
    code: "ARA",
    name: "Arabic",
    entry: &ARA_ENTRY,
};

pub static LANG_TABLE: Map<&'static str, Lang> = phf_map! {
    "ENG" => ENG,
    "ARA" => ARA,
};

static ALL_LANGS: &[Lang] = &[ENG, ARA];

#[inline]
pub fn all_langs() -> &'static [Lang] {
    ALL_LANGS
}

/// Resolve a language from its ISO 639-3 code, ISO 639-1 code or English
/// name, case-insensitively.
pub fn from_code(code: &str) -> Option<Lang> {
    let upper = code.trim().to_ascii_uppercase();
    match upper.as_str() {
        "EN" | "ENGLISH" => Some(ENG),
        "AR" | "ARABIC" => Some(ARA),
        other => LANG_TABLE.get(other).copied(),
    }
}
