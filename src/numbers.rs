//! English number verbalisation.
//!
//! Rewrites currency amounts, decimals, ordinals and cardinals embedded in
//! running text into words, the way a reader would say them:
//!
//! | Input      | Output                                  |
//! |------------|-----------------------------------------|
//! | `$3.50`    | `three dollars, fifty cents`            |
//! | `£1,000`   | `one thousand pounds`                   |
//! | `2.5`      | `two point five`                        |
//! | `21st`     | `twenty-first`                          |
//! | `1995`     | `nineteen ninety-five`                  |
//! | `5207`     | `five thousand, two hundred seven`      |

use regex::{Captures, Regex};
use std::sync::LazyLock;

static COMMA_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9][0-9,]+[0-9]").expect("valid comma number pattern"));
static POUNDS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"£([0-9,]*[0-9]+)").expect("valid pounds pattern"));
static DOLLARS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$([0-9.,]*[0-9]+)").expect("valid dollars pattern"));
static DECIMAL_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+\.[0-9]+").expect("valid decimal pattern"));
static ORDINAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)(?:st|nd|rd|th)").expect("valid ordinal pattern"));
static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("valid number pattern"));

const UNITS: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

// Index 0 is the bare hundreds group.
const SCALES: [&str; 7] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
];

/// Rewrite every numeric expression in `text` into English words.
///
/// Passes run in a fixed order (thousands separators, pounds, dollars,
/// decimals, ordinals, cardinals) and each pass sees the output of the
/// previous one. Text without ASCII digits is returned unchanged.
pub fn normalize_numbers(text: &str) -> String {
    let text = COMMA_NUMBER_RE.replace_all(text, |caps: &Captures| caps[0].replace(',', ""));
    let text = POUNDS_RE.replace_all(&text, "$1 pounds");
    let text = DOLLARS_RE.replace_all(&text, |caps: &Captures| expand_dollars(&caps[1]));
    let text = DECIMAL_NUMBER_RE.replace_all(&text, |caps: &Captures| caps[0].replace('.', " point "));
    let text = ORDINAL_RE.replace_all(&text, |caps: &Captures| expand_ordinal(&caps[1]));
    let text = NUMBER_RE.replace_all(&text, |caps: &Captures| expand_number(&caps[0]));
    text.into_owned()
}

fn expand_dollars(amount: &str) -> String {
    let parts: Vec<&str> = amount.split('.').collect();
    if parts.len() > 2 {
        return format!("{amount} dollars");
    }
    let parse = |part: Option<&&str>| -> Option<u64> {
        match part {
            Some(p) if !p.is_empty() => p.parse().ok(),
            _ => Some(0),
        }
    };
    let (Some(dollars), Some(cents)) = (parse(parts.first()), parse(parts.get(1))) else {
        // Stray separators (`$,5`) or amounts beyond u64.
        return format!("{amount} dollars");
    };

    let dollar_unit = if dollars == 1 { "dollar" } else { "dollars" };
    let cent_unit = if cents == 1 { "cent" } else { "cents" };
    match (dollars, cents) {
        (0, 0) => "zero dollars".to_string(),
        (d, 0) => format!("{d} {dollar_unit}"),
        (0, c) => format!("{c} {cent_unit}"),
        (d, c) => format!("{d} {dollar_unit}, {c} {cent_unit}"),
    }
}

fn expand_ordinal(digits: &str) -> String {
    if let Ok(n) = digits.parse::<u64>() {
        return ordinal(n);
    }
    // Too long for a u64: read digit by digit, the last one as an ordinal.
    let (head, last) = digits.split_at(digits.len() - 1);
    let last = ordinal(u64::from(last.as_bytes()[0] - b'0'));
    format!("{} {last}", spell_digits(head))
}

fn expand_number(digits: &str) -> String {
    match digits.parse::<u64>() {
        Ok(n) if 1000 < n && n < 3000 => year(n),
        Ok(n) => cardinal(n, ""),
        Err(_) => spell_digits(digits),
    }
}

/// Reads four-digit numbers between 1000 and 3000 the way years are said.
fn year(n: u64) -> String {
    if n == 2000 {
        "two thousand".to_string()
    } else if 2000 < n && n < 2010 {
        format!("two thousand {}", cardinal(n % 100, ""))
    } else if n % 100 == 0 {
        format!("{} hundred", cardinal(n / 100, ""))
    } else {
        let (high, low) = (n / 100, n % 100);
        let low = if low < 10 {
            format!("oh {}", UNITS[low as usize])
        } else {
            below_hundred(low)
        };
        format!("{} {low}", below_hundred(high))
    }
}

fn below_hundred(n: u64) -> String {
    debug_assert!(n < 100);
    match n {
        0..20 => UNITS[n as usize].to_string(),
        _ if n % 10 == 0 => TENS[(n / 10) as usize].to_string(),
        _ => format!("{}-{}", TENS[(n / 10) as usize], UNITS[(n % 10) as usize]),
    }
}

/// Words for a group of three digits, `and_word` between hundreds and the rest.
fn below_thousand(n: u64, and_word: &str) -> String {
    debug_assert!(0 < n && n < 1000);
    let (hundreds, rest) = (n / 100, n % 100);
    match (hundreds, rest) {
        (0, r) => below_hundred(r),
        (h, 0) => format!("{} hundred", UNITS[h as usize]),
        (h, r) if and_word.is_empty() => format!("{} hundred {}", UNITS[h as usize], below_hundred(r)),
        (h, r) => format!("{} hundred {and_word} {}", UNITS[h as usize], below_hundred(r)),
    }
}

/// English cardinal words for `n`.
///
/// Thousands groups are separated by `, `. A final group below one hundred
/// is joined with `and_word` instead (or a bare space when `and_word` is
/// empty), and `and_word` also separates hundreds from tens:
///
/// ```
/// use tts_cleaners::numbers::cardinal;
///
/// assert_eq!(cardinal(5207, ""), "five thousand, two hundred seven");
/// assert_eq!(cardinal(1_000_005, "and"), "one million and five");
/// assert_eq!(cardinal(115, "and"), "one hundred and fifteen");
/// ```
pub fn cardinal(n: u64, and_word: &str) -> String {
    if n == 0 {
        return UNITS[0].to_string();
    }

    let mut groups = Vec::with_capacity(SCALES.len());
    let mut remaining = n;
    let mut scale = 0;
    while remaining > 0 {
        let group = remaining % 1000;
        if group > 0 {
            groups.push((group, scale));
        }
        remaining /= 1000;
        scale += 1;
    }
    groups.reverse();

    let mut out = String::new();
    let last = groups.len() - 1;
    for (i, &(group, scale)) in groups.iter().enumerate() {
        if i > 0 {
            if i == last && scale == 0 && group < 100 {
                out.push(' ');
                if !and_word.is_empty() {
                    out.push_str(and_word);
                    out.push(' ');
                }
            } else {
                out.push_str(", ");
            }
        }
        out.push_str(&below_thousand(group, and_word));
        if scale > 0 {
            out.push(' ');
            out.push_str(SCALES[scale]);
        }
    }
    out
}

/// English ordinal words for `n` (`twenty-first`, `one hundred and second`).
pub fn ordinal(n: u64) -> String {
    let words = cardinal(n, "and");
    let split = words
        .rfind(|c: char| c == ' ' || c == '-')
        .map_or(0, |i| i + 1);
    let (head, last) = words.split_at(split);
    let last = match last {
        "one" => "first".to_string(),
        "two" => "second".to_string(),
        "three" => "third".to_string(),
        "five" => "fifth".to_string(),
        "eight" => "eighth".to_string(),
        "nine" => "ninth".to_string(),
        "twelve" => "twelfth".to_string(),
        w if w.ends_with('y') => format!("{}ieth", &w[..w.len() - 1]),
        w => format!("{w}th"),
    };
    format!("{head}{last}")
}

/// Digit-by-digit reading for runs too long to hold in a `u64`.
fn spell_digits(digits: &str) -> String {
    digits
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| UNITS[(b - b'0') as usize])
        .collect::<Vec<_>>()
        .join(" ")
}
