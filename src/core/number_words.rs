//! Spanish number words
//!
//! Replaces spelled-out numbers ("veinte", "dieciseis", "doscientos") with
//! their digits, one whitespace-delimited token at a time. Tokens that are
//! not number words are kept exactly as they were.

/// Outcome of parsing a single token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberParse {
    /// The token is a number word with this value
    Value(u64),
    /// The token is not part of the numeral vocabulary
    NotANumber,
}

const UNITS: &[(&str, u64)] = &[
    ("cero", 0),
    ("uno", 1),
    ("un", 1),
    ("una", 1),
    ("dos", 2),
    ("tres", 3),
    ("cuatro", 4),
    ("cinco", 5),
    ("seis", 6),
    ("siete", 7),
    ("ocho", 8),
    ("nueve", 9),
];

const TEENS: &[(&str, u64)] = &[
    ("diez", 10),
    ("once", 11),
    ("doce", 12),
    ("trece", 13),
    ("catorce", 14),
    ("quince", 15),
];

const TENS: &[(&str, u64)] = &[
    ("veinte", 20),
    ("treinta", 30),
    ("cuarenta", 40),
    ("cincuenta", 50),
    ("sesenta", 60),
    ("setenta", 70),
    ("ochenta", 80),
    ("noventa", 90),
];

const HUNDREDS: &[(&str, u64)] = &[
    ("cien", 100),
    ("ciento", 100),
    ("doscientos", 200),
    ("trescientos", 300),
    ("cuatrocientos", 400),
    ("quinientos", 500),
    ("seiscientos", 600),
    ("setecientos", 700),
    ("ochocientos", 800),
    ("novecientos", 900),
];

const LARGE: &[(&str, u64)] = &[("mil", 1_000), ("millon", 1_000_000), ("millones", 1_000_000)];

fn lookup(table: &[(&str, u64)], word: &str) -> Option<u64> {
    table.iter().find(|(name, _)| *name == word).map(|(_, v)| *v)
}

/// Units usable after "dieci"/"veinti" ("dieciseis", "veintitres", "veintiun")
fn compound_unit(rest: &str, min: u64) -> Option<u64> {
    lookup(UNITS, rest).filter(|n| (min..=9).contains(n))
}

/// Feminine hundreds ("doscientas") share the masculine value
fn hundreds(word: &str) -> Option<u64> {
    lookup(HUNDREDS, word).or_else(|| {
        word.strip_suffix("ientas")
            .and_then(|stem| lookup(HUNDREDS, &format!("{stem}ientos")))
    })
}

/// Parse one token as a Spanish number word.
///
/// Digits are not number words: "20" is `NotANumber` and stays verbatim.
pub fn parse_token(token: &str) -> NumberParse {
    let word = token.to_lowercase();

    let value = lookup(UNITS, &word)
        .or_else(|| lookup(TEENS, &word))
        .or_else(|| lookup(TENS, &word))
        .or_else(|| hundreds(&word))
        .or_else(|| lookup(LARGE, &word))
        .or_else(|| {
            word.strip_prefix("dieci")
                .and_then(|rest| compound_unit(rest, 6))
                .map(|n| 10 + n)
        })
        .or_else(|| {
            word.strip_prefix("veinti")
                .and_then(|rest| compound_unit(rest, 1))
                .map(|n| 20 + n)
        });

    match value {
        Some(n) => NumberParse::Value(n),
        None => NumberParse::NotANumber,
    }
}

/// Convert every number-word token in `text` to digits.
///
/// Never fails. Tokens are rejoined with single spaces in their original order.
pub fn convert(text: &str) -> String {
    text.split_whitespace()
        .map(|token| match parse_token(token) {
            NumberParse::Value(n) => n.to_string(),
            NumberParse::NotANumber => token.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
