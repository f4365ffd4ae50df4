//! Text Normalization
//!
//! Canonicalizes raw transcripts before number conversion and field matching:
//! lowercase, bare vowels, punctuation turned into spaces, single spacing.

/// Accented vowels and their bare replacements
const ACCENTED_VOWELS: [(char, char); 5] =
    [('á', 'a'), ('é', 'e'), ('í', 'i'), ('ó', 'o'), ('ú', 'u')];

/// Punctuation that separates words in a transcript
const PUNCTUATION: [char; 4] = ['.', ',', ';', ':'];

/// Normalize a transcript.
///
/// Total and idempotent: `normalize(&normalize(x)) == normalize(x)`.
/// A `.` between two digits is a decimal point ("7.5") and survives.
pub fn normalize(text: &str) -> String {
    let chars: Vec<char> = text.to_lowercase().chars().map(strip_accent).collect();

    let mut spaced = String::with_capacity(chars.len());
    for (i, &c) in chars.iter().enumerate() {
        if PUNCTUATION.contains(&c) && !is_decimal_point(&chars, i) {
            spaced.push(' ');
        } else {
            spaced.push(c);
        }
    }

    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn strip_accent(c: char) -> char {
    ACCENTED_VOWELS
        .iter()
        .find(|(accented, _)| *accented == c)
        .map(|(_, bare)| *bare)
        .unwrap_or(c)
}

fn is_decimal_point(chars: &[char], i: usize) -> bool {
    chars[i] == '.'
        && i > 0
        && chars[i - 1].is_ascii_digit()
        && chars.get(i + 1).is_some_and(|c| c.is_ascii_digit())
}
