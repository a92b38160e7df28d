// ============================================================================
// NUMBER SPELLING
// ============================================================================

// Covers 0..=999_999_999: units, tens, hundreds, one thousand group and one
// million group. Larger values are rejected rather than misspelled.

use crate::error::SpellError;

/// Largest value `words` can spell.
pub const MAX_SPELLABLE: u64 = 999_999_999;

const ONE_TO_NINETEEN: [&str; 19] = [
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

const TENS: [&str; 8] = [
    "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Spell `n` in English, e.g. `1234` -> `"one thousand two hundred thirty-four"`.
///
/// The result never carries leading or trailing whitespace.
pub fn words(n: u64) -> Result<String, SpellError> {
    if n > MAX_SPELLABLE {
        return Err(SpellError::OutOfRange(n));
    }
    if n == 0 {
        return Ok("zero".to_string());
    }

    let composed = if n < 100 {
        two_digits(n)
    } else if n < 1_000 {
        three_digits(n)
    } else if n < 1_000_000 {
        let remainder = n % 1_000;
        // Trailing space is left in when the remainder is zero; trimmed below.
        format!(
            "{} thousand {}",
            three_digits(n / 1_000),
            if remainder != 0 {
                three_digits(remainder)
            } else {
                String::new()
            }
        )
    } else {
        let thousands = (n % 1_000_000) / 1_000;
        let remainder = n % 1_000;
        let mut composed = format!("{} million", three_digits(n / 1_000_000));
        if thousands > 0 {
            composed.push(' ');
            composed.push_str(&three_digits(thousands));
            composed.push_str(" thousand");
        }
        if remainder > 0 {
            composed.push(' ');
            composed.push_str(&three_digits(remainder));
        }
        composed
    };

    Ok(composed.trim().to_string())
}

fn one_to_nineteen(n: u64) -> &'static str {
    match n {
        1..=19 => ONE_TO_NINETEEN[n as usize - 1],
        _ => "",
    }
}

fn two_digits(n: u64) -> String {
    if n < 20 {
        return one_to_nineteen(n).to_string();
    }
    let tens = TENS[(n / 10) as usize - 2];
    match n % 10 {
        0 => tens.to_string(),
        units => format!("{}-{}", tens, one_to_nineteen(units)),
    }
}

fn three_digits(n: u64) -> String {
    let hundreds = n / 100;
    let remainder = n % 100;
    match (hundreds, remainder) {
        (0, _) => two_digits(remainder),
        (h, 0) => format!("{} hundred", one_to_nineteen(h)),
        (h, r) => format!("{} hundred {}", one_to_nineteen(h), two_digits(r)),
    }
}
