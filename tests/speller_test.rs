use proptest::prelude::*;
use wordclock::speller::{words, MAX_SPELLABLE};
use wordclock::SpellError;

#[test]
fn reference_spellings() {
    let cases = [
        (0, "zero"),
        (15, "fifteen"),
        (42, "forty-two"),
        (100, "one hundred"),
        (101, "one hundred one"),
        (1000, "one thousand"),
        (1234, "one thousand two hundred thirty-four"),
        (1_000_000, "one million"),
    ];
    for (n, expected) in cases {
        assert_eq!(words(n).unwrap(), expected, "words({})", n);
    }
}

#[test]
fn mixed_groups() {
    assert_eq!(words(21_007).unwrap(), "twenty-one thousand seven");
    assert_eq!(words(1_001_001).unwrap(), "one million one thousand one");
    assert_eq!(
        words(47_300_019).unwrap(),
        "forty-seven million three hundred thousand nineteen"
    );
}

#[test]
fn no_stray_whitespace_below_one_million() {
    for n in 1..1_000_000u64 {
        let spelled = words(n).unwrap();
        assert_eq!(spelled.trim(), spelled, "words({}) = {:?}", n, spelled);
        assert!(!spelled.contains("  "), "words({}) = {:?}", n, spelled);
    }
}

#[test]
fn range_limit() {
    assert!(words(MAX_SPELLABLE).is_ok());
    assert_eq!(
        words(MAX_SPELLABLE + 1),
        Err(SpellError::OutOfRange(MAX_SPELLABLE + 1))
    );
}

proptest! {
    #[test]
    fn spelled_words_are_clean(n in 0u64..=MAX_SPELLABLE) {
        let spelled = words(n).unwrap();
        prop_assert!(!spelled.is_empty());
        prop_assert_eq!(spelled.trim(), spelled.as_str());
        prop_assert!(!spelled.contains("  "));
        prop_assert!(spelled
            .chars()
            .all(|c| c.is_ascii_lowercase() || c == ' ' || c == '-'));
    }

    #[test]
    fn hyphens_only_join_tens_and_units(n in 21u64..100) {
        let spelled = words(n).unwrap();
        if n % 10 == 0 {
            prop_assert!(!spelled.contains('-'));
        } else {
            prop_assert_eq!(spelled.matches('-').count(), 1);
        }
    }
}
