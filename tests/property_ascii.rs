//! Property-based tests ensuring transliteration output constraints.
use proptest::prelude::*;
use unidecode_charset::{Charset, OnUnknown, Unidecode};

use std::sync::LazyLock;

static ASCII: LazyLock<Unidecode> = LazyLock::new(Unidecode::to_ascii);
static ASCII_DROP: LazyLock<Unidecode> = LazyLock::new(|| {
    Unidecode::builder(Charset::Ascii)
        .on_unknown(OnUnknown::Drop)
        .build()
});

proptest! {
    #[test]
    fn output_is_ascii(ref s in "(?s).{0,256}") {
        prop_assert!(ASCII.decode(s.as_str()).is_ascii());
        prop_assert!(ASCII_DROP.decode(s.as_str()).is_ascii());
    }

    #[test]
    fn ascii_input_is_only_trimmed(ref s in "[ -~\t\n\r]{0,128}") {
        let trimmed = s.trim_matches(|c: char| c <= ' ');
        prop_assert_eq!(ASCII.decode(s.as_str()), trimmed);
    }

    #[test]
    fn idempotent_after_first_pass(ref s in "(?s).{0,256}") {
        let once = ASCII.decode(s.as_str());
        let twice = ASCII.decode(once.as_str());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn supplementary_planes_vanish(
        ref head in "[a-z]{1,8}",
        ref chars in proptest::collection::vec(0x10000u32..=0x10ffff, 0..16),
        ref tail in "[a-z]{1,8}",
    ) {
        let middle: String = chars.iter().filter_map(|&cp| char::from_u32(cp)).collect();
        let input = format!("{head}{middle}{tail}");
        prop_assert_eq!(ASCII.decode(input.as_str()), format!("{head}{tail}"));
    }

    #[test]
    fn no_panics_random_unicode(ref s in proptest::collection::vec(any::<char>(), 0..128)) {
        let input: String = s.iter().collect();
        let out = ASCII.decode(input.as_str());
        prop_assert!(out.is_ascii());
        let initials = ASCII.to_initials(input.as_str());
        prop_assert!(initials.chars().count() <= out.chars().count());
    }
}
