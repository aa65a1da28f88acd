use file_filter_engine::classify::{Classified, classify, parse_float, parse_integer};
use file_filter_engine::stats::Aggregates;
use proptest::prelude::*;

proptest! {
    #[test]
    fn classification_respects_precedence(line in "[-+0-9.eE a-z]{0,12}") {
        match classify(&line) {
            Classified::Integer(v) => {
                prop_assert_eq!(line.parse::<i64>().ok(), Some(v));
            }
            Classified::Float(_) => {
                prop_assert!(parse_integer(&line).is_none());
                prop_assert!(parse_float(&line).is_some());
            }
            Classified::String(s) => {
                prop_assert_eq!(s, line.as_str());
                prop_assert!(parse_integer(&line).is_none());
                prop_assert!(parse_float(&line).is_none());
            }
        }
    }

    #[test]
    fn any_i64_is_an_integer(v in any::<i64>()) {
        let line = v.to_string();
        prop_assert_eq!(classify(&line), Classified::Integer(v));
    }

    #[test]
    fn counts_add_up_and_extremes_are_ordered(
        lines in proptest::collection::vec("[-0-9.a-c]{0,6}", 0..64)
    ) {
        let mut stats = Aggregates::default();
        for line in &lines {
            stats.record(&classify(line));
        }

        prop_assert_eq!(stats.total(), lines.len() as u64);
        if let (Some(min), Some(max)) = (stats.integers.min(), stats.integers.max()) {
            prop_assert!(min <= max);
        }
        if let (Some(min), Some(max)) = (stats.floats.min(), stats.floats.max()) {
            prop_assert!(min <= max);
        }
        if let (Some(min), Some(max)) = (stats.strings.min_len(), stats.strings.max_len()) {
            prop_assert!(min <= max);
        }
    }
}
