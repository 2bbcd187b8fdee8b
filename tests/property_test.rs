use delimsum::{sum, SumError};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_two_term_sum(a in 0i64..=1000, b in 0i64..=1000) {
        prop_assert_eq!(sum(&format!("{},{}", a, b)).unwrap(), a + b);
    }

    #[test]
    fn prop_oversized_values_are_excluded(a in 0i64..=1000, big in 1001i64..=100_000) {
        prop_assert_eq!(sum(&format!("{},{}", a, big)).unwrap(), a);
        prop_assert_eq!(sum(&format!("{},{}", big, a)).unwrap(), a);
    }

    #[test]
    fn prop_negatives_are_reported_in_order(a in 1i64..=1000, b in 1i64..=1000) {
        let err = sum(&format!("{},5,{}", -a, -b)).unwrap_err();
        prop_assert_eq!(err, SumError::NegativesNotAllowed(vec![-a, -b]));
    }

    #[test]
    fn prop_sum_matches_plain_addition(values in proptest::collection::vec(0i64..=1000, 1..20)) {
        let input = values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(",");
        prop_assert_eq!(sum(&input).unwrap(), values.iter().sum::<i64>());
    }

    #[test]
    fn prop_sum_is_idempotent(values in proptest::collection::vec(0i64..=2000, 1..20)) {
        let input = values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        prop_assert_eq!(sum(&input).unwrap(), sum(&input).unwrap());
    }
}
