//! Property-based tests: trial division invariants over large inputs.

use primekit_source::FactorSource;
use primekit_trial::{TrialDivision, factorize};
use proptest::prelude::*;

fn is_prime(p: i64) -> bool {
    p >= 2 && (2i64..).take_while(|d| d * d <= p).all(|d| p % d != 0)
}

fn arb_input() -> impl Strategy<Value = i64> {
    2i64..=1_000_000_000_000
}

/// Known primes, small and large, to build composites with a known answer.
fn arb_prime() -> impl Strategy<Value = i64> {
    prop::sample::select(vec![2i64, 3, 5, 7, 11, 13, 29, 97, 7919, 104_729])
}

proptest! {
    #[test]
    fn product_equals_input(n in arb_input()) {
        let product = factorize(n)
            .unwrap()
            .iter()
            .try_fold(1i64, |acc, &f| acc.checked_mul(f));
        prop_assert_eq!(product, Some(n));
    }

    #[test]
    fn every_factor_is_prime(n in arb_input()) {
        for f in factorize(n).unwrap() {
            prop_assert!(is_prime(f), "factorize({}) contains non-prime {}", n, f);
        }
    }

    #[test]
    fn sequence_is_non_decreasing(n in arb_input()) {
        let factors = factorize(n).unwrap();
        prop_assert!(factors.is_sorted(), "factorize({}) = {:?}", n, factors);
    }

    #[test]
    fn repeated_calls_are_identical(n in arb_input()) {
        let first = TrialDivision.factors(n).unwrap();
        prop_assert_eq!(TrialDivision.factors(n).unwrap(), first.clone());
        prop_assert_eq!(factorize(n).unwrap(), first);
    }

    #[test]
    fn recovers_known_prime_product(primes in prop::collection::vec(arb_prime(), 1..4)) {
        let n: i64 = primes.iter().product();
        let mut expected = primes.clone();
        expected.sort_unstable();
        prop_assert_eq!(factorize(n).unwrap(), expected);
    }

    #[test]
    fn non_positive_input_is_rejected(n in i64::MIN..=0) {
        prop_assert!(factorize(n).is_err());
    }
}
