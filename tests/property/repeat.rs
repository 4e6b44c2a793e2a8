//! Property tests for the repeat operation.
//!
//! Invariants tested:
//! - Output length is input length times count (bytes and chars)
//! - Output is exactly `count` consecutive copies of the input
//! - Zero count, empty input and count of one behave as identities
//! - Checked variants agree with `repeat` and honor limits

use proptest::prelude::*;
use str_repeat::{repeat, repeat_within, repeated_len, try_repeat, RepeatError, RepeatLimits};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: ∀s:string, n:nat. (s^n).length = s.length * n
    #[test]
    fn repeat_length_is_product(s in any::<String>(), n in 0usize..64) {
        let out = repeat(&s, n);
        prop_assert_eq!(out.len(), s.len() * n);
        prop_assert_eq!(out.chars().count(), s.chars().count() * n);
        prop_assert_eq!(repeated_len(&s, n), Some(out.len()));
    }

    /// Property: Output is made of n copies of s
    #[test]
    fn repeat_is_concatenation_of_copies(s in "[a-z0-9é✓]{1,8}", n in 0usize..32) {
        let out = repeat(&s, n);
        let chunk = s.len();
        for i in 0..n {
            prop_assert_eq!(&out[i * chunk..(i + 1) * chunk], s.as_str());
        }
    }

    /// Property: Zero repetitions is always empty
    #[test]
    fn repeat_zero_is_empty(s in any::<String>()) {
        prop_assert_eq!(repeat(&s, 0), "");
    }

    /// Property: Repeating the empty string is always empty
    #[test]
    fn repeat_empty_is_empty(n in 0usize..10_000) {
        prop_assert_eq!(repeat("", n), "");
    }

    /// Property: One repetition is the identity
    #[test]
    fn repeat_once_is_identity(s in any::<String>()) {
        prop_assert_eq!(repeat(&s, 1), s);
    }

    /// Property: try_repeat matches repeat when the length fits
    #[test]
    fn try_repeat_agrees_with_repeat(s in any::<String>(), n in 0usize..64) {
        prop_assert_eq!(try_repeat(&s, n).unwrap(), repeat(&s, n));
    }

    /// Property: Overflowing lengths are reported, not allocated
    #[test]
    fn try_repeat_reports_overflow(s in ".{2,16}", extra in 0usize..1024) {
        let n = (usize::MAX / s.len()).saturating_add(1).saturating_add(extra);
        let is_overflow = matches!(
            try_repeat(&s, n),
            Err(RepeatError::CapacityOverflow { .. })
        );
        prop_assert!(is_overflow, "expected overflow for len {} x {}", s.len(), n);
    }

    /// Property: repeat_within succeeds exactly when the output fits the limit
    #[test]
    fn repeat_within_respects_limit(
        s in any::<String>(),
        n in 0usize..64,
        limit in 1usize..512,
    ) {
        let limits = RepeatLimits { max_output_bytes: Some(limit) };
        let required = s.len() * n;
        match repeat_within(&s, n, &limits) {
            Ok(out) => {
                prop_assert!(required <= limit);
                prop_assert_eq!(out.len(), required);
            }
            Err(RepeatError::OutputTooLarge { required: r, limit: l }) => {
                prop_assert!(required > limit);
                prop_assert_eq!(r, required);
                prop_assert_eq!(l, limit);
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }
}
