//! Property-based tests for natural number arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;
    use std::cmp::Ordering;

    use crate::{Natural, NaturalError};

    // Values around u64::MAX exercise limb carries.
    fn wide() -> impl Strategy<Value = u128> {
        prop_oneof![
            0u128..1000u128,
            (u128::from(u64::MAX) - 8)..(u128::from(u64::MAX) + 8),
            any::<u64>().prop_map(u128::from),
        ]
    }

    fn nat(value: u128) -> Natural {
        value.to_string().parse().unwrap()
    }

    proptest! {
        #[test]
        fn compare_matches_native(a in any::<u64>(), b in any::<u64>()) {
            prop_assert_eq!(Natural::new(a).compare(&Natural::new(b)), a.cmp(&b));
            prop_assert_eq!(Natural::new(a).equals(&Natural::new(b)), a == b);
        }

        #[test]
        fn add_matches_native(a in wide(), b in wide()) {
            let mut x = nat(a);
            x.add(&nat(b));
            prop_assert_eq!(x, nat(a + b));
        }

        #[test]
        fn add_commutative(a in wide(), b in wide()) {
            prop_assert_eq!(&nat(a) + &nat(b), &nat(b) + &nat(a));
        }

        #[test]
        fn divide_matches_native(a in wide(), d in 1u64..1000u64) {
            let mut x = nat(a);
            x.divide(&Natural::new(d)).unwrap();
            prop_assert_eq!(x, nat(a / u128::from(d)));
        }

        #[test]
        fn divide_by_zero_leaves_value(a in wide()) {
            let mut x = nat(a);
            prop_assert_eq!(x.divide(&Natural::zero()), Err(NaturalError::DivisionByZero));
            prop_assert_eq!(x, nat(a));
        }

        #[test]
        fn power_matches_repeated_product(a in 0u64..1000u64, e in 0u32..12u32) {
            let mut x = Natural::new(a);
            x.power(e);
            let mut expected = Natural::one();
            for _ in 0..e {
                expected = &expected * &Natural::new(a);
            }
            prop_assert_eq!(x, expected);
        }

        #[test]
        fn compare_power_matches_full_power(a in 0u64..2000u64, e in 0u32..40u32, n in wide()) {
            let base = Natural::new(a);
            prop_assert_eq!(base.compare_power(e, &nat(n)), base.pow(e).compare(&nat(n)));
        }

        #[test]
        fn increment_then_decrement_is_identity(a in wide()) {
            let mut x = nat(a);
            x.increment();
            prop_assert_eq!(x.compare(&nat(a)), Ordering::Greater);
            x.decrement().unwrap();
            prop_assert_eq!(x, nat(a));
        }

        #[test]
        fn decrement_matches_native(a in 1u64..=u64::MAX) {
            let mut x = Natural::new(a);
            x.decrement().unwrap();
            prop_assert_eq!(x.to_u64(), Some(a - 1));
        }

        #[test]
        fn bit_len_brackets_value(a in 1u64..=u64::MAX) {
            let x = Natural::new(a);
            let bits = x.bit_len();
            prop_assert!(Natural::power_of_two(bits - 1) <= x);
            prop_assert!(x < Natural::power_of_two(bits));
        }

        #[test]
        fn display_round_trips(a in wide()) {
            prop_assert_eq!(nat(a).to_string(), a.to_string());
        }
    }
}
