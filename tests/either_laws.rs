//! Property-based tests for the `Either` functor, bifunctor and monad laws.

#![cfg(feature = "control")]

use proptest::prelude::*;
use taskeither::control::Either;

fn either_strategy() -> impl Strategy<Value = Either<String, i32>> {
    prop_oneof![
        any::<i32>().prop_map(Either::Right),
        "[a-z]{0,8}".prop_map(Either::Left),
    ]
}

proptest! {
    /// Identity Law: e.map(|x| x) == e
    #[test]
    fn prop_either_functor_identity(either in either_strategy()) {
        prop_assert_eq!(either.clone().map(|x| x), either);
    }

    /// Composition Law: e.map(f).map(g) == e.map(|x| g(f(x)))
    #[test]
    fn prop_either_functor_composition(either in either_strategy()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(3);

        let left = either.clone().map(function1).map(function2);
        let right = either.map(|x| function2(function1(x)));
        prop_assert_eq!(left, right);
    }

    /// Left Identity Law: Right(a).flat_map(f) == f(a)
    #[test]
    fn prop_either_monad_left_identity(value: i32) {
        let function = |n: i32| {
            if n % 2 == 0 { Either::Right(n / 2) } else { Either::Left(format!("{n} is odd")) }
        };
        prop_assert_eq!(Either::<String, i32>::Right(value).flat_map(function), function(value));
    }

    /// Right Identity Law: e.flat_map(Right) == e
    #[test]
    fn prop_either_monad_right_identity(either in either_strategy()) {
        prop_assert_eq!(either.clone().flat_map(Either::Right), either);
    }

    /// Associativity Law: e.flat_map(f).flat_map(g) == e.flat_map(|x| f(x).flat_map(g))
    #[test]
    fn prop_either_monad_associativity(either in either_strategy()) {
        let function1 = |n: i32| -> Either<String, i32> { Either::Right(n.wrapping_sub(7)) };
        let function2 = |n: i32| -> Either<String, i32> {
            if n > 0 { Either::Right(n) } else { Either::Left("not positive".to_string()) }
        };

        let left = either.clone().flat_map(function1).flat_map(function2);
        let right = either.flat_map(|x| function1(x).flat_map(function2));
        prop_assert_eq!(left, right);
    }

    /// Bimap consistency: e.bimap(f, g) == e.map_left(f).map(g)
    #[test]
    fn prop_either_bimap_consistency(either in either_strategy()) {
        let left = either.clone().bimap(|s: String| s.len(), |n: i32| i64::from(n) * 2);
        let right = either.map_left(|s: String| s.len()).map(|n: i32| i64::from(n) * 2);
        prop_assert_eq!(left, right);
    }

    /// Swapping twice is the identity.
    #[test]
    fn prop_either_swap_involution(either in either_strategy()) {
        prop_assert_eq!(either.clone().swap().swap(), either);
    }

    /// Conversion to Result and back preserves the value.
    #[test]
    fn prop_either_result_round_trip(either in either_strategy()) {
        let result: Result<i32, String> = either.clone().into();
        prop_assert_eq!(Either::from(result), either);
    }
}
