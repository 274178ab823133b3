#![cfg(feature = "compose")]
//! Property-based tests for the dynamic combinators.
//!
//! ## Curry Laws
//! - **Equivalence**: `curry(f)(a)(b)(c) == curry(f)(a, b)(c) == f(a, b, c)`
//!
//! ## Memoize Laws
//! - **Transparency**: `memoize(f)(x) == f(x)`, on first and repeated calls
//!
//! ## Composition Laws
//! - **Associativity**: `compose([f, compose([g, h])]) == compose([compose([f, g]), h])`
//! - **Identity**: `compose([identity, f]) == f == compose([f, identity])`
//! - **Pipe**: `pipe([f, g]) == compose([g, f])`
//!
//! ## Flip Laws
//! - **Flip Definition**: `flip(f)(a, b) == f(b, a)`
//! - **Double Flip Identity**: `flip(flip(f))(a, b) == f(a, b)`

use exos::compose::{compose, curry, flip, memoize, pipe};
use exos::{Function, Signature, Value, args};
use proptest::prelude::*;

fn affine() -> Function {
    Function::new("affine", Signature::new(3), |arguments| {
        Ok(Value::Integer(
            arguments.integer(0)? * arguments.integer(1)? + arguments.integer(2)?,
        ))
    })
}

fn subtract() -> Function {
    Function::new("subtract", Signature::new(2), |arguments| {
        Ok(Value::Integer(arguments.integer(0)? - arguments.integer(1)?))
    })
}

fn add(amount: i128) -> Function {
    Function::new("add", Signature::new(1), move |arguments| {
        Ok(Value::Integer(arguments.integer(0)? + amount))
    })
}

fn times(factor: i128) -> Function {
    Function::new("times", Signature::new(1), move |arguments| {
        Ok(Value::Integer(arguments.integer(0)? * factor))
    })
}

fn apply(value: &Value, arguments: &exos::Arguments) -> Value {
    value
        .as_function()
        .expect("partial application")
        .call(arguments)
        .expect("call succeeds")
}

// =============================================================================
// Curry Laws
// =============================================================================

proptest! {
    /// Every grouping of the same arguments yields the direct result.
    #[test]
    fn prop_curry_groupings_agree(
        a in -1_000_i128..1_000,
        b in -1_000_i128..1_000,
        c in -1_000_i128..1_000,
    ) {
        let direct = affine().call(&args![a, b, c]).unwrap();
        let curried = curry(affine());

        let first = curried.call(&args![a]).unwrap();
        let second = apply(&first, &args![b]);
        prop_assert_eq!(&apply(&second, &args![c]), &direct);

        let pair = curried.call(&args![a, b]).unwrap();
        prop_assert_eq!(&apply(&pair, &args![c]), &direct);

        prop_assert_eq!(&apply(&first, &args![b, c]), &direct);
        prop_assert_eq!(&curried.call(&args![a, b, c]).unwrap(), &direct);
    }
}

// =============================================================================
// Memoize Laws
// =============================================================================

proptest! {
    /// A memoized function returns what the function returns, every time.
    #[test]
    fn prop_memoize_is_transparent(xs in prop::collection::vec(-50_i128..50, 1..40)) {
        let memoized = memoize(times(3));
        for x in &xs {
            let expected = times(3).call(&args![*x]).unwrap();
            prop_assert_eq!(memoized.call(&args![*x]).unwrap(), expected);
        }
        let distinct: std::collections::BTreeSet<_> = xs.iter().collect();
        prop_assert_eq!(memoized.cache().len(), distinct.len());
    }
}

// =============================================================================
// Composition Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_compose_associativity(x in -10_000_i128..10_000) {
        let left = compose([add(1), compose([times(2), add(-3)])]);
        let right = compose([compose([add(1), times(2)]), add(-3)]);
        prop_assert_eq!(left.call(&args![x]), right.call(&args![x]));
    }

    #[test]
    fn prop_compose_identity(x in -10_000_i128..10_000) {
        let function = times(7);
        let expected = function.call(&args![x]);
        prop_assert_eq!(compose([Function::identity(), function.clone()]).call(&args![x]), expected.clone());
        prop_assert_eq!(compose([function, Function::identity()]).call(&args![x]), expected);
    }

    #[test]
    fn prop_pipe_is_reversed_compose(x in -10_000_i128..10_000) {
        let piped = pipe([add(5), times(-2)]);
        let composed = compose([times(-2), add(5)]);
        prop_assert_eq!(piped.call(&args![x]), composed.call(&args![x]));
    }
}

// =============================================================================
// Flip Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_flip_definition(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(
            flip(subtract()).call(&args![a, b]),
            subtract().call(&args![b, a])
        );
    }

    #[test]
    fn prop_double_flip_identity(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(
            flip(flip(subtract())).call(&args![a, b]),
            subtract().call(&args![a, b])
        );
    }
}
