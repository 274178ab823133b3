//! Combinators over dynamic functions: [`flip`], [`compose`] and [`pipe`].
//!
//! They work on [`Function`] values, so arity is only known at runtime.

use crate::compose::curry::Curried;
use crate::function::{Arguments, Function, Signature};
use crate::value::Value;

/// Swaps the first two positional arguments of `function`.
///
/// Functions of arity below two are returned unchanged. Otherwise the flipped
/// function requires at least two positional arguments. With exactly the
/// original arity it calls through; otherwise, with fewer or more, it returns
/// the swapped arguments as a curried partial application.
///
/// # Laws
///
/// - **Flip definition**: `flip(f)(a, b) == f(b, a)`
/// - **Double flip identity**: `flip(flip(f))(a, b) == f(a, b)`
///
/// # Examples
///
/// ```rust
/// use exos::compose::flip;
/// use exos::{Function, Signature, Value, args};
///
/// let subtract = Function::new("subtract", Signature::new(2), |arguments| {
///     Ok(Value::Integer(arguments.integer(0)? - arguments.integer(1)?))
/// });
///
/// assert_eq!(subtract.call(&args![100, 1])?, Value::Integer(99));
/// assert_eq!(flip(subtract).call(&args![100, 1])?, Value::Integer(-99));
/// # Ok::<(), exos::Error>(())
/// ```
pub fn flip(function: Function) -> Function {
    if function.arity() < 2 {
        return function;
    }

    let name = function.name().to_owned();
    Function::new(name, Signature::new(2).variadic(), move |arguments| {
        let (mut positional, keywords) = arguments.clone().into_parts();
        positional.swap(0, 1);
        let swapped = Arguments::from_parts(positional, keywords);

        if swapped.len() == function.arity() {
            function.call(&swapped)
        } else {
            let partial = Curried::with_bound(function.clone(), swapped);
            Ok(Value::Function(partial.into_function()))
        }
    })
}

/// Composes functions right to left: `compose([f, g])(x) == f(g(x))`.
///
/// The innermost (last) function receives the call's arguments and fixes the
/// composite's signature; every other function receives the previous result
/// as its single positional argument. An empty list composes to
/// [`Function::identity`].
///
/// # Examples
///
/// ```rust
/// use exos::compose::compose;
/// use exos::{Function, Signature, Value, args};
///
/// let double = Function::new("double", Signature::new(1), |arguments| {
///     Ok(Value::Integer(arguments.integer(0)? * 2))
/// });
/// let negate = Function::new("negate", Signature::new(1), |arguments| {
///     Ok(Value::Integer(-arguments.integer(0)?))
/// });
///
/// let composed = compose([double, negate]);
/// assert_eq!(composed.call(&args![4])?, Value::Integer(-8));
/// # Ok::<(), exos::Error>(())
/// ```
pub fn compose<I>(functions: I) -> Function
where
    I: IntoIterator<Item = Function>,
{
    let mut functions: Vec<Function> = functions.into_iter().collect();
    match functions.len() {
        0 => Function::identity(),
        1 => functions.remove(0),
        _ => {
            functions.reverse();
            chain(functions)
        }
    }
}

/// Composes functions left to right: `pipe([f, g])(x) == g(f(x))`.
///
/// # Examples
///
/// ```rust
/// use exos::compose::pipe;
/// use exos::{Function, Signature, Value, args};
///
/// let add_one = Function::new("add_one", Signature::new(1), |arguments| {
///     Ok(Value::Integer(arguments.integer(0)? + 1))
/// });
/// let square = Function::new("square", Signature::new(1), |arguments| {
///     let n = arguments.integer(0)?;
///     Ok(Value::Integer(n * n))
/// });
///
/// assert_eq!(pipe([add_one, square]).call(&args![2])?, Value::Integer(9));
/// # Ok::<(), exos::Error>(())
/// ```
pub fn pipe<I>(functions: I) -> Function
where
    I: IntoIterator<Item = Function>,
{
    let mut functions: Vec<Function> = functions.into_iter().collect();
    functions.reverse();
    compose(functions)
}

/// Chains functions in call order; the first one receives the arguments.
fn chain(functions: Vec<Function>) -> Function {
    let name = functions
        .iter()
        .map(Function::name)
        .collect::<Vec<_>>()
        .join(" | ");
    let signature = functions
        .first()
        .map_or_else(|| Signature::new(0).variadic(), Function::signature);

    Function::new(name, signature, move |arguments| {
        let mut stages = functions.iter();
        let mut value = match stages.next() {
            Some(first) => first.call(arguments)?,
            None => return Ok(arguments.get(0).cloned().unwrap_or_default()),
        };
        for stage in stages {
            value = stage.call(&Arguments::new().arg(value))?;
        }
        Ok(value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;
    use crate::error::Error;
    use rstest::rstest;

    fn subtract() -> Function {
        Function::new("subtract", Signature::new(2), |arguments| {
            Ok(Value::Integer(arguments.integer(0)? - arguments.integer(1)?))
        })
    }

    #[rstest]
    fn unary_functions_are_not_flipped() {
        let identity = Function::identity();
        assert!(flip(identity.clone()).ptr_eq(&identity));
    }

    #[rstest]
    fn flip_needs_two_arguments() {
        assert!(matches!(
            flip(subtract()).call(&args![1]),
            Err(Error::MissingArguments { .. })
        ));
    }

    #[rstest]
    fn flip_with_surplus_returns_partial() {
        let flipped = flip(subtract()).call(&args![1, 2, 3]);
        let Ok(Value::Function(partial)) = flipped else {
            panic!("expected a partial application, got {flipped:?}");
        };
        assert!(matches!(
            partial.call(&Arguments::new()),
            Err(Error::TooManyArguments { supplied: 3, .. })
        ));
    }

    #[rstest]
    fn empty_composition_is_identity() {
        assert_eq!(compose([]).call(&args!["same"]), Ok(Value::from("same")));
    }

    #[rstest]
    fn composite_takes_innermost_signature() {
        let negate = Function::new("negate", Signature::new(1), |arguments| {
            Ok(Value::Integer(-arguments.integer(0)?))
        });
        let composed = compose([negate, subtract()]);
        assert_eq!(composed.arity(), 2);
        assert_eq!(composed.name(), "subtract | negate");
        assert_eq!(composed.call(&args![10, 4]), Ok(Value::Integer(-6)));
    }
}
