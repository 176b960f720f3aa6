//! The `compose!` macro.

/// Composes functions from right to left.
///
/// `compose!(f, g, h)(x)` is `f(g(h(x)))`: the rightmost function runs
/// first. `compose!()` is the identity function and `compose!(f)` is `f`.
///
/// Every function must implement [`Fn`], and each output type must match the
/// input of the function to its left.
///
/// # Examples
///
/// ```rust
/// use moliath::compose;
///
/// fn add_one(value: i32) -> i32 { value + 1 }
/// fn double(value: i32) -> i32 { value * 2 }
/// fn square(value: i32) -> i32 { value * value }
///
/// assert_eq!(compose!(add_one, double)(5), 11);
/// assert_eq!(compose!(add_one, double, square)(3), 19);
/// assert_eq!(compose!()(10), 10);
/// ```
///
/// Types flow through the chain:
///
/// ```rust
/// use moliath::compose;
///
/// let digits = compose!(|text: String| text.len(), |value: u64| value.to_string());
/// assert_eq!(digits(12345), 5);
/// ```
#[macro_export]
macro_rules! compose {
    () => {
        |input| input
    };

    ($function:expr $(,)?) => {
        $function
    };

    ($outer_function:expr, $inner_function:expr $(,)?) => {{
        let outer = $outer_function;
        let inner = $inner_function;
        move |input| outer(inner(input))
    }};

    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner_composed = $crate::compose!($($remaining_functions),+);
        move |input| outer(inner_composed(input))
    }};
}

#[cfg(test)]
mod tests {
    use crate::compose::identity;
    use rstest::rstest;

    fn add_one(value: i32) -> i32 {
        value + 1
    }

    fn double(value: i32) -> i32 {
        value * 2
    }

    fn subtract_three(value: i32) -> i32 {
        value - 3
    }

    #[rstest]
    fn empty_composition_is_identity() {
        let composed = compose!();
        assert_eq!(composed(7), 7);
    }

    #[rstest]
    fn single_function_is_returned_unchanged() {
        assert_eq!(compose!(double)(5), 10);
    }

    #[rstest]
    fn rightmost_function_runs_first() {
        assert_eq!(compose!(add_one, double)(5), 11);
        assert_eq!(compose!(double, add_one)(5), 12);
    }

    #[rstest]
    #[case(0)]
    #[case(10)]
    #[case(-4)]
    fn composition_is_associative(#[case] input: i32) {
        let left = compose!(add_one, compose!(double, subtract_three));
        let right = compose!(compose!(add_one, double), subtract_three);
        assert_eq!(left(input), right(input));
    }

    #[rstest]
    fn identity_is_neutral_on_both_sides() {
        assert_eq!(compose!(identity, double)(4), double(4));
        assert_eq!(compose!(double, identity)(4), double(4));
    }

    #[rstest]
    fn composed_closure_is_reusable() {
        let composed = compose!(add_one, double);
        assert_eq!((composed(1), composed(2)), (3, 5));
    }
}
