//! The curry macros.
//!
//! The function and the arguments applied so far are shared through
//! [`Rc`](std::rc::Rc), so every partial application implements `Fn` and can
//! be called any number of times. Arguments other than the last must be
//! `Clone`.

/// Converts a two-argument function into curried form.
///
/// `curry2!(f)(a)(b)` is `f(a, b)`.
///
/// # Examples
///
/// ```rust
/// use moliath::curry2;
///
/// fn multiply(first: i32, second: i32) -> i32 { first * second }
///
/// let curried = curry2!(multiply);
/// let double = curried(2);
/// assert_eq!(double(5), 10);
/// assert_eq!(curried(3)(5), 15);
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            let first = ::std::rc::Rc::new(first);
            move |second| {
                function(
                    ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&first)),
                    second,
                )
            }
        }
    }};
}

/// Converts a three-argument function into curried form.
///
/// `curry3!(f)(a)(b)(c)` is `f(a, b, c)`.
///
/// # Examples
///
/// ```rust
/// use moliath::curry3;
///
/// fn clamp(low: i32, high: i32, value: i32) -> i32 { value.clamp(low, high) }
///
/// let percent = curry3!(clamp)(0)(100);
/// assert_eq!(percent(140), 100);
/// assert_eq!(percent(-5), 0);
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            let first = ::std::rc::Rc::new(first);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let first = ::std::rc::Rc::clone(&first);
                let second = ::std::rc::Rc::new(second);
                move |third| {
                    function(
                        ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&first)),
                        ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&second)),
                        third,
                    )
                }
            }
        }
    }};
}
