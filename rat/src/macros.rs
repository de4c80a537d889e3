#[macro_export]
/// A macro to construct a [`Rational`] from integer literals.
/// `rat!(n)` is the integer `n` and `rat!(n, d)` is the reduced fraction `n / d`.
/// The backing integer type is inferred as usual for integer literals.
///
/// [`Rational`]: crate::Rational
///
/// # Examples:
/// ```
/// use rat::{rat, Rat};
///
/// assert_eq!(rat!(2, 4), Rat::new(1, 2));
/// assert_eq!(rat!(3) + rat!(1, 2), Rat::new(7, 2));
/// assert!(rat!(1, 0i64).is_nan());
/// ```
macro_rules! rat {
    ($n:expr) => {
        $crate::Rational::from_integer($n)
    };
    ($n:expr, $d:expr) => {
        $crate::Rational::new($n, $d)
    };
}
