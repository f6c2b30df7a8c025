//! Shared helpers: the identity function and truthiness.
//!
//! - [`identity`]: Returns its argument unchanged
//! - [`Truthy`]: The notion of "truthy" used when a predicate is omitted

/// Returns the value unchanged.
///
/// Mapping a sequence through `identity` yields the sequence itself:
/// `map(s, |v, _, _| identity(*v)) == s`.
///
/// # Examples
///
/// ```
/// use underbar::collection::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// assert_eq!(identity(vec![1, 2, 3]), vec![1, 2, 3]);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Values that can be tested for truthiness.
///
/// Used by [`every_truthy`](super::every_truthy) and
/// [`some_truthy`](super::some_truthy), the predicate-less forms of
/// [`every`](super::every) and [`some`](super::some).
///
/// | type            | truthy when                        |
/// |-----------------|------------------------------------|
/// | `bool`          | `true`                             |
/// | integers        | non-zero                           |
/// | floats          | non-zero and not NaN               |
/// | `str`, `String` | non-empty                          |
/// | `Option<T>`     | `Some` holding a truthy value      |
/// | `()`            | never                              |
///
/// # Examples
///
/// ```
/// use underbar::collection::Truthy;
///
/// assert!(1_i32.is_truthy());
/// assert!(!0_u8.is_truthy());
/// assert!(!"".is_truthy());
/// assert!(Some("x").is_truthy());
/// assert!(!None::<i32>.is_truthy());
/// assert!(!f64::NAN.is_truthy());
/// ```
pub trait Truthy {
    /// Returns `true` when the value counts as truthy.
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for () {
    #[inline]
    fn is_truthy(&self) -> bool {
        false
    }
}

macro_rules! impl_truthy_for_integers {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Truthy for $integer {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_for_integers!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

macro_rules! impl_truthy_for_floats {
    ($($float:ty),* $(,)?) => {
        $(
            impl Truthy for $float {
                #[inline]
                fn is_truthy(&self) -> bool {
                    !self.is_nan() && *self != 0.0
                }
            }
        )*
    };
}

impl_truthy_for_floats!(f32, f64);

impl Truthy for str {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_identity_moves_owned_value_without_copying() {
        let text = String::from("owned");
        let buffer = text.as_ptr();
        let returned = identity(text);
        assert_eq!(returned.as_ptr(), buffer);
        assert_eq!(returned, "owned");
    }

    #[rstest]
    #[case(0, false)]
    #[case(1, true)]
    #[case(-7, true)]
    fn test_integer_truthiness(#[case] value: i32, #[case] expected: bool) {
        assert_eq!(value.is_truthy(), expected);
    }

    #[rstest]
    #[case(0.0, false)]
    #[case(-0.0, false)]
    #[case(f64::NAN, false)]
    #[case(0.5, true)]
    fn test_float_truthiness(#[case] value: f64, #[case] expected: bool) {
        assert_eq!(value.is_truthy(), expected);
    }

    #[rstest]
    fn test_string_truthiness() {
        assert!(!String::new().is_truthy());
        assert!("text".to_string().is_truthy());
        assert!(!"".is_truthy());
    }

    #[rstest]
    fn test_option_truthiness_follows_payload() {
        assert!(!Some(0_i32).is_truthy());
        assert!(Some(3_i32).is_truthy());
        assert!(!None::<bool>.is_truthy());
    }

    #[rstest]
    fn test_unit_is_falsy() {
        assert!(!().is_truthy());
    }
}
