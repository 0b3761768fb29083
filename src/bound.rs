//! The key domain of an `IntervalMap`.
//!
//! An `IntervalMap` is total: every key between `lowest()` and `highest()` maps to a value.
//! The map keeps an entry at `lowest()` for its whole lifetime, so the key type must be able
//! to name its smallest value.

/// A totally ordered key type with a smallest and a largest value.
///
/// `lowest()` must compare less than or equal to every other value of the type, and
/// `highest()` greater than or equal to every other value.
///
/// # Example
/// ```rust
/// use rb_step_map::Bounded;
///
/// #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
/// struct Port(u16);
///
/// impl Bounded for Port {
///     fn lowest() -> Self {
///         Port(0)
///     }
///     fn highest() -> Self {
///         Port(u16::MAX)
///     }
/// }
///
/// assert!(Port::lowest() < Port(80));
/// ```
pub trait Bounded: Ord {
    /// The smallest value of the domain.
    fn lowest() -> Self;
    /// The largest value of the domain.
    fn highest() -> Self;
}

macro_rules! impl_bounded {
    ($($t:ty),*) => {
        $(
            impl Bounded for $t {
                #[inline(always)]
                fn lowest() -> Self {
                    <$t>::MIN
                }
                #[inline(always)]
                fn highest() -> Self {
                    <$t>::MAX
                }
            }
        )*
    };
}

impl_bounded!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char);

impl Bounded for bool {
    #[inline(always)]
    fn lowest() -> Self {
        false
    }
    #[inline(always)]
    fn highest() -> Self {
        true
    }
}

impl Bounded for () {
    #[inline(always)]
    fn lowest() -> Self {}
    #[inline(always)]
    fn highest() -> Self {}
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bounds_enclose_the_domain() {
        assert_eq!(i32::lowest(), i32::MIN);
        assert_eq!(u8::highest(), 255);
        assert_eq!(char::lowest(), '\0');
        assert_eq!(char::highest(), char::MAX);
        assert!(bool::lowest() < bool::highest());
    }
}
