use num_traits::{AsPrimitive, Num, NumCast};
use std::fmt::{Debug, Display};

/// A primitive numeric type usable as a vector component.
///
/// Implemented for every primitive integer and float type. Conversions between scalars use `as`
/// semantics throughout ([`AsPrimitive`]): float to integer truncates toward zero, nothing is
/// rounded or checked. See [`try_convert()`](crate::util::geometry::try_convert) for the checked
/// variant.
pub trait Scalar:
    Num
    + NumCast
    + Copy
    + PartialOrd
    + Default
    + Debug
    + Display
    + AsPrimitive<Self>
    + AsPrimitive<f32>
    + AsPrimitive<f64>
    + Send
    + Sync
    + 'static
{
    /// Narrows from `f64`, the working precision of the geometry library, with `as` semantics.
    fn from_f64(value: f64) -> Self;
    /// Absolute value. The identity for unsigned types.
    fn absolute(self) -> Self;
    /// Round half away from zero. The identity for integer types.
    fn rounded(self) -> Self;
    /// Whether the value is neither infinite nor NaN. Always true for integer types.
    fn is_finite_value(self) -> bool;
}

/// Converts between scalars with `as` semantics.
#[inline]
pub fn cast<T: Copy + 'static, S: AsPrimitive<T>>(value: S) -> T {
    value.as_()
}

macro_rules! impl_scalar_float {
    ($($t:ty),*) => {
        $(
            #[allow(clippy::cast_possible_truncation, clippy::unnecessary_cast)]
            impl Scalar for $t {
                fn from_f64(value: f64) -> Self {
                    value as $t
                }
                fn absolute(self) -> Self {
                    self.abs()
                }
                fn rounded(self) -> Self {
                    self.round()
                }
                fn is_finite_value(self) -> bool {
                    self.is_finite()
                }
            }
        )*
    };
}

macro_rules! impl_scalar_signed {
    ($($t:ty),*) => {
        $(
            #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
            impl Scalar for $t {
                fn from_f64(value: f64) -> Self {
                    value as $t
                }
                fn absolute(self) -> Self {
                    self.abs()
                }
                fn rounded(self) -> Self {
                    self
                }
                fn is_finite_value(self) -> bool {
                    true
                }
            }
        )*
    };
}

macro_rules! impl_scalar_unsigned {
    ($($t:ty),*) => {
        $(
            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_precision_loss,
                clippy::cast_sign_loss
            )]
            impl Scalar for $t {
                fn from_f64(value: f64) -> Self {
                    value as $t
                }
                fn absolute(self) -> Self {
                    self
                }
                fn rounded(self) -> Self {
                    self
                }
                fn is_finite_value(self) -> bool {
                    true
                }
            }
        )*
    };
}

impl_scalar_float!(f32, f64);
impl_scalar_signed!(i8, i16, i32, i64, i128, isize);
impl_scalar_unsigned!(u8, u16, u32, u64, u128, usize);
