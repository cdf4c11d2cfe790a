#[allow(unused_imports)]
use crate::core::prelude::*;

use crate::util::geometry;
use crate::util::scalar::cast;
use num_traits::AsPrimitive;
use std::cmp::Ordering;
use std::iter::Sum;
use std::{
    fmt,
    fmt::Formatter,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// A 2D vector with components of any primitive numeric type.
///
/// [`Vec2`] interoperates with every other [`Vector2`]: the arithmetic operators accept any of
/// them on the right-hand side, and [`from_vector()`](Vec2::from_vector) /
/// [`into_vector()`](Vec2::into_vector) convert in either direction. The right-hand side is
/// always coerced to `N` with `as` semantics.
///
/// # Examples
///
/// ```
/// use vec2d::Vec2f;
///
/// // Components may be given as different numeric types.
/// let v1 = Vec2f::new(3, 4.0);
/// let v2 = Vec2f::new(1.0, 2.0);
///
/// assert_eq!(v1 + v2, Vec2f::new(4, 6));
/// assert_eq!(v1 + (1.0, 2.0), Vec2f::new(4, 6));
/// assert_eq!(v1.len(), 5.0);
/// ```
///
/// # Equality
/// Equality is exact and component-wise, with no tolerance; use [`almost_eq()`](Vec2::almost_eq)
/// for floating point comparisons. Integer vectors are also [`Eq`] and [`Hash`].
#[derive(Debug, Copy, Clone, Hash)]
#[allow(clippy::derived_hash_with_manual_eq)]
pub struct Vec2<N = VFloat> {
    pub x: N,
    pub y: N,
}

/// The default floating point vector; see [`VFloat`].
pub type Vec2f = Vec2<VFloat>;
pub type Vec2i = Vec2<i32>;
pub type Vec2u = Vec2<u32>;

impl<N: Scalar> Vec2<N> {
    /// Creates a vector from two components, each coerced to `N` independently.
    ///
    /// ```
    /// use vec2d::Vec2i;
    /// assert_eq!(Vec2i::new(2.9, -1_i64), Vec2i { x: 2, y: -1 });
    /// ```
    #[must_use]
    pub fn new<X: AsPrimitive<N>, Y: AsPrimitive<N>>(x: X, y: Y) -> Self {
        Self {
            x: x.as_(),
            y: y.as_(),
        }
    }
    #[must_use]
    pub fn zero() -> Self {
        Self {
            x: N::zero(),
            y: N::zero(),
        }
    }
    #[must_use]
    pub fn one() -> Self {
        Self {
            x: N::one(),
            y: N::one(),
        }
    }
    #[must_use]
    pub fn splat(v: N) -> Self {
        Self { x: v, y: v }
    }

    /// Copies the components of any [`Vector2`], coercing them to `N`.
    #[must_use]
    pub fn from_vector<V: Vector2>(vector: V) -> Self
    where
        V::Scalar: AsPrimitive<N>,
    {
        geometry::convert(vector)
    }

    /// Converts to any other [`Vector2`]. Float to integer truncates toward zero.
    ///
    /// ```
    /// use vec2d::Vec2f;
    /// let arr: [i32; 2] = Vec2f::new(1.7, -1.7).into_vector();
    /// assert_eq!(arr, [1, -1]);
    /// ```
    #[must_use]
    pub fn into_vector<T: Vector2>(self) -> T
    where
        N: AsPrimitive<T::Scalar>,
    {
        geometry::convert(self)
    }

    /// Like [`into_vector()`](Vec2::into_vector), but fails instead of truncating out-of-range
    /// or NaN components.
    pub fn try_into_vector<T: Vector2>(self) -> Result<T> {
        geometry::try_convert(self)
    }

    /// Returns the squared length of the vector.
    ///
    /// Use this instead of [`len`](Vec2::len) when comparing lengths to avoid the square root.
    #[must_use]
    pub fn len_squared(&self) -> VFloat {
        geometry::dot_product(*self, *self)
    }

    /// Returns the Euclidean length of the vector.
    #[must_use]
    pub fn len(&self) -> VFloat {
        geometry::norm(*self)
    }

    /// Returns this vector divided by its own length.
    ///
    /// No check is made for zero length; the result is then NaN for floating point `N`.
    #[must_use]
    pub fn unit_vector(&self) -> Self {
        geometry::unit_vector(*self)
    }

    /// Rounds each component to the nearest integer, half away from zero.
    #[must_use]
    pub fn round(&self) -> Self {
        geometry::round(*self)
    }

    /// Returns a new vector with the absolute values of each component.
    #[must_use]
    pub fn abs(&self) -> Self {
        geometry::absolute(*self)
    }

    /// `|x * y|`, the area of the axis-aligned rectangle spanned by the vector.
    #[must_use]
    pub fn rectangle_area(&self) -> VFloat {
        geometry::rectangle_area(*self)
    }

    /// The signed angle from the positive x-axis, in radians, in the range (-π, π].
    #[must_use]
    pub fn angle(&self) -> VFloat {
        geometry::vector_angle_radians(*self)
    }

    #[must_use]
    pub fn dot<V: Vector2>(&self, other: V) -> VFloat {
        geometry::dot_product(*self, other)
    }
    #[must_use]
    pub fn cross<V: Vector2>(&self, other: V) -> VFloat {
        geometry::cross_product(*self, other)
    }

    /// Multiplies both components by `factor` in place.
    pub fn scale(&mut self, factor: VFloat) {
        *self = self.scaled(factor);
    }
    #[must_use]
    pub fn scaled(&self, factor: VFloat) -> Self {
        let factor = cast::<f64, _>(factor);
        Self {
            x: N::from_f64(cast::<f64, _>(self.x) * factor),
            y: N::from_f64(cast::<f64, _>(self.y) * factor),
        }
    }

    /// Rotates the vector counter-clockwise (for a y-up coordinate system) by `radians`, in
    /// place.
    ///
    /// ```
    /// use vec2d::Vec2f;
    /// let mut v = Vec2f::new(1, 0);
    /// v.rotate_radians(std::f64::consts::FRAC_PI_2 as vec2d::VFloat);
    /// assert!(v.almost_eq(Vec2f::new(0, 1)));
    /// ```
    pub fn rotate_radians(&mut self, radians: VFloat) {
        *self = self.rotated(radians);
    }
    #[must_use]
    pub fn rotated(&self, radians: VFloat) -> Self {
        geometry::rotate_vector_radians(*self, radians)
    }

    /// Multiplies component-wise by `other`, in place.
    pub fn multiply_components<V: Vector2>(&mut self, other: V)
    where
        V::Scalar: AsPrimitive<N>,
    {
        *self = geometry::multiply_components(*self, other);
    }

    /// Checks whether the distance to `rhs` is less than [`EPSILON`].
    pub fn almost_eq<V: Vector2>(&self, rhs: V) -> bool {
        geometry::distance(*self, rhs) < EPSILON
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite_value() && self.y.is_finite_value()
    }

    /// Compares two vectors based on their squared length.
    ///
    /// If either length is NaN, [`partial_cmp()`](f32::partial_cmp) fails; the comparison then
    /// falls back to [`total_cmp()`](f32::total_cmp) and logs a warning.
    #[must_use]
    pub fn cmp_by_length(&self, other: &Vec2<N>) -> Ordering {
        let self_len = self.len_squared();
        let other_len = other.len_squared();
        self_len.partial_cmp(&other_len).unwrap_or_else(|| {
            warn!(
                "cmp_by_length(): partial_cmp() failed: {} vs. {}",
                self, other
            );
            self_len.total_cmp(&other_len)
        })
    }
}

impl<N: Scalar> Vector2 for Vec2<N> {
    type Scalar = N;

    fn x(&self) -> N {
        self.x
    }
    fn y(&self) -> N {
        self.y
    }
    fn from_xy(x: N, y: N) -> Self {
        Self { x, y }
    }
}

impl<N: Scalar> Default for Vec2<N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<N: Scalar> From<[N; 2]> for Vec2<N> {
    fn from(value: [N; 2]) -> Self {
        Vec2 {
            x: value[0],
            y: value[1],
        }
    }
}
impl<N: Scalar> From<(N, N)> for Vec2<N> {
    fn from(value: (N, N)) -> Self {
        Vec2 {
            x: value.0,
            y: value.1,
        }
    }
}
impl<N: Scalar> From<Vec2<N>> for [N; 2] {
    fn from(value: Vec2<N>) -> Self {
        [value.x, value.y]
    }
}
impl<N: Scalar> From<Vec2<N>> for (N, N) {
    fn from(value: Vec2<N>) -> Self {
        (value.x, value.y)
    }
}

impl<N: Scalar> fmt::Display for Vec2<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(p) = f.precision() {
            write!(f, "({0:.2$}, {1:.2$})", self.x, self.y, p)
        } else {
            write!(f, "({}, {})", self.x, self.y)
        }
    }
}

impl<N: Scalar, V: Vector2> PartialEq<V> for Vec2<N>
where
    V::Scalar: AsPrimitive<N>,
{
    fn eq(&self, other: &V) -> bool {
        self.x == cast::<N, _>(other.x()) && self.y == cast::<N, _>(other.y())
    }
}
impl<N: Scalar + Eq> Eq for Vec2<N> {}

impl<S: Scalar, N: Scalar> PartialEq<Vec2<N>> for [S; 2]
where
    N: AsPrimitive<S>,
{
    fn eq(&self, other: &Vec2<N>) -> bool {
        self[0] == cast::<S, _>(other.x) && self[1] == cast::<S, _>(other.y)
    }
}
impl<S: Scalar, N: Scalar> PartialEq<Vec2<N>> for (S, S)
where
    N: AsPrimitive<S>,
{
    fn eq(&self, other: &Vec2<N>) -> bool {
        self.0 == cast::<S, _>(other.x) && self.1 == cast::<S, _>(other.y)
    }
}

impl<N: Scalar, V: Vector2> Add<V> for Vec2<N>
where
    V::Scalar: AsPrimitive<N>,
{
    type Output = Vec2<N>;

    fn add(self, rhs: V) -> Self::Output {
        geometry::add(self, rhs)
    }
}
impl<N: Scalar, V: Vector2> AddAssign<V> for Vec2<N>
where
    V::Scalar: AsPrimitive<N>,
{
    fn add_assign(&mut self, rhs: V) {
        *self = *self + rhs;
    }
}

impl<N: Scalar, V: Vector2> Sub<V> for Vec2<N>
where
    V::Scalar: AsPrimitive<N>,
{
    type Output = Vec2<N>;

    fn sub(self, rhs: V) -> Self::Output {
        geometry::subtract(self, rhs)
    }
}
impl<N: Scalar, V: Vector2> SubAssign<V> for Vec2<N>
where
    V::Scalar: AsPrimitive<N>,
{
    fn sub_assign(&mut self, rhs: V) {
        *self = *self - rhs;
    }
}

/// Component-wise division, `(self.x / rhs.x, self.y / rhs.y)`.
impl<N: Scalar, V: Vector2> Div<V> for Vec2<N>
where
    V::Scalar: AsPrimitive<N>,
{
    type Output = Vec2<N>;

    fn div(self, rhs: V) -> Self::Output {
        Vec2 {
            x: self.x / cast::<N, _>(rhs.x()),
            y: self.y / cast::<N, _>(rhs.y()),
        }
    }
}
impl<N: Scalar, V: Vector2> DivAssign<V> for Vec2<N>
where
    V::Scalar: AsPrimitive<N>,
{
    fn div_assign(&mut self, rhs: V) {
        *self = *self / rhs;
    }
}

impl<N: Scalar> Sum<Vec2<N>> for Vec2<N> {
    fn sum<I: Iterator<Item = Vec2<N>>>(iter: I) -> Self {
        iter.fold(Vec2::zero(), Vec2::add)
    }
}

impl<N: Scalar + Neg<Output = N>> Neg for Vec2<N> {
    type Output = Vec2<N>;

    fn neg(self) -> Self::Output {
        Vec2 {
            x: -self.x,
            y: -self.y,
        }
    }
}
impl<N: Scalar + Neg<Output = N>> Neg for &Vec2<N> {
    type Output = Vec2<N>;

    fn neg(self) -> Self::Output {
        -*self
    }
}

// Float scalars: promote the components to f64, apply, then narrow back to `N`. Exact for f32.
macro_rules! impl_float_scalar_ops {
    ($($t:ty),*) => {
        $(
            impl<N: Scalar> Mul<$t> for Vec2<N>
            where
                f64: AsPrimitive<N>,
            {
                type Output = Vec2<N>;

                fn mul(self, rhs: $t) -> Self::Output {
                    let rhs = cast::<f64, _>(rhs);
                    Vec2 {
                        x: cast(cast::<f64, _>(self.x) * rhs),
                        y: cast(cast::<f64, _>(self.y) * rhs),
                    }
                }
            }
            impl<N: Scalar> Mul<Vec2<N>> for $t
            where
                f64: AsPrimitive<N>,
            {
                type Output = Vec2<N>;

                fn mul(self, rhs: Vec2<N>) -> Self::Output {
                    rhs * self
                }
            }
            impl<N: Scalar> MulAssign<$t> for Vec2<N>
            where
                f64: AsPrimitive<N>,
            {
                fn mul_assign(&mut self, rhs: $t) {
                    *self = *self * rhs;
                }
            }
            impl<N: Scalar> Div<$t> for Vec2<N>
            where
                f64: AsPrimitive<N>,
            {
                type Output = Vec2<N>;

                fn div(self, rhs: $t) -> Self::Output {
                    let rhs = cast::<f64, _>(rhs);
                    Vec2 {
                        x: cast(cast::<f64, _>(self.x) / rhs),
                        y: cast(cast::<f64, _>(self.y) / rhs),
                    }
                }
            }
            impl<N: Scalar> DivAssign<$t> for Vec2<N>
            where
                f64: AsPrimitive<N>,
            {
                fn div_assign(&mut self, rhs: $t) {
                    *self = *self / rhs;
                }
            }
        )*
    };
}

// Integer scalars are coerced to `N` first.
macro_rules! impl_int_scalar_ops {
    ($($t:ty),*) => {
        $(
            impl<N: Scalar> Mul<$t> for Vec2<N>
            where
                $t: AsPrimitive<N>,
            {
                type Output = Vec2<N>;

                fn mul(self, rhs: $t) -> Self::Output {
                    let rhs = cast::<N, _>(rhs);
                    Vec2 {
                        x: self.x * rhs,
                        y: self.y * rhs,
                    }
                }
            }
            impl<N: Scalar> Mul<Vec2<N>> for $t
            where
                $t: AsPrimitive<N>,
            {
                type Output = Vec2<N>;

                fn mul(self, rhs: Vec2<N>) -> Self::Output {
                    rhs * self
                }
            }
            impl<N: Scalar> MulAssign<$t> for Vec2<N>
            where
                $t: AsPrimitive<N>,
            {
                fn mul_assign(&mut self, rhs: $t) {
                    *self = *self * rhs;
                }
            }
            impl<N: Scalar> Div<$t> for Vec2<N>
            where
                $t: AsPrimitive<N>,
            {
                type Output = Vec2<N>;

                fn div(self, rhs: $t) -> Self::Output {
                    let rhs = cast::<N, _>(rhs);
                    Vec2 {
                        x: self.x / rhs,
                        y: self.y / rhs,
                    }
                }
            }
            impl<N: Scalar> DivAssign<$t> for Vec2<N>
            where
                $t: AsPrimitive<N>,
            {
                fn div_assign(&mut self, rhs: $t) {
                    *self = *self / rhs;
                }
            }
        )*
    };
}

impl_float_scalar_ops!(f32, f64);
impl_int_scalar_ops!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
