//! Free functions over any [`Vector2`].
//!
//! Arguments may be of different concrete types from each other (e.g. a [`Vec2`], a tuple and a
//! `#[derive(Vector2)]` struct). Scalar results are [`VFloat`]; vector results take the type of
//! the first vector argument. Intermediate arithmetic is done in `f64` whatever `VFloat` is, so
//! `f64` and wide integer components survive operations like `lerp(a, b, 0.0)` unchanged.
//! Nothing here checks for degenerate input: zero-length vectors give
//! NaN or infinity for floating point types and panic on integer division as usual.
//!
//! ```
//! use vec2d::geometry;
//!
//! let a = (1.0_f32, 2.0_f32);
//! let b = [3_i32, 4];
//! assert_eq!(geometry::add(a, b), (4.0, 6.0));
//! assert_eq!(geometry::dot_product(a, b), 11.0);
//! ```
use crate::core::config::{VFloat, EPSILON};
use crate::util::linalg::Vec2;
use crate::util::scalar::{cast, Scalar};
use crate::util::vector::Vector2;
use anyhow::{anyhow, Result};
use num_traits::{AsPrimitive, NumCast};

/// Reinterprets `source` as a `T`, coercing each component with `as` semantics.
///
/// ```
/// use vec2d::{geometry, Vec2};
/// let v: Vec2<u8> = geometry::convert((3.9_f64, 250.0_f64));
/// assert_eq!(v, Vec2::<u8>::new(3, 250));
/// ```
#[must_use]
pub fn convert<T: Vector2, V: Vector2>(source: V) -> T
where
    V::Scalar: AsPrimitive<T::Scalar>,
{
    T::from_xy(cast(source.x()), cast(source.y()))
}

/// Checked version of [`convert()`]: fails if either component is NaN or out of range for the
/// target scalar. Fractional parts are still truncated.
pub fn try_convert<T: Vector2, V: Vector2>(source: V) -> Result<T> {
    let component = |value: V::Scalar, name: &str| {
        <T::Scalar as NumCast>::from(value).ok_or_else(|| {
            anyhow!(
                "{name} = {value} does not fit in {}",
                std::any::type_name::<T::Scalar>()
            )
        })
    };
    Ok(T::from_xy(
        component(source.x(), "x")?,
        component(source.y(), "y")?,
    ))
}

fn promote<V: Vector2>(vector: V) -> Vec2<f64> {
    Vec2 {
        x: cast(vector.x()),
        y: cast(vector.y()),
    }
}

fn narrow<V: Vector2>(x: f64, y: f64) -> V {
    V::from_xy(
        <V::Scalar as Scalar>::from_f64(x),
        <V::Scalar as Scalar>::from_f64(y),
    )
}

fn dot_wide(a: Vec2<f64>, b: Vec2<f64>) -> f64 {
    a.x * b.x + a.y * b.y
}

fn norm_wide(v: Vec2<f64>) -> f64 {
    dot_wide(v, v).sqrt()
}

/// The Euclidean length of `vector`.
#[must_use]
pub fn norm<V: Vector2>(vector: V) -> VFloat {
    norm_wide(promote(vector)) as VFloat
}

/// `vector / norm(vector)`, narrowed back to the scalar of `V`.
#[must_use]
pub fn unit_vector<V: Vector2>(vector: V) -> V {
    let v = promote(vector);
    let len = norm_wide(v);
    narrow(v.x / len, v.y / len)
}

#[must_use]
pub fn round<V: Vector2>(vector: V) -> V {
    V::from_xy(vector.x().rounded(), vector.y().rounded())
}

#[must_use]
pub fn absolute<V: Vector2>(vector: V) -> V {
    V::from_xy(vector.x().absolute(), vector.y().absolute())
}

#[must_use]
pub fn add<A: Vector2, B: Vector2>(a: A, b: B) -> A
where
    B::Scalar: AsPrimitive<A::Scalar>,
{
    A::from_xy(a.x() + cast(b.x()), a.y() + cast(b.y()))
}

#[must_use]
pub fn subtract<A: Vector2, B: Vector2>(a: A, b: B) -> A
where
    B::Scalar: AsPrimitive<A::Scalar>,
{
    A::from_xy(a.x() - cast(b.x()), a.y() - cast(b.y()))
}

#[must_use]
pub fn dot_product<A: Vector2, B: Vector2>(a: A, b: B) -> VFloat {
    dot_wide(promote(a), promote(b)) as VFloat
}

/// The z-component of the cross product of `a` and `b` embedded in the xy-plane. Positive when
/// `b` is counter-clockwise from `a`.
#[must_use]
pub fn cross_product<A: Vector2, B: Vector2>(a: A, b: B) -> VFloat {
    let (a, b) = (promote(a), promote(b));
    (a.x * b.y - a.y * b.x) as VFloat
}

/// Component-wise product, `(a.x * b.x, a.y * b.y)`.
#[must_use]
pub fn multiply_components<A: Vector2, B: Vector2>(a: A, b: B) -> A
where
    B::Scalar: AsPrimitive<A::Scalar>,
{
    A::from_xy(a.x() * cast(b.x()), a.y() * cast(b.y()))
}

/// Area of the axis-aligned rectangle with `vector` as its diagonal, `|x * y|`.
#[must_use]
pub fn rectangle_area<V: Vector2>(vector: V) -> VFloat {
    let v = promote(vector);
    (v.x * v.y).abs() as VFloat
}

/// Area of the parallelogram spanned by `a` and `b`.
#[must_use]
pub fn rhombus_area<A: Vector2, B: Vector2>(a: A, b: B) -> VFloat {
    signed_area(a, b).abs()
}

/// Area of the triangle between `a` and `b`.
#[must_use]
pub fn triangle_area<A: Vector2, B: Vector2>(a: A, b: B) -> VFloat {
    rhombus_area(a, b) / 2.0
}

/// Same as [`cross_product()`]; positive and negative areas are used e.g. for polygon centroids.
#[must_use]
pub fn signed_area<A: Vector2, B: Vector2>(a: A, b: B) -> VFloat {
    cross_product(a, b)
}

/// Angle from the positive x-axis in radians, in (-π, π].
#[must_use]
pub fn vector_angle_radians<V: Vector2>(vector: V) -> VFloat {
    let v = promote(vector);
    v.y.atan2(v.x) as VFloat
}

/// Rotates `vector` by `radians` using the standard rotation matrix.
#[must_use]
pub fn rotate_vector_radians<V: Vector2>(vector: V, radians: VFloat) -> V {
    let (sin, cos) = cast::<f64, _>(radians).sin_cos();
    let v = promote(vector);
    narrow(cos * v.x - sin * v.y, sin * v.x + cos * v.y)
}

/// Unsigned angle between `a` and `b` in radians, in [0, π]. NaN if either has zero length.
#[must_use]
pub fn angle_between_vectors<A: Vector2, B: Vector2>(a: A, b: B) -> VFloat {
    let (a, b) = (promote(a), promote(b));
    // Rounding can push the cosine just outside [-1, 1] for near-parallel vectors.
    (dot_wide(a, b) / (norm_wide(a) * norm_wide(b)))
        .clamp(-1.0, 1.0)
        .acos() as VFloat
}

/// Linear interpolation, `start * (1 - alpha) + end * alpha`. `alpha` is not clamped, so values
/// outside [0, 1] extrapolate.
///
/// ```
/// use vec2d::{geometry, Vec2f};
/// let start = Vec2f::new(0, 0);
/// let end = (10.0_f32, 20.0_f32);
/// assert_eq!(geometry::lerp(start, end, 0.5), Vec2f::new(5, 10));
/// assert_eq!(geometry::lerp(start, end, 2.0), Vec2f::new(20, 40));
/// ```
#[must_use]
pub fn lerp<A: Vector2, B: Vector2>(start: A, end: B, alpha: VFloat) -> A {
    let (start, end) = (promote(start), promote(end));
    let alpha = cast::<f64, _>(alpha);
    narrow(
        start.x * (1.0 - alpha) + end.x * alpha,
        start.y * (1.0 - alpha) + end.y * alpha,
    )
}

/// Reflects `vector` off a surface with the given `normal`, which must already have unit length.
/// Use [`reflect()`] otherwise.
#[must_use]
pub fn reflect_unit<A: Vector2, B: Vector2>(vector: A, normal: B) -> A {
    let (v, n) = (promote(vector), promote(normal));
    let d = dot_wide(v, n);
    narrow(v.x - n.x * 2.0 * d, v.y - n.y * 2.0 * d)
}

/// Reflects `vector` off a surface with the given `normal` of any non-zero length.
///
/// ```
/// use vec2d::{geometry, Vec2f};
/// let reflected = geometry::reflect(Vec2f::new(1, -1), (0, 5));
/// assert!(reflected.almost_eq(Vec2f::new(1, 1)));
/// ```
#[must_use]
pub fn reflect<A: Vector2, B: Vector2>(vector: A, normal: B) -> A {
    reflect_unit(vector, unit_vector(promote(normal)))
}

#[must_use]
pub fn distance_squared<A: Vector2, B: Vector2>(a: A, b: B) -> VFloat {
    let (a, b) = (promote(a), promote(b));
    let (dx, dy) = (a.x - b.x, a.y - b.y);
    (dx * dx + dy * dy) as VFloat
}

#[must_use]
pub fn distance<A: Vector2, B: Vector2>(a: A, b: B) -> VFloat {
    let (a, b) = (promote(a), promote(b));
    norm_wide(Vec2 {
        x: a.x - b.x,
        y: a.y - b.y,
    }) as VFloat
}

/// Whether `a` and `b` are within [`EPSILON`] of each other.
#[must_use]
pub fn almost_eq<A: Vector2, B: Vector2>(a: A, b: B) -> bool {
    distance(a, b) < EPSILON
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::util::linalg::{Vec2f, Vec2i};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[derive(Copy, Clone, Debug, PartialEq, Vector2)]
    struct Point {
        x: f32,
        y: f32,
    }

    #[derive(Copy, Clone, Debug, PartialEq, Vector2)]
    struct Cell {
        x: i64,
        y: i64,
    }

    fn random_vec(rng: &mut StdRng) -> Vec2f {
        Vec2f::new(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0))
    }

    fn random_nonzero_vec(rng: &mut StdRng) -> Vec2f {
        loop {
            let v = random_vec(rng);
            if v.len() > 1.0 {
                return v;
            }
        }
    }

    // ==================== Concrete scenarios ====================

    #[test]
    fn add_concrete() {
        assert_eq!(add(Vec2i::new(1, 2), Vec2i::new(3, 4)), Vec2i::new(4, 6));
        assert_eq!(
            add(Point { x: 1.0, y: 2.0 }, Cell { x: 3, y: 4 }),
            Point { x: 4.0, y: 6.0 }
        );
    }

    #[test]
    fn subtract_concrete() {
        assert_eq!(subtract((5_i32, 5_i32), [1.5_f32, 2.5]), (4, 3));
        assert_eq!(subtract(Cell { x: 1, y: 1 }, Cell { x: 2, y: 0 }), Cell { x: -1, y: 1 });
    }

    #[test]
    fn dot_product_concrete() {
        assert_eq!(dot_product((1, 0), (0, 1)), 0.0);
        assert_eq!(dot_product(Point { x: 2.0, y: 3.0 }, [4_u8, 5]), 23.0);
    }

    #[test]
    fn cross_product_and_areas() {
        let a = Vec2f::new(2, 0);
        let b = Cell { x: 0, y: 3 };
        assert_eq!(cross_product(a, b), 6.0);
        assert_eq!(cross_product(b, a), -6.0);
        assert_eq!(signed_area(b, a), -6.0);
        assert_eq!(rhombus_area(b, a), 6.0);
        assert_eq!(triangle_area(b, a), 3.0);
    }

    #[test]
    fn rectangle_area_concrete() {
        assert_eq!(rectangle_area((3, -4)), 12.0);
        assert_eq!(rectangle_area(Point { x: -2.0, y: -0.5 }), 1.0);
    }

    #[test]
    fn multiply_components_is_component_wise() {
        assert_eq!(
            multiply_components(Vec2f::new(2, 3), (4_i32, 5_i32)),
            Vec2f::new(8, 15)
        );
        assert_eq!(
            multiply_components(Cell { x: -2, y: 7 }, [3.9_f32, 2.0]),
            Cell { x: -6, y: 14 }
        );
    }

    #[test]
    fn round_and_absolute() {
        assert_eq!(round(Point { x: 1.5, y: -1.4 }), Point { x: 2.0, y: -1.0 });
        assert_eq!(absolute((-3_i8, 4_i8)), (3, 4));
        assert_eq!(absolute([7_u16, 0]), [7, 0]);
    }

    #[test]
    fn vector_angle_concrete() {
        assert_eq!(vector_angle_radians((1, 0)), 0.0);
        assert!((vector_angle_radians((0, 1)) - FRAC_PI_2 as VFloat).abs() < EPSILON);
        assert!((vector_angle_radians((1, 1)) - FRAC_PI_4 as VFloat).abs() < EPSILON);
        assert!((vector_angle_radians((-1, 0)) - PI as VFloat).abs() < EPSILON);
    }

    #[test]
    fn rotate_concrete() {
        let rotated = rotate_vector_radians(Vec2f::new(1, 0), FRAC_PI_2 as VFloat);
        assert!(rotated.almost_eq(Vec2f::new(0, 1)));
        let rotated = rotate_vector_radians(Point { x: 1.0, y: 0.0 }, PI as VFloat);
        assert!(almost_eq(rotated, (-1, 0)));
        // Integer vectors are truncated after rotating.
        assert_eq!(rotate_vector_radians(Vec2i::new(10, 0), FRAC_PI_4 as VFloat), Vec2i::new(7, 7));
    }

    #[test]
    fn angle_between_concrete() {
        assert!((angle_between_vectors((1, 0), (0, 5)) - FRAC_PI_2 as VFloat).abs() < EPSILON);
        assert!((angle_between_vectors((1, 0), (0, -5)) - FRAC_PI_2 as VFloat).abs() < EPSILON);
        assert!((angle_between_vectors((2, 0), (-1, 0)) - PI as VFloat).abs() < EPSILON);
        assert!(angle_between_vectors((0, 0), (1, 0)).is_nan());
    }

    #[test]
    fn lerp_extrapolates() {
        let start = Cell { x: 0, y: 10 };
        let end = Vec2f::new(10, 20);
        assert_eq!(lerp(start, end, 0.5), Cell { x: 5, y: 15 });
        assert_eq!(lerp(start, end, -1.0), Cell { x: -10, y: 0 });
    }

    #[test]
    fn reflect_concrete() {
        let v = Vec2f::new(1, 1);
        let reflected = reflect_unit(v, (0.0_f32, -1.0_f32));
        assert!(reflected.almost_eq(Vec2f::new(1, -1)));
        // Integer normals are normalised in floating point, not truncated to zero.
        let reflected = reflect(v, Cell { x: 0, y: -3 });
        assert!(reflected.almost_eq(Vec2f::new(1, -1)));
    }

    #[test]
    fn unit_vector_concrete() {
        assert!(almost_eq(unit_vector(Point { x: 3.0, y: 4.0 }), (0.6, 0.8)));
        assert_eq!(unit_vector(Vec2i::new(0, 9)), Vec2i::new(0, 1));
        let degenerate = unit_vector(Point { x: 0.0, y: 0.0 });
        assert!(degenerate.x.is_nan() && degenerate.y.is_nan());
    }

    #[test]
    fn distance_concrete() {
        assert_eq!(distance_squared((1, 1), Vec2f::new(4, 5)), 25.0);
        assert_eq!(distance((1, 1), Vec2f::new(4, 5)), 5.0);
    }

    #[test]
    fn convert_between_foreign_types() {
        let p = Point { x: 1.0, y: 2.0 };
        let v: Vec2f = convert(p);
        assert_eq!(v, p);
        assert_eq!(convert::<Point, _>(v), p);
        assert_eq!(convert::<Cell, _>(Point { x: -2.7, y: 2.7 }), Cell { x: -2, y: 2 });
        assert_eq!(convert::<[u8; 2], _>(Cell { x: 1, y: 255 }), [1, 255]);
    }

    #[test]
    fn try_convert_rejects_out_of_range() {
        assert_eq!(
            try_convert::<Cell, _>(Point { x: -2.7, y: 2.7 }).unwrap(),
            Cell { x: -2, y: 2 }
        );
        let err = try_convert::<[u8; 2], _>(Cell { x: 1, y: 256 }).unwrap_err();
        assert_eq!(err.to_string(), "y = 256 does not fit in u8");
        assert!(try_convert::<(u32, u32), _>((-1_i32, 0_i32)).is_err());
        assert!(try_convert::<Cell, _>(Point { x: f32::NAN, y: 0.0 }).is_err());
        assert!(try_convert::<Cell, _>(Point { x: f32::INFINITY, y: 0.0 }).is_err());
    }

    // ==================== Properties ====================

    #[test]
    fn add_commutes_and_subtract_anticommutes() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..200 {
            let a = Vec2i::new(rng.gen_range(-1000..1000), rng.gen_range(-1000..1000));
            let b = Vec2i::new(rng.gen_range(-1000..1000), rng.gen_range(-1000..1000));
            assert_eq!(add(a, b), add(b, a));
            assert_eq!(subtract(a, b), -subtract(b, a));

            let (a, b) = (random_vec(&mut rng), random_vec(&mut rng));
            assert_eq!(add(a, b), add(b, a));
            assert_eq!(subtract(a, b), -subtract(b, a));
        }
    }

    #[test]
    fn conversion_round_trips() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..200 {
            let f = Point {
                x: rng.gen_range(-1.0e6..1.0e6),
                y: rng.gen_range(-1.0e6..1.0e6),
            };
            let a: Vec2<f32> = convert(f);
            assert_eq!(a, f);
            assert_eq!(convert::<Point, _>(convert::<Vec2<f32>, _>(f)), f);
            // Widening and narrowing back is lossless.
            assert_eq!(convert::<Point, _>(convert::<Vec2<f64>, _>(f)), f);
        }
    }

    #[test]
    fn unit_vector_has_unit_length() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..200 {
            let v = random_nonzero_vec(&mut rng);
            assert!((norm(unit_vector(v)) - 1.0).abs() < EPSILON);
        }
    }

    #[test]
    fn rotation_round_trips() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let v = random_vec(&mut rng);
            let theta: VFloat = rng.gen_range(-10.0..10.0);
            assert!(rotate_vector_radians(v, 0.0).almost_eq(v));
            let there_and_back = rotate_vector_radians(rotate_vector_radians(v, theta), -theta);
            assert!((there_and_back - v).len() < 1e-3 as VFloat);
            assert!((norm(rotate_vector_radians(v, theta)) - v.len()).abs() < 1e-3 as VFloat);
        }
    }

    #[test]
    fn products_are_symmetric_and_antisymmetric() {
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..200 {
            let (a, b) = (random_vec(&mut rng), random_vec(&mut rng));
            assert_eq!(dot_product(a, b), dot_product(b, a));
            assert_eq!(cross_product(a, b), -cross_product(b, a));
            assert_eq!(triangle_area(a, b) * 2.0, rhombus_area(b, a));
        }
    }

    #[test]
    fn lerp_hits_end_points() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            let (a, b) = (random_vec(&mut rng), random_vec(&mut rng));
            assert_eq!(lerp(a, b, 0.0), a);
            assert_eq!(lerp(a, b, 1.0), b);
        }
    }

    #[test]
    fn lerp_end_points_are_exact_for_wide_components() {
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..200 {
            let a = Vec2::<f64>::new(rng.gen_range(-1.0e9..1.0e9), rng.gen_range(-1.0..1.0));
            let b = Vec2::<f64>::new(rng.gen_range(-1.0e9..1.0e9), rng.gen_range(-1.0..1.0));
            assert_eq!(lerp(a, b, 0.0), a);
            assert_eq!(lerp(a, b, 1.0), b);
        }
        // Above 2^24 an f32 can no longer hold every integer.
        let big = Vec2i::new(16_777_217, -16_777_219);
        assert_eq!(lerp(big, Vec2i::zero(), 0.0), big);
        assert_eq!(lerp(Vec2i::zero(), big, 1.0), big);
        let cell = Cell {
            x: (1 << 40) + 1,
            y: 3,
        };
        assert_eq!(lerp(cell, (0, 0), 0.0), cell);
    }

    #[test]
    fn identity_operations_keep_wide_components() {
        let v = Vec2::<f64>::new(0.1, -0.3);
        assert_eq!(rotate_vector_radians(v, 0.0), v);
        assert_eq!(reflect(v, (0, 2)), Vec2 { x: 0.1, y: 0.3 });
        assert_eq!(reflect_unit(v, (1, 0)), Vec2 { x: -0.1, y: -0.3 });
        let cell = Cell {
            x: 16_777_217,
            y: -5,
        };
        assert_eq!(rotate_vector_radians(cell, 0.0), cell);
        assert_eq!(unit_vector(Cell { x: 0, y: 16_777_217 }), Cell { x: 0, y: 1 });
    }

    #[test]
    fn reflect_off_parallel_normal_reverses() {
        let mut rng = StdRng::seed_from_u64(6);
        for _ in 0..200 {
            let n = random_nonzero_vec(&mut rng);
            let reflected = reflect(n, n);
            assert!((reflected + n).len() < 1e-3 as VFloat);
        }
    }

    #[test]
    fn angle_between_is_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let (a, b) = (random_nonzero_vec(&mut rng), random_nonzero_vec(&mut rng));
            let angle = angle_between_vectors(a, b);
            assert!((0.0..=PI as VFloat + EPSILON).contains(&angle), "{angle}");
        }
    }
}
