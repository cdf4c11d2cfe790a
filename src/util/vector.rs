//! The structural contract shared by [`Vec2`] and foreign vector types.
//!
//! Anything with two numeric components named `x` and `y` can take part in the arithmetic of
//! [`Vec2`] and in every function of the [`geometry`](crate::util::geometry) module. User types
//! opt in with a single derive:
//!
//! ```
//! use vec2d::{geometry, Vec2, Vector2};
//!
//! #[derive(Copy, Clone, Debug, Vector2)]
//! struct Point {
//!     x: f32,
//!     y: f32,
//! }
//!
//! let p = Point { x: 3.0, y: 4.0 };
//! assert_eq!(geometry::norm(p), 5.0);
//! assert_eq!(Vec2::<f32>::from(p) + p, Vec2::<f32>::new(6, 8));
//! ```
use crate::util::linalg::Vec2;
use crate::util::scalar::Scalar;

pub use vec2d_derive::Vector2;

/// A value with two numeric components `x` and `y`.
///
/// Prefer `#[derive(Vector2)]` over implementing this by hand; the derive also provides `From`
/// and `PartialEq` bridges to [`Vec2`].
pub trait Vector2: Copy {
    type Scalar: Scalar;

    fn x(&self) -> Self::Scalar;
    fn y(&self) -> Self::Scalar;
    fn from_xy(x: Self::Scalar, y: Self::Scalar) -> Self;

    /// Copies the components into a [`Vec2`] of the same scalar type.
    #[must_use]
    fn as_vec2(&self) -> Vec2<Self::Scalar> {
        Vec2 {
            x: self.x(),
            y: self.y(),
        }
    }
}

impl<S: Scalar> Vector2 for [S; 2] {
    type Scalar = S;

    fn x(&self) -> S {
        self[0]
    }
    fn y(&self) -> S {
        self[1]
    }
    fn from_xy(x: S, y: S) -> Self {
        [x, y]
    }
}

impl<S: Scalar> Vector2 for (S, S) {
    type Scalar = S;

    fn x(&self) -> S {
        self.0
    }
    fn y(&self) -> S {
        self.1
    }
    fn from_xy(x: S, y: S) -> Self {
        (x, y)
    }
}

#[cfg(feature = "egui")]
mod egui_impls {
    use super::Vector2;

    impl Vector2 for egui::Pos2 {
        type Scalar = f32;

        fn x(&self) -> f32 {
            self.x
        }
        fn y(&self) -> f32 {
            self.y
        }
        fn from_xy(x: f32, y: f32) -> Self {
            egui::pos2(x, y)
        }
    }

    impl Vector2 for egui::Vec2 {
        type Scalar = f32;

        fn x(&self) -> f32 {
            self.x
        }
        fn y(&self) -> f32 {
            self.y
        }
        fn from_xy(x: f32, y: f32) -> Self {
            egui::vec2(x, y)
        }
    }

}
