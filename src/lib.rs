//! A generic 2D vector type, [`Vec2`], and a library of geometry functions that work on any
//! type with numeric `x` and `y` components.
//!
//! ```
//! use vec2d::{geometry, Vec2f, Vector2};
//!
//! #[derive(Copy, Clone, Debug, PartialEq, Vector2)]
//! struct Pixel {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let velocity = Vec2f::new(0.5, 2);
//! let pixel = Pixel { x: 10, y: 20 };
//! assert_eq!(geometry::add(pixel, velocity * 2.0_f32), Pixel { x: 11, y: 24 });
//! assert_eq!(Vec2f::from(pixel) - velocity, Vec2f::new(9.5, 18));
//! ```

// Lets `#[derive(Vector2)]` refer to `::vec2d` from inside this crate.
extern crate self as vec2d;

pub mod core;
pub mod util;

pub use num_traits;

pub use crate::core::config::{VFloat, EPSILON};
pub use crate::util::{
    geometry,
    linalg::{Vec2, Vec2f, Vec2i, Vec2u},
    scalar::Scalar,
    vector::Vector2,
};
