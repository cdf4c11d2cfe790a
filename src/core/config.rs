/// Floating point type used for scalar results (lengths, angles, areas) and as the default
/// [`Vec2`](crate::util::linalg::Vec2) component type. Enable the `f64` feature for double
/// precision.
#[cfg(not(feature = "f64"))]
pub type VFloat = f32;
#[cfg(feature = "f64")]
pub type VFloat = f64;

/// Tolerance used by the `almost_eq()` helpers. Plain `==` never uses it.
#[cfg(not(feature = "f64"))]
pub const EPSILON: VFloat = 1e-5;
#[cfg(feature = "f64")]
pub const EPSILON: VFloat = 1e-10;
