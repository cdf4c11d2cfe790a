pub mod assert;
pub mod geometry;
pub mod linalg;
pub mod log;
pub mod scalar;
pub mod vector;
