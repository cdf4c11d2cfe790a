#[allow(unused_imports)]
pub use num_traits;

#[allow(unused_imports)]
pub use anyhow::{anyhow, bail, Context, Result};
#[allow(unused_imports)]
pub use tracing::{error, info, warn};

#[allow(unused_imports)]
pub use crate::{
    core::config::*,
    util::{
        assert::*,
        geometry,
        linalg::{Vec2, Vec2f, Vec2i, Vec2u},
        scalar::Scalar,
        vector::Vector2,
    },
};
