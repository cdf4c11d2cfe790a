use anyhow::Result;
use tracing::info;

use vec2d::{
    check, check_almost_eq, check_eq, check_lt, geometry,
    util::log::{log_and_ok, setup_log},
    VFloat, Vec2f, Vec2i, Vec2u, Vector2, EPSILON,
};

#[derive(Copy, Clone, Debug, PartialEq, Vector2)]
struct ScreenPoint {
    x: i32,
    y: i32,
}

fn main() -> Result<()> {
    setup_log()?;
    info!("vec2d: VFloat = {}", std::any::type_name::<VFloat>());
    run_checks();
    info!("vec2d: all checks passed");
    Ok(())
}

fn run_checks() {
    let a = Vec2f::new(1, 2);
    let b = Vec2f::new(3, 4);
    check_eq!(a + b, Vec2f::new(4, 6));
    check_eq!(a + b, b + a);
    check_eq!(a - b, -(b - a));
    check_eq!(a * 2.0_f32, 2.0_f32 * a);
    check_eq!(b / a, Vec2f::new(3, 2));
    info!("{a} + {b} = {}", a + b);

    check_eq!(geometry::dot_product((1, 0), (0, 1)), 0.0);
    check_eq!(geometry::rectangle_area((3, -4)), 12.0);
    check_eq!(geometry::cross_product(a, b), -geometry::cross_product(b, a));
    check_lt!(Vec2f::new(1, 0).angle().abs(), EPSILON);
    check_lt!(
        (Vec2f::new(0, 1).angle() - std::f64::consts::FRAC_PI_2 as VFloat).abs(),
        EPSILON
    );

    let quarter_turn = std::f64::consts::FRAC_PI_2 as VFloat;
    check_almost_eq!(
        geometry::rotate_vector_radians(Vec2f::new(1, 0), quarter_turn),
        Vec2f::new(0, 1)
    );
    for degrees in [0.0, 30.0, 90.0, 135.0, 180.0, 270.0, 315.0] {
        let theta = (degrees as VFloat).to_radians();
        check_almost_eq!(b.rotated(theta).rotated(-theta), b);
        check_lt!((b.rotated(theta).len() - b.len()).abs(), 1e-4);
    }
    check_lt!((b.unit_vector().len() - 1.0).abs(), EPSILON);
    check_almost_eq!(geometry::reflect(b, b), -b);
    check_eq!(geometry::lerp(a, b, 0.0), a);
    check_eq!(geometry::lerp(a, b, 1.0), b);

    let cursor = ScreenPoint { x: 640, y: 360 };
    let offset = Vec2f::new(-0.5, 10.75);
    let moved = geometry::add(cursor, offset);
    check_eq!(moved, ScreenPoint { x: 640, y: 370 });
    check_eq!(Vec2i::from(cursor), Vec2i::new(640, 360));
    info!("{cursor:?} moved by {offset:.2} = {:?}", moved);

    // Negative components do not fit in an unsigned vector.
    check!(log_and_ok(Vec2f::new(-1, 2).try_into_vector::<Vec2u>()).is_none());
    check_eq!(
        log_and_ok(Vec2f::new(1.5, 2).try_into_vector::<Vec2u>()),
        Some(Vec2u::new(1, 2))
    );
}
