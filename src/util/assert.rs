//! Always-on checks that report the call site, for sanity checks outside of `#[test]`.

pub fn assert_partial_ord<T: PartialOrd>(_: &T) {}
pub fn assert_partial_eq<T: PartialEq>(_: &T) {}
pub fn assert_same_type<T, U>(_: &T, _: &U) {}
pub fn assert_type<T>(_: &T) {}

#[macro_export]
macro_rules! current_location {
    () => {
        format!("{}:{}", file!(), line!())
    };
}

#[macro_export]
macro_rules! check {
    ($lhs:expr) => {{
        let value = $lhs;
        $crate::util::assert::assert_type::<bool>(&value);
        if !value {
            panic!(
                "check failed: {}: {}",
                $crate::current_location!(),
                stringify!($lhs),
            );
        }
    }};
}

#[macro_export]
macro_rules! check_lt {
    ($lhs:expr, $rhs:expr) => {{
        let (lhs, rhs) = ($lhs, $rhs);
        $crate::util::assert::assert_same_type(&lhs, &rhs);
        $crate::util::assert::assert_partial_ord(&lhs);
        if !(lhs < rhs) {
            panic!(
                "check failed: {}: {} < {}: {:?} vs. {:?}",
                $crate::current_location!(),
                stringify!($lhs),
                stringify!($rhs),
                lhs,
                rhs
            );
        }
    }};
}

#[macro_export]
macro_rules! check_eq {
    ($lhs:expr, $rhs:expr) => {{
        let (lhs, rhs) = ($lhs, $rhs);
        $crate::util::assert::assert_same_type(&lhs, &rhs);
        $crate::util::assert::assert_partial_eq(&lhs);
        if !(lhs == rhs) {
            panic!(
                "check failed: {}: {} == {}: {:?} vs. {:?}",
                $crate::current_location!(),
                stringify!($lhs),
                stringify!($rhs),
                lhs,
                rhs
            );
        }
    }};
}

#[macro_export]
macro_rules! check_almost_eq {
    ($lhs:expr, $rhs:expr) => {{
        let (lhs, rhs) = ($lhs, $rhs);
        $crate::util::assert::assert_same_type(&lhs, &rhs);
        if !lhs.almost_eq(rhs) {
            panic!(
                "check failed: {}: {} ~= {}: {:?} vs. {:?}",
                $crate::current_location!(),
                stringify!($lhs),
                stringify!($rhs),
                lhs,
                rhs
            );
        }
    }};
}

#[cfg(test)]
mod tests {
    use crate::util::linalg::Vec2;

    #[test]
    fn passing_checks() {
        check!(1 + 1 == 2);
        check_eq!(Vec2::<i32>::new(1, 2), Vec2::<i32>::new(1, 2));
        check_lt!(1.0_f32, 2.0_f32);
        check_almost_eq!(Vec2::<f64>::new(0.1 + 0.2, 1), Vec2::<f64>::new(0.3, 1));
    }

    #[test]
    #[should_panic(expected = "check failed")]
    fn failing_check_eq() {
        check_eq!(Vec2::<i32>::new(1, 2), Vec2::<i32>::new(2, 1));
    }

    #[test]
    #[should_panic(expected = "assert.rs")]
    fn failing_check_reports_location() {
        check!(Vec2::<i32>::new(0, 0).x == 1);
    }
}
