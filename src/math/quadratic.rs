/// Real roots of a*t^2 + b*t + c = 0. `TwoRoots(t1, t2)` holds
/// t1 = (-b - sqrt(d)) / 2a and t2 = (-b + sqrt(d)) / 2a, so t1 <= t2
/// whenever a > 0 (always the case for ray-sphere coefficients).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum QuadraticRoots {
    NoRoot,
    OneRoot(f32),
    TwoRoots(f32, f32),
}

/// Solve a quadratic. The discriminant is compared to zero exactly; a
/// degenerate a == 0 resolves to `NoRoot` instead of dividing by zero.
pub fn solve_quadratic(a: f32, b: f32, c: f32) -> QuadraticRoots {
    if a == 0.0 {
        return QuadraticRoots::NoRoot;
    }
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        QuadraticRoots::NoRoot
    } else if discriminant == 0.0 {
        QuadraticRoots::OneRoot(-b / (2.0 * a))
    } else {
        let sqrt = discriminant.sqrt();
        QuadraticRoots::TwoRoots((-b - sqrt) / (2.0 * a), (-b + sqrt) / (2.0 * a))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_no_root() {
        assert_eq!(solve_quadratic(1.0, 0.0, 1.0), QuadraticRoots::NoRoot);
    }

    #[test]
    fn test_one_root() {
        // t^2 - 2t + 1 = (t - 1)^2
        assert_eq!(solve_quadratic(1.0, -2.0, 1.0), QuadraticRoots::OneRoot(1.0));
    }

    #[test]
    fn test_two_roots_ordered() {
        // t^2 - 4 = 0
        match solve_quadratic(1.0, 0.0, -4.0) {
            QuadraticRoots::TwoRoots(t1, t2) => {
                assert_eq!((t1, t2), (-2.0, 2.0));
                assert!(t1 <= t2);
            }
            other => panic!("expected two roots, got {:?}", other),
        }
    }

    #[test]
    fn test_degenerate_leading_coefficient() {
        assert_eq!(solve_quadratic(0.0, 1.0, 1.0), QuadraticRoots::NoRoot);
    }
}
