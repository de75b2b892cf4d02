//! Apply-stage numeric problems: compute a circle's area from a stated
//! radius or diameter using a stated approximation of π.

/// The dimension a problem states.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GivenSize {
    Radius(f64),
    Diameter(f64),
}

/// One practice problem.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AreaProblem {
    pub given: GivenSize,
    /// The approximation of π the learner is told to use.
    pub pi: f64,
}

impl AreaProblem {
    pub fn radius(&self) -> f64 {
        match self.given {
            GivenSize::Radius(r) => r,
            GivenSize::Diameter(d) => d / 2.0,
        }
    }

    /// Expected answer under the problem's π approximation.
    pub fn area(&self) -> f64 {
        let r = self.radius();
        self.pi * r * r
    }

    /// Check a learner's numeric answer. Absolute tolerance, sized for
    /// re-typed short decimals.
    pub fn check(&self, answer: f64) -> bool {
        (answer - self.area()).abs() < 1e-6
    }
}

/// The reference practice set, easiest first.
pub fn practice_set() -> [AreaProblem; 3] {
    [
        AreaProblem {
            given: GivenSize::Radius(3.0),
            pi: 3.0,
        },
        AreaProblem {
            given: GivenSize::Diameter(8.0),
            pi: 3.1,
        },
        AreaProblem {
            given: GivenSize::Radius(10.0),
            pi: 3.14,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_answers() {
        let set = practice_set();
        assert_eq!(set[0].area(), 27.0);
        assert!((set[1].area() - 49.6).abs() < 1e-9);
        assert!((set[2].area() - 314.0).abs() < 1e-9);
    }

    #[test]
    fn diameter_halves_to_radius() {
        let p = AreaProblem {
            given: GivenSize::Diameter(8.0),
            pi: 3.1,
        };
        assert_eq!(p.radius(), 4.0);
    }

    #[test]
    fn check_accepts_retyped_decimals() {
        let p = practice_set()[1];
        assert!(p.check(49.6));
        assert!(!p.check(49.0));
        assert!(!p.check(50.0));
    }
}
