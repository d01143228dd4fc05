use crate::foundation::error::{StepsceneError, StepsceneResult};

pub use kurbo::{Point, Vec2};

/// Opaque handle to a displayed element (shape, label, or outline).
///
/// Ids are assigned monotonically by the stage that created the element and
/// are never reused within a run. A handle stays valid until the element is
/// faded out or superseded by a morph.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ElementId(pub u64);

/// Style tag for transient outlines. Tags name intent only; color and stroke
/// choices belong to whatever eventually renders the script.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum OutlineStyle {
    /// The element currently being examined.
    Cursor,
    /// A matched pair / satisfied condition.
    Match,
    /// A contiguous window of elements (e.g. a candidate subarray).
    Window,
    /// A failed condition.
    Failure,
}

/// Placement direction relative to an anchor element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Direction {
    Above,
    Below,
    LeftOf,
    RightOf,
    /// Diagonally down and to the right (trie children fan out this way).
    BelowRight,
}

impl Direction {
    /// Unit offset for this direction. Screen convention: +x right, +y down.
    pub fn unit(self) -> Vec2 {
        use std::f64::consts::FRAC_1_SQRT_2;
        match self {
            Self::Above => Vec2::new(0.0, -1.0),
            Self::Below => Vec2::new(0.0, 1.0),
            Self::LeftOf => Vec2::new(-1.0, 0.0),
            Self::RightOf => Vec2::new(1.0, 0.0),
            Self::BelowRight => Vec2::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2),
        }
    }
}

/// Fill tint applied to a shape by a `Recolor` op (hit/miss marking).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Tint {
    Neutral,
    Success,
    Failure,
}

/// Sum of decimal digits of a non-negative integer.
pub fn digit_sum(mut n: u64) -> u32 {
    let mut sum = 0u32;
    loop {
        sum += (n % 10) as u32;
        n /= 10;
        if n == 0 {
            return sum;
        }
    }
}

/// Parse a non-negative value out of an `i64`, rejecting negatives.
///
/// Digit-sum bucketing is only defined for non-negative input; a negative
/// number in the walkthrough input is a validation error, not a bucket.
pub fn non_negative(n: i64) -> StepsceneResult<u64> {
    u64::try_from(n)
        .map_err(|_| StepsceneError::validation(format!("expected non-negative value, got {n}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_sum_basics() {
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(9), 9);
        assert_eq!(digit_sum(51), 6);
        assert_eq!(digit_sum(71), 8);
        assert_eq!(digit_sum(17), 8);
        assert_eq!(digit_sum(999), 27);
    }

    #[test]
    fn non_negative_rejects_negatives() {
        assert_eq!(non_negative(42).unwrap(), 42);
        assert!(non_negative(-1).is_err());
    }

    #[test]
    fn direction_units_are_axis_aligned() {
        assert_eq!(Direction::Below.unit(), Vec2::new(0.0, 1.0));
        assert_eq!(Direction::RightOf.unit(), Vec2::new(1.0, 0.0));
    }
}
