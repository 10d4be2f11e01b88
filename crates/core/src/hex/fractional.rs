use crate::hex::HexCoordinate;
use derive_more::{Add, Display, Mul, Sub};
use serde::{Deserialize, Serialize};

/// An unsettled position in the hex coordinate system, with floating point
/// components. These come out of conversions from planar space (see
/// [crate::HexLayout::point_to_fractional_hex]) and interpolation between
/// tiles. Unlike [HexCoordinate], the components are stored as-is and are
/// **not** guaranteed to satisfy `q + r + s = 0`. Use [Self::round] to snap the
/// position to the nearest tile.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Display,
    Add,
    Sub,
    Mul,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", q, r, s)]
pub struct FractionalHex {
    pub q: f64,
    pub r: f64,
    pub s: f64,
}

impl FractionalHex {
    /// Construct a position from `q` and `r`, deriving `s` so that the three
    /// components sum to zero
    pub fn new(q: f64, r: f64) -> Self {
        Self { q, r, s: -q - r }
    }

    /// Construct a position from all three components. No validation is done.
    pub fn from_cube(q: f64, r: f64, s: f64) -> Self {
        Self { q, r, s }
    }

    /// Round this position to the nearest tile.
    ///
    /// Each component is rounded to the nearest integer on its own, with exact
    /// halves going to the even neighbor. That can break the `q + r + s = 0`
    /// constraint. To fix that, the component that
    /// moved the most during rounding gets recomputed from the other two. When
    /// deltas tie, precedence goes `q`, then `r`, then `s`: `q` is only
    /// recomputed if its delta is strictly larger than both others, and `r`
    /// only if its delta is strictly larger than that of `s`. Otherwise `s` is
    /// the one that gets recomputed.
    ///
    /// Positions further out than [HexCoordinate::MAX_COMPONENT] saturate to
    /// it. NaN components come out as 0.
    pub fn round(self) -> HexCoordinate {
        // https://www.redblobgames.com/grids/hexagons/#rounding
        let q = self.q.round_ties_even();
        let r = self.r.round_ties_even();
        let s = self.s.round_ties_even();

        let dq = (q - self.q).abs();
        let dr = (r - self.r).abs();
        let ds = (s - self.s).abs();

        let (q, r) = if dq > dr && dq > ds {
            (-r - s, r)
        } else if dr > ds {
            (q, -q - s)
        } else {
            // s = -q - r, which is implicit in HexCoordinate
            (q, r)
        };
        let limit = f64::from(HexCoordinate::MAX_COMPONENT);
        // Float to int casts saturate, and NaN casts to 0
        HexCoordinate::new(
            q.clamp(-limit, limit) as i32,
            r.clamp(-limit, limit) as i32,
        )
    }

    /// Linearly interpolate between this position and another. `t = 0` gives
    /// this position, `t = 1` gives the other.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        self + (other - self) * t
    }
}

impl From<HexCoordinate> for FractionalHex {
    fn from(hex: HexCoordinate) -> Self {
        Self::from_cube(hex.q().into(), hex.r().into(), hex.s().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_round_integral() {
        for pos in HexCoordinate::ORIGIN.range(4) {
            assert_eq!(FractionalHex::from(pos).round(), pos);
        }
    }

    #[test]
    fn test_round_nearby() {
        assert_eq!(
            FractionalHex::new(0.1, -0.2).round(),
            HexCoordinate::ORIGIN
        );
        assert_eq!(
            FractionalHex::new(2.9, -1.05).round(),
            HexCoordinate::new(3, -1)
        );
        assert_eq!(
            FractionalHex::new(-0.4, 1.3).round(),
            HexCoordinate::new(0, 1)
        );
    }

    /// q and r both round down to the even 0 and are off by the same amount,
    /// so precedence falls through to r. s was already integral and stays put.
    #[test]
    fn test_round_tie_break() {
        let rounded = FractionalHex::from_cube(0.5, 0.5, -1.0).round();
        assert_eq!(rounded.s(), -1);
        assert_eq!(rounded, HexCoordinate::new(0, 1));
    }

    #[test]
    fn test_round_halves_to_even() {
        // 1.5 and 2.5 both go to 2, and r is recomputed from q and s
        let rounded = FractionalHex::from_cube(1.5, 2.5, -4.0).round();
        assert_eq!(rounded, HexCoordinate::new(2, 2));
        let rounded = FractionalHex::from_cube(-0.5, -1.5, 2.0).round();
        assert_eq!(rounded, HexCoordinate::new(0, -2));
    }

    #[test]
    fn test_round_saturates() {
        let max = HexCoordinate::MAX_COMPONENT;
        let rounded = FractionalHex::new(1e12, -1e12).round();
        assert_eq!(rounded, HexCoordinate::new(max, -max));
        assert_eq!(rounded.s(), 0);
        let rounded = FractionalHex::new(f64::INFINITY, 0.0).round();
        assert_eq!(rounded.q(), max);
        assert_eq!(rounded.q() + rounded.r() + rounded.s(), 0);
    }

    #[test]
    fn test_round_q_largest() {
        // q moves by 0.4, r by 0.3, s by 0.1, so q gets recomputed
        let rounded = FractionalHex::from_cube(0.4, -0.3, -0.1).round();
        assert_eq!(rounded, HexCoordinate::ORIGIN);
        // q moves by 0.45, r and s by less; q is rebuilt from r and s
        let rounded = FractionalHex::from_cube(1.45, -0.7, -0.75).round();
        assert_eq!(rounded, HexCoordinate::new(2, -1));
    }

    #[test]
    fn test_round_all_equal_deltas() {
        // Every delta is the same, so s absorbs the correction
        let rounded = FractionalHex::from_cube(0.25, 0.25, -0.25).round();
        assert_eq!(rounded, HexCoordinate::ORIGIN);
        assert_eq!(rounded.q() + rounded.r() + rounded.s(), 0);
    }

    #[test]
    fn test_lerp() {
        let a = FractionalHex::new(0.0, 0.0);
        let b = FractionalHex::new(4.0, -2.0);
        let mid = a.lerp(b, 0.5);
        assert_approx_eq!(mid.q, 2.0);
        assert_approx_eq!(mid.r, -1.0);
        assert_approx_eq!(mid.s, -1.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }
}
