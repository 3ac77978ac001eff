//! Cube-coordinate math for the world grid.
//!
//! Every cell is addressed by an immutable cube coordinate `(q, r, s)` with
//! the invariant `q + r + s == 0`. Integer coordinates hold the invariant
//! exactly; fractional intermediates (produced while interpolating or
//! inverting a layout transform) hold it within [`FRACTIONAL_EPSILON`] and
//! are collapsed back to cells with [`FractionalHex::round`].

use core::fmt::Display;
use derive_more::{Add, AddAssign, Sub, SubAssign};
use serde::{Deserialize, Serialize};
use std::fmt::Formatter;

/// Tolerance for the cube invariant on fractional coordinates.
pub const FRACTIONAL_EPSILON: f64 = 1e-6;

/// A cube coordinate, representing exactly one cell of the hex grid.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Add,
    Sub,
    AddAssign,
    SubAssign,
    Serialize,
    Deserialize,
)]
pub struct Hex {
    /// The column axis.
    pub q: i32,
    /// The row axis.
    pub r: i32,
    /// The derived third axis; always equal to `-q - r`.
    pub s: i32,
}

/// The six edge-adjacent unit offsets, indexed 0..=5.
///
/// The order is fixed: it defines what a "direction" means everywhere a
/// direction index is taken, including region adjacency.
pub const HEX_DIRECTIONS: [Hex; 6] = [
    Hex { q: 1, r: 0, s: -1 },
    Hex { q: 1, r: -1, s: 0 },
    Hex { q: 0, r: -1, s: 1 },
    Hex { q: -1, r: 0, s: 1 },
    Hex { q: -1, r: 1, s: 0 },
    Hex { q: 0, r: 1, s: -1 },
];

/// The six vertex-adjacent offsets at distance 2, indexed 0..=5.
///
/// A diagonal neighbor shares a corner with the origin cell but no edge.
pub const HEX_DIAGONALS: [Hex; 6] = [
    Hex { q: 2, r: -1, s: -1 },
    Hex { q: 1, r: -2, s: 1 },
    Hex { q: -1, r: -1, s: 2 },
    Hex { q: -2, r: 1, s: 1 },
    Hex { q: -1, r: 2, s: -1 },
    Hex { q: 1, r: 1, s: -2 },
];

impl Hex {
    /// The central cell.
    pub const ZERO: Hex = Hex { q: 0, r: 0, s: 0 };

    /// Creates a [`Hex`] from all three cube coordinates.
    ///
    /// # Panics
    ///
    /// Panics unless `q + r + s == 0`. A coordinate triple that does not sum
    /// to zero is a bug in the caller's math, so it fails here rather than
    /// being silently normalized.
    #[inline]
    #[must_use]
    pub fn new(q: i32, r: i32, s: i32) -> Self {
        assert!(
            q + r + s == 0,
            "cube coordinates must sum to zero: ({q}, {r}, {s})"
        );
        Hex { q, r, s }
    }

    /// Creates a [`Hex`] from axial coordinates, deriving the third axis.
    #[inline]
    #[must_use]
    pub const fn from_axial(q: i32, r: i32) -> Self {
        Hex { q, r, s: -q - r }
    }

    /// Multiplies all three coordinates by `factor`.
    #[inline]
    #[must_use]
    pub const fn scale(self, factor: i32) -> Self {
        Hex {
            q: self.q * factor,
            r: self.r * factor,
            s: self.s * factor,
        }
    }

    /// Rotates 60° counterclockwise around the origin.
    #[inline]
    #[must_use]
    pub const fn rotate_left(self) -> Self {
        Hex {
            q: -self.s,
            r: -self.q,
            s: -self.r,
        }
    }

    /// Rotates 60° clockwise around the origin.
    #[inline]
    #[must_use]
    pub const fn rotate_right(self) -> Self {
        Hex {
            q: -self.r,
            r: -self.s,
            s: -self.q,
        }
    }

    /// Returns the edge-adjacent cell in the given direction.
    ///
    /// The direction is taken mod 6, so negative values wrap.
    #[inline]
    #[must_use]
    pub fn neighbor(self, direction: i32) -> Self {
        self + HEX_DIRECTIONS[direction.rem_euclid(6) as usize]
    }

    /// Returns the vertex-adjacent cell at distance 2 in the given direction.
    ///
    /// The direction is taken mod 6, so negative values wrap.
    #[inline]
    #[must_use]
    pub fn diagonal_neighbor(self, direction: i32) -> Self {
        self + HEX_DIAGONALS[direction.rem_euclid(6) as usize]
    }

    /// All six edge-adjacent cells, in direction order.
    #[inline]
    #[must_use]
    pub fn all_neighbors(self) -> [Hex; 6] {
        HEX_DIRECTIONS.map(|direction| self + direction)
    }

    /// The distance from the origin cell.
    #[inline]
    #[must_use]
    pub const fn len(self) -> i32 {
        (self.q.abs() + self.r.abs() + self.s.abs()) / 2
    }

    /// The number of cell-to-cell steps between `self` and `other`.
    #[inline]
    #[must_use]
    pub fn distance(self, other: Hex) -> i32 {
        (self - other).len()
    }

    /// The canonical `"q,r,s"` key for this cell.
    ///
    /// This is the stable identity used wherever cells cross a text boundary.
    #[inline]
    #[must_use]
    pub fn key(self) -> String {
        format!("{},{},{}", self.q, self.r, self.s)
    }

    /// The straight line of cells from `self` to `other`, inclusive.
    ///
    /// Always contains `distance + 1` cells, starting at `self` and ending at
    /// `other`. Both endpoints are nudged off exact cell boundaries before
    /// each interpolated rounding, so collinear ties resolve the same way at
    /// every step of the line.
    #[must_use]
    pub fn line_draw(self, other: Hex) -> Vec<Hex> {
        let n = self.distance(other);
        let a = FractionalHex::from(self).nudge();
        let b = FractionalHex::from(other).nudge();
        // A zero-length line is still one cell; avoid dividing by zero.
        let step = 1.0 / i32::max(n, 1) as f64;

        (0..=n)
            .map(|i| a.lerp(b, step * f64::from(i)).round())
            .collect()
    }

    /// Iterates over every cell within `radius` steps of `self`, inclusive.
    ///
    /// Yields `3 * radius * (radius + 1) + 1` cells.
    pub fn range(self, radius: i32) -> impl Iterator<Item = Hex> {
        debug_assert!(radius >= 0);

        (-radius..=radius).flat_map(move |q| {
            let lowest = i32::max(-radius, -q - radius);
            let highest = i32::min(radius, -q + radius);
            (lowest..=highest).map(move |r| self + Hex::from_axial(q, r))
        })
    }
}

impl Display for Hex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// A cube coordinate mid-computation, before it has settled on a cell.
///
/// Produced by interpolation and by the inverse layout transform. The cube
/// invariant holds within [`FRACTIONAL_EPSILON`] rather than exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractionalHex {
    /// The column axis.
    pub q: f64,
    /// The row axis.
    pub r: f64,
    /// The third axis; sums with the others to (approximately) zero.
    pub s: f64,
}

impl FractionalHex {
    /// Creates a [`FractionalHex`] from all three cube coordinates.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates sum to more than [`FRACTIONAL_EPSILON`] away
    /// from zero.
    #[inline]
    #[must_use]
    pub fn new(q: f64, r: f64, s: f64) -> Self {
        assert!(
            (q + r + s).abs() < FRACTIONAL_EPSILON,
            "cube coordinates must sum to zero: ({q}, {r}, {s})"
        );
        FractionalHex { q, r, s }
    }

    /// Creates a [`FractionalHex`] from axial coordinates, deriving the third
    /// axis.
    #[inline]
    #[must_use]
    pub fn from_axial(q: f64, r: f64) -> Self {
        FractionalHex { q, r, s: -q - r }
    }

    /// Collapses to the nearest cell, restoring the invariant exactly.
    ///
    /// Each axis is rounded independently, then the axis with the largest
    /// rounding error is recomputed from the other two so the sum is forced
    /// back to zero. The `q` error is checked first, then `r`; otherwise `s`
    /// absorbs the error. That order decides which axis gives way on exact
    /// ties and must not change.
    #[must_use]
    pub fn round(self) -> Hex {
        let mut q = self.q.round();
        let mut r = self.r.round();
        let mut s = self.s.round();

        let q_diff = (q - self.q).abs();
        let r_diff = (r - self.r).abs();
        let s_diff = (s - self.s).abs();

        if q_diff > r_diff && q_diff > s_diff {
            q = -r - s;
        } else if r_diff > s_diff {
            r = -q - s;
        } else {
            s = -q - r;
        }

        Hex::new(q as i32, r as i32, s as i32)
    }

    /// Linear interpolation towards `other`; `t == 0` is `self`, `t == 1` is
    /// `other`.
    #[inline]
    #[must_use]
    pub fn lerp(self, other: FractionalHex, t: f64) -> Self {
        FractionalHex {
            q: self.q + (other.q - self.q) * t,
            r: self.r + (other.r - self.r) * t,
            s: self.s + (other.s - self.s) * t,
        }
    }

    /// Shifts the coordinates off exact cell boundaries.
    ///
    /// The offsets sum to zero, so the invariant is untouched; they are far
    /// below [`FRACTIONAL_EPSILON`]-scale geometry but large enough that a
    /// point sitting exactly on a boundary rounds consistently.
    #[inline]
    #[must_use]
    pub(crate) fn nudge(self) -> Self {
        FractionalHex {
            q: self.q + 1e-6,
            r: self.r + 1e-6,
            s: self.s - 2e-6,
        }
    }
}

impl From<Hex> for FractionalHex {
    #[inline]
    fn from(hex: Hex) -> Self {
        FractionalHex {
            q: f64::from(hex.q),
            r: f64::from(hex.r),
            s: f64::from(hex.s),
        }
    }
}
