//! Conversions between grid cells and world-space positions.
//!
//! A [`HexLayout`] embeds the grid in the world's x/z plane; the y axis is
//! owned by whoever places things in the world (terrain height, stacking),
//! so the forward transform takes an optional override for it.

use glam::{DVec2, DVec3};
use std::f64::consts::TAU;

use super::position::{FractionalHex, Hex};

/// √3, used by the canonical orientation matrices.
const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// An axial⇄planar transform matrix pair plus the first corner angle.
///
/// Only the two canonical orientations exist; there is no reason to construct
/// others.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexOrientation {
    /// Forward matrix (axial to world), row-major.
    pub f0: f64,
    /// Forward matrix, second coefficient.
    pub f1: f64,
    /// Forward matrix, third coefficient.
    pub f2: f64,
    /// Forward matrix, fourth coefficient.
    pub f3: f64,
    /// Backward matrix (world to axial), row-major.
    pub b0: f64,
    /// Backward matrix, second coefficient.
    pub b1: f64,
    /// Backward matrix, third coefficient.
    pub b2: f64,
    /// Backward matrix, fourth coefficient.
    pub b3: f64,
    /// Angle of corner 0, in sixths of a full turn.
    pub start_angle: f64,
}

impl HexOrientation {
    /// Pointy-top cells: an edge faces up the r axis, a corner points along z.
    pub const POINTY: HexOrientation = HexOrientation {
        f0: SQRT_3,
        f1: SQRT_3 / 2.0,
        f2: 0.0,
        f3: 3.0 / 2.0,
        b0: SQRT_3 / 3.0,
        b1: -1.0 / 3.0,
        b2: 0.0,
        b3: 2.0 / 3.0,
        start_angle: 0.5,
    };

    /// Flat-top cells: a face points along z.
    pub const FLAT: HexOrientation = HexOrientation {
        f0: 3.0 / 2.0,
        f1: 0.0,
        f2: SQRT_3 / 2.0,
        f3: SQRT_3,
        b0: 2.0 / 3.0,
        b1: 0.0,
        b2: -1.0 / 3.0,
        b3: SQRT_3 / 3.0,
        start_angle: 0.0,
    };
}

/// The size, orientation and world anchoring of a hex grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexLayout {
    /// Which way the cells point.
    pub orientation: HexOrientation,
    /// World-units distance from a cell center to any of its corners.
    pub size: f64,
    /// World-space position of the grid origin cell's center.
    pub origin: DVec3,
}

impl HexLayout {
    /// Returns the world position of the center of `hex`.
    ///
    /// The grid spans the x/z plane; `y_override` supplies the vertical
    /// coordinate, falling back to the layout origin's.
    #[inline]
    #[must_use]
    pub fn hex_to_world(&self, hex: Hex, y_override: Option<f64>) -> DVec3 {
        let o = &self.orientation;
        let q = f64::from(hex.q);
        let r = f64::from(hex.r);

        DVec3 {
            x: self.origin.x + (o.f0 * q + o.f1 * r) * self.size,
            y: y_override.unwrap_or(self.origin.y),
            z: self.origin.z + (o.f2 * q + o.f3 * r) * self.size,
        }
    }

    /// Returns the fractional cell under a world position.
    ///
    /// Only the x/z components of `position` participate; y is ignored.
    #[inline]
    #[must_use]
    pub fn world_to_hex_fractional(&self, position: DVec3) -> FractionalHex {
        let o = &self.orientation;
        let point = DVec2 {
            x: (position.x - self.origin.x) / self.size,
            y: (position.z - self.origin.z) / self.size,
        };

        FractionalHex::from_axial(o.b0 * point.x + o.b1 * point.y, o.b2 * point.x + o.b3 * point.y)
    }

    /// Returns the cell under a world position.
    #[inline]
    #[must_use]
    pub fn world_to_hex(&self, position: DVec3) -> Hex {
        self.world_to_hex_fractional(position).round()
    }

    /// The planar offset from a cell center to one of its six corners.
    ///
    /// The corner index is taken mod 6, so negative values wrap.
    #[inline]
    #[must_use]
    pub fn hex_corner_offset(&self, corner: i32) -> DVec2 {
        let angle = TAU * (self.orientation.start_angle - f64::from(corner.rem_euclid(6))) / 6.0;

        DVec2 {
            x: self.size * angle.cos(),
            y: self.size * angle.sin(),
        }
    }

    /// The world positions of the six corners of `hex`, in corner order.
    ///
    /// All six share the cell center's y.
    #[must_use]
    pub fn polygon_corners(&self, hex: Hex) -> [DVec3; 6] {
        let center = self.hex_to_world(hex, None);

        std::array::from_fn(|corner| {
            let offset = self.hex_corner_offset(corner as i32);

            DVec3 {
                x: center.x + offset.x,
                y: center.y,
                z: center.z + offset.y,
            }
        })
    }
}
