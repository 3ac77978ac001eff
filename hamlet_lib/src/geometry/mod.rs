//! The world grid: cube coordinates and their world-space embedding.

mod layout;
mod position;

pub use layout::{HexLayout, HexOrientation};
pub use position::{FractionalHex, Hex, FRACTIONAL_EPSILON, HEX_DIAGONALS, HEX_DIRECTIONS};

use glam::DVec3;

/// The layout used for the builder's world grid.
pub const MAP_LAYOUT: HexLayout = HexLayout {
    orientation: HexOrientation::POINTY,
    size: 1.0,
    origin: DVec3::ZERO,
};
