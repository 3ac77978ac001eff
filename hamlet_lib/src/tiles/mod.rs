//! Tile kinds, placement records and region analysis over the placed map.

mod kinds;
mod regions;

pub use kinds::{PlacedTile, TileKind, TileTrait};
pub use regions::{trait_regions, trait_regions_for, TraitRegion};

use crate::geometry::Hex;
use hashbrown::HashMap;

/// The placed-tile state of a world, keyed by cell.
///
/// Owned by caller code; everything in this crate only reads it.
pub type WorldMap = HashMap<Hex, PlacedTile>;
