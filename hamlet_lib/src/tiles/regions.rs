//! Connected-region analysis over the placed-tile map.
//!
//! Regions are computed per trait: a tile whose kind carries several traits
//! takes part in several independent searches, one per trait, and can end up
//! in one region for each. Connectivity is edge adjacency only; two cells
//! that share just a corner never merge.

use std::collections::VecDeque;
use std::fmt::{self, Display, Formatter};

use hashbrown::HashSet;
use indexmap::IndexSet;
use itertools::Itertools;
use log::debug;

use super::{TileTrait, WorldMap};
use crate::geometry::Hex;

/// A maximal group of edge-connected tiles sharing one trait.
///
/// Regions are fresh snapshots of the map they were computed from; they are
/// never updated in place as the world changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraitRegion {
    /// The trait whose connectivity this region describes.
    pub tile_trait: TileTrait,
    /// Every cell in the region.
    pub tiles: HashSet<Hex>,
}

impl TraitRegion {
    /// The number of tiles in the region.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.tiles.len()
    }

    /// Is the cell part of this region?
    #[inline]
    #[must_use]
    pub fn contains(&self, hex: Hex) -> bool {
        self.tiles.contains(&hex)
    }
}

impl Display for TraitRegion {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let cells = self.tiles.iter().sorted().map(|hex| hex.key()).join("; ");

        write!(f, "{} region ({} tiles): {cells}", self.tile_trait, self.size())
    }
}

/// Finds every maximal connected region of same-trait tiles in `world`.
///
/// The caller's map is only read. Output order is not part of the contract
/// (assert on membership and size, not position), though a given map always
/// produces the same list.
#[must_use]
pub fn trait_regions(world: &WorldMap) -> Vec<TraitRegion> {
    let mut regions = Vec::new();

    for tile_trait in TileTrait::ALL {
        regions.extend(trait_regions_for(world, tile_trait));
    }

    debug!(
        "found {} trait regions across {} placed tiles",
        regions.len(),
        world.len()
    );

    regions
}

/// Finds the connected regions of tiles carrying `tile_trait`.
#[must_use]
pub fn trait_regions_for(world: &WorldMap, tile_trait: TileTrait) -> Vec<TraitRegion> {
    // Seed cells are sorted so the search (and therefore the output list) is
    // identical run-to-run regardless of the map's hasher.
    let mut unvisited: IndexSet<Hex> = world
        .iter()
        .filter(|(_, tile)| tile.kind.traits().contains(&tile_trait))
        .map(|(&hex, _)| hex)
        .sorted()
        .collect();

    let mut regions = Vec::new();

    while let Some(&start) = unvisited.first() {
        unvisited.shift_remove(&start);

        let mut tiles = HashSet::new();
        tiles.insert(start);

        let mut frontier = VecDeque::from([start]);
        while let Some(current) = frontier.pop_front() {
            for neighbor in current.all_neighbors() {
                if unvisited.shift_remove(&neighbor) {
                    tiles.insert(neighbor);
                    frontier.push_back(neighbor);
                }
            }
        }

        regions.push(TraitRegion { tile_trait, tiles });
    }

    regions
}
