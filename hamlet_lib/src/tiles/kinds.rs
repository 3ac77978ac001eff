//! Closed definitions for each variety of placeable tile.
//!
//! The set of kinds doubles as the share-code registry: the wire format
//! indexes into it with a fixed-width field, so the ordinal of every kind is
//! written out explicitly here rather than derived from declaration order.
//! Reordering or removing entries invalidates existing share codes and is a
//! format-version decision, not a refactor.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

use crate::geometry::Hex;

/// A gameplay tag carried by one or more tile kinds.
///
/// Traits group placed tiles for connectivity analysis: a river region is a
/// set of edge-connected tiles whose kinds all carry [`TileTrait::River`].
/// One kind may carry several traits at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileTrait {
    /// Water channel segments.
    River,
    /// Inhabited constructions.
    Building,
    /// Tree cover.
    Forest,
    /// Walkable trail segments.
    Path,
}

impl TileTrait {
    /// Every trait, in a fixed order.
    pub const ALL: [TileTrait; 4] = [
        TileTrait::River,
        TileTrait::Building,
        TileTrait::Forest,
        TileTrait::Path,
    ];
}

impl Display for TileTrait {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let str = match self {
            TileTrait::River => "river",
            TileTrait::Building => "building",
            TileTrait::Forest => "forest",
            TileTrait::Path => "path",
        };

        write!(f, "{str}")
    }
}

/// A placeable tile kind.
///
/// Each kind has a short id (the wire name of the legacy text share format)
/// and a stable codec ordinal (the index of the binary share format). Both
/// are part of the sharing contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    /// Plain grass.
    Grass,
    /// Flowering grass.
    Meadow,
    /// Bare boulders.
    Rocks,
    /// A few young trees.
    TreesSmall,
    /// Dense old growth.
    TreesLarge,
    /// A straight river segment.
    RiverStraight,
    /// A 60° river turn.
    RiverBend,
    /// A river source or mouth.
    RiverEnd,
    /// A small dwelling.
    House,
    /// A stone tower.
    Tower,
    /// A wheel-driven mill sitting in the water.
    Watermill,
    /// A path crossing over a river.
    Bridge,
    /// A straight path segment.
    PathStraight,
    /// A 60° path turn.
    PathBend,
}

impl TileKind {
    /// Every kind, in registry order.
    ///
    /// The position of each entry matches its [`codec_index`](Self::codec_index).
    pub const ALL: [TileKind; 14] = [
        TileKind::Grass,
        TileKind::Meadow,
        TileKind::Rocks,
        TileKind::TreesSmall,
        TileKind::TreesLarge,
        TileKind::RiverStraight,
        TileKind::RiverBend,
        TileKind::RiverEnd,
        TileKind::House,
        TileKind::Tower,
        TileKind::Watermill,
        TileKind::Bridge,
        TileKind::PathStraight,
        TileKind::PathBend,
    ];

    /// The stable wire ordinal of this kind in the binary share format.
    #[inline]
    #[must_use]
    pub const fn codec_index(self) -> u8 {
        match self {
            TileKind::Grass => 0,
            TileKind::Meadow => 1,
            TileKind::Rocks => 2,
            TileKind::TreesSmall => 3,
            TileKind::TreesLarge => 4,
            TileKind::RiverStraight => 5,
            TileKind::RiverBend => 6,
            TileKind::RiverEnd => 7,
            TileKind::House => 8,
            TileKind::Tower => 9,
            TileKind::Watermill => 10,
            TileKind::Bridge => 11,
            TileKind::PathStraight => 12,
            TileKind::PathBend => 13,
        }
    }

    /// Looks up a kind from its wire ordinal.
    #[inline]
    #[must_use]
    pub const fn from_codec_index(index: u8) -> Option<TileKind> {
        match index {
            0 => Some(TileKind::Grass),
            1 => Some(TileKind::Meadow),
            2 => Some(TileKind::Rocks),
            3 => Some(TileKind::TreesSmall),
            4 => Some(TileKind::TreesLarge),
            5 => Some(TileKind::RiverStraight),
            6 => Some(TileKind::RiverBend),
            7 => Some(TileKind::RiverEnd),
            8 => Some(TileKind::House),
            9 => Some(TileKind::Tower),
            10 => Some(TileKind::Watermill),
            11 => Some(TileKind::Bridge),
            12 => Some(TileKind::PathStraight),
            13 => Some(TileKind::PathBend),
            _ => None,
        }
    }

    /// The short id used by the legacy text share format.
    #[inline]
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            TileKind::Grass => "g1",
            TileKind::Meadow => "g2",
            TileKind::Rocks => "m1",
            TileKind::TreesSmall => "t1",
            TileKind::TreesLarge => "t2",
            TileKind::RiverStraight => "r1",
            TileKind::RiverBend => "r2",
            TileKind::RiverEnd => "r3",
            TileKind::House => "h1",
            TileKind::Tower => "h2",
            TileKind::Watermill => "w1",
            TileKind::Bridge => "b1",
            TileKind::PathStraight => "p1",
            TileKind::PathBend => "p2",
        }
    }

    /// Looks up a kind from its legacy short id.
    #[inline]
    #[must_use]
    pub fn from_id(id: &str) -> Option<TileKind> {
        TileKind::ALL.into_iter().find(|kind| kind.id() == id)
    }

    /// The traits this kind carries.
    ///
    /// A kind with several traits takes part in one region universe per
    /// trait; the watermill sits in the river *and* counts as a building.
    #[inline]
    #[must_use]
    pub const fn traits(self) -> &'static [TileTrait] {
        match self {
            TileKind::Grass | TileKind::Meadow | TileKind::Rocks => &[],
            TileKind::TreesSmall | TileKind::TreesLarge => &[TileTrait::Forest],
            TileKind::RiverStraight | TileKind::RiverBend | TileKind::RiverEnd => {
                &[TileTrait::River]
            }
            TileKind::House | TileKind::Tower => &[TileTrait::Building],
            TileKind::Watermill => &[TileTrait::River, TileTrait::Building],
            TileKind::Bridge => &[TileTrait::River, TileTrait::Path],
            TileKind::PathStraight | TileKind::PathBend => &[TileTrait::Path],
        }
    }
}

impl Display for TileKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// A tile as placed in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedTile {
    /// What was placed.
    pub kind: TileKind,
    /// Where it sits.
    pub hex: Hex,
}

impl PlacedTile {
    /// Creates a placement record.
    #[inline]
    #[must_use]
    pub const fn new(kind: TileKind, hex: Hex) -> Self {
        PlacedTile { kind, hex }
    }
}
