use hamlet_lib::geometry::Hex;
use hamlet_lib::tiles::{
    trait_regions, trait_regions_for, PlacedTile, TileKind, TileTrait, WorldMap,
};
use itertools::Itertools;

fn world(tiles: &[(TileKind, Hex)]) -> WorldMap {
    tiles
        .iter()
        .map(|&(kind, hex)| (hex, PlacedTile::new(kind, hex)))
        .collect()
}

/// Region sizes for one trait, smallest first.
fn sizes(world: &WorldMap, tile_trait: TileTrait) -> Vec<usize> {
    trait_regions_for(world, tile_trait)
        .iter()
        .map(|region| region.size())
        .sorted()
        .collect()
}

#[test]
fn edge_adjacent_tiles_share_a_region() {
    let world = world(&[
        (TileKind::TreesSmall, Hex::from_axial(0, 0)),
        (TileKind::TreesLarge, Hex::from_axial(1, 0)),
    ]);

    let regions = trait_regions_for(&world, TileTrait::Forest);

    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].size(), 2);
    assert!(regions[0].contains(Hex::from_axial(0, 0)));
    assert!(regions[0].contains(Hex::from_axial(1, 0)));
}

#[test]
fn distant_tiles_stay_in_separate_regions() {
    let world = world(&[
        (TileKind::TreesSmall, Hex::from_axial(0, 0)),
        (TileKind::TreesSmall, Hex::from_axial(3, 0)),
    ]);

    assert_eq!(sizes(&world, TileTrait::Forest), vec![1, 1]);
}

#[test]
fn a_different_trait_does_not_bridge_a_gap() {
    // A house sits between two woods; the woods stay split and the house
    // forms its own building region.
    let world = world(&[
        (TileKind::TreesSmall, Hex::from_axial(0, 0)),
        (TileKind::House, Hex::from_axial(1, 0)),
        (TileKind::TreesLarge, Hex::from_axial(2, 0)),
    ]);

    assert_eq!(sizes(&world, TileTrait::Forest), vec![1, 1]);
    assert_eq!(sizes(&world, TileTrait::Building), vec![1]);
}

#[test]
fn diagonal_neighbors_do_not_connect() {
    let center = Hex::from_axial(0, 0);
    let diagonal = center.diagonal_neighbor(0);

    let world = world(&[
        (TileKind::RiverStraight, center),
        (TileKind::RiverStraight, diagonal),
    ]);

    assert_eq!(sizes(&world, TileTrait::River), vec![1, 1]);
}

#[test]
fn a_multi_trait_tile_joins_one_region_per_trait() {
    let world = world(&[(TileKind::Watermill, Hex::from_axial(0, 0))]);

    let regions = trait_regions(&world);

    assert_eq!(regions.len(), 2);
    let traits: Vec<TileTrait> = regions.iter().map(|region| region.tile_trait).collect();
    assert!(traits.contains(&TileTrait::River));
    assert!(traits.contains(&TileTrait::Building));
    assert!(regions.iter().all(|region| region.size() == 1));
}

#[test]
fn a_watermill_extends_the_river_it_sits_in() {
    let world = world(&[
        (TileKind::RiverStraight, Hex::from_axial(0, 0)),
        (TileKind::Watermill, Hex::from_axial(1, 0)),
        (TileKind::RiverStraight, Hex::from_axial(2, 0)),
        (TileKind::House, Hex::from_axial(1, -1)),
    ]);

    // One river of three; the mill and the house make a building pair.
    assert_eq!(sizes(&world, TileTrait::River), vec![3]);
    assert_eq!(sizes(&world, TileTrait::Building), vec![2]);
}

#[test]
fn a_bridge_carries_both_the_river_and_the_path() {
    let bridge = Hex::from_axial(0, 0);
    let world = world(&[
        (TileKind::RiverStraight, bridge.neighbor(0)),
        (TileKind::Bridge, bridge),
        (TileKind::RiverStraight, bridge.neighbor(3)),
        (TileKind::PathStraight, bridge.neighbor(1)),
        (TileKind::PathStraight, bridge.neighbor(4)),
    ]);

    assert_eq!(sizes(&world, TileTrait::River), vec![3]);
    assert_eq!(sizes(&world, TileTrait::Path), vec![3]);
}

#[test]
fn a_ring_closes_into_one_region() {
    let ring: Vec<(TileKind, Hex)> = (0..6)
        .map(|direction| (TileKind::PathBend, Hex::from_axial(0, 0).neighbor(direction)))
        .collect();
    let world = world(&ring);

    assert_eq!(sizes(&world, TileTrait::Path), vec![6]);
}

#[test]
fn analysis_does_not_mutate_the_world() {
    let tiles = [
        (TileKind::TreesSmall, Hex::from_axial(0, 0)),
        (TileKind::RiverEnd, Hex::from_axial(1, 0)),
    ];
    let map = world(&tiles);

    let _ = trait_regions(&map);
    let _ = trait_regions(&map);

    assert_eq!(map.len(), 2);
    for (kind, hex) in tiles {
        assert_eq!(map.get(&hex), Some(&PlacedTile::new(kind, hex)));
    }
}

#[test]
fn repeated_analysis_of_one_map_agrees() {
    let mut tiles = Vec::new();
    for (i, hex) in Hex::from_axial(0, 0).range(3).enumerate() {
        let kind = TileKind::ALL[i % TileKind::ALL.len()];
        tiles.push((kind, hex));
    }
    let map = world(&tiles);

    let first = trait_regions(&map);
    let second = trait_regions(&map);

    assert_eq!(first, second);
}

#[test]
fn region_tiles_are_actually_connected() {
    let mut tiles = Vec::new();
    for (i, hex) in Hex::from_axial(0, 0).range(4).enumerate() {
        if i % 3 != 0 {
            tiles.push((TileKind::TreesLarge, hex));
        }
    }
    let map = world(&tiles);

    for region in trait_regions_for(&map, TileTrait::Forest) {
        for &hex in &region.tiles {
            // Every tile except a singleton must touch another member.
            if region.size() > 1 {
                assert!(
                    hex.all_neighbors()
                        .into_iter()
                        .any(|neighbor| region.contains(neighbor)),
                    "{hex} is stranded in its region"
                );
            }
        }
    }
}
