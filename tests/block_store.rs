// Integration tests for the sparse block store

use blockenspiel::game_state::voxels::{
    block::{block_type::BlockType, Block},
    store::BlockStore,
};

#[test]
fn test_unset_cells_read_as_air() {
    let store = BlockStore::new();
    assert!(store.get((0, 0, 0)).is_air());
    assert!(store.get((-1_000_000, 42, 7)).is_air());
    assert!(store.is_empty());
}

#[test]
fn test_fractional_coordinates_floor_toward_negative_infinity() {
    let mut store = BlockStore::new();
    store.set((-0.5_f32, 3.99_f32, 0.0_f32), BlockType::STONE);

    assert_eq!(store.get((-1, 3, 0)), Block::new(BlockType::STONE));
    assert!(store.get((0, 3, 0)).is_air());
    assert!(store.is_solid((-0.01_f64, 3.0_f64, 0.5_f64)));
}

#[test]
fn test_writing_air_removes_the_cell() {
    let mut store = BlockStore::new();
    store.set((2, 2, 0), BlockType::GLASS);
    assert_eq!(store.len(), 1);

    store.set((2, 2, 0), BlockType::AIR);
    assert_eq!(store.len(), 0);
    assert!(!store.contains((2, 2, 0)));
}

#[test]
fn test_unknown_tags_are_storable() {
    let mut store = BlockStore::new();
    store.set((1, 1, 1), 200_u8);

    let block = store.get((1, 1, 1));
    assert!(block.is_solid());
    assert_eq!(block.kind(), None);
    assert_eq!(block.block_type, 200);
}

#[test]
fn test_overwrite_keeps_single_entry() {
    let mut store = BlockStore::new();
    store.set((0, 5, 0), BlockType::DIRT);
    store.set((0, 5, 0), BlockType::SAND);

    assert_eq!(store.len(), 1);
    assert_eq!(store.get((0, 5, 0)).kind(), Some(BlockType::SAND));
}

#[test]
fn test_points_inside_a_cell_share_its_entry() {
    let mut store = BlockStore::new();
    store.set((1.9_f32, 2.1_f32, 0.0_f32), BlockType::ORE);

    assert_eq!(store.get((1.0_f32, 2.0_f32, 0.0_f32)), store.get((1, 2, 0)));
    assert_eq!(store.get((1, 2, 0)).kind(), Some(BlockType::ORE));
}
