// Integration tests for world generation: open terrain, biomes and the logo world

use blockenspiel::{
    config::{TerrainKind, WorldConfig},
    game_state::voxels::{
        block::{block_type::BlockType, Block},
        generation::{
            logo::{LOGO_BASE_Y, LOGO_START_X, PLATFORM_HEIGHT},
            TerrainGenerator,
        },
        store::BlockStore,
        world::{World, WorldMode},
    },
};

fn world_config(terrain: TerrainKind, half_span: i32, seed: u64) -> WorldConfig {
    WorldConfig {
        terrain,
        half_span,
        biome_half_span: half_span,
        seed: Some(seed),
        ..Default::default()
    }
}

#[test]
fn test_same_seed_same_city() {
    let config = world_config(TerrainKind::City, 60, 1234);
    let first = World::open_terrain(&config);
    let second = World::open_terrain(&config);

    assert_eq!(first.store().len(), second.store().len());
    for (pos, block) in first.store().iter() {
        assert_eq!(second.get_block(pos), block, "mismatch at {:?}", pos);
    }
}

#[test]
fn test_every_column_has_bedrock_floor() {
    let world = World::open_terrain(&world_config(TerrainKind::City, 30, 9));

    for x in -30..30 {
        for y in 0..=2 {
            assert_eq!(
                world.get_block((x, y, 0)),
                Block::new(BlockType::BEDROCK),
                "column {} row {}",
                x,
                y
            );
        }
    }
}

#[test]
fn test_ground_height_follows_sine_profile() {
    assert_eq!(TerrainGenerator::ground_height(0), 20);
    // 20 + 5 * sin(1.56) is just under 25
    assert_eq!(TerrainGenerator::ground_height(78), 24);
    assert_eq!(TerrainGenerator::ground_height(-78), 15);
}

#[test]
fn test_biome_world_is_generated_on_three_dimensional_grid() {
    let world = World::open_terrain(&world_config(TerrainKind::Biome, 12, 77));
    assert_eq!(world.mode(), WorldMode::OpenTerrain(TerrainKind::Biome));

    let off_plane = world.store().iter().any(|(pos, _)| pos.z != 0);
    assert!(off_plane);
    assert!(world
        .store()
        .iter()
        .all(|(_, block)| block.is_solid()));
}

#[test]
fn test_logo_world_stamps_first_letter_in_gold() {
    let config = WorldConfig {
        logo_text: String::from("BLOCKENSPIEL"),
        seed: Some(4),
        ..Default::default()
    };
    let world = World::logo(&config);
    let top_row = LOGO_BASE_Y + 6;

    // B's top row is "####."
    for x in LOGO_START_X..LOGO_START_X + 4 {
        assert_eq!(world.get_block((x, top_row, 0)), Block::new(BlockType::ORE));
    }
    assert!(world.get_block((LOGO_START_X + 4, top_row, 0)).is_air());

    // L starts one glyph width plus spacing later
    assert_eq!(
        world.get_block((LOGO_START_X + 7, LOGO_BASE_Y, 0)),
        Block::new(BlockType::GRASS)
    );
}

#[test]
fn test_logo_platform_surface_is_grass() {
    let mut store = BlockStore::new();
    let mut generator = TerrainGenerator::new(Some(8));
    generator.generate_logo_world(&mut store, "");

    assert_eq!(store.get((0, PLATFORM_HEIGHT, 0)), Block::new(BlockType::GRASS));
    assert_eq!(store.get((-60, 0, 0)), Block::new(BlockType::BEDROCK));
    assert!(store.get((60, 0, 0)).is_air());
}

#[test]
fn test_unknown_letters_do_not_advance_cursor() {
    let mut with_gap = BlockStore::new();
    let mut without_gap = BlockStore::new();

    TerrainGenerator::generate_logo_text(&mut with_gap, "B?O");
    TerrainGenerator::generate_logo_text(&mut without_gap, "BO");

    assert_eq!(with_gap.len(), without_gap.len());
    for (pos, block) in without_gap.iter() {
        assert_eq!(with_gap.get(pos), block);
    }
}
