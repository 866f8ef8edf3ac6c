//! # Logo World
//!
//! A small flat stage showing the game title in block letters with a credits bar
//! for each developer underneath.

use crate::game_state::voxels::{block::block_type::BlockType, store::BlockStore};

use super::{
    credits::{self, CreditEntry},
    glyphs, TerrainGenerator,
};

/// The platform covers x in `[-PLATFORM_HALF_WIDTH, PLATFORM_HALF_WIDTH)`.
const PLATFORM_HALF_WIDTH: i32 = 60;
/// Height of the platform's grass surface.
pub const PLATFORM_HEIGHT: i32 = 25;
/// Column of the first letter's left edge.
pub const LOGO_START_X: i32 = -50;
/// Row of the bottom of every letter, just above the platform.
pub const LOGO_BASE_Y: i32 = PLATFORM_HEIGHT + 1;
/// Empty columns between two letters.
const LETTER_SPACING: i32 = 2;
const CREDITS_START_X: i32 = -45;
const CREDITS_Y: i32 = 15;
/// Horizontal distance between two developers' sections.
const CREDITS_SECTION_WIDTH: i32 = 35;
const CREDITS_BAR_COLUMNS: usize = 8;
const CREDITS_BAR_ROWS: i32 = 3;

impl TerrainGenerator {
    /// Clears `store` and builds the logo world with `text` as its title.
    pub fn generate_logo_world(&mut self, store: &mut BlockStore, text: &str) {
        store.clear();

        for x in -PLATFORM_HALF_WIDTH..PLATFORM_HALF_WIDTH {
            for y in 0..=PLATFORM_HEIGHT {
                let block_type = if y <= 2 {
                    BlockType::BEDROCK
                } else if y == PLATFORM_HEIGHT {
                    BlockType::GRASS
                } else if y >= PLATFORM_HEIGHT - 2 {
                    BlockType::DIRT
                } else {
                    BlockType::STONE
                };
                store.set((x, y, 0), block_type);
            }
        }

        Self::generate_logo_text(store, text);

        let credits = credits::generate_credits(&mut self.rng);
        Self::generate_credits_display(store, &credits);

        log::info!("Logo world generated with {} blocks", store.len());
    }

    /// Stamps `text` as block glyphs starting at [`LOGO_START_X`].
    ///
    /// Glyph rows are read top-down and placed bottom-up. Letters without a pattern
    /// are skipped and do not advance the cursor.
    pub fn generate_logo_text(store: &mut BlockStore, text: &str) {
        let mut current_x = LOGO_START_X;

        for letter in text.chars() {
            let Some(glyph) = glyphs::letter_pattern(letter) else {
                log::warn!("No pattern found for letter {:?}, skipping", letter);
                continue;
            };
            let block_type = glyphs::letter_color(letter);
            log::debug!("Stamping {} at x = {} with {:?}", letter, current_x, block_type);

            let rows = glyph.len() as i32;
            for (col, row) in glyphs::filled_cells(glyph) {
                let x = current_x + col as i32;
                let y = LOGO_BASE_Y + (rows - 1 - row as i32);
                store.set((x, y, 0), block_type);
            }

            current_x += glyphs::glyph_width(glyph) as i32 + LETTER_SPACING;
        }
    }

    /// Draws one section per developer: a name marker row and a role bar.
    ///
    /// The marker has one block per letter of the name, two cells apart. The bar has
    /// up to eight columns, three rows tall; each column stands for
    /// `ceil(roles / 8)` roles and is only drawn if it has any.
    pub fn generate_credits_display(store: &mut BlockStore, credits: &[CreditEntry]) {
        let mut start_x = CREDITS_START_X;

        for entry in credits {
            for i in 0..entry.name.chars().count() as i32 {
                store.set((start_x + 2 * i, CREDITS_Y + 5, 0), entry.color);
            }

            let role_count = entry.roles.len();
            let roles_per_column = role_count.div_ceil(CREDITS_BAR_COLUMNS);
            for col in 0..CREDITS_BAR_COLUMNS {
                if col * roles_per_column < role_count {
                    for row in 0..CREDITS_BAR_ROWS {
                        store.set((start_x + col as i32, CREDITS_Y + row, 0), entry.color);
                    }
                }
            }

            start_x += CREDITS_SECTION_WIDTH;
        }
    }
}
