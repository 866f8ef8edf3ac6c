//! # Letter Glyphs
//!
//! Block letter patterns for the logo world. Each glyph is seven rows tall and
//! three to five columns wide, written top row first; `#` places a block and `.`
//! leaves the cell empty.

use phf::phf_map;

use crate::game_state::voxels::block::block_type::BlockType;

/// A glyph as rows of `#` and `.`, top row first.
pub type Glyph = &'static [&'static str];

/// Number of rows in every glyph.
pub const GLYPH_HEIGHT: usize = 7;

const B: Glyph = &["####.", "#...#", "#...#", "####.", "#...#", "#...#", "####."];
const C: Glyph = &[".###.", "#...#", "#....", "#....", "#....", "#...#", ".###."];
const E: Glyph = &["#####", "#....", "#....", "####.", "#....", "#....", "#####"];
const I: Glyph = &["###", ".#.", ".#.", ".#.", ".#.", ".#.", "###"];
const K: Glyph = &["#...#", "#..#.", "#.#..", "##...", "#.#..", "#..#.", "#...#"];
const L: Glyph = &["#...", "#...", "#...", "#...", "#...", "#...", "####"];
const N: Glyph = &["#...#", "##..#", "#.#.#", "#..##", "#...#", "#...#", "#...#"];
const O: Glyph = &[".###.", "#...#", "#...#", "#...#", "#...#", "#...#", ".###."];
const P: Glyph = &["####.", "#...#", "#...#", "####.", "#....", "#....", "#...."];
const S: Glyph = &[".###.", "#...#", "#....", ".###.", "....#", "#...#", ".###."];

static LETTER_PATTERNS: phf::Map<char, Glyph> = phf_map! {
    'B' => B,
    'C' => C,
    'E' => E,
    'I' => I,
    'K' => K,
    'L' => L,
    'N' => N,
    'O' => O,
    'P' => P,
    'S' => S,
};

static LETTER_COLORS: phf::Map<char, BlockType> = phf_map! {
    'B' => BlockType::ORE,
    'L' => BlockType::GRASS,
    'O' => BlockType::GLASS,
    'C' => BlockType::VEHICLE,
    'K' => BlockType::CRYSTAL,
    'E' => BlockType::LEAVES,
    'N' => BlockType::SAND,
    'S' => BlockType::WINDOW,
    'P' => BlockType::SNOW,
    'I' => BlockType::INTERIOR,
};

/// Looks up the pattern of `letter`.
pub fn letter_pattern(letter: char) -> Option<Glyph> {
    LETTER_PATTERNS.get(&letter).copied()
}

/// Block type a letter is drawn with, [`BlockType::DEFAULT`] for letters without
/// an assigned color.
pub fn letter_color(letter: char) -> BlockType {
    LETTER_COLORS
        .get(&letter)
        .copied()
        .unwrap_or(BlockType::DEFAULT)
}

/// Width of a glyph in cells.
pub fn glyph_width(glyph: Glyph) -> usize {
    glyph.first().map_or(0, |row| row.len())
}

/// Iterates over the filled cells of a glyph as `(column, row)`, row 0 on top.
pub fn filled_cells(glyph: Glyph) -> impl Iterator<Item = (usize, usize)> {
    glyph.iter().enumerate().flat_map(|(row, line)| {
        line.bytes()
            .enumerate()
            .filter(|(_, cell)| *cell == b'#')
            .map(move |(col, _)| (col, row))
    })
}
