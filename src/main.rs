//! # Blockenspiel Entry Point
//!
//! Native binary. Calls into the library's `run()` to start the game.
//!
//! For web builds, see `run_web()` in the library.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info BLOCKENSPIEL_CONFIG=blockenspiel.json cargo run --release
//! ```

fn main() {
    #[cfg(not(target_family = "wasm"))]
    blockenspiel::run();
}
