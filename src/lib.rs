//! Canvas Platformer core crate.
//!
//! A player rectangle runs and jumps across static platforms on a 2D canvas.
//! `start_game()` runs the classic single-level mode; `start_level_select()`
//! shows a menu of five levels. Physics, input mapping, levels and rendering
//! are plain Rust and can be driven natively through [`GameState`].

use wasm_bindgen::prelude::*;

pub mod config;
pub mod game;
pub mod input;
pub mod level;
pub mod physics;
pub mod render;
mod web;

pub use config::{Bounds, GameConfig, PhysicsConfig, PlayerConfig};
pub use game::{GameState, Mode, advance};
pub use input::{Action, InputState, KeyState};
pub use level::{Level, Platform};
pub use physics::{Player, Rect, StepEvents};
pub use web::{start_game, start_level, start_level_select};

#[cfg(feature = "serde_json")]
pub use web::configure;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // Fails only if a logger is already installed.
    let _ = console_log::init_with_level(level);
}
