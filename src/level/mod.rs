//! Static platform layouts. Each level lives in its own file and is built
//! against the canvas bounds, since every layout has a full-width floor and
//! offsets measured up from the bottom edge.

use crate::config::Bounds;
use crate::physics::Rect;

mod level1;
mod level2;
mod level3;
mod level4;
mod level5;

/// Thickness of the full-width floor platform every level starts with.
pub const FLOOR_HEIGHT: f64 = 20.0;
/// Thickness of a regular ledge.
pub const LEDGE_HEIGHT: f64 = 15.0;

/// Static solid rectangle the player can land on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Platform {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Platform {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Full-width floor along the bottom edge.
    pub fn floor(bounds: Bounds) -> Self {
        Self::new(0.0, bounds.height - FLOOR_HEIGHT, bounds.width, FLOOR_HEIGHT)
    }

    /// Ledge whose top sits `rise` pixels above the bottom edge.
    pub fn ledge(bounds: Bounds, x: f64, rise: f64, width: f64) -> Self {
        Self::new(x, bounds.height - rise, width, LEDGE_HEIGHT)
    }
}

/// Immutable, ordered platform layout. `name` is for logs; the number shown
/// to the player is the level's 1-based position in [`levels`].
#[derive(Clone, Debug, PartialEq)]
pub struct Level {
    pub name: &'static str,
    pub platforms: Vec<Platform>,
}

impl Level {
    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }
}

/// Layout used by the single-level classic mode.
pub fn classic(bounds: Bounds) -> Level {
    level1::level1(bounds)
}

/// All selectable levels, in menu order.
pub fn levels(bounds: Bounds) -> Vec<Level> {
    vec![
        level1::level1(bounds),
        level2::level2(bounds),
        level3::level3(bounds),
        level4::level4(bounds),
        level5::level5(bounds),
    ]
}
