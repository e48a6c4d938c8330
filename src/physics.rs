//! Per-frame player physics: input intent, gravity, friction, Euler
//! integration, landing on platforms and clamping to the canvas.
//!
//! Only downward collisions are resolved. The player passes through platform
//! sides and undersides and lands on top when falling.

use crate::config::{Bounds, GameConfig, PhysicsConfig, PlayerConfig};
use crate::input::InputState;
use crate::level::Platform;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// AABB overlap. Touching edges count as overlapping, which is what keeps
    /// a resting player snapped to the platform it stands on.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(other.x > self.x + self.width
            || other.x + other.width < self.x
            || other.y > self.y + self.height
            || other.y + other.height < self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Player {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub vel_x: f64,
    pub vel_y: f64,
    pub speed: f64,
    /// True while airborne.
    pub jumping: bool,
}

impl Player {
    /// Player at rest on its spawn point.
    pub fn spawn(cfg: &PlayerConfig, bounds: Bounds) -> Self {
        Self {
            x: cfg.spawn_x,
            y: bounds.height - cfg.spawn_from_bottom,
            width: cfg.width,
            height: cfg.height,
            vel_x: 0.0,
            vel_y: 0.0,
            speed: cfg.speed,
            jumping: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn is_grounded(&self) -> bool {
        !self.jumping
    }
}

/// Airborne-state transitions produced by one [`step`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepEvents {
    pub jumped: bool,
    pub landed: bool,
}

/// Advance the player by exactly one frame against `platforms`.
pub fn step(
    cfg: &GameConfig,
    platforms: &[Platform],
    player: &mut Player,
    input: &InputState,
) -> StepEvents {
    let phys = &cfg.physics;
    let mut ev = StepEvents::default();
    let was_airborne = player.jumping;

    apply_intent(phys, player, input);

    if input.jump && !player.jumping {
        player.vel_y = -phys.jump_impulse;
        player.jumping = true;
        ev.jumped = true;
        log::trace!("jump at ({:.1}, {:.1})", player.x, player.y);
    }

    player.vel_y += phys.gravity;
    player.vel_x *= phys.friction;

    player.x += player.vel_x;
    player.y += player.vel_y;

    // Airborne unless a platform or the floor catches us below.
    player.jumping = true;
    for platform in platforms {
        if player.rect().overlaps(&platform.rect()) && player.vel_y > 0.0 {
            player.y = platform.y - player.height;
            player.vel_y = 0.0;
            player.jumping = false;
        }
    }

    clamp_to_bounds(player, cfg.bounds);

    if was_airborne && !player.jumping && !ev.jumped {
        ev.landed = true;
        log::trace!("landed at ({:.1}, {:.1})", player.x, player.y);
    }
    ev
}

/// Step horizontal velocity toward the held direction. The cap is a strict
/// guard, not a clamp: a step taken just below the cap may land above it, but
/// a velocity already at or past the cap is never pushed further out.
pub(crate) fn apply_intent(phys: &PhysicsConfig, player: &mut Player, input: &InputState) {
    if input.left && player.vel_x > -player.speed {
        player.vel_x -= phys.move_step;
    }
    if input.right && player.vel_x < player.speed {
        player.vel_x += phys.move_step;
    }
}

/// Keep the player inside the canvas horizontally and above its bottom edge.
/// The top edge is open.
pub fn clamp_to_bounds(player: &mut Player, bounds: Bounds) {
    if player.x < 0.0 {
        player.x = 0.0;
    }
    if player.x + player.width > bounds.width {
        player.x = bounds.width - player.width;
    }
    if player.y + player.height > bounds.height {
        player.y = bounds.height - player.height;
        player.vel_y = 0.0;
        player.jumping = false;
    }
}
