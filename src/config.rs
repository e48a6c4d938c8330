//! Tunable constants for the canvas, the physics step and the player body.
//!
//! Defaults give the classic feel: 0.5 px/frame²
//! gravity, 0.8 friction, a −10 jump impulse and a 3 px/frame speed cap.

/// Canvas size in pixels. Matches the canvas element's configured width/height.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(600.0, 400.0)
    }
}

/// Per-frame physics constants. All values are in pixels and frames.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PhysicsConfig {
    pub gravity: f64,
    pub friction: f64,
    /// Upward velocity applied on jump (stored positive, applied as −impulse).
    pub jump_impulse: f64,
    /// Horizontal velocity change per frame while a direction is held.
    pub move_step: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            friction: 0.8,
            jump_impulse: 10.0,
            move_step: 1.0,
        }
    }
}

/// Player body size, speed cap and spawn point.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlayerConfig {
    pub width: f64,
    pub height: f64,
    pub speed: f64,
    pub spawn_x: f64,
    /// Spawn y measured upward from the bottom edge of the canvas.
    pub spawn_from_bottom: f64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            width: 30.0,
            height: 50.0,
            speed: 3.0,
            spawn_x: 50.0,
            spawn_from_bottom: 70.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub bounds: Bounds,
    pub physics: PhysicsConfig,
    pub player: PlayerConfig,
}

impl GameConfig {
    pub fn with_bounds(bounds: Bounds) -> Self {
        Self {
            bounds,
            ..Self::default()
        }
    }

    /// Parse a (possibly partial) config; missing fields keep their defaults.
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_tuning() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.bounds, Bounds::new(600.0, 400.0));
        assert_eq!(cfg.physics.gravity, 0.5);
        assert_eq!(cfg.physics.friction, 0.8);
        assert_eq!(cfg.physics.jump_impulse, 10.0);
        assert_eq!(cfg.player.speed, 3.0);
        assert_eq!((cfg.player.width, cfg.player.height), (30.0, 50.0));
    }

    #[test]
    fn with_bounds_keeps_physics_defaults() {
        let cfg = GameConfig::with_bounds(Bounds::new(800.0, 300.0));
        assert_eq!(cfg.bounds.width, 800.0);
        assert_eq!(cfg.physics, PhysicsConfig::default());
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn partial_json_overrides_only_named_fields() {
        let cfg = GameConfig::from_json(r#"{ "physics": { "gravity": 0.25 } }"#).unwrap();
        assert_eq!(cfg.physics.gravity, 0.25);
        assert_eq!(cfg.physics.friction, 0.8);
        assert_eq!(cfg.player, PlayerConfig::default());
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn malformed_json_is_rejected() {
        assert!(GameConfig::from_json("{ physics: ").is_err());
    }
}
