// Invariant sweeps across every built-in level with scripted key sequences.

use canvas_platformer::{Action, GameConfig, GameState, InputState};

/// Deterministic pseudo-random held-key pattern (LCG, no rng dependency).
fn scripted_inputs(seed: u64, frames: usize) -> Vec<InputState> {
    let mut state = seed;
    let mut out = Vec::with_capacity(frames);
    let mut current = InputState::default();
    for frame in 0..frames {
        if frame % 7 == 0 {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let bits = (state >> 33) as u8;
            current = InputState {
                left: bits & 1 != 0,
                right: bits & 2 != 0,
                jump: bits & 4 != 0,
            };
        }
        out.push(current);
    }
    out
}

#[test]
fn player_stays_inside_canvas_on_every_level() {
    let mut game = GameState::level_select(GameConfig::default());
    let b = game.bounds();
    for idx in 0..game.level_count() {
        game.select_level(idx);
        for (frame, input) in scripted_inputs(idx as u64 + 1, 2_000).iter().enumerate() {
            game.step(input);
            let p = &game.player;
            assert!(p.x >= 0.0 && p.x <= b.width - p.width, "level {idx} frame {frame}: x={}", p.x);
            assert!(p.y + p.height <= b.height, "level {idx} frame {frame}: y={}", p.y);
            // One step past the cap at most, then friction.
            let limit = (p.speed + game.config.physics.move_step) * game.config.physics.friction;
            assert!(p.vel_x.abs() < limit, "level {idx} frame {frame}: vx={}", p.vel_x);
        }
    }
}

#[test]
fn grounded_player_is_resting_on_a_surface() {
    let mut game = GameState::level_select(GameConfig::default());
    let b = game.bounds();
    for idx in 0..game.level_count() {
        game.select_level(idx);
        for input in scripted_inputs(99 + idx as u64, 1_000) {
            game.step(&input);
            if game.player.is_grounded() {
                let bottom = game.player.y + game.player.height;
                let on_platform = game.level().platforms().iter().any(|p| p.y == bottom);
                assert!(on_platform || bottom == b.height, "floating at bottom={bottom}");
                assert_eq!(game.player.vel_y, 0.0);
            }
        }
    }
}

#[test]
fn free_fall_adds_gravity_each_frame() {
    let mut game = GameState::classic(GameConfig::default());
    game.step(&InputState::holding(&[Action::Jump]));
    let mut prev = game.player.vel_y;
    // Rising phase never overlaps anything with vel_y > 0.
    while game.player.vel_y < 0.0 {
        game.step(&InputState::default());
        assert_eq!(game.player.vel_y, prev + 0.5);
        prev = game.player.vel_y;
    }
}
