// Integration tests (native) for the `canvas-platformer` crate.
// These tests avoid wasm-specific functionality and drive the game through its
// public state API so they can run under `cargo test` on the host.

use canvas_platformer::{Action, GameConfig, GameState, InputState, KeyState, Player, advance, level};

fn idle() -> InputState {
    InputState::default()
}

#[test]
fn jump_from_spawn_scenario() {
    let mut game = GameState::classic(GameConfig::default());
    let h = game.bounds().height;
    assert_eq!((game.player.x, game.player.y), (50.0, h - 70.0));
    assert_eq!((game.player.vel_x, game.player.vel_y), (0.0, 0.0));

    let ev = game.step(&InputState::holding(&[Action::Jump]));
    assert!(ev.jumped);
    assert!(game.player.jumping);
    assert_eq!(game.player.vel_y, -9.5);
}

#[test]
fn selecting_level_three_swaps_platforms_and_respawns() {
    let mut game = GameState::level_select(GameConfig::default());
    for _ in 0..40 {
        game.step(&InputState::holding(&[Action::MoveRight, Action::Jump]));
    }
    game.select_level(2);
    assert_eq!(game.level_index, 2);
    assert_eq!(game.player, Player::spawn(&game.config.player, game.bounds()));
    assert_eq!(game.level(), &level::levels(game.bounds())[2]);
}

#[test]
fn running_jump_lands_on_first_ledge() {
    let mut game = GameState::classic(GameConfig::default());
    for frame in 0..120 {
        let mut input = idle();
        input.right = frame < 25;
        input.jump = frame == 0;
        game.step(&input);
    }
    let ledge = game.level().platforms[1];
    assert_eq!(game.player.y + game.player.height, ledge.y);
    assert!(game.player.is_grounded());
}

#[test]
fn keyboard_codes_drive_the_step() {
    let mut game = GameState::classic(GameConfig::default());
    let mut keys = KeyState::new();
    keys.press("KeyD");
    for _ in 0..10 {
        game.step(&keys.actions());
    }
    assert!(game.player.x > 50.0);
    keys.release("KeyD");
    keys.press("ArrowLeft");
    let x = game.player.x;
    for _ in 0..10 {
        game.step(&keys.actions());
    }
    assert!(game.player.x < x);
}

#[test]
fn advance_runs_whole_frames_for_elapsed_time() {
    let game = GameState::classic(GameConfig::default());
    let game = advance(game, &idle(), 1000.0);
    assert_eq!(game.frames(), 1);
    let game = advance(game, &idle(), 51.0);
    assert_eq!(game.frames(), 4);
}
