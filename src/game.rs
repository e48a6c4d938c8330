//! Session state and frame stepping, independent of any browser APIs.
//!
//! [`GameState`] owns everything one frame reads or writes. The host either
//! calls [`GameState::step`] once per display frame or hands elapsed time to
//! [`advance`], which runs a fixed 60 Hz step count.

use crate::config::{Bounds, GameConfig};
use crate::input::InputState;
use crate::level::{self, Level};
use crate::physics::{self, Player, StepEvents};

/// Duration of one physics frame in milliseconds.
pub const FRAME_MS: f64 = 1000.0 / 60.0;
/// Upper bound on frames run by a single [`advance`] call (tab switches etc).
pub const MAX_CATCH_UP: u32 = 4;

pub const CLASSIC_STATUS: &str = "Use ←/→ or A/D to move, ↑/W/Space to jump";

/// Which front-end the session runs under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// One fixed level and an instructions line.
    Classic,
    /// Menu of levels; the status line shows the level number.
    LevelSelect,
}

/// Converts elapsed wall time into whole physics frames.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct FrameClock {
    pending_ms: f64,
    primed: bool,
    frames: u64,
}

impl FrameClock {
    /// Number of frames due after `dt_ms`. The first call after a reset runs
    /// exactly one frame regardless of `dt_ms`.
    ///
    /// The accumulator sits half a frame ahead, so display deltas jittering
    /// around [`FRAME_MS`] still yield one frame per callback.
    fn due(&mut self, dt_ms: f64) -> u32 {
        if !self.primed {
            self.primed = true;
            self.pending_ms = FRAME_MS * 0.5;
            return 1;
        }
        self.pending_ms += dt_ms.max(0.0);
        let whole = (self.pending_ms / FRAME_MS).floor();
        if whole >= MAX_CATCH_UP as f64 {
            // Drop the backlog rather than fast-forwarding through it.
            self.pending_ms = FRAME_MS * 0.5;
            return MAX_CATCH_UP;
        }
        self.pending_ms -= whole * FRAME_MS;
        whole as u32
    }

    fn reset(&mut self) {
        self.pending_ms = 0.0;
        self.primed = false;
    }
}

#[derive(Clone, Debug)]
pub struct GameState {
    pub config: GameConfig,
    pub mode: Mode,
    pub levels: Vec<Level>,
    pub level_index: usize,
    pub player: Player,
    clock: FrameClock,
}

impl GameState {
    fn new(config: GameConfig, mode: Mode, levels: Vec<Level>) -> Self {
        assert!(!levels.is_empty(), "a session needs at least one level");
        Self {
            player: Player::spawn(&config.player, config.bounds),
            config,
            mode,
            levels,
            level_index: 0,
            clock: FrameClock::default(),
        }
    }

    /// Single hard-coded level.
    pub fn classic(config: GameConfig) -> Self {
        let levels = vec![level::classic(config.bounds)];
        Self::new(config, Mode::Classic, levels)
    }

    /// All built-in levels, starting on the first.
    pub fn level_select(config: GameConfig) -> Self {
        let levels = level::levels(config.bounds);
        Self::new(config, Mode::LevelSelect, levels)
    }

    pub fn bounds(&self) -> Bounds {
        self.config.bounds
    }

    pub fn level(&self) -> &Level {
        &self.levels[self.level_index]
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Frames stepped since the session was created.
    pub fn frames(&self) -> u64 {
        self.clock.frames
    }

    /// Activate level `index` and put the player back on its spawn point.
    ///
    /// Panics on an out-of-range index: indices only come from the fixed set
    /// of menu buttons.
    pub fn select_level(&mut self, index: usize) {
        assert!(
            index < self.levels.len(),
            "level index {index} out of range (have {})",
            self.levels.len()
        );
        self.level_index = index;
        self.reset_player();
        log::info!(
            "starting level {} ({})",
            index + 1,
            self.levels[index].name
        );
    }

    pub fn reset_player(&mut self) {
        self.player = Player::spawn(&self.config.player, self.config.bounds);
        self.clock.reset();
    }

    /// Swap physics and player tuning. Bounds stay tied to the canvas and
    /// the player restarts with the new body.
    pub fn reconfigure(&mut self, config: GameConfig) {
        self.config.physics = config.physics;
        self.config.player = config.player;
        self.reset_player();
    }

    /// Run exactly one physics frame against the active level.
    pub fn step(&mut self, input: &InputState) -> StepEvents {
        let idx = self.level_index;
        let ev = physics::step(
            &self.config,
            self.levels[idx].platforms(),
            &mut self.player,
            input,
        );
        self.clock.frames += 1;
        ev
    }

    /// Step as many fixed frames as `dt_ms` covers; returns how many ran.
    pub fn advance_by(&mut self, input: &InputState, dt_ms: f64) -> u32 {
        let due = self.clock.due(dt_ms);
        for _ in 0..due {
            self.step(input);
        }
        due
    }

    /// Text drawn in the top-left corner.
    pub fn status_line(&self) -> String {
        match self.mode {
            Mode::Classic => CLASSIC_STATUS.to_owned(),
            Mode::LevelSelect => format!("Playing Level {}", self.level_index + 1),
        }
    }
}

/// Pure stepping function: consume `state`, run the frames `dt_ms` covers
/// with `input` held, and return the new state.
pub fn advance(mut state: GameState, input: &InputState, dt_ms: f64) -> GameState {
    state.advance_by(input, dt_ms);
    state
}
