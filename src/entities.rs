/// All game entity types — pure data, no logic.

use crate::config::GameConfig;

/// The direction currently held by the player, sampled once per tick by the
/// host (last-write-wins). `Neutral` is the default so a missing or
/// unrecognized input degrades to "no movement" instead of failing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ControlInput {
    Left,
    Right,
    #[default]
    Neutral,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// A descending OZN. Spawned just above the top edge with `id` taken from
/// the frame clock at the spawn decision.
#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub id: u64,
    pub x: f32,
    pub y: f32,
}

/// An upward-moving shot. `id` comes from the host's high-resolution clock
/// at fire time.
#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub id: u64,
    pub x: f32,
    pub y: f32,
}

/// The entire simulation state. Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    /// Left edge of the ship; clamped to `[0, viewport_w - ship_w]`.
    pub ship_x: f32,
    pub enemies: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,
    /// Always a multiple of `config.score_per_kill`.
    pub score: u32,
    pub status: GameStatus,
    /// Frame-clock value of the last enemy spawn (0 before the first one).
    pub last_spawn_time: u64,
    pub config: GameConfig,
}
