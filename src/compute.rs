/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (and, where needed, an RNG handle plus the host's clock) and
/// returns a brand-new `GameState`.  Side effects are limited to the injected
/// RNG; the engine keeps no timers of its own.

use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{ControlInput, Enemy, GameState, GameStatus, Projectile};

// ── Geometry ─────────────────────────────────────────────────────────────────

/// Axis-aligned bounding-box overlap, open at the edges (touching rectangles
/// do not collide).
fn aabb_overlap(
    ax: f32, ay: f32, aw: f32, ah: f32,
    bx: f32, by: f32, bw: f32, bh: f32,
) -> bool {
    ax < bx + bw && ax + aw > bx && ay < by + bh && ay + ah > by
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial game state: ship centered, empty entity sets, score 0.
pub fn init_state(config: GameConfig) -> GameState {
    GameState {
        ship_x: config.viewport_w / 2.0 - config.ship_w / 2.0,
        enemies: Vec::new(),
        projectiles: Vec::new(),
        score: 0,
        status: GameStatus::Playing,
        last_spawn_time: 0,
        config,
    }
}

/// Reset to the start-of-match state.  Identical to `init_state`; the name
/// marks the one legal GameOver → Playing transition.
pub fn restart(config: GameConfig) -> GameState {
    init_state(config)
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Fire one projectile from the ship's top-center.  `now` is a
/// host-supplied high-resolution timestamp used as the projectile id; fire
/// is user-paced, so unlike enemy spawns it does not need the frame clock.
pub fn fire(state: &GameState, now: u64) -> GameState {
    if state.status == GameStatus::GameOver {
        return state.clone();
    }
    let cfg = &state.config;
    let projectile = Projectile {
        id: now,
        x: state.ship_x + cfg.ship_w / 2.0 - cfg.projectile_w / 2.0,
        y: cfg.ship_y(),
    };
    let mut projectiles = state.projectiles.clone();
    projectiles.push(projectile);
    GameState {
        projectiles,
        ..state.clone()
    }
}

// ── Per-frame tick (nearly pure — RNG and clock are injected) ───────────────

/// Advance the simulation by one frame.
///
/// `frame_time` is the host's monotonically increasing frame clock (ms); it
/// drives the spawn cadence and doubles as the spawned enemy's id, so the
/// host must never call `tick` twice with the same value.  All randomness
/// comes through `rng` so callers control determinism.
///
/// Pipeline, in contract order: ship motion → spawn → enemy motion (with
/// ship-collision check) → projectile motion → projectile/enemy resolution.
/// Once `status` is GameOver the whole function is a no-op.
pub fn tick(
    state: &GameState,
    input: ControlInput,
    frame_time: u64,
    rng: &mut impl Rng,
) -> GameState {
    if state.status == GameStatus::GameOver {
        return state.clone();
    }
    let cfg = &state.config;

    // ── 1. Move the ship, clamped to the viewport ────────────────────────────
    let ship_x = match input {
        ControlInput::Left => (state.ship_x - cfg.ship_speed).max(0.0),
        ControlInput::Right => (state.ship_x + cfg.ship_speed).min(cfg.ship_max_x()),
        ControlInput::Neutral => state.ship_x,
    };

    // ── 2. Spawn one enemy when the cadence allows ───────────────────────────
    // At most one per tick: no catch-up spawning after dropped frames.
    let mut enemies = state.enemies.clone();
    let mut last_spawn_time = state.last_spawn_time;
    if frame_time.saturating_sub(state.last_spawn_time) > cfg.spawn_interval_ms {
        enemies.push(Enemy {
            id: frame_time,
            x: rng.gen_range(0.0..(cfg.viewport_w - cfg.enemy_w)),
            y: -cfg.enemy_h,
        });
        last_spawn_time = frame_time;
    }

    // ── 3. Move enemies, cull past the bottom, test against the ship ─────────
    // A culled enemy never collides.  A colliding enemy still completes the
    // frame (it is kept and advanced like every other); only the resulting
    // status records the hit, so the outcome is order-independent across
    // enemies.
    let mut ship_hit = false;
    let enemies: Vec<Enemy> = enemies
        .iter()
        .filter_map(|e| {
            let new_y = e.y + cfg.enemy_speed;
            if new_y >= cfg.viewport_h {
                return None;
            }
            if aabb_overlap(
                e.x, new_y, cfg.enemy_w, cfg.enemy_h,
                ship_x, cfg.ship_y(), cfg.ship_w, cfg.ship_h,
            ) {
                ship_hit = true;
            }
            Some(Enemy { y: new_y, ..e.clone() })
        })
        .collect();

    // ── 4. Move projectiles, cull above the top ──────────────────────────────
    let projectiles: Vec<Projectile> = state
        .projectiles
        .iter()
        .filter_map(|p| {
            let new_y = p.y - cfg.projectile_speed;
            if new_y <= -cfg.projectile_cull_margin {
                None
            } else {
                Some(Projectile { y: new_y, ..p.clone() })
            }
        })
        .collect();

    // ── 5. Resolve projectile ↔ enemy collisions ─────────────────────────────
    // Second pass over the post-motion state, so a pair that crossed
    // mid-frame still resolves at end-of-frame positions.  Each id is
    // consumed at most once per side.
    let mut hit_enemies: Vec<u64> = Vec::new();
    let mut spent_projectiles: Vec<u64> = Vec::new();

    for p in &projectiles {
        for e in &enemies {
            if hit_enemies.contains(&e.id) || spent_projectiles.contains(&p.id) {
                continue;
            }
            if aabb_overlap(
                p.x, p.y, cfg.projectile_w, cfg.projectile_h,
                e.x, e.y, cfg.enemy_w, cfg.enemy_h,
            ) {
                hit_enemies.push(e.id);
                spent_projectiles.push(p.id);
                break;
            }
        }
    }

    let score = state.score + hit_enemies.len() as u32 * cfg.score_per_kill;

    let enemies: Vec<Enemy> = enemies
        .into_iter()
        .filter(|e| !hit_enemies.contains(&e.id))
        .collect();
    let projectiles: Vec<Projectile> = projectiles
        .into_iter()
        .filter(|p| !spent_projectiles.contains(&p.id))
        .collect();

    // ── 6. Commit ────────────────────────────────────────────────────────────
    let status = if ship_hit {
        GameStatus::GameOver
    } else {
        GameStatus::Playing
    };

    GameState {
        ship_x,
        enemies,
        projectiles,
        score,
        status,
        last_spawn_time,
        config: state.config.clone(),
    }
}
