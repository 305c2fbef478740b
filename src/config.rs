/// Tunable simulation parameters.
///
/// Everything that shapes the playfield lives here rather than as hidden
/// literals inside the engine, so tests (and any alternative host) can run
/// the simulation at whatever scale they like. Distances are logical pixels,
/// speeds are logical pixels per tick.

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub viewport_w: f32,
    pub viewport_h: f32,
    pub ship_w: f32,
    pub ship_h: f32,
    pub enemy_w: f32,
    pub enemy_h: f32,
    pub projectile_w: f32,
    pub projectile_h: f32,
    /// Horizontal ship movement per tick while a direction is held.
    pub ship_speed: f32,
    /// Downward enemy movement per tick.
    pub enemy_speed: f32,
    /// Upward projectile movement per tick.
    pub projectile_speed: f32,
    /// Minimum frame-clock gap between enemy spawns.
    pub spawn_interval_ms: u64,
    pub score_per_kill: u32,
    /// Distance from the bottom edge to the top of the ship's fixed band.
    pub ship_band_offset: f32,
    /// Projectiles are culled once they climb this far above the top edge.
    pub projectile_cull_margin: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            viewport_w: 480.0,
            viewport_h: 800.0,
            ship_w: 50.0,
            ship_h: 50.0,
            enemy_w: 40.0,
            enemy_h: 40.0,
            projectile_w: 5.0,
            projectile_h: 15.0,
            ship_speed: 5.0,
            enemy_speed: 3.0,
            projectile_speed: 10.0,
            spawn_interval_ms: 1500,
            score_per_kill: 10,
            ship_band_offset: 100.0,
            projectile_cull_margin: 50.0,
        }
    }
}

impl GameConfig {
    /// Vertical position of the ship's top edge (the ship never moves on y).
    pub fn ship_y(&self) -> f32 {
        self.viewport_h - self.ship_band_offset
    }

    /// Rightmost x the ship's left edge may reach.
    pub fn ship_max_x(&self) -> f32 {
        self.viewport_w - self.ship_w
    }
}
