use crate::params::Params;

/// Runtime game configuration
///
/// Defaults mirror [`Params`]; constructed per session so tests can tweak
/// individual values without process-wide state.
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub ground_y: f32,
    pub ceiling_y: f32,
    pub character_x: f32,
    pub character_w: f32,
    pub character_h: f32,
    pub character_duck_h: f32,
    pub gravity: f32,
    pub jump_velocity: f32,
    pub float_gravity_factor: f32,
    pub max_jump_hold_ms: f32,
    pub speed_initial: f32,
    pub speed_accel_per_ms: f32,
    pub score_rate_per_ms: f32,
    pub pass_bonus: f32,
    pub spawn_margin: f32,
    pub despawn_x: f32,
    pub cloud_interval_ms: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            ground_y: Params::ARENA_HEIGHT - Params::GROUND_MARGIN,
            ceiling_y: Params::CEILING_Y,
            character_x: Params::CHARACTER_X,
            character_w: Params::CHARACTER_W,
            character_h: Params::CHARACTER_H,
            character_duck_h: Params::CHARACTER_DUCK_H,
            gravity: Params::GRAVITY,
            jump_velocity: Params::JUMP_VELOCITY,
            float_gravity_factor: Params::FLOAT_GRAVITY_FACTOR,
            max_jump_hold_ms: Params::MAX_JUMP_HOLD_MS,
            speed_initial: Params::SPEED_INITIAL,
            speed_accel_per_ms: Params::SPEED_ACCEL_PER_MS,
            score_rate_per_ms: Params::SCORE_RATE_PER_MS,
            pass_bonus: Params::PASS_BONUS,
            spawn_margin: Params::SPAWN_MARGIN,
            despawn_x: Params::DESPAWN_X,
            cloud_interval_ms: Params::CLOUD_INTERVAL_MS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// X where a fresh obstacle enters, just past the right edge
    pub fn spawn_x(&self) -> f32 {
        self.arena_width + self.spawn_margin
    }
}
