/// Game tuning parameters for the endless runner
///
/// Velocities and gravity are in pixels per tick at the nominal ~60 Hz frame
/// rate; timers accrue in real milliseconds so feel survives variable dt.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (logical pixels, 800x300 canvas)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 300.0;
    pub const GROUND_MARGIN: f32 = 58.0; // ground line sits this far above the bottom
    pub const CEILING_Y: f32 = 8.0;

    // Character
    pub const CHARACTER_X: f32 = 60.0;
    pub const CHARACTER_W: f32 = 70.0;
    pub const CHARACTER_H: f32 = 76.0;
    pub const CHARACTER_DUCK_H: f32 = 52.0;

    // Physics (per tick)
    pub const GRAVITY: f32 = 0.6;
    pub const JUMP_VELOCITY: f32 = -12.5;
    pub const FLOAT_GRAVITY_FACTOR: f32 = 0.75; // small float while jump held, not extra height
    pub const MAX_JUMP_HOLD_MS: f32 = 160.0;

    // Scroll speed / score
    pub const SPEED_INITIAL: f32 = 4.6;
    pub const SPEED_ACCEL_PER_MS: f32 = 0.0002;
    pub const SCORE_RATE_PER_MS: f32 = 0.02;
    pub const PASS_BONUS: f32 = 4.0;

    // Difficulty ramp
    pub const DIFFICULTY_SATURATION_MS: f32 = 120_000.0; // factor reaches 1.0 at ~2 minutes
    pub const SPAWN_COOLDOWN_FLOOR_MS: f32 = 420.0;
    pub const COOLDOWN_SPEED_BASELINE: f32 = 5.0;
    pub const COOLDOWN_SPEED_SLOPE: f32 = 75.0;
    pub const COOLDOWN_SPEED_MAX_CUT_MS: f32 = 420.0;

    // Sign obstacle
    pub const SIGN_POST_W: f32 = 6.0;
    pub const SIGN_POST_H_MIN: f32 = 24.0;
    pub const SIGN_POST_H_RANGE: f32 = 10.0;
    pub const SIGN_POST_H_DIFFICULTY_RISE: f32 = 4.0;
    pub const SIGN_BOARD_W_MIN: f32 = 44.0;
    pub const SIGN_BOARD_W_RANGE: f32 = 12.0;
    pub const SIGN_BOARD_H_SHORT: f32 = 16.0;
    pub const SIGN_BOARD_H_TALL: f32 = 24.0;
    pub const SIGN_BOARD_SHORT_PROB: f64 = 0.45;

    // Spawning / despawning
    pub const SPAWN_MARGIN: f32 = 30.0;
    pub const DESPAWN_X: f32 = -20.0;
    pub const CLOUD_INTERVAL_MS: f32 = 2000.0;
    pub const CLOUD_SPAWN_MARGIN: f32 = 40.0;
    pub const CLOUD_W: f32 = 44.0;
    pub const CLOUD_SPEED_FACTOR: f32 = 0.5;

    // Safe jump gap (cluster spacing)
    pub const ASSUMED_AIRTIME_MS: f32 = 600.0;
    pub const ASSUMED_RUNUP_MS: f32 = 220.0;
    pub const MS_PER_FRAME: f32 = 16.67;
    pub const JUMP_GAP_MIN: f32 = 80.0;
    pub const JUMP_GAP_MAX: f32 = 220.0;
    pub const CLUSTER_GAP_JITTER: f32 = 6.0;

    // Loop
    pub const MAX_DT_MS: f32 = 50.0; // clamp to prevent large jumps after tab resume
}
