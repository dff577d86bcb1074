use crate::config::Config;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt_ms: f32,  // Delta time for this tick, milliseconds
    pub now_ms: f64, // Total elapsed wall-clock time
}

impl Time {
    pub fn new(dt_ms: f32, now_ms: f64) -> Self {
        Self { dt_ms, now_ms }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt_ms: 16.67,
            now_ms: 0.0,
        }
    }
}

/// Run lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Created or reset, not yet started
    Idle,
    /// Simulation advancing every tick
    Running,
    /// Collision ended the run; everything is frozen until reset
    Ended,
}

/// Per-run mutable state: score, speed, spawn scheduling, jump-hold timing.
/// One instance per game session, passed by reference into `step`.
#[derive(Debug, Clone, Copy)]
pub struct RunState {
    pub status: RunStatus,
    pub score: f32,
    pub speed: f32,
    pub elapsed_ms: f32,
    pub spawn_cooldown_ms: f32,
    pub jump_hold_ms: f32,
    pub last_cloud_ms: f32,
}

impl RunState {
    pub fn new(config: &Config) -> Self {
        Self {
            status: RunStatus::Idle,
            score: 0.0,
            speed: config.speed_initial,
            elapsed_ms: 0.0,
            spawn_cooldown_ms: 0.0,
            jump_hold_ms: 0.0,
            last_cloud_ms: 0.0,
        }
    }

    /// Reset all per-run state and enter Running
    pub fn start(&mut self, config: &Config) {
        *self = Self::new(config);
        self.status = RunStatus::Running;
    }

    pub fn is_running(&self) -> bool {
        self.status == RunStatus::Running
    }

    /// Score as shown to the player
    pub fn display_score(&self) -> u32 {
        self.score.max(0.0) as u32
    }
}

/// The two input intents the core needs, device independent
#[derive(Debug, Clone, Copy, Default)]
pub struct Intents {
    pub jump_held: bool,
    pub duck_held: bool,
}

impl Intents {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub collided: bool,
    pub obstacles_passed: u32,
    pub obstacles_spawned: u32,
    pub jumped: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}
