//! Phase-based difficulty: spawn cadence, clustering aggressiveness and the
//! kinematically safe gap that keeps clusters jumpable at the current speed.

use crate::params::Params;

/// Difficulty tier, a pure step function of elapsed run time
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    One,
    Two,
    Three,
    Four,
}

impl Phase {
    pub fn of(elapsed_ms: f32) -> Self {
        if elapsed_ms < 15_000.0 {
            Phase::One
        } else if elapsed_ms < 30_000.0 {
            Phase::Two
        } else if elapsed_ms < 60_000.0 {
            Phase::Three
        } else {
            Phase::Four
        }
    }

    /// Base spawn cooldown before the speed coupling, longer in early phases
    pub fn base_cooldown_ms(self) -> f32 {
        match self {
            Phase::One => 1650.0,   // very sparse
            Phase::Two => 1300.0,   // closer
            Phase::Three => 1100.0, // medium
            Phase::Four => 950.0,   // fast
        }
    }

    pub fn cluster(self) -> ClusterConfig {
        match self {
            Phase::One => ClusterConfig {
                probability: 0.0,
                max_extras: 0,
                gap_factor: 1.0,
            },
            Phase::Two => ClusterConfig {
                probability: 0.20,
                max_extras: 1,
                gap_factor: 0.95,
            },
            Phase::Three => ClusterConfig {
                probability: 0.45,
                max_extras: 2,
                gap_factor: 0.92,
            },
            Phase::Four => ClusterConfig {
                probability: 0.65,
                max_extras: 2,
                gap_factor: 0.90,
            },
        }
    }
}

/// How aggressively a phase groups obstacles
#[derive(Debug, Clone, Copy)]
pub struct ClusterConfig {
    /// Chance that a spawn becomes a cluster
    pub probability: f64,
    /// Additional obstacles beyond the base one
    pub max_extras: u32,
    /// Shrinks the safe gap in later phases while staying jumpable
    pub gap_factor: f32,
}

/// Spawn cooldown for the phase, shortened as speed rises above baseline,
/// never below the floor.
pub fn spawn_cooldown_ms(phase: Phase, speed: f32) -> f32 {
    let reduction = ((speed - Params::COOLDOWN_SPEED_BASELINE) * Params::COOLDOWN_SPEED_SLOPE)
        .clamp(0.0, Params::COOLDOWN_SPEED_MAX_CUT_MS);
    (phase.base_cooldown_ms() - reduction).max(Params::SPAWN_COOLDOWN_FLOOR_MS)
}

/// Elapsed-time difficulty, 0.0 rising to 1.0 at saturation
pub fn difficulty_factor(elapsed_ms: f32) -> f32 {
    (elapsed_ms / Params::DIFFICULTY_SATURATION_MS).min(1.0)
}

/// Safe horizontal gap after a full jump plus a brief run-up, derived from
/// the current scroll speed and clamped to a fair pixel range.
pub fn safe_jump_gap_px(speed: f32) -> f32 {
    let speed = speed.max(Params::SPEED_INITIAL);
    let px = speed * ((Params::ASSUMED_AIRTIME_MS + Params::ASSUMED_RUNUP_MS) / Params::MS_PER_FRAME);
    px.clamp(Params::JUMP_GAP_MIN, Params::JUMP_GAP_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_boundaries() {
        assert_eq!(Phase::of(0.0), Phase::One);
        assert_eq!(Phase::of(14_999.0), Phase::One);
        assert_eq!(Phase::of(15_000.0), Phase::Two);
        assert_eq!(Phase::of(29_999.0), Phase::Two);
        assert_eq!(Phase::of(30_000.0), Phase::Three);
        assert_eq!(Phase::of(59_999.0), Phase::Three);
        assert_eq!(Phase::of(60_000.0), Phase::Four);
        assert_eq!(Phase::of(600_000.0), Phase::Four);
    }

    #[test]
    fn test_cooldown_non_increasing_with_phase() {
        let phases = [Phase::One, Phase::Two, Phase::Three, Phase::Four];
        for speed in [4.6_f32, 6.0, 9.0] {
            for pair in phases.windows(2) {
                assert!(
                    spawn_cooldown_ms(pair[1], speed) <= spawn_cooldown_ms(pair[0], speed),
                    "Cooldown must not grow as phases advance"
                );
            }
        }
    }

    #[test]
    fn test_cooldown_non_increasing_with_speed() {
        let mut prev = f32::MAX;
        let mut speed = 4.0_f32;
        while speed < 14.0 {
            let cd = spawn_cooldown_ms(Phase::Three, speed);
            assert!(cd <= prev, "Cooldown must not grow as speed rises");
            assert!(cd >= Params::SPAWN_COOLDOWN_FLOOR_MS, "Floor is respected");
            prev = cd;
            speed += 0.25;
        }
    }

    #[test]
    fn test_cooldown_floor() {
        assert_eq!(
            spawn_cooldown_ms(Phase::Four, 100.0),
            Params::SPAWN_COOLDOWN_FLOOR_MS
        );
    }

    #[test]
    fn test_difficulty_factor_saturates() {
        assert_eq!(difficulty_factor(0.0), 0.0);
        assert!((difficulty_factor(60_000.0) - 0.5).abs() < 1e-6);
        assert_eq!(difficulty_factor(120_000.0), 1.0);
        assert_eq!(difficulty_factor(900_000.0), 1.0);
    }

    #[test]
    fn test_safe_jump_gap_clamped() {
        // Slow speeds hit the lower clamp region, fast speeds the upper
        for speed in [0.0_f32, 4.6, 6.0, 10.0, 50.0] {
            let gap = safe_jump_gap_px(speed);
            assert!((Params::JUMP_GAP_MIN..=Params::JUMP_GAP_MAX).contains(&gap));
        }
        assert_eq!(safe_jump_gap_px(50.0), Params::JUMP_GAP_MAX);
    }

    #[test]
    fn test_safe_jump_gap_grows_with_speed() {
        assert!(safe_jump_gap_px(4.6) <= safe_jump_gap_px(4.7));
    }
}
