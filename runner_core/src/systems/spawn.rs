use crate::difficulty::{difficulty_factor, safe_jump_gap_px, spawn_cooldown_ms, Phase};
use crate::params::Params;
use crate::{Cloud, Config, Events, GameRng, Obstacle, ObstacleKind, RunState, Time};
use hecs::World;
use rand::Rng;

/// Phase-driven obstacle spawning with speed-aware clustering.
///
/// The cooldown decides *whether* an obstacle appears; the cluster roll
/// decides whether it drags 1..max_extras companions behind it at a
/// kinematically safe gap. Decoupling the two lets difficulty ramp without
/// ever producing an unjumpable gap.
pub fn maybe_spawn(
    world: &mut World,
    time: &Time,
    run: &mut RunState,
    config: &Config,
    rng: &mut GameRng,
    events: &mut Events,
) {
    if run.spawn_cooldown_ms > 0.0 {
        run.spawn_cooldown_ms -= time.dt_ms;
        return;
    }

    let phase = Phase::of(run.elapsed_ms);
    run.spawn_cooldown_ms = spawn_cooldown_ms(phase, run.speed);

    // A cluster reuses one silhouette, like real roadside signage
    let kind = random_sign(run.elapsed_ms, rng);
    let base = Obstacle::new(config.spawn_x(), kind);
    let mut prev_trailing = base.trailing_edge();
    world.spawn((base,));
    events.obstacles_spawned += 1;

    let cluster = phase.cluster();
    if cluster.max_extras == 0 || !rng.0.gen_bool(cluster.probability) {
        return;
    }

    let gap_base = safe_jump_gap_px(run.speed) * cluster.gap_factor;
    let extras = rng.0.gen_range(1..=cluster.max_extras);
    for _ in 0..extras {
        let jitter = rng
            .0
            .gen_range(-Params::CLUSTER_GAP_JITTER..Params::CLUSTER_GAP_JITTER);
        // Re-clamp after jitter so spacing never dips below the safe minimum
        let gap = (gap_base + jitter).clamp(Params::JUMP_GAP_MIN, Params::JUMP_GAP_MAX);
        let extra = Obstacle::new(prev_trailing + gap, kind);
        prev_trailing = extra.trailing_edge();
        world.spawn((extra,));
        events.obstacles_spawned += 1;
    }
}

/// Randomized sign dimensions; the minimum post height rises with elapsed
/// time so obstacles get taller, not just more frequent.
fn random_sign(elapsed_ms: f32, rng: &mut GameRng) -> ObstacleKind {
    let difficulty = difficulty_factor(elapsed_ms);
    let post_h = Params::SIGN_POST_H_MIN
        + rng.0.gen::<f32>() * Params::SIGN_POST_H_RANGE
        + difficulty * Params::SIGN_POST_H_DIFFICULTY_RISE;
    let board_w = Params::SIGN_BOARD_W_MIN + rng.0.gen::<f32>() * Params::SIGN_BOARD_W_RANGE;
    // Bimodal board height, weighted toward the tall variant
    let board_h = if rng.0.gen_bool(Params::SIGN_BOARD_SHORT_PROB) {
        Params::SIGN_BOARD_H_SHORT
    } else {
        Params::SIGN_BOARD_H_TALL
    };
    ObstacleKind::Sign {
        post_h,
        board_w,
        board_h,
    }
}

/// Decorative cloud cadence, fixed interval
pub fn maybe_spawn_cloud(world: &mut World, run: &mut RunState, config: &Config, rng: &mut GameRng) {
    if run.elapsed_ms - run.last_cloud_ms < config.cloud_interval_ms {
        return;
    }
    run.last_cloud_ms = run.elapsed_ms;
    world.spawn((Cloud {
        x: config.arena_width + Params::CLOUD_SPAWN_MARGIN,
        y: 40.0 + rng.0.gen::<f32>() * 80.0,
        w: Params::CLOUD_W,
    },));
}
