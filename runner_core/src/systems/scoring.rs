use crate::{Config, Events, RunState, RunStatus, Time};

/// Per-tick ramp: elapsed time, scroll speed and the time-based score trickle.
/// Speed only ever increases while Running.
pub fn accrue_run(run: &mut RunState, time: &Time, config: &Config) {
    run.elapsed_ms += time.dt_ms;
    run.speed += time.dt_ms * config.speed_accel_per_ms;
    run.score += time.dt_ms * config.score_rate_per_ms;
}

/// Running -> Ended on any collision this tick. Once Ended, nothing moves
/// until an explicit reset.
pub fn check_game_over(run: &mut RunState, events: &Events) {
    if events.collided {
        run.status = RunStatus::Ended;
    }
}
