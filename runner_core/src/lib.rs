pub mod aabb;
pub mod components;
pub mod config;
pub mod difficulty;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use aabb::*;
pub use components::*;
pub use config::*;
pub use difficulty::*;
pub use params::*;
pub use render::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one tick of the endless-runner simulation.
///
/// dt is clamped so a resumed background tab cannot teleport obstacles past
/// the character. Nothing advances unless the run is in the Running state;
/// the Ended state freezes score, speed and every entity until a reset.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    config: &Config,
    run: &mut RunState,
    intents: &Intents,
    events: &mut Events,
    rng: &mut GameRng,
) {
    events.clear();

    let clamped_dt = time.dt_ms.min(Params::MAX_DT_MS);
    time.now_ms += clamped_dt as f64;

    if !run.is_running() {
        return;
    }

    let tick = Time {
        dt_ms: clamped_dt,
        now_ms: time.now_ms,
    };

    // 1. Ramp elapsed time, speed and score trickle
    accrue_run(run, &tick, config);

    // 2. Character physics (duck, jump, gravity, clamps)
    advance_characters(world, &tick, intents, run, config, events);

    // 3. Scroll obstacles/clouds, award pass bonuses, despawn off-screen
    scroll_world(world, run, config, events);

    // 4. Spawn new obstacles and clouds
    maybe_spawn(world, &tick, run, config, rng, events);
    maybe_spawn_cloud(world, run, config, rng);

    // 5. Collision ends the run at the tick boundary
    check_collisions(world, config, events);
    check_game_over(run, events);
}

/// Spawn the player character entity
pub fn create_character(world: &mut World, config: &Config) -> hecs::Entity {
    world.spawn((Character::new(config),))
}

/// Reset the session: clear obstacles and clouds, restore the character to
/// the ground, zero the run state and enter Running.
pub fn start_run(world: &mut World, run: &mut RunState, config: &Config) {
    let stale: Vec<hecs::Entity> = world
        .query::<&Obstacle>()
        .iter()
        .map(|(e, _o)| e)
        .chain(world.query::<&Cloud>().iter().map(|(e, _c)| e))
        .collect();
    for entity in stale {
        let _ = world.despawn(entity);
    }

    if world.query::<&Character>().iter().next().is_none() {
        create_character(world, config);
    } else {
        for (_e, c) in world.query_mut::<&mut Character>() {
            *c = Character::new(config);
        }
    }

    run.start(config);
}
