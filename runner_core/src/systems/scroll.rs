use crate::params::Params;
use crate::{Character, Cloud, Config, Events, Obstacle, RunState};
use hecs::World;

/// Scroll obstacles and clouds left, award the one-shot pass bonus, and
/// despawn anything fully off-screen.
pub fn scroll_world(world: &mut World, run: &mut RunState, config: &Config, events: &mut Events) {
    let leading_edge = world
        .query::<&Character>()
        .iter()
        .next()
        .map(|(_e, c)| c.leading_edge())
        .unwrap_or(config.character_x);

    for (_entity, o) in world.query_mut::<&mut Obstacle>() {
        o.x -= run.speed;
        if !o.passed && o.trailing_edge() < leading_edge {
            o.passed = true;
            run.score += config.pass_bonus;
            events.obstacles_passed += 1;
        }
    }

    // Clouds drift slower than the ground for a little parallax
    for (_entity, cl) in world.query_mut::<&mut Cloud>() {
        cl.x -= run.speed * Params::CLOUD_SPEED_FACTOR;
    }

    let dead_obstacles: Vec<hecs::Entity> = world
        .query::<&Obstacle>()
        .iter()
        .filter(|(_e, o)| o.trailing_edge() <= config.despawn_x)
        .map(|(e, _o)| e)
        .collect();
    for entity in dead_obstacles {
        let _ = world.despawn(entity);
    }

    let dead_clouds: Vec<hecs::Entity> = world
        .query::<&Cloud>()
        .iter()
        .filter(|(_e, cl)| cl.x + cl.w <= config.despawn_x)
        .map(|(e, _cl)| e)
        .collect();
    for entity in dead_clouds {
        let _ = world.despawn(entity);
    }
}
