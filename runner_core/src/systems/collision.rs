use crate::{Character, Config, Events, Obstacle};
use hecs::World;

/// Test the character against every obstacle's composite hitbox and flag the
/// first hit. Uses open-interval overlap, so grazing an edge is survivable.
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    let character_rect = match world
        .query::<&Character>()
        .iter()
        .next()
        .map(|(_e, c)| c.aabb())
    {
        Some(rect) => rect,
        None => return,
    };

    for (_entity, obstacle) in world.query::<&Obstacle>().iter() {
        if obstacle.collides(&character_rect, config.ground_y) {
            events.collided = true;
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_character, Obstacle, ObstacleKind};

    fn setup() -> (World, Config, Events) {
        let mut world = World::new();
        let config = Config::new();
        create_character(&mut world, &config);
        (world, config, Events::new())
    }

    fn sign(x: f32, post_h: f32, board_w: f32, board_h: f32) -> Obstacle {
        Obstacle::new(
            x,
            ObstacleKind::Sign {
                post_h,
                board_w,
                board_h,
            },
        )
    }

    #[test]
    fn test_no_collision_when_clear() {
        let (mut world, config, mut events) = setup();
        world.spawn((sign(500.0, 30.0, 50.0, 24.0),));

        check_collisions(&mut world, &config, &mut events);

        assert!(!events.collided);
    }

    #[test]
    fn test_post_hit_detected() {
        let (mut world, config, mut events) = setup();
        // Overlap the character's x-range with a very tall post
        world.spawn((sign(config.character_x, 120.0, 50.0, 16.0),));

        check_collisions(&mut world, &config, &mut events);

        assert!(events.collided, "Post overlap counts");
    }

    #[test]
    fn test_board_only_hit_detected() {
        let (mut world, config, mut events) = setup();
        // Wide board whose left part reaches over the character while the
        // narrow centered post stays to the right of it. Board spans
        // x..x+120, post occupies the 6px around x+60.
        let o = sign(100.0, 40.0, 120.0, 24.0);
        world.spawn((o,));
        for (_e, c) in world.query_mut::<&mut Character>() {
            c.x = 110.0;
            c.w = 20.0; // 110..130, left of the post at ~157..163
            c.y = config.ground_y - 80.0; // airborne, at board height
            c.h = 20.0;
            c.on_ground = false;
        }
        let post = o.post_rect(config.ground_y);
        assert!(post.min.x > 130.0, "Character must not reach the post");

        check_collisions(&mut world, &config, &mut events);

        assert!(events.collided, "Board-only overlap counts");
    }

    #[test]
    fn test_gap_under_board_is_safe() {
        let (mut world, config, mut events) = setup();
        // Ducking character slides under a board held high by a tall post,
        // positioned beside the post
        let o = sign(100.0, 90.0, 120.0, 16.0);
        world.spawn((o,));
        for (_e, c) in world.query_mut::<&mut Character>() {
            c.x = 110.0;
            c.w = 20.0;
            c.h = 52.0;
            c.y = config.ground_y - c.h;
        }

        check_collisions(&mut world, &config, &mut events);

        assert!(
            !events.collided,
            "Composite shape leaves the space under the board open"
        );
    }

    #[test]
    fn test_touching_edge_is_not_a_collision() {
        let (mut world, config, mut events) = setup();
        let character_right = config.character_x + config.character_w;
        // Board's left edge exactly at the character's right edge
        world.spawn((sign(character_right, 120.0, 50.0, 24.0),));

        check_collisions(&mut world, &config, &mut events);

        assert!(!events.collided, "Exact edge contact does not collide");
    }

    #[test]
    fn test_no_character_no_panic() {
        let mut world = World::new();
        let config = Config::new();
        let mut events = Events::new();
        world.spawn((sign(60.0, 120.0, 50.0, 24.0),));

        check_collisions(&mut world, &config, &mut events);

        assert!(!events.collided);
    }
}
