use crate::{Character, Config, Events, Intents, RunState, Time};
use hecs::World;

/// Vertical physics for the character: duck, jump trigger, gravity with the
/// float assist, ground snap and ceiling clamp.
pub fn advance_characters(
    world: &mut World,
    time: &Time,
    intents: &Intents,
    run: &mut RunState,
    config: &Config,
    events: &mut Events,
) {
    for (_entity, c) in world.query_mut::<&mut Character>() {
        apply_duck(c, intents.duck_held, config);

        // Jump only takes effect from the ground; a held button re-jumps on
        // landing, matching key-repeat behaviour.
        if intents.jump_held && c.on_ground {
            trigger_jump(c, run, config);
            events.jumped = true;
        }

        // Float assist: reduced gravity only while airborne, rising, held,
        // and inside the hold window. Hold time accrues in real ms so the
        // assist is frame-rate independent.
        let mut eff_gravity = config.gravity;
        if intents.jump_held
            && !c.on_ground
            && c.vy < 0.0
            && run.jump_hold_ms < config.max_jump_hold_ms
        {
            eff_gravity *= config.float_gravity_factor;
            run.jump_hold_ms += time.dt_ms;
        }

        c.vy += eff_gravity;
        c.y += c.vy;

        // Ground snap
        if c.bottom() >= config.ground_y {
            c.y = config.ground_y - c.h;
            c.vy = 0.0;
            c.on_ground = true;
            run.jump_hold_ms = 0.0;
        }

        // Ceiling clamp: never travel off the top of the screen
        if c.y < config.ceiling_y {
            c.y = config.ceiling_y;
            c.vy = c.vy.max(0.0);
        }
    }
}

/// Start a jump from the ground
pub fn trigger_jump(c: &mut Character, run: &mut RunState, config: &Config) {
    if !c.on_ground {
        return;
    }
    c.vy = config.jump_velocity;
    c.on_ground = false;
    run.jump_hold_ms = 0.0;
}

/// Duck only works on the ground; the bottom edge stays anchored so the
/// character never sinks into or pops off the ground line.
fn apply_duck(c: &mut Character, pressed: bool, config: &Config) {
    if !c.on_ground {
        return;
    }
    let target_h = if pressed {
        config.character_duck_h
    } else {
        config.character_h
    };
    if c.h != target_h {
        c.h = target_h;
        c.y = config.ground_y - c.h;
    }
    c.ducking = pressed;
}
