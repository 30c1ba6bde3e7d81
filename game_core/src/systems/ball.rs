use hecs::World;

use crate::systems::{bounce_off_walls, check_scoring, hit_paddles, integrate_ball};
use crate::{Ball, Body, Config, Court, Events, GameRng, Paddle, Score, Side};

/// Run one frame of ball logic: walls, exits, paddle hits, then movement.
///
/// Collisions are tested against last frame's end positions; nothing sweeps
/// the path travelled this frame, so a fast ball can skip through a paddle.
pub fn update_ball(
    world: &mut World,
    court: &Court,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let mut player = None;
    let mut computer = None;
    for (_e, (body, paddle)) in world.query::<(&Body, &Paddle)>().iter() {
        match paddle.side {
            Side::Player => player = Some(*body),
            Side::Computer => computer = Some(*body),
        }
    }

    let (Some(player), Some(computer)) = (player, computer) else {
        return; // No match set up
    };

    for (_entity, (body, ball)) in world.query_mut::<(&mut Body, &mut Ball)>() {
        bounce_off_walls(body, ball, court, config, events);

        // A point ends the ball's frame; it waits at the center for the next tick
        if check_scoring(body, ball, court, score, events, rng) {
            continue;
        }

        hit_paddles(body, ball, &player, &computer, events);
        integrate_ball(body, ball, config);
    }
}
