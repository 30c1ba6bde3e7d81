use hecs::World;
use rand::Rng;

use crate::{center, AiTracker, Ball, Body, Config, Court, GameRng, Heading};

/// Steer the computer paddle toward a noisy estimate of the ball.
/// Reads the ball as it was at the end of the previous frame.
pub fn track_ball(world: &mut World, court: &Court, config: &Config, rng: &mut GameRng) {
    let ball = world
        .query::<(&Body, &Ball)>()
        .iter()
        .next()
        .map(|(_e, (body, ball))| (*body, ball.heading));

    let Some((ball_body, heading)) = ball else {
        return;
    };

    for (_entity, (body, tracker)) in world.query_mut::<(&mut Body, &AiTracker)>() {
        aim_paddle(body, tracker, &ball_body, heading, court, config, rng);
    }
}

/// One targeting step for a single paddle
pub fn aim_paddle(
    body: &mut Body,
    tracker: &AiTracker,
    ball: &Body,
    heading: Heading,
    court: &Court,
    config: &Config,
    rng: &mut GameRng,
) {
    let target = center(ball).y + rng.0.gen_range(-1.0f32..1.0) * tracker.jitter;
    let mid = center(body).y;

    // Hold position while the ball travels away
    if heading.toward_computer() {
        if target < mid - config.ai_deadband {
            body.pos.y -= tracker.tracking_speed;
        } else if target > mid + config.ai_deadband {
            body.pos.y += tracker.tracking_speed;
        }
    }
    body.pos.y = config.clamp_paddle_y(body.pos.y, court.height);
}
