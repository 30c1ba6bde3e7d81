use tracing::trace;

use crate::{overlaps_vertically, Ball, Body, Config, Court, Events, Sign};

/// Force the vertical heading away from the top and bottom walls.
/// The two checks are independent; in a tight court both may fire in one frame.
pub fn bounce_off_walls(
    body: &Body,
    ball: &mut Ball,
    court: &Court,
    config: &Config,
    events: &mut Events,
) {
    if body.top() <= config.bounce_margin {
        if ball.heading.y != Sign::Positive {
            events.ball_hit_wall = true;
        }
        ball.heading.y = Sign::Positive;
    }
    if body.bottom() >= court.height - config.bounce_margin {
        if ball.heading.y != Sign::Negative {
            events.ball_hit_wall = true;
        }
        ball.heading.y = Sign::Negative;
    }
}

/// Discrete overlap test against both paddles; each hit sends the ball
/// back across the court and speeds it up
pub fn hit_paddles(
    body: &Body,
    ball: &mut Ball,
    player: &Body,
    computer: &Body,
    events: &mut Events,
) {
    if body.left() <= player.right() && overlaps_vertically(body, player) {
        ball.heading.x = Sign::Positive;
        ball.accelerate();
        events.ball_hit_paddle = true;
        trace!(speed = ball.speed, "ball hit player paddle");
    }
    if body.right() >= computer.left() && overlaps_vertically(body, computer) {
        ball.heading.x = Sign::Negative;
        ball.accelerate();
        events.ball_hit_paddle = true;
        trace!(speed = ball.speed, "ball hit computer paddle");
    }
}
