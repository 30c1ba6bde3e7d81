pub mod components;
pub mod config;
pub mod court;
pub mod error;
pub mod game;
pub mod geometry;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use court::*;
pub use error::GameError;
pub use game::*;
pub use geometry::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one frame of the Pong simulation.
///
/// Order is fixed: the player paddle reads the sampled keys, the computer
/// paddle aims at last frame's ball, then the ball moves, collides and scores.
pub fn step(
    world: &mut World,
    court: &Court,
    config: &Config,
    input: &InputState,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Keyboard paddle
    move_player_paddle(world, input, court, config);

    // 2. Computer paddle
    track_ball(world, court, config, rng);

    // 3. Ball: walls, scoring, paddle hits, movement
    update_ball(world, court, config, score, events, rng);
}

/// Helper to create the keyboard paddle on the left
pub fn create_player_paddle(world: &mut World, court: &Court, config: &Config) -> hecs::Entity {
    let body = Body::new(
        court.paddle_spawn(Side::Player, config),
        glam::Vec2::new(config.paddle_width, config.paddle_height),
    );
    world.spawn((
        body,
        Paddle::new(Side::Player),
        PlayerControl::new(config.player_speed),
    ))
}

/// Helper to create the computer paddle on the right
pub fn create_computer_paddle(
    world: &mut World,
    court: &Court,
    config: &Config,
    profile: &DifficultyProfile,
) -> hecs::Entity {
    let body = Body::new(
        court.paddle_spawn(Side::Computer, config),
        glam::Vec2::new(config.paddle_width, config.paddle_height),
    );
    world.spawn((body, Paddle::new(Side::Computer), AiTracker::new(profile)))
}

/// Helper to create the ball, centered with a random diagonal heading
pub fn create_ball(
    world: &mut World,
    court: &Court,
    config: &Config,
    profile: &DifficultyProfile,
    rng: &mut GameRng,
) -> hecs::Entity {
    let size = glam::Vec2::splat(config.ball_size);
    let body = Body::new(court.centered(size), size);
    world.spawn((body, Ball::new(profile, rng)))
}
