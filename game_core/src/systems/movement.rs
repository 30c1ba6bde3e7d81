use hecs::World;

use crate::{
    center, Ball, Binding, Body, Config, Court, InputState, PlayerControl, TrailPoint,
};

/// Move the keyboard paddle from the sampled key state
pub fn move_player_paddle(world: &mut World, input: &InputState, court: &Court, config: &Config) {
    for (_entity, (body, control)) in world.query_mut::<(&mut Body, &PlayerControl)>() {
        // Up and down are applied one after the other, each clamped
        if input.is_down(Binding::MoveUp) {
            body.pos.y = config.clamp_paddle_y(body.pos.y - control.speed, court.height);
        }
        if input.is_down(Binding::MoveDown) {
            body.pos.y = config.clamp_paddle_y(body.pos.y + control.speed, court.height);
        }
        body.pos.y = config.clamp_paddle_y(body.pos.y, court.height);
    }
}

/// Advance the ball one frame along its heading and remember the new center
pub fn integrate_ball(body: &mut Body, ball: &mut Ball, config: &Config) {
    body.pos += ball.heading.as_vec2() * ball.speed;
    ball.record_trail(
        TrailPoint {
            pos: center(body),
            alpha: config.trail_alpha,
        },
        config.trail_len,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_player_paddle, Difficulty, GameRng, Heading, Sign};
    use glam::Vec2;

    fn setup() -> (World, Court, Config) {
        let config = Config::new();
        let court = Court::new(800.0, 600.0, &config).unwrap();
        (World::new(), court, config)
    }

    fn paddle_y(world: &World, entity: hecs::Entity) -> f32 {
        world.get::<&Body>(entity).unwrap().pos.y
    }

    #[test]
    fn test_paddle_moves_by_speed() {
        let (mut world, court, config) = setup();
        let paddle = create_player_paddle(&mut world, &court, &config);
        let mut input = InputState::new();

        input.press(Binding::MoveUp.code());
        move_player_paddle(&mut world, &input, &court, &config);
        assert_eq!(paddle_y(&world, paddle), 245.0);

        input.release(Binding::MoveUp.code());
        input.press(Binding::MoveDown.code());
        move_player_paddle(&mut world, &input, &court, &config);
        move_player_paddle(&mut world, &input, &court, &config);
        assert_eq!(paddle_y(&world, paddle), 265.0);
    }

    #[test]
    fn test_paddle_idle_without_input() {
        let (mut world, court, config) = setup();
        let paddle = create_player_paddle(&mut world, &court, &config);
        move_player_paddle(&mut world, &InputState::new(), &court, &config);
        assert_eq!(paddle_y(&world, paddle), 255.0);
    }

    #[test]
    fn test_paddle_clamped_to_court() {
        let (mut world, court, config) = setup();
        let paddle = create_player_paddle(&mut world, &court, &config);
        let mut input = InputState::new();

        input.press(Binding::MoveUp.code());
        for _ in 0..100 {
            move_player_paddle(&mut world, &input, &court, &config);
            let y = paddle_y(&world, paddle);
            assert!((20.0..=490.0).contains(&y));
        }
        assert_eq!(paddle_y(&world, paddle), 20.0);

        input.release(Binding::MoveUp.code());
        input.press(Binding::MoveDown.code());
        for _ in 0..100 {
            move_player_paddle(&mut world, &input, &court, &config);
            let y = paddle_y(&world, paddle);
            assert!((20.0..=490.0).contains(&y));
        }
        assert_eq!(paddle_y(&world, paddle), 490.0);
    }

    #[test]
    fn test_both_keys_at_top_wall() {
        let (mut world, court, config) = setup();
        let paddle = create_player_paddle(&mut world, &court, &config);
        world.get::<&mut Body>(paddle).unwrap().pos.y = 20.0;
        let mut input = InputState::new();
        input.press(Binding::MoveUp.code());
        input.press(Binding::MoveDown.code());

        move_player_paddle(&mut world, &input, &court, &config);

        // Up is absorbed by the wall, down still applies
        assert_eq!(paddle_y(&world, paddle), 30.0);
    }

    #[test]
    fn test_integrate_ball_moves_diagonally_and_trails() {
        let config = Config::new();
        let mut rng = GameRng::new(7);
        let mut ball = Ball::new(&Difficulty::Normal.profile(), &mut rng);
        ball.heading = Heading::new(Sign::Negative, Sign::Positive);
        let mut body = Body::new(Vec2::new(394.0, 294.0), Vec2::splat(12.0));

        integrate_ball(&mut body, &mut ball, &config);

        assert_eq!(body.pos, Vec2::new(388.0, 300.0));
        let last = ball.trail.back().copied().unwrap();
        assert_eq!(last.pos, Vec2::new(394.0, 306.0));
        assert_eq!(last.alpha, 0.8);
    }

    #[test]
    fn test_trail_never_exceeds_capacity() {
        let config = Config::new();
        let mut rng = GameRng::new(8);
        let mut ball = Ball::new(&Difficulty::Easy.profile(), &mut rng);
        let mut body = Body::new(Vec2::new(394.0, 294.0), Vec2::splat(12.0));
        for _ in 0..25 {
            integrate_ball(&mut body, &mut ball, &config);
            assert!(ball.trail.len() <= config.trail_len);
        }
        assert_eq!(ball.trail.len(), 10);
    }
}
