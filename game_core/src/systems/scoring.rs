use tracing::debug;

use crate::{Ball, Body, Court, Events, GameRng, Score};

/// Check if the ball left the court; the side it left through concedes the point.
/// Returns true when a point was scored and the ball was served again.
pub fn check_scoring(
    body: &mut Body,
    ball: &mut Ball,
    court: &Court,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) -> bool {
    if body.left() <= 0.0 {
        score.increment_computer();
        events.computer_scored = true;
        debug!(player = score.player, computer = score.computer, "computer scored");
        ball.reset(body, court, rng);
        return true;
    }
    if body.right() >= court.width {
        score.increment_player();
        events.player_scored = true;
        debug!(player = score.player, computer = score.computer, "player scored");
        ball.reset(body, court, rng);
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, Difficulty};
    use glam::Vec2;

    fn setup() -> (Court, Score, Events, GameRng, Ball) {
        let config = Config::new();
        let court = Court::new(800.0, 600.0, &config).unwrap();
        let mut rng = GameRng::new(12345); // Fixed seed for deterministic tests
        let ball = Ball::new(&Difficulty::Normal.profile(), &mut rng);
        (court, Score::new(), Events::new(), rng, ball)
    }

    #[test]
    fn test_computer_scores_when_ball_exits_left() {
        let (court, mut score, mut events, mut rng, mut ball) = setup();
        let mut body = Body::new(Vec2::new(0.0, 300.0), Vec2::splat(12.0));

        assert!(check_scoring(&mut body, &mut ball, &court, &mut score, &mut events, &mut rng));

        assert_eq!(score.computer, 1, "Computer should score");
        assert_eq!(score.player, 0, "Player should not score");
        assert!(events.computer_scored && !events.player_scored);
    }

    #[test]
    fn test_player_scores_when_ball_exits_right() {
        let (court, mut score, mut events, mut rng, mut ball) = setup();
        let mut body = Body::new(Vec2::new(788.0, 300.0), Vec2::splat(12.0));

        assert!(check_scoring(&mut body, &mut ball, &court, &mut score, &mut events, &mut rng));

        assert_eq!(score.player, 1, "Player should score");
        assert_eq!(score.computer, 0, "Computer should not score");
        assert!(events.player_scored && !events.computer_scored);
    }

    #[test]
    fn test_ball_resets_after_scoring() {
        let (court, mut score, mut events, mut rng, mut ball) = setup();
        let mut body = Body::new(Vec2::new(-3.0, 100.0), Vec2::splat(12.0));
        ball.accelerate();

        check_scoring(&mut body, &mut ball, &court, &mut score, &mut events, &mut rng);

        assert_eq!(body.pos, Vec2::new(394.0, 294.0));
        assert_eq!(ball.speed, ball.base_speed);
        assert!(ball.trail.is_empty());
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (court, mut score, mut events, mut rng, mut ball) = setup();
        let mut body = Body::new(Vec2::new(0.5, 300.0), Vec2::splat(12.0));

        assert!(!check_scoring(&mut body, &mut ball, &court, &mut score, &mut events, &mut rng));

        assert_eq!(score, Score::new());
        assert_eq!(body.pos, Vec2::new(0.5, 300.0));
        assert!(!events.player_scored && !events.computer_scored);
    }

    #[test]
    fn test_multiple_scores_accumulate() {
        let (court, mut score, mut events, mut rng, mut ball) = setup();
        for _ in 0..3 {
            let mut body = Body::new(Vec2::new(790.0, 300.0), Vec2::splat(12.0));
            check_scoring(&mut body, &mut ball, &court, &mut score, &mut events, &mut rng);
        }
        assert_eq!(score.player, 3, "Scores should accumulate");
        assert_eq!(score.computer, 0);
    }
}
