//! Per-frame simulation step
//!
//! Advances paddles and ball by one frame, resolves collisions and scoring.

use rand::Rng;

use super::collision::{bounce_off_paddle, bounce_off_walls, exit};
use super::input::{TickInput, resolve_intent};
use super::opponent::track;
use super::state::{GamePhase, GameState, Side};
use crate::tuning::Tuning;

/// Something notable that happened during a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball bounced off the top or bottom wall
    WallBounce,
    /// Ball bounced off a paddle
    PaddleHit(Side),
    /// A side won a point
    Scored(Side),
    /// A side reached the winning score
    MatchOver(Side),
}

/// Advance the game by one frame.
///
/// Only `Running` mutates anything; every other phase returns no events.
pub fn step<R: Rng>(
    state: &mut GameState,
    input: &TickInput,
    tuning: &Tuning,
    rng: &mut R,
) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase != GamePhase::Running {
        return events;
    }

    // Player paddle: absolute target first, then the resolved direction
    if let Some(target) = input.pointer_y {
        state.player_paddle_y = tuning.clamp_paddle_y(target - tuning.paddle_height / 2.0);
    }
    let direction = resolve_intent(state.pending_move_intent, input.key_intent);
    state.player_paddle_y =
        tuning.clamp_paddle_y(state.player_paddle_y + direction.sign() * tuning.paddle_speed);

    state.ball_pos += state.ball_vel;

    if bounce_off_walls(state.ball_pos, &mut state.ball_vel, tuning) {
        events.push(GameEvent::WallBounce);
    }

    state.opponent_paddle_y = track(state.opponent_paddle_y, state.ball_pos.y, tuning);

    for side in [Side::Player, Side::Opponent] {
        let paddle_y = state.paddle_y(side);
        if bounce_off_paddle(state.ball_pos, &mut state.ball_vel, paddle_y, side, tuning) {
            events.push(GameEvent::PaddleHit(side));
        }
    }

    if let Some(exit) = exit(state.ball_pos.x, tuning) {
        let scorer = exit.scorer();
        match scorer {
            Side::Player => state.player_score += 1,
            Side::Opponent => state.opponent_score += 1,
        }
        events.push(GameEvent::Scored(scorer));

        if let Some(winner) = check_game_over(state, tuning) {
            events.push(GameEvent::MatchOver(winner));
        }
        state.reset_ball(tuning, rng);
    }

    events
}

/// Finish the match once either score reaches the winning score.
///
/// The winner is the player only with a strictly greater score.
fn check_game_over(state: &mut GameState, tuning: &Tuning) -> Option<Side> {
    if state.player_score < tuning.winning_score && state.opponent_score < tuning.winning_score {
        return None;
    }
    let winner = if state.player_score > state.opponent_score {
        Side::Player
    } else {
        Side::Opponent
    };
    state.phase = GamePhase::Finished;
    state.winner = Some(winner);
    Some(winner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::MoveIntent;
    use crate::sim::TrackingPolicy;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn running(tuning: &Tuning) -> (GameState, Pcg32) {
        let mut rng = Pcg32::seed_from_u64(12345);
        let state = GameState::new_match(tuning, &mut rng);
        (state, rng)
    }

    #[test]
    fn test_ball_advances() {
        let tuning = Tuning::default();
        let (mut state, mut rng) = running(&tuning);
        state.ball_vel = Vec2::new(5.0, -5.0);

        let events = step(&mut state, &TickInput::default(), &tuning, &mut rng);
        assert!(events.is_empty());
        assert_eq!(state.ball_pos, Vec2::new(405.0, 245.0));
    }

    #[test]
    fn test_paddle_collision_beats_exit() {
        // Court 800x500, ball at (5, 250) heading left, paddle over row 250
        let tuning = Tuning::default();
        let (mut state, mut rng) = running(&tuning);
        state.ball_pos = Vec2::new(5.0, 250.0);
        state.ball_vel = Vec2::new(-5.0, 0.0);
        state.player_paddle_y = 200.0;

        let events = step(&mut state, &TickInput::default(), &tuning, &mut rng);
        assert_eq!(events, vec![GameEvent::PaddleHit(Side::Player)]);
        assert_eq!(state.ball_vel.x, 5.0);
        assert_eq!(state.ball_pos.x, 0.0);
        assert_eq!((state.player_score, state.opponent_score), (0, 0));
    }

    #[test]
    fn test_ball_inside_paddle_plane_reverses_even_when_leaving() {
        let tuning = Tuning::default();
        let (mut state, mut rng) = running(&tuning);
        state.ball_pos = Vec2::new(0.0, 250.0);
        state.ball_vel = Vec2::new(5.0, 0.0);
        state.player_paddle_y = 200.0;

        let events = step(&mut state, &TickInput::default(), &tuning, &mut rng);
        assert_eq!(events, vec![GameEvent::PaddleHit(Side::Player)]);
        assert_eq!(state.ball_pos.x, 5.0);
        assert_eq!(state.ball_vel.x, -5.0);
    }

    #[test]
    fn test_exit_left_scores_for_opponent() {
        let tuning = Tuning::default();
        let (mut state, mut rng) = running(&tuning);
        state.ball_pos = Vec2::new(3.0, 50.0);
        state.ball_vel = Vec2::new(-5.0, 5.0);
        state.player_paddle_y = 200.0;

        let events = step(&mut state, &TickInput::default(), &tuning, &mut rng);
        assert_eq!(events, vec![GameEvent::Scored(Side::Opponent)]);
        assert_eq!(state.opponent_score, 1);
        assert_eq!(state.player_score, 0);
        assert_eq!(state.ball_pos, Vec2::new(400.0, 250.0));
        assert_eq!(state.ball_vel.x, 5.0);
        assert_eq!(state.ball_vel.y.abs(), 5.0);
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_winning_point_finishes_match() {
        let tuning = Tuning::default();
        let (mut state, mut rng) = running(&tuning);
        state.player_score = 4;
        state.opponent_score = 3;
        state.opponent_paddle_y = 0.0;
        state.ball_pos = Vec2::new(797.0, 250.0);
        state.ball_vel = Vec2::new(5.0, 0.0);

        let events = step(&mut state, &TickInput::default(), &tuning, &mut rng);
        assert_eq!(
            events,
            vec![
                GameEvent::Scored(Side::Player),
                GameEvent::MatchOver(Side::Player)
            ]
        );
        assert_eq!((state.player_score, state.opponent_score), (5, 3));
        assert_eq!(state.phase, GamePhase::Finished);
        assert_eq!(state.winner, Some(Side::Player));

        // Frozen from here on
        let frozen = state.clone();
        for _ in 0..200 {
            assert!(step(&mut state, &TickInput::default(), &tuning, &mut rng).is_empty());
        }
        assert_eq!(state, frozen);
    }

    #[test]
    fn test_opponent_can_win() {
        let tuning = Tuning {
            winning_score: 1,
            ..Default::default()
        };
        let (mut state, mut rng) = running(&tuning);
        state.ball_pos = Vec2::new(2.0, 20.0);
        state.ball_vel = Vec2::new(-5.0, 0.0);

        step(&mut state, &TickInput::default(), &tuning, &mut rng);
        assert_eq!(state.winner, Some(Side::Opponent));
    }

    #[test]
    fn test_paused_step_is_noop() {
        let tuning = Tuning::default();
        let (mut state, mut rng) = running(&tuning);
        state.phase = GamePhase::Paused;
        let before = state.clone();

        let input = TickInput {
            key_intent: MoveIntent::Down,
            pointer_y: Some(10.0),
        };
        assert!(step(&mut state, &input, &tuning, &mut rng).is_empty());
        assert_eq!(state, before);
    }

    #[test]
    fn test_key_intent_moves_player() {
        let tuning = Tuning::default();
        let (mut state, mut rng) = running(&tuning);
        let input = TickInput {
            key_intent: MoveIntent::Down,
            pointer_y: None,
        };
        step(&mut state, &input, &tuning, &mut rng);
        assert_eq!(state.player_paddle_y, 208.0);
    }

    #[test]
    fn test_pending_intent_overrides_keys() {
        let tuning = Tuning::default();
        let (mut state, mut rng) = running(&tuning);
        state.pending_move_intent = MoveIntent::Up;
        let input = TickInput {
            key_intent: MoveIntent::Down,
            pointer_y: None,
        };
        step(&mut state, &input, &tuning, &mut rng);
        assert_eq!(state.player_paddle_y, 192.0);
    }

    #[test]
    fn test_player_paddle_clamped() {
        let tuning = Tuning::default();
        let (mut state, mut rng) = running(&tuning);
        state.player_paddle_y = 3.0;
        let input = TickInput {
            key_intent: MoveIntent::Up,
            pointer_y: None,
        };
        step(&mut state, &input, &tuning, &mut rng);
        assert_eq!(state.player_paddle_y, 0.0);
    }

    #[test]
    fn test_pointer_target_centers_paddle() {
        let tuning = Tuning::default();
        let (mut state, mut rng) = running(&tuning);
        let input = TickInput {
            key_intent: MoveIntent::Neutral,
            pointer_y: Some(120.0),
        };
        step(&mut state, &input, &tuning, &mut rng);
        assert_eq!(state.player_paddle_y, 70.0);

        let input = TickInput {
            key_intent: MoveIntent::Neutral,
            pointer_y: Some(495.0),
        };
        step(&mut state, &input, &tuning, &mut rng);
        assert_eq!(state.player_paddle_y, 400.0);
    }

    #[test]
    fn test_opponent_tracking_in_step() {
        let mut tuning = Tuning {
            opponent: TrackingPolicy::Proportional { gain: 0.1 },
            ..Default::default()
        };
        let (mut state, mut rng) = running(&tuning);
        state.opponent_paddle_y = 150.0;
        state.ball_pos = Vec2::new(400.0, 400.0);
        state.ball_vel = Vec2::new(5.0, 0.0);

        step(&mut state, &TickInput::default(), &tuning, &mut rng);
        assert!((state.opponent_paddle_y - 170.0).abs() < 1e-4);

        tuning.opponent = TrackingPolicy::default();
        state.opponent_paddle_y = 150.0;
        state.ball_pos = Vec2::new(400.0, 400.0);
        step(&mut state, &TickInput::default(), &tuning, &mut rng);
        assert!((state.opponent_paddle_y - 154.0).abs() < 1e-4);
    }

    #[test]
    fn test_wall_bounce_event() {
        let tuning = Tuning::default();
        let (mut state, mut rng) = running(&tuning);
        state.ball_pos = Vec2::new(400.0, 5.0);
        state.ball_vel = Vec2::new(5.0, -5.0);

        let events = step(&mut state, &TickInput::default(), &tuning, &mut rng);
        assert_eq!(events, vec![GameEvent::WallBounce]);
        assert_eq!(state.ball_pos.y, 0.0);
        assert_eq!(state.ball_vel.y, 5.0);
    }
}
