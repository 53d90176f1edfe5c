//! Tests for the round lifecycle, scoreboard, and observers.

use strictly_minimax::{Mark, Position, best_move};
use strictly_solo::{
    FirstPlayer, MoveError, RoundEvent, RoundStatus, Session, Side, SoloConfig, selfplay,
};
use tokio::sync::mpsc;

fn session_with_events() -> (Session, mpsc::UnboundedReceiver<RoundEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let session = Session::new(&SoloConfig::default().without_delay()).with_observer(tx);
    (session, rx)
}

fn drain(rx: &mut mpsc::UnboundedReceiver<RoundEvent>) -> Vec<RoundEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

/// Human opens in a corner, then ignores the diagonal threat.
fn lose_a_round(session: &mut Session) {
    session.play_human(Position::TopLeft).unwrap();
    assert_eq!(session.play_computer(), Ok(Position::Center));
    session.play_human(Position::TopCenter).unwrap();
    assert_eq!(session.play_computer(), Ok(Position::TopRight));
    session.play_human(Position::BottomRight).unwrap();
    assert_eq!(session.play_computer(), Ok(Position::BottomLeft));
}

#[test]
fn test_computer_punishes_mistake() {
    let (mut session, mut rx) = session_with_events();
    lose_a_round(&mut session);

    assert_eq!(session.status(), RoundStatus::ComputerWon);
    assert_eq!(session.scoreboard().computer_wins(), 1);
    assert_eq!(session.scoreboard().rounds(), 1);

    let line = session.winning_line().unwrap();
    assert!(line.contains(Position::TopRight));
    assert!(line.contains(Position::BottomLeft));

    let events = drain(&mut rx);
    let moves = events
        .iter()
        .filter(|e| matches!(e, RoundEvent::MovePlayed { .. }))
        .count();
    assert_eq!(moves, 6);
    assert_eq!(
        events.last(),
        Some(&RoundEvent::RoundOver {
            status: RoundStatus::ComputerWon
        })
    );
}

#[test]
fn test_finished_round_rejects_moves() {
    let (mut session, _rx) = session_with_events();
    lose_a_round(&mut session);

    assert_eq!(session.play_human(Position::MiddleLeft), Err(MoveError::RoundOver));
    assert_eq!(session.play_computer(), Err(MoveError::RoundOver));
    assert_eq!(session.scoreboard().computer_wins(), 1);
}

#[test]
fn test_new_round_keeps_scores() {
    let (mut session, mut rx) = session_with_events();
    lose_a_round(&mut session);
    drain(&mut rx);

    session.new_round();
    assert_eq!(session.round(), 2);
    assert_eq!(session.status(), RoundStatus::HumanTurn);
    assert!(session.history().is_empty());
    assert_eq!(session.board().empty_count(), 9);
    assert_eq!(session.scoreboard().computer_wins(), 1);
    assert_eq!(drain(&mut rx), vec![RoundEvent::RoundStarted { round: 2 }]);
}

#[test]
fn test_reset_scores_starts_fresh_round() {
    let (mut session, mut rx) = session_with_events();
    lose_a_round(&mut session);
    drain(&mut rx);

    session.reset_scores();
    assert_eq!(session.scoreboard().rounds(), 0);
    assert_eq!(session.round(), 2);
    assert_eq!(
        drain(&mut rx),
        vec![RoundEvent::ScoresReset, RoundEvent::RoundStarted { round: 2 }]
    );
}

#[test]
fn test_perfect_human_ties() {
    let (mut session, mut rx) = session_with_events();
    let human = session.mark_of(Side::Human);

    while session.status() == RoundStatus::HumanTurn {
        let pos = best_move(session.board(), human).unwrap();
        session.play_human(pos).unwrap();
        if session.status() == RoundStatus::ComputerTurn {
            session.play_computer().unwrap();
        }
    }

    assert_eq!(session.status(), RoundStatus::Tie);
    assert_eq!(session.scoreboard().ties(), 1);
    let over = drain(&mut rx)
        .into_iter()
        .filter(|e| matches!(e, RoundEvent::RoundOver { .. }))
        .count();
    assert_eq!(over, 1);
}

#[test]
fn test_human_playing_o() {
    let config = SoloConfig::default()
        .without_delay()
        .with_human_mark(Mark::O)
        .with_first_player(FirstPlayer::Computer);
    let mut session = Session::new(&config);

    let opening = session.play_computer().unwrap();
    assert_eq!(session.board().get(opening).mark(), Some(Mark::X));
    assert_eq!(session.status(), RoundStatus::HumanTurn);
}

#[test]
fn test_selfplay_always_ties() {
    for first in [FirstPlayer::Human, FirstPlayer::Computer] {
        let report = selfplay(Mark::X, first).unwrap();
        assert_eq!(report.status, RoundStatus::Tie);
        assert_eq!(report.moves.len(), 9);
        let expected_first = match first {
            FirstPlayer::Human => Side::Human,
            FirstPlayer::Computer => Side::Computer,
        };
        assert_eq!(report.moves[0].0, expected_first);
    }
}
