//! Session tests: commands, clock wiring and serialization of what the host
//! sees.

use std::time::Duration;

use titan_circuits::core::ConstructionError;
use titan_circuits::{
    ActionError, BoardLayout, Circuit, ClockEvent, ClockState, Command, EndReason, GameConfig,
    GameEvent, GameResult, MatchSnapshot, NodeId, Player, Session, TieBreak,
};

fn id(text: &str) -> NodeId {
    text.parse().unwrap()
}

fn secs(n: u64) -> Duration {
    Duration::from_secs(n)
}

#[test]
fn test_commands_before_start_are_refused() {
    let mut session = Session::new(GameConfig::default()).unwrap();

    assert_eq!(session.submit(Command::Click(id("outer-0"))), Err(ActionError::NotRunning));
    assert_eq!(session.submit(Command::Pause), Err(ActionError::NotRunning));
    assert_eq!(session.submit(Command::Resume), Err(ActionError::NotRunning));
    assert!(session.tick(secs(500)).is_empty());
    assert_eq!(session.clock().match_remaining(), secs(300));
}

#[test]
fn test_pause_resume_keeps_remaining_time() {
    let mut session = Session::new(GameConfig::default()).unwrap();
    session.submit(Command::Start).unwrap();
    session.tick(secs(10));

    session.submit(Command::Pause).unwrap();
    assert_eq!(session.submit(Command::Pause), Err(ActionError::Paused));
    session.tick(secs(120));
    assert_eq!(session.clock().turn_remaining(), secs(20));
    assert_eq!(session.clock().match_remaining(), secs(290));

    session.submit(Command::Resume).unwrap();
    assert_eq!(session.submit(Command::Resume), Err(ActionError::NotPaused));
    let outcome = session.tick(secs(20));
    assert_eq!(
        outcome.events(),
        &[GameEvent::TurnPassed { to: Player::Blue, timed_out: true }]
    );
}

#[test]
fn test_idle_players_alternate_on_timeouts() {
    let mut session = Session::new(GameConfig::default()).unwrap();
    session.start().unwrap();

    let outcome = session.tick(secs(95));
    let passes: Vec<_> = outcome
        .events()
        .iter()
        .filter_map(|e| match e {
            GameEvent::TurnPassed { to, timed_out: true } => Some(*to),
            _ => None,
        })
        .collect();
    assert_eq!(passes, vec![Player::Blue, Player::Red, Player::Blue]);
    assert_eq!(session.state().turn_number(), 4);
    assert_eq!(session.clock().turn_remaining(), secs(25));
}

#[test]
fn test_match_expiry_draws_on_equal_scores() {
    let mut session = Session::new(GameConfig::default()).unwrap();
    session.start().unwrap();

    let outcome = session.tick(secs(300));
    let result = outcome.match_result().copied().unwrap();
    assert_eq!(result.result, GameResult::Draw);
    assert_eq!(result.reason, EndReason::TimeExpired);
    assert!(matches!(outcome.events().last(), Some(GameEvent::MatchEnded(_))));
    assert_eq!(session.clock().state(), ClockState::Cancelled);

    assert!(session.tick(secs(300)).is_empty());
    assert!(session.handle_clock(ClockEvent::MatchTimeout).is_empty());
    assert_eq!(session.submit(Command::Start), Err(ActionError::AlreadyOver));
}

#[test]
fn test_match_expiry_with_favoured_side() {
    let config = GameConfig::default().with_tie_break(TieBreak::Favor(Player::Blue));
    let mut session = Session::new(config).unwrap();
    session.start().unwrap();

    let outcome = session.handle_clock(ClockEvent::MatchTimeout);
    let result = outcome.match_result().copied().unwrap();
    assert_eq!(result.result, GameResult::Winner(Player::Blue));
    assert_eq!(session.clock().state(), ClockState::Cancelled);
}

#[test]
fn test_reset_allows_new_match() {
    let mut session = Session::new(GameConfig::default()).unwrap();
    session.start().unwrap();
    session.handle_clock(ClockEvent::MatchTimeout);
    assert!(session.state().is_over());

    session.submit(Command::Reset).unwrap();
    assert!(!session.state().is_over());
    assert!(!session.state().is_running());
    session.submit(Command::Start).unwrap();
    assert!(session.submit(Command::Click(id("outer-2"))).is_ok());
}

#[test]
fn test_commands_from_json() {
    let start: Command = serde_json::from_str(r#"{"command":"start"}"#).unwrap();
    assert_eq!(start, Command::Start);

    let place: Command = serde_json::from_str(r#"{"command":"place_at","node":7}"#).unwrap();
    assert_eq!(place, Command::PlaceAt(id("middle-1")));

    let json = serde_json::to_string(&Command::Click(id("inner-5"))).unwrap();
    assert_eq!(json, r#"{"command":"click","node":17}"#);
}

#[test]
fn test_events_serialize_with_type_tag() {
    let event = GameEvent::PiecePlaced { node: id("outer-2"), player: Player::Red };
    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["type"], "piece_placed");
    assert_eq!(value["player"], "red");
    assert_eq!(value["node"], 2);
}

#[test]
fn test_snapshot_json_round_trip() {
    let mut session = Session::new(GameConfig::default()).unwrap();
    session.start().unwrap();
    for node in ["outer-0", "outer-3", "outer-1"] {
        session.click(id(node)).unwrap();
    }
    session.tick(secs(5));

    let snapshot = session.snapshot();
    assert_eq!(snapshot.turn_remaining, secs(25));
    assert_eq!(snapshot.match_remaining, secs(295));
    assert_eq!(snapshot.players[Player::Red].placed, 2);

    let json = serde_json::to_string(&snapshot).unwrap();
    let back: MatchSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back.edges, snapshot.edges);
    assert_eq!(back.players, snapshot.players);
    assert_eq!(back.turn_remaining, snapshot.turn_remaining);
    assert_eq!(back.active_player, Player::Blue);
    assert_eq!(back.node(id("outer-3")).map(|n| n.occupant), Some(Some(Player::Blue)));
}

#[test]
fn test_oversized_weights_refused_at_build() {
    let layout = BoardLayout::default().with_ring_weights(Circuit::Outer, [u32::MAX; 6]);
    let config = GameConfig::default().with_layout(layout);
    assert_eq!(Session::new(config).err(), Some(ConstructionError::WeightOverflow));
}

#[test]
fn test_large_weights_score_without_overflow() {
    let spare = u32::MAX - 102;
    let layout = BoardLayout::default().with_ring_weights(Circuit::Outer, [spare, 1, 1, 1, 1, 1]);
    let mut session = Session::new(GameConfig::default().with_layout(layout)).unwrap();
    session.start().unwrap();

    for node in ["outer-0", "outer-3", "outer-1", "outer-4", "outer-2"] {
        session.click(id(node)).unwrap();
    }
    assert_eq!(session.state().score(Player::Red), spare + 1);
}

#[test]
fn test_sub_second_turns_refused() {
    let config = GameConfig::default().with_turn_duration(Duration::from_micros(1));
    assert!(matches!(
        Session::new(config).err(),
        Some(ConstructionError::TurnTooShort { .. })
    ));
}
