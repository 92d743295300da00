/// Integration tests for game flow scenarios
///
/// These tests run whole missions against the public API: lobby setup,
/// clue/reveal/turn cycles, win and loss endings, restarts, and
/// reconnection handling.
use operative::{
    ActionError, CardColor, CardId, Clue, GameState, Phase, PlayerUpdate, Role, RoomCode,
    StartOptions, Team, WordCategory, generate_board,
};

/// Lobby with spymaster + operative per team: s1/s3 red, s2/s4 blue.
fn lobby() -> GameState {
    let state = generate_board(RoomCode::new("GAME"), WordCategory::Classic).unwrap();
    let state = state
        .add_player("s1".into(), "alice", Some("dev-alice".into()))
        .add_player("s2".into(), "bob", None)
        .add_player("s3".into(), "carol", None)
        .add_player("s4".into(), "dave", None);
    let state = promote(state, "s1");
    promote(state, "s2")
}

fn promote(state: GameState, id: &str) -> GameState {
    state
        .update_player(
            &id.into(),
            PlayerUpdate {
                role: Some(Role::Spymaster),
                ..PlayerUpdate::default()
            },
        )
        .unwrap()
}

fn playing() -> GameState {
    lobby().start_game(&StartOptions::default()).unwrap()
}

fn unrevealed_card(state: &GameState, color: CardColor) -> CardId {
    state
        .board
        .iter()
        .find(|c| c.color == color && !c.revealed)
        .map(|c| c.id.clone())
        .expect("ran out of that colour")
}

#[test]
fn test_red_sweeps_the_board_and_wins() {
    let mut state = playing()
        .give_clue(&"s1".into(), Clue::new("everything", 9))
        .unwrap();

    // Own-colour reveals keep the turn, so red can run the table.
    for expected_remaining in (0..9).rev() {
        let card = unrevealed_card(&state, CardColor::Red);
        state = state.reveal_card(&"s3".into(), &card).unwrap();
        assert_eq!(state.scores.red, expected_remaining);
    }

    assert_eq!(state.phase, Phase::GameOver);
    assert_eq!(state.winner, Some(Team::Red));
    assert_eq!(state.turn, Team::Red);
    assert_eq!(state.logs.last().unwrap(), "MISSION ACCOMPLISHED: RED Wins!");
    // Room seed + mission start + clue + 9 reveals + the win banner.
    assert_eq!(state.logs.len(), 13);
}

#[test]
fn test_a_full_turn_cycle() {
    let state = playing();

    // Red's spymaster hints, red's operative hits a blue card.
    let state = state.give_clue(&"s1".into(), Clue::new("water", 2)).unwrap();
    let blue_card = unrevealed_card(&state, CardColor::Blue);
    let state = state.reveal_card(&"s3".into(), &blue_card).unwrap();
    assert_eq!(state.turn, Team::Blue);
    assert_eq!(state.scores.blue, 7);
    assert!(state.current_clue.is_none());

    // Blue takes over, then passes voluntarily.
    let state = state.give_clue(&"s2".into(), Clue::new("animal", 3)).unwrap();
    assert!(state.current_clue.is_some());
    let state = state.end_turn(&"s4".into()).unwrap();
    assert_eq!(state.turn, Team::Red);
    assert!(state.current_clue.is_none());

    // Back to red; the engine accepts red actions again.
    assert!(state.give_clue(&"s1".into(), Clue::new("retry", 1)).is_ok());
}

#[test]
fn test_assassin_hands_blue_the_win() {
    let state = playing();
    let assassin = unrevealed_card(&state, CardColor::Assassin);
    let state = state.reveal_card(&"s3".into(), &assassin).unwrap();

    assert_eq!(state.phase, Phase::GameOver);
    assert_eq!(state.winner, Some(Team::Blue));
    assert_eq!(state.scores.red, 9);
    assert_eq!(state.scores.blue, 8);
    assert!(state.board.iter().any(|c| c.revealed));
}

#[test]
fn test_rule_violations_are_rejected_without_side_effects() {
    let state = playing();

    // Wrong role, wrong team, unknown actor - and nothing changes.
    let red_card = unrevealed_card(&state, CardColor::Red);
    assert_eq!(
        state
            .give_clue(&"s3".into(), Clue::new("sneaky", 1))
            .unwrap_err(),
        ActionError::NotSpymaster
    );
    assert_eq!(
        state.reveal_card(&"s1".into(), &red_card).unwrap_err(),
        ActionError::NotOperative
    );
    assert_eq!(
        state.reveal_card(&"s4".into(), &red_card).unwrap_err(),
        ActionError::OutOfTurn
    );
    assert_eq!(
        state.end_turn(&"ghost".into()).unwrap_err(),
        ActionError::UnknownPlayer
    );
    assert!(state.board.iter().all(|c| !c.revealed));
    assert!(state.current_clue.is_none());
}

#[test]
fn test_lobby_rejects_mid_game_actions() {
    let state = lobby();
    assert_eq!(
        state
            .give_clue(&"s1".into(), Clue::new("early", 1))
            .unwrap_err(),
        ActionError::GameNotInProgress
    );
    assert_eq!(
        state.end_turn(&"s3".into()).unwrap_err(),
        ActionError::GameNotInProgress
    );
}

#[test]
fn test_restart_lets_the_same_roster_play_again() {
    let state = playing();
    let assassin = unrevealed_card(&state, CardColor::Assassin);
    let over = state.reveal_card(&"s3".into(), &assassin).unwrap();

    let fresh = over.restart().unwrap();
    assert_eq!(fresh.phase, Phase::Lobby);
    assert_eq!(fresh.players, state.players);
    assert_eq!(fresh.logs.len(), 1);
    assert!(fresh.board.iter().all(|c| !c.revealed));

    // The rematch is immediately playable with the same roles.
    let rematch = fresh.start_game(&StartOptions::default()).unwrap();
    assert!(
        rematch
            .give_clue(&"s1".into(), Clue::new("again", 2))
            .is_ok()
    );
}

#[test]
fn test_scores_never_increase_over_a_scripted_game() {
    let mut state = playing();
    let mut last = state.scores;

    // Alternate deliberately bad guesses until somebody ends the game.
    while !state.is_over() {
        let operative = state
            .players
            .iter()
            .find(|p| p.team == state.turn && p.role == Role::Operative)
            .unwrap()
            .id
            .clone();
        let card = state
            .board
            .iter()
            .find(|c| !c.revealed)
            .map(|c| c.id.clone())
            .unwrap();
        state = state.reveal_card(&operative, &card).unwrap();

        assert!(state.scores.red <= last.red);
        assert!(state.scores.blue <= last.blue);
        last = state.scores;
    }
    assert!(state.winner.is_some());
}

#[test]
fn test_reconnect_rebinds_the_session_id() {
    let state = playing();

    // alice drops and comes back under a fresh transport session.
    let found = state.find_by_device(&"dev-alice".into()).unwrap();
    assert_eq!(found.name, "alice");
    let state = state
        .rebind_session(&"dev-alice".into(), "s1-reborn".into())
        .unwrap();

    assert_eq!(state.players.len(), 4);
    assert!(state.player(&"s1".into()).is_none());
    // The rebound session keeps alice's spymaster seat.
    assert!(
        state
            .give_clue(&"s1-reborn".into(), Clue::new("back", 1))
            .is_ok()
    );
}

#[test]
fn test_host_succession_is_positional() {
    let state = lobby();
    assert_eq!(state.host().unwrap().name, "alice");

    let state = state.remove_player(&"s1".into());
    assert_eq!(state.host().unwrap().name, "bob");

    // Removing everyone is allowed; the room owner decides what happens
    // to an empty room.
    let state = state
        .remove_player(&"s2".into())
        .remove_player(&"s3".into())
        .remove_player(&"s4".into());
    assert!(state.players.is_empty());
    assert!(state.host().is_none());
}

#[test]
fn test_team_sizes_stay_within_one_of_each_other() {
    let mut state = generate_board(RoomCode::new("FAIR"), WordCategory::Classic).unwrap();
    for i in 0..9 {
        state = state.add_player(format!("s{i}").into(), &format!("agent{i}"), None);
        let red = state.team_size(Team::Red);
        let blue = state.team_size(Team::Blue);
        assert!(red.abs_diff(blue) <= 1);
    }
}
