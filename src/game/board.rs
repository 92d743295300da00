//! Board generation: dealing 25 words and their hidden colour layout.

use log::debug;
use rand::seq::{IndexedRandom, SliceRandom};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::iter::repeat_n;
use thiserror::Error;

use super::constants::{
    ASSASSIN_CARDS, BOARD_SIZE, CIVILIAN_CARDS, MIN_POOL_SIZE, SECOND_TEAM_AGENTS,
    STARTING_TEAM_AGENTS,
};
use super::entities::{Card, CardColor, CardId, GameState, Phase, RoomCode, Scores, Team};
use super::state_machine::GameEvent;
use super::words::WordCategory;

/// Errors that can occur while dealing a board.
#[derive(Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum BoardError {
    /// The one hard failure in the crate: a valid board cannot exist.
    #[error("word pool has {available} distinct words, need 25")]
    PoolExhausted { available: usize },
}

/// Deals a fresh room in the `Lobby` phase: 25 cards drawn from the
/// category's pool, an empty roster, default scores, and a single seed
/// log entry. Red moves first and owns the 9-card colour.
pub fn generate_board(
    room_code: RoomCode,
    category: WordCategory,
) -> Result<GameState, BoardError> {
    generate_board_from_pool(room_code, category, category.pool())
}

/// Same as [`generate_board`], but draws from an explicit pool instead
/// of the category's built-in one. The category is still recorded on
/// the state for informational purposes.
pub fn generate_board_from_pool(
    room_code: RoomCode,
    category: WordCategory,
    pool: &[&str],
) -> Result<GameState, BoardError> {
    let board = deal_board(pool)?;
    debug!("room {room_code}: dealt a fresh {category} board");
    let mut state = GameState {
        room_code,
        phase: Phase::Lobby,
        turn: Team::Red,
        board,
        players: Vec::new(),
        scores: Scores::default(),
        winner: None,
        logs: Vec::new(),
        current_clue: None,
        category,
        timer_seconds: None,
    };
    state.record(GameEvent::RoomOpened {
        room_code: state.room_code.clone(),
    });
    Ok(state)
}

/// Picks 25 distinct words uniformly without replacement and pairs them
/// with a uniformly shuffled 9/8/7/1 colour sequence. The two
/// permutations are independent.
pub(crate) fn deal_board(pool: &[&str]) -> Result<Vec<Card>, BoardError> {
    let mut seen = HashSet::new();
    let distinct: Vec<&str> = pool.iter().copied().filter(|w| seen.insert(*w)).collect();
    if distinct.len() < MIN_POOL_SIZE {
        return Err(BoardError::PoolExhausted {
            available: distinct.len(),
        });
    }

    let mut rng = rand::rng();
    let words: Vec<&str> = distinct
        .choose_multiple(&mut rng, BOARD_SIZE)
        .copied()
        .collect();

    let mut colors: Vec<CardColor> = Vec::with_capacity(BOARD_SIZE);
    colors.extend(repeat_n(CardColor::Red, STARTING_TEAM_AGENTS as usize));
    colors.extend(repeat_n(CardColor::Blue, SECOND_TEAM_AGENTS as usize));
    colors.extend(repeat_n(CardColor::Civilian, CIVILIAN_CARDS));
    colors.extend(repeat_n(CardColor::Assassin, ASSASSIN_CARDS));
    colors.shuffle(&mut rng);

    Ok(words
        .into_iter()
        .zip(colors)
        .enumerate()
        .map(|(index, (word, color))| Card {
            id: CardId::from_index(index),
            word: word.to_string(),
            color,
            revealed: false,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(state: &GameState, color: CardColor) -> usize {
        state.board.iter().filter(|c| c.color == color).count()
    }

    #[test]
    fn test_board_composition() {
        let state = generate_board("COMP".into(), WordCategory::Classic).unwrap();
        assert_eq!(state.board.len(), BOARD_SIZE);
        assert_eq!(count(&state, CardColor::Red), 9);
        assert_eq!(count(&state, CardColor::Blue), 8);
        assert_eq!(count(&state, CardColor::Civilian), 7);
        assert_eq!(count(&state, CardColor::Assassin), 1);
    }

    #[test]
    fn test_board_words_and_ids_are_distinct() {
        let state = generate_board("DIST".into(), WordCategory::Nature).unwrap();
        let words: HashSet<_> = state.board.iter().map(|c| c.word.as_str()).collect();
        let ids: HashSet<_> = state.board.iter().map(|c| c.id.clone()).collect();
        assert_eq!(words.len(), BOARD_SIZE);
        assert_eq!(ids.len(), BOARD_SIZE);
    }

    #[test]
    fn test_board_words_come_from_the_pool() {
        let state = generate_board("POOL".into(), WordCategory::Mythology).unwrap();
        for card in &state.board {
            assert!(WordCategory::Mythology.pool().contains(&card.word.as_str()));
        }
    }

    #[test]
    fn test_fresh_room_starts_in_lobby() {
        let state = generate_board("ab1d".into(), WordCategory::Classic).unwrap();
        assert_eq!(state.room_code.to_string(), "AB1D");
        assert_eq!(state.phase, Phase::Lobby);
        assert_eq!(state.turn, Team::Red);
        assert!(state.players.is_empty());
        assert_eq!(state.scores.red, 9);
        assert_eq!(state.scores.blue, 8);
        assert!(state.winner.is_none());
        assert!(state.current_clue.is_none());
        assert!(state.board.iter().all(|c| !c.revealed));
        assert_eq!(state.logs.len(), 1);
    }

    #[test]
    fn test_small_pool_is_rejected() {
        let pool: Vec<String> = (0..24).map(|i| format!("WORD{i}")).collect();
        let pool: Vec<&str> = pool.iter().map(String::as_str).collect();
        let err = generate_board_from_pool("TINY".into(), WordCategory::Classic, &pool)
            .expect_err("24 words cannot fill a 25-card board");
        assert_eq!(err, BoardError::PoolExhausted { available: 24 });
    }

    #[test]
    fn test_duplicates_do_not_count_toward_the_minimum() {
        let pool: Vec<&str> = repeat_n("ECHO", 30).collect();
        let err = generate_board_from_pool("DUPE".into(), WordCategory::Classic, &pool)
            .expect_err("a pool of one repeated word is exhausted");
        assert_eq!(err, BoardError::PoolExhausted { available: 1 });
    }
}
