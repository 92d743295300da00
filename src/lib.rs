//! # Operative
//!
//! A Codenames-style word-deduction party game engine.
//!
//! Two teams race to clear their own colour from a 25-card board of
//! words while avoiding the assassin. Spymasters transmit one-word
//! clues; operatives reveal cards. This crate is the authoritative rule
//! engine for that game: it validates every move, applies team, role
//! and turn rules, and produces the next immutable [`GameState`] along
//! with human-readable mission log lines.
//!
//! ## Architecture
//!
//! Every operation is a pure function from a state snapshot and its
//! inputs to a fresh snapshot. A room moves through three phases:
//!
//! - **Lobby**: the board is dealt, players join and pick teams/roles
//! - **Playing**: teams alternate giving clues and revealing cards
//! - **GameOver**: terminal, until an explicit restart re-deals the
//!   board and returns the room (roster intact) to the lobby
//!
//! Rejected actions return an error and leave the input state
//! untouched; the engine itself enforces phase, turn-ownership and
//! role rules, so transports need no rule knowledge of their own.
//!
//! ## Collaborator contract
//!
//! The engine never talks to storage or the network. A hosting layer is
//! expected to, per inbound action: load the current state by room
//! code, apply the transition, persist the result (keyed by room code,
//! with whatever retention window it wants), and broadcast the new
//! snapshot to every session in the room. Each room's state must be
//! serialized through a single writer at a time (one actor or lock per
//! room code); two concurrent reveals applied to the same snapshot
//! would otherwise double-apply score effects. Rooms are fully
//! independent of each other. Room-code uniqueness is probabilistic —
//! regenerate on collision before creating the room.
//!
//! ## Example
//!
//! ```
//! use operative::{Clue, RoomCode, StartOptions, WordCategory, generate_board};
//!
//! let room = generate_board(RoomCode::new("ab1d"), WordCategory::Classic)?;
//! let room = room
//!     .add_player("session-1".into(), "alice", None)
//!     .add_player("session-2".into(), "bob", None);
//! let room = room.start_game(&StartOptions::default())?;
//! assert!(room.give_clue(&"session-2".into(), Clue::new("ocean", 2)).is_err());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Core game logic, entities, and state machine.
pub mod game;
pub use game::{
    board::{BoardError, generate_board, generate_board_from_pool},
    constants,
    entities::{
        Card, CardColor, CardId, Clue, DeviceId, GameState, Phase, Player, PlayerId, Role,
        RoomCode, Scores, Team,
    },
    roster::{PlayerUpdate, RosterError},
    state_machine::{ActionError, GameEvent, StartOptions},
    words::WordCategory,
};
