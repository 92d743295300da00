//! Game-wide constants.

/// Number of cards on a board.
pub const BOARD_SIZE: usize = 25;

/// Agent cards dealt to the starting team (always Red).
pub const STARTING_TEAM_AGENTS: u8 = 9;

/// Agent cards dealt to the second team.
pub const SECOND_TEAM_AGENTS: u8 = 8;

/// Civilian (neutral) cards per board.
pub const CIVILIAN_CARDS: usize = 7;

/// Assassin cards per board. Exactly one.
pub const ASSASSIN_CARDS: usize = 1;

/// Length of a room code.
pub const ROOM_CODE_LENGTH: usize = 4;

/// Minimum number of distinct words a pool must provide to build a board.
pub const MIN_POOL_SIZE: usize = BOARD_SIZE;
