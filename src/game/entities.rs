use rand::seq::IndexedRandom;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::constants;
use super::words::WordCategory;

/// One of the two competing teams. Red always starts and therefore
/// carries the 9-card colour.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Red,
    Blue,
}

impl Team {
    /// The opposing team.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Red => Self::Blue,
            Self::Blue => Self::Red,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Blue => "Blue",
        }
    }

    /// Upper-case form used by mission log lines.
    #[must_use]
    pub const fn name_upper(self) -> &'static str {
        match self {
            Self::Red => "RED",
            Self::Blue => "BLUE",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// What a player is allowed to do on their team.
///
/// Spymasters give clues and may not reveal cards; operatives reveal
/// cards and may not give clues.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Operative,
    Spymaster,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Operative => "operative",
            Self::Spymaster => "spymaster",
        };
        write!(f, "{repr}")
    }
}

/// Lifecycle phase of a room. `GameOver` is terminal except for an
/// explicit restart, which rebuilds the board and returns to `Lobby`.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Lobby,
    Playing,
    GameOver,
}

/// Colour assignment of a board card. The wire tag names match the
/// legacy client (`"civilian"` rather than "neutral").
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardColor {
    Red,
    Blue,
    Civilian,
    Assassin,
}

impl CardColor {
    /// The team owning this colour, if any.
    #[must_use]
    pub const fn team(self) -> Option<Team> {
        match self {
            Self::Red => Some(Team::Red),
            Self::Blue => Some(Team::Blue),
            Self::Civilian | Self::Assassin => None,
        }
    }
}

impl From<Team> for CardColor {
    fn from(value: Team) -> Self {
        match value {
            Team::Red => Self::Red,
            Team::Blue => Self::Blue,
        }
    }
}

/// Identifier of a board card, stable for the lifetime of the board.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct CardId(String);

impl CardId {
    /// Positional id in the legacy `card-{index}` form.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self(format!("card-{index}"))
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for CardId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A single board card. Immutable once dealt, except for `revealed`
/// which transitions false to true exactly once.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Card {
    pub id: CardId,
    pub word: String,
    /// Serialized under the legacy `"type"` key.
    #[serde(rename = "type")]
    pub color: CardColor,
    pub revealed: bool,
}

/// Volatile transport-session identity of a player. Changes whenever
/// the underlying connection is re-established.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct PlayerId(String);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for PlayerId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for PlayerId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Persistent device identity used to re-associate a reconnecting
/// session with its existing player record.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct DeviceId(String);

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for DeviceId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for DeviceId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A participant in a room.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub team: Team,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<DeviceId>,
}

/// A spymaster's hint: one word plus the number of cards it points at.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Clue {
    pub word: String,
    pub number: u8,
}

impl Clue {
    #[must_use]
    pub fn new(word: &str, number: u8) -> Self {
        Self {
            word: word.trim().to_string(),
            number,
        }
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = format!("{} ({})", self.word.to_uppercase(), self.number);
        write!(f, "{repr}")
    }
}

/// Remaining unrevealed agent counts per team. Decrement-only; a team
/// reaching zero has cleared its colour and wins.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Scores {
    pub red: u8,
    pub blue: u8,
}

impl Default for Scores {
    fn default() -> Self {
        Self {
            red: constants::STARTING_TEAM_AGENTS,
            blue: constants::SECOND_TEAM_AGENTS,
        }
    }
}

impl Scores {
    #[must_use]
    pub const fn get(&self, team: Team) -> u8 {
        match team {
            Team::Red => self.red,
            Team::Blue => self.blue,
        }
    }

    /// Decrements the team's count, saturating at zero, and returns the
    /// remaining count.
    pub fn decrement(&mut self, team: Team) -> u8 {
        let slot = match team {
            Team::Red => &mut self.red,
            Team::Blue => &mut self.blue,
        };
        *slot = slot.saturating_sub(1);
        *slot
    }
}

/// Alphabet used for generated room codes.
const ROOM_CODE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Short identifier grouping one game's participants and state.
///
/// Codes are case-insensitive on input but always stored upper-case,
/// so `"ab1d"` and `"AB1D"` address the same room.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct RoomCode(String);

impl RoomCode {
    #[must_use]
    pub fn new(s: &str) -> Self {
        Self(s.trim().to_uppercase())
    }

    /// Generates a fresh 4-character code. Uniqueness is probabilistic;
    /// collision handling (regenerate on conflict) is the caller's job.
    #[must_use]
    pub fn random() -> Self {
        let mut rng = rand::rng();
        let code: String = (0..constants::ROOM_CODE_LENGTH)
            .map(|_| *ROOM_CODE_CHARSET.choose(&mut rng).unwrap_or(&b'A') as char)
            .collect();
        Self(code)
    }
}

impl fmt::Display for RoomCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<'de> Deserialize<'de> for RoomCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::new(&s))
    }
}

impl From<&str> for RoomCode {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// The aggregate game record for one room: the single source of truth
/// every transition consumes and reproduces.
///
/// Transitions never mutate a state in place; they clone, apply their
/// changes, and hand the fresh value back to the caller, which is
/// expected to persist and broadcast it (see the crate docs for the
/// collaborator contract).
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub room_code: RoomCode,
    pub phase: Phase,
    pub turn: Team,
    pub board: Vec<Card>,
    pub players: Vec<Player>,
    pub scores: Scores,
    pub winner: Option<Team>,
    /// Append-only mission log. Replaced wholesale only by a restart.
    pub logs: Vec<String>,
    pub current_clue: Option<Clue>,
    /// Word category the board was (or will next be) built from.
    #[serde(default)]
    pub category: WordCategory,
    /// Client countdown duration. Informational only; no rule consults it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timer_seconds: Option<u32>,
}

impl GameState {
    /// The host: first-joined player still present. Not a stored flag,
    /// so removals promote the next player automatically.
    #[must_use]
    pub fn host(&self) -> Option<&Player> {
        self.players.first()
    }

    #[must_use]
    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == *id)
    }

    #[must_use]
    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.board.iter().find(|c| c.id == *id)
    }

    /// Number of players currently on `team`.
    #[must_use]
    pub fn team_size(&self, team: Team) -> usize {
        self.players.iter().filter(|p| p.team == team).count()
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver)
    }
}
