//! The move/turn engine: validated transitions over [`GameState`].
//!
//! Every transition is a pure function from a state snapshot and its
//! inputs to a fresh snapshot. A rejected action returns an
//! [`ActionError`] and leaves the input untouched, so callers can relay
//! the reason instead of guessing whether anything happened. The engine
//! enforces phase, turn-ownership and role rules itself; it never talks
//! to storage or the network.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::board::{BoardError, deal_board};
use super::entities::{
    CardColor, CardId, Clue, GameState, Phase, Player, PlayerId, Role, RoomCode, Scores, Team,
};
use super::words::WordCategory;

/// Why an action was rejected. The input state is unchanged whenever
/// one of these comes back.
#[derive(Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum ActionError {
    #[error("game already started")]
    GameAlreadyStarted,
    #[error("game not in progress")]
    GameNotInProgress,
    #[error("player does not exist")]
    UnknownPlayer,
    #[error("card does not exist")]
    UnknownCard,
    #[error("card already revealed")]
    CardAlreadyRevealed,
    #[error("not your team's turn")]
    OutOfTurn,
    #[error("only the spymaster may give clues")]
    NotSpymaster,
    #[error("spymasters may not reveal cards")]
    NotOperative,
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Host-chosen configuration applied when a mission starts.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartOptions {
    /// Picking a category re-rolls the board from that pool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<WordCategory>,
    /// Client countdown duration. Informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timer_seconds: Option<u32>,
}

/// Milestones that end up as lines in the mission log.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum GameEvent {
    RoomOpened { room_code: RoomCode },
    MissionStarted { team: Team },
    ClueGiven { team: Team, clue: Clue },
    AgentFound { team: Team },
    EnemySpyFound { team: Team },
    CivilianHit { team: Team },
    AssassinHit { team: Team, winner: Team },
    MissionAccomplished { team: Team },
    MissionFailed { winner: Team },
    TurnEnded { team: Team },
    MissionReset,
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::RoomOpened { room_code } => {
                format!("Briefing room {room_code} opened. Awaiting agents.")
            }
            Self::MissionStarted { team } => {
                format!("Mission Started. {} Team's Turn.", team.name())
            }
            Self::ClueGiven { team, clue } => {
                format!("{} Spymaster transmits: {clue}.", team.name_upper())
            }
            Self::AgentFound { team } => format!("{} found an Agent!", team.name_upper()),
            Self::EnemySpyFound { team } => {
                format!("{} found an Enemy Spy! Turn over.", team.name_upper())
            }
            Self::CivilianHit { team } => {
                format!("{} hit a civilian. Turn over.", team.name_upper())
            }
            Self::AssassinHit { team, winner } => format!(
                "FATAL ERROR: {} Hit the Assassin! {} Wins.",
                team.name_upper(),
                winner.name_upper()
            ),
            Self::MissionAccomplished { team } => {
                format!("MISSION ACCOMPLISHED: {} Wins!", team.name_upper())
            }
            Self::MissionFailed { winner } => {
                format!("MISSION FAILED: {} Wins!", winner.name_upper())
            }
            Self::TurnEnded { team } => format!("{} ended their turn.", team.name_upper()),
            Self::MissionReset => "Mission Reset. Prepare for deployment.".to_string(),
        };
        write!(f, "{repr}")
    }
}

impl GameState {
    /// Moves the room from `Lobby` to `Playing`.
    ///
    /// A category choice re-rolls the board from that category's pool
    /// (scores reset with the new board); without one, the board dealt
    /// at room creation stands. The timer value is recorded for clients
    /// and never consulted by the rules.
    pub fn start_game(&self, options: &StartOptions) -> Result<Self, ActionError> {
        if self.phase != Phase::Lobby {
            return Err(ActionError::GameAlreadyStarted);
        }
        let mut next = self.clone();
        if let Some(category) = options.category {
            next.category = category;
            next.board = deal_board(category.pool())?;
            next.scores = Scores::default();
        }
        next.timer_seconds = options.timer_seconds;
        next.phase = Phase::Playing;
        debug!(
            "room {}: mission started, {} moves first",
            self.room_code, next.turn
        );
        next.record(GameEvent::MissionStarted { team: next.turn });
        Ok(next)
    }

    /// Sets the acting team's current clue.
    ///
    /// The actor must be on the team whose turn it is and hold the
    /// spymaster role; the engine checks both, so transports need no
    /// screening of their own.
    pub fn give_clue(&self, actor: &PlayerId, clue: Clue) -> Result<Self, ActionError> {
        self.require_playing()?;
        let player = self.on_turn_player(actor)?;
        if player.role != Role::Spymaster {
            return Err(ActionError::NotSpymaster);
        }
        let team = player.team;
        debug!("room {}: {team} spymaster clue {clue}", self.room_code);
        let mut next = self.clone();
        next.record(GameEvent::ClueGiven {
            team,
            clue: clue.clone(),
        });
        next.current_clue = Some(clue);
        Ok(next)
    }

    /// Reveals a card and applies exactly one outcome, in priority
    /// order: assassin, civilian, the acting team's colour, the
    /// opponent's colour. Guessing an own-colour agent keeps the turn;
    /// every other outcome passes it (clearing the clue). Clearing a
    /// team's last agent ends the game on the spot.
    pub fn reveal_card(&self, actor: &PlayerId, card_id: &CardId) -> Result<Self, ActionError> {
        self.require_playing()?;
        let player = self.on_turn_player(actor)?;
        if player.role != Role::Operative {
            return Err(ActionError::NotOperative);
        }
        let card = self.card(card_id).ok_or(ActionError::UnknownCard)?;
        if card.revealed {
            return Err(ActionError::CardAlreadyRevealed);
        }

        let color = card.color;
        let acting = self.turn;
        debug!(
            "room {}: {acting} reveals {card_id} ({color:?})",
            self.room_code
        );
        let mut next = self.clone();
        if let Some(card) = next.board.iter_mut().find(|c| c.id == *card_id) {
            card.revealed = true;
        }

        match color {
            CardColor::Assassin => {
                let winner = acting.other();
                next.phase = Phase::GameOver;
                next.winner = Some(winner);
                next.record(GameEvent::AssassinHit {
                    team: acting,
                    winner,
                });
            }
            CardColor::Civilian => {
                next.pass_turn();
                next.record(GameEvent::CivilianHit { team: acting });
            }
            _ if color.team() == Some(acting) => {
                let remaining = next.scores.decrement(acting);
                next.record(GameEvent::AgentFound { team: acting });
                if remaining == 0 {
                    next.phase = Phase::GameOver;
                    next.winner = Some(acting);
                    next.record(GameEvent::MissionAccomplished { team: acting });
                }
            }
            _ => {
                let opponent = acting.other();
                let remaining = next.scores.decrement(opponent);
                next.pass_turn();
                next.record(GameEvent::EnemySpyFound { team: acting });
                if remaining == 0 {
                    next.phase = Phase::GameOver;
                    next.winner = Some(opponent);
                    next.record(GameEvent::MissionFailed { winner: opponent });
                }
            }
        }
        Ok(next)
    }

    /// Passes the turn to the other team voluntarily. Any member of the
    /// acting team may do this, regardless of role.
    pub fn end_turn(&self, actor: &PlayerId) -> Result<Self, ActionError> {
        self.require_playing()?;
        let team = self.on_turn_player(actor)?.team;
        debug!("room {}: {team} ends their turn", self.room_code);
        let mut next = self.clone();
        next.pass_turn();
        next.record(GameEvent::TurnEnded { team });
        Ok(next)
    }

    /// Discards the board and returns the room to `Lobby` with a fresh
    /// deal from the recorded category. The roster survives untouched
    /// (teams and roles included); the log restarts at a single reset
    /// line. Valid in any phase.
    pub fn restart(&self) -> Result<Self, BoardError> {
        debug!("room {}: mission reset", self.room_code);
        let mut next = self.clone();
        next.board = deal_board(self.category.pool())?;
        next.phase = Phase::Lobby;
        next.turn = Team::Red;
        next.scores = Scores::default();
        next.winner = None;
        next.current_clue = None;
        next.timer_seconds = None;
        next.logs = vec![GameEvent::MissionReset.to_string()];
        Ok(next)
    }

    /// Appends a rendered event to the mission log.
    pub(crate) fn record(&mut self, event: GameEvent) {
        self.logs.push(event.to_string());
    }

    const fn require_playing(&self) -> Result<(), ActionError> {
        match self.phase {
            Phase::Playing => Ok(()),
            Phase::Lobby | Phase::GameOver => Err(ActionError::GameNotInProgress),
        }
    }

    /// Resolves the actor and checks they act for the team whose turn
    /// it is.
    fn on_turn_player(&self, id: &PlayerId) -> Result<&Player, ActionError> {
        let player = self.player(id).ok_or(ActionError::UnknownPlayer)?;
        if player.team != self.turn {
            return Err(ActionError::OutOfTurn);
        }
        Ok(player)
    }

    /// Flips the turn. The clue always dies with the turn.
    fn pass_turn(&mut self) {
        self.turn = self.turn.other();
        self.current_clue = None;
    }
}
