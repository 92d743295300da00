//! Player registry: joining, leaving, team/role changes, and
//! reconnection by persistent device identity.

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::entities::{DeviceId, GameState, Player, PlayerId, Role, Team};

/// Errors that can occur during roster operations.
#[derive(Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum RosterError {
    #[error("player does not exist")]
    UnknownPlayer,
    #[error("no player is bound to that device")]
    UnknownDevice,
}

/// Partial update merged into an existing player record. Absent fields
/// are left untouched.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct PlayerUpdate {
    pub team: Option<Team>,
    pub role: Option<Role>,
}

impl GameState {
    /// Appends a new player to the roster, joining the team with fewer
    /// members (ties go to Red) as an operative.
    ///
    /// Names are taken as-is; defaulting an empty name to a placeholder
    /// is the caller's concern.
    #[must_use]
    pub fn add_player(&self, id: PlayerId, name: &str, device_id: Option<DeviceId>) -> Self {
        let team = if self.team_size(Team::Blue) < self.team_size(Team::Red) {
            Team::Blue
        } else {
            Team::Red
        };
        debug!("room {}: {name} ({id}) joins {team}", self.room_code);
        let mut next = self.clone();
        next.players.push(Player {
            id,
            name: name.to_string(),
            team,
            role: Role::Operative,
            device_id,
        });
        next
    }

    /// Removes the first player whose session id matches. Unknown ids
    /// leave the roster unchanged. Teams are never rebalanced, and an
    /// emptied roster is a legitimate result (the room's owner may then
    /// discard the game). Host status needs no bookkeeping here since
    /// it is positional.
    #[must_use]
    pub fn remove_player(&self, id: &PlayerId) -> Self {
        let mut next = self.clone();
        if let Some(index) = next.players.iter().position(|p| p.id == *id) {
            let gone = next.players.remove(index);
            debug!("room {}: {} ({id}) left", self.room_code, gone.name);
        }
        next
    }

    /// Merges `update` into the matching player record.
    ///
    /// Changing team does not implicitly reset the role; a caller that
    /// wants team switchers demoted to operative sends both fields.
    pub fn update_player(
        &self,
        id: &PlayerId,
        update: PlayerUpdate,
    ) -> Result<Self, RosterError> {
        let mut next = self.clone();
        let player = next
            .players
            .iter_mut()
            .find(|p| p.id == *id)
            .ok_or(RosterError::UnknownPlayer)?;
        if let Some(team) = update.team {
            player.team = team;
        }
        if let Some(role) = update.role {
            player.role = role;
        }
        Ok(next)
    }

    /// Looks up the player bound to a persistent device identity.
    #[must_use]
    pub fn find_by_device(&self, device_id: &DeviceId) -> Option<&Player> {
        self.players
            .iter()
            .find(|p| p.device_id.as_ref() == Some(device_id))
    }

    /// Rebinds a reconnecting device to a fresh session id, overwriting
    /// the volatile id on the existing record instead of creating a
    /// duplicate player.
    pub fn rebind_session(
        &self,
        device_id: &DeviceId,
        new_id: PlayerId,
    ) -> Result<Self, RosterError> {
        let mut next = self.clone();
        let player = next
            .players
            .iter_mut()
            .find(|p| p.device_id.as_ref() == Some(device_id))
            .ok_or(RosterError::UnknownDevice)?;
        debug!(
            "room {}: rebinding {} from {} to {new_id}",
            self.room_code, player.name, player.id
        );
        player.id = new_id;
        Ok(next)
    }
}
