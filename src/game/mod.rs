//! Word-deduction game engine - core data model and rule logic.
//!
//! This module provides the foundational game implementation including:
//! - The immutable-per-transition [`entities::GameState`] aggregate
//! - Board generation from categorised word pools
//! - Roster management (join, leave, team/role changes, reconnection)
//! - The validated move/turn state machine and mission log events

pub mod board;
pub mod constants;
pub mod entities;
pub mod roster;
pub mod state_machine;
pub mod words;
