//! Game logic on top of the partition tree.
//!
//! - [`GameSession`] - the playing/game-over state machine with the per-level
//!   countdown, the player and target canvases, and the player editing ops
//! - [`generate_target`] - procedural target generation per difficulty level
//! - [`scorer`] - Monte-Carlo similarity between two canvases
//! - [`GameStats`] - level number and cumulative score
//! - [`GameSeed`] - seed for deterministic sessions
//!
//! # Game flow
//!
//! 1. Create a [`GameSession`] (optionally [`with_seed`](GameSession::with_seed))
//!    and call [`start`](GameSession::start)
//! 2. Route player input into [`click`](GameSession::click),
//!    [`select_tool`](GameSession::select_tool) and
//!    [`select_color`](GameSession::select_color)
//! 3. Drive the clock with [`increment_frame`](GameSession::increment_frame)
//!    once per tick; at the end of a level it reports a [`LevelOutcome`]
//! 4. On [`LevelOutcome::Advanced`] the session is already playing the next
//!    level; on [`LevelOutcome::GameOver`] it waits for
//!    [`start`](GameSession::start) again

pub use self::{generator::*, scorer::*, seed::*, session::*, stats::*};

pub mod scorer;

mod generator;
mod seed;
mod session;
mod stats;
