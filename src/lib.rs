//! # Connect Four Search
//!
//! Picks a column for a Connect Four player by searching the game tree to a
//! fixed depth and scoring positions with a segment-count heuristic.
//!
//! ## Modules
//!
//! - [`search`] — Board capability, move generation, evaluator, and the
//!   minimax / alpha-beta / expectimax strategies
//! - [`game`] — Board, player, and game state
//! - [`ai`] — Agent trait with search-backed and random agents
//! - [`arena`] — Head-to-head matches and their statistics
//! - [`ui`] — Terminal UI for playing against a strategy
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod arena;
pub mod config;
pub mod error;
pub mod game;
pub mod search;
pub mod ui;
