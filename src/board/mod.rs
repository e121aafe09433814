//! Kanban task board.
//!
//! A board holds tasks in three fixed columns (To Do, In Progress,
//! Completed), creates tasks from a draft form, moves them between columns
//! by drag and drop, and derives filtered, sorted views for display. All
//! state lives in memory for the lifetime of the board.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Pure view derivation in [`view`]
//! - The store service and the board state container in [`services`]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod seed;
pub mod services;
pub mod view;

#[cfg(test)]
mod tests;
