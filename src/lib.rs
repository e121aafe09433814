//! Taskboard: an in-memory Kanban task board.
//!
//! This crate provides the logical core of a three-column task board: the
//! task store, pure filtered and sorted views of it, and the interaction
//! handlers a presentation layer drives.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory store,
//!   notification sinks)
//!
//! # Modules
//!
//! - [`board`]: Task store, view derivation and the board state container

pub mod board;
