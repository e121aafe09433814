//! Adapter implementations of the board ports.

pub mod logging;
pub mod memory;
