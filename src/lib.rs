//! Terminal 2048.
//!
//! The `core` module is a pure, deterministic library: board state, the
//! two-pass shift-and-merge turn engine, and the configurable rules. The
//! `input` and `term` modules are the thin crossterm front end around it.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
