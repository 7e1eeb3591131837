//! Shared building blocks for the Nurovia triage stack.
//!
//! Everything in this crate is pure and free of I/O. The API and CLI
//! crates layer transport on top of these types.

pub mod assistant;
pub mod error;
pub mod screening;
