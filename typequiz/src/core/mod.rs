//! Deterministic, pure scoring logic.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data structures and return deterministic outputs suitable for tests.

pub mod classifier;
pub mod invariants;
pub mod level;
pub mod result;
pub mod scorer;
pub mod types;
