//! Personality-typing quiz: scoring, classification and a terminal front end.
//!
//! The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (scoring, type and level
//!   classification, data invariants). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (loading and writing quiz documents,
//!   answer sheets, settings).
//!
//! [`session`] holds one user's answers and navigation state, and [`present`]
//! drives a session over any line-oriented reader/writer pair.

pub mod bank;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod present;
pub mod session;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod translations;
