//! I/O helpers for quiz commands.

pub mod answers;
pub mod config;
pub mod data;
pub mod init;
