//! Stable exit codes for typequiz CLI commands.

/// Command succeeded or the quiz was completed.
pub const OK: i32 = 0;
/// Command failed due to missing/invalid data, config or answer sheet.
pub const INVALID: i32 = 1;
/// `typequiz take` ended before a result was shown.
pub const ABORTED: i32 = 2;
