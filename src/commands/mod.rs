//! Command implementations

pub mod check;
pub mod feedback;
pub mod parse;
pub mod play;

pub use check::{CheckFailure, CheckStatistics, print_check_statistics, run_check};
pub use feedback::{FeedbackResult, score_guess};
pub use parse::{ParseReport, UnitReport, parse_guess_report};
pub use play::{ConsoleOutbound, OpenDirectory, run_play};
