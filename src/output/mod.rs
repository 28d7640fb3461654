//! Terminal output formatting
//!
//! Display utilities for CLI results and the chat simulator.

pub mod display;
pub mod formatters;

pub use display::{print_bot_reply, print_feedback_result, print_parse_report};
