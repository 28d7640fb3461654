//! Embedded dictionary data
//!
//! Data files compiled into the binary at build time.

include!(concat!(env!("OUT_DIR"), "/solutions.rs"));
include!(concat!(env!("OUT_DIR"), "/guesses.rs"));
include!(concat!(env!("OUT_DIR"), "/glyphs.rs"));
include!(concat!(env!("OUT_DIR"), "/frequency.rs"));
include!(concat!(env!("OUT_DIR"), "/symbols.rs"));
