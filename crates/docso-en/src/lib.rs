//! English phrases for docso.
//!
//! Currently provides clock times in words ([`time_in_words`]).

pub mod time;

pub use time::{TimeError, number_below_60_to_words, time_in_words};
