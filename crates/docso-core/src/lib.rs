//! Shared types for docso number spellers.
//!
//! - [`word`] -- typed word tokens and the [`WordSequence`] a speller emits
//! - [`cardinal`] -- strict conversion of text and foreign numeric types into
//!   the `u64` domain spellers work on

pub mod cardinal;
pub mod word;

pub use cardinal::{NumberError, cardinal_from_f64, cardinal_from_i64, parse_cardinal};
pub use word::{Word, WordRole, WordSequence};
