//! Vietnamese language module for docso.
//!
//! - [`number`] -- cardinal numbers to words ("một nghìn không trăm linh một")
//! - [`phone`] -- mobile number validation, carrier lookup, masking
//! - [`handle`] -- [`handle::DocsoHandle`] bundling both behind one object
//!
//! Each module sits behind a Cargo feature of the same name.

#[cfg(feature = "number")]
mod lexicon;

#[cfg(feature = "number")]
pub mod number;

#[cfg(feature = "phone")]
pub mod phone;

#[cfg(feature = "handle")]
pub mod handle;

#[cfg(feature = "number")]
pub use number::{Speller, SpellerOptions, spell_number};
