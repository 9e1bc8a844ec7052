/*!
# Rust Language Module

This Rust module turns SIL source text into canonical numbered lines.

*/

pub type LineNumber = u32;

#[macro_use]
mod error;
mod ident;
mod line;
mod listing;

pub use error::Error;
pub use error::ErrorCode;
pub use ident::{is_ident_char, is_ident_start, is_valid_ident};
pub use line::{normalize, split_first_word, split_then, Line};
pub use listing::Listing;

#[cfg(test)]
mod tests;
