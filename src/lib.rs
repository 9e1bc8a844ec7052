//! # SIL
//!
//! A tiny line-numbered language where every value is an integer.
//!
//! ```text
//! 10 INTEGER X
//! 20 LET X = 2 + 3 * 4
//! 30 PRINTLN X
//! 40 END
//! ```
//!
//! Source is normalized by [`lang`] and run by [`mach`]. The `sil`
//! binary wires both to the console through [`term`].

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

pub mod lang;
pub mod mach;
pub mod term;
