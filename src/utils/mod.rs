//! Text utilities.

pub mod markdown;
