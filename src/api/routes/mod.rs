//! Route handlers.

pub mod content;
pub mod health;
pub mod home;
pub mod quiz;
