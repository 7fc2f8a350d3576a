//! Tutorly — turns a topic into AI-generated learning material.
//!
//! A request for a topic yields a markdown explanation, an everyday analogy,
//! or a short multiple-choice quiz. Text comes from an upstream generative
//! model ([`providers`]), is cleaned up ([`utils::markdown`], [`learning::quiz`])
//! and cached in memory for an hour ([`cache`]). The [`api`] module exposes the
//! pipeline over HTTP.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod learning;
pub mod providers;
pub mod utils;

pub use error::{Result, TutorlyError};
