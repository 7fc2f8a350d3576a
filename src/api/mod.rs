//! HTTP surface: landing page, content and quiz generation, health.

pub mod error;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, start_server, AppState};
