//! HTTP transport for the video tagging service.
//!
//! Handlers stay thin: they deserialize input, call the [`Repository`]
//! held in [`state::AppState`] and wrap results in the `{ "data": ... }`
//! envelope. All rules live in `matchtag_core`.
//!
//! [`Repository`]: matchtag_core::repository::Repository

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
