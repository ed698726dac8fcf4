//! Terminal client for a cookie-session authentication service.
//!
//! The crate is built around two pieces:
//! - `form`, a generic form engine holding values, validation rules, field
//!   errors and an in-flight submit guard
//! - `session`, the application-wide authentication state machine with an
//!   explicit provider and handles
//!
//! The remaining modules wire them to the auth service and a terminal UI.

pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod events;
pub mod form;
pub mod logger;
pub mod pages;
pub mod session;
pub mod state;
mod ui;
