//! Event handling module.
//!
//! This module contains handlers for different types of events:
//! - Network events: auth service requests and session transitions
//! - Terminal events: User input and terminal interactions

pub mod network;
pub mod terminal;
