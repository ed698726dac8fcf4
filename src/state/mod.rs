//! Application state management module.
//!
//! This module contains the core state management for the application, including:
//! - Main `State` struct that holds the pages, the session handle and UI data
//! - Navigation types (View)

mod navigation;

pub use navigation::View;

// State struct and its methods are in state_impl.rs
#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::State;
