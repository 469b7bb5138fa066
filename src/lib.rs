//! todoterm - a terminal to-do list client
//!
//! Lists, filters, creates, toggles and deletes todos stored behind a REST
//! API, with a bulk "clear completed" operation.
//!
//! # Modules
//!
//! * [`api`] - HTTP client for the todos API
//! * [`config`] - Application configuration management
//! * [`state`] - Application state and its transitions
//! * [`ui`] - Terminal user interface components

/// REST client for the todos API
pub mod api;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Todo records and the list filter
pub mod entities;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

pub mod state;

/// Terminal user interface components and rendering
pub mod ui;

pub use entities::{FilterStatus, NewTodo, Todo, TodoId, TodoPatch, UserId};
