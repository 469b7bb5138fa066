//! Core UI functionality for todoterm.
//!
//! This module contains the building blocks the screen is made of:
//!
//! - [`actions`] - Action definitions flowing between components and the controller
//! - [`component`] - Base component trait
//! - [`context`] - Read-only view handed to components
//! - [`event_handler`] - Terminal event polling
//! - [`task_manager`] - Background API calls and timers
//!
//! Key events become [`Action`]s, the controller applies them to the
//! application state, and background tasks report their results as further
//! actions over a channel.

pub mod actions;
pub mod component;
pub mod context;
pub mod event_handler;
pub mod task_manager;

pub use actions::{Action, DialogType, Focus};
pub use component::Component;
pub use context::ViewContext;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{TaskId, TaskManager};
