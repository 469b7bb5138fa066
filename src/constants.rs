//! Constants used throughout the application
//!
//! This module centralizes user-facing strings, defaults and layout limits
//! so the UI and the tests agree on them.

// Error banner messages
pub const ERROR_UNABLE_TO_LOAD: &str = "Unable to load todos";
pub const ERROR_UNABLE_TO_ADD: &str = "Unable to add a todo";
pub const ERROR_UNABLE_TO_DELETE: &str = "Unable to delete a todo";
pub const ERROR_UNABLE_TO_UPDATE: &str = "Unable to update a todo";
pub const ERROR_EMPTY_TITLE: &str = "Title should not be empty";

// UI text
pub const APP_TITLE: &str = "todos";
pub const NEW_TODO_PLACEHOLDER: &str = "What needs to be done?";
pub const CLEAR_COMPLETED_LABEL: &str = "Clear completed";
pub const ITEMS_LEFT_SUFFIX: &str = "items left";
pub const DIALOG_TITLE_HELP: &str = "Help - Press 'Esc' or '?' to close";
pub const DIALOG_TITLE_LOGS: &str = "Logs - Press 'Esc', 'G' or 'q' to close";

// Startup messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const ERROR_NO_USER_ID: &str = "❌ Error: no user id configured";

// Environment overrides
pub const ENV_API_URL: &str = "TODOTERM_API_URL";
pub const ENV_USER_ID: &str = "TODOTERM_USER_ID";

// Defaults
/// Base URL of the students todos API
pub const DEFAULT_API_BASE_URL: &str = "https://mate.academy/students-api";
/// Request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// How long an error banner stays visible, in seconds
pub const DEFAULT_ERROR_DISMISS_SECS: u64 = 3;
/// Number of log lines kept in memory for the logs dialog
pub const LOG_BUFFER_CAPACITY: usize = 500;

// Validation limits
pub const TIMEOUT_MAX_SECS: u64 = 300;
pub const ERROR_DISMISS_MAX_SECS: u64 = 60;
