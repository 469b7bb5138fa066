//! Icon service for managing different icon themes
//!
//! Terminals differ wildly in what they can draw, so every glyph the UI uses
//! comes from here, in an emoji, Unicode or plain ASCII flavor.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    #[default]
    Ascii,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub todo_open: &'static str,
    pub todo_done: &'static str,
    pub loading: &'static str,
    pub error: &'static str,
    pub info: &'static str,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => IconSet {
                todo_open: "🔳",
                todo_done: "✅",
                loading: "⏳",
                error: "❌",
                info: "💡",
            },
            IconTheme::Unicode => IconSet {
                todo_open: "□",
                todo_done: "✓",
                loading: "⟳",
                error: "✗",
                info: "ⓘ",
            },
            IconTheme::Ascii => IconSet {
                todo_open: "[ ]",
                todo_done: "[X]",
                loading: "...",
                error: "!",
                info: "i",
            },
        }
    }

    #[must_use]
    pub fn checkbox(&self, completed: bool) -> &'static str {
        let icons = self.icons();
        if completed {
            icons.todo_done
        } else {
            icons.todo_open
        }
    }

    #[must_use]
    pub fn loading(&self) -> &'static str {
        self.icons().loading
    }

    #[must_use]
    pub fn error(&self) -> &'static str {
        self.icons().error
    }

    #[must_use]
    pub fn info(&self) -> &'static str {
        self.icons().info
    }
}
