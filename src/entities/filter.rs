use super::todo::Todo;
use serde::{Deserialize, Serialize};

/// Which todos the list shows. Purely a view selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterStatus {
    #[default]
    All,
    Active,
    Completed,
}

impl FilterStatus {
    pub const ALL: [FilterStatus; 3] = [FilterStatus::All, FilterStatus::Active, FilterStatus::Completed];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }

    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            Self::All => true,
            Self::Active => !todo.completed,
            Self::Completed => todo.completed,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Active,
            Self::Active => Self::Completed,
            Self::Completed => Self::All,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::All => Self::Completed,
            Self::Active => Self::All,
            Self::Completed => Self::Active,
        }
    }
}
