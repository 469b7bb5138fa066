//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen areas for one frame. Optional areas are only present when their
/// widget is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub title: Rect,
    pub input: Rect,
    pub list: Rect,
    pub footer: Option<Rect>,
    pub banner: Option<Rect>,
    pub status: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    pub const TITLE_HEIGHT: u16 = 1;
    pub const INPUT_HEIGHT: u16 = 3;
    pub const FOOTER_HEIGHT: u16 = 1;
    pub const BANNER_HEIGHT: u16 = 3;
    pub const STATUS_HEIGHT: u16 = 1;

    /// Split the screen top to bottom: title, input, list, footer, banner, status bar
    #[must_use]
    pub fn main_layout(area: Rect, show_footer: bool, show_banner: bool) -> AppLayout {
        let mut constraints = vec![
            Constraint::Length(Self::TITLE_HEIGHT),
            Constraint::Length(Self::INPUT_HEIGHT),
            Constraint::Min(0),
        ];
        if show_footer {
            constraints.push(Constraint::Length(Self::FOOTER_HEIGHT));
        }
        if show_banner {
            constraints.push(Constraint::Length(Self::BANNER_HEIGHT));
        }
        constraints.push(Constraint::Length(Self::STATUS_HEIGHT));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let mut index = 3;
        let footer = show_footer.then(|| {
            let rect = chunks[index];
            index += 1;
            rect
        });
        let banner = show_banner.then(|| {
            let rect = chunks[index];
            index += 1;
            rect
        });

        AppLayout {
            title: chunks[0],
            input: chunks[1],
            list: chunks[2],
            footer,
            banner,
            status: chunks[index],
        }
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}
