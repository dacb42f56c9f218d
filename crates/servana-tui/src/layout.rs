//! Screen layout definitions for the TUI
//!
//! Fixed chrome around a flexible body: a bordered header carrying the route
//! title, the screen body, a one-line key hint bar and the bottom tab bar.

use ratatui::layout::{Constraint, Layout, Rect};

/// Header height: top border + title row + bottom border
pub const HEADER_HEIGHT: u16 = 3;

/// Tab bar height: top border + labels row + bottom border
pub const TAB_BAR_HEIGHT: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Route title and theme indicator
    pub header: Rect,

    /// Active screen
    pub body: Rect,

    /// Key hints for the active screen
    pub hints: Rect,

    /// Bottom tabs
    pub tab_bar: Rect,
}

/// Split the full terminal area into the main screen areas
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(TAB_BAR_HEIGHT),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        hints: chunks[2],
        tab_bar: chunks[3],
    }
}
