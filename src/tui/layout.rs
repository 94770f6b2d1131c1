//! Screen layout definitions

use ratatui::layout::{Constraint, Layout, Rect};

/// Below this width the detail pane stacks under the posts list
pub const MIN_SPLIT_WIDTH: u16 = 80;

/// Screen areas for the main layout
pub struct ScreenAreas {
    pub header: Rect,
    pub content: Rect,
    pub status: Rect,
}

/// Content areas when a post is open
pub struct ContentAreas {
    pub posts: Rect,
    pub detail: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header (title + selected user)
        Constraint::Min(5),    // Posts / detail
        Constraint::Length(2), // Status bar (1 for border + 1 for content)
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        content: chunks[1],
        status: chunks[2],
    }
}

/// Split the content area between the posts list and the open post.
///
/// Side by side on wide terminals, stacked on narrow ones.
pub fn split_content(area: Rect) -> ContentAreas {
    let chunks = if area.width >= MIN_SPLIT_WIDTH {
        Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)]).split(area)
    } else {
        Layout::vertical([Constraint::Percentage(40), Constraint::Percentage(60)]).split(area)
    };

    ContentAreas {
        posts: chunks[0],
        detail: chunks[1],
    }
}

/// Centered overlay rect for the user dropdown and the comment form
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
