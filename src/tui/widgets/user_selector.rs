//! User selector modal widget
//!
//! Displays the user collection in a centered overlay with keyboard
//! navigation. The list content mirrors the users region state: loading
//! animation, error, or the list itself.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, LineGauge, List, ListItem, Paragraph, Widget},
};

use crate::app::state::AppState;
use crate::core::RemoteData;
use crate::tui::layout::centered_rect;

/// User selector modal widget
pub struct UserSelector<'a> {
    state: &'a AppState,
}

impl<'a> UserSelector<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn user_items(&self) -> Vec<ListItem<'static>> {
        let Some(users) = self.state.users.value() else {
            return Vec::new();
        };

        users
            .iter()
            .enumerate()
            .map(|(i, user)| {
                let is_cursor = i == self.state.user_menu.cursor;
                let is_selected =
                    self.state.selected_user.as_ref().map(|u| u.id) == Some(user.id);

                let style = if is_cursor {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };

                let indicator = if is_cursor { "▶ " } else { "  " };
                let mark = if is_selected { " ✓" } else { "" };

                ListItem::new(format!("{indicator}{}{mark}", user.name)).style(style)
            })
            .collect()
    }
}

impl Widget for UserSelector<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let user_count = self.state.users.value().map_or(0, Vec::len) as u16;
        let height = (user_count + 4).max(8).min(area.height);
        let modal_area = centered_rect(44.min(area.width), height, area);

        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(" Select User ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_set(symbols::border::ROUNDED)
            .style(Style::default().bg(Color::DarkGray));

        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::vertical([
            Constraint::Min(3),    // Content
            Constraint::Length(1), // Footer
        ])
        .split(inner);

        match &self.state.users {
            RemoteData::Loading | RemoteData::NotAsked => {
                let text = Paragraph::new("Loading users...")
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::Yellow));
                text.render(chunks[0], buf);

                let gauge_area = Rect {
                    x: chunks[0].x.saturating_add(4),
                    y: chunks[0].y.saturating_add(2),
                    width: chunks[0].width.saturating_sub(8),
                    height: 1,
                };
                LineGauge::default()
                    .ratio(self.state.indeterminate_ratio())
                    .filled_style(Style::default().fg(Color::Cyan))
                    .unfilled_style(Style::default().fg(Color::Black))
                    .filled_symbol(symbols::line::THICK.horizontal)
                    .unfilled_symbol(symbols::line::THICK.horizontal)
                    .render(gauge_area, buf);
            }
            RemoteData::Failed(error) => {
                Paragraph::new(vec![
                    Line::from(Span::styled(
                        "Error",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )),
                    Line::from(error.clone()),
                ])
                .alignment(Alignment::Center)
                .render(chunks[0], buf);
            }
            RemoteData::Loaded(users) if users.is_empty() => {
                Paragraph::new("No users found.")
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::Yellow))
                    .render(chunks[0], buf);
            }
            RemoteData::Loaded(_) => {
                List::new(self.user_items()).render(chunks[0], buf);
            }
        }

        Paragraph::new("↑↓ Navigate  Enter Select  Esc Cancel")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray))
            .render(chunks[1], buf);
    }
}
