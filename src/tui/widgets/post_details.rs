//! Post detail widget
//!
//! Shows the open post's title and body above its comments region. The
//! comments region renders exactly one state: loading animation, error,
//! "no comments" notice, or the comment list.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, LineGauge, List, ListItem, Paragraph, Widget, Wrap},
};

use crate::app::state::{AppState, Focus};
use crate::core::{Comment, RemoteData};

/// Detail pane widget for the open post
pub struct PostDetails<'a> {
    state: &'a AppState,
}

impl<'a> PostDetails<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn comment_items(&self, comments: &[Comment]) -> Vec<ListItem<'static>> {
        let focused = self.state.focus == Focus::Comments;

        comments
            .iter()
            .enumerate()
            .flat_map(|(i, comment)| {
                let is_cursor = focused && i == self.state.comment_cursor;
                let author_style = if is_cursor {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Cyan)
                };
                let indicator = if is_cursor { "▶ " } else { "  " };

                [
                    ListItem::new(format!("{indicator}{} <{}>", comment.name, comment.email))
                        .style(author_style),
                    ListItem::new(format!("    {}", comment.body)),
                ]
            })
            .collect()
    }
}

impl Widget for PostDetails<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(post) = &self.state.selected_post else {
            return;
        };

        let focused = self.state.focus == Focus::Comments;
        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .title(" Post ")
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Title
            Constraint::Max(5),    // Body
            Constraint::Min(3),    // Comments
        ])
        .split(inner);

        Paragraph::new(Line::from(Span::styled(
            post.title.clone(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )))
        .render(chunks[0], buf);

        Paragraph::new(post.body.as_str())
            .wrap(Wrap { trim: true })
            .render(chunks[1], buf);

        let comments_block = Block::default()
            .title(" Comments ")
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray));
        let comments_area = comments_block.inner(chunks[2]);
        comments_block.render(chunks[2], buf);

        match &self.state.comments {
            RemoteData::NotAsked | RemoteData::Loading => {
                Paragraph::new("Loading comments...")
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::Yellow))
                    .render(comments_area, buf);

                let gauge_area = Rect {
                    x: comments_area.x.saturating_add(4),
                    y: comments_area.y.saturating_add(2),
                    width: comments_area.width.saturating_sub(8),
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
                Paragraph::new(error.as_str())
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::Red))
                    .render(comments_area, buf);
            }
            RemoteData::Loaded(comments) if comments.is_empty() => {
                Paragraph::new("No comments yet.")
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::Yellow))
                    .render(comments_area, buf);
            }
            RemoteData::Loaded(comments) => {
                List::new(self.comment_items(comments)).render(comments_area, buf);
            }
        }
    }
}
