//! Header bar widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::app::state::AppState;

/// Header widget displaying app title, API host, and the selected user
pub struct Header<'a> {
    state: &'a AppState,
}

impl<'a> Header<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let dim = Style::default().fg(Color::DarkGray);
        let value = Style::default().fg(Color::Green);

        let mut spans = vec![
            Span::styled(" Postdeck", title),
            Span::raw("   "),
            Span::styled(self.state.api_host.clone(), dim),
            Span::raw("   "),
        ];

        match &self.state.selected_user {
            Some(user) => {
                spans.push(Span::styled("User: ", dim));
                spans.push(Span::styled(user.name.clone(), value));
            }
            None => spans.push(Span::styled("No user selected", dim)),
        }

        Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::BOTTOM))
            .render(area, buf);
    }
}
