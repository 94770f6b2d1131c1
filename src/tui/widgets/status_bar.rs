//! Status bar widget
//!
//! Shows the key bindings that apply to whatever currently has focus.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::app::state::{AppState, Focus};

/// Status bar widget showing context-sensitive key hints
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        if self.state.form.open && self.state.focus == Focus::Form {
            return &[
                ("Tab", "Next field"),
                ("Enter", "Add"),
                ("^R", "Clear"),
                ("Esc", "Close"),
            ];
        }

        if self.state.user_menu.open {
            return &[("↑↓", "Navigate"), ("Enter", "Select"), ("Esc", "Cancel")];
        }

        match self.state.focus {
            Focus::Comments => &[
                ("↑↓", "Navigate"),
                ("w", "Write comment"),
                ("d", "Delete"),
                ("Tab", "Posts"),
                ("q", "Quit"),
            ],
            _ => &[
                ("u", "Users"),
                ("↑↓", "Navigate"),
                ("Enter", "Open/Close"),
                ("q", "Quit"),
            ],
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let key = Style::default().fg(Color::Yellow);
        let dim = Style::default().fg(Color::DarkGray);

        let mut spans = vec![Span::raw(" ")];
        for (i, (k, label)) in self.hints().iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", dim));
            }
            spans.push(Span::styled(*k, key));
            spans.push(Span::styled(format!(" {label}"), dim));
        }

        Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::TOP))
            .render(area, buf);
    }
}
