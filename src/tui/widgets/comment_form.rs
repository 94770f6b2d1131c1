//! New-comment form modal widget

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthChar;

use crate::app::form::{CommentFormState, FormField};
use crate::tui::layout::centered_rect;

/// New-comment form modal widget
pub struct CommentForm<'a> {
    form: &'a CommentFormState,
}

impl<'a> CommentForm<'a> {
    pub fn new(form: &'a CommentFormState) -> Self {
        Self { form }
    }

    /// One single-line input row: label, value with a trailing cursor when
    /// focused, truncated from the left so the insertion point stays visible.
    fn field_line(&self, label: &str, value: &str, field: FormField, width: u16) -> Line<'static> {
        let focused = self.form.focus == field;
        let label_style = if focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let budget = width.saturating_sub(label.len() as u16 + 3) as usize;
        let shown = tail_fit(value, budget);

        let mut spans = vec![
            Span::styled(format!(" {label} "), label_style),
            Span::raw(shown),
        ];
        if focused {
            spans.push(Span::styled("█", Style::default().fg(Color::Cyan)));
        }
        Line::from(spans)
    }

    fn error_line(error: Option<&'static str>) -> Line<'static> {
        match error {
            Some(e) => Line::from(Span::styled(
                format!("   {e}"),
                Style::default().fg(Color::Red),
            )),
            None => Line::from(""),
        }
    }
}

impl Widget for CommentForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = centered_rect(56.min(area.width), 13.min(area.height), area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(" Add Comment ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_set(symbols::border::ROUNDED)
            .style(Style::default().bg(Color::DarkGray));
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Name
            Constraint::Length(1), // Name error
            Constraint::Length(1), // Email
            Constraint::Length(1), // Email error
            Constraint::Length(2), // Body
            Constraint::Length(1), // Body error
            Constraint::Length(1), // Request error / submitting
            Constraint::Length(1), // Footer
        ])
        .split(inner);

        let width = inner.width;
        Paragraph::new(self.field_line("Name: ", &self.form.name, FormField::Name, width))
            .render(chunks[0], buf);
        Paragraph::new(Self::error_line(self.form.errors.name)).render(chunks[1], buf);

        Paragraph::new(self.field_line("Email:", &self.form.email, FormField::Email, width))
            .render(chunks[2], buf);
        Paragraph::new(Self::error_line(self.form.errors.email)).render(chunks[3], buf);

        Paragraph::new(self.field_line("Text: ", &self.form.body, FormField::Body, width))
            .wrap(Wrap { trim: false })
            .render(chunks[4], buf);
        Paragraph::new(Self::error_line(self.form.errors.body)).render(chunks[5], buf);

        // One slot for either the in-flight indicator or the last error
        if self.form.submitting {
            Paragraph::new("Posting...")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Yellow))
                .render(chunks[6], buf);
        } else if let Some(error) = &self.form.error {
            Paragraph::new(error.as_str())
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Red))
                .render(chunks[6], buf);
        }

        Paragraph::new("Tab Next  Enter Add  ^R Clear  Esc Close")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray))
            .render(chunks[7], buf);
    }
}

/// Last characters of `s` that fit in `budget` terminal columns
fn tail_fit(s: &str, budget: usize) -> String {
    let mut width = 0usize;
    let mut chars: Vec<char> = Vec::new();
    for c in s.chars().rev() {
        let w = c.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        chars.push(c);
    }
    chars.iter().rev().collect()
}
