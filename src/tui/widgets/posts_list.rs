//! Posts list widget
//!
//! Renders the posts region of the selected user. Exactly one of the
//! possible region states is shown: the startup prompt, a loading
//! animation, an error, the empty notice, or the list itself.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, LineGauge, List, ListItem, Paragraph, Widget},
};

use crate::app::state::{AppState, Focus};
use crate::core::RemoteData;

/// Posts list widget
pub struct PostsList<'a> {
    state: &'a AppState,
}

impl<'a> PostsList<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn post_items(&self) -> Vec<ListItem<'static>> {
        let Some(posts) = self.state.posts.value() else {
            return Vec::new();
        };
        let focused = self.state.focus == Focus::Posts;
        let open_id = self.state.selected_post.as_ref().map(|p| p.id);

        posts
            .iter()
            .enumerate()
            .map(|(i, post)| {
                let is_cursor = i == self.state.posts_cursor;
                let is_open = open_id == Some(post.id);

                let style = if is_cursor && focused {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else if is_open {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default()
                };

                let indicator = if is_cursor { "▶ " } else { "  " };
                let tag = if is_open { "[Close]" } else { "[Open] " };

                ListItem::new(format!("{indicator}{tag} {}", post.title)).style(style)
            })
            .collect()
    }
}

impl Widget for PostsList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == Focus::Posts;
        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .title(" Posts ")
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        // No user yet: this region reflects the users fetch instead
        if self.state.selected_user.is_none() {
            let line = match &self.state.users {
                RemoteData::NotAsked | RemoteData::Loading => {
                    Line::from(Span::styled("Loading users...", Style::default().fg(Color::Yellow)))
                }
                RemoteData::Failed(error) => {
                    Line::from(Span::styled(error.clone(), Style::default().fg(Color::Red)))
                }
                RemoteData::Loaded(_) => Line::from(vec![
                    Span::raw("Press "),
                    Span::styled("u", Style::default().fg(Color::Yellow)),
                    Span::raw(" to choose a user"),
                ]),
            };
            Paragraph::new(vec![Line::from(""), line])
                .alignment(Alignment::Center)
                .render(inner, buf);
            return;
        }

        match &self.state.posts {
            RemoteData::NotAsked | RemoteData::Loading => {
                Paragraph::new("Loading posts...")
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::Yellow))
                    .render(inner, buf);

                let gauge_area = Rect {
                    x: inner.x.saturating_add(4),
                    y: inner.y.saturating_add(2),
                    width: inner.width.saturating_sub(8),
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
                    .render(inner, buf);
            }
            RemoteData::Loaded(posts) if posts.is_empty() => {
                Paragraph::new("This user has no posts.")
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::Yellow))
                    .render(inner, buf);
            }
            RemoteData::Loaded(_) => {
                List::new(self.post_items()).render(inner, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Post, User};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(state: &AppState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(PostsList::new(state), f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn user(id: i64) -> User {
        User {
            id,
            name: "U".into(),
            username: String::new(),
            email: String::new(),
            phone: None,
        }
    }

    fn post(id: i64, title: &str) -> Post {
        Post {
            id,
            user_id: 1,
            title: title.to_string(),
            body: "body".into(),
        }
    }

    #[test]
    fn test_prompt_before_any_selection() {
        let mut state = AppState::new("x");
        state.users = RemoteData::Loaded(vec![user(1)]);

        assert!(render(&state).contains("to choose a user"));
    }

    #[test]
    fn test_users_error_shown_in_region() {
        let mut state = AppState::new("x");
        state.users = RemoteData::Failed("Failed to load users: 500".into());

        assert!(render(&state).contains("Failed to load users"));
    }

    #[test]
    fn test_loading_posts() {
        let mut state = AppState::new("x");
        state.selected_user = Some(user(1));
        state.posts = RemoteData::Loading;

        assert!(render(&state).contains("Loading posts"));
    }

    #[test]
    fn test_empty_posts_notice() {
        let mut state = AppState::new("x");
        state.selected_user = Some(user(1));
        state.posts = RemoteData::Loaded(vec![]);

        assert!(render(&state).contains("no posts"));
    }

    #[test]
    fn test_list_shows_open_close_tags() {
        let mut state = AppState::new("x");
        state.selected_user = Some(user(1));
        state.posts = RemoteData::Loaded(vec![post(1, "First post"), post(2, "Second post")]);
        state.selected_post = Some(post(2, "Second post"));

        let content = render(&state);
        assert!(content.contains("First post"));
        assert!(content.contains("[Open]"));
        assert!(content.contains("[Close]"));
    }
}
