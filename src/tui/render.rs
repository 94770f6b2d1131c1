//! Frame rendering

use ratatui::Frame;

use crate::app::state::AppState;

use super::layout;
use super::widgets::{CommentForm, Header, PostDetails, PostsList, StatusBar, UserSelector};

/// Render one frame from the current state.
///
/// Overlays are drawn last so they sit on top of the regions they cover;
/// the user dropdown wins over the form if both are somehow open.
pub fn view(frame: &mut Frame, state: &AppState) {
    let areas = layout::create(frame.area());

    frame.render_widget(Header::new(state), areas.header);

    if state.selected_post.is_some() {
        let content = layout::split_content(areas.content);
        frame.render_widget(PostsList::new(state), content.posts);
        frame.render_widget(PostDetails::new(state), content.detail);
    } else {
        frame.render_widget(PostsList::new(state), areas.content);
    }

    frame.render_widget(StatusBar::new(state), areas.status);

    if state.form.open {
        frame.render_widget(CommentForm::new(&state.form), areas.content);
    }

    if state.user_menu.open {
        frame.render_widget(UserSelector::new(state), frame.area());
    }
}
