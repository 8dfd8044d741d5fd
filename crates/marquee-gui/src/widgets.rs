pub mod empty_state;
pub mod movie_card;
pub mod pager;
pub mod toolbar;

pub use empty_state::empty_state;
pub use movie_card::movie_card;
pub use pager::pager;
pub use toolbar::{toolbar, SEARCH_INPUT_ID};

use iced::widget::scrollable;
use iced::Element;

use crate::theme::{self, ColorScheme};

/// A scrollable with consistent direction and style across the application.
pub fn styled_scrollable<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    cs: &ColorScheme,
) -> scrollable::Scrollable<'a, Message> {
    scrollable(content)
        .direction(scrollable::Direction::Vertical(
            scrollable::Scrollbar::new()
                .width(6)
                .scroller_width(4)
                .margin(2),
        ))
        .style(theme::overlay_scrollbar(cs))
}
