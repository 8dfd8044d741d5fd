use iced::widget::{button, container, row, text};
use iced::{Alignment, Element, Length};
use marquee_core::pager::PagerView;

use crate::style;
use crate::theme::{self, ColorScheme};

/// Previous / "Page P of N" / Next. Buttons disable at the real bounds.
pub fn pager<'a, Message: Clone + 'a>(
    cs: &ColorScheme,
    view: PagerView,
    on_prev: Message,
    on_next: Message,
) -> Element<'a, Message> {
    let nav_button = |icon: iced::widget::Text<'static>, label: &'static str, leading: bool| {
        let icon = icon.size(style::TEXT_SM);
        let label = text(label).size(style::TEXT_SM);
        let content = if leading {
            row![icon, label]
        } else {
            row![label, icon]
        };
        button(
            container(content.spacing(style::SPACE_XS).align_y(Alignment::Center))
                .center_x(Length::Fill),
        )
        .width(Length::Fixed(style::PAGER_BUTTON_WIDTH))
        .padding([style::SPACE_SM, style::SPACE_MD])
        .style(theme::primary_button(cs))
    };

    let prev = nav_button(lucide_icons::iced::icon_chevron_left(), "Previous", true)
        .on_press_maybe(view.prev_enabled().then_some(on_prev));
    let next = nav_button(lucide_icons::iced::icon_chevron_right(), "Next", false)
        .on_press_maybe(view.next_enabled().then_some(on_next));

    let label = container(
        text(view.label())
            .size(style::TEXT_SM)
            .line_height(style::LINE_HEIGHT_NORMAL),
    )
    .padding([style::SPACE_XS, style::SPACE_MD])
    .style(theme::page_badge(cs));

    container(
        row![prev, label, next]
            .spacing(style::SPACE_MD)
            .align_y(Alignment::Center),
    )
    .center_x(Length::Fill)
    .padding([style::SPACE_MD, style::SPACE_LG])
    .into()
}
