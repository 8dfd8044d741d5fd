use iced::widget::{button, container, pick_list, row, text_input, Id};
use iced::{Alignment, Element, Length};
use marquee_core::config::ThemeMode;
use marquee_core::models::SortKey;

use crate::style;
use crate::theme::{self, ColorScheme};

/// Widget id of the search input, for focus operations.
pub const SEARCH_INPUT_ID: &str = "search-input";

/// Search bar with a clear button, the sort picker, and the appearance toggle.
#[allow(clippy::too_many_arguments)]
pub fn toolbar<'a, Message: Clone + 'a>(
    cs: &ColorScheme,
    query: &'a str,
    sort: SortKey,
    mode: ThemeMode,
    on_input: impl Fn(String) -> Message + 'a,
    on_clear: Message,
    on_sort: impl Fn(SortKey) -> Message + 'a,
    on_cycle_mode: Message,
) -> Element<'a, Message> {
    let search_icon = lucide_icons::iced::icon_search()
        .size(style::TEXT_BASE)
        .color(cs.on_surface_variant);

    let search_input = text_input("Search for a movie...", query)
        .id(Id::new(SEARCH_INPUT_ID))
        .on_input(on_input)
        .size(style::TEXT_BASE)
        .padding([style::SPACE_XS, style::SPACE_SM])
        .width(Length::Fill)
        .style(theme::text_input_borderless(cs));

    let mut search_row = row![search_icon, search_input]
        .spacing(style::SPACE_SM)
        .align_y(Alignment::Center);

    if !query.is_empty() {
        let clear_size = style::TEXT_SM + style::SPACE_XS * 2.0;
        let clear_btn = button(
            container(
                lucide_icons::iced::icon_x()
                    .size(style::TEXT_SM)
                    .color(cs.on_surface_variant),
            )
            .center_x(Length::Fill)
            .center_y(Length::Fill),
        )
        .on_press(on_clear)
        .padding(0)
        .width(Length::Fixed(clear_size))
        .height(Length::Fixed(clear_size))
        .style(theme::icon_button(cs));
        search_row = search_row.push(clear_btn);
    }

    let search_bar = container(search_row)
        .style(theme::search_bar(cs))
        .padding([style::SPACE_SM, style::SPACE_MD])
        .max_width(style::SEARCH_MAX_WIDTH)
        .width(Length::Fill);

    let sort_picker = pick_list(SortKey::ALL, Some(sort), on_sort)
        .text_size(style::TEXT_SM)
        .padding([style::SPACE_SM, style::SPACE_MD])
        .width(Length::Fixed(style::SORT_PICKER_WIDTH))
        .style(theme::pick_list_style(cs))
        .menu_style(theme::pick_list_menu_style(cs));

    let mode_icon = match mode {
        ThemeMode::System => lucide_icons::iced::icon_monitor(),
        ThemeMode::Dark => lucide_icons::iced::icon_moon(),
        ThemeMode::Light => lucide_icons::iced::icon_sun(),
    };
    let mode_size = style::TEXT_BASE + style::SPACE_SM * 2.0;
    let mode_btn = button(
        container(mode_icon.size(style::TEXT_BASE).color(cs.on_surface_variant))
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .on_press(on_cycle_mode)
    .padding(0)
    .width(Length::Fixed(mode_size))
    .height(Length::Fixed(mode_size))
    .style(theme::icon_button(cs));

    row![search_bar, sort_picker, mode_btn]
        .spacing(style::SPACE_MD)
        .align_y(Alignment::Center)
        .into()
}
