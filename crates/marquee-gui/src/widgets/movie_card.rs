use iced::widget::{column, container, row, svg, text, Space};
use iced::{Alignment, ContentFit, Element, Length};
use marquee_core::card::{MovieCard, Poster};
use marquee_core::placeholder;

use crate::poster_cache::{PosterCache, PosterState};
use crate::style;
use crate::theme::{self, ColorScheme};

/// Card width: poster + horizontal padding inside the card.
pub const CARD_WIDTH: f32 = style::POSTER_WIDTH + 2.0 * style::SPACE_SM;

/// A grid card: poster, title clipped to two lines, release date and rating.
pub fn movie_card<'a, Message: 'a>(
    cs: &ColorScheme,
    card: &MovieCard,
    posters: &'a PosterCache,
) -> Element<'a, Message> {
    let poster = poster_frame(cs, card, posters);

    let title = container(
        text(card.title.clone())
            .size(style::TEXT_BASE)
            .font(style::FONT_HEADING)
            .color(cs.on_surface)
            .line_height(style::LINE_HEIGHT_NORMAL)
            .wrapping(iced::widget::text::Wrapping::WordOrGlyph),
    )
    .height(Length::Fixed(
        style::TEXT_BASE * style::LINE_HEIGHT_NORMAL * 2.0 + 2.0,
    ))
    .clip(true);

    let release = row![
        lucide_icons::iced::icon_calendar()
            .size(style::TEXT_XS)
            .color(cs.outline),
        text(card.release.clone())
            .size(style::TEXT_XS)
            .color(cs.on_surface_variant)
            .line_height(style::LINE_HEIGHT_LOOSE),
    ]
    .spacing(style::SPACE_XS)
    .align_y(Alignment::Center);

    let rating = container(
        row![
            lucide_icons::iced::icon_star()
                .size(style::TEXT_XS)
                .color(cs.rating),
            text(card.rating.clone())
                .size(style::TEXT_XS)
                .line_height(style::LINE_HEIGHT_LOOSE),
        ]
        .spacing(style::SPACE_XXS)
        .align_y(Alignment::Center),
    )
    .padding([style::SPACE_XXS, style::SPACE_SM])
    .style(theme::rating_badge(cs));

    let meta = row![release, Space::new().width(Length::Fill), rating].align_y(Alignment::Center);

    let content = column![poster, title, meta]
        .spacing(style::SPACE_SM)
        .padding(style::SPACE_SM)
        .width(Length::Fixed(CARD_WIDTH));

    container(content).style(theme::movie_card(cs)).into()
}

/// Poster image, or the generated placeholder when there is none.
///
/// A remote poster shows an empty frame while downloading and switches to
/// the placeholder if the download fails.
fn poster_frame<'a, Message: 'a>(
    cs: &ColorScheme,
    card: &MovieCard,
    posters: &'a PosterCache,
) -> Element<'a, Message> {
    let content: Element<'a, Message> = match &card.poster {
        Poster::Remote(url) => match posters.get(url) {
            Some(PosterState::Loaded(handle)) => iced::widget::image(handle.clone())
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Cover)
                .border_radius(style::RADIUS_MD)
                .into(),
            Some(PosterState::Failed) => {
                svg_poster(&placeholder::placeholder_svg(&card.title))
            }
            Some(PosterState::Loading) | None => lucide_icons::iced::icon_film()
                .size(style::TEXT_3XL)
                .color(cs.outline)
                .center()
                .into(),
        },
        Poster::Placeholder { svg: markup, .. } => svg_poster(markup),
    };

    container(content)
        .width(Length::Fixed(style::POSTER_WIDTH))
        .height(Length::Fixed(style::POSTER_HEIGHT))
        .center_x(Length::Fixed(style::POSTER_WIDTH))
        .center_y(Length::Fixed(style::POSTER_HEIGHT))
        .clip(true)
        .style(theme::cover_placeholder(cs, style::RADIUS_MD))
        .into()
}

fn svg_poster<'a, Message: 'a>(markup: &str) -> Element<'a, Message> {
    svg(svg::Handle::from_memory(markup.as_bytes().to_vec()))
        .width(Length::Fill)
        .height(Length::Fill)
        .content_fit(ContentFit::Cover)
        .into()
}
