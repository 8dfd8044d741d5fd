//! Style functions parameterized by ColorScheme.
//!
//! Each function returns a closure suitable for Iced's `.style()` method,
//! capturing the needed color tokens from a `ColorScheme`.

use iced::overlay::menu;
use iced::widget::{button, container, pick_list, scrollable, text_input};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

use crate::style;

use super::ColorScheme;

/// Top app bar: lowest surface with a hairline bottom edge.
pub fn app_bar(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.surface_container_low;
    let text = cs.on_surface;
    move |_theme| container::Style {
        text_color: Some(text),
        background: Some(Background::Color(bg)),
        ..Default::default()
    }
}

/// Status bar container style.
pub fn status_bar(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let text = cs.on_surface_variant;
    let bg = cs.surface_container_lowest;
    move |_theme| container::Style {
        text_color: Some(text),
        background: Some(Background::Color(bg)),
        ..Default::default()
    }
}

/// Inline notice for configuration problems (missing credential).
pub fn notice(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let error = cs.error;
    move |_theme| container::Style {
        text_color: Some(error),
        background: Some(Background::Color(Color { a: 0.1, ..error })),
        border: Border {
            color: Color { a: 0.4, ..error },
            width: 1.0,
            radius: style::RADIUS_MD.into(),
        },
        ..Default::default()
    }
}

/// Movie card container: raised surface with a soft drop shadow.
pub fn movie_card(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.surface_container;
    let border_color = cs.outline_variant;
    move |_theme| container::Style {
        background: Some(Background::Color(bg)),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: style::RADIUS_LG.into(),
        },
        shadow: Shadow {
            color: Color {
                a: 0.18,
                ..Color::BLACK
            },
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        ..Default::default()
    }
}

/// Poster frame shown behind images and placeholders.
pub fn cover_placeholder(cs: &ColorScheme, radius: f32) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.surface_container_high;
    let border_color = cs.outline_variant;
    move |_theme| container::Style {
        background: Some(Background::Color(bg)),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius.into(),
        },
        ..Default::default()
    }
}

/// Rating pill on a card.
pub fn rating_badge(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let rating = cs.rating;
    move |_theme| container::Style {
        text_color: Some(rating),
        background: Some(Background::Color(Color { a: 0.12, ..rating })),
        border: Border {
            color: Color { a: 0.35, ..rating },
            width: 1.0,
            radius: style::RADIUS_FULL.into(),
        },
        ..Default::default()
    }
}

/// Page indicator between the pager buttons.
pub fn page_badge(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.primary_container;
    let text = cs.on_primary_container;
    move |_theme| container::Style {
        text_color: Some(text),
        background: Some(Background::Color(bg)),
        border: Border {
            radius: style::RADIUS_FULL.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Primary action button (pager Next/Previous).
pub fn primary_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let primary = cs.primary;
    let primary_hover = cs.primary_hover;
    let primary_dim = cs.primary_dim;
    let on_primary = cs.on_primary;
    let disabled_bg = cs.surface_container_highest;
    let disabled_text = cs.outline;

    move |_theme, status| {
        let (bg, text_color) = match status {
            button::Status::Hovered => (primary_hover, on_primary),
            button::Status::Pressed => (primary_dim, on_primary),
            button::Status::Disabled => (disabled_bg, disabled_text),
            button::Status::Active => (primary, on_primary),
        };
        button::Style {
            background: Some(Background::Color(bg)),
            text_color,
            border: Border {
                radius: style::RADIUS_MD.into(),
                ..Border::default()
            },
            ..Default::default()
        }
    }
}

/// Transparent icon button: no border, subtle hover.
pub fn icon_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let surface_bright = cs.surface_bright;

    move |_theme, status| {
        let bg = match status {
            button::Status::Hovered => Some(Background::Color(surface_bright)),
            _ => None,
        };
        button::Style {
            background: bg,
            text_color: Color::TRANSPARENT,
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: style::RADIUS_FULL.into(),
            },
            ..Default::default()
        }
    }
}

/// Borderless text input for use inside a composite search bar container.
pub fn text_input_borderless(
    cs: &ColorScheme,
) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    let on_surface = cs.on_surface;
    let on_surface_variant = cs.on_surface_variant;
    let outline = cs.outline;
    let primary = cs.primary;

    move |_theme, _status| text_input::Style {
        background: Background::Color(Color::TRANSPARENT),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 0.0.into(),
        },
        icon: on_surface_variant,
        placeholder: outline,
        value: on_surface,
        selection: Color { a: 0.4, ..primary },
    }
}

/// Composite search bar container: pill-shaped with subtle border.
pub fn search_bar(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.surface_container;
    let border_color = cs.outline_variant;
    move |_theme| container::Style {
        text_color: None,
        background: Some(Background::Color(bg)),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: style::RADIUS_FULL.into(),
        },
        ..Default::default()
    }
}

/// Pick list trigger: themed surface background with outline border.
pub fn pick_list_style(cs: &ColorScheme) -> impl Fn(&Theme, pick_list::Status) -> pick_list::Style {
    let primary = cs.primary;
    let outline = cs.outline;
    let outline_variant = cs.outline_variant;
    let surface_container = cs.surface_container;
    let on_surface = cs.on_surface;
    let on_surface_variant = cs.on_surface_variant;

    move |_theme, status| {
        let (border_color, handle_color) = match status {
            pick_list::Status::Opened { .. } => (primary, primary),
            pick_list::Status::Hovered => (outline, on_surface),
            _ => (outline_variant, on_surface_variant),
        };
        pick_list::Style {
            text_color: on_surface,
            placeholder_color: on_surface_variant,
            handle_color,
            background: Background::Color(surface_container),
            border: Border {
                color: border_color,
                width: 1.0,
                radius: style::RADIUS_FULL.into(),
            },
        }
    }
}

/// Pick list dropdown menu: themed background with primary selection highlight.
pub fn pick_list_menu_style(cs: &ColorScheme) -> impl Fn(&Theme) -> menu::Style {
    let surface_container = cs.surface_container;
    let outline_variant = cs.outline_variant;
    let on_surface = cs.on_surface;
    let primary = cs.primary;
    let on_primary = cs.on_primary;

    move |_theme| menu::Style {
        background: Background::Color(surface_container),
        border: Border {
            color: outline_variant,
            width: 1.0,
            radius: style::RADIUS_MD.into(),
        },
        text_color: on_surface,
        selected_text_color: on_primary,
        selected_background: Background::Color(primary),
        shadow: Shadow {
            color: Color {
                a: 0.2,
                ..Color::BLACK
            },
            offset: Vector::new(0.0, 4.0),
            blur_radius: 12.0,
        },
    }
}

/// Overlay scrollbar: thin transparent rail, pill scroller that becomes
/// more visible on hover/drag.
pub fn overlay_scrollbar(
    cs: &ColorScheme,
) -> impl Fn(&Theme, scrollable::Status) -> scrollable::Style {
    let on_surface = cs.on_surface;
    let primary = cs.primary;

    move |_theme, status| {
        let (scroller_color, scroller_alpha) = match status {
            scrollable::Status::Dragged { .. } => (primary, 0.7),
            scrollable::Status::Hovered {
                is_vertical_scrollbar_hovered: true,
                ..
            } => (on_surface, 0.5),
            scrollable::Status::Hovered { .. } => (on_surface, 0.25),
            _ => (on_surface, 0.15),
        };

        let rail = scrollable::Rail {
            background: None,
            border: Border::default(),
            scroller: scrollable::Scroller {
                background: Background::Color(Color {
                    a: scroller_alpha,
                    ..scroller_color
                }),
                border: Border {
                    radius: style::RADIUS_FULL.into(),
                    ..Border::default()
                },
            },
        };

        scrollable::Style {
            container: container::Style::default(),
            vertical_rail: rail,
            horizontal_rail: rail,
            gap: None,
            auto_scroll: scrollable::AutoScroll {
                background: Background::Color(Color::TRANSPARENT),
                border: Border::default(),
                shadow: Shadow::default(),
                icon: on_surface,
            },
        }
    }
}
