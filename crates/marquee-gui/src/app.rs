use std::sync::Arc;

use iced::widget::{column, container, operation, row, rule, text, Id};
use iced::window;
use iced::{Alignment, Element, Length, Subscription, Task, Theme};

use marquee_api::tmdb::TmdbClient;
use marquee_core::browse::{Browser, Completion, Effect};
use marquee_core::card::{MovieCard, Poster};
use marquee_core::config::{AppConfig, ThemeMode};
use marquee_core::models::{Mode, SortKey};
use marquee_core::runner;

use crate::keyboard::Shortcut;
use crate::poster_cache::{self, PosterCache};
use crate::style;
use crate::subscription;
use crate::theme::{self, ColorScheme, MarqueeTheme};
use crate::widgets::{self, SEARCH_INPUT_ID};
use crate::window_state::WindowState;

const APP_TITLE: &str = "Movie Explorer";

/// Application state: the browser controller plus window chrome.
pub struct Marquee {
    config: AppConfig,
    // Theme
    current_theme: MarqueeTheme,
    active_mode: ThemeMode,
    // Browsing
    browser: Browser,
    catalog: Arc<TmdbClient>,
    has_api_key: bool,
    posters: PosterCache,
    // Window persistence
    window_state: WindowState,
}

/// All messages the application can handle.
#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    ClearQuery,
    SortChanged(SortKey),
    CycleThemeMode,
    PrevPage,
    NextPage,
    /// A debounce timer or fetch finished.
    Settled(Completion),
    PosterLoaded {
        url: String,
        result: Result<Vec<u8>, String>,
    },
    Shortcut(Shortcut),
    AppearanceTick,
    WindowEvent(window::Event),
}

impl Marquee {
    /// Build the app and kick off the initial discover request.
    pub fn new(config: AppConfig, api_key: Option<String>) -> (Self, Task<Message>) {
        let has_api_key = api_key.is_some();
        if !has_api_key {
            tracing::warn!("no TMDB API key configured; requests will be rejected");
        }
        let catalog = TmdbClient::new(api_key.unwrap_or_default())
            .with_api_base(config.tmdb.api_base.clone())
            .with_language(config.tmdb.language.clone());

        let current_theme = theme::find_theme(&config.appearance.theme);
        let active_mode = theme::resolve_mode(config.appearance.mode);
        let (browser, first) = Browser::new(config.browse.default_sort);

        let app = Self {
            config,
            current_theme,
            active_mode,
            browser,
            catalog: Arc::new(catalog),
            has_api_key,
            posters: PosterCache::default(),
            window_state: WindowState::load(),
        };
        let task = app.run_effect(first);
        (app, task)
    }

    pub fn title(&self) -> String {
        match self.browser.mode() {
            Mode::Search => format!("{APP_TITLE} \u{00B7} {}", self.browser.state().query),
            Mode::Discover => APP_TITLE.to_string(),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::QueryChanged(query) => {
                let effect = self.browser.set_query(query);
                self.run_effect(effect)
            }
            Message::ClearQuery => {
                let effect = self.browser.set_query(String::new());
                self.run_effect(effect)
            }
            Message::SortChanged(sort) => {
                self.browser.set_sort(sort);
                Task::none()
            }
            Message::CycleThemeMode => {
                self.config.appearance.mode = self.config.appearance.mode.next();
                self.sync_theme();
                if let Err(e) = self.config.save() {
                    tracing::warn!("Failed to save config: {e}");
                }
                Task::none()
            }
            Message::PrevPage => self.run_maybe(|b| b.prev_page()),
            Message::NextPage => self.run_maybe(|b| b.next_page()),
            Message::Settled(completion) => {
                let follow_up = self
                    .browser
                    .apply(completion)
                    .map(|effect| self.run_effect(effect))
                    .unwrap_or_else(Task::none);
                Task::batch([follow_up, self.request_posters()])
            }
            Message::PosterLoaded { url, result } => {
                self.posters.finish(url, result);
                Task::none()
            }
            Message::Shortcut(shortcut) => self.handle_shortcut(shortcut),
            Message::AppearanceTick => {
                // OS appearance may have changed; re-resolve for System mode.
                self.sync_theme();
                Task::none()
            }
            Message::WindowEvent(event) => {
                match event {
                    window::Event::Resized(size) => {
                        self.window_state.width = size.width;
                        self.window_state.height = size.height;
                        self.window_state.save();
                    }
                    window::Event::Moved(pos) => {
                        self.window_state.x = pos.x;
                        self.window_state.y = pos.y;
                        self.window_state.save();
                    }
                    _ => {}
                }
                Task::none()
            }
        }
    }

    fn handle_shortcut(&mut self, shortcut: Shortcut) -> Task<Message> {
        match shortcut {
            Shortcut::Refresh => {
                let effect = self.browser.refresh();
                self.run_effect(effect)
            }
            Shortcut::FocusSearch => operation::focus(Id::new(SEARCH_INPUT_ID)),
            Shortcut::ClearQuery if self.browser.text().is_empty() => Task::none(),
            Shortcut::ClearQuery => self.update(Message::ClearQuery),
            Shortcut::PrevPage => self.update(Message::PrevPage),
            Shortcut::NextPage => self.update(Message::NextPage),
        }
    }

    /// Hand an effect to the runtime; its completion comes back as `Settled`.
    fn run_effect(&self, effect: Effect) -> Task<Message> {
        Task::perform(
            runner::run(Arc::clone(&self.catalog), effect),
            Message::Settled,
        )
    }

    fn run_maybe(&mut self, step: impl FnOnce(&mut Browser) -> Option<Effect>) -> Task<Message> {
        match step(&mut self.browser) {
            Some(effect) => self.run_effect(effect),
            None => Task::none(),
        }
    }

    /// Start downloads for any remote poster on the current page not yet requested.
    fn request_posters(&mut self) -> Task<Message> {
        let image_base = &self.config.tmdb.image_base;
        let urls: Vec<String> = self
            .browser
            .results()
            .iter()
            .filter_map(|movie| match MovieCard::from_movie(movie, image_base).poster {
                Poster::Remote(url) => Some(url),
                Poster::Placeholder { .. } => None,
            })
            .collect();

        let tasks: Vec<Task<Message>> = urls
            .into_iter()
            .filter(|url| self.posters.begin(url))
            .map(|url| {
                let client = Arc::clone(&self.catalog);
                Task::perform(
                    poster_cache::fetch_poster(client, url.clone()),
                    move |result| Message::PosterLoaded {
                        url: url.clone(),
                        result,
                    },
                )
            })
            .collect();

        if tasks.is_empty() {
            Task::none()
        } else {
            Task::batch(tasks)
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let cs = self.current_theme.colors(self.active_mode);

        let mut page = column![self.header(cs)];
        if !self.has_api_key {
            page = page.push(
                container(
                    text(
                        "No TMDB API key found. Set TMDB_API_KEY, pass --api-key, \
                         or add api_key under [tmdb] in config.toml.",
                    )
                    .size(style::TEXT_SM)
                    .line_height(style::LINE_HEIGHT_NORMAL),
                )
                .padding([style::SPACE_SM, style::SPACE_MD])
                .width(Length::Fill)
                .style(theme::notice(cs)),
            );
        }

        let status_bar = container(
            text(status_line(
                self.browser.is_resolve_pending(),
                self.browser.is_loading(),
                self.browser.results().len(),
                self.browser.page(),
            ))
            .size(style::TEXT_XS)
            .line_height(style::LINE_HEIGHT_LOOSE),
        )
        .style(theme::status_bar(cs))
        .width(Length::Fill)
        .height(Length::Fixed(style::STATUS_BAR_HEIGHT))
        .padding([4.0, style::SPACE_MD]);

        page.push(rule::horizontal(1))
            .push(self.results(cs))
            .push(widgets::pager(
                cs,
                self.browser.pager(),
                Message::PrevPage,
                Message::NextPage,
            ))
            .push(status_bar)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn header<'a>(&'a self, cs: &ColorScheme) -> Element<'a, Message> {
        let title = row![
            lucide_icons::iced::icon_clapperboard()
                .size(style::TEXT_XL)
                .color(cs.primary),
            text(APP_TITLE)
                .size(style::TEXT_XL)
                .font(style::FONT_HEADING)
                .line_height(style::LINE_HEIGHT_TIGHT),
        ]
        .spacing(style::SPACE_SM)
        .align_y(Alignment::Center);

        let toolbar = widgets::toolbar(
            cs,
            self.browser.text(),
            self.browser.sort(),
            self.config.appearance.mode,
            Message::QueryChanged,
            Message::ClearQuery,
            Message::SortChanged,
            Message::CycleThemeMode,
        );

        container(
            column![title, toolbar]
                .spacing(style::SPACE_MD)
                .align_x(Alignment::Center),
        )
        .center_x(Length::Fill)
        .padding([style::SPACE_LG, style::SPACE_XL])
        .style(theme::app_bar(cs))
        .into()
    }

    fn results<'a>(&'a self, cs: &ColorScheme) -> Element<'a, Message> {
        if self.browser.results().is_empty() {
            let (icon, title, subtitle) = if self.browser.is_loading() {
                (
                    lucide_icons::iced::icon_loader(),
                    "Loading\u{2026}",
                    "Fetching movies from TMDB",
                )
            } else {
                (
                    lucide_icons::iced::icon_search_x(),
                    "No movies found",
                    match self.browser.mode() {
                        Mode::Search => "Try a different title",
                        Mode::Discover => "Check your connection or API key",
                    },
                )
            };
            return widgets::empty_state(
                cs,
                icon.size(style::TEXT_3XL).color(cs.outline).into(),
                title,
                subtitle,
            );
        }

        let image_base = &self.config.tmdb.image_base;
        let cards: Vec<Element<'a, Message>> = self
            .browser
            .sorted()
            .map(|movie| {
                let card = MovieCard::from_movie(movie, image_base);
                widgets::movie_card(cs, &card, &self.posters)
            })
            .collect();

        let wrap = iced_aw::Wrap::with_elements(cards)
            .spacing(style::SPACE_LG)
            .line_spacing(style::SPACE_LG);

        widgets::styled_scrollable(
            container(wrap)
                .center_x(Length::Fill)
                .padding([style::SPACE_LG, style::SPACE_XL]),
            cs,
        )
        .height(Length::Fill)
        .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::subscriptions(self.config.appearance.mode)
    }

    pub fn theme(&self) -> Theme {
        self.current_theme.iced_theme(self.active_mode)
    }

    fn sync_theme(&mut self) {
        let mode = theme::resolve_mode(self.config.appearance.mode);
        if mode != self.active_mode {
            tracing::debug!(?mode, "appearance changed");
            self.active_mode = mode;
        }
    }
}

/// Bottom status text: a typing or loading marker, or the result count and page.
pub fn status_line(typing: bool, loading: bool, count: usize, page: u32) -> String {
    if typing {
        "Typing\u{2026}".to_string()
    } else if loading {
        "Loading\u{2026}".to_string()
    } else {
        let noun = if count == 1 { "movie" } else { "movies" };
        format!("{count} {noun} \u{00B7} page {page}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line() {
        assert_eq!(status_line(false, true, 20, 3), "Loading\u{2026}");
        assert_eq!(status_line(false, false, 20, 3), "20 movies \u{00B7} page 3");
        assert_eq!(status_line(false, false, 1, 1), "1 movie \u{00B7} page 1");
        assert_eq!(status_line(false, false, 0, 1), "0 movies \u{00B7} page 1");
    }

    #[test]
    fn test_status_line_while_typing() {
        assert_eq!(status_line(true, false, 20, 3), "Typing\u{2026}");
        assert_eq!(status_line(true, true, 20, 3), "Typing\u{2026}");
    }
}
