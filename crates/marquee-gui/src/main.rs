mod app;
mod keyboard;
mod logging;
mod poster_cache;
mod style;
mod subscription;
mod theme;
mod widgets;
mod window_state;

use clap::Parser;
use marquee_core::config::AppConfig;

/// Browse popular movies and search The Movie Database.
#[derive(Debug, Parser)]
#[command(name = "marquee", version, about)]
struct Cli {
    /// TMDB v3 API key. Overrides TMDB_API_KEY and the config file.
    #[arg(long, value_name = "KEY")]
    api_key: Option<String>,

    /// tracing filter directives, e.g. `marquee_core=debug,info`.
    #[arg(long, value_name = "FILTER")]
    log_filter: Option<String>,
}

fn main() -> iced::Result {
    let cli = Cli::parse();
    let _log_guard = logging::init(cli.log_filter.as_deref());

    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {e}");
        AppConfig::default()
    });
    let api_key = config.api_key(cli.api_key.as_deref());

    let ws = window_state::WindowState::load();
    let mut win = iced::window::Settings {
        size: ws.size(),
        ..Default::default()
    };

    if let Some(pos) = ws.position() {
        win.position = iced::window::Position::Specific(pos);
    } else {
        win.position = iced::window::Position::Centered;
    }

    iced::application(
        move || app::Marquee::new(config.clone(), api_key.clone()),
        app::Marquee::update,
        app::Marquee::view,
    )
    .title(app::Marquee::title)
    .subscription(app::Marquee::subscription)
    .theme(app::Marquee::theme)
    .font(lucide_icons::LUCIDE_FONT_BYTES)
    .window(win)
    .run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from(["marquee", "--api-key", "abc", "--log-filter", "debug"]);
        assert_eq!(cli.api_key.as_deref(), Some("abc"));
        assert_eq!(cli.log_filter.as_deref(), Some("debug"));

        let cli = Cli::parse_from(["marquee"]);
        assert!(cli.api_key.is_none());
    }
}
