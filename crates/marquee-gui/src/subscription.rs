use std::time::Duration;

use iced::Subscription;
use marquee_core::config::ThemeMode;

use crate::app::Message;
use crate::keyboard;

/// How often the OS appearance is re-checked while following the system.
const APPEARANCE_POLL: Duration = Duration::from_secs(5);

/// All app-wide subscriptions.
pub fn subscriptions(mode: ThemeMode) -> Subscription<Message> {
    let mut subs = vec![keyboard::keyboard_subscription(), window_events()];
    if mode == ThemeMode::System {
        subs.push(appearance_tick());
    }
    Subscription::batch(subs)
}

/// Ticks so `ThemeMode::System` can follow OS dark/light switches.
fn appearance_tick() -> Subscription<Message> {
    iced::time::every(APPEARANCE_POLL).map(|_| Message::AppearanceTick)
}

/// Window move/resize events for geometry persistence.
fn window_events() -> Subscription<Message> {
    iced::window::events().map(|(_id, event)| Message::WindowEvent(event))
}
