//! View-state machine for the Marquee movie browser.
//!
//! [`browse::Browser`] owns all state transitions and hands timers and
//! network calls back to its host as [`browse::Effect`]s; [`runner`]
//! executes them on tokio.

pub mod browse;
pub mod card;
pub mod config;
pub mod debounce;
pub mod error;
pub mod models;
pub mod pager;
pub mod placeholder;
pub mod runner;
pub mod sort;
pub mod ticket;
