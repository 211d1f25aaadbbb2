// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` struct wires together localization, the persisted settings, the
//! image engine and the showcase screen, and translates messages into tasks.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use update::{animation_phase, ANIMATION_PERIOD};

use crate::i18n::fluent::I18n;
use crate::loader::{Engine, EngineConfig};
use crate::showcase::{self, Showcase};
use crate::ui::state::GestureConfig;
use crate::ui::theming::AppTheme;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    showcase: Showcase,
    engine: Engine,
    theme: AppTheme,
    started: Instant,
    phase: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", self.i18n.current_locale())
            .field("engine", &self.engine)
            .field("theme_mode", &self.theme.mode)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 860;
pub const WINDOW_DEFAULT_WIDTH: u32 = 760;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 400;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires a reusable boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || App::new(boot_state.borrow_mut().take().unwrap_or_default());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings, picks the locale, builds the engine and starts the
    /// first image loads.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir);
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);
        if let Some(key) = config_warning {
            log::warn!("{}", i18n.tr(&key));
        }

        let engine_config = EngineConfig::from(&config.loader);
        let engine = Engine::new(&engine_config).unwrap_or_else(|err| {
            log::error!("HTTP client unavailable, loading offline only: {err}");
            Engine::offline(&engine_config)
        });

        let gestures = GestureConfig {
            double_tap_window: config.viewer.double_tap_window(),
            wheel_step: config.viewer.wheel_zoom_step(),
            ..GestureConfig::default()
        };

        let mut showcase = Showcase::new(showcase::sample_items(), gestures);
        let task = showcase.start(&engine).map(Message::Showcase);

        let app = App {
            i18n,
            showcase,
            engine,
            theme: AppTheme::new(config.general.theme_mode),
            started: Instant::now(),
            phase: 0.0,
        };
        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(
            update::UpdateContext {
                showcase: &mut self.showcase,
                engine: &self.engine,
                phase: &mut self.phase,
                elapsed: self.started.elapsed(),
            },
            message,
        )
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            showcase: &self.showcase,
            phase: self.phase,
        })
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.showcase.is_animating()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::showcase::dialogs::Modal;
    use crate::ui::theming::ThemeMode;

    fn test_app() -> App {
        App {
            i18n: I18n::new(Some("en-US".into()), &config::Config::default()),
            showcase: Showcase::default(),
            engine: Engine::offline(&EngineConfig::default()),
            theme: AppTheme::new(ThemeMode::Dark),
            started: Instant::now(),
            phase: 0.0,
        }
    }

    #[test]
    fn title_is_localized() {
        let app = test_app();
        assert_eq!(app.title(), "Iced Image Loader");
    }

    #[test]
    fn escape_closes_open_dialog() {
        let mut app = test_app();
        let _ = app.update(Message::Showcase(showcase::Message::OpenModal(Modal::Info)));
        assert_eq!(app.showcase.modal(), Some(Modal::Info));

        let _ = app.update(Message::EscapePressed);
        assert_eq!(app.showcase.modal(), None);
    }

    #[test]
    fn search_updates_visible_items() {
        let mut app = test_app();
        let _ = app.update(Message::Showcase(showcase::Message::SearchChanged(
            "circle".into(),
        )));
        assert_eq!(app.showcase.visible_items().len(), 3);
    }

    #[test]
    fn tick_advances_phase_within_cycle() {
        let mut app = test_app();
        let _ = app.update(Message::Tick(Instant::now()));
        assert!((0.0..1.0).contains(&app.phase));
    }

    #[test]
    fn window_settings_respect_minimum_size() {
        let settings = window_settings();
        let min = settings.min_size.expect("min size set");
        assert!(settings.size.width >= min.width);
        assert!(settings.size.height >= min.height);
    }
}
