// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the retouch studio to localization, toasts and the
//! image service, and translates messages into side effects like file
//! dialogs, background reads and transform requests. Policy decisions
//! (window size, how a missing service is surfaced) stay close to the main
//! update loop so user-facing behavior is easy to audit.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::ImageTransformer;
use crate::config;
use crate::i18n::fluent::I18n;
use crate::infrastructure::GeminiTransformer;
use crate::session::Download;
use crate::ui::notifications::{self, Notification};
use crate::ui::studio;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use update::SharedTransformer;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    studio: studio::State,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    transformer: SharedTransformer,
    theme_mode: ThemeMode,
    /// Result waiting for the save dialog to return a path.
    pending_download: Option<Download>,
    last_tick: Option<Instant>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("active_tool", &self.studio.active_tool())
            .field("has_image", &self.studio.has_image())
            .field("theme_mode", &self.theme_mode)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 760;
pub const MIN_WINDOW_HEIGHT: u32 = 540;

/// Builds the window settings.
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

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the app around an explicit transformer.
    pub fn with_transformer(i18n: I18n, transformer: Arc<dyn ImageTransformer>) -> Self {
        Self::from_parts(i18n, Ok(transformer), ThemeMode::default())
    }

    fn from_parts(i18n: I18n, transformer: SharedTransformer, theme_mode: ThemeMode) -> Self {
        Self {
            i18n,
            studio: studio::State::new(),
            notifications: notifications::Manager::new(),
            transformer,
            theme_mode,
            pending_download: None,
            last_tick: None,
        }
    }

    /// Initializes application state and optionally starts reading the image
    /// passed on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let transformer: SharedTransformer = GeminiTransformer::from_config(&config.service)
            .map(|transformer| Arc::new(transformer) as Arc<dyn ImageTransformer>)
            .inspect_err(|err| tracing::error!(error = %err, "image service unavailable"));

        let mut app = Self::from_parts(i18n, transformer, config.general.theme_mode);

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }

        let task = match flags.image_path {
            Some(path) => update::start_upload(&mut app.studio, path),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        if self.studio.has_image() {
            let tool = self.i18n.tr(self.studio.active_tool().info().name_key);
            self.i18n
                .tr_with_args("window-title-with-tool", &[("tool", tool.as_str())])
        } else {
            self.i18n.tr("window-title")
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.studio.is_busy(),
            self.notifications.has_notifications(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            studio: &mut self.studio,
            notifications: &mut self.notifications,
            transformer: &self.transformer,
            pending_download: &mut self.pending_download,
            last_tick: &mut self.last_tick,
        };

        match message {
            Message::Studio(message) => update::handle_studio_message(&mut ctx, message),
            Message::Notification(message) => {
                ctx.notifications.handle_message(&message);
                Task::none()
            }
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
            Message::FileDropped(path) => update::start_upload(ctx.studio, path),
            Message::OpenDialogResult(path) => update::handle_open_dialog_result(&mut ctx, path),
            Message::ImageRead { ticket, result } => {
                update::handle_image_read(&mut ctx, ticket, result)
            }
            Message::TransformCompleted { ticket, result } => {
                update::handle_transform_completed(&mut ctx, ticket, result)
            }
            Message::SaveDialogResult(path) => update::handle_save_dialog_result(&mut ctx, path),
            Message::DownloadWritten(result) => update::handle_download_written(&mut ctx, result),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            studio: &self.studio,
            notifications: &self.notifications,
        })
    }
}
