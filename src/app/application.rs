//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    actions, px, App, AppContext, Application, Bounds, SharedString, TitlebarOptions,
    WindowBounds, WindowOptions,
};

use crate::app::storefront::Storefront;
use crate::assets::Assets;
use crate::settings::UiSettings;

actions!(shopfront, [Quit]);

/// Run the Shopfront application
pub fn run_app() {
    Application::new().with_assets(Assets).run(|cx: &mut App| {
        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            // If no windows remain, quit the application
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        // Window geometry comes from the persisted settings file, defaults on
        // first run or when the file cannot be read.
        let settings = match UiSettings::try_load() {
            Ok(settings) => settings,
            Err(error) => {
                tracing::warn!(error = %error, "Failed to load settings, using defaults");
                UiSettings::default()
            }
        };

        // Create main window
        let bounds = Bounds::centered(
            None,
            gpui::size(px(settings.window_width), px(settings.window_height)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("Shopfront")),
                ..Default::default()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |_window, cx| cx.new(Storefront::new));
        if let Err(error) = opened {
            tracing::error!(error = %error, "Failed to open the main window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
