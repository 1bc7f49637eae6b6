//! Diligence GUI - GPUI-based frontend for the due-diligence analysis backend
//!
//! This application provides a graphical interface for the due-diligence
//! platform. A ticker entered by the user is sent to the local analysis
//! backend, and the generated report comes back as named sections displayed
//! as collapsible blocks.

mod api;
mod app;
mod components;
mod report;
mod settings;
mod theme;

#[cfg(test)]
mod tests;

use app::DiligenceApp;
use gpui::*;
use settings::AppSettings;

fn main() {
    init_logger();

    let settings = AppSettings::load();

    Application::new().run(move |cx: &mut App| {
        // Set up window options
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds {
                origin: Point::default(),
                size: Size {
                    width: px(1100.0),
                    height: px(780.0),
                },
            })),
            titlebar: Some(TitlebarOptions {
                title: Some("Diligence - Stock Due Diligence".into()),
                appears_transparent: false,
                ..Default::default()
            }),
            ..Default::default()
        };

        cx.open_window(window_options, move |window, cx| {
            let app = cx.new(|cx| DiligenceApp::new(settings.clone(), cx));
            window.focus(&app.focus_handle(cx));
            app
        })
        .unwrap();
    });
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
