//! Scrim gallery - demonstration app for scrim dialog overlays

mod app;

use app::GalleryApp;

fn title(_app: &GalleryApp) -> String {
    String::from("scrim gallery")
}

fn main() -> iced::Result {
    // Initialize logger - set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("scrim-gallery starting up");

    iced::application(GalleryApp::new, GalleryApp::update, GalleryApp::view)
        .title(title)
        .window_size(iced::Size::new(640.0, 420.0))
        .theme(GalleryApp::theme)
        .subscription(GalleryApp::subscription)
        .run()
}
