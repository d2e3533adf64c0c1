mod app;
mod ui;

use eframe::egui;

use overlay_chrome::OverlayConfig;

use app::ChromeApp;

fn main() -> eframe::Result {
    env_logger::init();

    let config = OverlayConfig::from_env().unwrap_or_else(|e| {
        log::warn!("{}; using default overlay config", e);
        OverlayConfig::default()
    });
    log::info!(
        "overlay config: animation {}ms, toast {}ms",
        config.animation_duration_ms,
        config.toast_display_time_ms
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1024.0, 720.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Overlay Chrome",
        options,
        Box::new(move |_cc| Ok(Box::new(ChromeApp::new(config)))),
    )
}
