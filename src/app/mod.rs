//! `ChromeApp`: the top-level egui application state.
//!
//! This module declares the `ChromeApp` struct and its `eframe::App` impl.
//! Methods are split across the sibling sub-modules:
//!
//! - `navigation` : history, built-in pages, host event handling
//! - `toolbar`    : address bar and bottom toolbar
//! - `content`    : page viewport and the demo overlay bodies

pub mod content;
pub mod navigation;
pub mod toolbar;

use eframe::egui;

use overlay_chrome::{OverlayConfig, OverlayHost};

use navigation::Page;

/// Height reserved for the bottom toolbar.
pub const BOTTOM_BAR_HEIGHT: f32 = 44.0;

// ─── Application state ───────────────────────────────────────────────────────

pub struct ChromeApp {
    pub url_input: String,
    pub page: Page,
    pub dark_mode: bool,
    // History (back / forward)
    pub history: Vec<String>,
    pub history_idx: usize,
    pub overlays: OverlayHost,
    /// Last few host events, newest last; shown in the status line.
    pub activity: Vec<String>,
}

impl Default for ChromeApp {
    fn default() -> Self {
        Self::new(OverlayConfig::default())
    }
}

impl ChromeApp {
    pub fn new(config: OverlayConfig) -> Self {
        let mut app = Self {
            url_input: String::from(navigation::HOME_URL),
            page: Page::for_url(navigation::HOME_URL),
            dark_mode: false,
            history: Vec::new(),
            history_idx: 0,
            overlays: OverlayHost::new(config).with_bottom_bar_height(BOTTOM_BAR_HEIGHT),
            activity: Vec::new(),
        };
        app.navigate();
        app
    }
}

impl eframe::App for ChromeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(if self.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_space(4.0);
            self.draw_toolbar(ui);
            ui.add_space(4.0);
        });

        if !self.overlays.manager().hide_bottom_bar() {
            egui::TopBottomPanel::bottom("bottom_bar")
                .exact_height(BOTTOM_BAR_HEIGHT)
                .show(ctx, |ui| self.draw_bottom_bar(ui, ctx));
        }

        egui::CentralPanel::default().show(ctx, |ui| self.draw_content(ui));

        for event in self.overlays.update(ctx) {
            self.handle_event(event);
        }
    }
}
