//! Content-area rendering for `ChromeApp`, plus the bodies of the demo
//! popover, share sheet and settings modal.

use eframe::egui;

use overlay_chrome::overlay::Toast;
use overlay_chrome::{OverlayContent, OverlayDispatcher, OverlayType};

use super::ChromeApp;
use crate::ui::maybe_highlight;

impl ChromeApp {
    /// Query of the find-in-page bar, when it is the current overlay.
    pub fn find_query(&self) -> Option<String> {
        match self.overlays.manager().current_overlay() {
            Some(OverlayType::FindInPage(find)) if !find.query.is_empty() => Some(find.query.clone()),
            _ => None,
        }
    }

    pub fn draw_content(&mut self, ui: &mut egui::Ui) {
        let highlight = self.find_query();
        let highlight = highlight.as_deref();

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(12.0);
            let title = &self.page.title;
            ui.heading(maybe_highlight(
                egui::RichText::new(title).size(28.0).strong(),
                title,
                highlight,
            ));
            ui.add_space(8.0);
            for p in &self.page.paragraphs {
                ui.label(maybe_highlight(egui::RichText::new(p), p, highlight));
                ui.add_space(8.0);
            }
            ui.separator();
            ui.small(&self.page.url);
        });
    }
}

// ─── Overlay bodies ───────────────────────────────────────────────────────────

pub struct MenuContent;

impl OverlayContent for MenuContent {
    fn title(&self) -> Option<&str> {
        Some("Menu")
    }

    fn is_fixed_height(&self) -> bool {
        true
    }

    fn ui(&mut self, ui: &mut egui::Ui, dispatcher: &OverlayDispatcher) {
        if ui.button("Open example.com").clicked() {
            dispatcher.open_url("example.com");
            dispatcher.hide_overlay();
        }
        if ui.button("Copy link").clicked() {
            dispatcher.show(OverlayType::Toast(
                Toast::new("Link copied").with_button("Undo", "undo-copy"),
            ));
        }
        if ui.button("Settings").clicked() {
            dispatcher.show(OverlayType::FullScreenModal(Box::new(SettingsContent::default())));
        }
    }
}

/// Share targets for the current page.
pub struct ShareContent {
    url: String,
}

impl ShareContent {
    pub const TARGETS: [&'static str; 4] = ["Messages", "Mail", "Notes", "Reminders"];

    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
        }
    }
}

impl OverlayContent for ShareContent {
    fn title(&self) -> Option<&str> {
        Some("Share")
    }

    fn ui(&mut self, ui: &mut egui::Ui, dispatcher: &OverlayDispatcher) {
        ui.label(egui::RichText::new(&self.url).monospace());
        ui.add_space(8.0);
        egui::Grid::new("share_targets").spacing([12.0, 12.0]).show(ui, |ui| {
            for (i, target) in Self::TARGETS.iter().enumerate() {
                if ui
                    .add_sized([96.0, 64.0], egui::Button::new(*target))
                    .clicked()
                {
                    dispatcher.show(OverlayType::Toast(Toast::new(format!("Shared to {}", target))));
                }
                if i % 2 == 1 {
                    ui.end_row();
                }
            }
        });
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SettingsContent {
    pub block_trackers: bool,
    pub show_images: bool,
}

impl Default for SettingsContent {
    fn default() -> Self {
        Self {
            block_trackers: true,
            show_images: true,
        }
    }
}

impl OverlayContent for SettingsContent {
    fn title(&self) -> Option<&str> {
        Some("Settings")
    }

    fn ui(&mut self, ui: &mut egui::Ui, dispatcher: &OverlayDispatcher) {
        ui.checkbox(&mut self.block_trackers, "Block trackers");
        ui.checkbox(&mut self.show_images, "Show images");
        ui.add_space(16.0);
        if ui.button("Done").clicked() {
            dispatcher.hide_overlay();
        }
    }
}
