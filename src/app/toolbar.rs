//! Toolbar rendering for `ChromeApp`.
//!
//! The top strip carries the address bar, back/forward buttons and the
//! dark-mode toggle. The bottom bar launches each overlay kind.

use std::time::Duration;

use eframe::egui;

use overlay_chrome::overlay::{
    BackForwardList, FindInPageState, NotificationRow, OverlayHeaderButton, OverlaySheetPosition,
    OverlayStyle, PopoverRoot, SheetRoot, Toast, ToastProgressStatus, ToastState,
};
use overlay_chrome::OverlayType;

use super::content::{MenuContent, SettingsContent, ShareContent};
use super::ChromeApp;

/// Below this window width the menu popover spans the window.
const NARROW_WIDTH: f32 = 480.0;
const SHARE_SHEET_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(242, 242, 247);

impl ChromeApp {
    /// Render the top toolbar strip.
    pub fn draw_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(4.0);

            // Back / Forward. Secondary click opens the back/forward list.
            let can_back = self.history_idx > 0;
            let can_fwd = self.history_idx + 1 < self.history.len();
            let back = ui.add_enabled(
                can_back,
                egui::Button::new("\u{25C0}").min_size(egui::vec2(28.0, 24.0)),
            );
            if back.clicked() {
                self.go_back();
            }
            if back.secondary_clicked() {
                self.show_back_forward_list();
            }
            let forward = ui.add_enabled(
                can_fwd,
                egui::Button::new("\u{25B6}").min_size(egui::vec2(28.0, 24.0)),
            );
            if forward.clicked() {
                self.go_forward();
            }
            if forward.secondary_clicked() {
                self.show_back_forward_list();
            }

            // URL bar
            let response = ui.add_sized(
                [ui.available_width() - 80.0, 24.0],
                egui::TextEdit::singleline(&mut self.url_input)
                    .hint_text("Enter URL...")
                    .font(egui::TextStyle::Monospace),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                self.navigate();
            }
            if ui.button("Go").clicked() {
                self.navigate();
            }

            // Dark mode toggle
            let dark_label = if self.dark_mode { "\u{263E}" } else { "\u{2600}" };
            if ui.button(dark_label).clicked() {
                self.dark_mode = !self.dark_mode;
            }
        });
    }

    /// Render the bottom toolbar with one launcher per overlay kind.
    pub fn draw_bottom_bar(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.horizontal_centered(|ui| {
            if ui.button("Find").clicked() {
                let _ = self
                    .overlays
                    .show(OverlayType::FindInPage(FindInPageState::new(self.page.text())));
            }
            if ui.button("Menu").clicked() {
                let mut style = OverlayStyle::WITH_TITLE;
                if ctx.screen_rect().width() < NARROW_WIDTH {
                    style = style.expanded_width();
                }
                let _ = self
                    .overlays
                    .show(OverlayType::Popover(PopoverRoot::new(style, MenuContent)));
            }
            if ui.button("Share").clicked() {
                let style = OverlayStyle::GRID.with_background(SHARE_SHEET_BACKGROUND);
                let sheet = SheetRoot::new(style, ShareContent::new(&self.page.url))
                    .at_position(OverlaySheetPosition::Middle)
                    .with_header_button(OverlayHeaderButton::new("Copy link", "copy-link"));
                let _ = self.overlays.show(OverlayType::Sheet(sheet));
            }
            if ui.button("History").clicked() {
                self.show_back_forward_list();
            }
            ui.separator();
            if ui.button("Toast").clicked() {
                let toast = Toast::new("Link copied")
                    .with_button("Undo", "undo-copy")
                    .with_display_time(Duration::from_secs(3));
                let _ = self.overlays.show(OverlayType::Toast(toast));
            }
            if ui.button("Download").clicked() {
                self.start_download(ctx);
            }
            if ui.button("Notify").clicked() {
                let row = NotificationRow::new("Neeva", "Your weekly digest is ready")
                    .with_url("https://neeva.com/digest");
                let _ = self.overlays.show(OverlayType::Notification(row));
            }
            if ui.button("Queue").clicked() {
                for text in ["First queued toast", "Second queued toast"] {
                    let _ = self.overlays.enqueue(OverlayType::Toast(Toast::new(text)));
                }
            }
            ui.separator();
            if ui.button("Settings").clicked() {
                let _ = self
                    .overlays
                    .manager_mut()
                    .present_full_screen_modal(SettingsContent::default());
            }

            if let Some(last) = self.activity.last() {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(last);
                });
            }
        });
    }

    pub fn show_back_forward_list(&mut self) {
        let list = BackForwardList::new(self.history.clone(), self.history_idx);
        if list.is_empty() {
            return;
        }
        let _ = self.overlays.show(OverlayType::BackForwardList(list));
    }

    /// Show a progress toast and settle it from a worker thread.
    fn start_download(&mut self, ctx: &egui::Context) {
        let toast = Toast::new("Downloading page...")
            .with_progress(ToastState::text("Download complete"), ToastState::text("Download failed"));
        let _ = self.overlays.show(OverlayType::Toast(toast));

        let dispatcher = self.overlays.dispatcher();
        let ctx = ctx.clone();
        std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(1500));
            dispatcher.toast_progress(ToastProgressStatus::Success);
            ctx.request_repaint();
        });
    }
}
