//! egui renderer for the current overlay.
//!
//! Draws whatever the manager holds with the sampled offset/opacity and fires
//! the manager's completion hook once the tween has finished. Besides that
//! hook it only touches the overlay payload (query text, sheet position,
//! toast drag), never the animation state.

use std::time::Instant;

use egui::{Align2, Color32, Id, Order, Rect, Sense};

use super::animation::Modifiers;
use super::content::{truncate_str, BackForwardList, FindInPageState, NotificationRow};
use super::host::OverlayDispatcher;
use super::manager::OverlayManager;
use super::sheet::SheetDragOutcome;
use super::toast::Toast;
use super::{
    OverlayContent, OverlayHeaderButton, OverlaySheetPosition, OverlayType, PopoverRoot, SheetRoot,
};

// ─── Layout constants ─────────────────────────────────────────────────────────

const NOTIFICATION_TOP_PADDING: f32 = 12.0;
const TOAST_BOTTOM_PADDING: f32 = 18.0;
const TOAST_COLOR: Color32 = Color32::from_rgb(74, 74, 79);
const POPOVER_WIDTH: f32 = 360.0;
const SHEET_LANDSCAPE_WIDTH: f32 = 500.0;
const SHEET_MIN_TOP: f32 = 56.0;
const SHEET_CORNER: f32 = 16.0;
/// Seconds of pointer velocity used to predict where a fling ends.
const FLING_PREDICTION: f32 = 0.2;

/// Geometry and tuning shared by the per-kind renderers for one frame.
struct Ux {
    screen: Rect,
    modifiers: Modifiers,
    bottom_lift: f32,
    toast_height: f32,
    toast_drag_threshold: f32,
}

pub struct OverlayView {
    now: Instant,
    bottom_bar_height: f32,
}

impl OverlayView {
    pub fn new(now: Instant) -> Self {
        Self {
            now,
            bottom_bar_height: 0.0,
        }
    }

    /// Height of the bottom toolbar; overlays that sit above it are lifted.
    pub fn bottom_bar_height(mut self, height: f32) -> Self {
        self.bottom_bar_height = height;
        self
    }

    pub fn show(self, ctx: &egui::Context, manager: &mut OverlayManager, dispatcher: &OverlayDispatcher) {
        let mut frame = manager.modifiers_at(self.now);
        if manager.animating() && frame.finished {
            manager.complete_transition();
            frame = manager.modifiers_at(self.now);
        }
        if manager.animating() {
            ctx.request_repaint();
        }

        let ux = Ux {
            screen: ctx.screen_rect(),
            modifiers: frame.modifiers,
            bottom_lift: if manager.offset_for_bottom_bar() {
                self.bottom_bar_height
            } else {
                0.0
            },
            toast_height: manager.config().toast_height,
            toast_drag_threshold: manager.config().toast_drag_threshold,
        };

        let Some(overlay) = manager.current_overlay_mut() else {
            return;
        };

        match overlay {
            OverlayType::BackForwardList(list) => draw_back_forward(ctx, &ux, list, dispatcher),
            OverlayType::FindInPage(find) => draw_find_in_page(ctx, &ux, find, dispatcher),
            OverlayType::FullScreenModal(content) => {
                draw_full_screen(ctx, &ux, content.as_mut(), dispatcher)
            }
            OverlayType::Notification(row) => draw_notification(ctx, &ux, row, dispatcher),
            OverlayType::Popover(popover) => draw_popover(ctx, &ux, popover, dispatcher),
            OverlayType::Sheet(sheet) => draw_sheet(ctx, &ux, sheet, dispatcher),
            OverlayType::Toast(toast) => draw_toast(ctx, &ux, toast, dispatcher),
        }
    }
}

// ─── Shared pieces ────────────────────────────────────────────────────────────

/// Dimmed full-screen backdrop. Returns true when it was clicked.
fn backdrop(ctx: &egui::Context, ux: &Ux, id: &str, alpha: f32) -> bool {
    egui::Area::new(Id::new(id))
        .order(Order::Middle)
        .fixed_pos(ux.screen.min)
        .show(ctx, |ui| {
            let response = ui.allocate_rect(ux.screen, Sense::click());
            let a = (alpha * ux.modifiers.opacity * 255.0).round().clamp(0.0, 255.0) as u8;
            ui.painter().rect_filled(ux.screen, 0.0, Color32::from_black_alpha(a));
            response.clicked()
        })
        .inner
}

/// Title row with a close button. Returns true when close was pressed.
fn title_row(ui: &mut egui::Ui, title: Option<&str>) -> bool {
    let mut close = false;
    ui.horizontal(|ui| {
        if let Some(title) = title {
            ui.heading(title);
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("\u{2715}").on_hover_text("Close").clicked() {
                close = true;
            }
        });
    });
    ui.add_space(4.0);
    close
}

fn header_button(ui: &mut egui::Ui, button: &OverlayHeaderButton, dispatcher: &OverlayDispatcher) -> bool {
    let pressed = ui
        .add_sized([ui.available_width(), 32.0], egui::Button::new(&button.text))
        .clicked();
    if pressed {
        dispatcher.header_action(&button.action_id);
    }
    pressed
}

// ─── Per-kind renderers ───────────────────────────────────────────────────────

fn draw_notification(
    ctx: &egui::Context,
    ux: &Ux,
    row: &NotificationRow,
    dispatcher: &OverlayDispatcher,
) {
    egui::Area::new(Id::new("overlay_notification"))
        .order(Order::Foreground)
        .anchor(
            Align2::CENTER_TOP,
            egui::vec2(0.0, NOTIFICATION_TOP_PADDING + ux.modifiers.offset),
        )
        .show(ctx, |ui| {
            ui.set_opacity(ux.modifiers.opacity);
            let inner = egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_width((ux.screen.width() - 32.0).min(420.0));
                ui.label(egui::RichText::new(&row.title).strong());
                ui.label(&row.body);
            });
            let response = ui.interact(
                inner.response.rect,
                Id::new("overlay_notification_tap"),
                Sense::click(),
            );
            if response.clicked() {
                if let Some(ref url) = row.url {
                    dispatcher.open_url(url);
                }
                dispatcher.hide_overlay();
            }
        });
}

fn draw_toast(ctx: &egui::Context, ux: &Ux, toast: &mut Toast, dispatcher: &OverlayDispatcher) {
    let y = -(TOAST_BOTTOM_PADDING + ux.bottom_lift) + ux.modifiers.offset + toast.drag_offset;
    egui::Area::new(Id::new("overlay_toast"))
        .order(Order::Foreground)
        .anchor(Align2::CENTER_BOTTOM, egui::vec2(0.0, y))
        .show(ctx, |ui| {
            ui.set_opacity(ux.modifiers.opacity * toast.drag_opacity(ux.toast_drag_threshold));
            let state = toast.content.current().clone();
            let inner = egui::Frame::none()
                .fill(TOAST_COLOR)
                .rounding(16.0)
                .inner_margin(egui::Margin::symmetric(16.0, 12.0))
                .show(ui, |ui| {
                    ui.set_min_height(ux.toast_height - 24.0);
                    ui.set_width((ux.screen.width() - 32.0).min(480.0));
                    ui.horizontal_centered(|ui| {
                        ui.label(egui::RichText::new(&state.text).color(Color32::WHITE));
                        if let (Some(text), Some(action)) = (&state.button_text, &state.action_id) {
                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                if ui.button(text).clicked() {
                                    dispatcher.toast_action(action);
                                    dispatcher.hide_overlay();
                                }
                            });
                        }
                    });
                });

            let drag = ui.interact(inner.response.rect, Id::new("overlay_toast_drag"), Sense::drag());
            if drag.dragged() {
                toast.drag_changed(toast.drag_offset + drag.drag_delta().y);
            }
            if drag.drag_stopped() {
                let velocity = ctx.input(|i| i.pointer.velocity().y);
                let predicted = toast.drag_offset + velocity * FLING_PREDICTION;
                if toast.drag_ended(toast.drag_offset, predicted, ux.toast_height) {
                    dispatcher.hide_overlay();
                }
            }
        });
}

fn draw_find_in_page(
    ctx: &egui::Context,
    ux: &Ux,
    find: &mut FindInPageState,
    dispatcher: &OverlayDispatcher,
) {
    egui::Area::new(Id::new("overlay_find_in_page"))
        .order(Order::Foreground)
        .anchor(Align2::CENTER_BOTTOM, egui::vec2(0.0, ux.modifiers.offset))
        .show(ctx, |ui| {
            ui.set_opacity(ux.modifiers.opacity);
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_width(ux.screen.width() - 16.0);
                ui.horizontal(|ui| {
                    let edit = ui.add_sized(
                        [ui.available_width() - 180.0, 24.0],
                        egui::TextEdit::singleline(&mut find.query).hint_text("Find in page"),
                    );
                    if edit.changed() {
                        find.recount();
                    }
                    if edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        find.next();
                    }

                    let color = if find.total_matches() > 0 || find.query.is_empty() {
                        ui.visuals().text_color()
                    } else {
                        Color32::from_rgb(255, 80, 80)
                    };
                    ui.colored_label(color, find.status());

                    if ui.button("\u{25B2}").clicked() {
                        find.previous();
                    }
                    if ui.button("\u{25BC}").clicked() {
                        find.next();
                    }
                    if ui.button("Done").clicked() {
                        dispatcher.hide_overlay();
                    }
                });
            });
        });
}

fn draw_back_forward(
    ctx: &egui::Context,
    ux: &Ux,
    list: &BackForwardList,
    dispatcher: &OverlayDispatcher,
) {
    egui::Area::new(Id::new("overlay_back_forward"))
        .order(Order::Foreground)
        .anchor(
            Align2::LEFT_BOTTOM,
            egui::vec2(8.0, -(8.0 + ux.bottom_lift) + ux.modifiers.offset),
        )
        .show(ctx, |ui| {
            ui.set_opacity(ux.modifiers.opacity);
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_max_width(320.0);
                let mut selected = None;
                let forward: Vec<_> = list.forward_entries().collect();
                for (index, url) in forward.into_iter().rev() {
                    if ui.selectable_label(false, truncate_str(url, 48)).clicked() {
                        selected = Some(index);
                    }
                }
                if let Some(current) = list.entries.get(list.current) {
                    let _ = ui.selectable_label(true, truncate_str(current, 48));
                }
                for (index, url) in list.back_entries() {
                    if ui.selectable_label(false, truncate_str(url, 48)).clicked() {
                        selected = Some(index);
                    }
                }
                if let Some(index) = selected {
                    dispatcher.go_to_history(index);
                    dispatcher.hide_overlay();
                }
            });
        });
}

fn draw_popover(
    ctx: &egui::Context,
    ux: &Ux,
    popover: &mut PopoverRoot,
    dispatcher: &OverlayDispatcher,
) {
    let style = &popover.style;
    if backdrop(ctx, ux, "overlay_popover_backdrop", 0.2) && !style.non_dismissible {
        dispatcher.hide_overlay();
    }

    let width = if style.expand_popover_width {
        ux.screen.width() - 32.0
    } else {
        POPOVER_WIDTH.min(ux.screen.width() - 32.0)
    };

    egui::Area::new(Id::new("overlay_popover"))
        .order(Order::Foreground)
        .anchor(Align2::CENTER_CENTER, egui::vec2(0.0, ux.modifiers.offset))
        .show(ctx, |ui| {
            ui.set_opacity(ux.modifiers.opacity);
            egui::Frame::popup(ui.style())
                .fill(style.background_color)
                .rounding(SHEET_CORNER)
                .show(ui, |ui| {
                    ui.set_width(width);
                    if let Some(ref button) = popover.header_button {
                        if header_button(ui, button, dispatcher) {
                            dispatcher.hide_overlay();
                        }
                    }
                    if style.show_title && title_row(ui, popover.content.title()) {
                        dispatcher.hide_overlay();
                    }
                    if style.embed_scroll_view {
                        egui::ScrollArea::vertical()
                            .max_height(ux.screen.height() * 0.7)
                            .show(ui, |ui| popover.content.ui(ui, dispatcher));
                    } else {
                        popover.content.ui(ui, dispatcher);
                    }
                });
        });
}

fn draw_sheet(ctx: &egui::Context, ux: &Ux, sheet: &mut SheetRoot, dispatcher: &OverlayDispatcher) {
    let style = sheet.style.clone();
    let alpha = sheet.model.backdrop_opacity;
    if backdrop(ctx, ux, "overlay_sheet_backdrop", alpha) && !style.non_dismissible {
        dispatcher.hide_overlay();
    }

    let portrait = ux.screen.width() < ux.screen.height();
    let width = if portrait {
        ux.screen.width()
    } else {
        SHEET_LANDSCAPE_WIDTH.min(ux.screen.width())
    };

    let fixed = sheet.content.is_fixed_height() || !style.embed_scroll_view;
    let height_id = Id::new("overlay_sheet_content_height");
    let content_height: f32 = ctx.data(|d| d.get_temp(height_id)).unwrap_or(0.0);
    let top = ux.screen.min.y
        + sheet
            .model
            .top_inset(ux.screen.height(), content_height, fixed, SHEET_MIN_TOP)
        + ux.modifiers.offset;
    let left = ux.screen.center().x - width / 2.0;

    let shown = egui::Area::new(Id::new("overlay_sheet"))
        .order(Order::Foreground)
        .fixed_pos(egui::pos2(left, top))
        .show(ctx, |ui| {
            ui.set_opacity(ux.modifiers.opacity);
            egui::Frame::none()
                .fill(style.background_color)
                .rounding(egui::Rounding {
                    nw: SHEET_CORNER,
                    ne: SHEET_CORNER,
                    sw: 0.0,
                    se: 0.0,
                })
                .inner_margin(egui::Margin::symmetric(12.0, 8.0))
                .show(ui, |ui| {
                    ui.set_width(width - 24.0);
                    if !fixed {
                        ui.set_min_height(ux.screen.max.y - top - 16.0);
                    }

                    // Drag handle
                    let (handle_rect, handle) =
                        ui.allocate_exact_size(egui::vec2(ui.available_width(), 18.0), Sense::drag());
                    if !fixed {
                        let pill = Rect::from_center_size(handle_rect.center(), egui::vec2(32.0, 4.0));
                        ui.painter().rect_filled(pill, 2.0, Color32::from_gray(170));
                        if handle.dragged() {
                            sheet.model.drag_changed(handle.drag_delta().y);
                        }
                        if handle.drag_stopped()
                            && sheet.model.drag_ended(false) == SheetDragOutcome::Dismissed
                        {
                            dispatcher.hide_overlay();
                        }
                    }

                    if let Some(ref button) = sheet.header_button {
                        if header_button(ui, button, dispatcher) {
                            dispatcher.hide_overlay();
                        }
                    }
                    if style.show_title && title_row(ui, sheet.content.title()) {
                        dispatcher.hide_overlay();
                    }

                    let scroll_enabled =
                        sheet.model.position == OverlaySheetPosition::Top;
                    if fixed {
                        sheet.content.ui(ui, dispatcher);
                    } else {
                        egui::ScrollArea::vertical()
                            .enable_scrolling(scroll_enabled)
                            .show(ui, |ui| sheet.content.ui(ui, dispatcher));
                    }
                })
                .response
                .rect
                .height()
        });
    ctx.data_mut(|d| d.insert_temp(height_id, shown.inner));
}

fn draw_full_screen(
    ctx: &egui::Context,
    ux: &Ux,
    content: &mut dyn OverlayContent,
    dispatcher: &OverlayDispatcher,
) {
    egui::Area::new(Id::new("overlay_full_screen"))
        .order(Order::Foreground)
        .fixed_pos(ux.screen.min + egui::vec2(0.0, ux.modifiers.offset))
        .show(ctx, |ui| {
            ui.set_opacity(ux.modifiers.opacity);
            egui::Frame::none()
                .fill(ctx.style().visuals.panel_fill)
                .inner_margin(16.0)
                .show(ui, |ui| {
                    ui.set_min_size(ux.screen.size() - egui::vec2(32.0, 32.0));
                    if title_row(ui, content.title()) {
                        dispatcher.hide_overlay();
                    }
                    egui::ScrollArea::vertical().show(ui, |ui| content.ui(ui, dispatcher));
                });
        });
}
