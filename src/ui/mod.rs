//! Small egui text helpers shared by the page viewport.

use eframe::egui;

/// Background used for find-in-page matches.
pub const HIGHLIGHT: egui::Color32 = egui::Color32::from_rgb(255, 255, 100);

/// Check if `text` contains the highlight query (case-insensitive).
pub fn text_matches(text: &str, highlight: Option<&str>) -> bool {
    match highlight {
        Some(q) if !q.is_empty() => text.to_lowercase().contains(&q.to_lowercase()),
        _ => false,
    }
}

/// Apply a yellow highlight background to `rt` if it matches the search query.
pub fn maybe_highlight(rt: egui::RichText, text: &str, highlight: Option<&str>) -> egui::RichText {
    if text_matches(text, highlight) {
        rt.background_color(HIGHLIGHT)
    } else {
        rt
    }
}
