//! Navigation methods for `ChromeApp`.
//!
//! History management (`go_back`, `go_forward`, `navigate`, `go_to_index`)
//! and the handling of events reported by the overlay host. Pages come from
//! a small built-in catalog; nothing is fetched.

use overlay_chrome::overlay::host::normalize_url;
use overlay_chrome::overlay::{NotificationRow, Toast};
use overlay_chrome::{HostEvent, OverlayType};

use super::ChromeApp;

pub const HOME_URL: &str = "https://neeva.com/";

const ACTIVITY_LIMIT: usize = 6;

/// A displayed page.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub url: String,
    pub title: String,
    pub paragraphs: Vec<String>,
}

impl Page {
    pub fn for_url(url: &str) -> Self {
        let (title, paragraphs): (&str, &[&str]) = match url {
            HOME_URL => (
                "Neeva",
                &[
                    "Search without ads and without tracking.",
                    "Use the toolbar below to try each overlay: find in page, the menu popover, \
                     the share sheet, toasts, notifications, the back/forward list and the \
                     settings modal.",
                    "Only one overlay is visible at a time. Showing a new one first retires the \
                     current one, then slides the new one in.",
                ],
            ),
            "https://example.com/" => (
                "Example Domain",
                &[
                    "This domain is for use in illustrative examples in documents.",
                    "You may use this domain in literature without prior coordination or \
                     asking for permission.",
                ],
            ),
            _ => (
                "Untitled",
                &["This page has no built-in content. Try Find in page anyway: the search runs over this text."],
            ),
        };
        Self {
            url: url.to_string(),
            title: title.to_string(),
            paragraphs: paragraphs.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Plain text the find-in-page bar searches.
    pub fn text(&self) -> String {
        let mut text = self.title.clone();
        for p in &self.paragraphs {
            text.push('\n');
            text.push_str(p);
        }
        text
    }
}

impl ChromeApp {
    /// Navigate one step back in history.
    pub fn go_back(&mut self) {
        if self.history_idx > 0 {
            self.go_to_index(self.history_idx - 1);
        }
    }

    /// Navigate one step forward in history.
    pub fn go_forward(&mut self) {
        if self.history_idx + 1 < self.history.len() {
            self.go_to_index(self.history_idx + 1);
        }
    }

    pub fn go_to_index(&mut self, index: usize) {
        if let Some(url) = self.history.get(index) {
            self.history_idx = index;
            self.url_input = url.clone();
            self.navigate_no_history();
        }
    }

    /// Push the address bar URL to history and load it.
    pub fn navigate(&mut self) {
        let Some(url) = normalize_url(&self.url_input) else {
            log::warn!("navigate: invalid address {:?}", self.url_input);
            let _ = self
                .overlays
                .show(OverlayType::Toast(Toast::new("That address doesn't look right")));
            return;
        };
        self.url_input = url.clone();
        if self.history.is_empty() || self.history[self.history_idx] != url {
            // Truncate forward history before pushing
            self.history.truncate(self.history_idx + 1);
            self.history.push(url);
            self.history_idx = self.history.len() - 1;
        }
        self.navigate_no_history();
    }

    /// Load the address bar URL without touching history.
    pub fn navigate_no_history(&mut self) {
        log::info!("navigate: {}", self.url_input);
        self.page = Page::for_url(&self.url_input);
    }

    pub fn handle_event(&mut self, event: HostEvent) {
        log::debug!("host event: {:?}", event);
        match event {
            HostEvent::Dismissed(kind) => self.record(format!("{:?} dismissed", kind)),
            HostEvent::OpenUrl(url) => {
                self.url_input = url;
                self.navigate();
            }
            HostEvent::GoToHistory(index) => self.go_to_index(index),
            HostEvent::ToastAction(id) => {
                self.record(format!("toast action: {}", id));
                if id == "undo-copy" {
                    let _ = self.overlays.show(OverlayType::Notification(
                        NotificationRow::new("Clipboard", "Copy undone"),
                    ));
                }
            }
            HostEvent::HeaderAction(id) => self.record(format!("header action: {}", id)),
        }
    }

    fn record(&mut self, line: String) {
        self.activity.push(line);
        if self.activity.len() > ACTIVITY_LIMIT {
            self.activity.remove(0);
        }
    }
}
