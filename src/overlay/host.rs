//! `OverlayHost`: owns an [`OverlayManager`] for one window.
//!
//! Content never holds the manager. It gets an [`OverlayDispatcher`] and
//! sends requests (hide me, open this URL, the toast button was pressed);
//! the host drains them once per frame, the way the browser drains its page
//! fetch channel, and turns the ones the app cares about into [`HostEvent`]s.

use std::sync::mpsc;
use std::time::Instant;

use url::Url;

use crate::config::OverlayConfig;

use super::manager::OverlayManager;
use super::toast::ToastProgressStatus;
use super::transition::{Transition, TransitionPhase};
use super::view::OverlayView;
use super::{OverlayKind, OverlayType};

/// Requests sent from overlay content (or any thread) to the host.
#[derive(Debug)]
pub enum OverlayRequest {
    Hide,
    Show(OverlayType),
    Enqueue(OverlayType),
    OpenUrl(String),
    GoToHistory(usize),
    ToastAction(String),
    ToastProgress(ToastProgressStatus),
    HeaderAction(String),
}

/// What the app hears back from the overlay layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// An overlay of this kind finished retiring.
    Dismissed(OverlayKind),
    OpenUrl(String),
    /// Jump to this index of the back/forward list.
    GoToHistory(usize),
    ToastAction(String),
    HeaderAction(String),
}

/// Cloneable request handle handed to overlay content.
#[derive(Debug, Clone)]
pub struct OverlayDispatcher {
    tx: mpsc::Sender<OverlayRequest>,
}

impl OverlayDispatcher {
    /// Ask the host to retire whatever overlay is current.
    pub fn hide_overlay(&self) {
        self.send(OverlayRequest::Hide);
    }

    pub fn show(&self, overlay: OverlayType) {
        self.send(OverlayRequest::Show(overlay));
    }

    pub fn enqueue(&self, overlay: OverlayType) {
        self.send(OverlayRequest::Enqueue(overlay));
    }

    /// Open a link. Bare hosts get `https://`; unparsable input is dropped.
    pub fn open_url(&self, url: &str) {
        match normalize_url(url) {
            Some(url) => self.send(OverlayRequest::OpenUrl(url)),
            None => log::warn!("overlay: ignoring invalid URL {:?}", url),
        }
    }

    pub fn go_to_history(&self, index: usize) {
        self.send(OverlayRequest::GoToHistory(index));
    }

    pub fn toast_action(&self, action_id: &str) {
        self.send(OverlayRequest::ToastAction(action_id.to_string()));
    }

    /// Update the progress of the current toast. Safe from worker threads.
    pub fn toast_progress(&self, status: ToastProgressStatus) {
        self.send(OverlayRequest::ToastProgress(status));
    }

    pub fn header_action(&self, action_id: &str) {
        self.send(OverlayRequest::HeaderAction(action_id.to_string()));
    }

    pub fn send(&self, request: OverlayRequest) {
        if self.tx.send(request).is_err() {
            log::debug!("overlay: host dropped, request discarded");
        }
    }
}

/// Normalize user or content supplied URLs.
pub fn normalize_url(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    let candidate = if input.contains("://") {
        input.to_string()
    } else {
        format!("https://{}", input)
    };
    Url::parse(&candidate).ok().map(String::from)
}

pub struct OverlayHost {
    manager: OverlayManager,
    tx: mpsc::Sender<OverlayRequest>,
    rx: mpsc::Receiver<OverlayRequest>,
    bottom_bar_height: f32,
}

impl Default for OverlayHost {
    fn default() -> Self {
        Self::new(OverlayConfig::default())
    }
}

impl OverlayHost {
    pub fn new(config: OverlayConfig) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            manager: OverlayManager::new(config),
            tx,
            rx,
            bottom_bar_height: 0.0,
        }
    }

    pub fn with_bottom_bar_height(mut self, height: f32) -> Self {
        self.bottom_bar_height = height;
        self
    }

    pub fn manager(&self) -> &OverlayManager {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut OverlayManager {
        &mut self.manager
    }

    pub fn dispatcher(&self) -> OverlayDispatcher {
        OverlayDispatcher {
            tx: self.tx.clone(),
        }
    }

    pub fn show(&mut self, overlay: OverlayType) -> Transition {
        self.manager.show(overlay, true)
    }

    pub fn enqueue(&mut self, overlay: OverlayType) -> Transition {
        self.manager.enqueue(overlay, true)
    }

    /// Dismiss the current overlay without a reference to the manager.
    pub fn hide(&mut self) -> Transition {
        self.manager.hide_current_overlay(true)
    }

    /// Per-frame entry point: handle requests, draw, report events.
    pub fn update(&mut self, ctx: &egui::Context) -> Vec<HostEvent> {
        let now = Instant::now();
        let mut events = self.process(now);

        let dispatcher = self.dispatcher();
        OverlayView::new(now)
            .bottom_bar_height(self.bottom_bar_height)
            .show(ctx, &mut self.manager, &dispatcher);

        // Requests raised while drawing take effect this frame.
        events.extend(self.process(Instant::now()));

        if self.manager.animating() {
            ctx.request_repaint();
        } else if let Some(deadline) = self.toast_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
        events
    }

    /// Drain pending requests, expire toasts and report dismissals.
    pub fn process(&mut self, now: Instant) -> Vec<HostEvent> {
        let mut events = Vec::new();

        while let Ok(request) = self.rx.try_recv() {
            match request {
                OverlayRequest::Hide => {
                    let _ = self.manager.hide_current_overlay(true);
                }
                OverlayRequest::Show(overlay) => {
                    let _ = self.manager.show(overlay, true);
                }
                OverlayRequest::Enqueue(overlay) => {
                    let _ = self.manager.enqueue(overlay, true);
                }
                OverlayRequest::OpenUrl(url) => events.push(HostEvent::OpenUrl(url)),
                OverlayRequest::GoToHistory(index) => events.push(HostEvent::GoToHistory(index)),
                OverlayRequest::ToastAction(id) => events.push(HostEvent::ToastAction(id)),
                OverlayRequest::HeaderAction(id) => events.push(HostEvent::HeaderAction(id)),
                OverlayRequest::ToastProgress(status) => {
                    if let Some(OverlayType::Toast(toast)) = self.manager.current_overlay_mut() {
                        toast.set_progress(status, now);
                    }
                }
            }
        }

        if let Some(deadline) = self.toast_deadline() {
            if now >= deadline && self.manager.phase() != TransitionPhase::Hiding {
                log::debug!("overlay: toast display time elapsed");
                let _ = self.manager.hide_current_overlay(true);
            }
        }

        events.extend(
            self.manager
                .take_retired()
                .into_iter()
                .map(HostEvent::Dismissed),
        );
        events
    }

    fn toast_deadline(&self) -> Option<Instant> {
        let shown_at = self.manager.shown_at()?;
        match self.manager.current_overlay()? {
            OverlayType::Toast(toast) => {
                toast.dismiss_deadline(shown_at, self.manager.config().toast_display_time())
            }
            _ => None,
        }
    }
}
