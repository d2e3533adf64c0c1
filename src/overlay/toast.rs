//! Toast content, progress states and drag-to-dismiss.

use std::time::{Duration, Instant};

/// What a toast shows in one of its states.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastState {
    pub text: String,
    pub button_text: Option<String>,
    /// Reported back as `HostEvent::ToastAction` when the button is pressed.
    pub action_id: Option<String>,
}

impl ToastState {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_button(mut self, text: impl Into<String>, action_id: impl Into<String>) -> Self {
        self.button_text = Some(text.into());
        self.action_id = Some(action_id.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastProgressStatus {
    InProgress,
    Success,
    Failed,
}

/// Normal/completed/failed variants of a toast and which one is current.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastContent {
    pub normal: ToastState,
    pub completed: Option<ToastState>,
    pub failed: Option<ToastState>,
    current: ToastState,
}

impl ToastContent {
    pub fn new(normal: ToastState) -> Self {
        Self {
            current: normal.clone(),
            normal,
            completed: None,
            failed: None,
        }
    }

    pub fn current(&self) -> &ToastState {
        &self.current
    }

    /// Switch to the state for `status`. Missing completed/failed variants
    /// leave the current state as is.
    pub fn update_status(&mut self, status: ToastProgressStatus) {
        match status {
            ToastProgressStatus::InProgress => self.current = self.normal.clone(),
            ToastProgressStatus::Success => {
                if let Some(ref completed) = self.completed {
                    self.current = completed.clone();
                }
            }
            ToastProgressStatus::Failed => {
                if let Some(ref failed) = self.failed {
                    self.current = failed.clone();
                }
            }
        }
    }
}

/// A toast overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub content: ToastContent,
    /// Overrides the configured display time.
    pub display_time: Option<Duration>,
    pub auto_dismiss: bool,
    /// Present when the toast tracks a background operation.
    progress: Option<ToastProgressStatus>,
    /// When progress last left `InProgress`.
    settled_at: Option<Instant>,
    /// Current vertical drag translation.
    pub drag_offset: f32,
    dragging: bool,
}

impl Toast {
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_content(ToastContent::new(ToastState::text(text)))
    }

    pub fn with_content(content: ToastContent) -> Self {
        Self {
            content,
            display_time: None,
            auto_dismiss: true,
            progress: None,
            settled_at: None,
            drag_offset: 0.0,
            dragging: false,
        }
    }

    pub fn with_button(mut self, text: impl Into<String>, action_id: impl Into<String>) -> Self {
        let state = self.content.normal.clone().with_button(text, action_id);
        self.content = ToastContent {
            completed: self.content.completed.take(),
            failed: self.content.failed.take(),
            ..ToastContent::new(state)
        };
        self
    }

    pub fn with_display_time(mut self, display_time: Duration) -> Self {
        self.display_time = Some(display_time);
        self
    }

    pub fn persistent(mut self) -> Self {
        self.auto_dismiss = false;
        self
    }

    /// Track a background operation: the toast stays up while in progress.
    pub fn with_progress(mut self, completed: ToastState, failed: ToastState) -> Self {
        self.content.completed = Some(completed);
        self.content.failed = Some(failed);
        self.progress = Some(ToastProgressStatus::InProgress);
        self
    }

    pub fn progress(&self) -> Option<ToastProgressStatus> {
        self.progress
    }

    pub fn set_progress(&mut self, status: ToastProgressStatus, now: Instant) {
        self.progress = Some(status);
        self.content.update_status(status);
        self.settled_at = match status {
            ToastProgressStatus::InProgress => None,
            _ => Some(now),
        };
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// When the toast should dismiss itself, given when it was shown.
    ///
    /// `None` for persistent toasts, toasts still in progress, and while the
    /// user is dragging.
    pub fn dismiss_deadline(&self, shown_at: Instant, default_display: Duration) -> Option<Instant> {
        if !self.auto_dismiss || self.dragging {
            return None;
        }
        if self.progress == Some(ToastProgressStatus::InProgress) {
            return None;
        }
        let since = self.settled_at.unwrap_or(shown_at).max(shown_at);
        Some(since + self.display_time.unwrap_or(default_display))
    }

    pub fn drag_changed(&mut self, translation: f32) {
        self.dragging = true;
        self.drag_offset = translation;
    }

    /// Decide whether a released drag dismisses the toast.
    ///
    /// A fling whose predicted end passes 1.5 toast heights, or a drag longer
    /// than one toast height, dismisses. Otherwise the toast snaps back.
    pub fn drag_ended(&mut self, translation: f32, predicted_end: f32, toast_height: f32) -> bool {
        self.dragging = false;
        if predicted_end.abs() > toast_height * 1.5 {
            self.drag_offset = predicted_end;
            true
        } else if translation.abs() > toast_height {
            true
        } else {
            self.drag_offset = 0.0;
            false
        }
    }

    /// Opacity while dragged: opaque inside `threshold`, fading to zero over
    /// three more thresholds.
    pub fn drag_opacity(&self, threshold: f32) -> f32 {
        let delta = self.drag_offset.abs() - threshold;
        if delta > 0.0 {
            (1.0 - delta / (threshold * 3.0)).max(0.0)
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_switching() {
        let mut content = ToastContent::new(ToastState::text("Saving"));
        content.completed = Some(ToastState::text("Saved"));
        content.update_status(ToastProgressStatus::Success);
        assert_eq!(content.current().text, "Saved");
        // No failed variant: stays on the current state
        content.update_status(ToastProgressStatus::Failed);
        assert_eq!(content.current().text, "Saved");
        content.update_status(ToastProgressStatus::InProgress);
        assert_eq!(content.current().text, "Saving");
    }

    #[test]
    fn test_deadline_plain() {
        let toast = Toast::new("Copied");
        let shown = Instant::now();
        let deadline = toast
            .dismiss_deadline(shown, Duration::from_millis(4500))
            .unwrap();
        assert_eq!(deadline, shown + Duration::from_millis(4500));
        assert!(Toast::new("x")
            .persistent()
            .dismiss_deadline(shown, Duration::from_secs(1))
            .is_none());
    }

    #[test]
    fn test_deadline_waits_for_progress() {
        let shown = Instant::now();
        let mut toast = Toast::new("Downloading")
            .with_progress(ToastState::text("Downloaded"), ToastState::text("Failed"));
        assert!(toast.dismiss_deadline(shown, Duration::from_secs(2)).is_none());

        let later = shown + Duration::from_secs(10);
        toast.set_progress(ToastProgressStatus::Success, later);
        assert_eq!(toast.content.current().text, "Downloaded");
        assert_eq!(
            toast.dismiss_deadline(shown, Duration::from_secs(2)),
            Some(later + Duration::from_secs(2))
        );
    }

    #[test]
    fn test_drag_dismissal() {
        let mut toast = Toast::new("Hi");
        toast.drag_changed(20.0);
        assert!(toast.is_dragging());
        assert!(toast.dismiss_deadline(Instant::now(), Duration::from_secs(1)).is_none());
        assert!(!toast.drag_ended(20.0, 30.0, 53.0));
        assert!(toast.drag_offset.abs() < 1e-6);

        toast.drag_changed(60.0);
        assert!(toast.drag_ended(60.0, 60.0, 53.0));

        let mut flung = Toast::new("Hi");
        flung.drag_changed(10.0);
        assert!(flung.drag_ended(10.0, 100.0, 53.0));
        assert!((flung.drag_offset - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_drag_opacity() {
        let mut toast = Toast::new("Hi");
        toast.drag_offset = 10.0;
        assert!((toast.drag_opacity(15.0) - 1.0).abs() < 1e-6);
        toast.drag_offset = -37.5;
        assert!((toast.drag_opacity(15.0) - 0.5).abs() < 1e-6);
        toast.drag_offset = 200.0;
        assert!(toast.drag_opacity(15.0).abs() < 1e-6);
    }

    #[test]
    fn test_with_button() {
        let toast = Toast::new("Tab closed").with_button("Undo", "undo-close");
        let state = toast.content.current();
        assert_eq!(state.button_text.as_deref(), Some("Undo"));
        assert_eq!(state.action_id.as_deref(), Some("undo-close"));
    }
}
