//! `OverlayManager`: the single authority for what overlay is visible.
//!
//! The manager holds the current overlay, the published render modifiers
//! (`offset`, `opacity`) and at most one pending transition. A transition is
//! finished by [`OverlayManager::complete_transition`], which the view calls
//! once the entrance/exit tween has run its course.
//!
//! State machine:
//!
//! ```text
//!   Idle ──show──▶ Showing ──complete──▶ Idle
//!   Idle ──hide──▶ Hiding  ──complete──▶ Idle (overlay removed)
//!   show while an overlay is current = Hiding, then Showing
//! ```
//!
//! A newer request replaces a pending transition outright; the replaced
//! handle resolves as [`TransitionOutcome::Superseded`](super::TransitionOutcome).

use std::collections::VecDeque;
use std::time::Instant;

use crate::config::OverlayConfig;

use super::animation::{Frame, Modifiers, Tween};
use super::transition::{Completion, Transition, TransitionPhase};
use super::{OverlayContent, OverlayKind, OverlayPriority, OverlayType};

/// Options for [`OverlayManager::hide_current_overlay_with`].
#[derive(Debug, Clone, PartialEq)]
pub struct HideOptions {
    pub animate: bool,
    /// Only hide when the current overlay has one of these priorities.
    pub priorities: Option<Vec<OverlayPriority>>,
    /// Present the next queued overlay once the hide completes.
    pub show_next: bool,
}

impl Default for HideOptions {
    fn default() -> Self {
        Self {
            animate: true,
            priorities: None,
            show_next: true,
        }
    }
}

impl HideOptions {
    pub fn animated(animate: bool) -> Self {
        Self {
            animate,
            ..Self::default()
        }
    }

    pub fn of_priorities(mut self, priorities: &[OverlayPriority]) -> Self {
        self.priorities = Some(priorities.to_vec());
        self
    }

    pub fn without_next(mut self) -> Self {
        self.show_next = false;
        self
    }
}

/// A show request waiting to be installed.
struct Request {
    overlay: OverlayType,
    animate: bool,
    completion: Completion,
}

/// What runs once a hide has removed the current overlay.
enum AfterHide {
    Nothing,
    Present(Request),
    ShowNext,
}

struct Pending {
    phase: TransitionPhase,
    tween: Tween,
    /// `None` for the internal hide issued by `show`.
    completion: Option<Completion>,
    then: AfterHide,
}

impl Pending {
    fn supersede(self) {
        if let Some(completion) = self.completion {
            completion.supersede();
        }
        if let AfterHide::Present(request) = self.then {
            request.completion.supersede();
        }
    }
}

pub struct OverlayManager {
    current: Option<OverlayType>,
    animating: bool,
    offset: f32,
    opacity: f32,
    /// Lift the overlay above the bottom toolbar.
    offset_for_bottom_bar: bool,
    /// Hide the bottom toolbar while the overlay is up.
    hide_bottom_bar: bool,
    pending: Option<Pending>,
    queue: VecDeque<Request>,
    shown_at: Option<Instant>,
    /// Kinds removed since the last `take_retired`, oldest first.
    retired: Vec<OverlayKind>,
    config: OverlayConfig,
}

impl Default for OverlayManager {
    fn default() -> Self {
        Self::new(OverlayConfig::default())
    }
}

impl OverlayManager {
    pub fn new(config: OverlayConfig) -> Self {
        Self {
            current: None,
            animating: false,
            offset: 0.0,
            opacity: 1.0,
            offset_for_bottom_bar: false,
            hide_bottom_bar: false,
            pending: None,
            queue: VecDeque::new(),
            shown_at: None,
            retired: Vec::new(),
            config,
        }
    }

    // ─── Requests ────────────────────────────────────────────────────────────

    /// Retire the current overlay, then install `overlay`.
    ///
    /// The returned handle resolves when the new overlay is fully shown. With
    /// `animate == false` and nothing animating, that happens before this
    /// returns.
    pub fn show(&mut self, overlay: OverlayType, animate: bool) -> Transition {
        log::debug!("overlay: show {:?} (animate: {})", overlay.kind(), animate);
        let (handle, completion) = Transition::pending();
        let request = Request {
            overlay,
            animate,
            completion,
        };
        self.retire(animate, None, None, AfterHide::Present(request));
        handle
    }

    /// Present a full-screen modal with the standard animation.
    pub fn present_full_screen_modal(&mut self, content: impl OverlayContent + 'static) -> Transition {
        self.show(OverlayType::FullScreenModal(Box::new(content)), true)
    }

    /// Show `overlay` once the surface is free.
    ///
    /// Presents immediately when nothing is current. Otherwise the request
    /// waits until a hide with `show_next` retires the current overlay.
    pub fn enqueue(&mut self, overlay: OverlayType, animate: bool) -> Transition {
        let (handle, completion) = Transition::pending();
        let request = Request {
            overlay,
            animate,
            completion,
        };
        if self.current.is_none() {
            self.present(request);
        } else {
            log::debug!(
                "overlay: queued {:?} behind {:?}",
                request.overlay.kind(),
                self.current_kind()
            );
            self.queue.push_back(request);
        }
        handle
    }

    /// Drop every queued overlay; their handles resolve as superseded.
    pub fn clear_queue(&mut self) {
        for request in self.queue.drain(..) {
            request.completion.supersede();
        }
    }

    pub fn hide_current_overlay(&mut self, animate: bool) -> Transition {
        self.hide_current_overlay_with(HideOptions::animated(animate))
    }

    pub fn hide_current_overlay_with(&mut self, options: HideOptions) -> Transition {
        let (handle, completion) = Transition::pending();
        let then = if options.show_next {
            AfterHide::ShowNext
        } else {
            AfterHide::Nothing
        };
        self.retire(
            options.animate,
            options.priorities.as_deref(),
            Some(completion),
            then,
        );
        handle
    }

    /// Completion hook: finish the pending transition.
    ///
    /// Called by the view when the tween ends. Returns `false` when nothing
    /// was pending.
    pub fn complete_transition(&mut self) -> bool {
        let Some(pending) = self.pending.take() else {
            return false;
        };
        self.animating = false;

        match pending.phase {
            TransitionPhase::Hiding => {
                log::trace!("overlay: hide complete");
                self.remove_current();
                if let Some(completion) = pending.completion {
                    completion.complete();
                }
                self.run_after_hide(pending.then);
            }
            _ => {
                log::trace!("overlay: show complete");
                if let Some(completion) = pending.completion {
                    completion.complete();
                }
            }
        }
        true
    }

    // ─── Queries ─────────────────────────────────────────────────────────────

    pub fn current_overlay(&self) -> Option<&OverlayType> {
        self.current.as_ref()
    }

    /// Mutable access to the current payload (find-in-page query, sheet
    /// position, toast drag). Animation state is not reachable from here.
    pub fn current_overlay_mut(&mut self) -> Option<&mut OverlayType> {
        self.current.as_mut()
    }

    pub fn current_kind(&self) -> Option<OverlayKind> {
        self.current.as_ref().map(OverlayType::kind)
    }

    pub fn is_showing(&self, kind: OverlayKind) -> bool {
        self.current_kind() == Some(kind)
    }

    pub fn animating(&self) -> bool {
        self.animating
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn offset_for_bottom_bar(&self) -> bool {
        self.offset_for_bottom_bar
    }

    pub fn hide_bottom_bar(&self) -> bool {
        self.hide_bottom_bar
    }

    pub fn phase(&self) -> TransitionPhase {
        self.pending
            .as_ref()
            .map_or(TransitionPhase::Idle, |p| p.phase)
    }

    pub fn queued_len(&self) -> usize {
        self.queue.len()
    }

    /// When the current overlay was installed.
    pub fn shown_at(&self) -> Option<Instant> {
        self.shown_at
    }

    /// Drain the kinds of overlays removed since the last call.
    ///
    /// Every removal is reported, including one immediately followed by an
    /// overlay of the same kind.
    pub fn take_retired(&mut self) -> Vec<OverlayKind> {
        std::mem::take(&mut self.retired)
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Modifiers to draw at `now`. Outside a transition this is the
    /// published resting state.
    pub fn modifiers_at(&self, now: Instant) -> Frame {
        match self.pending {
            Some(ref pending) => pending.tween.sample(now),
            None => Frame {
                modifiers: self.published(),
                progress: 1.0,
                finished: true,
            },
        }
    }

    // ─── Internals ───────────────────────────────────────────────────────────

    fn published(&self) -> Modifiers {
        Modifiers {
            offset: self.offset,
            opacity: self.opacity,
        }
    }

    /// Hide the current overlay and run `then` once it is gone.
    fn retire(
        &mut self,
        animate: bool,
        priorities: Option<&[OverlayPriority]>,
        completion: Option<Completion>,
        then: AfterHide,
    ) {
        let Some(kind) = self.current_kind() else {
            if let Some(completion) = completion {
                completion.complete();
            }
            // ShowNext only follows an actual hide.
            if let AfterHide::Present(request) = then {
                self.present(request);
            }
            return;
        };

        if let Some(priorities) = priorities {
            if !priorities.contains(&kind.priority()) {
                log::trace!("overlay: {:?} not in hide filter {:?}", kind, priorities);
                if let Some(completion) = completion {
                    completion.complete();
                }
                return;
            }
        }

        let now = Instant::now();
        let from = self.modifiers_at(now).modifiers;
        if let Some(previous) = self.pending.take() {
            log::debug!("overlay: {:?} transition superseded", previous.phase);
            previous.supersede();
        }

        self.offset_for_bottom_bar = false;
        self.hide_bottom_bar = false;

        if animate {
            let to = Modifiers::slid(self.exit_offset(kind));
            self.offset = to.offset;
            self.opacity = to.opacity;
            self.animating = true;
            self.pending = Some(Pending {
                phase: TransitionPhase::Hiding,
                tween: Tween::starting_at(from, to, self.config.animation_duration(), now),
                completion,
                then,
            });
            log::debug!("overlay: hiding {:?}", kind);
        } else {
            self.animating = false;
            self.remove_current();
            if let Some(completion) = completion {
                completion.complete();
            }
            self.run_after_hide(then);
        }
    }

    fn run_after_hide(&mut self, then: AfterHide) {
        match then {
            AfterHide::Nothing => {}
            AfterHide::Present(request) => self.present(request),
            AfterHide::ShowNext => {
                if let Some(request) = self.queue.pop_front() {
                    self.present(request);
                }
            }
        }
    }

    /// Install a request on a free surface.
    fn present(&mut self, request: Request) {
        debug_assert!(self.current.is_none() && self.pending.is_none());
        let Request {
            mut overlay,
            animate,
            completion,
        } = request;
        let kind = overlay.kind();

        self.offset_for_bottom_bar =
            matches!(kind, OverlayKind::BackForwardList | OverlayKind::Toast);
        self.hide_bottom_bar = kind == OverlayKind::FindInPage;

        if let OverlayType::Sheet(ref mut sheet) = overlay {
            sheet.model.configure(&self.config);
            sheet.model.show(sheet.initial_position);
        }

        let now = Instant::now();
        self.current = Some(overlay);
        self.shown_at = Some(now);

        if animate {
            let from = Modifiers::slid(self.entrance_offset(kind));
            self.offset = 0.0;
            self.opacity = 1.0;
            self.animating = true;
            self.pending = Some(Pending {
                phase: TransitionPhase::Showing,
                tween: Tween::starting_at(
                    from,
                    Modifiers::IDENTITY,
                    self.config.animation_duration(),
                    now,
                ),
                completion: Some(completion),
                then: AfterHide::Nothing,
            });
            log::debug!("overlay: showing {:?}", kind);
        } else {
            log::debug!("overlay: installed {:?}", kind);
            completion.complete();
        }
    }

    fn remove_current(&mut self) {
        if let Some(overlay) = self.current.take() {
            self.retired.push(overlay.kind());
        }
        self.shown_at = None;
        self.offset_for_bottom_bar = false;
        self.hide_bottom_bar = false;
        self.reset_ui_modifiers();
    }

    fn reset_ui_modifiers(&mut self) {
        self.offset = 0.0;
        self.opacity = 1.0;
    }

    /// Where an entering overlay starts. Zero means a plain fade.
    fn entrance_offset(&self, kind: OverlayKind) -> f32 {
        match kind {
            OverlayKind::BackForwardList => self.config.back_forward_offset,
            OverlayKind::Notification => -self.config.toast_height,
            OverlayKind::Toast => self.config.toast_height,
            _ => 0.0,
        }
    }

    /// Where a leaving overlay ends up.
    fn exit_offset(&self, kind: OverlayKind) -> f32 {
        match kind {
            OverlayKind::FullScreenModal => self.config.full_screen_offset,
            OverlayKind::Notification => -self.config.toast_height,
            OverlayKind::Toast => self.config.toast_height,
            _ => 0.0,
        }
    }
}

impl Drop for OverlayManager {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.supersede();
        }
        self.clear_queue();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::{
        FindInPageState, NotificationRow, OverlayDispatcher, OverlayStyle, PopoverRoot,
        SheetRoot, Toast, TransitionOutcome,
    };
    use std::time::Duration;

    struct Blank;

    impl OverlayContent for Blank {
        fn ui(&mut self, _ui: &mut egui::Ui, _dispatcher: &OverlayDispatcher) {}
    }

    fn toast() -> OverlayType {
        OverlayType::Toast(Toast::new("Copied link"))
    }

    fn notification() -> OverlayType {
        OverlayType::Notification(NotificationRow::new("Update", "A new version is ready"))
    }

    fn sheet() -> OverlayType {
        OverlayType::Sheet(SheetRoot::new(OverlayStyle::WITH_TITLE, Blank))
    }

    fn popover() -> OverlayType {
        OverlayType::Popover(PopoverRoot::new(OverlayStyle::GRID, Blank))
    }

    fn assert_idle_invariant(manager: &OverlayManager) {
        if manager.current_overlay().is_none() {
            assert!(manager.offset().abs() < 1e-6);
            assert!((manager.opacity() - 1.0).abs() < 1e-6);
            assert!(!manager.animating());
            assert_eq!(manager.phase(), TransitionPhase::Idle);
        }
    }

    #[test]
    fn test_new_manager_is_idle() {
        let manager = OverlayManager::default();
        assert!(manager.current_overlay().is_none());
        assert_idle_invariant(&manager);
        assert_eq!(manager.queued_len(), 0);
    }

    #[test]
    fn test_hide_without_overlay_is_immediate() {
        let mut manager = OverlayManager::default();
        let mut hide = manager.hide_current_overlay(true);
        assert!(hide.is_completed());
        assert!(!manager.animating());
        assert!(!manager.complete_transition());
        assert_idle_invariant(&manager);
    }

    #[test]
    fn test_animated_toast_show() {
        let mut manager = OverlayManager::default();
        let mut shown = manager.show(toast(), true);

        assert!(manager.animating());
        assert_eq!(manager.phase(), TransitionPhase::Showing);
        assert!(manager.offset_for_bottom_bar());
        assert!(!shown.is_finished());

        assert!(manager.complete_transition());
        assert!(shown.is_completed());
        assert!(manager.is_showing(OverlayKind::Toast));
        assert!(manager.offset().abs() < 1e-6);
        assert!((manager.opacity() - 1.0).abs() < 1e-6);
        assert!(!manager.animating());
    }

    #[test]
    fn test_toast_slides_up_from_below() {
        let mut manager = OverlayManager::default();
        let _ = manager.show(toast(), true);
        let start = manager.shown_at().unwrap();
        let frame = manager.modifiers_at(start);
        assert!((frame.modifiers.offset - 53.0).abs() < 1e-4);
        assert!(frame.modifiers.opacity.abs() < 1e-4);
        let end = manager.modifiers_at(start + Duration::from_millis(200));
        assert!(end.finished);
        assert_eq!(end.modifiers, Modifiers::IDENTITY);
    }

    #[test]
    fn test_notification_slides_down_from_above() {
        let mut manager = OverlayManager::default();
        let _ = manager.show(notification(), true);
        let frame = manager.modifiers_at(manager.shown_at().unwrap());
        assert!((frame.modifiers.offset + 53.0).abs() < 1e-4);
    }

    #[test]
    fn test_other_kinds_fade_without_offset() {
        let mut manager = OverlayManager::default();
        let _ = manager.show(popover(), true);
        let frame = manager.modifiers_at(manager.shown_at().unwrap());
        assert!(frame.modifiers.offset.abs() < 1e-6);
        assert!(frame.modifiers.opacity.abs() < 1e-6);
    }

    #[test]
    fn test_non_animated_show_is_synchronous() {
        let mut manager = OverlayManager::default();
        let mut shown = manager.show(
            OverlayType::FindInPage(FindInPageState::new("page text")),
            false,
        );
        assert!(shown.is_completed());
        assert!(manager.is_showing(OverlayKind::FindInPage));
        assert!(!manager.animating());
        assert!(manager.hide_bottom_bar());
        assert!(manager.offset().abs() < 1e-6);
        assert!((manager.opacity() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_non_animated_replace_is_synchronous() {
        let mut manager = OverlayManager::default();
        let _ = manager.show(sheet(), false);
        let mut shown = manager.show(popover(), false);
        assert!(shown.is_completed());
        assert!(manager.is_showing(OverlayKind::Popover));
        assert!(!manager.animating());
    }

    #[test]
    fn test_two_shows_end_with_second() {
        let mut manager = OverlayManager::default();
        let mut first = manager.show(sheet(), true);
        let mut second = manager.show(popover(), true);

        // First show was replaced before its animation finished.
        assert_eq!(first.try_outcome(), Some(TransitionOutcome::Superseded));
        assert_eq!(manager.phase(), TransitionPhase::Hiding);
        assert!(manager.is_showing(OverlayKind::Sheet));

        assert!(manager.complete_transition());
        assert!(manager.is_showing(OverlayKind::Popover));
        assert_eq!(manager.phase(), TransitionPhase::Showing);

        assert!(manager.complete_transition());
        assert!(second.is_completed());
        assert!(manager.is_showing(OverlayKind::Popover));
        assert_eq!(manager.phase(), TransitionPhase::Idle);
    }

    #[test]
    fn test_two_shows_after_first_completes() {
        let mut manager = OverlayManager::default();
        let mut first = manager.show(sheet(), true);
        manager.complete_transition();
        assert!(first.is_completed());

        let _ = manager.show(toast(), true);
        while manager.complete_transition() {}
        assert!(manager.is_showing(OverlayKind::Toast));
        assert_idle_invariant(&manager);
    }

    #[test]
    fn test_notification_scenario() {
        let mut manager = OverlayManager::default();
        assert_eq!(manager.phase(), TransitionPhase::Idle);

        let _ = manager.show(notification(), true);
        assert!(manager.animating());
        manager.complete_transition();
        assert!(manager.is_showing(OverlayKind::Notification));
        assert!(!manager.animating());

        let mut hidden = manager.hide_current_overlay(true);
        assert_eq!(manager.phase(), TransitionPhase::Hiding);
        assert!(manager.animating());
        // Exit target published while the overlay is still current
        assert!((manager.offset() + 53.0).abs() < 1e-4);
        assert!(manager.opacity().abs() < 1e-6);
        assert!(!hidden.is_finished());

        manager.complete_transition();
        assert!(hidden.is_completed());
        assert!(manager.current_overlay().is_none());
        assert_idle_invariant(&manager);
    }

    #[test]
    fn test_non_animated_hide() {
        let mut manager = OverlayManager::default();
        let _ = manager.show(toast(), true);
        let mut shown = manager.show(toast(), true);
        let mut hidden = manager.hide_current_overlay(false);
        assert!(hidden.is_completed());
        assert_eq!(shown.try_outcome(), Some(TransitionOutcome::Superseded));
        assert!(manager.current_overlay().is_none());
        assert_idle_invariant(&manager);
    }

    #[test]
    fn test_hide_supersedes_pending_show_continuation() {
        let mut manager = OverlayManager::default();
        let _ = manager.show(sheet(), false);
        // Pending hide that will install the popover...
        let mut replaced = manager.show(popover(), true);
        // ...is replaced by a plain hide.
        let mut hidden = manager.hide_current_overlay(true);
        assert_eq!(replaced.try_outcome(), Some(TransitionOutcome::Superseded));
        manager.complete_transition();
        assert!(hidden.is_completed());
        assert!(manager.current_overlay().is_none());
        assert_idle_invariant(&manager);
    }

    #[test]
    fn test_reshow_same_kind_cycles() {
        let mut manager = OverlayManager::default();
        let _ = manager.show(toast(), false);
        let mut again = manager.show(toast(), true);
        assert_eq!(manager.phase(), TransitionPhase::Hiding);
        manager.complete_transition();
        assert_eq!(manager.phase(), TransitionPhase::Showing);
        manager.complete_transition();
        assert!(again.is_completed());
        assert!(manager.is_showing(OverlayKind::Toast));
    }

    #[test]
    fn test_hide_priority_filter() {
        let mut manager = OverlayManager::default();
        let _ = manager.show(sheet(), false);

        let mut skipped = manager.hide_current_overlay_with(
            HideOptions::default().of_priorities(&[OverlayPriority::Transient]),
        );
        assert!(skipped.is_completed());
        assert!(manager.is_showing(OverlayKind::Sheet));
        assert!(!manager.animating());

        let mut hidden = manager.hide_current_overlay_with(
            HideOptions::animated(false).of_priorities(&[OverlayPriority::Modal]),
        );
        assert!(hidden.is_completed());
        assert!(manager.current_overlay().is_none());
    }

    #[test]
    fn test_enqueue_waits_for_hide() {
        let mut manager = OverlayManager::default();
        let mut first = manager.enqueue(toast(), false);
        assert!(first.is_completed());

        let mut second = manager.enqueue(notification(), false);
        assert_eq!(manager.queued_len(), 1);
        assert!(!second.is_finished());
        assert!(manager.is_showing(OverlayKind::Toast));

        let _ = manager.hide_current_overlay(false);
        assert!(second.is_completed());
        assert!(manager.is_showing(OverlayKind::Notification));
        assert_eq!(manager.queued_len(), 0);
    }

    #[test]
    fn test_hide_without_next_keeps_queue() {
        let mut manager = OverlayManager::default();
        let _ = manager.enqueue(toast(), false);
        let _ = manager.enqueue(notification(), false);

        let _ = manager.hide_current_overlay_with(HideOptions::animated(true).without_next());
        manager.complete_transition();
        assert!(manager.current_overlay().is_none());
        assert_eq!(manager.queued_len(), 1);
    }

    #[test]
    fn test_show_does_not_drain_queue() {
        let mut manager = OverlayManager::default();
        let _ = manager.enqueue(toast(), false);
        let _ = manager.enqueue(notification(), false);
        let _ = manager.show(sheet(), false);
        assert!(manager.is_showing(OverlayKind::Sheet));
        assert_eq!(manager.queued_len(), 1);
    }

    #[test]
    fn test_clear_queue_supersedes() {
        let mut manager = OverlayManager::default();
        let _ = manager.enqueue(toast(), false);
        let mut waiting = manager.enqueue(toast(), true);
        manager.clear_queue();
        assert_eq!(waiting.try_outcome(), Some(TransitionOutcome::Superseded));
    }

    #[test]
    fn test_sheet_model_opened_on_install() {
        let mut manager = OverlayManager::default();
        let _ = manager.show(sheet(), false);
        match manager.current_overlay() {
            Some(OverlayType::Sheet(root)) => {
                assert_eq!(root.model.position, crate::overlay::OverlaySheetPosition::Middle);
                assert!((root.model.backdrop_opacity - 0.2).abs() < 1e-6);
            }
            other => panic!("Expected sheet, got {:?}", other),
        }

        let expanded = SheetRoot::new(OverlayStyle::GRID, Blank)
            .at_position(crate::overlay::OverlaySheetPosition::Top);
        let _ = manager.show(OverlayType::Sheet(expanded), false);
        match manager.current_overlay() {
            Some(OverlayType::Sheet(root)) => {
                assert_eq!(root.model.position, crate::overlay::OverlaySheetPosition::Top);
            }
            other => panic!("Expected sheet, got {:?}", other),
        }
    }

    #[test]
    fn test_retired_kinds_reported_once_each() {
        let mut manager = OverlayManager::default();
        assert!(manager.take_retired().is_empty());

        // Same kind replacing itself still counts as a removal
        let _ = manager.show(toast(), false);
        let _ = manager.show(toast(), false);
        assert_eq!(manager.take_retired(), vec![OverlayKind::Toast]);

        let _ = manager.enqueue(toast(), true);
        let _ = manager.hide_current_overlay(true);
        assert!(manager.take_retired().is_empty());
        manager.complete_transition();
        assert_eq!(manager.take_retired(), vec![OverlayKind::Toast]);
        assert!(manager.is_showing(OverlayKind::Toast));

        // Filtered-out hide removes nothing
        let _ = manager.hide_current_overlay_with(
            HideOptions::animated(false).of_priorities(&[OverlayPriority::Modal]),
        );
        assert!(manager.take_retired().is_empty());
    }

    #[test]
    fn test_full_screen_modal_exit_offset() {
        let mut manager = OverlayManager::default();
        let _ = manager.present_full_screen_modal(Blank);
        manager.complete_transition();
        assert!(manager.is_showing(OverlayKind::FullScreenModal));
        let _ = manager.hide_current_overlay(true);
        assert!((manager.offset() - 100.0).abs() < 1e-4);
        manager.complete_transition();
        assert_idle_invariant(&manager);
    }

    #[test]
    fn test_drop_supersedes_pending() {
        let mut manager = OverlayManager::default();
        let shown = manager.show(toast(), true);
        drop(manager);
        let outcome = futures::executor::block_on(shown);
        assert_eq!(outcome, TransitionOutcome::Superseded);
    }

    #[test]
    fn test_random_sequences_hold_idle_invariant() {
        // Deterministic pseudo-random walk over show/hide/complete.
        let mut manager = OverlayManager::default();
        let mut seed: u32 = 0x9e37_79b9;
        for _ in 0..500 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            let animate = seed & 1 == 0;
            match (seed >> 1) % 5 {
                0 => drop(manager.show(toast(), animate)),
                1 => drop(manager.show(sheet(), animate)),
                2 => drop(manager.hide_current_overlay(animate)),
                3 => drop(manager.enqueue(notification(), animate)),
                _ => {
                    manager.complete_transition();
                }
            }
            assert_eq!(manager.animating(), manager.phase() != TransitionPhase::Idle);
        }
        while manager.complete_transition() {}
        manager.clear_queue();
        let _ = manager.hide_current_overlay(false);
        assert!(manager.current_overlay().is_none());
        assert_idle_invariant(&manager);
    }
}
