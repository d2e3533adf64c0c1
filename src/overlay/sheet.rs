//! Bottom sheet position model.
//!
//! A sheet opens at half height (`Middle`). Dragging its top bar up past the
//! slide threshold expands it to `Top`; dragging down collapses it to
//! `Middle` or dismisses it.

use crate::config::OverlayConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlaySheetPosition {
    Top,
    Middle,
    Dismissed,
}

/// What a finished drag did to the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetDragOutcome {
    /// Sheet settled at a (possibly unchanged) position.
    Settled(OverlaySheetPosition),
    Dismissed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverlaySheetModel {
    pub position: OverlaySheetPosition,
    /// Accumulated drag distance since the drag began. Positive is downward.
    pub delta_height: f32,
    pub backdrop_opacity: f32,
    slide_threshold: f32,
    backdrop_max_opacity: f32,
}

impl Default for OverlaySheetModel {
    fn default() -> Self {
        Self::with_config(&OverlayConfig::default())
    }
}

impl OverlaySheetModel {
    pub fn with_config(config: &OverlayConfig) -> Self {
        Self {
            position: OverlaySheetPosition::Dismissed,
            delta_height: 0.0,
            backdrop_opacity: 0.0,
            slide_threshold: config.sheet_slide_threshold,
            backdrop_max_opacity: config.sheet_backdrop_max_opacity,
        }
    }

    pub fn configure(&mut self, config: &OverlayConfig) {
        self.slide_threshold = config.sheet_slide_threshold;
        self.backdrop_max_opacity = config.sheet_backdrop_max_opacity;
    }

    pub fn show(&mut self, position: OverlaySheetPosition) {
        self.position = position;
        self.backdrop_opacity = self.backdrop_max_opacity;
    }

    pub fn drag_changed(&mut self, dy: f32) {
        self.delta_height += dy;
    }

    /// Settle the sheet once the drag is released.
    ///
    /// Middle only makes sense with the keyboard hidden; a very long downward
    /// drag from `Top` dismisses outright. A dismissing drag leaves position
    /// and drag offset alone so the sheet fades out where it was released.
    pub fn drag_ended(&mut self, keyboard_visible: bool) -> SheetDragOutcome {
        let threshold = self.slide_threshold;
        let mut position = self.position;

        if self.delta_height > threshold {
            if self.position == OverlaySheetPosition::Top
                && !keyboard_visible
                && self.delta_height < 4.0 * threshold
            {
                position = OverlaySheetPosition::Middle;
            } else {
                return SheetDragOutcome::Dismissed;
            }
        } else if self.delta_height < -threshold {
            position = OverlaySheetPosition::Top;
        }

        self.position = position;
        self.delta_height = 0.0;
        SheetDragOutcome::Settled(position)
    }

    /// Height of the sheet's top edge below the container top.
    ///
    /// `content_height` is only used for fixed-height content, which sits at
    /// its natural height. `min_top` keeps the sheet clear of the toolbar.
    pub fn top_inset(
        &self,
        container_height: f32,
        content_height: f32,
        fixed_height: bool,
        min_top: f32,
    ) -> f32 {
        let base = match (self.position, fixed_height) {
            (OverlaySheetPosition::Dismissed, _) => return container_height,
            (_, true) => container_height - content_height,
            (OverlaySheetPosition::Top, false) => 0.0,
            (OverlaySheetPosition::Middle, false) => container_height / 2.0,
        };
        let inset = if fixed_height {
            base
        } else {
            base + self.delta_height
        };
        inset.max(min_top)
    }
}
