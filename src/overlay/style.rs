//! Passive presentation parameters for popovers and sheets.

use egui::Color32;

/// Visual parameters of a popover or sheet. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayStyle {
    /// Show the title row (title text plus close button).
    pub show_title: bool,
    pub background_color: Color32,
    /// Backdrop taps and drags do not dismiss.
    pub non_dismissible: bool,
    /// Wrap the content in a scroll area; sheets with this set get a drag handle.
    pub embed_scroll_view: bool,
    /// Popovers take the full available width instead of a fixed column.
    pub expand_popover_width: bool,
}

impl OverlayStyle {
    pub const GRID: OverlayStyle = OverlayStyle {
        show_title: false,
        background_color: Color32::from_rgb(242, 242, 247),
        non_dismissible: false,
        embed_scroll_view: true,
        expand_popover_width: false,
    };

    pub const WITH_TITLE: OverlayStyle = OverlayStyle {
        show_title: true,
        background_color: Color32::WHITE,
        non_dismissible: false,
        embed_scroll_view: true,
        expand_popover_width: false,
    };

    pub fn non_dismissible(mut self) -> Self {
        self.non_dismissible = true;
        self
    }

    pub fn with_background(mut self, color: Color32) -> Self {
        self.background_color = color;
        self
    }

    pub fn fixed_height(mut self) -> Self {
        self.embed_scroll_view = false;
        self
    }

    pub fn expanded_width(mut self) -> Self {
        self.expand_popover_width = true;
        self
    }
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self::WITH_TITLE
    }
}

impl From<OverlaySheetConfig> for OverlayStyle {
    fn from(config: OverlaySheetConfig) -> Self {
        Self {
            show_title: config.show_title,
            background_color: config.background_color,
            ..Self::default()
        }
    }
}

/// Reduced sheet configuration used by simple sheets: title and color only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlaySheetConfig {
    pub show_title: bool,
    pub background_color: Color32,
}

impl OverlaySheetConfig {
    pub fn new(show_title: bool) -> Self {
        Self {
            show_title,
            background_color: Color32::WHITE,
        }
    }
}

/// Primary action button drawn above a sheet in its middle position.
///
/// Pressing it emits [`HostEvent::HeaderAction`](super::host::HostEvent) with
/// `action_id` and dismisses the sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayHeaderButton {
    pub text: String,
    pub action_id: String,
}

impl OverlayHeaderButton {
    pub fn new(text: impl Into<String>, action_id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            action_id: action_id.into(),
        }
    }
}
