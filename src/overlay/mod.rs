//! Overlay presentation layer.
//!
//! An overlay is a surface drawn above the page: toast, notification banner,
//! find-in-page bar, popover, bottom sheet, back/forward list or full-screen
//! modal. At most one is current per [`OverlayManager`]; the manager owns the
//! entrance/exit animation and [`OverlayView`](view) draws whatever it holds.
//!
//! - `manager`    : state machine, queue, transitions
//! - `transition` : one-shot completion handles
//! - `animation`  : offset/opacity tweens sampled by the view
//! - `content`    : payload models (find-in-page, notification, history)
//! - `sheet`      : bottom sheet position model and drag handling
//! - `toast`      : toast content, progress states, drag-to-dismiss
//! - `view`       : egui renderer
//! - `host`       : owns a manager, routes requests from content, timers

pub mod animation;
pub mod content;
pub mod host;
pub mod manager;
pub mod sheet;
pub mod style;
pub mod toast;
pub mod transition;
pub mod view;

use std::fmt;

pub use content::{BackForwardList, FindInPageState, NotificationRow};
pub use host::{HostEvent, OverlayDispatcher, OverlayHost, OverlayRequest};
pub use manager::{HideOptions, OverlayManager};
pub use sheet::{OverlaySheetModel, OverlaySheetPosition};
pub use style::{OverlayHeaderButton, OverlaySheetConfig, OverlayStyle};
pub use toast::{Toast, ToastContent, ToastProgressStatus, ToastState};
pub use transition::{Transition, TransitionOutcome, TransitionPhase};

/// Caller-supplied body of a popover, sheet or full-screen modal.
///
/// Content asks for its own retirement through
/// [`OverlayDispatcher::hide_overlay`]; it never touches the manager.
pub trait OverlayContent: Send {
    /// Title shown in the sheet/popover header when the style enables it.
    fn title(&self) -> Option<&str> {
        None
    }

    /// Fixed-height content is laid out at its natural height and cannot be dragged.
    fn is_fixed_height(&self) -> bool {
        false
    }

    fn ui(&mut self, ui: &mut egui::Ui, dispatcher: &OverlayDispatcher);
}

/// Coarse category of an overlay; decides queueing and hide filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayPriority {
    Transient,
    Modal,
    FullScreen,
}

/// Payload-free discriminant of [`OverlayType`]. Two overlays are "the same"
/// when their kinds match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayKind {
    BackForwardList,
    FindInPage,
    FullScreenModal,
    Notification,
    Popover,
    Sheet,
    Toast,
}

impl OverlayKind {
    pub fn priority(self) -> OverlayPriority {
        match self {
            OverlayKind::FullScreenModal => OverlayPriority::FullScreen,
            OverlayKind::BackForwardList
            | OverlayKind::FindInPage
            | OverlayKind::Popover
            | OverlayKind::Sheet => OverlayPriority::Modal,
            OverlayKind::Notification | OverlayKind::Toast => OverlayPriority::Transient,
        }
    }
}

pub struct PopoverRoot {
    pub style: OverlayStyle,
    pub header_button: Option<OverlayHeaderButton>,
    pub content: Box<dyn OverlayContent>,
}

impl PopoverRoot {
    pub fn new(style: OverlayStyle, content: impl OverlayContent + 'static) -> Self {
        Self {
            style,
            header_button: None,
            content: Box::new(content),
        }
    }

    pub fn with_header_button(mut self, button: OverlayHeaderButton) -> Self {
        self.header_button = Some(button);
        self
    }
}

pub struct SheetRoot {
    pub style: OverlayStyle,
    pub header_button: Option<OverlayHeaderButton>,
    /// Position the sheet opens at.
    pub initial_position: OverlaySheetPosition,
    pub model: OverlaySheetModel,
    pub content: Box<dyn OverlayContent>,
}

impl SheetRoot {
    pub fn new(style: OverlayStyle, content: impl OverlayContent + 'static) -> Self {
        Self {
            style,
            header_button: None,
            initial_position: OverlaySheetPosition::Middle,
            model: OverlaySheetModel::default(),
            content: Box::new(content),
        }
    }

    pub fn with_header_button(mut self, button: OverlayHeaderButton) -> Self {
        self.header_button = Some(button);
        self
    }

    pub fn at_position(mut self, position: OverlaySheetPosition) -> Self {
        self.initial_position = position;
        self
    }
}

/// The overlay currently shown (or requested to be shown).
pub enum OverlayType {
    BackForwardList(BackForwardList),
    FindInPage(FindInPageState),
    FullScreenModal(Box<dyn OverlayContent>),
    Notification(NotificationRow),
    Popover(PopoverRoot),
    Sheet(SheetRoot),
    Toast(Toast),
}

impl OverlayType {
    pub fn kind(&self) -> OverlayKind {
        match self {
            OverlayType::BackForwardList(_) => OverlayKind::BackForwardList,
            OverlayType::FindInPage(_) => OverlayKind::FindInPage,
            OverlayType::FullScreenModal(_) => OverlayKind::FullScreenModal,
            OverlayType::Notification(_) => OverlayKind::Notification,
            OverlayType::Popover(_) => OverlayKind::Popover,
            OverlayType::Sheet(_) => OverlayKind::Sheet,
            OverlayType::Toast(_) => OverlayKind::Toast,
        }
    }

    pub fn priority(&self) -> OverlayPriority {
        self.kind().priority()
    }
}

impl fmt::Debug for OverlayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OverlayType::{:?}", self.kind())
    }
}
