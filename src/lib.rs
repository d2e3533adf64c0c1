pub mod config;
pub mod overlay;

pub use config::{ConfigError, OverlayConfig};
pub use overlay::{
    HostEvent, OverlayContent, OverlayDispatcher, OverlayHost, OverlayKind, OverlayManager,
    OverlayType,
};
