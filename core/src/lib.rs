pub mod catalog;
pub mod disclosure;
pub mod eye;
pub mod frame;
pub mod pointer;
pub mod preference;
pub mod preview;
pub mod settings;
pub mod toggle;
pub mod trail;

pub use catalog::{ProjectCatalog, ProjectEntry, PROJECT_CATALOG};
pub use disclosure::{Disclosure, DisclosureState};
pub use eye::{pupil_offset, pupil_transform, EyeGeometry, PUPIL_PADDING};
pub use frame::FrameGate;
pub use pointer::{Point, PointerHistory, PointerSample, HISTORY_PER_MARKER, TRAIL_LENGTH};
pub use preference::{load_dark_mode, save_dark_mode, MemoryStore, PreferenceStore, DARK_MODE_KEY};
pub use preview::{
    follow_position, random_position, ActivePreview, HoverPreview, PreviewPlacement, SafeRect,
    Viewport, PREVIEW_SIZE,
};
pub use settings::PageSettings;
pub use toggle::{DarkModeToggle, ToggleOutcome, ToggleState, ToggleSwitch, TrackGeometry};
pub use trail::{MarkerFrame, TrailLayout, TrailStyle, TRAIL_STRIDE};
