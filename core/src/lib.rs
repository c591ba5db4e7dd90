pub mod config;
pub mod contact;
pub mod extras;
pub mod filter;
pub mod modal;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod theme;
pub mod tilt;
pub mod typing;

pub use config::{ConfigError, SiteConfig};
pub use contact::{
    ClipboardError, ClipboardWriter, ContactForm, FormSurface, FormTransport, SubmissionState,
    SubmitError, TransportError,
};
pub use filter::{FilterBar, ProjectFilter, FILTER_ALL};
pub use modal::{CardData, ModalContent, ModalState, ProjectDetails};
pub use nav::{NavEvent, NavState};
pub use reveal::{RevealEntry, RevealOutcome, RevealTracker};
pub use scroll::{ScrollMetrics, ScrollReading, Section};
pub use theme::{MemoryStore, PreferenceStore, Theme, ThemeController, ThemeSurface};
pub use tilt::{CardBounds, Tilt, TiltCoefficients};
pub use typing::{TypingCursor, TypingFrame, TypingMachine, TypingPhase, TypingTimings};
