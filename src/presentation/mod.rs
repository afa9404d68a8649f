//! Reusable Leptos components for the dashboard pages.

pub mod image_with_fallback;
pub mod plot_panel;
pub mod status;

pub use image_with_fallback::{IMAGE_FALLBACK_TEXT, ImageWithFallback};
pub use plot_panel::PlotPanel;
pub use status::{ErrorNotice, LoadingIndicator};
