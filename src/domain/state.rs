use std::num::NonZeroU32;

use crate::domain::errors::AppError;

/// Lifecycle of an async display component.
///
/// Starts in `Loading` and settles exactly once per mount.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayState<T> {
    Loading,
    Ready(T),
    Failed(AppError),
}

impl<T> Default for DisplayState<T> {
    fn default() -> Self {
        DisplayState::Loading
    }
}

impl<T> DisplayState<T> {
    /// Apply the outcome of the load. Returns `false` if already settled.
    pub fn settle(&mut self, outcome: Result<T, AppError>) -> bool {
        if !self.is_loading() {
            return false;
        }
        *self = match outcome {
            Ok(value) => DisplayState::Ready(value),
            Err(error) => DisplayState::Failed(error),
        };
        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DisplayState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            DisplayState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&AppError> {
        match self {
            DisplayState::Failed(error) => Some(error),
            _ => None,
        }
    }
}

/// Whether an image component still shows the image or its placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageLoadState {
    #[default]
    Normal,
    FallbackActive,
}

impl ImageLoadState {
    /// Record a load error. Returns `true` only on the first one.
    pub fn on_load_error(&mut self) -> bool {
        match self {
            ImageLoadState::Normal => {
                *self = ImageLoadState::FallbackActive;
                true
            }
            ImageLoadState::FallbackActive => false,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ImageLoadState::FallbackActive)
    }
}

/// Render size of an image or its placeholder, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDimensions {
    width: NonZeroU32,
    height: NonZeroU32,
}

impl ImageDimensions {
    pub fn new(width: u32, height: u32) -> Result<Self, AppError> {
        match (NonZeroU32::new(width), NonZeroU32::new(height)) {
            (Some(width), Some(height)) => Ok(Self { width, height }),
            _ => Err(AppError::ValidationError(format!(
                "image dimensions must be positive, got {width}x{height}"
            ))),
        }
    }

    pub fn width(&self) -> u32 {
        self.width.get()
    }

    pub fn height(&self) -> u32 {
        self.height.get()
    }

    /// Inline style giving an element exactly this size.
    pub fn style(&self) -> String {
        format!("width: {}px; height: {}px;", self.width, self.height)
    }
}
