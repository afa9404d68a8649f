pub mod errors;
pub mod logging;
pub mod plot;
pub mod state;

pub use errors::AppError;
pub use plot::{PlotPayload, PlotResource};
pub use state::{DisplayState, ImageDimensions, ImageLoadState};
