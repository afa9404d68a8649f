//! Plot resources and the payloads the backend returns for them.

pub mod payload;
pub mod resource;

pub use payload::PlotPayload;
pub use resource::PlotResource;
