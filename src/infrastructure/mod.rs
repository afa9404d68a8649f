pub mod config;
pub mod http;
pub mod rendering;
pub mod services;

pub use config::DashboardConfig;
pub use http::{PlotSource, ResourceClient};
pub use rendering::{PlotRenderer, PlotlyRenderer};
