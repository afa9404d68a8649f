pub mod plotly_renderer;

pub use plotly_renderer::{PlotRenderer, PlotlyRenderer};
