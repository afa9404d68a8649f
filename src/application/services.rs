use std::rc::Rc;

use crate::application::plot_loader::PlotLoader;
use crate::infrastructure::{
    config::DashboardConfig,
    http::{PlotSource, ResourceClient},
    rendering::{PlotRenderer, PlotlyRenderer},
};

/// Everything the display components need, provided once through Leptos context.
#[derive(Clone)]
pub struct DashboardServices {
    pub config: DashboardConfig,
    pub source: Rc<dyn PlotSource>,
    pub renderer: Rc<dyn PlotRenderer>,
}

impl DashboardServices {
    pub fn new(
        config: DashboardConfig,
        source: Rc<dyn PlotSource>,
        renderer: Rc<dyn PlotRenderer>,
    ) -> Self {
        Self { config, source, renderer }
    }

    /// Production wiring: gloo-net client plus Plotly.
    pub fn from_config(config: DashboardConfig) -> Self {
        let source = Rc::new(ResourceClient::new(config.clone()));
        Self::new(config, source, Rc::new(PlotlyRenderer::new()))
    }

    pub fn loader(&self) -> PlotLoader {
        PlotLoader::new(Rc::clone(&self.source))
    }
}

impl Default for DashboardServices {
    fn default() -> Self {
        Self::from_config(DashboardConfig::default())
    }
}
