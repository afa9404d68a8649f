use strum::{AsRefStr, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Precomputed plots the backend serves, one endpoint each.
///
/// The path segment is the snake_case variant name, so
/// `PriceDistribution` lives at `{api_base}/price_distribution`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, IntoStaticStr, EnumIter, EnumString, strum::Display,
)]
#[strum(serialize_all = "snake_case")]
pub enum PlotResource {
    PriceDistribution,
    ScatterPlot,
}

impl PlotResource {
    /// Endpoint path segment under the API base.
    pub fn path(&self) -> &'static str {
        (*self).into()
    }

    /// Panel heading.
    pub fn title(&self) -> &'static str {
        match self {
            PlotResource::PriceDistribution => "Price Distribution",
            PlotResource::ScatterPlot => "Scatter Plot",
        }
    }

    /// DOM id of the panel, e.g. `price-distribution-panel`.
    pub fn dom_id(&self) -> String {
        format!("{}-panel", self.path().replace('_', "-"))
    }

    /// All resources in dashboard order.
    pub fn all() -> Vec<PlotResource> {
        PlotResource::iter().collect()
    }
}
