use futures::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::Request;

use crate::domain::{
    errors::{AppError, NetworkResult},
    logging::{LogComponent, get_logger},
    plot::PlotResource,
};
use crate::infrastructure::config::DashboardConfig;
use crate::log_debug;

/// Anything that can hand back the raw body for a plot resource.
pub trait PlotSource {
    fn fetch(&self, resource: PlotResource) -> LocalBoxFuture<'static, NetworkResult<String>>;
}

/// HTTP client for the plot endpoints, built on gloo-net.
///
/// One GET per call; no retries, no caching, no body validation.
#[derive(Debug, Clone)]
pub struct ResourceClient {
    config: DashboardConfig,
}

impl ResourceClient {
    pub fn new(config: DashboardConfig) -> Self {
        Self { config }
    }

    pub fn endpoint_url(&self, resource: PlotResource) -> String {
        self.config.endpoint_url(resource)
    }

    /// GET `{api_base}/{resource}` and return the body text.
    pub async fn fetch_resource(&self, resource: PlotResource) -> NetworkResult<String> {
        get_text(self.endpoint_url(resource)).await
    }
}

impl PlotSource for ResourceClient {
    fn fetch(&self, resource: PlotResource) -> LocalBoxFuture<'static, NetworkResult<String>> {
        let client = self.clone();
        async move { client.fetch_resource(resource).await }.boxed_local()
    }
}

async fn get_text(url: String) -> NetworkResult<String> {
    log_debug!(LogComponent::Infrastructure("Http"), "📡 GET {}", url);

    let response = Request::get(&url).send().await.map_err(|e| {
        get_logger().error(
            LogComponent::Infrastructure("Http"),
            &format!("❌ GET {url} failed: {e}"),
        );
        AppError::NetworkError(format!("request to {url} failed: {e}"))
    })?;

    if !response.ok() {
        get_logger().error(
            LogComponent::Infrastructure("Http"),
            &format!("❌ GET {url} returned HTTP {}", response.status()),
        );
        return Err(AppError::HttpStatus(response.status()));
    }

    response
        .text()
        .await
        .map_err(|e| AppError::NetworkError(format!("failed to read body from {url}: {e}")))
}
