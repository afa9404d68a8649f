#![cfg(target_arch = "wasm32")]

use housing_dashboard::domain::{AppError, PlotResource};
use housing_dashboard::infrastructure::{DashboardConfig, PlotSource, ResourceClient};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn origin() -> String {
    web_sys::window().unwrap().location().origin().unwrap()
}

#[wasm_bindgen_test]
async fn unreachable_backend_is_network_error() {
    let client = ResourceClient::new(DashboardConfig::new("http://127.0.0.1:9/api"));

    let result = client.fetch_resource(PlotResource::PriceDistribution).await;

    assert!(
        matches!(result, Err(AppError::NetworkError(_))),
        "unexpected result: {result:?}"
    );
}

#[wasm_bindgen_test]
async fn plot_source_goes_through_the_same_request() {
    let client = ResourceClient::new(DashboardConfig::new("http://127.0.0.1:9/api"));

    let result = client.fetch(PlotResource::ScatterPlot).await;

    assert!(matches!(result, Err(AppError::NetworkError(_))));
}

#[wasm_bindgen_test]
async fn missing_endpoint_is_http_status() {
    let client = ResourceClient::new(DashboardConfig::new(format!("{}/no-such-api", origin())));

    let result = client.fetch_resource(PlotResource::PriceDistribution).await;

    assert_eq!(result, Err(AppError::HttpStatus(404)));
}

#[wasm_bindgen_test]
async fn fetch_failure_is_transport_failure() {
    let client = ResourceClient::new(DashboardConfig::new("http://127.0.0.1:9/api"));

    for resource in PlotResource::all() {
        let error = client.fetch(resource).await.unwrap_err();
        assert!(error.is_transport(), "{resource}: {error}");
    }
}
