use leptos::*;
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::domain::logging::{LogComponent, get_logger};
use crate::infrastructure::{
    config::DashboardConfig,
    services::{BrowserTimeProvider, ConsoleLogger},
};

pub mod app;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

/// Wire up logging and mount the dashboard into `<body>`
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let config = DashboardConfig::from_environment();

    domain::logging::init_logger(Box::new(ConsoleLogger::new(config.log_level)));
    domain::logging::init_time_provider(Box::new(BrowserTimeProvider::new()));

    get_logger().info(
        LogComponent::Presentation("Initialize"),
        "🚀 Housing dashboard initialized",
    );

    mount_to_body(move || view! { <App config=config/> });
}
