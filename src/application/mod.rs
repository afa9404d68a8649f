pub mod plot_loader;
pub mod services;

pub use plot_loader::PlotLoader;
pub use services::DashboardServices;
