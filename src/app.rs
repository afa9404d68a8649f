use leptos::*;

use crate::{
    application::DashboardServices,
    domain::{
        logging::{LogComponent, get_logger},
        plot::PlotResource,
    },
    infrastructure::config::DashboardConfig,
    presentation::{ImageWithFallback, PlotPanel},
};

/// Static images shown on the gallery page, with their card titles.
pub const GALLERY_IMAGES: [(&str, &str); 2] = [
    ("Visualization 1", "/plot1.png"),
    ("Visualization 2", "/plot2.png"),
];
pub const GALLERY_IMAGE_WIDTH: u32 = 500;
pub const GALLERY_IMAGE_HEIGHT: u32 = 300;

/// Which page to show for the current location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Gallery,
}

impl Page {
    /// `/gallery` shows the image gallery; every other path shows the dashboard.
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/gallery" => Page::Gallery,
            _ => Page::Dashboard,
        }
    }

    fn current() -> Self {
        web_sys::window()
            .and_then(|window| window.location().pathname().ok())
            .map(|path| Page::from_path(&path))
            .unwrap_or(Page::Dashboard)
    }
}

/// 🦀 Root component: provides services and picks the page
#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    get_logger().info(
        LogComponent::Presentation("App"),
        &format!("🏠 Mounting dashboard against {}", config.api_base),
    );
    provide_context(DashboardServices::from_config(config));

    let page = match Page::current() {
        Page::Dashboard => view! { <HousingDashboard/> }.into_view(),
        Page::Gallery => view! { <VisualizationGallery/> }.into_view(),
    };

    view! {
        <style>{STYLES}</style>
        <div class="dashboard-app">{page}</div>
    }
}

/// Both plot panels, one per backend resource.
#[component]
pub fn HousingDashboard() -> impl IntoView {
    view! {
        <div class="housing-dashboard">
            <h1>"Housing Dashboard"</h1>
            {PlotResource::all()
                .into_iter()
                .map(|resource| view! { <PlotPanel resource=resource/> })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn VisualizationGallery() -> impl IntoView {
    view! {
        <div class="gallery">
            <main>
                <h1>"Visualizations from Python Notebook"</h1>
                <div class="gallery-grid">
                    {GALLERY_IMAGES
                        .iter()
                        .map(|(title, src)| view! {
                            <div class="card">
                                <h2>{*title}</h2>
                                <ImageWithFallback
                                    src={*src}
                                    alt={*title}
                                    width=GALLERY_IMAGE_WIDTH
                                    height=GALLERY_IMAGE_HEIGHT
                                />
                            </div>
                        })
                        .collect_view()}
                </div>
            </main>
            <footer>
                <p>"Footer content here"</p>
            </footer>
        </div>
    }
}

const STYLES: &str = r#"
.dashboard-app {
    font-family: -apple-system, BlinkMacSystemFont, sans-serif;
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 16px;
}

.plot-panel, .card {
    background: #fff;
    border-radius: 8px;
    box-shadow: 0 2px 6px rgba(0, 0, 0, 0.1);
    padding: 24px;
    margin-bottom: 24px;
}

.gallery-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(500px, 1fr));
    gap: 32px;
}

.image-fallback {
    display: flex;
    align-items: center;
    justify-content: center;
    background: #e5e7eb;
    color: #6b7280;
}

.error-notice {
    display: flex;
    flex-direction: column;
    gap: 4px;
    padding: 12px;
    border-radius: 6px;
    background: #fee2e2;
    color: #991b1b;
}

footer {
    margin-top: 32px;
    text-align: center;
    color: #4b5563;
}
"#;
