#![allow(dead_code)]

pub mod dom;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use futures::future::{FutureExt, LocalBoxFuture};
use housing_dashboard::application::DashboardServices;
use housing_dashboard::domain::{AppError, PlotPayload, PlotResource};
use housing_dashboard::infrastructure::{DashboardConfig, PlotRenderer, PlotSource};

pub const PRICES_BODY: &str =
    r#"{"data":[{"x":[1,2,3],"y":[4,5,6],"type":"histogram"}],"layout":{"title":"Prices"}}"#;

/// Canned responses; records every request it receives.
#[derive(Clone)]
pub struct StubSource {
    response: Result<String, AppError>,
    delay: Option<Duration>,
    requests: Rc<RefCell<Vec<PlotResource>>>,
}

impl StubSource {
    pub fn ok(body: &str) -> Self {
        Self {
            response: Ok(body.to_string()),
            delay: None,
            requests: Rc::default(),
        }
    }

    pub fn failing(error: AppError) -> Self {
        Self {
            response: Err(error),
            delay: None,
            requests: Rc::default(),
        }
    }

    /// Only usable in the browser: the delay runs on gloo timers.
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn requests(&self) -> Vec<PlotResource> {
        self.requests.borrow().clone()
    }
}

impl PlotSource for StubSource {
    fn fetch(&self, resource: PlotResource) -> LocalBoxFuture<'static, Result<String, AppError>> {
        self.requests.borrow_mut().push(resource);
        let response = self.response.clone();
        let delay = self.delay;
        async move {
            if let Some(delay) = delay {
                gloo_timers::future::sleep(delay).await;
            }
            response
        }
        .boxed_local()
    }
}

/// Keeps every payload it was asked to draw.
#[derive(Clone, Default)]
pub struct RecordingRenderer {
    rendered: Rc<RefCell<Vec<PlotPayload>>>,
}

impl RecordingRenderer {
    pub fn rendered(&self) -> Vec<PlotPayload> {
        self.rendered.borrow().clone()
    }
}

impl PlotRenderer for RecordingRenderer {
    fn render(&self, _target: &web_sys::HtmlElement, payload: &PlotPayload) -> Result<(), AppError> {
        self.rendered.borrow_mut().push(payload.clone());
        Ok(())
    }
}

/// Always fails, like a page without the charting script.
pub struct BrokenRenderer;

impl PlotRenderer for BrokenRenderer {
    fn render(&self, _target: &web_sys::HtmlElement, _payload: &PlotPayload) -> Result<(), AppError> {
        Err(AppError::RenderingError("chart library unavailable".to_string()))
    }
}

pub fn services(source: &StubSource, renderer: Rc<dyn PlotRenderer>) -> DashboardServices {
    DashboardServices::new(DashboardConfig::default(), Rc::new(source.clone()), renderer)
}
