use std::rc::Rc;

use crate::{
    domain::{
        errors::AppError,
        logging::{LogComponent, get_logger},
        plot::{PlotPayload, PlotResource},
    },
    infrastructure::http::PlotSource,
};
use crate::log_info;

/// Use case: fetch one plot and turn the body into a validated payload.
///
/// Transport and parse failures both come back as `Err`, so callers can
/// treat them the same way.
#[derive(Clone)]
pub struct PlotLoader {
    source: Rc<dyn PlotSource>,
}

impl PlotLoader {
    pub fn new(source: Rc<dyn PlotSource>) -> Self {
        Self { source }
    }

    pub async fn load(&self, resource: PlotResource) -> Result<PlotPayload, AppError> {
        log_info!(
            LogComponent::Application("PlotLoader"),
            "🚀 Loading {}",
            resource
        );

        let body = self.source.fetch(resource).await?;

        let payload = PlotPayload::parse(&body).inspect_err(|e| {
            get_logger().error(
                LogComponent::Application("PlotLoader"),
                &format!("❌ Rejected {resource} payload: {e}"),
            );
        })?;

        log_info!(
            LogComponent::Application("PlotLoader"),
            "✅ {} ready: {} trace(s), title {:?}",
            resource,
            payload.trace_count(),
            payload.title()
        );
        Ok(payload)
    }
}
