use std::rc::Rc;

use futures::future::{AbortHandle, Abortable};
use leptos::*;

use crate::{
    application::DashboardServices,
    domain::{
        logging::{LogComponent, get_logger},
        plot::{PlotPayload, PlotResource},
        state::DisplayState,
    },
    infrastructure::rendering::PlotRenderer,
    presentation::status::{ErrorNotice, LoadingIndicator},
};
use crate::log_debug;

/// 📊 One chart panel: loads its resource once on mount and renders the outcome.
///
/// The load is aborted when the panel unmounts, so a late response never
/// touches a disposed signal.
#[component]
pub fn PlotPanel(resource: PlotResource) -> impl IntoView {
    let services = use_context::<DashboardServices>().unwrap_or_default();
    let state = create_rw_signal(DisplayState::<PlotPayload>::Loading);

    let loader = services.loader();
    let (abort_handle, abort_registration) = AbortHandle::new_pair();

    wasm_bindgen_futures::spawn_local(async move {
        match Abortable::new(loader.load(resource), abort_registration).await {
            Ok(outcome) => {
                if let Err(error) = &outcome {
                    get_logger().warn(
                        LogComponent::Presentation("PlotPanel"),
                        &format!("⚠️ {resource} failed: {error}"),
                    );
                }
                // try_update is None once the owning scope is gone
                if state.try_update(|current| current.settle(outcome)).is_none() {
                    log_debug!(
                        LogComponent::Presentation("PlotPanel"),
                        "{} settled after unmount, result dropped",
                        resource
                    );
                }
            }
            Err(_aborted) => {
                log_debug!(
                    LogComponent::Presentation("PlotPanel"),
                    "🛑 {} load aborted on unmount",
                    resource
                );
            }
        }
    });

    on_cleanup(move || abort_handle.abort());

    let renderer = services.renderer;

    view! {
        <section class="plot-panel" id={resource.dom_id()}>
            <h2>{resource.title()}</h2>
            {move || state.with(|current| match current {
                DisplayState::Loading => view! { <LoadingIndicator/> }.into_view(),
                DisplayState::Ready(payload) => view! {
                    <PlotView payload={payload.clone()} renderer={Rc::clone(&renderer)}/>
                }
                .into_view(),
                DisplayState::Failed(error) => view! {
                    <ErrorNotice message={error.to_string()}/>
                }
                .into_view(),
            })}
        </section>
    }
}

/// Hands the payload to the renderer once the target element exists.
#[component]
fn PlotView(payload: PlotPayload, renderer: Rc<dyn PlotRenderer>) -> impl IntoView {
    let target = create_node_ref::<html::Div>();
    let (render_error, set_render_error) = create_signal(None::<String>);

    target.on_load(move |element| {
        if let Err(error) = renderer.render(&element, &payload) {
            get_logger().error(
                LogComponent::Presentation("PlotView"),
                &format!("❌ {error}"),
            );
            set_render_error.set(Some(error.to_string()));
        }
    });

    view! {
        <div class="plot-view">
            <div class="plot-target" node_ref=target></div>
            {move || render_error.get().map(|message| view! { <ErrorNotice message=message/> })}
        </div>
    }
}
