use leptos::*;

#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="loading" aria-busy="true">"Loading..."</div>
    }
}

/// Visible failure notice for a chart that could not be shown.
#[component]
pub fn ErrorNotice(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="error-notice" role="alert">
            <span class="error-title">"Failed to load chart"</span>
            <span class="error-message">{message}</span>
        </div>
    }
}
