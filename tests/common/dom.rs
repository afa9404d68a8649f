use std::time::Duration;

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Fresh `<div>` appended to `<body>`, so each test reads only its own markup.
pub fn container() -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    document.body().unwrap().append_child(&container).unwrap();
    container
}

pub fn text(container: &HtmlElement) -> String {
    container.text_content().unwrap_or_default()
}

/// Let spawned futures and effects run.
pub async fn settle() {
    gloo_timers::future::sleep(Duration::from_millis(30)).await;
}
