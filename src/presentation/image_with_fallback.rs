use leptos::*;

use crate::domain::{
    logging::{LogComponent, get_logger},
    state::{ImageDimensions, ImageLoadState},
};

/// Placeholder text shown in place of an image that failed to load.
pub const IMAGE_FALLBACK_TEXT: &str = "Image not found";

/// Placeholder style when the requested size is not usable.
const INVALID_SIZE_STYLE: &str = "width: auto; height: auto;";

/// 🖼️ Image that swaps to a same-sized placeholder on the first load error.
///
/// The swap is permanent for this instance: no retry, no alternate source.
#[component]
pub fn ImageWithFallback(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    width: u32,
    height: u32,
) -> impl IntoView {
    let dimensions = ImageDimensions::new(width, height).inspect_err(|error| {
        get_logger().warn(
            LogComponent::Presentation("Image"),
            &format!("⚠️ {src}: {error}, showing placeholder"),
        );
    });
    let state = create_rw_signal(match dimensions {
        Ok(_) => ImageLoadState::Normal,
        Err(_) => ImageLoadState::FallbackActive,
    });
    let placeholder_style = dimensions
        .as_ref()
        .map(ImageDimensions::style)
        .unwrap_or_else(|_| INVALID_SIZE_STYLE.to_string());

    move || match &dimensions {
        Ok(size) if !state.get().is_fallback() => {
            let failed_src = src.clone();
            view! {
                <img
                    src={src.clone()}
                    alt={alt.clone()}
                    width={size.width().to_string()}
                    height={size.height().to_string()}
                    on:error=move |_| {
                        if state.try_update(ImageLoadState::on_load_error).unwrap_or(false) {
                            get_logger().warn(
                                LogComponent::Presentation("Image"),
                                &format!("🖼️ {failed_src} failed to load, showing placeholder"),
                            );
                        }
                    }
                />
            }
            .into_view()
        }
        _ => view! {
            <div class="image-fallback" style={placeholder_style.clone()}>
                <p>{IMAGE_FALLBACK_TEXT}</p>
            </div>
        }
        .into_view(),
    }
}
