use jamendo_player_gradient::{LOADING_BACKGROUND, MeshGradient};
use leptos::{IntoView, component, prelude::*};

use crate::html;

#[component]
pub(crate) fn mesh_background(gradient: MeshGradient) -> impl IntoView {
    html! {
        <div class="gradient-layer">
            <div class="mesh-gradient" style=gradient.style()></div>
            <div class="frosted"></div>
        </div>
    }
}

/// Follows the current track's cover, showing the loading background until colors arrive.
#[component]
pub(crate) fn album_gradient() -> impl IntoView {
    html! {
        <div
            id="album-gradient"
            class="gradient-container"
            hx-get="/gradient/album"
            hx-trigger="load, sse:tracklist"
            hx-target="this"
        >
            <LoadingGradient />
        </div>
    }
}

#[component]
pub(crate) fn loading_gradient() -> impl IntoView {
    html! {
        <div class="gradient-layer">
            <div class="loading-gradient" style=format!("background: {LOADING_BACKGROUND};")></div>
            <div class="frosted"></div>
        </div>
    }
}
