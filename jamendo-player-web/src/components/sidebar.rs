use jamendo_player_models::Playlist;
use leptos::{IntoView, component, prelude::*};

use crate::{html, view::LazyLoadComponent};

#[component]
pub(crate) fn playlist_sidebar() -> impl IntoView {
    html! {
        <aside class="sidebar">
            <h3>Playlists</h3>
            <input
                id="playlist-search"
                class="sidebar-search"
                type="search"
                name="query"
                placeholder="Search playlists"
                hx-get="/streaming/playlists"
                hx-trigger="input changed delay:300ms, search"
                hx-target="#playlist-list"
            />
            <div
                id="playlist-list"
                hx-get="/streaming/playlists"
                hx-trigger="sse:tracklist"
                hx-include="#playlist-search"
                hx-target="this"
            >
                <LazyLoadComponent url="/streaming/playlists".to_string()>
                    <div class="sidebar-message">"Loading playlists..."</div>
                </LazyLoadComponent>
            </div>
        </aside>
    }
}

#[component]
pub(crate) fn playlist_list(playlists: Vec<Playlist>, current_source_name: String) -> impl IntoView {
    if playlists.is_empty() {
        return html! { <div class="sidebar-message sidebar-empty">No playlists available</div> }
            .into_any();
    }

    html! {
        <ul class="sidebar-list">
            {playlists
                .into_iter()
                .map(|playlist| {
                    let active = playlist.name == current_source_name;
                    html! {
                        <li>
                            <button
                                class=if active { "sidebar-item active" } else { "sidebar-item" }
                                title=playlist.name.clone()
                                hx-put=format!("/streaming/playlist/{}", playlist.id)
                                hx-swap="none"
                            >
                                {playlist.name.clone()}
                            </button>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
        .into_any()
}
