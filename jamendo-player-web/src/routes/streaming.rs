use leptos::prelude::*;
use axum::{
    Router,
    extract::{Path, Query, State},
    response::IntoResponse,
    routing::{get, put},
};
use jamendo_player_controls::{PLAYLIST_LISTING_LIMIT, notification::Message};
use std::sync::Arc;

use crate::{
    AppState,
    components::{
        gradient::AlbumGradient,
        sidebar::{PlaylistList, PlaylistSidebar},
    },
    html,
    page::Page,
    routes::player::PlayerCardContainer,
    view::render,
};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/streaming", get(index))
        .route("/streaming/playlists", get(playlists_partial))
        .route("/streaming/playlist/{id}", put(play_playlist))
}

async fn index() -> impl IntoResponse {
    render(html! {
        <Page title="Streaming">
            <div class="streaming-layout">
                <PlaylistSidebar />
                <div class="page-container">
                    <AlbumGradient />
                    <div class="player-wrapper">
                        <PlayerCardContainer />
                    </div>
                </div>
            </div>
        </Page>
    })
}

#[derive(serde::Deserialize)]
struct SearchParameters {
    query: Option<String>,
}

async fn playlists_partial(
    State(state): State<Arc<AppState>>,
    Query(parameters): Query<SearchParameters>,
) -> impl IntoResponse {
    let query = parameters
        .query
        .map(|query| query.trim().to_string())
        .filter(|query| !query.is_empty());

    let playlists = match &query {
        Some(query) => {
            state
                .player
                .client
                .search_playlists(query, PLAYLIST_LISTING_LIMIT)
                .await
        }
        None => {
            state
                .player
                .client
                .playable_playlists(PLAYLIST_LISTING_LIMIT)
                .await
        }
    };

    let playlists = match playlists {
        Ok(playlists) => playlists,
        Err(error) => {
            tracing::error!("unable to list playlists: {error}");
            state
                .player
                .broadcast
                .send_message(Message::Error(format!("Unable to load playlists: {error}")));
            vec![]
        }
    };

    let current_source_name = state
        .player
        .tracklist
        .read()
        .await
        .source_name()
        .to_string();

    render(html! {
        <PlaylistList playlists=playlists current_source_name=current_source_name />
    })
}

async fn play_playlist(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> impl IntoResponse {
    state.player.controls.play_playlist(id);
}

#[cfg(test)]
mod tests {
    use crate::tests::{eventually, harness};
    use jamendo_player_controls::tracklist::TracklistType;

    #[tokio::test]
    async fn page_has_sidebar_gradient_and_player() {
        let harness = harness();

        let html = harness.server.get("/streaming").await.text();

        assert!(html.contains("Loading playlists..."));
        assert!(html.contains(r#"id="album-gradient""#));
        assert!(html.contains(r#"hx-get="/player""#));
    }

    #[tokio::test]
    async fn lists_playable_playlists() {
        let harness = harness();

        let html = harness.server.get("/streaming/playlists").await.text();

        assert!(html.contains("Focus"));
        assert!(html.contains(r#"hx-put="/streaming/playlist/5""#));
        assert!(!html.contains("active"));
    }

    #[tokio::test]
    async fn selecting_a_playlist_plays_it_and_marks_it_active() {
        let harness = harness();

        harness
            .server
            .put("/streaming/playlist/5")
            .await
            .assert_status_ok();

        let tracklist = harness.state.tracklist.clone();
        eventually(|| {
            let tracklist = tracklist.clone();
            async move { tracklist.read().await.total() == 1 }
        })
        .await;

        let tracklist = harness.state.tracklist.get().await;
        assert_eq!(tracklist.list_type(), &TracklistType::Playlist { id: 5 });
        assert_eq!(tracklist.source_name(), "Focus");

        let html = harness.server.get("/streaming/playlists").await.text();
        assert!(html.contains("sidebar-item active"));
    }

    #[tokio::test]
    async fn search_goes_to_the_catalog() {
        let harness = harness();

        let html = harness
            .server
            .get("/streaming/playlists")
            .add_query_param("query", "focus")
            .await
            .text();

        assert!(html.contains("Focus"));
    }
}
