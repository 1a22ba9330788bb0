use leptos::prelude::*;
use axum::{Router, extract::State, response::IntoResponse, routing::get};
use jamendo_player_controls::{RADIO_TRACK_LIMIT, tracklist::TracklistType};
use std::sync::Arc;

use crate::{
    AppState,
    components::gradient::AlbumGradient,
    html,
    page::Page,
    routes::player::PlayerCardContainer,
    view::render,
};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/radio", get(index))
}

async fn index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let radio_active = {
        let tracklist = state.player.tracklist.read().await;
        *tracklist.list_type() == TracklistType::Radio
            && (tracklist.is_fetching() || !tracklist.is_empty())
    };

    if !radio_active {
        state.player.controls.play_radio(RADIO_TRACK_LIMIT);
    }

    render(html! {
        <Page title="Radio">
            <div class="page-container">
                <AlbumGradient />
                <div class="player-wrapper">
                    <PlayerCardContainer />
                </div>
            </div>
        </Page>
    })
}

#[cfg(test)]
mod tests {
    use crate::tests::{eventually, harness};

    #[tokio::test]
    async fn starts_the_radio_once() {
        let harness = harness();

        let response = harness.server.get("/radio").await;
        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains(r#"hx-get="/player""#));
        assert!(html.contains(r#"id="album-gradient""#));

        let tracklist = harness.state.tracklist.clone();
        eventually(|| {
            let tracklist = tracklist.clone();
            async move { tracklist.read().await.total() == 2 }
        })
        .await;

        let first = harness.state.tracklist.get().await;
        assert_eq!(first.source_name(), "Sit back and enjoy");

        harness.server.get("/radio").await.assert_status_ok();
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;

        // revisiting keeps the running session
        assert_eq!(harness.state.tracklist.get().await.current_position(), 0);
        assert_eq!(harness.state.tracklist.get().await, first);
    }
}
