use axum::{
    Router,
    extract::{Query, State},
    response::IntoResponse,
    routing::get,
};
use jamendo_player_gradient::MeshGradient;
use std::sync::Arc;

use crate::{AppState, components::gradient::MeshBackground, html, view::render};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/gradient/album", get(album_gradient))
}

#[derive(serde::Deserialize)]
struct CoverParameters {
    cover: Option<String>,
}

/// Gradient for the current track's cover. A `cover` other than the current one is ignored.
async fn album_gradient(
    State(state): State<Arc<AppState>>,
    Query(parameters): Query<CoverParameters>,
) -> impl IntoResponse {
    let cover = state
        .player
        .tracklist
        .read()
        .await
        .current_track()
        .map(|track| track.cover.clone())
        .unwrap_or_default();

    if let Some(requested) = parameters.cover
        && requested != cover
    {
        tracing::debug!("ignoring gradient request for {requested}, not the current cover");
    }

    let colors = state.color_extractor.colors(&cover).await;

    render(html! { <MeshBackground gradient=MeshGradient::album(&colors) /> })
}

#[cfg(test)]
mod tests {
    use crate::tests::harness;

    #[tokio::test]
    async fn unusable_covers_get_the_default_colors() {
        let harness = harness();

        let response = harness
            .server
            .get("/gradient/album")
            .add_query_param("cover", "/assets/default-cover.svg")
            .await;
        response.assert_status_ok();

        let html = response.text();
        assert!(html.contains("--mesh-c0: #000000; --mesh-c1: #333333; --mesh-c2: #000000;"));
        assert!(html.contains("animation-duration: 18000ms;"));
    }

    #[tokio::test]
    async fn no_track_means_default_colors() {
        let harness = harness();

        let html = harness.server.get("/gradient/album").await.text();
        assert!(html.contains("--mesh-c0: #000000;"));
    }

    #[tokio::test]
    async fn foreign_covers_are_never_fetched() {
        use axum::{Router, routing::get};
        use axum_test::TestServer;
        use std::sync::{
            Arc,
            atomic::{AtomicUsize, Ordering},
        };

        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let elsewhere = TestServer::builder()
            .http_transport()
            .try_build(Router::new().route(
                "/internal.png",
                get(move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                    async { "secret" }
                }),
            ))
            .expect("failed to create test server");
        let target = elsewhere
            .server_address()
            .expect("server should have HTTP address")
            .join("internal.png")
            .expect("valid url")
            .to_string();

        let harness = harness();
        let html = harness
            .server
            .get("/gradient/album")
            .add_query_param("cover", &target)
            .await
            .text();

        assert!(html.contains("--mesh-c0: #000000;"));
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }
}
