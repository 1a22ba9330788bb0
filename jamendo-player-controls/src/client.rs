use jamendo_player_models::{Playlist, Track};
use moka::future::Cache;
use time::Duration;

use crate::{PLAYLIST_TRACK_LIMIT, error::Error, simple_cache::SimpleCache};

type JamendoClient = jamendo_player_client::client::Client;
type Result<T, E = Error> = std::result::Result<T, E>;

/// Catalog access for the player, converting API results into domain models.
#[derive(Debug)]
pub struct Client {
    jamendo_client: JamendoClient,
    playable_playlists_cache: SimpleCache<(u32, Vec<Playlist>)>,
    playlist_tracks_cache: Cache<u64, Vec<Track>>,
    playlist_name_cache: Cache<u64, String>,
    search_cache: Cache<String, Vec<Playlist>>,
}

impl Client {
    pub fn new(client_id: &str) -> Result<Self> {
        Ok(Self::from_jamendo_client(
            jamendo_player_client::client::new(client_id)?,
        ))
    }

    pub fn with_base_url(client_id: &str, base_url: &str) -> Result<Self> {
        Ok(Self::from_jamendo_client(
            jamendo_player_client::client::with_base_url(client_id, base_url)?,
        ))
    }

    fn from_jamendo_client(jamendo_client: JamendoClient) -> Self {
        let playlist_tracks_cache = moka::future::CacheBuilder::new(1000)
            .time_to_live(std::time::Duration::from_secs(60 * 60 * 24))
            .build();

        let playlist_name_cache = moka::future::CacheBuilder::new(1000)
            .time_to_live(std::time::Duration::from_secs(60 * 60 * 24))
            .build();

        let search_cache = moka::future::CacheBuilder::new(100)
            .time_to_live(std::time::Duration::from_secs(60 * 60))
            .build();

        Self {
            jamendo_client,
            playable_playlists_cache: SimpleCache::new(Duration::hours(1)),
            playlist_tracks_cache,
            playlist_name_cache,
            search_cache,
        }
    }

    pub fn client_id(&self) -> &str {
        self.jamendo_client.client_id()
    }

    /// Fresh featured pop tracks, never cached so every radio start differs.
    pub async fn radio_tracks(&self, limit: u32) -> Result<Vec<Track>> {
        let tracks = self.jamendo_client.tracks(limit, 0).await?;
        Ok(tracks.into_iter().map(Into::into).collect())
    }

    pub async fn playlist_tracks(&self, id: u64) -> Result<Vec<Track>> {
        if let Some(cache) = self.playlist_tracks_cache.get(&id).await {
            return Ok(cache);
        }

        let tracks: Vec<Track> = self
            .jamendo_client
            .playlist_tracks(id, PLAYLIST_TRACK_LIMIT)
            .await?
            .into_iter()
            .map(Into::into)
            .collect();

        self.playlist_tracks_cache.insert(id, tracks.clone()).await;
        Ok(tracks)
    }

    pub async fn playlist_name(&self, id: u64) -> Option<String> {
        if let Some(cache) = self.playlist_name_cache.get(&id).await {
            return Some(cache);
        }

        let name = self.jamendo_client.playlist_name(id).await?;
        self.playlist_name_cache.insert(id, name.clone()).await;
        Some(name)
    }

    pub async fn playable_playlists(&self, limit: u32) -> Result<Vec<Playlist>> {
        if let Some((cached_limit, cache)) = self.playable_playlists_cache.get().await
            && cached_limit == limit
        {
            return Ok(cache);
        }

        let playlists: Vec<Playlist> = self
            .jamendo_client
            .playable_playlists(limit)
            .await?
            .into_iter()
            .map(Into::into)
            .collect();

        for playlist in &playlists {
            self.playlist_name_cache
                .insert(playlist.id, playlist.name.clone())
                .await;
        }

        self.playable_playlists_cache
            .set((limit, playlists.clone()))
            .await;
        Ok(playlists)
    }

    pub async fn search_playlists(&self, query: &str, limit: u32) -> Result<Vec<Playlist>> {
        let query = query.trim();
        let key = format!("{limit}:{}", query.to_lowercase());

        if let Some(cache) = self.search_cache.get(&key).await {
            return Ok(cache);
        }

        let playlists: Vec<Playlist> = self
            .jamendo_client
            .search_playlists(query, limit)
            .await?
            .into_iter()
            .map(Into::into)
            .collect();

        self.search_cache.insert(key, playlists.clone()).await;
        Ok(playlists)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use axum::{Json, Router, extract::Query, http::StatusCode, response::IntoResponse, routing::get};
    use axum_test::TestServer;
    use serde_json::{Value, json};
    use std::{
        collections::HashMap,
        sync::{
            Arc,
            atomic::{AtomicUsize, Ordering},
        },
    };

    fn envelope(results: Value) -> Json<Value> {
        Json(json!({
            "headers": {"status": "success", "code": 0, "error_message": "", "results_count": 0},
            "results": results
        }))
    }

    /// A stand-in for the Jamendo API. Playlist 9 fails, playlist 8 has nothing playable.
    pub(crate) fn mock_jamendo(calls: Arc<AtomicUsize>) -> TestServer {
        let tracks_calls = calls.clone();
        let playlist_tracks_calls = calls.clone();

        let app = Router::new()
            .route(
                "/tracks/",
                get(move || {
                    tracks_calls.fetch_add(1, Ordering::SeqCst);
                    async {
                        envelope(json!([
                            {"id": 1, "name": "One", "artist_name": "A", "audio": "https://stream/1", "album_image": "https://img/1", "duration": 120},
                            {"id": 2, "name": "Two", "artist_name": "B", "audio": "", "album_image": "", "duration": 90},
                            {"id": 3, "name": "Three", "artist_name": "C", "audio": "https://stream/3", "album_image": "", "duration": 60}
                        ]))
                    }
                }),
            )
            .route(
                "/playlists/",
                get(|Query(query): Query<HashMap<String, String>>| async move {
                    if let Some(name) = query.get("namesearch") {
                        return envelope(json!([{"id": "6", "name": name, "user_name": "dj"}]))
                            .into_response();
                    }

                    match query.get("id").map(String::as_str) {
                        Some("9") => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
                        Some("5") => {
                            // slow name lookup
                            tokio::time::sleep(std::time::Duration::from_millis(300)).await;
                            envelope(json!([{"id": "5", "name": "Mix 5"}])).into_response()
                        }
                        Some(id) => envelope(json!([{"id": id, "name": format!("Mix {id}")}]))
                            .into_response(),
                        None => envelope(json!([
                            {"id": "7", "name": "Mix 7", "user_name": "dj", "shareurl": ""}
                        ]))
                        .into_response(),
                    }
                }),
            )
            .route(
                "/playlists/tracks/",
                get(move |Query(query): Query<HashMap<String, String>>| {
                    playlist_tracks_calls.fetch_add(1, Ordering::SeqCst);
                    async move {
                        match query.get("id").map(String::as_str) {
                            Some("9") => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
                            Some("8") => envelope(json!([{"id": "8", "name": "Mix 8", "tracks": [
                                {"id": "80", "name": "Gone", "artist_name": "A", "audio": "", "duration": "10"}
                            ]}]))
                            .into_response(),
                            Some(id) => envelope(json!([{"id": id, "name": format!("Mix {id}"), "tracks": [
                                {"id": "70", "name": "First", "artist_name": "A", "audio": "https://stream/70", "album_image": "https://img/70", "duration": "100"},
                                {"id": "71", "name": "Second", "artist_name": "A", "audio": "https://stream/71", "album_image": "", "duration": "100"}
                            ]}]))
                            .into_response(),
                            None => StatusCode::BAD_REQUEST.into_response(),
                        }
                    }
                }),
            );

        TestServer::builder()
            .http_transport()
            .try_build(app)
            .expect("failed to create test server")
    }

    pub(crate) fn client_for(server: &TestServer) -> Client {
        let base = server
            .server_address()
            .expect("server should have HTTP address")
            .to_string();

        Client::with_base_url("test-client", &base).unwrap()
    }

    #[tokio::test]
    async fn radio_tracks_are_mapped_to_domain_tracks() {
        let server = mock_jamendo(Default::default());
        let client = client_for(&server);

        let tracks = client.radio_tracks(20).await.unwrap();

        assert_eq!(tracks.len(), 3);
        assert_eq!(tracks[0].title, "One");
        assert_eq!(tracks[0].cover, "https://img/1");
        assert_eq!(tracks[1].cover, jamendo_player_models::DEFAULT_COVER);
    }

    #[tokio::test]
    async fn playlist_tracks_are_cached() {
        let calls = Arc::new(AtomicUsize::new(0));
        let server = mock_jamendo(calls.clone());
        let client = client_for(&server);

        let first = client.playlist_tracks(7).await.unwrap();
        let second = client.playlist_tracks(7).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn playlist_names_come_from_listing_or_lookup() {
        let server = mock_jamendo(Default::default());
        let client = client_for(&server);

        assert_eq!(client.playlist_name(3).await, Some("Mix 3".to_string()));
        assert_eq!(client.playlist_name(9).await, None);
    }

    #[tokio::test]
    async fn playable_playlists_are_domain_playlists() {
        let server = mock_jamendo(Default::default());
        let client = client_for(&server);

        let playlists = client.playable_playlists(10).await.unwrap();

        assert_eq!(playlists.len(), 1);
        assert_eq!(playlists[0].id, 7);
        assert_eq!(playlists[0].name, "Mix 7");
    }

    #[tokio::test]
    async fn playable_listing_is_cached_per_limit() {
        let calls = Arc::new(AtomicUsize::new(0));
        let server = mock_jamendo(calls.clone());
        let client = client_for(&server);

        client.playable_playlists(10).await.unwrap();
        client.playable_playlists(10).await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        client.playable_playlists(3).await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn search_sends_the_name_as_typed() {
        let server = mock_jamendo(Default::default());
        let client = client_for(&server);

        let playlists = client.search_playlists("  Chill Vibes ", 10).await.unwrap();
        assert_eq!(playlists[0].name, "Chill Vibes");

        // a different case reuses the cached result
        let playlists = client.search_playlists("chill vibes", 10).await.unwrap();
        assert_eq!(playlists[0].name, "Chill Vibes");
    }
}
