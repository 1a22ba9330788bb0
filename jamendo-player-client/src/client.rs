use crate::{
    Error, Result,
    jamendo_models::{
        Response,
        album::JamendoAlbum,
        artist::JamendoArtist,
        playlist::{JamendoPlaylist, JamendoPlaylistTracks},
        radio::JamendoRadio,
        track::JamendoTrack,
    },
};
use reqwest::{Method, StatusCode};
use std::fmt::Display;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.jamendo.com/v3.0/";
/// Public client id of the Jamendo demo application.
pub const PUBLIC_CLIENT_ID: &str = "d26b98ea";

pub const POPULARITY_TOTAL_DESC: &str = "popularity_total_desc";
pub const CREATIONDATE_ASC: &str = "creationdate_asc";

#[derive(Debug, Clone)]
pub struct Client {
    client_id: String,
    base_url: Url,
    client: reqwest::Client,
}

pub fn new(client_id: &str) -> Result<Client> {
    with_base_url(client_id, DEFAULT_BASE_URL)
}

pub fn with_base_url(client_id: &str, base_url: &str) -> Result<Client> {
    let mut base_url = base_url.to_string();
    if !base_url.ends_with('/') {
        base_url.push('/');
    }

    let base_url = Url::parse(&base_url).map_err(|error| Error::BaseUrl {
        message: error.to_string(),
    })?;

    let http_client = reqwest::Client::builder()
        .user_agent(concat!("jamendo-player/", env!("CARGO_PKG_VERSION")))
        .build()?;

    Ok(Client {
        client_id: client_id.to_string(),
        base_url,
        client: http_client,
    })
}

#[derive(Debug, Clone, Copy)]
enum Endpoint {
    Tracks,
    Albums,
    Playlists,
    PlaylistTracks,
    Artists,
    Radios,
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let endpoint = match self {
            Endpoint::Tracks => "tracks/",
            Endpoint::Albums => "albums/",
            Endpoint::Playlists => "playlists/",
            Endpoint::PlaylistTracks => "playlists/tracks/",
            Endpoint::Artists => "artists/",
            Endpoint::Radios => "radios/",
        };

        f.write_str(endpoint)
    }
}

macro_rules! get {
    ($self:ident, $endpoint:expr, $params:expr) => {
        match $self.make_get_call($endpoint, $params).await {
            Ok(response) => match serde_json::from_str::<Response<_>>(response.as_str()) {
                Ok(response) => response.into_results(),
                Err(error) => Err(Error::DeserializeJSON {
                    message: error.to_string(),
                }),
            },
            Err(error) => Err(error),
        }
    };
}

impl Client {
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub async fn tracks(&self, limit: u32, offset: u32) -> Result<Vec<JamendoTrack>> {
        let params = [
            ("limit", limit.to_string()),
            ("offset", offset.to_string()),
            ("tags", "pop".to_string()),
            ("type", "single albumtrack".to_string()),
            ("featured", "1".to_string()),
            ("groupby", "artist_id".to_string()),
            ("boost", "popularity_total".to_string()),
        ];

        let tracks: Vec<JamendoTrack> = get!(self, Endpoint::Tracks, &params)?;
        debug!("tracks returned {} results", tracks.len());
        Ok(tracks)
    }

    pub async fn track(&self, id: u64) -> Result<Option<JamendoTrack>> {
        let params = [("id", id.to_string())];

        let tracks: Vec<JamendoTrack> = get!(self, Endpoint::Tracks, &params)?;
        debug!("track {id} returned {} results", tracks.len());
        Ok(tracks.into_iter().next())
    }

    pub async fn albums(&self, limit: u32, offset: u32, order: &str) -> Result<Vec<JamendoAlbum>> {
        let params = [
            ("limit", limit.to_string()),
            ("offset", offset.to_string()),
            ("order", order.to_string()),
        ];

        let albums: Vec<JamendoAlbum> = get!(self, Endpoint::Albums, &params)?;
        debug!("albums returned {} results", albums.len());
        Ok(albums)
    }

    pub async fn album(&self, id: u64) -> Result<Option<JamendoAlbum>> {
        let params = [("id", id.to_string())];

        let albums: Vec<JamendoAlbum> = get!(self, Endpoint::Albums, &params)?;
        Ok(albums.into_iter().next())
    }

    pub async fn playlists(
        &self,
        limit: u32,
        offset: u32,
        order: &str,
    ) -> Result<Vec<JamendoPlaylist>> {
        let params = [
            ("limit", limit.to_string()),
            ("offset", offset.to_string()),
            ("order", order.to_string()),
        ];

        let playlists: Vec<JamendoPlaylist> = get!(self, Endpoint::Playlists, &params)?;
        debug!("playlists returned {} results", playlists.len());
        Ok(playlists)
    }

    /// Playlists whose first track can actually be streamed.
    pub async fn playable_playlists(&self, limit: u32) -> Result<Vec<JamendoPlaylist>> {
        let playlists = self.playlists(limit, 0, CREATIONDATE_ASC).await?;
        let mut playable_playlists = Vec::with_capacity(playlists.len());

        for playlist in playlists {
            match self.playlist_tracks(playlist.id, 1).await {
                Ok(tracks) => {
                    let has_playable_track = tracks.iter().any(|track| !track.audio.trim().is_empty());

                    if has_playable_track {
                        playable_playlists.push(playlist);
                    }
                }
                Err(error) => {
                    error!("error fetching tracks for playlist {}: {}", playlist.id, error);
                }
            }
        }

        debug!("{} playable playlists", playable_playlists.len());
        Ok(playable_playlists)
    }

    pub async fn playlist(&self, id: u64) -> Result<Option<JamendoPlaylist>> {
        let params = [("id", id.to_string())];

        let playlists: Vec<JamendoPlaylist> = get!(self, Endpoint::Playlists, &params)?;
        Ok(playlists.into_iter().next())
    }

    pub async fn search_playlists(&self, name: &str, limit: u32) -> Result<Vec<JamendoPlaylist>> {
        let params = [("namesearch", name.to_string()), ("limit", limit.to_string())];

        let playlists: Vec<JamendoPlaylist> = get!(self, Endpoint::Playlists, &params)?;
        debug!("search for {name:?} returned {} playlists", playlists.len());
        Ok(playlists)
    }

    pub async fn playlist_name(&self, id: u64) -> Option<String> {
        match self.playlist(id).await {
            Ok(playlist) => playlist.map(|playlist| playlist.name),
            Err(error) => {
                error!("error fetching playlist name: {}", error);
                None
            }
        }
    }

    pub async fn playlist_tracks(&self, id: u64, limit: u32) -> Result<Vec<JamendoTrack>> {
        let params = [("id", id.to_string()), ("limit", limit.to_string())];

        let playlists: Vec<JamendoPlaylistTracks> =
            get!(self, Endpoint::PlaylistTracks, &params)?;

        let tracks: Vec<JamendoTrack> = playlists
            .into_iter()
            .flat_map(|playlist| playlist.tracks)
            .collect();

        debug!("playlist {id} returned {} tracks", tracks.len());
        Ok(tracks)
    }

    pub async fn artists(
        &self,
        limit: u32,
        offset: u32,
        order: &str,
    ) -> Result<Vec<JamendoArtist>> {
        let params = [
            ("limit", limit.to_string()),
            ("offset", offset.to_string()),
            ("order", order.to_string()),
        ];

        let artists: Vec<JamendoArtist> = get!(self, Endpoint::Artists, &params)?;
        debug!("artists returned {} results", artists.len());
        Ok(artists)
    }

    pub async fn artist(&self, id: u64) -> Result<Option<JamendoArtist>> {
        let params = [("id", id.to_string())];

        let artists: Vec<JamendoArtist> = get!(self, Endpoint::Artists, &params)?;
        Ok(artists.into_iter().next())
    }

    pub async fn radios(&self, limit: u32) -> Result<Vec<JamendoRadio>> {
        let params = [("limit", limit.to_string())];

        let radios: Vec<JamendoRadio> = get!(self, Endpoint::Radios, &params)?;
        debug!("radios returned {} results", radios.len());
        Ok(radios)
    }

    fn build_url(&self, endpoint: Endpoint, params: &[(&str, String)]) -> Result<Url> {
        let mut url = self
            .base_url
            .join(&endpoint.to_string())
            .map_err(|error| Error::BaseUrl {
                message: error.to_string(),
            })?;

        url.query_pairs_mut()
            .append_pair("client_id", &self.client_id)
            .append_pair("format", "json")
            .extend_pairs(params.iter().map(|(key, value)| (*key, value.as_str())));

        Ok(url)
    }

    async fn make_get_call(&self, endpoint: Endpoint, params: &[(&str, String)]) -> Result<String> {
        let url = self.build_url(endpoint, params)?;

        debug!("calling {} endpoint, with params {params:?}", endpoint);
        let response = self.client.request(Method::GET, url).send().await?;

        if response.status() == StatusCode::OK {
            Ok(response.text().await?)
        } else {
            Err(Error::Api {
                message: format!("Jamendo API error: {}", response.status().as_u16()),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Json, Router,
        extract::{Query, State},
        http::StatusCode as HttpStatus,
        response::{IntoResponse, Response as HttpResponse},
        routing::get,
    };
    use axum_test::TestServer;
    use serde_json::{Value, json};
    use std::{
        collections::HashMap,
        sync::{Arc, Mutex},
    };

    type Seen = Arc<Mutex<Vec<(String, HashMap<String, String>)>>>;

    fn envelope(results: Value) -> Json<Value> {
        let count = results.as_array().map_or(0, |results| results.len());
        Json(json!({
            "headers": {
                "status": "success",
                "code": 0,
                "error_message": "",
                "warnings": "",
                "results_count": count
            },
            "results": results
        }))
    }

    async fn tracks_handler(
        State(seen): State<Seen>,
        Query(query): Query<HashMap<String, String>>,
    ) -> Json<Value> {
        seen.lock().unwrap().push(("tracks".into(), query));

        envelope(json!([
            {"id": "1", "name": "Sunrise", "artist_name": "Ola", "audio": "https://stream/1", "album_image": "https://img/1", "duration": 200},
            {"id": "2", "name": "", "artist_name": "", "audio": "", "album_image": "", "duration": "95"}
        ]))
    }

    async fn playlists_handler(
        State(seen): State<Seen>,
        Query(query): Query<HashMap<String, String>>,
    ) -> HttpResponse {
        seen.lock().unwrap().push(("playlists".into(), query.clone()));

        if query.get("id").map(String::as_str) == Some("404") {
            return HttpStatus::INTERNAL_SERVER_ERROR.into_response();
        }

        if let Some(id) = query.get("id") {
            return envelope(json!([{"id": id, "name": format!("Playlist {id}"), "user_name": "dj"}]))
                .into_response();
        }

        envelope(json!([
            {"id": "10", "name": "Morning", "creationdate": "2012-01-01", "user_id": "3", "user_name": "dj", "zip": "", "shorturl": "", "shareurl": "https://jamen.do/l/10"},
            {"id": "11", "name": "Silent", "creationdate": "2012-01-02", "user_id": "3", "user_name": "dj", "zip": "", "shorturl": "", "shareurl": ""},
            {"id": "12", "name": "Broken", "creationdate": "2012-01-03", "user_id": "3", "user_name": "dj", "zip": "", "shorturl": "", "shareurl": ""}
        ]))
        .into_response()
    }

    async fn playlist_tracks_handler(
        State(seen): State<Seen>,
        Query(query): Query<HashMap<String, String>>,
    ) -> HttpResponse {
        seen.lock().unwrap().push(("playlist_tracks".into(), query.clone()));

        match query.get("id").map(String::as_str) {
            Some("10") => envelope(json!([{
                "id": "10",
                "name": "Morning",
                "tracks": [
                    {"id": "100", "name": "Dawn", "artist_name": "Ola", "audio": "https://stream/100", "album_image": "", "duration": "180", "position": "1"},
                    {"id": "101", "name": "Noon", "artist_name": "Ola", "audio": "https://stream/101", "album_image": "", "duration": "150", "position": "2"}
                ]
            }]))
            .into_response(),
            Some("11") => envelope(json!([{
                "id": "11",
                "name": "Silent",
                "tracks": [{"id": "110", "name": "Hush", "artist_name": "Ola", "audio": " ", "duration": "10"}]
            }]))
            .into_response(),
            _ => HttpStatus::INTERNAL_SERVER_ERROR.into_response(),
        }
    }

    async fn failing_handler() -> Json<Value> {
        Json(json!({
            "headers": {"status": "failed", "code": 5, "error_message": "Your credential is not authorized.", "results_count": 0},
            "results": []
        }))
    }

    fn mock_api() -> (TestServer, Seen) {
        let seen: Seen = Default::default();

        let app = Router::new()
            .route("/tracks/", get(tracks_handler))
            .route("/playlists/", get(playlists_handler))
            .route("/playlists/tracks/", get(playlist_tracks_handler))
            .route("/radios/", get(failing_handler))
            .with_state(seen.clone());

        let server = TestServer::builder()
            .http_transport()
            .try_build(app)
            .expect("failed to create test server");

        (server, seen)
    }

    fn client_for(server: &TestServer) -> Client {
        let base = server
            .server_address()
            .expect("server should have HTTP address")
            .to_string();

        with_base_url("test-client", &base).unwrap()
    }

    #[test]
    fn every_url_carries_client_id_and_format_first() {
        let client = with_base_url("abc", "http://localhost:9000/v3.0").unwrap();
        let url = client
            .build_url(
                Endpoint::Tracks,
                &[("limit", "20".into()), ("type", "single albumtrack".into())],
            )
            .unwrap();

        assert_eq!(
            url.as_str(),
            "http://localhost:9000/v3.0/tracks/?client_id=abc&format=json&limit=20&type=single+albumtrack"
        );
    }

    #[test]
    fn nested_endpoints_join_onto_the_base() {
        let client = new("abc").unwrap();
        let url = client
            .build_url(Endpoint::PlaylistTracks, &[("id", "5".into())])
            .unwrap();

        assert_eq!(
            url.as_str(),
            "https://api.jamendo.com/v3.0/playlists/tracks/?client_id=abc&format=json&id=5"
        );
    }

    #[tokio::test]
    async fn tracks_are_filtered_to_featured_pop() {
        let (server, seen) = mock_api();
        let client = client_for(&server);

        let tracks = client.tracks(20, 0).await.unwrap();

        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].name, "Sunrise");
        assert_eq!(tracks[1].duration, 95);

        let seen = seen.lock().unwrap();
        let (_, query) = &seen[0];
        assert_eq!(query["client_id"], "test-client");
        assert_eq!(query["format"], "json");
        assert_eq!(query["limit"], "20");
        assert_eq!(query["offset"], "0");
        assert_eq!(query["tags"], "pop");
        assert_eq!(query["type"], "single albumtrack");
        assert_eq!(query["featured"], "1");
        assert_eq!(query["groupby"], "artist_id");
        assert_eq!(query["boost"], "popularity_total");
    }

    #[tokio::test]
    async fn playlist_tracks_are_flattened() {
        let (server, seen) = mock_api();
        let client = client_for(&server);

        let tracks = client.playlist_tracks(10, 50).await.unwrap();

        assert_eq!(
            tracks.iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![100, 101]
        );
        assert_eq!(tracks[0].duration, 180);
        assert_eq!(seen.lock().unwrap()[0].1["limit"], "50");
    }

    #[tokio::test]
    async fn only_playlists_with_a_streamable_first_track_are_playable() {
        let (server, seen) = mock_api();
        let client = client_for(&server);

        let playlists = client.playable_playlists(3).await.unwrap();

        assert_eq!(
            playlists.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![10]
        );

        let seen = seen.lock().unwrap();
        let (_, listing) = &seen[0];
        assert_eq!(listing["order"], CREATIONDATE_ASC);
        assert!(
            seen.iter()
                .filter(|(name, _)| name == "playlist_tracks")
                .all(|(_, query)| query["limit"] == "1")
        );
    }

    #[tokio::test]
    async fn playlist_name_swallows_errors() {
        let (server, _) = mock_api();
        let client = client_for(&server);

        assert_eq!(client.playlist_name(7).await, Some("Playlist 7".to_string()));
        assert_eq!(client.playlist_name(404).await, None);
    }

    #[tokio::test]
    async fn http_errors_carry_the_status_code() {
        let (server, _) = mock_api();
        let client = client_for(&server);

        let error = client.playlist(404).await.unwrap_err();
        assert_eq!(error.to_string(), "Jamendo API error: 500");
    }

    #[tokio::test]
    async fn failed_envelopes_are_errors() {
        let (server, _) = mock_api();
        let client = client_for(&server);

        assert!(matches!(
            client.radios(10).await,
            Err(Error::Api { .. })
        ));
    }

    #[tokio::test]
    async fn search_uses_namesearch() {
        let (server, seen) = mock_api();
        let client = client_for(&server);

        client.search_playlists("chill", 10).await.unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen[0].1["namesearch"], "chill");
        assert_eq!(seen[0].1["limit"], "10");
    }
}
