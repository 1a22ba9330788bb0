pub const DEFAULT_COVER: &str = "/assets/default-cover.svg";
pub const UNKNOWN_TITLE: &str = "Unknown Title";
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

#[derive(Debug, Default, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TrackStatus {
    Played,
    Playing,
    #[default]
    Unplayed,
}

#[derive(Default, Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Track {
    pub id: u64,
    pub title: String,
    pub artist: String,
    pub url: String,
    pub cover: String,
    pub duration_seconds: u32,
    pub status: TrackStatus,
}

impl Track {
    /// A track can be handed to the audio element only if it carries a real stream url.
    pub fn is_playable(&self) -> bool {
        let url = self.url.trim();
        !url.is_empty() && url != "null" && url != "undefined"
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Playlist {
    pub id: u64,
    pub name: String,
    pub user_name: String,
    pub share_url: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Album {
    pub id: u64,
    pub title: String,
    pub artist: String,
    pub image: String,
    pub release_date: String,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Artist {
    pub id: u64,
    pub name: String,
    pub image: Option<String>,
    pub popularity: f64,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Radio {
    pub id: u64,
    pub name: String,
    pub image: Option<String>,
    pub stream: Option<String>,
}
