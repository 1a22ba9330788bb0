use jamendo_player_models::Playlist;
use serde::{Deserialize, Serialize};

use super::{non_blank, number, string, track::JamendoTrack};

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JamendoPlaylist {
    #[serde(deserialize_with = "number")]
    pub id: u64,
    #[serde(default, deserialize_with = "string")]
    pub name: String,
    #[serde(default, deserialize_with = "string")]
    pub creationdate: String,
    #[serde(default, deserialize_with = "number")]
    pub user_id: u64,
    #[serde(default, deserialize_with = "string")]
    pub user_name: String,
    #[serde(default, deserialize_with = "string")]
    pub zip: String,
    #[serde(default, deserialize_with = "string")]
    pub shorturl: String,
    #[serde(default, deserialize_with = "string")]
    pub shareurl: String,
}

/// Result row of `playlists/tracks/`: the playlist with its tracks nested inside.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JamendoPlaylistTracks {
    #[serde(deserialize_with = "number")]
    pub id: u64,
    #[serde(default, deserialize_with = "string")]
    pub name: String,
    #[serde(default)]
    pub tracks: Vec<JamendoTrack>,
}

impl From<JamendoPlaylist> for Playlist {
    fn from(value: JamendoPlaylist) -> Self {
        Self {
            id: value.id,
            name: value.name,
            user_name: value.user_name,
            share_url: non_blank(value.shareurl),
        }
    }
}
