use jamendo_player_models::{Album, DEFAULT_COVER};
use serde::{Deserialize, Serialize};

use super::{non_blank, number, string};

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JamendoAlbum {
    #[serde(deserialize_with = "number")]
    pub id: u64,
    #[serde(default, deserialize_with = "string")]
    pub name: String,
    #[serde(default, deserialize_with = "string")]
    pub artist_name: String,
    #[serde(default, deserialize_with = "string")]
    pub image: String,
    #[serde(default, deserialize_with = "string")]
    pub releasedate: String,
}

impl From<JamendoAlbum> for Album {
    fn from(value: JamendoAlbum) -> Self {
        Self {
            id: value.id,
            title: value.name,
            artist: value.artist_name,
            image: non_blank(value.image).unwrap_or_else(|| DEFAULT_COVER.to_string()),
            release_date: value.releasedate,
        }
    }
}
