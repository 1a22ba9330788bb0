use jamendo_player_models::Artist;
use serde::{Deserialize, Serialize};

use super::{non_blank, number, string};

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JamendoArtist {
    #[serde(deserialize_with = "number")]
    pub id: u64,
    #[serde(default, deserialize_with = "string")]
    pub name: String,
    #[serde(default, deserialize_with = "string")]
    pub image: String,
    #[serde(default, deserialize_with = "number")]
    pub popularity: f64,
}

impl From<JamendoArtist> for Artist {
    fn from(value: JamendoArtist) -> Self {
        Self {
            id: value.id,
            name: value.name,
            image: non_blank(value.image),
            popularity: value.popularity,
        }
    }
}
