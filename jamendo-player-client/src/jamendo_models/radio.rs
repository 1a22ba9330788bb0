use jamendo_player_models::Radio;
use serde::{Deserialize, Serialize};

use super::{non_blank, number, string};

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JamendoRadio {
    #[serde(deserialize_with = "number")]
    pub id: u64,
    #[serde(default, deserialize_with = "string")]
    pub name: String,
    #[serde(default, deserialize_with = "string")]
    pub dispname: String,
    #[serde(default, deserialize_with = "string")]
    pub image: String,
    #[serde(default)]
    pub stream: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<JamendoRadio> for Radio {
    fn from(value: JamendoRadio) -> Self {
        Self {
            id: value.id,
            name: non_blank(value.dispname).unwrap_or(value.name),
            image: non_blank(value.image),
            stream: value.stream.and_then(non_blank),
        }
    }
}
