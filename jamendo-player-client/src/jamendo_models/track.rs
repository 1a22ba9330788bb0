use jamendo_player_models::{DEFAULT_COVER, Track, UNKNOWN_ARTIST, UNKNOWN_TITLE};
use serde::{Deserialize, Serialize};

use super::{non_blank, number, string};

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JamendoTrack {
    #[serde(deserialize_with = "number")]
    pub id: u64,
    #[serde(default, deserialize_with = "string")]
    pub name: String,
    #[serde(default, deserialize_with = "string")]
    pub artist_name: String,
    #[serde(default, deserialize_with = "string")]
    pub audio: String,
    #[serde(default, deserialize_with = "string")]
    pub album_image: String,
    #[serde(default, deserialize_with = "number")]
    pub duration: u32,
    #[serde(default)]
    pub album_name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl From<JamendoTrack> for Track {
    fn from(value: JamendoTrack) -> Self {
        let cover = non_blank(value.album_image)
            .or(value.image.and_then(non_blank))
            .unwrap_or_else(|| DEFAULT_COVER.to_string());

        Self {
            id: value.id,
            title: non_blank(value.name).unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
            artist: non_blank(value.artist_name).unwrap_or_else(|| UNKNOWN_ARTIST.to_string()),
            url: value.audio,
            cover,
            duration_seconds: value.duration,
            status: Default::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_fall_back_to_placeholders() {
        let track: Track = JamendoTrack {
            id: 7,
            name: " ".into(),
            artist_name: "".into(),
            audio: "".into(),
            album_image: "".into(),
            duration: 90,
            ..Default::default()
        }
        .into();

        assert_eq!(track.title, UNKNOWN_TITLE);
        assert_eq!(track.artist, UNKNOWN_ARTIST);
        assert_eq!(track.cover, DEFAULT_COVER);
        assert_eq!(track.url, "");
        assert!(!track.is_playable());
    }

    #[test]
    fn track_image_is_used_when_album_image_is_missing() {
        let track: Track = JamendoTrack {
            id: 8,
            name: "Tide".into(),
            artist_name: "Mar".into(),
            audio: "https://stream".into(),
            image: Some("https://image".into()),
            ..Default::default()
        }
        .into();

        assert_eq!(track.cover, "https://image");
        assert!(track.is_playable());
    }
}
