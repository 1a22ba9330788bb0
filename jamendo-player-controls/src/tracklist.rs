use crate::models::{Track, TrackStatus};

pub const RADIO_SOURCE_NAME: &str = "Sit back and enjoy";
pub const NO_TRACKS: &str = "No tracks";

#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub enum TracklistType {
    Radio,
    Playlist {
        id: u64,
    },
    #[default]
    None,
}

#[derive(Default, Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Tracklist {
    pub(crate) queue: Vec<Track>,
    pub(crate) list_type: TracklistType,
    pub(crate) source_name: String,
    #[serde(skip)]
    pub(crate) fetching: bool,
}

#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub enum Status {
    Playing,
    Paused,
    #[default]
    Stopped,
}

impl Tracklist {
    pub fn new() -> Self {
        Default::default()
    }

    /// An empty list shown while tracks for `list_type` are requested.
    pub fn fetching(list_type: TracklistType, source_name: impl Into<String>) -> Self {
        Self {
            queue: vec![],
            list_type,
            source_name: source_name.into(),
            fetching: true,
        }
    }

    /// Builds a list of the playable `tracks`, positioned on the first one.
    pub fn with_tracks(
        list_type: TracklistType,
        source_name: impl Into<String>,
        tracks: Vec<Track>,
    ) -> Self {
        let mut tracklist = Self {
            queue: tracks.into_iter().filter(Track::is_playable).collect(),
            list_type,
            source_name: source_name.into(),
            fetching: false,
        };

        if tracklist.queue.is_empty() {
            tracklist.source_name = NO_TRACKS.to_string();
        } else {
            tracklist.skip_to_track(0);
        }

        tracklist
    }

    pub fn radio(tracks: Vec<Track>) -> Self {
        Self::with_tracks(TracklistType::Radio, RADIO_SOURCE_NAME, tracks)
    }

    pub fn playlist(id: u64, name: impl Into<String>, tracks: Vec<Track>) -> Self {
        Self::with_tracks(TracklistType::Playlist { id }, name, tracks)
    }

    /// What is left after a failed fetch.
    pub fn failed(list_type: TracklistType) -> Self {
        Self {
            queue: vec![],
            list_type,
            source_name: NO_TRACKS.to_string(),
            fetching: false,
        }
    }

    pub fn queue(&self) -> &Vec<Track> {
        &self.queue
    }

    pub fn total(&self) -> u32 {
        self.queue.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn is_fetching(&self) -> bool {
        self.fetching
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn list_type(&self) -> &TracklistType {
        &self.list_type
    }

    pub fn current_position(&self) -> u32 {
        self.queue
            .iter()
            .position(|t| t.status == TrackStatus::Playing)
            .map(|x| x as u32)
            .unwrap_or(0)
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.queue.iter().find(|t| t.status == TrackStatus::Playing)
    }

    /// Position after the current one, wrapping to the start.
    pub fn next_position(&self) -> Option<u32> {
        let total = self.total();
        (total > 0).then(|| (self.current_position() + 1) % total)
    }

    /// Position before the current one, wrapping to the end.
    pub fn previous_position(&self) -> Option<u32> {
        let total = self.total();
        (total > 0).then(|| (self.current_position() + total - 1) % total)
    }

    pub(crate) fn skip_to_track(&mut self, new_position: u32) -> Option<&Track> {
        let mut new_track: Option<&Track> = None;

        for (position, queue_item) in self.queue.iter_mut().enumerate() {
            match (position as u32).cmp(&new_position) {
                std::cmp::Ordering::Less => {
                    queue_item.status = TrackStatus::Played;
                }
                std::cmp::Ordering::Equal => {
                    queue_item.status = TrackStatus::Playing;
                    new_track = Some(queue_item);
                }
                std::cmp::Ordering::Greater => {
                    queue_item.status = TrackStatus::Unplayed;
                }
            }
        }

        new_track
    }
}
