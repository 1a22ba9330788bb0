use crate::{Status, time::TimeData, tracklist::Tracklist};

#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    Status { status: Status },
    Loading { loading: bool },
    Time { time: TimeData },
    /// The audio element should jump to `seconds`.
    Seek { seconds: f64 },
    Volume { volume: u8 },
    CurrentTrackList { tracklist: Tracklist },
    Message { message: Message },
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Error(String),
    Warning(String),
    Success(String),
    Info(String),
}
