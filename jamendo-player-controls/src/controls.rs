use tokio::sync::mpsc::UnboundedSender;

/// Events reported by the browser's audio element for the track at a queue position.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum AudioEvent {
    LoadStart,
    Waiting,
    CanPlay,
    CanPlayThrough,
    LoadedMetadata { duration: f64 },
    TimeUpdate { current: f64, duration: f64 },
    Playing,
    PlayFailed,
    Ended,
}

#[derive(Debug)]
pub enum ControlCommand {
    Radio { limit: u32 },
    Playlist { id: u64 },
    SkipToPosition { position: u32 },
    Next,
    Previous,
    PlayPause,
    Play,
    Pause,
    Seek { fraction: f64 },
    SetVolume { volume: u8 },
    Audio { position: u32, event: AudioEvent },
}

#[derive(Debug, Clone)]
pub struct Controls {
    tx: UnboundedSender<ControlCommand>,
}

impl Controls {
    pub fn new(tx: UnboundedSender<ControlCommand>) -> Self {
        Self { tx }
    }

    fn send(&self, command: ControlCommand) {
        if let Err(error) = self.tx.send(command) {
            tracing::error!("player is gone, dropping {:?}", error.0);
        }
    }

    pub fn play_radio(&self, limit: u32) {
        self.send(ControlCommand::Radio { limit });
    }

    pub fn play_playlist(&self, id: u64) {
        self.send(ControlCommand::Playlist { id });
    }

    pub fn skip_to_position(&self, position: u32) {
        self.send(ControlCommand::SkipToPosition { position });
    }

    pub fn next(&self) {
        self.send(ControlCommand::Next);
    }

    pub fn previous(&self) {
        self.send(ControlCommand::Previous);
    }

    pub fn play_pause(&self) {
        self.send(ControlCommand::PlayPause);
    }

    pub fn play(&self) {
        self.send(ControlCommand::Play);
    }

    pub fn pause(&self) {
        self.send(ControlCommand::Pause);
    }

    /// Seek to a fraction (0 to 1) of the current track's duration.
    pub fn seek(&self, fraction: f64) {
        self.send(ControlCommand::Seek { fraction });
    }

    pub fn set_volume(&self, volume: u8) {
        self.send(ControlCommand::SetVolume { volume });
    }

    pub fn audio_event(&self, position: u32, event: AudioEvent) {
        self.send(ControlCommand::Audio { position, event });
    }
}
