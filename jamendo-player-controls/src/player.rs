use std::sync::Arc;

use tokio::{
    select,
    sync::{
        RwLock,
        mpsc::{UnboundedReceiver, unbounded_channel},
    },
};

use crate::{
    Result, Status,
    broadcast::Broadcast,
    client::Client,
    controls::{AudioEvent, ControlCommand, Controls},
    notification::{Message, Notification},
    readonly::ReadOnly,
    time::TimeData,
    tracklist::{Tracklist, TracklistType},
};

/// The single playback session. The browser's audio element follows it through notifications.
pub struct Player {
    tracklist: Arc<RwLock<Tracklist>>,
    target_status: Arc<RwLock<Status>>,
    loading: Arc<RwLock<bool>>,
    time: Arc<RwLock<TimeData>>,
    volume: Arc<RwLock<u8>>,
    client: Arc<Client>,
    broadcast: Arc<Broadcast>,
    controls_rx: UnboundedReceiver<ControlCommand>,
    controls: Controls,
}

impl Player {
    pub fn new(tracklist: Tracklist, client: Arc<Client>, volume: u8) -> Self {
        let (controls_tx, controls_rx) = unbounded_channel();

        // A restored list waits for the user to press play.
        let target_status = if tracklist.is_empty() {
            Status::Stopped
        } else {
            Status::Paused
        };

        Self {
            tracklist: Arc::new(RwLock::new(Tracklist {
                fetching: false,
                ..tracklist
            })),
            target_status: Arc::new(RwLock::new(target_status)),
            loading: Default::default(),
            time: Default::default(),
            volume: Arc::new(RwLock::new(volume.min(100))),
            client,
            broadcast: Arc::new(Broadcast::new()),
            controls_rx,
            controls: Controls::new(controls_tx),
        }
    }

    pub fn controls(&self) -> Controls {
        self.controls.clone()
    }

    pub fn broadcast(&self) -> Arc<Broadcast> {
        self.broadcast.clone()
    }

    pub fn client(&self) -> Arc<Client> {
        self.client.clone()
    }

    pub fn tracklist(&self) -> ReadOnly<Tracklist> {
        self.tracklist.clone().into()
    }

    pub fn status(&self) -> ReadOnly<Status> {
        self.target_status.clone().into()
    }

    pub fn loading(&self) -> ReadOnly<bool> {
        self.loading.clone().into()
    }

    pub fn time(&self) -> ReadOnly<TimeData> {
        self.time.clone().into()
    }

    pub fn volume(&self) -> ReadOnly<u8> {
        self.volume.clone().into()
    }

    fn notify(&self, notification: Notification) {
        if let Err(error) = self.broadcast.send(notification) {
            tracing::error!("unable to broadcast: {error}");
        }
    }

    fn error_message(&self, message: String) {
        self.broadcast.send_message(Message::Error(message));
    }

    async fn set_target_status(&self, status: Status) {
        *self.target_status.write().await = status;
        self.notify(Notification::Status { status });
    }

    async fn set_loading(&self, loading: bool) {
        let mut current = self.loading.write().await;
        if *current == loading {
            return;
        }

        *current = loading;
        drop(current);
        self.notify(Notification::Loading { loading });
    }

    async fn set_time(&self, time: TimeData) {
        *self.time.write().await = time;
        self.notify(Notification::Time { time });
    }

    async fn set_volume(&self, volume: u8) {
        let volume = volume.min(100);
        *self.volume.write().await = volume;
        self.notify(Notification::Volume { volume });
    }

    async fn set_tracklist(&self, tracklist: Tracklist) {
        *self.tracklist.write().await = tracklist.clone();
        self.notify(Notification::CurrentTrackList { tracklist });
    }

    /// Called whenever a different track becomes current.
    async fn track_changed(&self) {
        self.set_time(TimeData::default()).await;

        let has_track = self.tracklist.read().await.current_track().is_some();

        if has_track {
            self.set_loading(true).await;
            self.set_target_status(Status::Playing).await;
        } else {
            self.set_loading(false).await;
            self.set_target_status(Status::Stopped).await;
        }
    }

    async fn new_queue(&self, tracklist: Tracklist) {
        tracing::info!(
            "new tracklist {:?} with {} tracks",
            tracklist.list_type(),
            tracklist.total()
        );

        self.set_tracklist(tracklist).await;
        self.track_changed().await;
    }

    async fn play_radio(&self, limit: u32) {
        self.set_tracklist(Tracklist::fetching(TracklistType::Radio, ""))
            .await;

        match self.client.radio_tracks(limit).await {
            Ok(tracks) => self.new_queue(Tracklist::radio(tracks)).await,
            Err(error) => {
                tracing::error!("unable to fetch radio tracks: {error}");
                self.error_message(format!("Unable to load tracks: {error}"));
                self.new_queue(Tracklist::failed(TracklistType::Radio)).await;
            }
        }
    }

    async fn play_playlist(&self, id: u64) {
        let list_type = TracklistType::Playlist { id };
        self.set_tracklist(Tracklist::fetching(list_type.clone(), ""))
            .await;

        let name = self
            .client
            .playlist_name(id)
            .await
            .unwrap_or_else(|| format!("Playlist {id}"));

        match self.client.playlist_tracks(id).await {
            Ok(tracks) => {
                self.new_queue(Tracklist::playlist(id, name, tracks))
                    .await
            }
            Err(error) => {
                tracing::error!("unable to fetch playlist {id}: {error}");
                self.error_message(format!("Unable to load playlist: {error}"));
                self.new_queue(Tracklist::failed(list_type)).await;
            }
        }
    }

    async fn can_play(&self) -> bool {
        self.tracklist
            .read()
            .await
            .current_track()
            .is_some_and(|track| track.is_playable())
    }

    async fn play(&self) {
        if self.can_play().await {
            self.set_target_status(Status::Playing).await;
        }
    }

    async fn pause(&self) {
        if self.can_play().await {
            self.set_target_status(Status::Paused).await;
        }
    }

    async fn play_pause(&self) {
        let target_status = *self.target_status.read().await;

        match target_status {
            Status::Playing => self.pause().await,
            Status::Paused | Status::Stopped => self.play().await,
        }
    }

    async fn skip_to_position(&self, position: u32) {
        let mut tracklist = self.tracklist.read().await.clone();

        if tracklist.skip_to_track(position).is_none() {
            tracing::debug!("no track at position {position}");
            return;
        }

        self.set_tracklist(tracklist).await;
        self.track_changed().await;
    }

    /// Moves to `position` unless it is already current, as on a one-track list.
    async fn step_to(&self, position: Option<u32>) {
        let current_position = self.tracklist.read().await.current_position();

        match position {
            Some(position) if position != current_position => {
                self.skip_to_position(position).await;
            }
            _ => {}
        }
    }

    async fn next(&self) {
        let next = self.tracklist.read().await.next_position();
        self.step_to(next).await;
    }

    async fn previous(&self) {
        let previous = self.tracklist.read().await.previous_position();
        self.step_to(previous).await;
    }

    async fn seek(&self, fraction: f64) {
        let time = *self.time.read().await;

        if time.duration <= 0.0 || !fraction.is_finite() {
            return;
        }

        let seconds = fraction.clamp(0.0, 1.0) * time.duration;
        self.set_time(TimeData::new(seconds, time.duration)).await;
        self.notify(Notification::Seek { seconds });
    }

    async fn audio_event(&self, position: u32, event: AudioEvent) {
        let current_position = self.tracklist.read().await.current_position();

        if position != current_position {
            tracing::debug!("ignoring {event:?} for stale position {position}");
            return;
        }

        match event {
            AudioEvent::LoadStart | AudioEvent::Waiting => self.set_loading(true).await,
            AudioEvent::CanPlay | AudioEvent::CanPlayThrough => self.set_loading(false).await,
            AudioEvent::LoadedMetadata { duration } => {
                let time = self.time.read().await.with_duration(duration);
                self.set_time(time).await;
                self.set_loading(false).await;
            }
            AudioEvent::TimeUpdate { current, duration } => {
                self.set_time(TimeData::new(current, duration)).await;
            }
            AudioEvent::Playing => {
                self.set_loading(false).await;
                self.set_target_status(Status::Playing).await;
            }
            AudioEvent::PlayFailed => {
                tracing::warn!("browser refused to start playback");
                self.set_loading(false).await;
                self.set_target_status(Status::Paused).await;
            }
            AudioEvent::Ended => {
                self.set_target_status(Status::Paused).await;
                self.next().await;
            }
        }
    }

    async fn handle_command(&mut self, command: ControlCommand) {
        tracing::debug!("handling {command:?}");

        match command {
            ControlCommand::Radio { limit } => self.play_radio(limit).await,
            ControlCommand::Playlist { id } => self.play_playlist(id).await,
            ControlCommand::SkipToPosition { position } => self.skip_to_position(position).await,
            ControlCommand::Next => self.next().await,
            ControlCommand::Previous => self.previous().await,
            ControlCommand::PlayPause => self.play_pause().await,
            ControlCommand::Play => self.play().await,
            ControlCommand::Pause => self.pause().await,
            ControlCommand::Seek { fraction } => self.seek(fraction).await,
            ControlCommand::SetVolume { volume } => self.set_volume(volume).await,
            ControlCommand::Audio { position, event } => self.audio_event(position, event).await,
        }
    }

    pub async fn player_loop(&mut self) -> Result<()> {
        let mut receiver = self.broadcast.notify_receiver();

        loop {
            select! {
                Some(command) = self.controls_rx.recv() => {
                    self.handle_command(command).await;
                }

                notification = receiver.recv() => {
                    match notification {
                        Ok(Notification::Quit) => break,
                        Ok(_) => {}
                        Err(tokio::sync::broadcast::error::RecvError::Lagged(_)) => {}
                        Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
                    }
                }
            }
        }

        tracing::info!("player stopped");
        Ok(())
    }
}
