use axum::{
    Form, Json, Router,
    extract::State,
    response::IntoResponse,
    routing::{get, post, put},
};
use jamendo_player_controls::{
    Status,
    controls::AudioEvent,
    models::{DEFAULT_COVER, Track},
    time::{TimeData, format_time},
    tracklist::Tracklist,
};
use leptos::{IntoView, component, prelude::*};
use std::sync::Arc;

use crate::{
    AppState,
    components::LoadingState,
    html,
    icons::{Backward, Forward, Pause, Play, Spinner, VolumeHigh},
    view::render,
};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/player", get(player_partial))
        .route("/status", get(status_partial))
        .route("/progress", get(progress_partial))
        .route("/volume-slider", get(volume_slider_partial))
        .route("/play", put(play))
        .route("/pause", put(pause))
        .route("/play-pause", put(play_pause))
        .route("/next", put(next))
        .route("/previous", put(previous))
        .route("/seek", put(seek))
        .route("/volume", post(set_volume))
        .route("/audio-event", post(audio_event))
}

/// Placeholder that swaps itself for the player card and follows tracklist changes.
#[component]
pub(crate) fn player_card_container() -> impl IntoView {
    html! {
        <div id="player-card" hx-get="/player" hx-trigger="load, sse:tracklist" hx-target="this">
            <LoadingState heading="Loading tracks...">
                <span></span>
            </LoadingState>
        </div>
    }
}

async fn player_partial(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let tracklist = state.player.tracklist.get().await;
    let status = *state.player.status.read().await;
    let loading = *state.player.loading.read().await;
    let time = state.player.time.get().await;
    let volume = *state.player.volume.read().await;

    render(html! {
        <PlayerCard
            tracklist=tracklist
            status=status
            loading=loading
            time=time
            volume=volume
        />
    })
}

#[component]
fn player_card(
    tracklist: Tracklist,
    status: Status,
    loading: bool,
    time: TimeData,
    volume: u8,
) -> impl IntoView {
    if tracklist.is_fetching() {
        return html! {
            <LoadingState heading="Loading tracks…">
                <span class="spinner"><Spinner /></span>
            </LoadingState>
        }
        .into_any();
    }

    if tracklist.is_empty() {
        return html! {
            <LoadingState heading="Loading tracks...">
                <p>{tracklist.source_name().to_string()}</p>
            </LoadingState>
        }
        .into_any();
    }

    let Some(track) = tracklist.current_track().cloned() else {
        return html! {
            <LoadingState heading="Loading track...">
                <span></span>
            </LoadingState>
        }
        .into_any();
    };

    if !track.is_playable() {
        return html! {
            <LoadingState heading="No playable track available">
                <p>"This track doesn't have a valid audio URL"</p>
                <p>{format!("Track: {}", track.title)}</p>
                <p>{format!("URL: {}", track.url)}</p>
            </LoadingState>
        }
        .into_any();
    }

    let position = tracklist.current_position();
    let single_track = tracklist.total() <= 1;
    let source_name = tracklist.source_name().to_string();
    let autoplay = (status == Status::Playing).to_string();
    let start = format!("{:.3}", time.current);

    html! {
        <div class="player-card">
            <div class="player-source">{source_name}</div>
            <Cover track=track.clone() />
            <div class="player-track">
                <h2 class="player-title">{track.title.clone()}</h2>
                <p class="player-artist">{track.artist.clone()}</p>
            </div>
            <Progress time=time />
            <div class="player-controls">
                <button
                    class="control-button"
                    hx-put="/previous"
                    hx-swap="none"
                    disabled=single_track
                >
                    <Backward />
                </button>
                <PlayerStatus status=status loading=loading />
                <button class="control-button" hx-put="/next" hx-swap="none" disabled=single_track>
                    <Forward />
                </button>
            </div>
            <VolumeSlider volume=volume />
            <audio
                id="audio"
                preload="metadata"
                src=track.url
                data-position=position
                data-start=start
                data-autoplay=autoplay
                data-volume=volume
            ></audio>
        </div>
    }
    .into_any()
}

#[component]
fn cover(track: Track) -> impl IntoView {
    let cover = if track.cover.is_empty() {
        DEFAULT_COVER.to_string()
    } else {
        track.cover
    };

    html! {
        <img
            class="player-cover"
            src=cover
            alt=track.title
            onerror=format!("this.onerror=null;this.src='{DEFAULT_COVER}';")
        />
    }
}

async fn status_partial(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let status = *state.player.status.read().await;
    let loading = *state.player.loading.read().await;

    render(html! { <PlayerStatus status=status loading=loading /> })
}

#[component]
fn player_status(status: Status, loading: bool) -> impl IntoView {
    html! {
        <div id="player-status" hx-get="/status" hx-trigger="sse:status, sse:loading" hx-target="this">
            <PlayPause status=status loading=loading />
        </div>
    }
}

#[component]
fn play_pause(status: Status, loading: bool) -> impl IntoView {
    if loading {
        return html! {
            <button class="control-button play-button" disabled=true>
                <Spinner />
            </button>
        }
        .into_any();
    }

    match status {
        Status::Playing => html! {
            <button class="control-button play-button" hx-put="/pause" hx-swap="none">
                <Pause />
            </button>
        }
        .into_any(),
        Status::Paused | Status::Stopped => html! {
            <button class="control-button play-button" hx-put="/play" hx-swap="none">
                <Play />
            </button>
        }
        .into_any(),
    }
}

async fn progress_partial(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let time = state.player.time.get().await;

    render(html! { <Progress time=time /> })
}

#[component]
fn progress(time: TimeData) -> impl IntoView {
    html! {
        <div id="progress" hx-get="/progress" hx-trigger="sse:position, sse:seek" hx-target="this">
            <div class="progress-bar" onclick="seek(this, event)">
                <div class="progress-fill" style=format!("width: {:.2}%;", time.progress())></div>
            </div>
            <div class="progress-time">
                <span>{format_time(time.current)}</span>
                <span>{format_time(time.remaining)}</span>
            </div>
        </div>
    }
}

async fn volume_slider_partial(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let volume = *state.player.volume.read().await;

    render(html! { <VolumeSlider volume=volume /> })
}

pub(crate) fn volume_background(volume: u8) -> String {
    format!(
        "background: linear-gradient(to right, whitesmoke 0%, whitesmoke {volume}%, #b9b9b983 {volume}%, #b9b9b983 100%);"
    )
}

#[component]
fn volume_slider(volume: u8) -> impl IntoView {
    html! {
        <div
            id="volume-slider"
            class="volume-row"
            hx-get="/volume-slider"
            hx-trigger="sse:volume delay:5000"
            hx-target="this"
        >
            <VolumeHigh />
            <input
                class="volume-input"
                type="range"
                name="volume"
                min="0"
                max="100"
                value=volume
                style=volume_background(volume)
                oninput="volumeBackground(this)"
                hx-post="/volume"
                hx-trigger="input delay:100ms"
                hx-swap="none"
            />
        </div>
    }
}

async fn play(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.player.controls.play();
}

async fn pause(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.player.controls.pause();
}

async fn play_pause(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.player.controls.play_pause();
}

async fn next(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.player.controls.next();
}

async fn previous(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.player.controls.previous();
}

#[derive(serde::Deserialize, Clone, Copy)]
struct SeekParameters {
    fraction: f64,
}

async fn seek(
    State(state): State<Arc<AppState>>,
    Form(parameters): Form<SeekParameters>,
) -> impl IntoResponse {
    state.player.controls.seek(parameters.fraction);
}

#[derive(serde::Deserialize, Clone, Copy)]
struct VolumeParameters {
    volume: i32,
}

async fn set_volume(
    State(state): State<Arc<AppState>>,
    Form(parameters): Form<VolumeParameters>,
) -> impl IntoResponse {
    let volume = parameters.volume.clamp(0, 100) as u8;

    state.player.controls.set_volume(volume);
}

#[derive(serde::Deserialize)]
struct AudioEventParameters {
    position: u32,
    #[serde(flatten)]
    event: AudioEvent,
}

async fn audio_event(
    State(state): State<Arc<AppState>>,
    Json(parameters): Json<AudioEventParameters>,
) -> impl IntoResponse {
    state
        .player
        .controls
        .audio_event(parameters.position, parameters.event);
}
