use assets::{mesh_stylesheet, static_handler};
use axum::{
    Router,
    extract::State as AxumState,
    response::{Sse, sse::Event},
    routing::get,
};
use futures::stream::Stream;
use jamendo_player_controls::{
    Broadcast, Status,
    client::Client,
    controls::Controls,
    notification::{Message, Notification},
    player::Player,
    readonly::ReadOnly,
    time::TimeData,
    tracklist::Tracklist,
};
use jamendo_player_gradient::ColorExtractor;
use leptos::prelude::RenderHtml;
use routes::{gradient, pick, player, radio, streaming};
use snafu::prelude::*;
use std::{convert::Infallible, sync::Arc};
use tokio::sync::broadcast::{self, Sender};
use tokio_stream::StreamExt as _;
use tokio_stream::wrappers::BroadcastStream;

mod assets;
mod components;
mod icons;
mod page;
mod routes;
mod view;

#[derive(Snafu, Debug)]
pub enum Error {
    #[snafu(display("Unable to bind web interface to {interface}: {source}"))]
    Bind {
        interface: String,
        source: std::io::Error,
    },
    #[snafu(display("Web server stopped: {source}"))]
    Serve { source: std::io::Error },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything the web interface needs from a running player.
#[derive(Clone)]
pub struct State {
    pub web_interface: String,
    pub controls: Controls,
    pub broadcast: Arc<Broadcast>,
    pub client: Arc<Client>,
    pub tracklist: ReadOnly<Tracklist>,
    pub status: ReadOnly<Status>,
    pub loading: ReadOnly<bool>,
    pub time: ReadOnly<TimeData>,
    pub volume: ReadOnly<u8>,
}

impl State {
    pub fn new(player: &Player, web_interface: String) -> Self {
        Self {
            web_interface,
            controls: player.controls(),
            broadcast: player.broadcast(),
            client: player.client(),
            tracklist: player.tracklist(),
            status: player.status(),
            loading: player.loading(),
            time: player.time(),
            volume: player.volume(),
        }
    }
}

pub async fn init(state: State) -> Result<()> {
    let interface = state.web_interface.clone();
    let listener = tokio::net::TcpListener::bind(&interface)
        .await
        .context(BindSnafu {
            interface: interface.clone(),
        })?;

    tracing::info!("Listening on {interface}");

    let router = create_router(state);

    axum::serve(listener, router).await.context(ServeSnafu)
}

fn create_router(state: State) -> Router {
    let (tx, _rx) = broadcast::channel::<ServerSentEvent>(100);
    tokio::spawn(background_task(tx.clone(), state.broadcast.clone()));

    let shared_state = Arc::new(AppState {
        tx,
        player: state,
        color_extractor: ColorExtractor::new(),
    });

    Router::new()
        .route("/sse", get(sse_handler))
        .merge(pick::routes())
        .merge(radio::routes())
        .merge(streaming::routes())
        .merge(player::routes())
        .merge(gradient::routes())
        .route("/mesh.css", get(mesh_stylesheet))
        .route("/assets/{*file}", get(static_handler))
        .with_state(shared_state)
}

async fn background_task(tx: Sender<ServerSentEvent>, receiver: Arc<Broadcast>) {
    let mut receiver = receiver.notify_receiver();

    loop {
        let notification = match receiver.recv().await {
            Ok(notification) => notification,
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::warn!("server sent events lagged behind by {skipped} notifications");
                continue;
            }
            Err(broadcast::error::RecvError::Closed) => break,
        };

        if let Some(event) = server_sent_event(notification) {
            _ = tx.send(event);
        } else {
            break;
        }
    }
}

/// Maps a player notification to the event the browser listens for. `None` on quit.
fn server_sent_event(notification: Notification) -> Option<ServerSentEvent> {
    let (event_name, event_data) = match notification {
        Notification::Status { status } => {
            let data = match status {
                Status::Playing => "play",
                Status::Paused | Status::Stopped => "pause",
            };
            ("status", data.to_string())
        }
        Notification::Loading { loading } => ("loading", loading.to_string()),
        Notification::Time { time } => ("position", format!("{:.3}", time.current)),
        Notification::Seek { seconds } => ("seek", format!("{seconds:.3}")),
        Notification::Volume { volume } => ("volume", volume.to_string()),
        Notification::CurrentTrackList { tracklist: _ } => ("tracklist", String::new()),
        Notification::Message { message } => {
            let name = match message {
                Message::Error(_) => "error",
                Message::Warning(_) => "warn",
                Message::Success(_) => "success",
                Message::Info(_) => "info",
            };
            (name, components::toast(message).to_html())
        }
        Notification::Quit => return None,
    };

    Some(ServerSentEvent {
        event_name: event_name.into(),
        event_data,
    })
}

async fn sse_handler(
    AxumState(state): AxumState<Arc<AppState>>,
) -> (
    axum::http::HeaderMap,
    Sse<impl Stream<Item = Result<Event, Infallible>>>,
) {
    let rx = state.tx.subscribe();
    let stream = BroadcastStream::new(rx).filter_map(|result| match result {
        Ok(event) => Some(Ok(Event::default()
            .event(event.event_name)
            .data(event.event_data))),
        Err(_) => None,
    });

    let mut headers = axum::http::HeaderMap::new();
    headers.insert(
        "X-Accel-Buffering",
        axum::http::HeaderValue::from_static("no"),
    );

    (headers, Sse::new(stream))
}

pub(crate) struct AppState {
    tx: Sender<ServerSentEvent>,
    pub player: State,
    pub color_extractor: ColorExtractor,
}

#[derive(Clone, Debug)]
pub(crate) struct ServerSentEvent {
    event_name: String,
    event_data: String,
}
