use error::Error;

pub mod broadcast;
pub mod client;
pub mod controls;
pub mod database;
pub mod error;
pub mod notification;
pub mod player;
pub mod readonly;
mod simple_cache;
pub mod time;
pub mod tracklist;

pub use broadcast::Broadcast;
pub use jamendo_player_models as models;
pub use tracklist::Status;

pub type Result<T, E = Error> = std::result::Result<T, E>;

pub const DEFAULT_VOLUME: u8 = 50;
pub const RADIO_TRACK_LIMIT: u32 = 20;
pub const PLAYLIST_TRACK_LIMIT: u32 = 50;
pub const PLAYLIST_LISTING_LIMIT: u32 = 10;
