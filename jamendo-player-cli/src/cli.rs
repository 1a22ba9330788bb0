use std::sync::Arc;

use clap::{Parser, Subcommand};
use dialoguer::Input;
use jamendo_player_client::client::PUBLIC_CLIENT_ID;
use jamendo_player_controls::{
    DEFAULT_VOLUME, Broadcast, client::Client, database::Database, notification::Notification,
    player::Player,
};
use snafu::prelude::*;
use tokio::sync::broadcast::error::RecvError;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[clap(short, long, env = "JAMENDO_CLIENT_ID")]
    /// Jamendo API client id. (overrides any database value)
    client_id: Option<String>,

    #[clap(short, long)]
    /// Log level
    verbosity: Option<tracing::Level>,

    #[clap(long, default_value = "0.0.0.0:9888")]
    /// Specify a different interface and port for the web server to listen on.
    interface: String,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the player
    Open,
    /// Set configuration options
    Config {
        #[clap(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Set the Jamendo API client id.
    #[clap(value_parser)]
    ClientId {},
}

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("{error}"))]
    PlayerError { error: String },
    #[snafu(display("{error}"))]
    WebError { error: String },
}

impl From<jamendo_player_controls::error::Error> for Error {
    fn from(error: jamendo_player_controls::error::Error) -> Self {
        Error::PlayerError {
            error: error.to_string(),
        }
    }
}

impl From<jamendo_player_web::Error> for Error {
    fn from(error: jamendo_player_web::Error) -> Self {
        Error::WebError {
            error: error.to_string(),
        }
    }
}

/// Command line value, then the stored one, then the public demo id.
fn resolve_client_id(cli: Option<String>, database: Option<String>) -> String {
    cli.map(|client_id| client_id.trim().to_string())
        .filter(|client_id| !client_id.is_empty())
        .or(database)
        .unwrap_or_else(|| PUBLIC_CLIENT_ID.to_string())
}

pub async fn run() -> Result<(), Error> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.verbosity)
        .with_target(false)
        .compact()
        .init();

    let database = Database::new().await?;

    match cli.command {
        Commands::Open => {
            let client_id = resolve_client_id(cli.client_id, database.client_id().await);
            if client_id == PUBLIC_CLIENT_ID {
                tracing::warn!("No client id configured, using the public demo id");
            }

            let client = Arc::new(Client::new(&client_id)?);

            let tracklist = database.tracklist().await.unwrap_or_default();
            let volume = database.volume().await.unwrap_or(DEFAULT_VOLUME);

            let mut player = Player::new(tracklist, client, volume);

            let web_state = jamendo_player_web::State::new(&player, cli.interface);
            let web = tokio::spawn(async move { jamendo_player_web::init(web_state).await });

            let broadcast = player.broadcast();
            tokio::spawn(async move {
                store_state_loop(database, broadcast).await;
            });

            tokio::select! {
                result = player.player_loop() => result?,
                result = web => match result {
                    Ok(result) => result?,
                    Err(error) => {
                        return Err(Error::WebError {
                            error: error.to_string(),
                        });
                    }
                },
            }

            Ok(())
        }
        Commands::Config { command } => match command {
            ConfigCommands::ClientId {} => {
                if let Ok(client_id) = Input::<String>::new()
                    .with_prompt("Enter your Jamendo client id")
                    .interact_text()
                {
                    database.set_client_id(client_id.trim()).await?;

                    println!("Client id saved.");
                }
                Ok(())
            }
        },
    }
}

async fn store_state_loop(database: Database, broadcast: Arc<Broadcast>) {
    let mut broadcast_receiver = broadcast.notify_receiver();

    loop {
        let notification = match broadcast_receiver.recv().await {
            Ok(notification) => notification,
            Err(RecvError::Lagged(_)) => continue,
            Err(RecvError::Closed) => break,
        };

        let result = match notification {
            Notification::CurrentTrackList { tracklist } if !tracklist.is_fetching() => {
                database.set_tracklist(&tracklist).await
            }
            Notification::Volume { volume } => database.set_volume(volume).await,
            Notification::Quit => break,
            _ => Ok(()),
        };

        if let Err(error) = result {
            tracing::error!("unable to persist player state: {error}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_id_precedence() {
        assert_eq!(
            resolve_client_id(Some("cli".into()), Some("stored".into())),
            "cli"
        );
        assert_eq!(resolve_client_id(Some("  ".into()), Some("stored".into())), "stored");
        assert_eq!(resolve_client_id(None, None), PUBLIC_CLIENT_ID);
    }

    #[test]
    fn parses_open_with_interface() {
        let cli = Cli::try_parse_from(["jamendo-player", "--interface", "127.0.0.1:8080", "open"])
            .expect("valid arguments");

        assert_eq!(cli.interface, "127.0.0.1:8080");
        assert!(matches!(cli.command, Commands::Open));
    }
}
