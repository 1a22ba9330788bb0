use crate::{Error, Result, tracklist::Tracklist};
use serde_json::to_string;
use sqlx::{Pool, Sqlite, SqlitePool, sqlite::SqliteConnectOptions};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

#[derive(sqlx::FromRow)]
struct ConfigurationRow {
    client_id: Option<String>,
}

#[derive(sqlx::FromRow)]
struct PlayerStateRow {
    volume: Option<i64>,
    tracklist: Option<String>,
}

impl Database {
    pub async fn new() -> Result<Self> {
        let database_url = if let Ok(url) = std::env::var("DATABASE_URL") {
            PathBuf::from(url.replace("sqlite://", ""))
        } else {
            let Some(mut url) = dirs::data_local_dir() else {
                return Err(Error::DatabaseLocationError);
            };
            url.push("jamendo-player");

            if !url.exists() && std::fs::create_dir_all(&url).is_err() {
                return Err(Error::DatabaseLocationError);
            }

            url.push("data.db");

            url
        };

        tracing::debug!("opening database at {}", database_url.display());

        let options = SqliteConnectOptions::new()
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .filename(database_url)
            .create_if_missing(true);

        let pool = SqlitePool::connect_with(options).await?;

        Database::init(pool).await
    }

    pub async fn init(pool: Pool<Sqlite>) -> Result<Self> {
        sqlx::migrate!("./migrations").run(&pool).await?;

        create_row(&pool, "configuration").await?;
        create_row(&pool, "player_state").await?;

        Ok(Self { pool })
    }

    pub async fn set_client_id(&self, client_id: &str) -> Result<()> {
        sqlx::query("UPDATE configuration SET client_id = ?1 WHERE ROWID = 1")
            .bind(client_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn client_id(&self) -> Option<String> {
        let row: Option<ConfigurationRow> =
            sqlx::query_as("SELECT client_id FROM configuration WHERE ROWID = 1")
                .fetch_optional(&self.pool)
                .await
                .ok()?;

        row?.client_id.filter(|id| !id.trim().is_empty())
    }

    pub async fn set_volume(&self, volume: u8) -> Result<()> {
        sqlx::query("UPDATE player_state SET volume = ?1 WHERE ROWID = 1")
            .bind(i64::from(volume))
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn volume(&self) -> Option<u8> {
        let row = self.player_state().await?;
        row.volume.map(|volume| volume.clamp(0, 100) as u8)
    }

    pub async fn set_tracklist(&self, tracklist: &Tracklist) -> Result<()> {
        let serialized = to_string(tracklist)?;

        sqlx::query("UPDATE player_state SET tracklist = ?1 WHERE ROWID = 1")
            .bind(serialized)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn tracklist(&self) -> Option<Tracklist> {
        let serialized = self.player_state().await?.tracklist?;

        match serde_json::from_str(&serialized) {
            Ok(tracklist) => Some(tracklist),
            Err(error) => {
                tracing::warn!("stored tracklist is unreadable: {error}");
                None
            }
        }
    }

    async fn player_state(&self) -> Option<PlayerStateRow> {
        sqlx::query_as("SELECT volume, tracklist FROM player_state WHERE ROWID = 1")
            .fetch_optional(&self.pool)
            .await
            .ok()
            .flatten()
    }
}

async fn create_row(pool: &Pool<Sqlite>, table: &str) -> Result<()> {
    let query = format!(
        "INSERT INTO {table} (ROWID) SELECT 1 WHERE NOT EXISTS (SELECT 1 FROM {table} WHERE ROWID = 1)"
    );

    sqlx::query(&query).execute(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Track;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn memory_database() -> Database {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        Database::init(pool).await.unwrap()
    }

    #[tokio::test]
    async fn fresh_database_has_no_settings() {
        let database = memory_database().await;

        assert_eq!(database.client_id().await, None);
        assert_eq!(database.volume().await, None);
        assert_eq!(database.tracklist().await, None);
    }

    #[tokio::test]
    async fn init_is_idempotent() {
        let database = memory_database().await;
        database.set_volume(70).await.unwrap();

        let database = Database::init(database.pool.clone()).await.unwrap();
        assert_eq!(database.volume().await, Some(70));
    }

    #[tokio::test]
    async fn stores_client_id_and_volume() {
        let database = memory_database().await;

        database.set_client_id("abc123").await.unwrap();
        database.set_volume(35).await.unwrap();

        assert_eq!(database.client_id().await, Some("abc123".to_string()));
        assert_eq!(database.volume().await, Some(35));
    }

    #[tokio::test]
    async fn blank_client_id_reads_as_unset() {
        let database = memory_database().await;
        database.set_client_id("  ").await.unwrap();

        assert_eq!(database.client_id().await, None);
    }

    #[tokio::test]
    async fn stores_the_last_tracklist() {
        let database = memory_database().await;
        let tracklist = Tracklist::playlist(
            4,
            "Evening",
            vec![Track {
                id: 1,
                title: "Dusk".into(),
                url: "https://stream/1".into(),
                ..Default::default()
            }],
        );

        database.set_tracklist(&tracklist).await.unwrap();

        assert_eq!(database.tracklist().await, Some(tracklist));
    }
}
