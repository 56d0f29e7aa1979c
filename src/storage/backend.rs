//! SeaORM-backed link store and click sink
//!
//! One process-wide instance is built at startup and shared by every
//! request. Supports SQLite (tests, single-node deploys) and
//! Postgres/MySQL (the product's hosted database).

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, ConnectOptions, Database, DatabaseConnection, EntityTrait,
    QueryFilter,
};
use tracing::{debug, info};

use super::entities::{click, link};
use super::{Link, LinkStore};
use crate::analytics::{ClickEvent, ClickSink};
use crate::config::get_config;
use crate::errors::{LinkgateError, Result};

pub struct SeaOrmStore {
    db: DatabaseConnection,
    backend_name: String,
}

/// Connect to SQLite with auto-create and WAL tuning
pub async fn connect_sqlite(database_url: &str) -> Result<DatabaseConnection> {
    use sea_orm::SqlxSqliteConnector;
    use sea_orm::sqlx::SqlitePool;
    use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqliteSynchronous};
    use std::str::FromStr;

    let opt = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| LinkgateError::configuration(format!("Invalid SQLite URL: {}", e)))?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(std::time::Duration::from_secs(5));

    let pool = SqlitePool::connect_with(opt).await.map_err(|e| {
        LinkgateError::database_connection(format!("Cannot connect to SQLite database: {}", e))
    })?;

    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
}

/// Connect to Postgres/MySQL with pool tuning
pub async fn connect_generic(database_url: &str, backend_name: &str) -> Result<DatabaseConnection> {
    let pool_size = get_config().database.pool_size;

    let mut opt = ConnectOptions::new(database_url.to_owned());
    opt.max_connections(pool_size)
        .min_connections(pool_size.min(5))
        .connect_timeout(std::time::Duration::from_secs(8))
        .acquire_timeout(std::time::Duration::from_secs(8))
        .idle_timeout(std::time::Duration::from_secs(300))
        .sqlx_logging(false);

    Database::connect(opt).await.map_err(|e| {
        LinkgateError::database_connection(format!(
            "Cannot connect to {} database: {}",
            backend_name.to_uppercase(),
            e
        ))
    })
}

impl SeaOrmStore {
    pub async fn new(database_url: &str) -> Result<Self> {
        let backend_name = backend_name_from_url(database_url)?;

        let db = match backend_name {
            "sqlite" => connect_sqlite(database_url).await?,
            name => connect_generic(database_url, name).await?,
        };

        info!("Connected to {} link store", backend_name);

        Ok(Self {
            db,
            backend_name: backend_name.to_string(),
        })
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn backend_name(&self) -> &str {
        &self.backend_name
    }
}

fn backend_name_from_url(database_url: &str) -> Result<&'static str> {
    if database_url.starts_with("sqlite:") {
        Ok("sqlite")
    } else if database_url.starts_with("postgres:") || database_url.starts_with("postgresql:") {
        Ok("postgres")
    } else if database_url.starts_with("mysql:") {
        Ok("mysql")
    } else {
        Err(LinkgateError::configuration(format!(
            "Unsupported database URL scheme: {}",
            database_url
        )))
    }
}

fn into_link(model: link::Model) -> Link {
    Link {
        id: model.id,
        slug: model.slug,
        original_url: model.original_url,
        is_active: model.is_active,
        expires_at: model.expires_at,
        created_at: model.created_at,
    }
}

#[async_trait]
impl LinkStore for SeaOrmStore {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Link>> {
        let model = link::Entity::find()
            .filter(link::Column::Slug.eq(slug))
            .one(&self.db)
            .await?;

        Ok(model.map(into_link))
    }
}

#[async_trait]
impl ClickSink for SeaOrmStore {
    async fn record_click(&self, event: ClickEvent) -> anyhow::Result<()> {
        // created_at is assigned here, at insert time, not when the request
        // was handled
        let model = click::ActiveModel {
            link_id: Set(event.link_id),
            ip: Set(event.ip),
            user_agent: Set(event.user_agent),
            referer: Set(event.referer),
            browser: Set(event.browser),
            device: Set(event.device),
            os: Set(event.os),
            country: Set(event.country),
            city: Set(event.city),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        click::Entity::insert(model)
            .exec(&self.db)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to insert click event: {}", e))?;

        debug!("Click event written to {} store", self.backend_name);
        Ok(())
    }
}
