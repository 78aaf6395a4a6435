//! PostgreSQL implementation of the persistence layer.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::types::Json;
use uuid::Uuid;

use super::Store;
use crate::config::GatewayConfig;
use crate::domain::{LlmConfigDraft, LlmConfigPatch, LlmProvider, ProjectLlmConfig, StatusCheck};
use crate::error::GatewayError;

const CONFIG_COLUMNS: &str =
    "id, project_id, project_name, llm_providers, default_provider, created_at, updated_at";

type ConfigRow = (
    Uuid,
    String,
    String,
    Json<Vec<LlmProvider>>,
    String,
    DateTime<Utc>,
    DateTime<Utc>,
);

fn config_from_row(row: ConfigRow) -> ProjectLlmConfig {
    let (id, project_id, project_name, Json(llm_providers), default_provider, created_at, updated_at) =
        row;
    ProjectLlmConfig {
        id,
        project_id,
        project_name,
        llm_providers,
        default_provider,
        created_at,
        updated_at,
    }
}

fn sql_limit(limit: usize) -> i64 {
    i64::try_from(limit).unwrap_or(i64::MAX)
}

/// PostgreSQL-backed store using `sqlx::PgPool`.
///
/// Each collection is a table; provider lists are stored as JSONB.
/// Create-or-update relies on the unique index on `llm_configs.project_id`.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Creates a new store with the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a connection pool from the gateway configuration and applies
    /// the embedded migrations.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError::PersistenceError`] if the connection string
    /// is invalid, the database is unreachable, or a migration fails.
    pub async fn connect(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let mut options = PgConnectOptions::from_str(&config.database_url)?;
        if let Some(name) = &config.database_name {
            options = options.database(name);
        }

        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .min_connections(config.database_min_connections)
            .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
            .connect_with(options)
            .await?;

        sqlx::migrate!()
            .run(&pool)
            .await
            .map_err(|e| GatewayError::PersistenceError(e.to_string()))?;

        tracing::info!("database migrations applied");
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl Store for PostgresStore {
    async fn insert_status_check(&self, check: &StatusCheck) -> Result<(), GatewayError> {
        sqlx::query("INSERT INTO status_checks (id, client_name, timestamp) VALUES ($1, $2, $3)")
            .bind(check.id)
            .bind(&check.client_name)
            .bind(check.timestamp)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn list_status_checks(&self, limit: usize) -> Result<Vec<StatusCheck>, GatewayError> {
        let rows = sqlx::query_as::<_, (Uuid, String, DateTime<Utc>)>(
            "SELECT id, client_name, timestamp FROM status_checks LIMIT $1",
        )
        .bind(sql_limit(limit))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, client_name, timestamp)| StatusCheck {
                id,
                client_name,
                timestamp,
            })
            .collect())
    }

    async fn find_llm_config(
        &self,
        project_id: &str,
    ) -> Result<Option<ProjectLlmConfig>, GatewayError> {
        let row = sqlx::query_as::<_, ConfigRow>(&format!(
            "SELECT {CONFIG_COLUMNS} FROM llm_configs WHERE project_id = $1"
        ))
        .bind(project_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(config_from_row))
    }

    async fn upsert_llm_config(
        &self,
        draft: &LlmConfigDraft,
        now: DateTime<Utc>,
    ) -> Result<ProjectLlmConfig, GatewayError> {
        let row = sqlx::query_as::<_, ConfigRow>(&format!(
            "INSERT INTO llm_configs ({CONFIG_COLUMNS}) VALUES ($1, $2, $3, $4, $5, $6, $6) \
             ON CONFLICT (project_id) DO UPDATE SET \
                 project_name = EXCLUDED.project_name, \
                 llm_providers = EXCLUDED.llm_providers, \
                 default_provider = EXCLUDED.default_provider, \
                 updated_at = EXCLUDED.updated_at \
             RETURNING {CONFIG_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(&draft.project_id)
        .bind(&draft.project_name)
        .bind(Json(&draft.llm_providers))
        .bind(&draft.default_provider)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(config_from_row(row))
    }

    async fn update_llm_config(
        &self,
        project_id: &str,
        patch: &LlmConfigPatch,
        now: DateTime<Utc>,
    ) -> Result<Option<ProjectLlmConfig>, GatewayError> {
        let row = sqlx::query_as::<_, ConfigRow>(&format!(
            "UPDATE llm_configs SET \
                 project_name = COALESCE($2, project_name), \
                 llm_providers = COALESCE($3, llm_providers), \
                 default_provider = COALESCE($4, default_provider), \
                 updated_at = $5 \
             WHERE project_id = $1 \
             RETURNING {CONFIG_COLUMNS}"
        ))
        .bind(project_id)
        .bind(patch.project_name.as_deref())
        .bind(patch.llm_providers.as_ref().map(Json))
        .bind(patch.default_provider.as_deref())
        .bind(now)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(config_from_row))
    }

    async fn delete_llm_config(&self, project_id: &str) -> Result<bool, GatewayError> {
        let result = sqlx::query("DELETE FROM llm_configs WHERE project_id = $1")
            .bind(project_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_llm_configs(
        &self,
        limit: usize,
    ) -> Result<Vec<ProjectLlmConfig>, GatewayError> {
        let rows = sqlx::query_as::<_, ConfigRow>(&format!(
            "SELECT {CONFIG_COLUMNS} FROM llm_configs LIMIT $1"
        ))
        .bind(sql_limit(limit))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(config_from_row).collect())
    }

    async fn ping(&self) -> Result<(), GatewayError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_saturates() {
        assert_eq!(sql_limit(1000), 1000);
        assert_eq!(sql_limit(usize::MAX), i64::MAX);
    }

    #[test]
    fn row_maps_every_column() {
        let now = Utc::now();
        let id = Uuid::new_v4();
        let provider = LlmProvider {
            provider: "openai".to_string(),
            model: "gpt-4".to_string(),
            api_key: String::new(),
            enabled: false,
        };
        let cfg = config_from_row((
            id,
            "p".to_string(),
            "name".to_string(),
            Json(vec![provider.clone()]),
            "openai".to_string(),
            now,
            now,
        ));
        assert_eq!(cfg.id, id);
        assert_eq!(cfg.project_id, "p");
        assert_eq!(cfg.llm_providers, vec![provider]);
        assert_eq!(cfg.default_provider, "openai");
    }
}
