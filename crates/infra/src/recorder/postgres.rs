//! Postgres-backed submission recorder.
//!
//! Each call opens its own connection, runs a single parameterized `INSERT`
//! into `predictions` (auto-commit), and closes the connection. There is no
//! pool: connection lifecycle is scoped to one submission.
//!
//! The table schema is owned outside this service:
//!
//! ```sql
//! CREATE TABLE predictions (
//!     N DOUBLE PRECISION, P DOUBLE PRECISION, K DOUBLE PRECISION,
//!     temperature DOUBLE PRECISION, humidity DOUBLE PRECISION,
//!     ph DOUBLE PRECISION, rainfall DOUBLE PRECISION,
//!     crop TEXT
//! );
//! ```

use sqlx::{Connection, PgConnection};
use tracing::instrument;

use cropguide_core::Feature;

use super::{PersistenceError, SubmissionRecord, SubmissionRecorder};

const INSERT_PREDICTION: &str = r#"
    INSERT INTO predictions (N, P, K, temperature, humidity, ph, rainfall, crop)
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
"#;

#[derive(Clone)]
pub struct PostgresSubmissionRecorder {
    database_url: String,
}

impl core::fmt::Debug for PostgresSubmissionRecorder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // The URL may carry credentials.
        f.debug_struct("PostgresSubmissionRecorder").finish_non_exhaustive()
    }
}

impl PostgresSubmissionRecorder {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
        }
    }
}

#[async_trait::async_trait]
impl SubmissionRecorder for PostgresSubmissionRecorder {
    #[instrument(skip(self, record), fields(submission_id = %record.id), err)]
    async fn record(&self, record: &SubmissionRecord) -> Result<(), PersistenceError> {
        let mut conn = PgConnection::connect(&self.database_url)
            .await
            .map_err(|e| PersistenceError::Connect(describe("connect", e)))?;

        let m = &record.measurements;
        let inserted = sqlx::query(INSERT_PREDICTION)
            .bind(m.get(Feature::Nitrogen))
            .bind(m.get(Feature::Phosphorus))
            .bind(m.get(Feature::Potassium))
            .bind(m.get(Feature::Temperature))
            .bind(m.get(Feature::Humidity))
            .bind(m.get(Feature::Ph))
            .bind(m.get(Feature::Rainfall))
            .bind(&record.crop)
            .execute(&mut conn)
            .await;

        // Release the connection whether or not the insert succeeded.
        let closed = conn.close().await;

        inserted.map_err(|e| PersistenceError::Insert(describe("insert_prediction", e)))?;
        if let Err(e) = closed {
            tracing::warn!("closing submission connection failed: {e}");
        }

        tracing::debug!(crop = %record.crop, "submission recorded");
        Ok(())
    }
}

fn describe(operation: &str, err: sqlx::Error) -> String {
    match err {
        sqlx::Error::Database(db_err) => match db_err.code() {
            Some(code) => format!("database error in {operation} ({code}): {}", db_err.message()),
            None => format!("database error in {operation}: {}", db_err.message()),
        },
        other => format!("sqlx error in {operation}: {other}"),
    }
}
