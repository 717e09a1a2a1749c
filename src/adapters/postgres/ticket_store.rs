//! PostgreSQL implementation of TicketStore.
//!
//! Inserts finalized tickets into `maintenance_tickets`.

use async_trait::async_trait;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::path::Path;

use crate::config::DatabaseConfig;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::maintenance::Ticket;
use crate::ports::TicketStore;

/// PostgreSQL implementation of TicketStore.
#[derive(Clone)]
pub struct PostgresTicketStore {
    pool: PgPool,
}

impl PostgresTicketStore {
    /// Opens a connection pool from configuration.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DomainError> {
        let pool = PgPoolOptions::new()
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout())
            .connect(&config.url)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to connect to database: {}", e),
                )
            })?;

        tracing::info!(
            max_connections = config.max_connections,
            "Ticket store connection pool created"
        );

        Ok(Self { pool })
    }

    /// Applies pending migrations from `dir`.
    pub async fn migrate(&self, dir: &Path) -> Result<(), DomainError> {
        let migrator = Migrator::new(dir).await.map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to load migrations: {}", e),
            )
            .with_detail("dir", dir.display().to_string())
        })?;

        migrator.run(&self.pool).await.map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to run migrations: {}", e),
            )
        })?;

        tracing::info!(dir = %dir.display(), "Ticket store migrations applied");
        Ok(())
    }
}

#[async_trait]
impl TicketStore for PostgresTicketStore {
    async fn create(&self, ticket: &Ticket) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO maintenance_tickets (
                id, unit_id, user_id, description, duration, severity, urgency,
                priority, issue_area, photo_url, special_instructions, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(ticket.id().as_uuid())
        .bind(ticket.unit_id().as_str())
        .bind(ticket.user_id().as_str())
        .bind(ticket.description())
        .bind(ticket.duration())
        .bind(ticket.severity())
        .bind(ticket.urgency())
        .bind(ticket.priority().as_str())
        .bind(ticket.issue_area())
        .bind(ticket.photo_url())
        .bind(ticket.special_instructions())
        .bind(ticket.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| insert_error(ticket, e))?;

        Ok(())
    }
}

fn insert_error(ticket: &Ticket, err: sqlx::Error) -> DomainError {
    let duplicate = matches!(&err, sqlx::Error::Database(db) if db.is_unique_violation());
    if duplicate {
        DomainError::new(
            ErrorCode::DuplicateTicket,
            format!("Ticket already exists: {}", ticket.id()),
        )
    } else {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to insert ticket: {}", err),
        )
        .with_detail("ticket_id", ticket.id().to_string())
    }
}
