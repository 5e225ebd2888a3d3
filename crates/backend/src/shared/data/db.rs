use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

use crate::shared::config::{get_database_path, Config};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Schema of every table, created on first start.
const TABLES: &[(&str, &str)] = &[
    (
        "a001_vehicle",
        r#"
        CREATE TABLE a001_vehicle (
            id TEXT PRIMARY KEY NOT NULL,
            van_number TEXT NOT NULL UNIQUE,
            reg_no TEXT NOT NULL,
            status TEXT NOT NULL,
            vehicle_type TEXT NOT NULL DEFAULT '',
            trade_group TEXT NOT NULL DEFAULT '',
            service_cost TEXT NOT NULL DEFAULT 'GBP 0.00',
            maintenance_cost TEXT NOT NULL DEFAULT 'GBP 0.00',
            make_model TEXT,
            year INTEGER,
            transmission TEXT,
            vehicle_ownership TEXT,
            next_mot_due TEXT,
            road_tax_due TEXT,
            next_service_due TEXT
        );
        "#,
    ),
    (
        "a002_engineer",
        r#"
        CREATE TABLE a002_engineer (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            email TEXT,
            contact_number TEXT,
            is_active INTEGER NOT NULL DEFAULT 1
        );
        "#,
    ),
    (
        "a003_allocation",
        r#"
        CREATE TABLE a003_allocation (
            id TEXT PRIMARY KEY NOT NULL,
            vehicle_id TEXT NOT NULL,
            service_resource_id TEXT NOT NULL,
            start_date TEXT NOT NULL,
            end_date TEXT,
            contact_number TEXT,
            created_at TEXT,
            updated_at TEXT
        );
        "#,
    ),
    (
        "a004_cost_payment",
        r#"
        CREATE TABLE a004_cost_payment (
            id TEXT PRIMARY KEY NOT NULL,
            vehicle_id TEXT NOT NULL,
            payment_type TEXT NOT NULL,
            amount REAL NOT NULL DEFAULT 0,
            payment_date TEXT NOT NULL
        );
        "#,
    ),
    (
        "d402_driver_performance",
        r#"
        CREATE TABLE d402_driver_performance (
            driver_name TEXT PRIMARY KEY NOT NULL,
            total_trips INTEGER NOT NULL DEFAULT 0,
            avg_rating REAL NOT NULL DEFAULT 0,
            safety_score INTEGER NOT NULL DEFAULT 0,
            fuel_efficiency REAL NOT NULL DEFAULT 0,
            on_time_percentage INTEGER NOT NULL DEFAULT 0,
            violations INTEGER NOT NULL DEFAULT 0,
            miles_driven INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "sys_users",
        r#"
        CREATE TABLE sys_users (
            id TEXT PRIMARY KEY NOT NULL,
            email TEXT NOT NULL UNIQUE,
            name TEXT NOT NULL,
            role TEXT NOT NULL,
            engineer_id TEXT,
            managed_engineer_ids TEXT,
            password_hash TEXT NOT NULL,
            is_active INTEGER NOT NULL DEFAULT 1,
            created_at TEXT NOT NULL,
            last_login_at TEXT
        );
        "#,
    ),
    (
        "sys_sessions",
        r#"
        CREATE TABLE sys_sessions (
            id TEXT PRIMARY KEY NOT NULL,
            user_id TEXT NOT NULL,
            token_hash TEXT NOT NULL UNIQUE,
            expires_at TEXT NOT NULL,
            created_at TEXT NOT NULL,
            revoked_at TEXT
        );
        "#,
    ),
    (
        "sys_settings",
        r#"
        CREATE TABLE sys_settings (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL,
            description TEXT,
            created_at TEXT,
            updated_at TEXT
        );
        "#,
    ),
];

pub async fn initialize_database(config: &Config) -> anyhow::Result<()> {
    let db_file = get_database_path(config)?;
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_file.is_absolute() {
        db_file
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);
    tracing::info!("Opening database {}", db_url);
    let conn = Database::connect(&db_url).await?;

    for (name, ddl) in TABLES {
        ensure_table(&conn, name, ddl).await?;
    }

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

async fn ensure_table(conn: &DatabaseConnection, name: &str, ddl: &str) -> anyhow::Result<()> {
    let existing = conn
        .query_all(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT name FROM sqlite_master WHERE type='table' AND name = ?;",
            [name.into()],
        ))
        .await?;

    if existing.is_empty() {
        tracing::info!("Creating {} table", name);
        conn.execute(Statement::from_string(DatabaseBackend::Sqlite, ddl.to_string()))
            .await?;
    }
    Ok(())
}

/// Private in-memory database with every table created.
#[cfg(test)]
pub async fn open_memory_database() -> anyhow::Result<DatabaseConnection> {
    // one connection, otherwise each pooled connection gets its own empty database
    let mut options = sea_orm::ConnectOptions::new("sqlite::memory:".to_string());
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let conn = Database::connect(options).await?;
    for (name, ddl) in TABLES {
        ensure_table(&conn, name, ddl).await?;
    }
    Ok(conn)
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_ddl_creates_its_own_name() {
        for (name, ddl) in TABLES {
            assert!(
                ddl.contains(&format!("CREATE TABLE {} (", name)),
                "DDL for {} does not match its name",
                name
            );
        }
    }
}
