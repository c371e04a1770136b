mod storage;
pub mod table;

pub use storage::*;

use std::str::FromStr;

use sea_query::{ColumnDef, SqliteQueryBuilder, Table, TableCreateStatement};
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

use crate::table::KvStore;

fn create_kv_store() -> TableCreateStatement {
    Table::create()
        .table(KvStore::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(KvStore::Key)
                .string()
                .not_null()
                .string_len(100)
                .primary_key(),
        )
        .col(ColumnDef::new(KvStore::Value).text().not_null())
        .to_owned()
}

/// Opens the database, creating the file when missing.
pub async fn connect(url: &str, max_connections: u32) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    Ok(pool)
}

pub async fn migrate(pool: &SqlitePool) -> anyhow::Result<()> {
    tracing::info!("Migrating key-value store");

    let statement = create_kv_store().to_string(SqliteQueryBuilder);
    sqlx::query(&statement).execute(pool).await?;

    Ok(())
}
