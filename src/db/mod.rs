pub mod branch;
pub mod client;
pub mod lease;
pub mod newspaper;
pub mod private_owner;
pub mod property;
pub mod schema;
pub mod staff;

use diesel::{connection::SimpleConnection, prelude::*, sql_types::BigInt};
use log::debug;

use crate::{
    config::Config,
    error::{BuildError, Result},
};

pub fn establish_connection(config: &Config) -> Result<SqliteConnection> {
    let busy_timeout = config
        .busy_timeout()
        .map_err(|e| BuildError::Config(e.to_string()))?;

    let mut conn = SqliteConnection::establish(&config.database_url)?;

    // Foreign keys are off by default in SQLite and must be enabled per connection.
    conn.batch_execute(&format!(
        "PRAGMA foreign_keys = ON; PRAGMA busy_timeout = {};",
        busy_timeout.as_millis()
    ))?;

    debug!("Connected to {}", config.database_url);
    Ok(conn)
}

#[derive(QueryableByName)]
struct RowCount {
    #[diesel(sql_type = BigInt)]
    row_count: i64,
}

/// Runs a query selecting a single `row_count` column.
pub fn count(conn: &mut SqliteConnection, query: &str) -> Result<i64> {
    let count = diesel::sql_query(query).get_result::<RowCount>(conn)?;
    Ok(count.row_count)
}
