#![allow(dead_code)]

use diesel::{RunQueryDsl, SqliteConnection};
use dreamhome::{config, db, error::BuildError, migrate, seed};

pub fn fresh_connection() -> SqliteConnection {
    db::establish_connection(&config::create_test_config()).unwrap()
}

pub fn migrated_connection() -> SqliteConnection {
    let mut conn = fresh_connection();
    migrate::run_pending(&mut conn).unwrap();
    conn
}

/// Seed rows for every table a lease depends on, without the lease itself.
pub fn insert_parents(conn: &mut SqliteConnection) {
    for row in seed::BRANCHES {
        db::branch::insert(conn, row).unwrap();
    }
    for row in seed::STAFF {
        db::staff::insert(conn, row).unwrap();
    }
    for row in seed::OWNERS {
        db::private_owner::insert(conn, row).unwrap();
    }
    for row in seed::PROPERTIES {
        db::property::insert(conn, row).unwrap();
    }
    for row in seed::CLIENTS {
        db::client::insert(conn, row).unwrap();
    }
}

pub fn raw(conn: &mut SqliteConnection, sql: &str) -> Result<usize, BuildError> {
    diesel::sql_query(sql).execute(conn).map_err(BuildError::from)
}
