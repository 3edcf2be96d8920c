extern crate diesel;

pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod logger;
pub mod migrate;
pub mod models;
pub mod seed;
pub mod services;
pub mod verify;

use diesel::SqliteConnection;
use log::info;

use error::Result;
use services::leasing::LeaseDesk;
use verify::{Snapshot, TableCounts};

#[derive(Debug)]
pub struct BuildReport {
    pub applied: Vec<String>,
    pub seeded: Option<TableCounts>,
    pub snapshot: Snapshot,
}

/// The full one-shot build: every pending schema step, then the seed rows
/// when `with_seed` is set, then a read-back of all tables.
pub fn build(conn: &mut SqliteConnection, with_seed: bool) -> Result<BuildReport> {
    let applied = migrate::run_pending(conn)?;
    info!("Schema up to date, {} step(s) applied", applied.len());

    let seeded = if with_seed {
        Some(seed::load(conn, &LeaseDesk::default())?)
    } else {
        None
    };

    let snapshot = verify::scan(conn)?;
    Ok(BuildReport {
        applied,
        seeded,
        snapshot,
    })
}
