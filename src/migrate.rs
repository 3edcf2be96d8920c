//! Versioned schema steps.
//!
//! Steps live in `migrations/` as `up.sql`/`down.sql` pairs and are embedded
//! at compile time. Creation steps come first in foreign-key order, then the
//! evolution steps. Each step runs in its own transaction.
//!
//! Two checks wrap every step:
//! - a population guard refuses evolution steps that add NOT NULL columns
//!   with no default to a table that already holds rows;
//! - after the step, every foreign key must point at an existing table,
//!   otherwise the step is reverted.
use std::collections::HashSet;

use diesel::{
    migration::{Migration, MigrationName, MigrationSource},
    prelude::*,
    sql_types::Text,
    sqlite::Sqlite,
};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use log::{info, warn};

use crate::{
    db,
    error::{BuildError, Result},
};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

struct PopulationGuard {
    step: &'static str,
    table: &'static str,
}

// The owner address rebuild has no way to derive street/city/postcode from
// the retired free-text address.
const POPULATION_GUARDS: &[PopulationGuard] = &[PopulationGuard {
    step: "structure_owner_address",
    table: "private_owner",
}];

#[derive(Debug, Clone, PartialEq, Eq, QueryableByName)]
pub struct TableReference {
    #[diesel(sql_type = Text)]
    pub child: String,
    #[diesel(sql_type = Text)]
    pub parent: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepStatus {
    pub name: String,
    pub applied: bool,
}

pub fn run_pending(conn: &mut SqliteConnection) -> Result<Vec<String>> {
    apply(conn, None)
}

/// Applies pending steps up to and including the one whose name ends with `step`.
pub fn run_until(conn: &mut SqliteConnection, step: &str) -> Result<Vec<String>> {
    apply(conn, Some(step))
}

pub fn pending(conn: &mut SqliteConnection) -> Result<Vec<String>> {
    let pending = conn
        .pending_migrations(MIGRATIONS)
        .map_err(|e| BuildError::migration("pending", e))?;
    Ok(pending.iter().map(|m| m.name().to_string()).collect())
}

pub fn applied(conn: &mut SqliteConnection) -> Result<Vec<String>> {
    let versions = conn
        .applied_migrations()
        .map_err(|e| BuildError::migration("applied", e))?;
    Ok(versions.iter().map(ToString::to_string).collect())
}

pub fn status(conn: &mut SqliteConnection) -> Result<Vec<StepStatus>> {
    let applied: HashSet<String> = applied(conn)?.into_iter().collect();
    let mut steps = MigrationSource::<Sqlite>::migrations(&MIGRATIONS)
        .map_err(|e| BuildError::migration("status", e))?
        .iter()
        .map(|m| StepStatus {
            name: m.name().to_string(),
            applied: applied.contains(&m.name().version().to_string()),
        })
        .collect::<Vec<_>>();
    steps.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(steps)
}

pub fn revert_last(conn: &mut SqliteConnection) -> Result<String> {
    let version = conn
        .revert_last_migration(MIGRATIONS)
        .map_err(|e| BuildError::migration("revert", e))?;
    info!("Reverted migration {}", version);
    Ok(version.to_string())
}

pub fn revert_all(conn: &mut SqliteConnection) -> Result<Vec<String>> {
    let versions = conn
        .revert_all_migrations(MIGRATIONS)
        .map_err(|e| BuildError::migration("revert", e))?;
    info!("Reverted {} migrations", versions.len());
    Ok(versions.iter().map(ToString::to_string).collect())
}

/// Foreign keys whose parent table does not exist.
pub fn check_references(conn: &mut SqliteConnection) -> Result<Vec<TableReference>> {
    let dangling = diesel::sql_query(
        r#"SELECT m.name AS child, p."table" AS parent
           FROM sqlite_master AS m
           JOIN pragma_foreign_key_list(m.name) AS p
           WHERE m.type = 'table'
             AND p."table" NOT IN (SELECT name FROM sqlite_master WHERE type = 'table')
           ORDER BY m.name"#,
    )
    .load::<TableReference>(conn)?;
    Ok(dangling)
}

/// Row count of `table`. Only called with table names from this crate.
pub fn count_rows(conn: &mut SqliteConnection, table: &str) -> Result<i64> {
    db::count(conn, &format!("SELECT COUNT(*) AS row_count FROM {}", table))
}

fn apply(conn: &mut SqliteConnection, stop_after: Option<&str>) -> Result<Vec<String>> {
    let pending = conn
        .pending_migrations(MIGRATIONS)
        .map_err(|e| BuildError::migration("pending", e))?;

    if let Some(step) = stop_after {
        if !pending.iter().any(|m| m.name().to_string().ends_with(step)) {
            return Err(BuildError::migration(step, "no pending step with this name"));
        }
    }

    let mut applied = Vec::new();
    for migration in pending {
        let name = migration.name().to_string();
        check_population(conn, &name)?;

        conn.run_migration(&*migration)
            .map_err(|e| BuildError::migration(name.as_str(), e))?;

        if let Some(dangling) = check_references(conn)?.into_iter().next() {
            warn!(
                "Migration {} left {} referencing missing {}, reverting",
                name, dangling.child, dangling.parent
            );
            conn.revert_migration(&*migration)
                .map_err(|e| BuildError::migration(name.as_str(), e))?;
            return Err(BuildError::DanglingReference {
                child: dangling.child,
                parent: dangling.parent,
            });
        }

        info!("Applied migration {}", name);
        let done = stop_after.map_or(false, |step| name.ends_with(step));
        applied.push(name);
        if done {
            break;
        }
    }

    Ok(applied)
}

fn check_population(conn: &mut SqliteConnection, name: &str) -> Result<()> {
    for guard in POPULATION_GUARDS.iter().filter(|g| name.ends_with(g.step)) {
        let rows = count_rows(conn, guard.table)?;
        if rows > 0 {
            return Err(BuildError::PopulatedEvolution {
                migration: name.to_string(),
                table: guard.table.to_string(),
                rows,
            });
        }
    }
    Ok(())
}
