use diesel::{connection::SimpleConnection, prelude::*};
use log::{info, warn};

use super::schema::lease;
use crate::{
    error::Result,
    models::lease::{Lease, NewLease},
};

/// Raw insert. Leases are created through `LeaseDesk`, which also closes the
/// client.
pub(crate) fn insert(conn: &mut SqliteConnection, new_lease: &NewLease) -> Result<Lease> {
    let stored = diesel::insert_into(lease::table)
        .values(new_lease)
        .returning(Lease::as_returning())
        .get_result(conn)?;
    Ok(stored)
}

pub fn get_all(conn: &mut SqliteConnection) -> Result<Vec<Lease>> {
    let all = lease::table
        .select(Lease::as_select())
        .order(lease::lease_no)
        .load(conn)?;
    Ok(all)
}

pub fn get_for_client(conn: &mut SqliteConnection, target_client: &str) -> Result<Vec<Lease>> {
    let leases = lease::table
        .filter(lease::client_no.eq(target_client))
        .select(Lease::as_select())
        .order(lease::lease_no)
        .load(conn)?;
    Ok(leases)
}

/// Deletes every lease and restarts `lease_no` at 1.
///
/// Manual maintenance only. Client statuses are not reopened.
pub fn reset(conn: &mut SqliteConnection) -> Result<usize> {
    let deleted = conn.transaction(|conn| {
        let deleted = diesel::delete(lease::table).execute(conn)?;
        conn.batch_execute("DELETE FROM sqlite_sequence WHERE name = 'lease';")?;
        Ok::<_, diesel::result::Error>(deleted)
    })?;

    warn!("Deleted {} rows from lease and reset its sequence", deleted);
    info!("Client statuses were left as they are");
    Ok(deleted)
}
