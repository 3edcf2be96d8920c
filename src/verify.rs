//! Read-back of the built database.
use std::fmt;

use diesel::SqliteConnection;
use log::info;

use crate::{
    db,
    error::Result,
    models::{
        branch::Branch, client::Client, domain::ClientStatus, lease::Lease,
        newspaper::NewspaperAd, private_owner::PrivateOwner, property::PropertyForRent,
        staff::Staff,
    },
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableCounts {
    pub branch: usize,
    pub staff: usize,
    pub private_owner: usize,
    pub property_for_rent: usize,
    pub client: usize,
    pub lease: usize,
    pub newspapers: usize,
}

impl TableCounts {
    /// Rows written by `seed::load` into an empty database.
    pub const SEED: TableCounts = TableCounts {
        branch: 8,
        staff: 17,
        private_owner: 5,
        property_for_rent: 7,
        client: 5,
        lease: 1,
        newspapers: 3,
    };

    pub fn total(&self) -> usize {
        self.branch
            + self.staff
            + self.private_owner
            + self.property_for_rent
            + self.client
            + self.lease
            + self.newspapers
    }
}

impl fmt::Display for TableCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "branch={} staff={} private_owner={} property_for_rent={} client={} lease={} newspapers={}",
            self.branch,
            self.staff,
            self.private_owner,
            self.property_for_rent,
            self.client,
            self.lease,
            self.newspapers
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub branches: Vec<Branch>,
    pub staff: Vec<Staff>,
    pub owners: Vec<PrivateOwner>,
    pub properties: Vec<PropertyForRent>,
    pub clients: Vec<Client>,
    pub leases: Vec<Lease>,
    pub newspapers: Vec<NewspaperAd>,
}

impl Snapshot {
    pub fn counts(&self) -> TableCounts {
        TableCounts {
            branch: self.branches.len(),
            staff: self.staff.len(),
            private_owner: self.owners.len(),
            property_for_rent: self.properties.len(),
            client: self.clients.len(),
            lease: self.leases.len(),
            newspapers: self.newspapers.len(),
        }
    }

    pub fn clients_with(&self, status: ClientStatus) -> Vec<&Client> {
        self.clients.iter().filter(|c| c.status == status).collect()
    }
}

/// Full read of all seven tables.
pub fn scan(conn: &mut SqliteConnection) -> Result<Snapshot> {
    let snapshot = Snapshot {
        branches: db::branch::get_all(conn)?,
        staff: db::staff::get_all(conn)?,
        owners: db::private_owner::get_all(conn)?,
        properties: db::property::get_all(conn)?,
        clients: db::client::get_all(conn)?,
        leases: db::lease::get_all(conn)?,
        newspapers: db::newspaper::get_all(conn)?,
    };

    info!("Scanned {}", snapshot.counts());
    info!(
        "Clients open={} closed={}",
        snapshot.clients_with(ClientStatus::Open).len(),
        snapshot.clients_with(ClientStatus::Closed).len()
    );
    Ok(snapshot)
}

/// Staff headcount for every branch, in branch order.
pub fn staffing(conn: &mut SqliteConnection) -> Result<Vec<(String, usize)>> {
    let mut staffing = Vec::new();
    for branch in db::branch::get_all(conn)? {
        let members = db::staff::get_for_branch(conn, &branch.branch_no)?;
        staffing.push((branch.branch_no, members.len()));
    }
    Ok(staffing)
}

/// Numbers of properties that no staff member manages.
pub fn unassigned_properties(conn: &mut SqliteConnection) -> Result<Vec<String>> {
    let unassigned = db::property::get_unassigned(conn)?
        .into_iter()
        .map(|p| p.property_no)
        .collect::<Vec<_>>();
    if !unassigned.is_empty() {
        info!("Properties without staff: {}", unassigned.join(", "));
    }
    Ok(unassigned)
}

/// Rows whose foreign key has no parent, as reported by `PRAGMA foreign_key_check`.
pub fn foreign_key_violations(conn: &mut SqliteConnection) -> Result<i64> {
    db::count(
        conn,
        "SELECT COUNT(*) AS row_count FROM pragma_foreign_key_check()",
    )
}
