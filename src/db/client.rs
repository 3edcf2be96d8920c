use diesel::prelude::*;
use log::{debug, info};

use super::schema::client;
use crate::{
    error::{BuildError, Result},
    models::{
        client::{Client, NewClient},
        domain::ClientStatus,
    },
};

pub fn insert(conn: &mut SqliteConnection, new_client: &NewClient) -> Result<usize> {
    let n = diesel::insert_into(client::table)
        .values(new_client)
        .execute(conn)?;
    Ok(n)
}

pub fn get(conn: &mut SqliteConnection, target_client: &str) -> Result<Client> {
    client::table
        .find(target_client)
        .select(Client::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| BuildError::NotFound {
            entity: "client",
            key: target_client.to_string(),
        })
}

pub fn get_all(conn: &mut SqliteConnection) -> Result<Vec<Client>> {
    let all = client::table
        .select(Client::as_select())
        .order(client::client_no)
        .load(conn)?;
    Ok(all)
}

/// Moves an Open client to its post-lease status. Any other client is left
/// untouched and the call returns 0.
pub fn close_if_open(conn: &mut SqliteConnection, target_client: &str) -> Result<usize> {
    let n = diesel::update(
        client::table
            .filter(client::client_no.eq(target_client))
            .filter(client::status.eq(ClientStatus::Open)),
    )
    .set(client::status.eq(ClientStatus::Open.after_lease()))
    .execute(conn)?;

    if n == 0 {
        debug!("Client {} was not Open, status unchanged", target_client);
    } else {
        info!("Client {} set to {}", target_client, ClientStatus::Closed);
    }
    Ok(n)
}
