use diesel::prelude::*;

use super::schema::private_owner;
use crate::{
    error::Result,
    models::private_owner::{NewPrivateOwner, PrivateOwner},
};

pub fn insert(conn: &mut SqliteConnection, owner: &NewPrivateOwner) -> Result<usize> {
    let n = diesel::insert_into(private_owner::table)
        .values(owner)
        .execute(conn)?;
    Ok(n)
}

pub fn get_all(conn: &mut SqliteConnection) -> Result<Vec<PrivateOwner>> {
    let all = private_owner::table
        .select(PrivateOwner::as_select())
        .order(private_owner::owner_no)
        .load(conn)?;
    Ok(all)
}
