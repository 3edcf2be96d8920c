use diesel::prelude::*;

use super::schema::branch;
use crate::{
    error::Result,
    models::branch::{Branch, NewBranch},
};

pub fn insert(conn: &mut SqliteConnection, new_branch: &NewBranch) -> Result<usize> {
    let n = diesel::insert_into(branch::table)
        .values(new_branch)
        .execute(conn)?;
    Ok(n)
}

pub fn get_all(conn: &mut SqliteConnection) -> Result<Vec<Branch>> {
    let all = branch::table
        .select(Branch::as_select())
        .order(branch::branch_no)
        .load(conn)?;
    Ok(all)
}
