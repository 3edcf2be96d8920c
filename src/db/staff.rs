use diesel::prelude::*;

use super::schema::staff;
use crate::{
    error::Result,
    models::staff::{NewStaff, Staff},
};

pub fn insert(conn: &mut SqliteConnection, new_staff: &NewStaff) -> Result<usize> {
    let n = diesel::insert_into(staff::table)
        .values(new_staff)
        .execute(conn)?;
    Ok(n)
}

pub fn get_all(conn: &mut SqliteConnection) -> Result<Vec<Staff>> {
    let all = staff::table
        .select(Staff::as_select())
        .order(staff::staff_no)
        .load(conn)?;
    Ok(all)
}

pub fn get_for_branch(conn: &mut SqliteConnection, target_branch: &str) -> Result<Vec<Staff>> {
    let members = staff::table
        .filter(staff::branch_no.eq(target_branch))
        .select(Staff::as_select())
        .order(staff::staff_no)
        .load(conn)?;
    Ok(members)
}
