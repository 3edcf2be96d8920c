use diesel::prelude::*;

use super::schema::property_for_rent;
use crate::{
    error::Result,
    models::property::{NewProperty, PropertyForRent},
};

pub fn insert(conn: &mut SqliteConnection, property: &NewProperty) -> Result<usize> {
    let n = diesel::insert_into(property_for_rent::table)
        .values(property)
        .execute(conn)?;
    Ok(n)
}

pub fn get_all(conn: &mut SqliteConnection) -> Result<Vec<PropertyForRent>> {
    let all = property_for_rent::table
        .select(PropertyForRent::as_select())
        .order(property_for_rent::property_no)
        .load(conn)?;
    Ok(all)
}

/// Properties with no staff member assigned.
pub fn get_unassigned(conn: &mut SqliteConnection) -> Result<Vec<PropertyForRent>> {
    let unassigned = property_for_rent::table
        .filter(property_for_rent::staff_no.is_null())
        .select(PropertyForRent::as_select())
        .order(property_for_rent::property_no)
        .load(conn)?;
    Ok(unassigned)
}
