use diesel::prelude::*;

use super::domain::PropertyType;

#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = crate::db::schema::property_for_rent)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PropertyForRent {
    pub property_no: String,
    pub street: String,
    pub city: String,
    pub postcode: String,
    pub property_type: PropertyType,
    pub rooms: i32,
    pub rent: f64,
    pub owner_no: String,
    pub staff_no: Option<String>,
    pub branch_no: String,
}

#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = crate::db::schema::property_for_rent)]
pub struct NewProperty<'a> {
    pub property_no: &'a str,
    pub street: &'a str,
    pub city: &'a str,
    pub postcode: &'a str,
    pub property_type: PropertyType,
    pub rooms: i32,
    pub rent: f64,
    pub owner_no: &'a str,
    pub staff_no: Option<&'a str>,
    pub branch_no: &'a str,
}
