use chrono::NaiveDate;
use diesel::prelude::*;

#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = crate::db::schema::lease)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Lease {
    pub lease_no: i32,
    pub client_no: String,
    pub property_no: String,
    pub rent_start: NaiveDate,
    pub rent_end: NaiveDate,
    pub rent_amount: f64,
    pub payment_method: String,
}

#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = crate::db::schema::lease)]
pub struct NewLease<'a> {
    pub client_no: &'a str,
    pub property_no: &'a str,
    pub rent_start: NaiveDate,
    pub rent_end: NaiveDate,
    pub rent_amount: f64,
    pub payment_method: &'a str,
}
