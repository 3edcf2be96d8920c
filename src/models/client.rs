use diesel::prelude::*;

use super::domain::{ClientStatus, PropertyType};

#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = crate::db::schema::client)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Client {
    pub client_no: String,
    pub f_name: String,
    pub l_name: String,
    pub tel_no: String,
    pub pref_type: PropertyType,
    pub max_rent: f64,
    pub branch_no: String,
    pub status: ClientStatus,
}

/// New clients always start Open via the column default.
#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = crate::db::schema::client)]
pub struct NewClient<'a> {
    pub client_no: &'a str,
    pub f_name: &'a str,
    pub l_name: &'a str,
    pub tel_no: &'a str,
    pub pref_type: PropertyType,
    pub max_rent: f64,
    pub branch_no: &'a str,
}
