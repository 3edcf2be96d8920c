use diesel::prelude::*;

use super::domain::Sex;

#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = crate::db::schema::staff)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Staff {
    pub staff_no: String,
    pub f_name: String,
    pub l_name: String,
    pub position: String,
    pub sex: Sex,
    pub salary: f64,
    pub branch_no: String,
    pub currency: String,
}

/// Currency is left to the column default.
#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = crate::db::schema::staff)]
pub struct NewStaff<'a> {
    pub staff_no: &'a str,
    pub f_name: &'a str,
    pub l_name: &'a str,
    pub position: &'a str,
    pub sex: Sex,
    pub salary: f64,
    pub branch_no: &'a str,
}
