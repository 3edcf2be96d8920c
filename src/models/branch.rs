use diesel::prelude::*;

#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = crate::db::schema::branch)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Branch {
    pub branch_no: String,
    pub street: String,
    pub city: String,
    pub postcode: String,
}

#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = crate::db::schema::branch)]
pub struct NewBranch<'a> {
    pub branch_no: &'a str,
    pub street: &'a str,
    pub city: &'a str,
    pub postcode: &'a str,
}
