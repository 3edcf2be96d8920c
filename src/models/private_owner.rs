use diesel::prelude::*;

#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = crate::db::schema::private_owner)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PrivateOwner {
    pub owner_no: String,
    pub f_name: String,
    pub l_name: String,
    pub tel_no: String,
    pub street: String,
    pub city: String,
    pub postcode: String,
}

#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = crate::db::schema::private_owner)]
pub struct NewPrivateOwner<'a> {
    pub owner_no: &'a str,
    pub f_name: &'a str,
    pub l_name: &'a str,
    pub tel_no: &'a str,
    pub street: &'a str,
    pub city: &'a str,
    pub postcode: &'a str,
}
