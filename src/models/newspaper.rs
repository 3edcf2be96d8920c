use chrono::NaiveDate;
use diesel::prelude::*;

#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = crate::db::schema::newspapers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct NewspaperAd {
    pub newspaper_ad_no: i32,
    pub newspaper_name: String,
    pub newspaper_address: String,
    pub newspaper_tel_no: String,
    pub contact_name: String,
    pub property_no: String,
    pub date_advertised: NaiveDate,
    pub cost_to_advertise: f64,
}

#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = crate::db::schema::newspapers)]
pub struct NewNewspaperAd<'a> {
    pub newspaper_name: &'a str,
    pub newspaper_address: &'a str,
    pub newspaper_tel_no: &'a str,
    pub contact_name: &'a str,
    pub property_no: &'a str,
    pub date_advertised: NaiveDate,
    pub cost_to_advertise: f64,
}
