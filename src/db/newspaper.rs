use diesel::prelude::*;

use super::schema::newspapers;
use crate::{
    error::Result,
    models::newspaper::{NewNewspaperAd, NewspaperAd},
};

pub fn insert(conn: &mut SqliteConnection, ad: &NewNewspaperAd) -> Result<NewspaperAd> {
    let stored = diesel::insert_into(newspapers::table)
        .values(ad)
        .returning(NewspaperAd::as_returning())
        .get_result(conn)?;
    Ok(stored)
}

pub fn get_all(conn: &mut SqliteConnection) -> Result<Vec<NewspaperAd>> {
    let all = newspapers::table
        .select(NewspaperAd::as_select())
        .order(newspapers::newspaper_ad_no)
        .load(conn)?;
    Ok(all)
}
