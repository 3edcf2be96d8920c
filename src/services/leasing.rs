//! Lease creation.
//!
//! Signing a lease is a command. The insert emits a [`LeaseEvent`] which the
//! desk hands to each registered [`LeaseEventHandler`] inside the same
//! transaction, so either the lease and all of its consequences are stored
//! or none of them are.
use chrono::NaiveDate;
use diesel::{Connection, SqliteConnection};
use log::info;

use crate::{
    db,
    error::{BuildError, Result},
    models::lease::{Lease, NewLease},
};

#[derive(Debug, Clone, PartialEq)]
pub struct CreateLease {
    pub client_no: String,
    pub property_no: String,
    pub rent_start: NaiveDate,
    pub rent_end: NaiveDate,
    pub rent_amount: f64,
    pub payment_method: String,
}

impl CreateLease {
    pub fn validate(&self) -> Result<()> {
        if self.rent_end <= self.rent_start {
            return Err(BuildError::constraint(format!(
                "lease for {} ends {} which is not after its start {}",
                self.client_no, self.rent_end, self.rent_start
            )));
        }
        if !(self.rent_amount > 0.0) {
            return Err(BuildError::constraint(format!(
                "lease for {} has non-positive rent {}",
                self.client_no, self.rent_amount
            )));
        }
        Ok(())
    }

    fn as_new(&self) -> NewLease<'_> {
        NewLease {
            client_no: &self.client_no,
            property_no: &self.property_no,
            rent_start: self.rent_start,
            rent_end: self.rent_end,
            rent_amount: self.rent_amount,
            payment_method: &self.payment_method,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeaseEvent {
    Created { lease_no: i32, client_no: String },
}

pub trait LeaseEventHandler {
    fn handle(&self, conn: &mut SqliteConnection, event: &LeaseEvent) -> Result<()>;
}

/// Closes the leasing client if it is still Open. A client that is already
/// Closed is left alone.
pub struct CloseClientOnLease;

impl LeaseEventHandler for CloseClientOnLease {
    fn handle(&self, conn: &mut SqliteConnection, event: &LeaseEvent) -> Result<()> {
        match event {
            LeaseEvent::Created { client_no, .. } => {
                db::client::close_if_open(conn, client_no)?;
            }
        }
        Ok(())
    }
}

/// The only way to store a lease. [`CloseClientOnLease`] is always the first
/// handler; extra handlers run after it.
pub struct LeaseDesk {
    handlers: Vec<Box<dyn LeaseEventHandler>>,
}

impl Default for LeaseDesk {
    fn default() -> Self {
        LeaseDesk {
            handlers: vec![Box::new(CloseClientOnLease)],
        }
    }
}

impl LeaseDesk {
    pub fn with_handler(mut self, handler: impl LeaseEventHandler + 'static) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    pub fn create_lease(&self, conn: &mut SqliteConnection, command: &CreateLease) -> Result<Lease> {
        command.validate()?;

        let lease = conn.transaction(|conn| {
            let lease = db::lease::insert(conn, &command.as_new())?;
            let event = LeaseEvent::Created {
                lease_no: lease.lease_no,
                client_no: lease.client_no.clone(),
            };
            for handler in &self.handlers {
                handler.handle(conn, &event)?;
            }
            Ok::<_, BuildError>(lease)
        })?;

        info!(
            "Lease {} created for client {} on property {}",
            lease.lease_no, lease.client_no, lease.property_no
        );
        Ok(lease)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(start: (i32, u32, u32), end: (i32, u32, u32), amount: f64) -> CreateLease {
        CreateLease {
            client_no: "C001".to_string(),
            property_no: "PFR01".to_string(),
            rent_start: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            rent_end: NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
            rent_amount: amount,
            payment_method: "Cheque".to_string(),
        }
    }

    #[test]
    fn accepts_well_formed_lease() {
        assert!(command((2024, 7, 1), (2025, 6, 30), 450.0).validate().is_ok());
    }

    #[test]
    fn end_must_follow_start() {
        let same_day = command((2024, 7, 1), (2024, 7, 1), 450.0);
        assert!(matches!(same_day.validate(), Err(BuildError::Constraint(_))));
        let backwards = command((2024, 7, 1), (2024, 6, 1), 450.0);
        assert!(matches!(backwards.validate(), Err(BuildError::Constraint(_))));
    }

    #[test]
    fn rent_must_be_positive() {
        assert!(command((2024, 7, 1), (2025, 6, 30), 0.0).validate().is_err());
        assert!(command((2024, 7, 1), (2025, 6, 30), -10.0).validate().is_err());
        assert!(command((2024, 7, 1), (2025, 6, 30), f64::NAN).validate().is_err());
    }
}
