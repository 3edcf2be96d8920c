mod common;

#[cfg(test)]
mod seed_load {
    use dreamhome::{
        build, db,
        error::BuildError,
        models::domain::ClientStatus,
        seed,
        services::leasing::LeaseDesk,
        verify::{self, TableCounts},
    };

    use crate::common::{fresh_connection, migrated_connection};

    #[test]
    fn build_produces_expected_rows() {
        let mut conn = fresh_connection();
        let report = build(&mut conn, true).unwrap();

        assert_eq!(report.applied.len(), 10);
        assert_eq!(report.seeded, Some(TableCounts::SEED));
        assert_eq!(report.snapshot.counts(), TableCounts::SEED);
        assert_eq!(TableCounts::SEED.total(), 46);

        let closed: Vec<&str> = report
            .snapshot
            .clients_with(ClientStatus::Closed)
            .iter()
            .map(|c| c.client_no.as_str())
            .collect();
        assert_eq!(closed, vec!["C001"]);
        assert_eq!(report.snapshot.clients_with(ClientStatus::Open).len(), 4);
    }

    #[test]
    fn seeded_staff_use_default_currency() {
        let mut conn = fresh_connection();
        let report = build(&mut conn, true).unwrap();
        assert!(report.snapshot.staff.iter().all(|s| s.currency == "AUD"));
        assert_eq!(db::staff::get_for_branch(&mut conn, "B001").unwrap().len(), 3);
    }

    #[test]
    fn verify_reports_staffing_and_unassigned_properties() {
        let mut conn = fresh_connection();
        build(&mut conn, true).unwrap();

        let staffing = verify::staffing(&mut conn).unwrap();
        assert_eq!(staffing.len(), 8);
        assert_eq!(staffing[0], ("B001".to_string(), 3));
        assert!(staffing.iter().all(|(_, members)| *members >= 2));
        assert_eq!(staffing.iter().map(|(_, m)| m).sum::<usize>(), 17);

        assert_eq!(
            verify::unassigned_properties(&mut conn).unwrap(),
            vec!["PFR03".to_string(), "PFR06".to_string()]
        );
    }

    #[test]
    fn seeded_database_has_intact_references() {
        let mut conn = fresh_connection();
        build(&mut conn, true).unwrap();
        assert_eq!(verify::foreign_key_violations(&mut conn).unwrap(), 0);

        let snapshot = verify::scan(&mut conn).unwrap();
        let lease = &snapshot.leases[0];
        assert_eq!(lease.client_no, "C001");
        assert_eq!(lease.property_no, "PFR01");
        assert!(lease.rent_end > lease.rent_start);
    }

    #[test]
    fn build_without_seed_leaves_tables_empty() {
        let mut conn = fresh_connection();
        let report = build(&mut conn, false).unwrap();
        assert_eq!(report.seeded, None);
        assert_eq!(report.snapshot.counts(), TableCounts::default());
    }

    #[test]
    fn reloading_seed_fails_and_changes_nothing() {
        let mut conn = migrated_connection();
        let desk = LeaseDesk::default();
        seed::load(&mut conn, &desk).unwrap();

        let err = seed::load(&mut conn, &desk).unwrap_err();
        assert!(matches!(err, BuildError::Duplicate(_)));
        assert_eq!(verify::scan(&mut conn).unwrap().counts(), TableCounts::SEED);
    }

    #[test]
    fn seed_requires_migrated_schema() {
        let mut conn = fresh_connection();
        assert!(seed::load(&mut conn, &LeaseDesk::default()).is_err());
    }
}
