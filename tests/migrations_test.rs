mod common;

#[cfg(test)]
mod schema_evolution {
    use diesel::migration::MigrationSource;
    use diesel::sqlite::Sqlite;
    use diesel_migrations::MigrationHarness;
    use dreamhome::{
        build, db,
        error::BuildError,
        migrate::{self, TableReference},
        models::domain::ClientStatus,
        verify::{self, TableCounts},
    };

    use crate::common::{fresh_connection, migrated_connection, raw};

    const TABLES: &str = "SELECT COUNT(*) AS row_count FROM sqlite_master WHERE type = 'table' \
        AND name IN ('branch', 'staff', 'private_owner', 'property_for_rent', 'client', 'lease', 'newspapers')";

    fn step_count() -> usize {
        MigrationSource::<Sqlite>::migrations(&migrate::MIGRATIONS)
            .unwrap()
            .len()
    }

    #[test]
    fn applies_every_step_in_order() {
        let mut conn = fresh_connection();
        let applied = migrate::run_pending(&mut conn).unwrap();

        assert_eq!(applied.len(), 10);
        assert_eq!(applied.len(), step_count());
        assert!(applied[0].ends_with("create_branch"));
        assert!(applied[6].ends_with("create_newspapers"));
        assert!(applied[9].ends_with("add_client_status"));
        assert_eq!(db::count(&mut conn, TABLES).unwrap(), 7);
        assert!(migrate::pending(&mut conn).unwrap().is_empty());
    }

    #[test]
    fn second_run_is_a_no_op() {
        let mut conn = migrated_connection();
        assert!(migrate::run_pending(&mut conn).unwrap().is_empty());
        assert!(migrate::status(&mut conn).unwrap().iter().all(|s| s.applied));
    }

    #[test]
    fn pre_existing_rows_get_column_defaults() {
        let mut conn = fresh_connection();
        migrate::run_until(&mut conn, "create_newspapers").unwrap();

        raw(&mut conn, "INSERT INTO branch VALUES ('B001', '22 Deer Rd', 'Sydney', '2000')").unwrap();
        raw(
            &mut conn,
            "INSERT INTO staff (staff_no, f_name, l_name, position, sex, salary, branch_no) \
             VALUES ('S001', 'John', 'White', 'Manager', 'M', 90000, 'B001')",
        )
        .unwrap();
        raw(
            &mut conn,
            "INSERT INTO client (client_no, f_name, l_name, tel_no, pref_type, max_rent, branch_no) \
             VALUES ('C001', 'John', 'Kay', '0412345678', 'Flat', 500, 'B001')",
        )
        .unwrap();

        let applied = migrate::run_pending(&mut conn).unwrap();
        assert_eq!(applied.len(), 3);

        let staff = db::staff::get_all(&mut conn).unwrap();
        assert_eq!(staff.len(), 1);
        assert_eq!(staff[0].currency, "AUD");

        let client = db::client::get(&mut conn, "C001").unwrap();
        assert_eq!(client.status, ClientStatus::Open);
    }

    #[test]
    fn owner_address_step_refuses_populated_table() {
        let mut conn = fresh_connection();
        migrate::run_until(&mut conn, "create_newspapers").unwrap();
        raw(
            &mut conn,
            "INSERT INTO private_owner VALUES ('CO40', 'Tina', 'Murphy', '63 Well St, Sydney 2010', '0291234567')",
        )
        .unwrap();

        let err = migrate::run_pending(&mut conn).unwrap_err();
        match err {
            BuildError::PopulatedEvolution {
                migration,
                table,
                rows,
            } => {
                assert!(migration.ends_with("structure_owner_address"));
                assert_eq!(table, "private_owner");
                assert_eq!(rows, 1);
            }
            other => panic!("unexpected error {:?}", other),
        }

        // The currency step ran, the guarded step and everything after did not.
        let pending = migrate::pending(&mut conn).unwrap();
        assert_eq!(pending.len(), 2);
        assert!(pending[0].ends_with("structure_owner_address"));
        assert_eq!(
            db::count(&mut conn, "SELECT COUNT(*) AS row_count FROM private_owner WHERE address IS NOT NULL").unwrap(),
            1
        );
    }

    #[test]
    fn owner_address_sql_rejects_populated_table_without_guard() {
        let mut conn = fresh_connection();
        migrate::run_until(&mut conn, "add_staff_currency").unwrap();
        raw(
            &mut conn,
            "INSERT INTO private_owner VALUES ('CO46', 'Joe', 'Keogh', '2 Fergus Dr, Melbourne 3121', '0391234567')",
        )
        .unwrap();

        assert!(conn.run_pending_migrations(migrate::MIGRATIONS).is_err());

        let pending = migrate::pending(&mut conn).unwrap();
        assert!(pending[0].ends_with("structure_owner_address"));
        assert_eq!(
            db::count(&mut conn, "SELECT COUNT(*) AS row_count FROM private_owner").unwrap(),
            1
        );
    }

    #[test]
    fn run_until_rejects_unknown_step() {
        let mut conn = fresh_connection();
        let err = migrate::run_until(&mut conn, "create_tenants").unwrap_err();
        assert!(matches!(err, BuildError::Migration { .. }));
        assert!(migrate::applied(&mut conn).unwrap().is_empty());
    }

    #[test]
    fn revert_last_undoes_client_status() {
        let mut conn = migrated_connection();
        let version = migrate::revert_last(&mut conn).unwrap();
        assert!(version.ends_with("000003"));

        let pending = migrate::pending(&mut conn).unwrap();
        assert_eq!(pending.len(), 1);
        assert!(pending[0].ends_with("add_client_status"));
        assert!(raw(&mut conn, "SELECT status FROM client").is_err());
    }

    #[test]
    fn full_revert_and_replay() {
        let mut conn = migrated_connection();

        let reverted = migrate::revert_all(&mut conn).unwrap();
        assert_eq!(reverted.len(), 10);
        assert_eq!(db::count(&mut conn, TABLES).unwrap(), 0);

        let replayed = migrate::run_pending(&mut conn).unwrap();
        assert_eq!(replayed.len(), 10);
        assert_eq!(db::count(&mut conn, TABLES).unwrap(), 7);
    }

    #[test]
    fn seeded_owner_address_folds_back_on_revert() {
        let mut conn = fresh_connection();
        build(&mut conn, true).unwrap();

        assert!(migrate::revert_last(&mut conn).unwrap().ends_with("000003"));
        assert!(migrate::revert_last(&mut conn).unwrap().ends_with("000002"));

        assert_eq!(
            db::count(
                &mut conn,
                "SELECT COUNT(*) AS row_count FROM private_owner WHERE address = '63 Well St, Sydney 2010'"
            )
            .unwrap(),
            1
        );
        assert!(raw(&mut conn, "SELECT street FROM private_owner").is_err());
        assert_eq!(
            db::count(&mut conn, "SELECT COUNT(*) AS row_count FROM property_for_rent").unwrap(),
            7
        );
        assert_eq!(verify::foreign_key_violations(&mut conn).unwrap(), 0);

        // Owners are present again, so replaying the step is refused.
        let err = migrate::run_pending(&mut conn).unwrap_err();
        assert!(matches!(
            err,
            BuildError::PopulatedEvolution { rows: 5, .. }
        ));
    }

    #[test]
    fn seeded_build_reverts_completely_and_replays() {
        let mut conn = fresh_connection();
        build(&mut conn, true).unwrap();

        let reverted = migrate::revert_all(&mut conn).unwrap();
        assert_eq!(reverted.len(), 10);
        assert_eq!(db::count(&mut conn, TABLES).unwrap(), 0);

        let report = build(&mut conn, true).unwrap();
        assert_eq!(report.applied.len(), 10);
        assert_eq!(report.snapshot.counts(), TableCounts::SEED);
    }

    #[test]
    fn built_schema_has_no_dangling_references() {
        let mut conn = migrated_connection();
        assert!(migrate::check_references(&mut conn).unwrap().is_empty());
    }

    #[test]
    fn detects_reference_to_missing_table() {
        let mut conn = fresh_connection();
        raw(
            &mut conn,
            "CREATE TABLE orphan (orphan_no TEXT PRIMARY KEY NOT NULL, parent_no TEXT REFERENCES missing_parent (parent_no))",
        )
        .unwrap();

        let dangling = migrate::check_references(&mut conn).unwrap();
        assert_eq!(
            dangling,
            vec![TableReference {
                child: "orphan".to_string(),
                parent: "missing_parent".to_string(),
            }]
        );
    }
}
