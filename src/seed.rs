//! Illustrative rows for a freshly built database.
//!
//! Rows go in dependency order inside one transaction. The lease goes through
//! [`LeaseDesk`] like any other lease, so its client ends up Closed.
use chrono::NaiveDate;
use diesel::{Connection, SqliteConnection};
use log::info;

use crate::{
    db,
    error::{BuildError, Result},
    models::{
        branch::NewBranch,
        client::NewClient,
        domain::{PropertyType, Sex},
        newspaper::NewNewspaperAd,
        private_owner::NewPrivateOwner,
        property::NewProperty,
        staff::NewStaff,
    },
    services::leasing::{CreateLease, LeaseDesk},
    verify::TableCounts,
};

pub const BRANCHES: &[NewBranch<'static>] = &[
    branch("B001", "22 Deer Rd", "Sydney", "2000"),
    branch("B002", "16 Argyle St", "Melbourne", "3000"),
    branch("B003", "163 Main St", "Brisbane", "4000"),
    branch("B004", "32 Manse Rd", "Perth", "6000"),
    branch("B005", "56 Clover Dr", "Adelaide", "5000"),
    branch("B006", "12 Harbour Pde", "Hobart", "7000"),
    branch("B007", "8 Smith St", "Darwin", "0800"),
    branch("B008", "45 Northbourne Ave", "Canberra", "2601"),
];

pub const STAFF: &[NewStaff<'static>] = &[
    staff("S001", "John", "White", "Manager", Sex::M, 90000.0, "B001"),
    staff("S002", "Ann", "Beech", "Assistant", Sex::F, 52000.0, "B001"),
    staff("S003", "David", "Ford", "Supervisor", Sex::M, 68000.0, "B001"),
    staff("S004", "Mary", "Howe", "Manager", Sex::F, 88000.0, "B002"),
    staff("S005", "Julie", "Lee", "Assistant", Sex::F, 51000.0, "B002"),
    staff("S006", "Susan", "Brand", "Manager", Sex::F, 87000.0, "B003"),
    staff("S007", "Peter", "Nguyen", "Assistant", Sex::M, 49500.0, "B003"),
    staff("S008", "Linda", "Park", "Manager", Sex::F, 86000.0, "B004"),
    staff("S009", "Tom", "Daly", "Supervisor", Sex::M, 66000.0, "B004"),
    staff("S010", "Grace", "Chen", "Manager", Sex::F, 85000.0, "B005"),
    staff("S011", "Mark", "Evans", "Assistant", Sex::M, 48000.0, "B005"),
    staff("S012", "Ruth", "Kelly", "Manager", Sex::F, 82000.0, "B006"),
    staff("S013", "Sam", "Walker", "Assistant", Sex::M, 47000.0, "B006"),
    staff("S014", "Kate", "Murphy", "Manager", Sex::F, 84000.0, "B007"),
    staff("S015", "Ian", "Ross", "Assistant", Sex::M, 50000.0, "B007"),
    staff("S016", "Paul", "Singh", "Manager", Sex::M, 89000.0, "B008"),
    staff("S017", "Emma", "Taylor", "Assistant", Sex::F, 53000.0, "B008"),
];

pub const OWNERS: &[NewPrivateOwner<'static>] = &[
    owner("CO40", "Tina", "Murphy", "0291234567", "63 Well St", "Sydney", "2010"),
    owner("CO46", "Joe", "Keogh", "0391234567", "2 Fergus Dr", "Melbourne", "3121"),
    owner("CO55", "Aaron", "Bishop", "0731234567", "9 Coronation Dr", "Brisbane", "4064"),
    owner("CO87", "Carol", "Farrel", "0891234567", "6 Achray St", "Perth", "6008"),
    owner("CO93", "Tony", "Shaw", "0881234567", "12 Park Pl", "Adelaide", "5006"),
];

pub const PROPERTIES: &[NewProperty<'static>] = &[
    NewProperty {
        property_no: "PFR01",
        street: "16 Holhead St",
        city: "Sydney",
        postcode: "2010",
        property_type: PropertyType::Flat,
        rooms: 2,
        rent: 450.0,
        owner_no: "CO40",
        staff_no: Some("S002"),
        branch_no: "B001",
    },
    NewProperty {
        property_no: "PFR02",
        street: "5 Novar Dr",
        city: "Melbourne",
        postcode: "3121",
        property_type: PropertyType::House,
        rooms: 4,
        rent: 650.0,
        owner_no: "CO46",
        staff_no: Some("S005"),
        branch_no: "B002",
    },
    NewProperty {
        property_no: "PFR03",
        street: "18 Dale Rd",
        city: "Brisbane",
        postcode: "4064",
        property_type: PropertyType::Bungalow,
        rooms: 3,
        rent: 520.0,
        owner_no: "CO55",
        staff_no: None,
        branch_no: "B003",
    },
    NewProperty {
        property_no: "PFR04",
        street: "2 Manor Rd",
        city: "Perth",
        postcode: "6008",
        property_type: PropertyType::Apartment,
        rooms: 1,
        rent: 380.0,
        owner_no: "CO87",
        staff_no: Some("S009"),
        branch_no: "B004",
    },
    NewProperty {
        property_no: "PFR05",
        street: "10 Argyle St",
        city: "Adelaide",
        postcode: "5006",
        property_type: PropertyType::House,
        rooms: 5,
        rent: 720.0,
        owner_no: "CO93",
        staff_no: Some("S011"),
        branch_no: "B005",
    },
    NewProperty {
        property_no: "PFR06",
        street: "44 Lawrence St",
        city: "Sydney",
        postcode: "2011",
        property_type: PropertyType::Apartment,
        rooms: 2,
        rent: 500.0,
        owner_no: "CO40",
        staff_no: None,
        branch_no: "B001",
    },
    NewProperty {
        property_no: "PFR07",
        street: "7 Kent Ave",
        city: "Melbourne",
        postcode: "3000",
        property_type: PropertyType::Flat,
        rooms: 1,
        rent: 410.0,
        owner_no: "CO46",
        staff_no: Some("S004"),
        branch_no: "B002",
    },
];

pub const CLIENTS: &[NewClient<'static>] = &[
    client("C001", "John", "Kay", "0412345678", PropertyType::Flat, 500.0, "B001"),
    client("C002", "Aline", "Stewart", "0423456789", PropertyType::House, 700.0, "B002"),
    client("C003", "Mike", "Ritchie", "0434567890", PropertyType::Bungalow, 550.0, "B003"),
    client("C004", "Mary", "Tregear", "0445678901", PropertyType::Apartment, 400.0, "B004"),
    client("C005", "Nina", "Patel", "0456789012", PropertyType::House, 800.0, "B005"),
];

pub fn lease() -> CreateLease {
    CreateLease {
        client_no: "C001".to_string(),
        property_no: "PFR01".to_string(),
        rent_start: date(2024, 7, 1),
        rent_end: date(2025, 6, 30),
        rent_amount: 450.0,
        payment_method: "Direct Debit".to_string(),
    }
}

pub fn newspaper_ads() -> Vec<NewNewspaperAd<'static>> {
    vec![
        NewNewspaperAd {
            newspaper_name: "Sydney Morning Herald",
            newspaper_address: "1 Darling Island Rd, Pyrmont NSW 2009",
            newspaper_tel_no: "0292822833",
            contact_name: "Helen Price",
            property_no: "PFR01",
            date_advertised: date(2024, 5, 20),
            cost_to_advertise: 120.0,
        },
        NewNewspaperAd {
            newspaper_name: "The Age",
            newspaper_address: "717 Bourke St, Docklands VIC 3008",
            newspaper_tel_no: "0386672000",
            contact_name: "Rob Kemp",
            property_no: "PFR02",
            date_advertised: date(2024, 5, 27),
            cost_to_advertise: 145.5,
        },
        NewNewspaperAd {
            newspaper_name: "The West Australian",
            newspaper_address: "50 Hasler Rd, Osborne Park WA 6017",
            newspaper_tel_no: "0894822000",
            contact_name: "Jo Marsh",
            property_no: "PFR04",
            date_advertised: date(2024, 6, 3),
            cost_to_advertise: 0.0,
        },
    ]
}

/// Inserts every seed row. Fails without writing anything if any row is rejected.
pub fn load(conn: &mut SqliteConnection, desk: &LeaseDesk) -> Result<TableCounts> {
    let counts = conn.transaction(|conn| {
        let mut counts = TableCounts::default();

        for row in BRANCHES {
            counts.branch += db::branch::insert(conn, row)?;
        }
        info!("Inserted {} rows into branch", counts.branch);

        for row in STAFF {
            counts.staff += db::staff::insert(conn, row)?;
        }
        info!("Inserted {} rows into staff", counts.staff);

        for row in OWNERS {
            counts.private_owner += db::private_owner::insert(conn, row)?;
        }
        info!("Inserted {} rows into private_owner", counts.private_owner);

        for row in PROPERTIES {
            counts.property_for_rent += db::property::insert(conn, row)?;
        }
        info!("Inserted {} rows into property_for_rent", counts.property_for_rent);

        for row in CLIENTS {
            counts.client += db::client::insert(conn, row)?;
        }
        info!("Inserted {} rows into client", counts.client);

        desk.create_lease(conn, &lease())?;
        counts.lease += 1;

        for row in newspaper_ads() {
            db::newspaper::insert(conn, &row)?;
            counts.newspapers += 1;
        }
        info!("Inserted {} rows into newspapers", counts.newspapers);

        Ok::<_, BuildError>(counts)
    })?;

    Ok(counts)
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed dates are valid calendar dates")
}

const fn branch(
    branch_no: &'static str,
    street: &'static str,
    city: &'static str,
    postcode: &'static str,
) -> NewBranch<'static> {
    NewBranch {
        branch_no,
        street,
        city,
        postcode,
    }
}

const fn staff(
    staff_no: &'static str,
    f_name: &'static str,
    l_name: &'static str,
    position: &'static str,
    sex: Sex,
    salary: f64,
    branch_no: &'static str,
) -> NewStaff<'static> {
    NewStaff {
        staff_no,
        f_name,
        l_name,
        position,
        sex,
        salary,
        branch_no,
    }
}

const fn owner(
    owner_no: &'static str,
    f_name: &'static str,
    l_name: &'static str,
    tel_no: &'static str,
    street: &'static str,
    city: &'static str,
    postcode: &'static str,
) -> NewPrivateOwner<'static> {
    NewPrivateOwner {
        owner_no,
        f_name,
        l_name,
        tel_no,
        street,
        city,
        postcode,
    }
}

const fn client(
    client_no: &'static str,
    f_name: &'static str,
    l_name: &'static str,
    tel_no: &'static str,
    pref_type: PropertyType,
    max_rent: f64,
    branch_no: &'static str,
) -> NewClient<'static> {
    NewClient {
        client_no,
        f_name,
        l_name,
        tel_no,
        pref_type,
        max_rent,
        branch_no,
    }
}
