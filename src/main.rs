use anyhow::{bail, Result};
use clap::Parser;
use log::{info, LevelFilter};

use dreamhome::{
    build,
    cli::{Cli, Command},
    config, db,
    logger::setup_logger,
    migrate, seed,
    services::leasing::{CreateLease, LeaseDesk},
    verify,
};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = config::read_config(cli.config.as_deref())?;
    if let Some(url) = cli.database_url {
        config.database_url = url;
    }

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        config.log_level()?
    };
    setup_logger(level)?;

    let conn = &mut db::establish_connection(&config)?;

    match cli.cmd {
        Command::Build(args) => {
            let report = build(conn, config.seed && !args.no_seed)?;
            if let Some(seeded) = report.seeded {
                info!("Seeded {} rows", seeded.total());
            }
            println!("{}", report.snapshot.counts());
        }
        Command::Migrate(args) => {
            let applied = match args.until {
                Some(step) => migrate::run_until(conn, &step)?,
                None => migrate::run_pending(conn)?,
            };
            for name in applied {
                println!("applied {}", name);
            }
        }
        Command::Revert(args) => {
            let reverted = if args.all {
                migrate::revert_all(conn)?
            } else {
                vec![migrate::revert_last(conn)?]
            };
            for version in reverted {
                println!("reverted {}", version);
            }
        }
        Command::Status => {
            for step in migrate::status(conn)? {
                let mark = if step.applied { "x" } else { " " };
                println!("[{}] {}", mark, step.name);
            }
        }
        Command::Seed => {
            let counts = seed::load(conn, &LeaseDesk::default())?;
            println!("{}", counts);
        }
        Command::Verify => {
            let snapshot = verify::scan(conn)?;
            let violations = verify::foreign_key_violations(conn)?;
            println!("{}", snapshot.counts());
            for (branch_no, members) in verify::staffing(conn)? {
                println!("{} staff={}", branch_no, members);
            }
            let unassigned = verify::unassigned_properties(conn)?;
            if !unassigned.is_empty() {
                println!("unassigned {}", unassigned.join(" "));
            }
            if violations > 0 {
                bail!("{} row(s) reference missing parents", violations);
            }
        }
        Command::Lease(args) => {
            let command = CreateLease {
                client_no: args.client,
                property_no: args.property,
                rent_start: args.start,
                rent_end: args.end,
                rent_amount: args.rent,
                payment_method: args.payment_method,
            };
            let lease = LeaseDesk::default().create_lease(conn, &command)?;
            let client = db::client::get(conn, &lease.client_no)?;
            let held = db::lease::get_for_client(conn, &client.client_no)?;
            println!(
                "lease {} created, client {} is {} with {} lease(s)",
                lease.lease_no,
                client.client_no,
                client.status,
                held.len()
            );
        }
        Command::ResetLeases(args) => {
            if !args.yes {
                bail!("reset-leases deletes every lease; pass --yes to confirm");
            }
            let deleted = db::lease::reset(conn)?;
            println!("deleted {} leases", deleted);
        }
    }

    Ok(())
}
