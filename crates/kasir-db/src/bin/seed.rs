//! # Seed Data Loader
//!
//! Populates a database with the default Kasir catalog.
//!
//! ## Usage
//! ```bash
//! # Seed ./kasir.db (default)
//! cargo run -p kasir-db --bin seed
//!
//! # Specify database path
//! cargo run -p kasir-db --bin seed -- --db ./data/kasir.db
//! ```
//!
//! Tables that already hold rows are left alone.

use anyhow::Context;
use kasir_db::{seed, Database, DbConfig};
use std::env;
use tracing_subscriber::EnvFilter;

/// What the command line asks for.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Seed { db_path: String },
    Help,
}

/// Parses arguments after the program name.
fn parse_args(args: &[String], default_path: String) -> anyhow::Result<Command> {
    let mut db_path = default_path;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                let Some(path) = args.get(i + 1) else {
                    anyhow::bail!("{} requires a path (try --help)", args[i]);
                };
                db_path = path.clone();
                i += 1;
            }
            "--help" | "-h" => return Ok(Command::Help),
            other => {
                anyhow::bail!("unknown argument: {other} (try --help)");
            }
        }
        i += 1;
    }

    Ok(Command::Seed { db_path })
}

fn print_help() {
    println!("Kasir POS Seed Data Loader");
    println!();
    println!("Usage: seed [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -d, --db <PATH>    Database file path (default: ./kasir.db)");
    println!("  -h, --help         Show this help message");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn")),
        )
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let default_path = env::var("DATABASE_PATH").unwrap_or_else(|_| String::from("./kasir.db"));

    let db_path = match parse_args(&args, default_path)? {
        Command::Seed { db_path } => db_path,
        Command::Help => {
            print_help();
            return Ok(());
        }
    };

    println!("🌱 Kasir POS Seed Data Loader");
    println!("=============================");
    println!("Database: {}", db_path);
    println!();

    let db = Database::new(DbConfig::new(&db_path))
        .await
        .with_context(|| format!("opening database {db_path}"))?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let summary = seed::seed_default_catalog(&db)
        .await
        .context("seeding default catalog")?;

    if summary.categories == 0 && summary.products == 0 {
        println!("⚠ Catalog already populated, nothing to do.");
        println!("  Delete the database file to regenerate.");
    } else {
        println!(
            "✓ Inserted {} categories and {} products",
            summary.categories, summary.products
        );
    }

    db.close().await;
    println!();
    println!("✓ Seed complete!");

    Ok(())
}
