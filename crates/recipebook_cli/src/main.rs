//! Catalog seeding entry point.
//!
//! # Responsibility
//! - Initialize core logging, open (and migrate) the catalog database, run
//!   the seeder once, and report the resulting recipe count.
//! - Keep output deterministic for quick local sanity checks.

use recipebook_core::db::open_db;
use recipebook_core::{core_version, default_log_level, init_logging, CatalogSeeder};
use std::process::ExitCode;

const DEFAULT_DB_PATH: &str = "recipebook.db";
const LOG_DIR_NAME: &str = "logs";

fn main() -> ExitCode {
    // Seeding proceeds without file logging rather than failing startup.
    if let Err(err) = init_file_logging() {
        eprintln!("logging disabled: {err}");
    }

    println!("recipebook_core version={}", core_version());

    let db_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DB_PATH.to_string());

    let mut conn = match open_db(&db_path) {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("failed to open catalog database `{db_path}`: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut seeder = CatalogSeeder::new(&mut conn);
    match seeder.run() {
        Ok(report) => {
            println!("total recipes: {}", report.total_recipes);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("catalog seeding failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_file_logging() -> Result<(), String> {
    let log_dir = std::env::current_dir()
        .map_err(|err| format!("cannot determine working directory: {err}"))?
        .join(LOG_DIR_NAME);
    init_logging(default_log_level(), &log_dir.to_string_lossy())
}
