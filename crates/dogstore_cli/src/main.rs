//! CLI smoke entry point.
//!
//! # Responsibility
//! - Exercise `dogstore_core` end to end against a real SQLite database.
//! - Keep output deterministic for quick local sanity checks.
//!
//! Usage: `dogstore_cli [DB_PATH]`. Without a path an in-memory database is
//! used. Set `DOGSTORE_LOG_DIR` to an absolute path to enable file logs.

use dogstore_core::{
    default_log_level, init_logging, open_db, open_db_in_memory, DogService,
    SqliteDogRepository,
};
use std::process::ExitCode;

const LOG_DIR_ENV: &str = "DOGSTORE_LOG_DIR";

fn main() -> ExitCode {
    if let Ok(log_dir) = std::env::var(LOG_DIR_ENV) {
        if let Err(err) = init_logging(default_log_level(), &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    match run(std::env::args().nth(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("event=cli_run module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(db_path: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let conn = match db_path.as_deref() {
        Some(path) => open_db(path)?,
        None => open_db_in_memory()?,
    };
    let service = DogService::new(SqliteDogRepository::new(&conn));

    service.create_table()?;
    let dog = service.find_or_create_by("joey", "cocker spaniel")?;

    println!("dogstore_core version={}", dogstore_core::core_version());
    println!(
        "dog id={} name={} breed={}",
        dog.id.unwrap_or_default(),
        dog.name.as_deref().unwrap_or("NULL"),
        dog.breed.as_deref().unwrap_or("NULL")
    );
    println!("dogs total={}", service.get_all()?.len());
    Ok(())
}
