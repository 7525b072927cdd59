//! SQLite database layer.
//!
//! Schema creation happens once at startup in [`initialize`]; every query
//! opens its own short-lived connection.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use tracing::info;

use shelter_common::model::{Breed, Dog, DogDetail, DogStatus};

/// Create the `breeds` and `dogs` tables (and indices) if they don't exist.
pub fn initialize(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let conn = Connection::open(db_path)
        .with_context(|| format!("Cannot open database: {}", db_path.display()))?;

    // journal_mode answers with a row, so it can't go through execute_batch.
    conn.query_row("PRAGMA journal_mode=WAL", [], |_| Ok(()))
        .context("Cannot enable WAL journal")?;

    conn.execute_batch(
        "
        PRAGMA foreign_keys=ON;
        CREATE TABLE IF NOT EXISTS breeds (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        VARCHAR(100) NOT NULL UNIQUE,
            description TEXT
        );
        CREATE TABLE IF NOT EXISTS dogs (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            name          VARCHAR(100) NOT NULL,
            breed_id      INTEGER NOT NULL REFERENCES breeds (id),
            age           INTEGER NOT NULL CHECK (age >= 0),
            gender        VARCHAR(10) NOT NULL,
            description   TEXT,
            status        VARCHAR(20) NOT NULL DEFAULT 'AVAILABLE'
                          CHECK (status IN ('AVAILABLE', 'PENDING', 'ADOPTED')),
            intake_date   DATE NOT NULL,
            adoption_date DATE
        );
        CREATE INDEX IF NOT EXISTS dogs_breed_id ON dogs (breed_id);
        CREATE INDEX IF NOT EXISTS dogs_status   ON dogs (status);
    ",
    )
    .context("Failed to create shelter tables")?;

    info!("Database schema verified");
    Ok(())
}

/// Open a connection with a busy timeout.
pub fn open(db_path: &Path) -> Result<Connection, rusqlite::Error> {
    let conn = Connection::open(db_path)?;
    conn.busy_timeout(Duration::from_secs(3))?;
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;
    Ok(conn)
}

// ─── Breeds ──────────────────────────────────────────────────────────────────

/// All breeds, alphabetically.
pub fn list_breeds(db_path: &Path) -> Result<Vec<Breed>, rusqlite::Error> {
    let conn = open(db_path)?;
    let mut stmt = conn.prepare("SELECT id, name FROM breeds ORDER BY name")?;
    let rows = stmt.query_map([], |row| {
        Ok(Breed {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    })?;
    rows.collect()
}

// ─── Dogs ────────────────────────────────────────────────────────────────────

/// Optional filters of the dog listing.  `None` means "don't filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DogFilter {
    pub breed_id: Option<i64>,
    /// Compared verbatim against the stored status.
    pub status: Option<String>,
}

/// Dogs matching `filter`, ordered by name.
pub fn list_dogs(db_path: &Path, filter: &DogFilter) -> Result<Vec<Dog>, rusqlite::Error> {
    let conn = open(db_path)?;

    let mut sql = String::from(
        "SELECT dogs.id, dogs.name, breeds.name, dogs.status \
         FROM dogs JOIN breeds ON breeds.id = dogs.breed_id",
    );
    let mut clauses: Vec<&str> = Vec::new();
    let mut row_params: Vec<Box<dyn rusqlite::types::ToSql>> = Vec::new();

    if let Some(breed_id) = filter.breed_id {
        row_params.push(Box::new(breed_id));
        clauses.push("dogs.breed_id = ?");
    }
    if let Some(status) = &filter.status {
        row_params.push(Box::new(status.clone()));
        clauses.push("dogs.status = ?");
    }
    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }
    sql.push_str(" ORDER BY dogs.name, dogs.id");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(rusqlite::params_from_iter(row_params.iter()), |row| {
        Ok(Dog {
            id: row.get(0)?,
            name: row.get(1)?,
            breed: row.get(2)?,
            status: DogStatus::from(row.get::<_, String>(3)?),
        })
    })?;

    rows.collect()
}

/// Full record for one dog, `None` if the id is unknown.
pub fn dog_detail(db_path: &Path, id: i64) -> Result<Option<DogDetail>, rusqlite::Error> {
    let conn = open(db_path)?;
    conn.query_row(
        "SELECT dogs.id, dogs.name, breeds.name, dogs.age, dogs.gender, \
         dogs.description, dogs.status \
         FROM dogs JOIN breeds ON breeds.id = dogs.breed_id WHERE dogs.id = ?1",
        params![id],
        |row| {
            Ok(DogDetail {
                id: row.get(0)?,
                name: row.get(1)?,
                breed: row.get(2)?,
                age: row.get(3)?,
                gender: row.get(4)?,
                description: row.get(5)?,
                status: DogStatus::from(row.get::<_, String>(6)?),
            })
        },
    )
    .optional()
}

// ─── tests ───────────────────────────────────────────────────────────────
