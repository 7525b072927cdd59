//! Demo data for a fresh database.

use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::params;
use tracing::info;

use crate::db;

const BREEDS: &[(&str, &str)] = &[
    ("Labrador Retriever", "Friendly, outgoing and eager to please."),
    ("German Shepherd", "Confident, courageous and smart working dog."),
    ("Golden Retriever", "Intelligent and devoted family companion."),
    ("French Bulldog", "Adaptable, playful and alert."),
    ("Bulldog", "Calm, courageous and friendly."),
    ("Poodle", "Active, proud and very smart."),
    ("Beagle", "Merry, curious and always following its nose."),
    ("Rottweiler", "Loyal, loving and confident guardian."),
    ("Dachshund", "Clever, lively and courageous."),
    ("Siberian Husky", "Outgoing, mischievous and loyal."),
    ("Border Collie", "Energetic, affectionate and remarkably bright."),
    ("Boxer", "Fun-loving, bright and active."),
];

const NAMES: &[&str] = &[
    "Buddy", "Luna", "Max", "Bella", "Charlie", "Daisy", "Rocky", "Molly", "Cooper", "Sadie",
    "Bear", "Maggie", "Duke", "Sophie", "Tucker", "Chloe", "Zeus", "Penny", "Milo", "Rosie",
    "Bentley", "Lola", "Finn", "Ruby", "Ollie", "Willow", "Gus", "Hazel", "Jax", "Nala",
];

/// Insert the demo breeds and dogs if the `dogs` table is empty.
///
/// Returns the number of dogs inserted (0 when data was already present).
pub fn seed_demo_data(db_path: &Path) -> Result<usize> {
    let mut conn = db::open(db_path).context("Cannot open database for seeding")?;

    let existing: i64 = conn.query_row("SELECT COUNT(*) FROM dogs", [], |row| row.get(0))?;
    if existing > 0 {
        info!("Database already holds {existing} dogs, skipping seed");
        return Ok(0);
    }

    let tx = conn.transaction()?;
    for (name, description) in BREEDS {
        tx.execute(
            "INSERT OR IGNORE INTO breeds (name, description) VALUES (?1, ?2)",
            params![name, description],
        )?;
    }

    let breed_ids: Vec<i64> = {
        let mut stmt = tx.prepare("SELECT id FROM breeds ORDER BY id")?;
        let ids = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<i64>, _>>()?;
        ids
    };
    anyhow::ensure!(!breed_ids.is_empty(), "No breeds available for seeding");

    for (i, name) in NAMES.iter().enumerate() {
        let dog = demo_dog(i, breed_ids.len());
        tx.execute(
            "INSERT INTO dogs (name, breed_id, age, gender, description, status, \
             intake_date, adoption_date) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                name,
                breed_ids[dog.breed_index],
                dog.age,
                dog.gender,
                format!("{name} is a {} year old looking for a loving home.", dog.age),
                dog.status,
                dog.intake_date,
                dog.adoption_date,
            ],
        )?;
    }
    tx.commit()?;

    info!(
        "Seeded {} breeds and {} dogs",
        breed_ids.len(),
        NAMES.len()
    );
    Ok(NAMES.len())
}

struct DemoDog {
    breed_index: usize,
    age: u32,
    gender: &'static str,
    status: &'static str,
    intake_date: String,
    adoption_date: Option<String>,
}

/// Deterministic attributes for the `i`-th demo dog.
fn demo_dog(i: usize, breed_count: usize) -> DemoDog {
    let status = if i % 7 == 6 {
        "ADOPTED"
    } else if i % 5 == 4 {
        "PENDING"
    } else {
        "AVAILABLE"
    };
    let month = i % 12 + 1;
    let day = i % 28 + 1;

    DemoDog {
        breed_index: (i * 7) % breed_count,
        age: (i * 5 % 12) as u32 + 1,
        gender: if i % 2 == 0 { "Male" } else { "Female" },
        status,
        intake_date: format!("2024-{month:02}-{day:02}"),
        adoption_date: (status == "ADOPTED").then(|| format!("2025-{month:02}-{day:02}")),
    }
}

// ─── tests ───────────────────────────────────────────────────────────────
