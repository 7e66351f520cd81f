#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

use client_registry::db::{DbPool, establish_connection_pool};
use client_registry::domain::client::NewClient;
use client_registry::models::client_event::NewClientEvent;
use client_registry::repository::{ClientWriter, DieselRepository};
use client_registry::schema::client_events;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

pub const EXISTING_ID: i32 = 1;
pub const NON_EXISTING_ID: i32 = 1000;
pub const DEPENDENT_ID: i32 = 4;
pub const TOTAL_CLIENTS: usize = 12;
pub const CLIENTS_WITH_INCOME_AT_LEAST_4000: usize = 5;
pub const CLIENTS_WITH_CHILDREN: usize = 8;

/// SQLite database living in its own temporary directory.
pub struct TestDb {
    _dir: TempDir,
    pool: DbPool,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let url = path.to_str().expect("utf-8 temp path").to_string();

        let pool = establish_connection_pool(&url).expect("create pool");
        let mut conn = pool.get().expect("get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("run migrations");

        Self { _dir: dir, pool }
    }

    /// Database pre-filled with the twelve reference clients.
    pub fn seeded(name: &str) -> Self {
        let db = Self::new(name);
        seed_clients(&db);
        db
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool.clone())
    }
}

fn instant(year: i32, month: u32, day: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 8, 0, 0).unwrap()
}

/// Inserts twelve clients (ids 1..=12) and one event referencing
/// [`DEPENDENT_ID`].
pub fn seed_clients(db: &TestDb) {
    let rows = [
        ("Conceição Evaristo", "10619244881", 1500.0, instant(2020, 7, 13), 2),
        ("Lázaro Ramos", "10619244881", 2500.0, instant(1996, 12, 23), 2),
        ("Clarice Lispector", "10919444522", 3800.0, instant(1960, 4, 13), 2),
        ("Carolina Maria de Jesus", "10419244771", 7500.0, instant(1996, 12, 23), 0),
        ("Gilberto Gil", "10419344882", 2500.0, instant(1949, 5, 5), 4),
        ("Djamila Ribeiro", "10619244884", 4500.0, instant(1975, 11, 10), 1),
        ("Jorge Amado", "10619244885", 1500.0, instant(1912, 8, 10), 0),
        ("Toni Morrison", "10219344681", 10000.0, instant(1940, 2, 23), 0),
        ("Chimamanda Adichie", "10114274861", 1500.0, instant(1956, 9, 23), 2),
        ("Silvio Almeida", "10164334861", 4000.0, instant(1976, 8, 20), 1),
        ("Vanessa Lima", "10119244831", 1800.0, instant(1988, 3, 2), 0),
        ("Valeria Costa", "10219244852", 6000.0, instant(1970, 6, 15), 3),
    ];

    let repo = db.repo();
    for (name, cpf, income, birth_date, children) in rows {
        repo.create_client(&NewClient {
            name: name.to_string(),
            cpf: cpf.to_string(),
            income,
            birth_date,
            children,
        })
        .expect("seed client");
    }

    let mut conn = db.pool().get().expect("get connection");
    diesel::insert_into(client_events::table)
        .values(&NewClientEvent {
            client_id: DEPENDENT_ID,
            description: "Signed contract",
            created_at: Utc::now().naive_utc(),
        })
        .execute(&mut conn)
        .expect("seed client event");
}
