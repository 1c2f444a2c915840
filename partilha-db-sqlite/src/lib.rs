#[macro_use]
extern crate diesel;

use anyhow::{anyhow, Result as Fallible};
use diesel::{r2d2, sqlite::SqliteConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::{cell::RefCell, sync::Arc};

mod models;
mod repo_impl;
mod schema;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

type ConnectionManager = r2d2::ConnectionManager<SqliteConnection>;
type ConnectionPool = r2d2::Pool<ConnectionManager>;
type PooledConnection = r2d2::PooledConnection<ConnectionManager>;

type SharedConnectionPool = Arc<RwLock<ConnectionPool>>;

fn checkout(pool: &ConnectionPool, access: &str) -> Fallible<RefCell<PooledConnection>> {
    let conn = pool.get().inspect_err(|err| {
        log::error!("No pooled SQLite connection available for {access} access: {err}");
    })?;
    Ok(RefCell::new(conn))
}

/// Repositories for queries, several may coexist.
pub struct DbReadOnly<'a> {
    // Held until the connection returns to the pool
    _read_guard: RwLockReadGuard<'a, ConnectionPool>,
    conn: RefCell<PooledConnection>,
}

impl<'a> DbReadOnly<'a> {
    fn try_new(pool: &'a SharedConnectionPool) -> Fallible<Self> {
        let read_guard = pool.read();
        let conn = checkout(&read_guard, "shared")?;
        Ok(Self {
            _read_guard: read_guard,
            conn,
        })
    }
}

/// Repositories for commands, never more than one at a time.
pub struct DbReadWrite<'a> {
    _write_guard: RwLockWriteGuard<'a, ConnectionPool>,
    conn: RefCell<PooledConnection>,
}

impl<'a> DbReadWrite<'a> {
    fn try_new(pool: &'a SharedConnectionPool) -> Fallible<Self> {
        let write_guard = pool.write();
        let conn = checkout(&write_guard, "exclusive")?;
        Ok(Self {
            _write_guard: write_guard,
            conn,
        })
    }
}

/// Pooled SQLite connections of the donations and media backends.
///
/// Use cases that only read get a [`DbReadOnly`] and may run in
/// parallel. A [`DbReadWrite`] is exclusive, no other reader or
/// writer can obtain a connection while it is alive. SQLite would
/// otherwise answer concurrent writes with SQLITE_LOCKED.
#[derive(Clone)]
pub struct Connections {
    pool: SharedConnectionPool,
}

/// Settings that SQLite keeps per connection and that every
/// pooled connection needs before its first use.
#[derive(Debug, Clone, Copy)]
struct ConnectionOptions {
    busy_timeout_millis: u32,
}

impl Default for ConnectionOptions {
    fn default() -> Self {
        Self {
            busy_timeout_millis: 5_000,
        }
    }
}

impl r2d2::CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        use diesel::connection::SimpleConnection as _;
        // ON DELETE CASCADE only applies while foreign keys are enforced
        conn.batch_execute(&format!(
            r#"
PRAGMA foreign_keys = ON;
PRAGMA recursive_triggers = ON;
PRAGMA synchronous = NORMAL;
PRAGMA busy_timeout = {};
"#,
            self.busy_timeout_millis
        ))
        .map_err(r2d2::Error::QueryError)
    }
}

/// Prepares the database file once at startup.
///
/// The text encoding is fixed when the first table is created,
/// later changes have no effect.
pub fn initialize_database(connection: &mut SqliteConnection) -> Fallible<()> {
    use diesel::RunQueryDsl as _;
    diesel::sql_query(
        r#"
PRAGMA journal_mode = WAL;        -- readers don't block the single writer
PRAGMA wal_checkpoint(TRUNCATE);  -- shrink a WAL file left over from the previous run
PRAGMA encoding = 'UTF-8';
"#,
    )
    .execute(connection)?;
    Ok(())
}

impl Connections {
    pub fn init(url: &str, pool_size: u32) -> Fallible<Self> {
        // r2d2 keeps retrying unreachable databases, a single
        // direct connection reports a bad URL right away.
        use diesel::Connection as _;
        let _ = diesel::SqliteConnection::establish(url)?;
        let manager = ConnectionManager::new(url);
        let pool = ConnectionPool::builder()
            .max_size(pool_size)
            .connection_customizer(Box::new(ConnectionOptions::default()))
            .build(manager)?;
        let mut conn = pool.get()?;
        initialize_database(&mut conn)?;
        drop(conn);
        log::debug!("Initialized SQLite database {url} with {pool_size} pooled connection(s)");
        Ok(Self::new(pool))
    }

    fn new(pool: ConnectionPool) -> Self {
        Self {
            pool: Arc::new(RwLock::new(pool)),
        }
    }

    pub fn shared(&self) -> Fallible<DbReadOnly> {
        DbReadOnly::try_new(&self.pool)
    }

    pub fn exclusive(&self) -> Fallible<DbReadWrite> {
        DbReadWrite::try_new(&self.pool)
    }
}

pub fn run_embedded_database_migrations(conn: DbReadWrite<'_>) -> Fallible<()> {
    log::info!("Running embedded database migrations");
    let applied = conn
        .conn
        .borrow_mut()
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| anyhow!("Failed to run database migrations: {err}"))?
        .len();
    log::debug!("Applied {applied} pending migration(s)");
    Ok(())
}
