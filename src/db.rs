//! SQLite connection pooling.
//!
//! The pool is established once at startup and cloned into every handler;
//! acquiring a connection from it replaces any notion of a mutable global
//! database handle.

use diesel::r2d2::{ConnectionManager, Pool, PoolError, PooledConnection};
use diesel::sqlite::SqliteConnection;

/// Shared r2d2 pool over SQLite. Cheap to clone.
pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// A single pooled connection checked out of [`DbPool`].
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Build a connection pool for the given database URL.
pub fn establish_connection_pool(database_url: &str) -> Result<DbPool, PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder().build(manager)
}
