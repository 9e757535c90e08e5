use crate::db::{DbConnection, DbPool};
use crate::domain::hotspot::{Hotspot, HotspotPatch, NewHotspot};
use crate::domain::types::HotspotId;
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod hotspot;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations for hotspot records.
pub trait HotspotReader {
    /// Retrieve a hotspot by its identifier.
    fn get_hotspot_by_id(&self, id: HotspotId) -> RepositoryResult<Option<Hotspot>>;
}

/// Write operations for hotspot records.
pub trait HotspotWriter {
    /// Persist a new hotspot and return it with its assigned identifier.
    fn create_hotspot(&self, hotspot: &NewHotspot) -> RepositoryResult<Hotspot>;
    /// Apply a partial update, returning the updated record or `None` when
    /// the identifier does not resolve.
    fn update_hotspot(
        &self,
        id: HotspotId,
        patch: &HotspotPatch,
    ) -> RepositoryResult<Option<Hotspot>>;
    /// Delete a hotspot, returning the number of removed rows.
    fn delete_hotspot(&self, id: HotspotId) -> RepositoryResult<usize>;
}
