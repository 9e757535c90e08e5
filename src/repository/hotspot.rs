use chrono::Utc;
use diesel::prelude::*;

use crate::domain::hotspot::{Hotspot, HotspotPatch, NewHotspot};
use crate::domain::types::HotspotId;
use crate::models::hotspot::{
    Hotspot as DbHotspot, HotspotChangeset, NewHotspot as DbNewHotspot,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, HotspotReader, HotspotWriter};

impl HotspotReader for DieselRepository {
    fn get_hotspot_by_id(&self, id: HotspotId) -> RepositoryResult<Option<Hotspot>> {
        use crate::schema::hotspots;

        let mut conn = self.conn()?;

        let hotspot = hotspots::table
            .filter(hotspots::id.eq(id.get()))
            .first::<DbHotspot>(&mut conn)
            .optional()?;

        let hotspot = hotspot.map(TryInto::try_into).transpose()?;
        Ok(hotspot)
    }
}

impl HotspotWriter for DieselRepository {
    fn create_hotspot(&self, hotspot: &NewHotspot) -> RepositoryResult<Hotspot> {
        use crate::schema::hotspots;

        let mut conn = self.conn()?;
        let db_hotspot: DbNewHotspot = hotspot.clone().into();

        let created = diesel::insert_into(hotspots::table)
            .values(db_hotspot)
            .returning(DbHotspot::as_returning())
            .get_result::<DbHotspot>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn update_hotspot(
        &self,
        id: HotspotId,
        patch: &HotspotPatch,
    ) -> RepositoryResult<Option<Hotspot>> {
        use crate::schema::hotspots;

        let mut conn = self.conn()?;
        let changeset = HotspotChangeset::from_patch(patch, Utc::now().naive_utc());

        let updated = diesel::update(hotspots::table.filter(hotspots::id.eq(id.get())))
            .set(changeset)
            .returning(DbHotspot::as_returning())
            .get_result::<DbHotspot>(&mut conn)
            .optional()?;

        let updated = updated.map(TryInto::try_into).transpose()?;
        Ok(updated)
    }

    fn delete_hotspot(&self, id: HotspotId) -> RepositoryResult<usize> {
        use crate::schema::hotspots;

        let mut conn = self.conn()?;

        let affected = diesel::delete(hotspots::table.filter(hotspots::id.eq(id.get())))
            .execute(&mut conn)?;

        Ok(affected)
    }
}
