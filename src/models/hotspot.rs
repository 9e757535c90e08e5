use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::hotspot::{
    Hotspot as DomainHotspot, HotspotPatch, NewHotspot as DomainNewHotspot,
};
use crate::domain::types::{
    AddedBy, AverageSpend, Category, HotspotDescription, HotspotLocation, HotspotName, ImageUrl,
    TypeConstraintError,
};

/// Diesel model representing the `hotspots` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::hotspots)]
pub struct Hotspot {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub category: String,
    pub description: String,
    pub average_spend: f64,
    pub image: String,
    pub added_by: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`Hotspot`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::hotspots)]
pub struct NewHotspot {
    pub name: String,
    pub location: String,
    pub category: String,
    pub description: String,
    pub average_spend: f64,
    pub image: String,
    pub added_by: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Partial update applied with `AsChangeset`; `None` fields are skipped.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::hotspots)]
pub struct HotspotChangeset {
    pub name: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub average_spend: Option<f64>,
    pub image: Option<String>,
    pub added_by: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Hotspot> for DomainHotspot {
    type Error = TypeConstraintError;

    fn try_from(hotspot: Hotspot) -> Result<Self, Self::Error> {
        Ok(Self {
            id: hotspot.id.try_into()?,
            name: HotspotName::new(hotspot.name)?,
            location: HotspotLocation::new(hotspot.location)?,
            category: Category::try_from(hotspot.category)?,
            description: HotspotDescription::new(hotspot.description)?,
            average_spend: AverageSpend::new(hotspot.average_spend)?,
            image: ImageUrl::new(hotspot.image)?,
            added_by: AddedBy::new(hotspot.added_by),
            created_at: hotspot.created_at,
            updated_at: hotspot.updated_at,
        })
    }
}

impl From<DomainNewHotspot> for NewHotspot {
    fn from(hotspot: DomainNewHotspot) -> Self {
        Self {
            name: hotspot.name.into_inner(),
            location: hotspot.location.into_inner(),
            category: hotspot.category.as_str().to_string(),
            description: hotspot.description.into_inner(),
            average_spend: hotspot.average_spend.get(),
            image: hotspot.image.into_inner(),
            added_by: hotspot.added_by.into_inner(),
            created_at: hotspot.created_at,
            updated_at: hotspot.updated_at,
        }
    }
}

impl HotspotChangeset {
    /// Builds a changeset from a domain patch, bumping `updated_at`.
    pub fn from_patch(patch: &HotspotPatch, updated_at: NaiveDateTime) -> Self {
        Self {
            name: patch.name.clone().map(HotspotName::into_inner),
            location: patch.location.clone().map(HotspotLocation::into_inner),
            category: patch.category.map(|c| c.as_str().to_string()),
            description: patch
                .description
                .clone()
                .map(HotspotDescription::into_inner),
            average_spend: patch.average_spend.map(AverageSpend::get),
            image: patch.image.clone().map(ImageUrl::into_inner),
            added_by: patch.added_by.clone().map(AddedBy::into_inner),
            updated_at,
        }
    }
}
