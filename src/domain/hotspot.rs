use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    AddedBy, AverageSpend, Category, HotspotDescription, HotspotId, HotspotLocation, HotspotName,
    ImageUrl,
};

/// A community-submitted place record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Hotspot {
    pub id: HotspotId,
    pub name: HotspotName,
    pub location: HotspotLocation,
    pub category: Category,
    pub description: HotspotDescription,
    pub average_spend: AverageSpend,
    pub image: ImageUrl,
    pub added_by: AddedBy,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Information required to create a new [`Hotspot`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewHotspot {
    pub name: HotspotName,
    pub location: HotspotLocation,
    pub category: Category,
    pub description: HotspotDescription,
    pub average_spend: AverageSpend,
    pub image: ImageUrl,
    pub added_by: AddedBy,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Partial replacement payload applied to an existing [`Hotspot`].
///
/// `None` fields are left untouched by the update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HotspotPatch {
    pub name: Option<HotspotName>,
    pub location: Option<HotspotLocation>,
    pub category: Option<Category>,
    pub description: Option<HotspotDescription>,
    pub average_spend: Option<AverageSpend>,
    pub image: Option<ImageUrl>,
    pub added_by: Option<AddedBy>,
}

impl HotspotPatch {
    /// True when the patch changes no fields.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.location.is_none()
            && self.category.is_none()
            && self.description.is_none()
            && self.average_spend.is_none()
            && self.image.is_none()
            && self.added_by.is_none()
    }
}
