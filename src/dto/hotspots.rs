use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::hotspot::Hotspot;

/// JSON view of a hotspot record, using the camelCase field names clients
/// expect.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HotspotDto {
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

impl From<Hotspot> for HotspotDto {
    fn from(value: Hotspot) -> Self {
        Self {
            id: value.id.get(),
            name: value.name.into_inner(),
            location: value.location.into_inner(),
            category: value.category.as_str().to_string(),
            description: value.description.into_inner(),
            average_spend: value.average_spend.get(),
            image: value.image.into_inner(),
            added_by: value.added_by.into_inner(),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
