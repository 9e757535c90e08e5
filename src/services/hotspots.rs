use crate::domain::hotspot::Hotspot;
use crate::domain::types::HotspotId;
use crate::forms::hotspots::{SubmitHotspotFormPayload, UpdateHotspotFormPayload};
use crate::repository::{HotspotReader, HotspotWriter};

use super::{ServiceError, ServiceResult};

/// Core business logic for `GET /hotspots/{id}`.
///
/// Identifiers that cannot name a record are treated as "not found" rather
/// than as a fault; repository failures are logged here and collapsed into
/// [`ServiceError::Internal`] so that the HTTP route can remain a thin
/// wrapper.
pub fn get_hotspot<R>(id: i32, repo: &R) -> ServiceResult<Hotspot>
where
    R: HotspotReader,
{
    let id = match HotspotId::new(id) {
        Ok(id) => id,
        Err(_) => return Err(ServiceError::NotFound),
    };

    match repo.get_hotspot_by_id(id) {
        Ok(Some(hotspot)) => Ok(hotspot),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to fetch hotspot {id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Core business logic for `POST /hotspots`.
pub fn create_hotspot<R>(payload: SubmitHotspotFormPayload, repo: &R) -> ServiceResult<Hotspot>
where
    R: HotspotWriter,
{
    let new_hotspot = payload.into_new_hotspot();
    match repo.create_hotspot(&new_hotspot) {
        Ok(hotspot) => Ok(hotspot),
        Err(e) => {
            log::error!("Failed to create hotspot: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Core business logic for `PUT /hotspots/{id}`.
///
/// Applies a partial patch; untouched fields keep their stored values. An
/// unresolvable identifier performs no write.
pub fn update_hotspot<R>(
    id: i32,
    payload: UpdateHotspotFormPayload,
    repo: &R,
) -> ServiceResult<Hotspot>
where
    R: HotspotWriter,
{
    let id = match HotspotId::new(id) {
        Ok(id) => id,
        Err(_) => return Err(ServiceError::NotFound),
    };

    match repo.update_hotspot(id, &payload.patch) {
        Ok(Some(hotspot)) => Ok(hotspot),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to update hotspot {id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Core business logic for `DELETE /hotspots/{id}`.
///
/// Deletion is permanent; removing an absent record is "not found".
pub fn delete_hotspot<R>(id: i32, repo: &R) -> ServiceResult<()>
where
    R: HotspotWriter,
{
    let id = match HotspotId::new(id) {
        Ok(id) => id,
        Err(_) => return Err(ServiceError::NotFound),
    };

    match repo.delete_hotspot(id) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete hotspot {id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::hotspot::NewHotspot;
    use crate::domain::types::{
        AddedBy, AverageSpend, Category, HotspotDescription, HotspotLocation, HotspotName,
        ImageUrl,
    };
    use crate::forms::hotspots::{SubmitHotspotForm, UpdateHotspotForm};
    use crate::repository::test::TestRepository;

    fn sample_new_hotspot() -> NewHotspot {
        let now = chrono::DateTime::from_timestamp(0, 0).unwrap().naive_utc();
        NewHotspot {
            name: HotspotName::new("Cafe X").unwrap(),
            location: HotspotLocation::new("Lisbon").unwrap(),
            category: Category::Food,
            description: HotspotDescription::new("Nice").unwrap(),
            average_spend: AverageSpend::new(10.0).unwrap(),
            image: ImageUrl::new("http://x/y.png").unwrap(),
            added_by: AddedBy::anonymous(),
            created_at: now,
            updated_at: now,
        }
    }

    fn seeded_repo() -> TestRepository {
        let repo = TestRepository::default();
        repo.create_hotspot(&sample_new_hotspot()).unwrap();
        repo
    }

    fn submit_payload() -> SubmitHotspotFormPayload {
        SubmitHotspotForm {
            name: "Bar Y".to_string(),
            location: "Porto".to_string(),
            category: "nightlife".to_string(),
            description: "Loud".to_string(),
            average_spend: 20.0,
            image: "http://x/z.png".to_string(),
            added_by: "Maria".to_string(),
        }
        .try_into()
        .unwrap()
    }

    #[test]
    fn fetches_existing_hotspot() {
        let repo = seeded_repo();

        let hotspot = get_hotspot(1, &repo).unwrap();
        assert_eq!(hotspot.name.as_str(), "Cafe X");
    }

    #[test]
    fn missing_and_invalid_ids_are_not_found() {
        let repo = seeded_repo();

        assert_eq!(get_hotspot(42, &repo).unwrap_err(), ServiceError::NotFound);
        assert_eq!(get_hotspot(0, &repo).unwrap_err(), ServiceError::NotFound);
        assert_eq!(get_hotspot(-1, &repo).unwrap_err(), ServiceError::NotFound);
    }

    #[test]
    fn creates_hotspot_with_assigned_id() {
        let repo = TestRepository::default();

        let created = create_hotspot(submit_payload(), &repo).unwrap();
        assert_eq!(created.id.get(), 1);
        assert_eq!(created.added_by.as_str(), "Maria");

        let fetched = get_hotspot(1, &repo).unwrap();
        assert_eq!(fetched, created);
    }

    #[test]
    fn partial_update_merges_fields() {
        let repo = seeded_repo();

        let payload: UpdateHotspotFormPayload = UpdateHotspotForm {
            name: Some("Cafe Z".to_string()),
            location: None,
            category: None,
            description: None,
            average_spend: Some(15.0),
            image: None,
            added_by: None,
        }
        .try_into()
        .unwrap();

        let updated = update_hotspot(1, payload, &repo).unwrap();
        assert_eq!(updated.name.as_str(), "Cafe Z");
        assert_eq!(updated.average_spend.get(), 15.0);
        // Untouched fields keep their stored values.
        assert_eq!(updated.location.as_str(), "Lisbon");
        assert_eq!(updated.category, Category::Food);
    }

    #[test]
    fn updating_missing_id_performs_no_write() {
        let repo = seeded_repo();

        let payload: UpdateHotspotFormPayload = UpdateHotspotForm {
            name: Some("Ghost".to_string()),
            location: None,
            category: None,
            description: None,
            average_spend: None,
            image: None,
            added_by: None,
        }
        .try_into()
        .unwrap();

        assert_eq!(
            update_hotspot(42, payload, &repo).unwrap_err(),
            ServiceError::NotFound
        );
        assert_eq!(repo.len(), 1);
        assert_eq!(get_hotspot(1, &repo).unwrap().name.as_str(), "Cafe X");
    }

    #[test]
    fn delete_is_permanent_and_idempotent_removal() {
        let repo = seeded_repo();

        delete_hotspot(1, &repo).unwrap();
        assert_eq!(get_hotspot(1, &repo).unwrap_err(), ServiceError::NotFound);
        assert_eq!(
            delete_hotspot(1, &repo).unwrap_err(),
            ServiceError::NotFound
        );
        assert!(repo.is_empty());
    }
}
