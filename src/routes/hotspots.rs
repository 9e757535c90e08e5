use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::db::DbPool;
use crate::dto::hotspots::HotspotDto;
use crate::dto::{Empty, Envelope};
use crate::forms::hotspots::{
    SubmitHotspotForm, SubmitHotspotFormPayload, UpdateHotspotForm, UpdateHotspotFormPayload,
};
use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::hotspots as service;

#[get("/hotspots/{id}")]
pub async fn get_hotspot(path: web::Path<i32>, pool: web::Data<DbPool>) -> impl Responder {
    let repo = DieselRepository::new(pool.get_ref().clone());

    match service::get_hotspot(path.into_inner(), &repo) {
        Ok(hotspot) => HttpResponse::Ok().json(Envelope::data(HotspotDto::from(hotspot))),
        Err(ServiceError::NotFound) => {
            HttpResponse::NotFound().json(Envelope::<HotspotDto>::error("Hotspot not found"))
        }
        Err(ServiceError::Internal) => HttpResponse::InternalServerError()
            .json(Envelope::<HotspotDto>::error("Failed to fetch hotspot")),
    }
}

#[post("/hotspots")]
pub async fn create_hotspot(
    body: web::Json<SubmitHotspotForm>,
    pool: web::Data<DbPool>,
) -> impl Responder {
    let payload: SubmitHotspotFormPayload = match body.into_inner().try_into() {
        Ok(payload) => payload,
        Err(e) => {
            return HttpResponse::BadRequest().json(Envelope::<HotspotDto>::error(e.to_string()));
        }
    };

    let repo = DieselRepository::new(pool.get_ref().clone());

    match service::create_hotspot(payload, &repo) {
        Ok(hotspot) => HttpResponse::Created().json(Envelope::data(HotspotDto::from(hotspot))),
        Err(_) => HttpResponse::InternalServerError()
            .json(Envelope::<HotspotDto>::error("Failed to create hotspot")),
    }
}

#[put("/hotspots/{id}")]
pub async fn update_hotspot(
    path: web::Path<i32>,
    body: web::Json<UpdateHotspotForm>,
    pool: web::Data<DbPool>,
) -> impl Responder {
    // Write-time validation failures collapse into the generic 500 outcome,
    // matching fetch/delete. They are still logged with their cause.
    let payload: UpdateHotspotFormPayload = match body.into_inner().try_into() {
        Ok(payload) => payload,
        Err(e) => {
            log::error!("Rejected hotspot update payload: {e}");
            return HttpResponse::InternalServerError()
                .json(Envelope::<HotspotDto>::error("Failed to update hotspot"));
        }
    };

    let repo = DieselRepository::new(pool.get_ref().clone());

    match service::update_hotspot(path.into_inner(), payload, &repo) {
        Ok(hotspot) => HttpResponse::Ok().json(Envelope::data(HotspotDto::from(hotspot))),
        Err(ServiceError::NotFound) => {
            HttpResponse::NotFound().json(Envelope::<HotspotDto>::error("Hotspot not found"))
        }
        Err(ServiceError::Internal) => HttpResponse::InternalServerError()
            .json(Envelope::<HotspotDto>::error("Failed to update hotspot")),
    }
}

#[delete("/hotspots/{id}")]
pub async fn delete_hotspot(path: web::Path<i32>, pool: web::Data<DbPool>) -> impl Responder {
    let repo = DieselRepository::new(pool.get_ref().clone());

    match service::delete_hotspot(path.into_inner(), &repo) {
        Ok(()) => HttpResponse::Ok().json(Envelope::data(Empty {})),
        Err(ServiceError::NotFound) => {
            HttpResponse::NotFound().json(Envelope::<Empty>::error("Hotspot not found"))
        }
        Err(ServiceError::Internal) => HttpResponse::InternalServerError()
            .json(Envelope::<Empty>::error("Failed to delete hotspot")),
    }
}
