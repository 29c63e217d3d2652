use actix_web::web::{Data, Json, Query};
use actix_web::{get, HttpResponse, Responder};

use crate::error::ApiError;
use crate::query::{self, address, nearby, search, Envelope};
use crate::state::AppState;

#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().body("AroundMe API OK")
}

#[get("/api/places/nearby")]
pub async fn nearby_places(
    state: Data<AppState>,
    params: Query<nearby::NearbyParams>,
) -> Result<Json<Envelope>, ApiError> {
    let query = nearby::build(&params)?;
    let store = state.store()?;
    Ok(Json(query::run(store.as_ref(), &query)?))
}

#[get("/api/places/by-address")]
pub async fn places_by_address(
    state: Data<AppState>,
    params: Query<address::AddressParams>,
) -> Result<Json<Envelope>, ApiError> {
    let query = address::build(&params)?;
    // No readiness probe on this endpoint: an unset store is a plain 500.
    let store = state
        .store()
        .map_err(|_| ApiError::Internal(anyhow::anyhow!("datastore not ready")))?;
    Ok(Json(query::run(store.as_ref(), &query)?))
}

#[get("/api/places/search")]
pub async fn search_places(
    state: Data<AppState>,
    params: Query<search::SearchParams>,
) -> Result<Json<Envelope>, ApiError> {
    let query = search::build(&params)?;
    let store = state.store()?;
    Ok(Json(query::run(store.as_ref(), &query)?))
}
