use actix_web::{HttpResponse, delete, get, post, web};
use anyhow::anyhow;
use payloads::LocationId;
use payloads::requests::CreateLocation;
use payloads::responses::ApiResponse;
use payloads::validation::LOCATION_NAME;

use crate::store::MockStore;

use super::{APIError, Authenticated};

#[tracing::instrument(skip(session, store), fields(user_id = %session.user_id))]
#[get("/locations")]
pub async fn list_locations(
    session: Authenticated,
    store: web::Data<MockStore>,
) -> Result<HttpResponse, APIError> {
    let locations = store.list_locations()?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(locations)))
}

#[tracing::instrument(skip(session, store), fields(user_id = %session.user_id), ret)]
#[post("/locations")]
pub async fn create_location(
    session: Authenticated,
    details: web::Json<CreateLocation>,
    store: web::Data<MockStore>,
) -> Result<HttpResponse, APIError> {
    LOCATION_NAME
        .check(&details.name)
        .map_err(|message| APIError::BadRequest(anyhow!(message)))?;
    let location = store.create_location(details.into_inner())?;
    Ok(HttpResponse::Created().json(ApiResponse::ok(location)))
}

#[tracing::instrument(skip(session, store), fields(user_id = %session.user_id), ret)]
#[delete("/locations/{location_id}")]
pub async fn delete_location(
    session: Authenticated,
    location_id: web::Path<LocationId>,
    store: web::Data<MockStore>,
) -> Result<HttpResponse, APIError> {
    store.delete_location(&location_id)?;
    Ok(HttpResponse::Ok().json(ApiResponse::<()>::message(
        true,
        "Location deleted successfully",
    )))
}
