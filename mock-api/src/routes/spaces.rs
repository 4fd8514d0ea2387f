use actix_web::{HttpResponse, delete, get, post, put, web};
use payloads::requests::ListQuery;
use payloads::responses::ApiResponse;
use payloads::{SpaceDetails, SpaceId};

use crate::store::MockStore;

use super::{APIError, Authenticated};

#[tracing::instrument(skip(session, store), fields(user_id = %session.user_id))]
#[get("/spaces")]
pub async fn list_spaces(
    session: Authenticated,
    query: web::Query<ListQuery>,
    store: web::Data<MockStore>,
) -> Result<HttpResponse, APIError> {
    let page = store.list_spaces(&query)?;
    Ok(HttpResponse::Ok()
        .json(ApiResponse::paginated(page.items, page.pagination)))
}

#[tracing::instrument(skip(session, store), fields(user_id = %session.user_id))]
#[get("/spaces/{space_id}")]
pub async fn get_space(
    session: Authenticated,
    space_id: web::Path<SpaceId>,
    store: web::Data<MockStore>,
) -> Result<HttpResponse, APIError> {
    let space = store.get_space(&space_id)?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(space)))
}

#[tracing::instrument(skip(session, details, store), fields(user_id = %session.user_id), ret)]
#[post("/spaces")]
pub async fn create_space(
    session: Authenticated,
    details: web::Json<SpaceDetails>,
    store: web::Data<MockStore>,
) -> Result<HttpResponse, APIError> {
    let space = store.create_space(details.into_inner())?;
    Ok(HttpResponse::Created().json(ApiResponse {
        message: Some("Space created successfully".into()),
        ..ApiResponse::ok(space)
    }))
}

#[tracing::instrument(skip(session, details, store), fields(user_id = %session.user_id), ret)]
#[put("/spaces/{space_id}")]
pub async fn update_space(
    session: Authenticated,
    space_id: web::Path<SpaceId>,
    details: web::Json<SpaceDetails>,
    store: web::Data<MockStore>,
) -> Result<HttpResponse, APIError> {
    let space = store.update_space(&space_id, details.into_inner())?;
    Ok(HttpResponse::Ok().json(ApiResponse {
        message: Some("Space updated successfully".into()),
        ..ApiResponse::ok(space)
    }))
}

#[tracing::instrument(skip(session, store), fields(user_id = %session.user_id), ret)]
#[delete("/spaces/{space_id}")]
pub async fn delete_space(
    session: Authenticated,
    space_id: web::Path<SpaceId>,
    store: web::Data<MockStore>,
) -> Result<HttpResponse, APIError> {
    store.delete_space(&space_id)?;
    Ok(HttpResponse::Ok()
        .json(ApiResponse::<()>::message(true, "Space deleted successfully")))
}
