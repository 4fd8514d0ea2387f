use actix_web::{HttpResponse, get, web};
use payloads::responses::ApiResponse;

use crate::store::MockStore;

use super::{APIError, Authenticated};

#[tracing::instrument(skip(session, store), fields(user_id = %session.user_id))]
#[get("/dashboard/stats")]
pub async fn dashboard_stats(
    session: Authenticated,
    store: web::Data<MockStore>,
) -> Result<HttpResponse, APIError> {
    let stats = store.dashboard_stats()?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(stats)))
}
