use actix_web::{HttpResponse, delete, get, patch, web};
use payloads::LeadId;
use payloads::requests::{ListQuery, UpdateLeadStatus};
use payloads::responses::ApiResponse;

use crate::store::MockStore;

use super::{APIError, Authenticated};

#[tracing::instrument(skip(session, store), fields(user_id = %session.user_id))]
#[get("/leads")]
pub async fn list_leads(
    session: Authenticated,
    query: web::Query<ListQuery>,
    store: web::Data<MockStore>,
) -> Result<HttpResponse, APIError> {
    let page = store.list_leads(&query)?;
    Ok(HttpResponse::Ok()
        .json(ApiResponse::paginated(page.items, page.pagination)))
}

#[tracing::instrument(skip(session, store), fields(user_id = %session.user_id))]
#[get("/leads/stats")]
pub async fn lead_stats(
    session: Authenticated,
    store: web::Data<MockStore>,
) -> Result<HttpResponse, APIError> {
    let stats = store.lead_stats()?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(stats)))
}

#[tracing::instrument(skip(session, store), fields(user_id = %session.user_id), ret)]
#[patch("/leads/{lead_id}/status")]
pub async fn update_lead_status(
    session: Authenticated,
    lead_id: web::Path<LeadId>,
    details: web::Json<UpdateLeadStatus>,
    store: web::Data<MockStore>,
) -> Result<HttpResponse, APIError> {
    let lead = store.update_lead_status(&lead_id, details.status)?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(lead)))
}

#[tracing::instrument(skip(session, store), fields(user_id = %session.user_id), ret)]
#[delete("/leads/{lead_id}")]
pub async fn delete_lead(
    session: Authenticated,
    lead_id: web::Path<LeadId>,
    store: web::Data<MockStore>,
) -> Result<HttpResponse, APIError> {
    store.delete_lead(&lead_id)?;
    Ok(HttpResponse::Ok()
        .json(ApiResponse::<()>::message(true, "Lead deleted successfully")))
}
