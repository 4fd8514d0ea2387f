pub mod auth;
pub mod dashboard;
pub mod leads;
pub mod locations;
pub mod settings;
pub mod spaces;

use actix_web::{
    FromRequest, HttpRequest, HttpResponse, Responder, ResponseError,
    body::BoxBody, dev::HttpServiceFactory, dev::Payload, get,
    http::StatusCode, http::header, web,
};
use anyhow::anyhow;
use payloads::UserId;
use payloads::responses::ApiResponse;
use std::future::{Ready, ready};

use crate::store::{MockStore, StoreError};

pub fn api_services() -> impl HttpServiceFactory {
    web::scope("/api/v1")
        .service(health_check)
        .service(auth::login)
        .service(auth::logout)
        .service(settings::change_password)
        .service(spaces::list_spaces)
        .service(spaces::get_space)
        .service(spaces::create_space)
        .service(spaces::update_space)
        .service(spaces::delete_space)
        .service(leads::lead_stats)
        .service(leads::list_leads)
        .service(leads::update_lead_status)
        .service(leads::delete_lead)
        .service(locations::list_locations)
        .service(locations::create_location)
        .service(locations::delete_location)
        .service(dashboard::dashboard_stats)
}

#[get("/health_check")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("healthy")
}

/// Malformed JSON bodies get the same envelope as every other error.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        APIError::BadRequest(anyhow!("Invalid request body: {err}")).into()
    })
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        APIError::BadRequest(anyhow!("Invalid query: {err}")).into()
    })
}

#[derive(Debug, thiserror::Error)]
pub enum APIError {
    #[error("Authentication failed")]
    AuthError(#[source] anyhow::Error),
    #[error("Bad request")]
    BadRequest(#[source] anyhow::Error),
    #[error("Not found")]
    NotFound(#[source] anyhow::Error),
    #[error("Something went wrong")]
    UnexpectedError(#[from] anyhow::Error),
}

impl APIError {
    /// The message placed in the response body.
    fn message(&self) -> String {
        match self {
            Self::AuthError(e) | Self::BadRequest(e) | Self::NotFound(e) => {
                e.to_string()
            }
            Self::UnexpectedError(_) => self.to_string(),
        }
    }
}

impl ResponseError for APIError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::AuthError(_) => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        if let Self::UnexpectedError(e) = self {
            tracing::error!("{e:#}");
        }
        HttpResponse::build(self.status_code())
            .json(ApiResponse::<()>::message(false, self.message()))
    }
}

impl From<StoreError> for APIError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Poisoned => APIError::UnexpectedError(e.into()),
            StoreError::InvalidCredentials => APIError::AuthError(e.into()),
            StoreError::SpaceNotFound => APIError::NotFound(e.into()),
            StoreError::LeadNotFound => APIError::NotFound(e.into()),
            StoreError::LocationNotFound => APIError::NotFound(e.into()),
            _ => APIError::BadRequest(e.into()),
        }
    }
}

/// A request carrying a bearer token the store recognises.
#[derive(Debug, Clone)]
pub struct Authenticated {
    pub user_id: UserId,
    pub token: String,
}

impl FromRequest for Authenticated {
    type Error = APIError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

fn authenticate(req: &HttpRequest) -> Result<Authenticated, APIError> {
    let store = req
        .app_data::<web::Data<MockStore>>()
        .ok_or_else(|| anyhow!("Store is not configured"))?;
    let token = bearer_token(req)
        .ok_or_else(|| APIError::AuthError(anyhow!("Not authorized")))?;
    let user_id = store.session_user(token).ok_or_else(|| {
        APIError::AuthError(anyhow!("Session expired, please log in again"))
    })?;
    Ok(Authenticated {
        user_id,
        token: token.to_string(),
    })
}
