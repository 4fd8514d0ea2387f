use actix_web::{HttpResponse, post, web};
use anyhow::anyhow;
use payloads::requests::LoginCredentials;
use payloads::responses::{ApiResponse, LoginResponse};
use payloads::validation::validate_login;

use crate::store::MockStore;

use super::{APIError, Authenticated};

#[tracing::instrument(
    skip(credentials, store),
    fields(email = %credentials.email, user_id = tracing::field::Empty),
    ret,
)]
#[post("/auth/login")]
pub async fn login(
    credentials: web::Json<LoginCredentials>,
    store: web::Data<MockStore>,
) -> Result<HttpResponse, APIError> {
    if let Some(message) = validate_login(&credentials.email, &credentials.password)
        .into_values()
        .next()
    {
        return Err(APIError::BadRequest(anyhow!(message)));
    }
    let (token, user) = store.login(&credentials.email, &credentials.password)?;
    tracing::Span::current().record("user_id", tracing::field::display(&user.id));
    Ok(HttpResponse::Ok().json(LoginResponse {
        success: true,
        token: Some(token),
        user: Some(user),
        message: Some("Login successful".into()),
    }))
}

#[tracing::instrument(skip(session, store), fields(user_id = %session.user_id))]
#[post("/auth/logout")]
pub async fn logout(
    session: Authenticated,
    store: web::Data<MockStore>,
) -> Result<HttpResponse, APIError> {
    store.logout(&session.token)?;
    Ok(HttpResponse::Ok()
        .json(ApiResponse::<()>::message(true, "Logged out successfully")))
}
