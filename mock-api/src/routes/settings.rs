use actix_web::{HttpResponse, put, web};
use anyhow::anyhow;
use payloads::requests::ChangePassword;
use payloads::responses::ApiResponse;
use payloads::validation::validate_password;

use crate::store::MockStore;

use super::{APIError, Authenticated};

#[tracing::instrument(skip(session, details, store), fields(user_id = %session.user_id))]
#[put("/settings/password")]
pub async fn change_password(
    session: Authenticated,
    details: web::Json<ChangePassword>,
    store: web::Data<MockStore>,
) -> Result<HttpResponse, APIError> {
    if let Some(message) = validate_password(&details.new_password).error_message()
    {
        return Err(APIError::BadRequest(anyhow!(message)));
    }
    if details.new_password == details.current_password {
        return Err(APIError::BadRequest(anyhow!(
            "New password must be different from the current password"
        )));
    }
    store.change_password(&details.current_password, &details.new_password)?;
    Ok(HttpResponse::Ok()
        .json(ApiResponse::<()>::message(true, "Password updated successfully")))
}
