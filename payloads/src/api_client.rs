use crate::responses::{
    ApiResponse, DashboardStats, LeadStats, LoginResponse, Paginated,
};
use crate::space_form::Submission;
use crate::{
    Lead, LeadId, LeadStatus, Location, LocationId, Session, Space,
    SpaceDetails, SpaceId, TokenStore, requests,
};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Shown when the API gives no message of its own.
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong";

#[cfg(not(target_arch = "wasm32"))]
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

/// Called after a rejected session has been cleared from the token store.
pub type UnauthorizedHook = Arc<dyn Fn() + Send + Sync>;

/// An API client for interfacing with the backend.
///
/// Requests carry the stored bearer token. A 401 on any authenticated call
/// clears the token store and fires `on_unauthorized`.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
    pub token_store: Arc<dyn TokenStore>,
    pub on_unauthorized: Option<UnauthorizedHook>,
}

impl APIClient {
    pub fn new(
        address: impl Into<String>,
        token_store: Arc<dyn TokenStore>,
    ) -> Self {
        Self {
            address: address.into(),
            inner_client: default_client(),
            token_store,
            on_unauthorized: None,
        }
    }

    pub fn with_unauthorized_handler(
        self,
        hook: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        Self {
            on_unauthorized: Some(Arc::new(hook)),
            ..self
        }
    }
}

fn default_client() -> reqwest::Client {
    #[cfg(not(target_arch = "wasm32"))]
    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .unwrap_or_default();

    #[cfg(target_arch = "wasm32")]
    let client = reqwest::Client::new();

    client
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/api/v1/{path}", &self.address)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let request = self.inner_client.request(method, self.format_url(path));
        match self.token_store.get_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(
        &self,
        request: RequestBuilder,
    ) -> Result<reqwest::Response, ClientError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!("Request failed: {e}");
            ClientError::Network(e)
        })?;
        if response.status() == StatusCode::UNAUTHORIZED {
            self.reject_session();
            return Err(ClientError::Unauthorized);
        }
        Ok(response)
    }

    fn reject_session(&self) {
        tracing::warn!("Session rejected by the API, clearing credentials");
        self.token_store.clear_all();
        if let Some(hook) = &self.on_unauthorized {
            hook();
        }
    }

    async fn get(&self, path: &str) -> Result<reqwest::Response, ClientError> {
        self.send(self.request(Method::GET, path)).await
    }

    async fn get_query(
        &self,
        path: &str,
        query: &impl Serialize,
    ) -> Result<reqwest::Response, ClientError> {
        self.send(self.request(Method::GET, path).query(query))
            .await
    }

    async fn post(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<reqwest::Response, ClientError> {
        self.send(self.request(Method::POST, path).json(body))
            .await
    }

    async fn empty_post(
        &self,
        path: &str,
    ) -> Result<reqwest::Response, ClientError> {
        self.send(self.request(Method::POST, path)).await
    }

    async fn put(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<reqwest::Response, ClientError> {
        self.send(self.request(Method::PUT, path).json(body)).await
    }

    async fn patch(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<reqwest::Response, ClientError> {
        self.send(self.request(Method::PATCH, path).json(body))
            .await
    }

    async fn delete(
        &self,
        path: &str,
    ) -> Result<reqwest::Response, ClientError> {
        self.send(self.request(Method::DELETE, path)).await
    }
}

/// Methods on the backend API
impl APIClient {
    pub async fn health_check(&self) -> Result<(), ClientError> {
        self.get("health_check").await?.error_for_status()?;
        Ok(())
    }

    /// Exchange credentials for a session and persist it.
    ///
    /// A 401 here means bad credentials, so it is returned as an ordinary
    /// `APIError` and does not fire the unauthorized hook.
    pub async fn login(
        &self,
        details: &requests::LoginCredentials,
    ) -> Result<Session, ClientError> {
        let response = self
            .inner_client
            .post(self.format_url("auth/login"))
            .json(details)
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(ClientError::APIError(status, error_message(&text)));
        }

        let body: LoginResponse = serde_json::from_str(&text)?;
        if !body.success {
            return Err(ClientError::APIError(
                status,
                body.message
                    .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string()),
            ));
        }
        let (Some(token), Some(user)) = (body.token, body.user) else {
            return Err(ClientError::MissingData);
        };

        let session = Session::new(token, user);
        self.token_store.store_session(&session);
        Ok(session)
    }

    /// Stored credentials are cleared even if the request fails.
    pub async fn logout(&self) -> Result<(), ClientError> {
        let result = match self.empty_post("auth/logout").await {
            Ok(response) => ok_empty(response).await,
            Err(e) => Err(e),
        };
        self.token_store.clear_all();
        result
    }

    pub async fn change_password(
        &self,
        details: &requests::ChangePassword,
    ) -> Result<(), ClientError> {
        let response = self.put("settings/password", details).await?;
        ok_empty(response).await
    }

    pub async fn list_spaces(
        &self,
        query: &requests::ListQuery,
    ) -> Result<Paginated<Space>, ClientError> {
        let response = self.get_query("spaces", &query.to_pairs()).await?;
        ok_page(response).await
    }

    pub async fn get_space(
        &self,
        space_id: &SpaceId,
    ) -> Result<Space, ClientError> {
        let response = self.get(&format!("spaces/{space_id}")).await?;
        ok_body(response).await
    }

    pub async fn create_space(
        &self,
        details: &SpaceDetails,
    ) -> Result<Space, ClientError> {
        let response = self.post("spaces", details).await?;
        ok_body(response).await
    }

    pub async fn update_space(
        &self,
        space_id: &SpaceId,
        details: &SpaceDetails,
    ) -> Result<Space, ClientError> {
        let response = self.put(&format!("spaces/{space_id}"), details).await?;
        ok_body(response).await
    }

    /// Send whatever the space form asked for.
    pub async fn submit_space(
        &self,
        submission: &Submission,
    ) -> Result<Space, ClientError> {
        match submission {
            Submission::Create(details) => self.create_space(details).await,
            Submission::Update(id, details) => {
                self.update_space(id, details).await
            }
        }
    }

    pub async fn delete_space(
        &self,
        space_id: &SpaceId,
    ) -> Result<(), ClientError> {
        let response = self.delete(&format!("spaces/{space_id}")).await?;
        ok_empty(response).await
    }

    pub async fn list_leads(
        &self,
        query: &requests::ListQuery,
    ) -> Result<Paginated<Lead>, ClientError> {
        let response = self.get_query("leads", &query.to_pairs()).await?;
        ok_page(response).await
    }

    pub async fn lead_stats(&self) -> Result<LeadStats, ClientError> {
        let response = self.get("leads/stats").await?;
        ok_body(response).await
    }

    pub async fn update_lead_status(
        &self,
        lead_id: &LeadId,
        status: LeadStatus,
    ) -> Result<Lead, ClientError> {
        let body = requests::UpdateLeadStatus { status };
        let response =
            self.patch(&format!("leads/{lead_id}/status"), &body).await?;
        ok_body(response).await
    }

    pub async fn delete_lead(
        &self,
        lead_id: &LeadId,
    ) -> Result<(), ClientError> {
        let response = self.delete(&format!("leads/{lead_id}")).await?;
        ok_empty(response).await
    }

    pub async fn list_locations(&self) -> Result<Vec<Location>, ClientError> {
        let response = self.get("locations").await?;
        ok_body(response).await
    }

    pub async fn create_location(
        &self,
        details: &requests::CreateLocation,
    ) -> Result<Location, ClientError> {
        let response = self.post("locations", details).await?;
        ok_body(response).await
    }

    pub async fn delete_location(
        &self,
        location_id: &LocationId,
    ) -> Result<(), ClientError> {
        let response = self.delete(&format!("locations/{location_id}")).await?;
        ok_empty(response).await
    }

    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ClientError> {
        let response = self.get("dashboard/stats").await?;
        ok_body(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing the server's message.
    #[error("{1}")]
    APIError(StatusCode, String),
    /// The stored session was rejected and has been cleared.
    #[error("Your session has expired. Please log in again.")]
    Unauthorized,
    #[error("The server response was missing data.")]
    MissingData,
    #[error("Unexpected response from the server.")]
    Decode(#[from] serde_json::Error),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

/// The `message` of an error body, or the generic fallback.
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<ApiResponse<serde_json::Value>>(body)
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string())
}

async fn read_envelope<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<ApiResponse<T>, ClientError> {
    let status = response.status();
    let text = response.text().await?;
    if !status.is_success() {
        return Err(ClientError::APIError(status, error_message(&text)));
    }
    let body: ApiResponse<T> = serde_json::from_str(&text)?;
    if !body.success {
        return Err(ClientError::APIError(
            status,
            body.message
                .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string()),
        ));
    }
    Ok(body)
}

/// Deserialize the `data` of a successful response, or return an
/// appropriate error.
pub async fn ok_body<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    read_envelope(response)
        .await?
        .data
        .ok_or(ClientError::MissingData)
}

/// Deserialize a list response together with its pagination.
pub async fn ok_page<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<Paginated<T>, ClientError> {
    let body = read_envelope::<Vec<T>>(response).await?;
    Ok(Paginated {
        items: body.data.ok_or(ClientError::MissingData)?,
        pagination: body.pagination.ok_or(ClientError::MissingData)?,
    })
}

/// Check that a response without data is OK. An empty body counts as OK.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    let status = response.status();
    let text = response.text().await?;
    if !status.is_success() {
        return Err(ClientError::APIError(status, error_message(&text)));
    }
    if text.trim().is_empty() {
        return Ok(());
    }
    let body: ApiResponse<serde_json::Value> = serde_json::from_str(&text)?;
    match body.success {
        true => Ok(()),
        false => Err(ClientError::APIError(
            status,
            body.message
                .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_server_message() {
        assert_eq!(
            error_message(r#"{"success":false,"message":"Space not found"}"#),
            "Space not found"
        );
        assert_eq!(error_message("<html>502</html>"), FALLBACK_ERROR_MESSAGE);
        assert_eq!(
            error_message(r#"{"success":false,"message":"  "}"#),
            FALLBACK_ERROR_MESSAGE
        );
    }

    #[test]
    fn urls_are_versioned() {
        let client = APIClient::new(
            "http://localhost:8091",
            Arc::new(crate::MemoryTokenStore::new()),
        );
        assert_eq!(
            client.format_url("leads/stats"),
            "http://localhost:8091/api/v1/leads/stats"
        );
    }
}
