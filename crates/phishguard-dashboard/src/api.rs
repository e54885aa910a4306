//! Backend API client
//!
//! Single point of contact with the prediction backend. The client never
//! recovers errors: transport failures, non-success statuses, and malformed
//! bodies all collapse into one opaque [`ApiError`], and each view decides
//! its own recovery policy.

use gloo_net::http::{Request, RequestBuilder};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use phishguard_core::{HistoryEntry, Prediction};

use crate::auth::Session;
use crate::config;

#[derive(Error, Debug, Clone)]
#[error("backend request failed: {0}")]
pub struct ApiError(String);

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError(err.to_string())
    }
}

#[derive(Serialize)]
struct PredictRequest<'a> {
    url: &'a str,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// Login payload; fields beyond the token are backend-defined.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: Option<String>,
    pub expires_in: Option<u64>,
}

/// HTTP client over an injected [`Session`].
///
/// The session is the only credential source: every request attaches
/// `Authorization: Bearer <token>` iff a token is currently held, and omits
/// the header entirely otherwise.
#[derive(Clone, Copy)]
pub struct ApiClient {
    session: Session,
}

impl ApiClient {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// POST `/predict`: classify a URL.
    pub async fn predict_url(&self, url: &str) -> Result<Prediction, ApiError> {
        let request = self.post("/predict").json(&PredictRequest { url })?;
        let prediction: Prediction = decode(request.send().await?).await?;
        prediction
            .validate()
            .map_err(|err| ApiError(err.to_string()))?;
        Ok(prediction)
    }

    /// GET `/history`: list past scans, newest-first as the backend orders
    /// them.
    pub async fn get_history(&self) -> Result<Vec<HistoryEntry>, ApiError> {
        let response = self.get("/history").send().await?;
        decode(response).await
    }

    /// POST `/login`: authenticate. A token in the response is stored into
    /// the session as a side effect; no view calls this yet.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let request = self.post("/login").json(&LoginRequest { username, password })?;
        let response: LoginResponse = decode(request.send().await?).await?;
        if let Some(token) = &response.token {
            self.session.set_token(token);
        }
        Ok(response)
    }

    fn get(&self, path: &str) -> RequestBuilder {
        // JSON bodies set the content type themselves; bodiless requests set
        // it explicitly to keep the wire contract uniform.
        self.authorized(Request::get(&endpoint(path)).header("Content-Type", "application/json"))
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.authorized(Request::post(&endpoint(path)))
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        }
    }
}

fn endpoint(path: &str) -> String {
    format!("{}{}", config::api_base_url(), path)
}

async fn decode<T: serde::de::DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(ApiError(format!("unexpected status {}", response.status())));
    }
    Ok(response.json::<T>().await?)
}

/// Context accessor; falls back to a fresh client so components stay usable
/// outside the shell.
pub fn use_client() -> ApiClient {
    leptos::use_context::<ApiClient>()
        .unwrap_or_else(|| ApiClient::new(crate::auth::use_session()))
}
