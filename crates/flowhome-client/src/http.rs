//! Shared request plumbing for all resource clients.
//!
//! Every call goes through [`ApiClient`], which enforces the uniform
//! contract: cooperative cancellation, error-body normalization, empty-body
//! handling, and never-null lists.

use std::future::Future;
use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use flowhome_core::{ApiConfig, ApiError, Result};

/// Error body shapes the backend is known to produce.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Shared HTTP client bound to the remote API's base URL.
///
/// Cheap to clone; all resource clients hold a clone of the same instance.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Build a client from configuration. The timeout knob, when set, is
    /// applied to every request; unset preserves unbounded waits.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.normalized_base_url().to_string(),
            http,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET returning a JSON body.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        cancel: Option<&CancellationToken>,
    ) -> Result<T> {
        let req = self.http.get(self.url(path));
        with_cancellation(cancel, async move {
            let response = req.send().await.map_err(transport_error)?;
            let response = check_status(response).await?;
            read_json(response).await
        })
        .await
    }

    /// GET returning a list. A no-content or null body resolves to an empty
    /// vector so callers can iterate unconditionally.
    pub async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        cancel: Option<&CancellationToken>,
    ) -> Result<Vec<T>> {
        let req = self.http.get(self.url(path));
        with_cancellation(cancel, async move {
            let response = req.send().await.map_err(transport_error)?;
            let response = check_status(response).await?;
            read_list(response).await
        })
        .await
    }

    /// POST with a JSON body, returning a JSON body.
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        cancel: Option<&CancellationToken>,
    ) -> Result<T> {
        let req = self.http.post(self.url(path)).json(body);
        with_cancellation(cancel, async move {
            let response = req.send().await.map_err(transport_error)?;
            let response = check_status(response).await?;
            read_json(response).await
        })
        .await
    }

    /// PUT with a JSON body, returning a JSON body.
    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        cancel: Option<&CancellationToken>,
    ) -> Result<T> {
        let req = self.http.put(self.url(path)).json(body);
        with_cancellation(cancel, async move {
            let response = req.send().await.map_err(transport_error)?;
            let response = check_status(response).await?;
            read_json(response).await
        })
        .await
    }

    /// Body-less PUT returning a JSON body (e.g. join-team).
    pub async fn put_empty<T: DeserializeOwned>(
        &self,
        path: &str,
        cancel: Option<&CancellationToken>,
    ) -> Result<T> {
        let req = self.http.put(self.url(path));
        with_cancellation(cancel, async move {
            let response = req.send().await.map_err(transport_error)?;
            let response = check_status(response).await?;
            read_json(response).await
        })
        .await
    }

    /// DELETE returning a JSON body (e.g. leave-team returns the user).
    pub async fn delete_json<T: DeserializeOwned>(
        &self,
        path: &str,
        cancel: Option<&CancellationToken>,
    ) -> Result<T> {
        let req = self.http.delete(self.url(path));
        with_cancellation(cancel, async move {
            let response = req.send().await.map_err(transport_error)?;
            let response = check_status(response).await?;
            read_json(response).await
        })
        .await
    }

    /// DELETE where success carries no meaningful body.
    pub async fn delete_empty(
        &self,
        path: &str,
        cancel: Option<&CancellationToken>,
    ) -> Result<()> {
        let req = self.http.delete(self.url(path));
        with_cancellation(cancel, async move {
            let response = req.send().await.map_err(transport_error)?;
            check_status(response).await?;
            Ok(())
        })
        .await
    }
}

/// Race an operation against its cancellation token.
///
/// An already-cancelled token rejects before any I/O is issued. The
/// underlying request is not necessarily aborted at the transport level;
/// the guarantee is that the caller never sees its result.
async fn with_cancellation<T, F>(cancel: Option<&CancellationToken>, op: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match cancel {
        Some(token) => {
            if token.is_cancelled() {
                return Err(ApiError::Cancelled);
            }
            tokio::select! {
                _ = token.cancelled() => Err(ApiError::Cancelled),
                result = op => result,
            }
        }
        None => op.await,
    }
}

fn transport_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Server(format!("A requisição excedeu o tempo limite: {}", e))
    } else {
        ApiError::Unknown(format!("Falha de rede: {}", e))
    }
}

/// Turn a non-success response into a normalized error. The JSON error body
/// is preferred; status text is the fallback when it cannot be parsed.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let fallback = match status.canonical_reason() {
        Some(reason) => reason.to_string(),
        None => format!("Erro {}", status.as_u16()),
    };
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.message.or(body.error).unwrap_or(fallback),
        Err(_) => fallback,
    };

    Err(ApiError::from_status(status.as_u16(), message))
}

/// Parse a success response body as JSON. Empty bodies are rejected only if
/// the target type cannot represent them; a 204 must never reach this for a
/// non-unit type, but parsing an empty body never panics either way.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    let bytes = response.bytes().await.map_err(transport_error)?;

    if status == StatusCode::NO_CONTENT || bytes.is_empty() {
        // Some endpoints return 200 with an empty body; treat like 204.
        return serde_json::from_slice(b"null")
            .map_err(|_| ApiError::Unknown("Resposta vazia inesperada do servidor".into()));
    }

    serde_json::from_slice(&bytes)
        .map_err(|e| ApiError::Unknown(format!("Resposta inválida do servidor: {}", e)))
}

/// Parse a success response as a list, mapping absent/null bodies to empty.
async fn read_list<T: DeserializeOwned>(response: reqwest::Response) -> Result<Vec<T>> {
    let status = response.status();
    let bytes = response.bytes().await.map_err(transport_error)?;

    if status == StatusCode::NO_CONTENT || bytes.is_empty() {
        return Ok(Vec::new());
    }

    let list: Option<Vec<T>> = serde_json::from_slice(&bytes)
        .map_err(|e| ApiError::Unknown(format!("Resposta inválida do servidor: {}", e)))?;
    Ok(list.unwrap_or_default())
}
