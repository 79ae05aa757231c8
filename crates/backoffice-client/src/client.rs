// HTTP wrapper for the backoffice API

use reqwest::StatusCode;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Not found")]
    NotFound,
}

/// Thin wrapper around `reqwest::Client` pinned to one base URL.
///
/// The backend treats every failure the same way (no status-specific
/// branching upstream of it), so responses collapse to success, 404, or
/// `Api { status, message }`.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.http.get(&url).send().await?;
        self.handle_response(response).await
    }

    /// POST with a JSON body, ignoring any response body. Mutation endpoints
    /// on this backend return nothing the client relies on.
    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.http.post(&url).json(body).send().await?;
        self.handle_empty(response).await
    }

    /// Body-less POST for action endpoints (`accept_guest`, `decline_guest`).
    pub async fn post_action(&self, path: &str) -> Result<(), ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.http.post(&url).send().await?;
        self.handle_empty(response).await
    }

    /// PUT with a JSON body, ignoring any response body.
    pub async fn put<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.http.put(&url).json(body).send().await?;
        self.handle_empty(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.http.delete(&url).send().await?;
        self.handle_empty(response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound);
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.json().await?;
        Ok(body)
    }

    async fn handle_empty(&self, response: reqwest::Response) -> Result<(), ClientError> {
        let status = response.status();

        if status.is_success() {
            return Ok(());
        }

        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound);
        }

        let message = response.text().await.unwrap_or_default();
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed_from_base_url() {
        let client = ApiClient::new("http://127.0.0.1:5050/backoffice/");
        assert_eq!(client.base_url(), "http://127.0.0.1:5050/backoffice");
    }
}
