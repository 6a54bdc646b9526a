use reqwest::{header, Client, Method, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::session::SessionStore;

/// Shared HTTP layer: one `reqwest::Client` configured from `ClientConfig`,
/// plus the session handle whose token is attached to every outgoing
/// request. Every resource client goes through this type; none of them
/// touches `reqwest` directly.
#[derive(Clone)]
pub struct Transport {
    client: Client,
    base_url: String,
    session: SessionStore,
}

impl Transport {
    pub fn new(config: &ClientConfig, session: SessionStore) -> Result<Self> {
        let parsed = Url::parse(&config.base_url)
            .map_err(|e| Error::Config(format!("Invalid base URL {}: {}", config.base_url, e)))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(Error::Config(format!(
                "Unsupported base URL scheme: {}",
                parsed.scheme()
            )));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    pub async fn get<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self.prepare(Method::GET, path).send().await?;
        self.decode(response).await
    }

    /// GET with the query struct serialized as URL-encoded pairs. `None`
    /// fields must carry `skip_serializing_if` so they are omitted entirely.
    pub async fn get_query<Q, T>(&self, path: &str, query: &Q) -> Result<T>
    where
        Q: Serialize,
        T: DeserializeOwned,
    {
        let response = self.prepare(Method::GET, path).query(query).send().await?;
        self.decode(response).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = self.prepare(Method::POST, path).json(body).send().await?;
        self.decode(response).await
    }

    /// POST without a body, for action endpoints like `/jobs/{id}/save`.
    pub async fn post_empty<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self.prepare(Method::POST, path).send().await?;
        self.decode(response).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = self.prepare(Method::PUT, path).json(body).send().await?;
        self.decode(response).await
    }

    /// PUT without a body, for action endpoints like `/companies/{id}/verify`.
    pub async fn put_empty<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self.prepare(Method::PUT, path).send().await?;
        self.decode(response).await
    }

    /// DELETE against endpoints that answer with an empty body.
    pub async fn delete_no_content(&self, path: &str) -> Result<()> {
        let response = self.prepare(Method::DELETE, path).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(self.http_error(status, response).await)
        }
    }

    fn prepare(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);

        let mut request = self.client.request(method, &url);
        if let Some(token) = self.session.token() {
            request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        request
    }

    async fn decode<T>(&self, response: Response) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if status.is_success() {
            let body = response.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            Err(self.http_error(status, response).await)
        }
    }

    /// Non-2xx responses become `Error::Http` with the server-provided
    /// message: the JSON body's `error` key, then `message`, then the raw
    /// body text, then the status reason.
    async fn http_error(&self, status: StatusCode, response: Response) -> Error {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|value| {
                value
                    .get("error")
                    .or_else(|| value.get("message"))
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| {
                if body.trim().is_empty() {
                    status.canonical_reason().unwrap_or("unknown error").to_string()
                } else {
                    body
                }
            });

        Error::http_error(status.as_u16(), message)
    }
}
