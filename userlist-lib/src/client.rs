//! Main UserListClient

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use url::Url;

use crate::api::GraphQlRequest;
use crate::api::UserSource;
use crate::api::decode_users_response;
use crate::error::ApiError;
use crate::error::Error;
use crate::model::QueryParams;
use crate::model::UsersPage;

/// Client for the users GraphQL endpoint.
///
/// Cheap to clone (uses `Arc` internally) and safe to share across tasks.
///
/// # Example
///
/// ```ignore
/// use userlist_lib::UserListClient;
///
/// let client = UserListClient::builder()
///     .url("http://localhost:4000/graphql")
///     .timeout(Duration::from_secs(10))
///     .build()?;
///
/// let page = client.get_all_users(&QueryParams::default()).await?;
/// ```
#[derive(Clone)]
pub struct UserListClient {
    inner: Arc<UserListClientInner>,
}

struct UserListClientInner {
    endpoint: Url,
    http_client: Client,
    timeout: Option<Duration>,
}

impl UserListClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> UserListClientBuilder<Missing> {
        UserListClientBuilder::new()
    }

    /// Returns the GraphQL endpoint URL.
    pub fn endpoint(&self) -> &str {
        self.inner.endpoint.as_str()
    }

    /// Runs the `getAllUsers` query.
    pub async fn get_all_users(&self, params: &QueryParams) -> Result<UsersPage, Error> {
        let body = GraphQlRequest::get_all_users(params);

        let mut request = self
            .inner
            .http_client
            .post(self.inner.endpoint.clone())
            .json(&body);

        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        debug!(
            "getAllUsers page={} limit={} search={:?} sort={}:{}",
            params.page,
            params.limit,
            params.search_term,
            params.sort_field,
            params.sort_by_order()
        );

        let response = request.send().await.map_err(|e| self.transport_error(e))?;
        let status = response.status();
        let text = response.text().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            let message = if text.is_empty() {
                status.canonical_reason().unwrap_or("unknown status").to_string()
            } else {
                text
            };
            return Err(Error::Api(ApiError::http(status.as_u16(), message)));
        }

        decode_users_response(&text)
    }

    fn transport_error(&self, err: reqwest::Error) -> ApiError {
        match self.inner.timeout {
            Some(timeout) if err.is_timeout() => ApiError::Timeout(timeout),
            _ => ApiError::Network(err),
        }
    }
}

#[async_trait]
impl UserSource for UserListClient {
    async fn fetch_users(&self, params: &QueryParams) -> Result<UsersPage, Error> {
        self.get_all_users(params).await
    }
}

// =============================================================================
// Typestate Builder
// =============================================================================

/// Marker type for missing required builder fields.
pub struct Missing;

/// Marker type for set builder fields.
pub struct Set<T>(T);

/// Builder for constructing a [`UserListClient`].
///
/// Uses the typestate pattern so `build` only exists once `url` is set.
pub struct UserListClientBuilder<U> {
    url: U,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl UserListClientBuilder<Missing> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            url: Missing,
            timeout: None,
            connect_timeout: None,
            http_client: None,
        }
    }

    /// Sets the GraphQL endpoint URL.
    pub fn url(self, url: impl Into<String>) -> UserListClientBuilder<Set<String>> {
        UserListClientBuilder {
            url: Set(url.into()),
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            http_client: self.http_client,
        }
    }
}

impl Default for UserListClientBuilder<Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> UserListClientBuilder<U> {
    /// Sets the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// Ignored when a custom HTTP client is supplied.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets a custom HTTP client.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

impl UserListClientBuilder<Set<String>> {
    /// Builds the [`UserListClient`].
    ///
    /// Fails if the URL does not parse or is not http(s).
    pub fn build(self) -> Result<UserListClient, Error> {
        let endpoint = Url::parse(&self.url.0)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", self.url.0, e)))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(ApiError::InvalidUrl(format!(
                "{}: unsupported scheme {}",
                self.url.0,
                endpoint.scheme()
            ))
            .into());
        }

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder();
                if let Some(timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(timeout);
                }
                builder.build().map_err(ApiError::Network)?
            }
        };

        Ok(UserListClient {
            inner: Arc::new(UserListClientInner {
                endpoint,
                http_client,
                timeout: self.timeout,
            }),
        })
    }
}
