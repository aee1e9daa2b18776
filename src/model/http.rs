/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

use crate::application::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::responses::GraphqlResponse;
use crate::model::retry::RetryConfig;
use rand::Rng;
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, warn};

/// HTTP client bound to the GraphQL endpoint
///
/// Every call goes through [`make_graphql_request`], so transient failures are
/// retried according to the configured [`RetryConfig`].
pub struct GraphqlClient {
    http_client: Client,
    endpoint: String,
    retry_config: RetryConfig,
}

impl GraphqlClient {
    /// Creates a new client from the configuration
    ///
    /// # Returns
    /// * `Ok(GraphqlClient)` - Client ready to send requests
    /// * `Err(AppError)` - If the underlying HTTP client cannot be built
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(secs) = config.graphql.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http_client: builder.build()?,
            endpoint: config.graphql.url.clone(),
            retry_config: config.retry.clone(),
        })
    }

    /// The endpoint requests are posted to
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Posts a request and returns the raw response
    ///
    /// Non-transient error statuses are returned as responses so callers can
    /// inspect the body.
    pub async fn send<B: Serialize>(
        &self,
        body: &B,
        bearer_token: Option<&str>,
    ) -> Result<Response, AppError> {
        make_graphql_request(
            &self.http_client,
            &self.endpoint,
            bearer_token,
            body,
            &self.retry_config,
        )
        .await
    }

    /// Posts a request and unwraps the `data` of its GraphQL response
    pub async fn query<B: Serialize, T: DeserializeOwned>(
        &self,
        body: &B,
        bearer_token: Option<&str>,
    ) -> Result<T, AppError> {
        let response = self.send(body, bearer_token).await?;
        parse_graphql_response(response).await
    }
}

/// Returns `true` for statuses worth retrying
#[must_use]
pub fn is_transient_status(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

/// Returns `true` for transport failures worth retrying
pub(crate) fn is_transient_error(err: &reqwest::Error) -> bool {
    err.is_connect() || err.is_timeout() || err.is_request()
}

/// Posts a JSON body to the GraphQL endpoint with bounded retry and exponential backoff
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `url` - Full URL of the GraphQL endpoint
/// * `bearer_token` - Token sent as `Authorization: Bearer`, if any
/// * `body` - Request body, serialized to JSON
/// * `retry_config` - Retry cap and backoff delays
///
/// # Returns
///
/// * `Ok(Response)` - Any response whose status is not transient, or the last
///   transient response once the retry cap is reached
/// * `Err(AppError::RetriesExhausted)` - Transport errors until the retry cap was reached
/// * `Err(AppError::Network)` - A non-transient transport error, or any transport
///   error when retries are disabled
pub async fn make_graphql_request<B: Serialize>(
    client: &Client,
    url: &str,
    bearer_token: Option<&str>,
    body: &B,
    retry_config: &RetryConfig,
) -> Result<Response, AppError> {
    let max_attempts = retry_config.max_attempts();
    let mut attempt = 0;

    loop {
        attempt += 1;
        debug!("POST {} (attempt {}/{})", url, attempt, max_attempts);

        let mut request = client
            .post(url)
            .header("Accept", "application/json")
            .json(body);
        if let Some(token) = bearer_token {
            request = request.bearer_auth(token);
        }

        match request.send().await {
            Ok(response) => {
                let status = response.status();
                debug!("Response status: {}", status);
                if !is_transient_status(status) {
                    return Ok(response);
                }
                if attempt >= max_attempts {
                    // The caller classifies the final response from its body.
                    error!("Status {} after {} attempts", status, attempt);
                    return Ok(response);
                }
                let body_text = response.text().await.unwrap_or_default();
                warn!("Transient status {}: {}", status, body_text);
            }
            Err(e) if is_transient_error(&e) => {
                if max_attempts == 1 {
                    return Err(AppError::Network(e));
                }
                if attempt >= max_attempts {
                    error!("Request failed after {} attempts: {}", attempt, e);
                    return Err(AppError::RetriesExhausted {
                        attempts: attempt,
                        source: Box::new(AppError::Network(e)),
                    });
                }
                warn!("Transient network error: {}", e);
            }
            Err(e) => return Err(AppError::Network(e)),
        }

        let delay = with_jitter(retry_config.backoff_delay_ms(attempt));
        warn!(
            "Retrying in {} ms ({} of {} retries)",
            delay.as_millis(),
            attempt,
            retry_config.max_retries()
        );
        tokio::time::sleep(delay).await;
    }
}

/// Adds up to a quarter of the delay as random jitter
fn with_jitter(delay_ms: u64) -> Duration {
    if delay_ms < 4 {
        return Duration::from_millis(delay_ms);
    }
    let jitter = rand::rng().random_range(0..=delay_ms / 4);
    Duration::from_millis(delay_ms.saturating_add(jitter))
}

/// Reads a GraphQL response and unwraps its `data`
///
/// # Returns
///
/// * `Ok(T)` - The payload
/// * `Err(AppError::Unauthorized)` - On HTTP 401
/// * `Err(AppError::Graphql)` - The response reported errors or carried no data
/// * `Err(AppError::Unexpected)` - A non-success status without a GraphQL body
pub async fn parse_graphql_response<T: DeserializeOwned>(
    response: Response,
) -> Result<T, AppError> {
    let status = response.status();

    if status == StatusCode::UNAUTHORIZED {
        let body_text = response.text().await.unwrap_or_default();
        error!("Unauthorized: {}", body_text);
        return Err(AppError::Unauthorized);
    }

    let body_text = response.text().await?;
    let parsed: GraphqlResponse<T> = match serde_json::from_str(&body_text) {
        Ok(parsed) => parsed,
        Err(_) if !status.is_success() => {
            error!("Request failed with status {}: {}", status, body_text);
            return Err(AppError::Unexpected(status));
        }
        Err(e) => return Err(e.into()),
    };

    parsed.into_result()
}

/// Returns `true` when `err` is what a request leaves behind after its retries ran out
#[must_use]
pub fn is_retry_exhaustion(err: &AppError) -> bool {
    match err {
        AppError::RetriesExhausted { .. } => true,
        AppError::Unexpected(status) => is_transient_status(*status),
        AppError::Network(e) => is_transient_error(e),
        _ => false,
    }
}
