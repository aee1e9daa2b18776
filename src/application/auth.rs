/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Authentication module for the Literal API
//!
//! Login is a GraphQL mutation returning a bearer token. The resulting
//! [`Session`] lives inside a [`SessionState`], which only ever moves from
//! `Unauthenticated` to `Authenticated`.

use crate::application::config::Credentials;
use crate::error::{AppError, AuthError};
use crate::model::http::GraphqlClient;
use crate::model::requests::GraphqlRequest;
use crate::model::responses::{GraphqlResponse, LoginData, LoginPayload, Profile};
use serde_json::Value;
use tracing::{debug, error, info};

/// Session information for authenticated requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Bearer token attached to every request after login
    pub token: String,
    /// Email the backend reports for the account
    pub email: Option<String>,
    /// Languages configured on the account
    pub languages: Vec<String>,
    /// Public profile of the account
    pub profile: Option<Profile>,
}

impl Session {
    /// Value of the `Authorization` header
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl From<LoginPayload> for Session {
    fn from(payload: LoginPayload) -> Self {
        Session {
            token: payload.token,
            email: payload.email,
            languages: payload.languages.unwrap_or_default(),
            profile: payload.profile,
        }
    }
}

/// Authentication state of an exporter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    /// No login has happened yet
    #[default]
    Unauthenticated,
    /// Login succeeded
    Authenticated(Session),
}

impl SessionState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    /// The session, if logged in
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        match self {
            SessionState::Authenticated(session) => Some(session),
            SessionState::Unauthenticated => None,
        }
    }

    /// Stores a fresh session, replacing any previous one
    pub fn authenticate(&mut self, session: Session) {
        *self = SessionState::Authenticated(session);
    }
}

/// Authentication manager for the Literal API
///
/// Owns the credentials; sends the login mutation and turns its response
/// into a [`Session`].
pub struct Auth {
    credentials: Credentials,
}

impl Auth {
    /// Creates a new Auth instance
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    /// Performs the login mutation
    ///
    /// # Returns
    /// * `Ok(Session)` - Session carrying the bearer token
    /// * `Err(AppError::Auth(AuthError::InvalidResponse))` - The response was not JSON
    /// * `Err(AppError::Auth(AuthError::Rejected))` - The backend reported errors
    /// * `Err(AppError::Auth(AuthError::MissingToken))` - No login payload was returned
    pub async fn login(&self, client: &GraphqlClient) -> Result<Session, AppError> {
        info!("Logging in as {}", self.credentials.email);
        debug!("Sending login request to: {}", client.endpoint());

        let request = GraphqlRequest::login(&self.credentials);
        let response = client.send(&request, None).await?;
        let status = response.status();
        let body = response.text().await?;

        let parsed = serde_json::from_str::<GraphqlResponse<Value>>(&body);
        let parsed = match parsed {
            Ok(parsed) => parsed,
            Err(e) => {
                error!("Login response is not JSON ({}): {}", status, e);
                return Err(AuthError::InvalidResponse { status, body }.into());
            }
        };

        if let Some(message) = parsed.error_message() {
            error!("Login rejected: {}", message);
            return Err(AuthError::Rejected(message).into());
        }

        let data: LoginData = match parsed.data {
            Some(data) => serde_json::from_value(data)?,
            None => return Err(AuthError::MissingToken.into()),
        };
        let payload = data.login.ok_or(AuthError::MissingToken)?;
        let session = Session::from(payload);

        let handle = session
            .profile
            .as_ref()
            .and_then(|p| p.handle.as_deref())
            .unwrap_or("unknown");
        info!("✓ Login successful, profile: {}", handle);
        Ok(session)
    }
}
