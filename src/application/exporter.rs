/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Exporter for Literal ratings
//!
//! The exporter owns the credentials, the GraphQL client and the
//! authentication state. It:
//! - Logs in once, on first use or explicitly through [`Exporter::login`]
//! - Pages through the reviews of the account
//! - Writes the flattened ratings as CSV or JSON
//!
//! # Example
//! ```ignore
//! use literal_export::prelude::*;
//!
//! let credentials = Credentials::new("reader@example.com", "secret");
//! let mut exporter = Exporter::new(credentials, Config::new())?;
//! let ratings = exporter.fetch_ratings().await?;
//! ```

use crate::application::auth::{Auth, Session, SessionState};
use crate::application::config::{Config, Credentials};
use crate::application::export::write_ratings;
use crate::error::AppError;
use crate::model::http::{GraphqlClient, is_retry_exhaustion};
use crate::model::requests::GraphqlRequest;
use crate::model::responses::{MyReviewsData, Review};
use crate::presentation::format::ExportFormat;
use crate::presentation::rating::Rating;
use std::io::Write;
use tracing::{debug, error, info};

/// Exports the ratings of one Literal account
pub struct Exporter {
    auth: Auth,
    client: GraphqlClient,
    config: Config,
    state: SessionState,
}

impl Exporter {
    /// Creates a new exporter without logging in
    ///
    /// # Returns
    /// * `Ok(Exporter)` - Unauthenticated exporter
    /// * `Err(AppError)` - If the page size is zero or the HTTP client cannot be built
    pub fn new(credentials: Credentials, config: Config) -> Result<Self, AppError> {
        if config.page_size == 0 {
            return Err(AppError::InvalidInput(
                "page size must be greater than zero".to_string(),
            ));
        }

        let client = GraphqlClient::new(&config)?;

        Ok(Self {
            auth: Auth::new(credentials),
            client,
            config,
            state: SessionState::Unauthenticated,
        })
    }

    /// Current authentication state
    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Configuration in use
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Logs in and stores the session
    ///
    /// Calling this again performs a new login and replaces the token.
    pub async fn login(&mut self) -> Result<&Session, AppError> {
        let session = self.auth.login(&self.client).await?;
        self.state.authenticate(session);
        self.state.session().ok_or(AppError::Unauthorized)
    }

    /// Returns the session, logging in on the first call
    pub async fn session(&mut self) -> Result<&Session, AppError> {
        if !self.state.is_authenticated() {
            info!("No active session, logging in");
            return self.login().await;
        }
        self.state.session().ok_or(AppError::Unauthorized)
    }

    /// Fetches every rating of the account
    ///
    /// Pages of `page_size` reviews are requested at offsets 0, `page_size`,
    /// `2 * page_size`, ... until a page comes back shorter than `page_size`.
    ///
    /// # Returns
    /// * `Ok(Vec<Rating>)` - All ratings in retrieval order
    /// * `Err(AppError::PartialExport)` - A page kept failing transiently after all retries
    /// * `Err(AppError)` - Any other failure; fetched pages are discarded
    pub async fn fetch_ratings(&mut self) -> Result<Vec<Rating>, AppError> {
        let token = self.session().await?.token.clone();
        let limit = self.config.page_size;
        let mut ratings: Vec<Rating> = Vec::new();
        let mut offset: u32 = 0;

        loop {
            let reviews = match self.fetch_page(&token, limit, offset).await {
                Ok(reviews) => reviews,
                Err(e) if is_retry_exhaustion(&e) => {
                    error!(
                        "Giving up at offset {} with {} ratings fetched",
                        offset,
                        ratings.len()
                    );
                    return Err(AppError::PartialExport {
                        fetched: ratings.len(),
                        offset,
                        source: Box::new(e),
                    });
                }
                Err(e) => return Err(e),
            };

            let count = reviews.len();
            debug!("Fetched {} ratings at offset {}", count, offset);
            ratings.extend(reviews.into_iter().map(Rating::from));

            if count < limit as usize {
                break;
            }
            offset += limit;
        }

        info!("Fetched {} ratings", ratings.len());
        Ok(ratings)
    }

    /// Fetches all ratings and writes them to `sink`
    ///
    /// Nothing is written unless every page was fetched.
    pub async fn export_ratings<W: Write>(
        &mut self,
        sink: W,
        format: ExportFormat,
    ) -> Result<usize, AppError> {
        let ratings = self.fetch_ratings().await?;
        write_ratings(sink, &ratings, format)?;
        info!("Exported {} ratings as {}", ratings.len(), format);
        Ok(ratings.len())
    }

    async fn fetch_page(
        &self,
        token: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<Review>, AppError> {
        let request = GraphqlRequest::my_reviews(limit, offset);
        let data: MyReviewsData = self.client.query(&request, Some(token)).await?;
        Ok(data.my_reviews.into_reviews())
    }
}
