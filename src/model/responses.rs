/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Envelope of every GraphQL response
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlResponse<T> {
    /// Payload, absent when the operation failed
    pub data: Option<T>,
    /// Errors reported by the backend
    #[serde(default)]
    pub errors: Option<Vec<GraphqlError>>,
}

/// One entry of the `errors` list
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct GraphqlError {
    #[serde(default)]
    pub message: String,
}

impl<T> GraphqlResponse<T> {
    /// All reported error messages joined with `", "`, or `None` when there is no error list
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        self.errors.as_ref().map(|errors| {
            errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        })
    }

    /// Unwraps the payload, turning an error list or a missing payload into [`AppError::Graphql`]
    pub fn into_result(self) -> Result<T, AppError> {
        if let Some(message) = self.error_message() {
            return Err(AppError::Graphql(message));
        }
        self.data
            .ok_or_else(|| AppError::Graphql("response carried no data".to_string()))
    }
}

/// `data` of the login mutation
#[derive(Debug, Clone, Deserialize)]
pub struct LoginData {
    pub login: Option<LoginPayload>,
}

/// Result of a successful login
#[derive(Debug, Clone, Deserialize)]
pub struct LoginPayload {
    /// Bearer token for subsequent requests
    pub token: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub languages: Option<Vec<String>>,
    #[serde(default)]
    pub profile: Option<Profile>,
}

/// Public profile of the account
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Profile {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub handle: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// `data` of the reviews query
#[derive(Debug, Clone, Deserialize)]
pub struct MyReviewsData {
    #[serde(rename = "myReviews")]
    pub my_reviews: ReviewsPage,
}

/// One page of reviews
///
/// The backend returns a list of `{ "data": review }` entries; a single
/// `{ "data": [review, ...] }` object is accepted too.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ReviewsPage {
    /// List of wrapped reviews
    Entries(Vec<ReviewEntry>),
    /// Object holding the list of reviews
    Paged {
        /// Reviews of the page
        data: Vec<Review>,
    },
}

impl ReviewsPage {
    /// Number of reviews in the page
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            ReviewsPage::Entries(entries) => entries.len(),
            ReviewsPage::Paged { data } => data.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reviews in the order the backend returned them
    #[must_use]
    pub fn into_reviews(self) -> Vec<Review> {
        match self {
            ReviewsPage::Entries(entries) => entries.into_iter().map(|e| e.data).collect(),
            ReviewsPage::Paged { data } => data,
        }
    }
}

/// Wrapper around a review in the list form of [`ReviewsPage`]
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewEntry {
    pub data: Review,
}

/// A review as returned by the API
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub rating: f64,
    pub updated_at: String,
    /// Free text of the review, `null` when the user left none
    #[serde(default)]
    pub text: Option<String>,
    pub book: Book,
}

/// Book a review is about
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    #[serde(default)]
    pub authors: Vec<Author>,
}

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Author {
    pub name: String,
}
