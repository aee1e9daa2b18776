/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::model::responses::Review;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Export-ready representation of one book review
///
/// Serializes with the keys `title`, `authors`, `rating`, `updatedAt` and `text`.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    /// Title of the book
    pub title: String,
    /// Author names in the order the API lists them
    pub authors: Vec<String>,
    /// Rating given by the user
    pub rating: f64,
    /// Timestamp of the last update, as returned by the API
    pub updated_at: String,
    /// Review text, empty when the user wrote none
    pub text: String,
}

impl Rating {
    /// Authors joined with `", "`, as written to the `Author` CSV column
    #[must_use]
    pub fn joined_authors(&self) -> String {
        self.authors.join(", ")
    }

    /// Fields in the order of the CSV header
    #[must_use]
    pub fn csv_row(&self) -> [String; 5] {
        [
            self.title.clone(),
            self.joined_authors(),
            self.rating.to_string(),
            self.updated_at.clone(),
            self.text.clone(),
        ]
    }
}

impl From<Review> for Rating {
    fn from(review: Review) -> Self {
        Rating {
            title: review.book.title,
            authors: review.book.authors.into_iter().map(|a| a.name).collect(),
            rating: review.rating,
            updated_at: review.updated_at,
            text: review.text.unwrap_or_default(),
        }
    }
}
