/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::config::Credentials;
use serde::Serialize;

/// Login mutation; returns the bearer token and the account profile
pub const LOGIN_QUERY: &str = r#"
mutation login($email: String!, $password: String!) {
  login(email: $email, password: $password) {
    token
    email
    languages
    profile {
      id
      handle
      name
      bio
      image
    }
  }
}
"#;

/// Paginated reviews of the logged-in account
pub const RATINGS_QUERY: &str = r#"
query myReviews($limit: Int!, $offset: Int!) {
  myReviews(limit: $limit, offset: $offset) {
    data {
      rating
      updatedAt
      text
      book {
        title
        authors {
          name
        }
      }
    }
  }
}
"#;

/// Body of every request sent to the GraphQL endpoint
#[derive(Debug, Clone, Serialize)]
pub struct GraphqlRequest<'a, V> {
    /// Query or mutation document
    pub query: &'a str,
    /// Variables bound by the document
    pub variables: V,
}

/// Variables of [`LOGIN_QUERY`]
#[derive(Clone, Serialize)]
pub struct LoginVariables<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Variables of [`RATINGS_QUERY`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReviewsVariables {
    pub limit: u32,
    pub offset: u32,
}

impl<'a> GraphqlRequest<'a, LoginVariables<'a>> {
    /// Builds the login mutation for the given credentials
    #[must_use]
    pub fn login(credentials: &'a Credentials) -> Self {
        Self {
            query: LOGIN_QUERY,
            variables: LoginVariables {
                email: &credentials.email,
                password: &credentials.password,
            },
        }
    }
}

impl GraphqlRequest<'static, ReviewsVariables> {
    /// Builds the reviews query for one page
    #[must_use]
    pub fn my_reviews(limit: u32, offset: u32) -> Self {
        Self {
            query: RATINGS_QUERY,
            variables: ReviewsVariables { limit, offset },
        }
    }
}
