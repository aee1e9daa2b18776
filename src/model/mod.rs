/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// HTTP plumbing for the GraphQL endpoint with bounded retry
pub mod http;
/// Request bodies and GraphQL documents
pub mod requests;
/// Response models from the GraphQL API
pub mod responses;
/// Retry configuration for HTTP requests
pub mod retry;
