/// GraphQL endpoint of the Literal API
pub const DEFAULT_GRAPHQL_URL: &str = "https://literal.club/graphql/";
/// Number of reviews requested per page
pub const DEFAULT_PAGE_SIZE: u32 = 100;
/// Default maximum number of retries for a transient request failure
pub const DEFAULT_MAX_RETRIES: u32 = 3;
/// Delay in milliseconds before the first retry
pub const DEFAULT_RETRY_BASE_DELAY_MS: u64 = 500;
/// Upper bound in milliseconds for any single backoff delay
pub const DEFAULT_RETRY_MAX_DELAY_MS: u64 = 10_000;
/// User agent string used in HTTP requests to identify this client to the Literal API
pub const USER_AGENT: &str = concat!("literal-export/", env!("CARGO_PKG_VERSION"));
/// Header row of the CSV export
pub const CSV_HEADER: [&str; 5] = ["Title", "Author", "Rating", "Date", "Comment"];
