//! MLB Stats API access
//!
//! - `http`: the [`MlbClient`](http::MlbClient) and endpoint helpers
//! - `types`: search payloads and [`SearchOutcome`](types::SearchOutcome)

pub mod http;
pub mod types;

pub use http::{headshot_url, ClientConfig, MlbClient, MLB_BASE_URL};
pub use types::{PlayerCandidate, SearchOutcome};
