//! Tile server access.
//!
//! A tile server is described by a [`UrlTemplate`]; tiles are fetched through
//! the blocking [`HttpClient`] seam, implemented for real use by
//! [`ReqwestClient`].
//!
//! ```ignore
//! use gzsatellite::provider::{HttpClient, ReqwestClient, UrlTemplate};
//!
//! let client = ReqwestClient::new()?;
//! let template = UrlTemplate::new("https://tile.openstreetmap.org/{z}/{x}/{y}.png");
//! let response = client.get(&template.uri_for_tile(0, 0, 0))?;
//! ```

mod http;
mod types;
mod url;

pub use http::{HttpClient, ReqwestClient, DEFAULT_TIMEOUT_SECS};
pub use types::{HttpResponse, ProviderError};
pub use url::UrlTemplate;

#[cfg(test)]
pub use http::tests::MockHttpClient;
