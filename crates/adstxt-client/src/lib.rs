//! # adstxt-client
//!
//! HTTP client for fetching remote ads.txt files and parsing them with the
//! [`adstxt`] crate.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use adstxt_client::AdsTxtClient;
//!
//! # async fn example() -> Result<(), adstxt_client::Error> {
//! let client = AdsTxtClient::new()?;
//!
//! // Fetch the well-known location for a publisher domain
//! let record = client.fetch_domain("example.com").await?;
//! println!("{} declared sellers", record.entry_count());
//!
//! // Or fetch an explicit URL
//! let record = client.fetch("https://example.com/ads.txt").await?;
//! # Ok(())
//! # }
//! ```
//!
//! The client is a thin transport collaborator: parsing stays best-effort and
//! infallible, while network, status, and encoding failures surface as
//! [`Error`] values without being retried by default. Retries with
//! exponential backoff can be opted into via
//! [`AdsTxtClient::with_max_retries`].

pub mod error;
pub mod http;

pub use error::{Error, Result};
pub use http::AdsTxtClient;
