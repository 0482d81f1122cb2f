//! SIM Manager Fetch Library
//!
//! A small HTTP/1.1 client for talking to the remote SIM Manager service.
//! The card depends on the [`Fetcher`] trait, not the concrete client, so
//! transports can be swapped and tests can script responses.
//!
//! # Example
//!
//! ```rust,no_run
//! use simaka_fetch::{FetchClient, FetchClientConfig, FetchRequest, Fetcher};
//!
//! async fn example() {
//!     let client = FetchClient::new(FetchClientConfig::default());
//!     let request = FetchRequest::get("http://localhost:8080/3g-authenticate?rand=00&autn=00")
//!         .with_header("Accept", "application/json");
//!     let _response = client.fetch(request).await;
//! }
//! ```

pub mod client;
pub mod error;
pub mod message;

// Re-export commonly used types
pub use client::{FetchClient, FetchClientConfig, Fetcher};
pub use error::{FetchError, FetchResult};
pub use message::{FetchRequest, FetchResponse};
