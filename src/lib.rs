//! # ncloud-provider
//!
//! A client for the Naver Cloud Platform (NCP) API gateway covering two
//! services: [Global DNS](https://www.ncloud.com/product/networking/globalDns)
//! zone/record management and
//! [Certificate Manager](https://www.ncloud.com/product/security/certificateManager)
//! external-certificate import.
//!
//! Every request is authenticated with the gateway's per-request
//! HMAC-SHA256 signature (`x-ncp-apigw-signature-v2`), computed over the
//! method, path, millisecond timestamp and access key immediately before
//! sending.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ncloud_provider::NcloudClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = NcloudClient::new(
//!         "your-access-key".to_string(),
//!         "your-secret-key".to_string(),
//!     );
//!
//!     // Desired state: www.example.com A 203.0.113.9, registering the
//!     // zone on first use. Re-running is safe: an existing matching
//!     // record is refreshed in place instead of duplicated.
//!     let (domain, record) = client
//!         .set_record("www.example.com", "A", "203.0.113.9", 300, true)
//!         .await?;
//!     println!("{} {} -> {}", record.host, record.record_type, record.content);
//!
//!     // Record changes stay staged until the zone is applied.
//!     client.apply_domain(&domain).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Pending changes
//!
//! The provider buffers record mutations server-side; they go live only
//! after the owning zone's pending changes are applied. [`NcloudClient::delete_record`]
//! applies automatically; after [`NcloudClient::set_record`] the caller
//! invokes [`NcloudClient::apply_domain`] explicitly (see the method docs).
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, NcloudError>`](NcloudError) with
//! structured variants callers can branch on:
//!
//! - [`NcloudError::ApiRejected`] — non-200 status, with the drained body
//! - [`NcloudError::Timeout`] / [`NcloudError::NetworkError`] — transport failure
//! - [`NcloudError::DomainNotFound`] / [`NcloudError::RecordNotFound`] — expected absences
//! - [`NcloudError::UnexpectedResponse`] — a 200 response missing the entity just created
//!
//! No operation retries internally; multi-step operations are not atomic,
//! and re-running them is safe because each step re-checks remote state.

mod certificate;
mod client;
mod dns;
mod error;
mod sign;
mod types;
mod utils;

// Re-export error types
pub use error::{NcloudError, Result};

// Re-export the client
pub use client::{NcloudClient, NcloudClientBuilder};

// Re-export model types
pub use types::{Certificate, DnsRecord, Domain, Page};

// Re-export pure helpers useful to embedding applications
pub use certificate::certificate_name;
pub use sign::signature;
pub use utils::domain_name::{normalize_host, split_domain};
