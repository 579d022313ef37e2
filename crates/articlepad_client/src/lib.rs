//! HTTP client for the article API.
//!
//! Wraps the three JSON endpoints the editor and CLI consume and builds image
//! URLs for direct resource loads.

mod client;
mod error;
#[cfg(any(test, feature = "test-support"))]
/// In-process fake article API for tests.
pub mod fake_api;

pub use client::{image_url, ArticleClient};
pub use error::ClientError;
