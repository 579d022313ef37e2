//! Core domain library for ArticlePad (config, identity, article models).

/// Configuration loading and defaults.
pub mod config;
/// Shared constants used across ArticlePad crates.
pub mod constants;
/// Process-global environment mutation helpers.
pub mod env;
/// Application error types.
pub mod error;
/// Acting-user identity resolution.
pub mod identity;
/// Data models mirrored from the article API.
pub mod models;

pub use config::Config;
pub use constants::{
    DEFAULT_API_BASE_URL, GUEST_USERNAME, IMAGES_PATH_SEGMENT, LISTING_ROUTE_PATH,
};
pub use error::AppError;
pub use identity::Identity;
