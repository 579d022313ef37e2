//! Shared constants used across ArticlePad crates.

/// Default base URL of the article API.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";

/// Username sent with saves when no identity has been stored.
pub const GUEST_USERNAME: &str = "guest";

/// Fixed listing route shown after cancel or a successful save.
pub const LISTING_ROUTE_PATH: &str = "/generation-history";

/// Route prefix for the article editor (`/edit-article/{id}`).
pub const EDITOR_ROUTE_PREFIX: &str = "/edit-article/";

/// Path segment under which the API serves article images.
pub const IMAGES_PATH_SEGMENT: &str = "images";

/// API path for loading one article.
pub const FETCH_ARTICLE_PATH: &str = "fetch-single-article";

/// API path for persisting article edits.
pub const UPDATE_ARTICLE_PATH: &str = "update-article";

/// API path for the per-user article history.
pub const FETCH_HISTORY_PATH: &str = "fetch-generated-history";

/// Persistent-storage key holding the acting username.
pub const USERNAME_STORAGE_KEY: &str = "username";

/// Default request timeout used by the CLI, in seconds.
pub const DEFAULT_CLI_TIMEOUT_SECS: u64 = 30;

/// Soft-delete endpoint (`DELETE ?id=&username=`).
pub const DELETE_ARTICLE_PATH: &str = "delete-article";

/// Plain-text article body download endpoint.
pub const DOWNLOAD_ARTICLE_PATH: &str = "download-article";
