//! Root crate facade for the ArticlePad client libraries and desktop UI.

/// Desktop article editor (feature-gated).
#[cfg(feature = "gui")]
pub use articlepad_gui as gui;

pub use articlepad_client::{image_url, ArticleClient, ClientError};
pub use articlepad_core::{
    config, constants, error, identity, models, AppError, Config, Identity,
};
