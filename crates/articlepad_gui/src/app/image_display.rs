//! Two-state display machine for an article's image.

/// Whether the article image is being shown or has failed to load.
///
/// Starts in `Showing`. A load failure moves to `Errored`; the user's Retry
/// moves back to `Showing`, which triggers a fresh load attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum ImageDisplay {
    #[default]
    Showing,
    Errored,
}

impl ImageDisplay {
    pub(crate) fn on_load_failed(self) -> Self {
        Self::Errored
    }

    pub(crate) fn on_retry(self) -> Self {
        Self::Showing
    }

    pub(crate) fn is_errored(self) -> bool {
        self == Self::Errored
    }
}
