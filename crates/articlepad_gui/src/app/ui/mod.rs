//! UI surfaces rendered from the main update loop.

/// Article editor form and its actions.
pub(super) mod editor_form;
/// Image section with load-failure fallback.
pub(super) mod image_panel;
/// Article history listing.
pub(super) mod listing;
/// Top bar with route and identity.
pub(super) mod top_bar;
/// Dismissible toast notifications.
pub(super) mod toasts;
