//! State transitions for navigation, editing, saving, and backend events.

use super::{ArticlePadApp, ImageDisplay, Route};
use crate::backend::{CoreCmd, CoreEvent};
use articlepad_client::image_url;
use articlepad_core::models::article::{ArticleUpdate, EditableField};
use tracing::{debug, error, info, warn};

pub(super) const LOAD_FAILED_MESSAGE: &str = "Failed to fetch article";
pub(super) const SAVE_FAILED_MESSAGE: &str = "Failed to update article";
pub(super) const SAVE_SUCCEEDED_MESSAGE: &str = "Article updated successfully";
pub(super) const LIST_FAILED_MESSAGE: &str = "Failed to fetch articles";
pub(super) const DELETE_FAILED_MESSAGE: &str = "Failed to delete article";
pub(super) const DELETE_SUCCEEDED_MESSAGE: &str = "Article deleted successfully";

/// Borrowed view of what the editor route should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum EditorView<'a> {
    Loading,
    Form(FormView<'a>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FormView<'a> {
    pub(crate) title: &'a str,
    pub(crate) entities: &'a str,
    pub(crate) content: &'a str,
    pub(crate) image: Option<ImageBlock>,
    pub(crate) save_enabled: bool,
}

/// Image section shown only for articles with a non-empty `image_url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ImageBlock {
    pub(crate) source: String,
    pub(crate) display: ImageDisplay,
    pub(crate) caption: String,
}

impl ArticlePadApp {
    /// Navigate to `route` as a user-visible transition.
    pub(super) fn navigate(&mut self, route: Route) {
        self.navigation_count = self.navigation_count.saturating_add(1);
        info!("navigating {} -> {}", self.route, route);
        self.enter_route(route);
    }

    /// Enter a route: discard the draft and kick off the route's load.
    ///
    /// Every entry bumps the load generation so replies for a screen the user
    /// already left are ignored. An outstanding save keeps its guard until
    /// its own reply arrives.
    pub(super) fn enter_route(&mut self, route: Route) {
        self.route = route;
        self.draft = None;
        self.image = ImageDisplay::Showing;
        self.pending_delete = None;
        self.load_generation = self.load_generation.wrapping_add(1);
        match route {
            Route::Editor { id } => self.request_load(id),
            Route::Listing => self.refresh_listing(),
        }
    }

    fn request_load(&mut self, id: i64) {
        let command = CoreCmd::LoadArticle {
            id,
            generation: self.load_generation,
        };
        if self.backend.cmd_tx.send(command).is_err() {
            error!("load of article {} not sent: backend unavailable", id);
            self.notify_error(LOAD_FAILED_MESSAGE);
        }
    }

    /// Ask the backend for the acting user's article history.
    pub(super) fn refresh_listing(&mut self) {
        if self.listing_in_flight {
            return;
        }
        let command = CoreCmd::ListArticles {
            username: self.identity.username().to_string(),
        };
        if self.backend.cmd_tx.send(command).is_err() {
            error!("history request not sent: backend unavailable");
            self.notify_error(LIST_FAILED_MESSAGE);
            return;
        }
        self.listing_in_flight = true;
    }

    /// In-place access to one editable field of the draft; `None` while loading.
    pub(super) fn draft_field_mut(&mut self, field: EditableField) -> Option<&mut String> {
        self.draft.as_mut().map(|draft| draft.field_mut(field))
    }

    /// Send the draft's editable fields to the API as the acting user.
    pub(super) fn save_changes(&mut self) {
        let Some(draft) = self.draft.as_ref() else {
            return;
        };
        if let Some(pending) = self.save_in_flight {
            debug!(
                "save already in flight (generation {}); ignoring save of article {}",
                pending, draft.id
            );
            return;
        }
        let id = draft.id;
        let generation = self.load_generation;
        let update = ArticleUpdate::from_draft(draft, &self.identity);
        if self
            .backend
            .cmd_tx
            .send(CoreCmd::SaveArticle {
                id,
                generation,
                update,
            })
            .is_err()
        {
            error!("save of article {} not sent: backend unavailable", id);
            self.notify_error(SAVE_FAILED_MESSAGE);
            return;
        }
        self.save_in_flight = Some(generation);
    }

    /// Finish the outstanding save issued from `generation`, if it is ours.
    fn settle_save(&mut self, generation: u64) {
        if self.save_in_flight == Some(generation) {
            self.save_in_flight = None;
        }
    }

    /// Leave the editor without saving.
    pub(super) fn cancel(&mut self) {
        self.navigate(Route::Listing);
    }

    pub(super) fn image_failed(&mut self) {
        if !self.image.is_errored() {
            warn!("article image failed to load");
        }
        self.image = self.image.on_load_failed();
    }

    pub(super) fn retry_image(&mut self) {
        self.image = self.image.on_retry();
    }

    pub(super) fn image_block(&self) -> Option<ImageBlock> {
        let draft = self.draft.as_ref().filter(|draft| draft.has_image())?;
        Some(ImageBlock {
            source: image_url(&self.api_base_url, &draft.image_url),
            display: self.image,
            caption: draft.meta_title.clone(),
        })
    }

    pub(crate) fn editor_view(&self) -> EditorView<'_> {
        match self.draft.as_ref() {
            None => EditorView::Loading,
            Some(draft) => EditorView::Form(FormView {
                title: &draft.title,
                entities: &draft.entities,
                content: &draft.article,
                image: self.image_block(),
                save_enabled: self.save_in_flight.is_none(),
            }),
        }
    }

    /// First click on a listing row's Delete asks for confirmation.
    pub(super) fn request_delete(&mut self, id: i64) {
        self.pending_delete = Some(id);
    }

    pub(super) fn dismiss_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Send the confirmed delete as the acting user.
    pub(super) fn confirm_delete(&mut self) {
        let Some(id) = self.pending_delete.take() else {
            return;
        };
        if self.delete_in_flight.is_some() {
            debug!("delete already in flight; ignoring delete of article {}", id);
            return;
        }
        let command = CoreCmd::DeleteArticle {
            id,
            username: self.identity.username().to_string(),
        };
        if self.backend.cmd_tx.send(command).is_err() {
            error!("delete of article {} not sent: backend unavailable", id);
            self.notify_error(DELETE_FAILED_MESSAGE);
            return;
        }
        self.delete_in_flight = Some(id);
    }

    pub(super) fn apply_event(&mut self, event: CoreEvent) {
        match event {
            CoreEvent::ArticleLoaded {
                generation,
                article,
            } => {
                if generation != self.load_generation {
                    debug!(
                        "dropping stale load of article {} (generation {} != {})",
                        article.id, generation, self.load_generation
                    );
                    return;
                }
                self.draft = Some(article);
                self.image = ImageDisplay::Showing;
            }
            CoreEvent::ArticleLoadFailed {
                generation,
                id,
                message,
            } => {
                if generation != self.load_generation {
                    warn!("stale load of article {} failed: {}", id, message);
                    return;
                }
                error!("error fetching article {}: {}", id, message);
                self.notify_error(LOAD_FAILED_MESSAGE);
            }
            CoreEvent::ArticleSaved {
                id,
                generation,
                message,
            } => {
                self.settle_save(generation);
                info!(
                    "article {} updated: {}",
                    id,
                    message.as_deref().unwrap_or("ok")
                );
                self.notify_success(SAVE_SUCCEEDED_MESSAGE);
                if generation == self.load_generation {
                    self.navigate(Route::Listing);
                } else {
                    debug!(
                        "save of article {} finished after leaving its editor (generation {} != {})",
                        id, generation, self.load_generation
                    );
                }
            }
            CoreEvent::ArticleSaveFailed {
                id,
                generation,
                message,
            } => {
                self.settle_save(generation);
                error!("error updating article {}: {}", id, message);
                self.notify_error(SAVE_FAILED_MESSAGE);
            }
            CoreEvent::ArticlesListed { username, items } => {
                self.listing_in_flight = false;
                debug!("history for '{}' has {} articles", username, items.len());
                self.listing = items;
                self.listing_loaded = true;
            }
            CoreEvent::ArticleListFailed { message } => {
                self.listing_in_flight = false;
                error!("error fetching article history: {}", message);
                self.notify_error(LIST_FAILED_MESSAGE);
            }
            CoreEvent::ArticleDeleted { id } => {
                self.delete_in_flight = None;
                self.listing.retain(|item| item.id != id);
                self.notify_success(DELETE_SUCCEEDED_MESSAGE);
            }
            CoreEvent::ArticleDeleteFailed { id, message } => {
                self.delete_in_flight = None;
                error!("error deleting article {}: {}", id, message);
                self.notify_error(DELETE_FAILED_MESSAGE);
            }
        }
    }
}
