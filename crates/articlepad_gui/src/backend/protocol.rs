//! Protocol types for the GUI backend worker.

use articlepad_core::models::article::{Article, ArticleSummary, ArticleUpdate};

/// Commands issued by the UI thread for the backend worker to execute.
#[derive(Debug, Clone)]
pub enum CoreCmd {
    /// Fetch one article for the editor. `generation` is echoed back so the UI
    /// can drop responses for superseded loads.
    LoadArticle { id: i64, generation: u64 },
    /// Persist the editable fields of an article as the given user.
    /// `generation` is the route entry the save was issued from.
    SaveArticle {
        id: i64,
        generation: u64,
        update: ArticleUpdate,
    },
    /// Fetch the user's article history for the listing view.
    ListArticles { username: String },
    /// Soft-delete one of the user's articles.
    DeleteArticle { id: i64, username: String },
}

/// Events produced by the backend worker and polled by the UI thread.
#[derive(Debug, Clone)]
pub enum CoreEvent {
    ArticleLoaded {
        generation: u64,
        article: Article,
    },
    ArticleLoadFailed {
        generation: u64,
        id: i64,
        message: String,
    },
    ArticleSaved {
        id: i64,
        generation: u64,
        message: Option<String>,
    },
    ArticleSaveFailed {
        id: i64,
        generation: u64,
        message: String,
    },
    ArticlesListed {
        username: String,
        items: Vec<ArticleSummary>,
    },
    ArticleListFailed {
        message: String,
    },
    ArticleDeleted {
        id: i64,
    },
    ArticleDeleteFailed {
        id: i64,
        message: String,
    },
}

impl CoreCmd {
    /// Failure event reported when this command never reaches the API.
    pub(crate) fn into_failure(self, message: String) -> CoreEvent {
        match self {
            Self::LoadArticle { id, generation } => CoreEvent::ArticleLoadFailed {
                generation,
                id,
                message,
            },
            Self::SaveArticle { id, generation, .. } => CoreEvent::ArticleSaveFailed {
                id,
                generation,
                message,
            },
            Self::ListArticles { .. } => CoreEvent::ArticleListFailed { message },
            Self::DeleteArticle { id, .. } => CoreEvent::ArticleDeleteFailed { id, message },
        }
    }
}
