//! Load/save/delete handlers for single articles.

use super::EventSink;
use crate::backend::CoreEvent;
use articlepad_client::ArticleClient;
use articlepad_core::models::article::ArticleUpdate;
use tracing::{error, info};

pub(super) async fn handle_load(client: &ArticleClient, sink: &EventSink, id: i64, generation: u64) {
    match client.fetch_article(id).await {
        Ok(article) => sink.send(CoreEvent::ArticleLoaded {
            generation,
            article,
        }),
        Err(err) => {
            error!("backend fetch for article {} failed: {}", id, err);
            sink.send(CoreEvent::ArticleLoadFailed {
                generation,
                id,
                message: err.to_string(),
            });
        }
    }
}

pub(super) async fn handle_save(
    client: &ArticleClient,
    sink: &EventSink,
    id: i64,
    generation: u64,
    update: ArticleUpdate,
) {
    match client.update_article(id, &update).await {
        Ok(message) => {
            info!("article {} saved by '{}'", id, update.username);
            sink.send(CoreEvent::ArticleSaved {
                id,
                generation,
                message,
            });
        }
        Err(err) => {
            error!("backend update for article {} failed: {}", id, err);
            sink.send(CoreEvent::ArticleSaveFailed {
                id,
                generation,
                message: err.to_string(),
            });
        }
    }
}

pub(super) async fn handle_delete(
    client: &ArticleClient,
    sink: &EventSink,
    id: i64,
    username: String,
) {
    match client.delete_article(id, &username).await {
        Ok(_) => {
            info!("article {} deleted by '{}'", id, username);
            sink.send(CoreEvent::ArticleDeleted { id });
        }
        Err(err) => {
            error!("backend delete for article {} failed: {}", id, err);
            sink.send(CoreEvent::ArticleDeleteFailed {
                id,
                message: err.to_string(),
            });
        }
    }
}
