//! History listing handler.

use super::EventSink;
use crate::backend::CoreEvent;
use articlepad_client::ArticleClient;
use tracing::error;

pub(super) async fn handle_list(client: &ArticleClient, sink: &EventSink, username: String) {
    match client.fetch_history(&username).await {
        Ok(history) => sink.send(CoreEvent::ArticlesListed {
            username,
            items: history.data,
        }),
        Err(err) => {
            error!("backend history for '{}' failed: {}", username, err);
            sink.send(CoreEvent::ArticleListFailed {
                message: err.to_string(),
            });
        }
    }
}
