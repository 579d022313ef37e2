//! Background worker thread for article API access.

mod article;
mod history;

use crate::backend::{CoreCmd, CoreEvent};
use articlepad_client::ArticleClient;
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use tracing::error;

/// Handle for sending commands to, and receiving events from, the backend worker.
pub struct BackendHandle {
    pub cmd_tx: Sender<CoreCmd>,
    pub evt_rx: Receiver<CoreEvent>,
}

impl BackendHandle {
    #[cfg(test)]
    pub(crate) fn from_test_channels(cmd_tx: Sender<CoreCmd>, evt_rx: Receiver<CoreEvent>) -> Self {
        Self { cmd_tx, evt_rx }
    }
}

type Waker = Arc<dyn Fn() + Send + Sync>;

/// Sends worker replies and pokes the UI so it repaints to consume them.
#[derive(Clone)]
pub(super) struct EventSink {
    evt_tx: Sender<CoreEvent>,
    waker: Waker,
}

impl EventSink {
    pub(super) fn send(&self, event: CoreEvent) {
        if self.evt_tx.send(event).is_ok() {
            (self.waker)();
        }
    }
}

/// Spawn the backend worker without a repaint hook.
///
/// # Panics
/// Panics if the worker thread cannot be spawned.
pub fn spawn_backend(client: ArticleClient) -> BackendHandle {
    spawn_backend_with_waker(client, || {})
}

/// Spawn the backend worker thread that owns the async runtime and client.
///
/// Each command runs as an independent task, so requests overlap and are
/// never cancelled. Replies arrive as [`CoreEvent`] values; `waker` runs after
/// every reply so an idle UI wakes up to poll them.
///
/// # Returns
/// A [`BackendHandle`] containing the command sender and event receiver.
///
/// # Panics
/// Panics if the worker thread cannot be spawned.
pub fn spawn_backend_with_waker(
    client: ArticleClient,
    waker: impl Fn() + Send + Sync + 'static,
) -> BackendHandle {
    let (cmd_tx, cmd_rx) = unbounded::<CoreCmd>();
    let (evt_tx, evt_rx) = unbounded();
    let sink = EventSink {
        evt_tx,
        waker: Arc::new(waker),
    };

    thread::Builder::new()
        .name("articlepad-gui-backend".to_string())
        .spawn(move || {
            let rt = match tokio::runtime::Builder::new_multi_thread()
                .worker_threads(2)
                .thread_name("articlepad-gui-io")
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(err) => {
                    error!("backend runtime failed to start: {}", err);
                    for cmd in cmd_rx.iter() {
                        sink.send(cmd.into_failure(format!("Backend unavailable: {}", err)));
                    }
                    return;
                }
            };

            for cmd in cmd_rx.iter() {
                let client = client.clone();
                let sink = sink.clone();
                rt.spawn(async move {
                    match cmd {
                        CoreCmd::LoadArticle { id, generation } => {
                            article::handle_load(&client, &sink, id, generation).await
                        }
                        CoreCmd::SaveArticle {
                            id,
                            generation,
                            update,
                        } => article::handle_save(&client, &sink, id, generation, update).await,
                        CoreCmd::ListArticles { username } => {
                            history::handle_list(&client, &sink, username).await
                        }
                        CoreCmd::DeleteArticle { id, username } => {
                            article::handle_delete(&client, &sink, id, username).await
                        }
                    }
                });
            }
        })
        .expect("failed to spawn backend worker");

    BackendHandle { cmd_tx, evt_rx }
}
