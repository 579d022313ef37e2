//! App state tests driven through test channels instead of a live worker.

use super::state_ops::{EditorView, FormView};
use super::*;
use crate::backend::{BackendHandle, CoreCmd, CoreEvent};
use articlepad_core::models::article::EditableField;
use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};

const TEST_API_BASE: &str = "http://127.0.0.1:5000";

struct TestHarness {
    app: ArticlePadApp,
    cmd_rx: Receiver<CoreCmd>,
    evt_tx: Sender<CoreEvent>,
}

impl TestHarness {
    /// Feed an event through the channel and drain it like a frame would.
    fn deliver(&mut self, event: CoreEvent) {
        self.evt_tx.send(event).expect("send event");
        self.app.drain_backend_events();
    }

    fn form(&self) -> FormView<'_> {
        match self.app.editor_view() {
            EditorView::Form(form) => form,
            EditorView::Loading => panic!("editor is still loading"),
        }
    }

    /// Type into one field of the loaded draft.
    fn edit(&mut self, field: EditableField, value: &str) {
        *self.app.draft_field_mut(field).expect("draft loaded") = value.to_string();
    }

    fn assert_no_cmd(&self) {
        assert!(matches!(self.cmd_rx.try_recv(), Err(TryRecvError::Empty)));
    }
}

fn sample_article(id: i64) -> Article {
    Article {
        id,
        title: "Old Title".to_string(),
        entities: "rust, egui".to_string(),
        article: "Original body".to_string(),
        image_url: "photo.png".to_string(),
        meta_title: "A caption".to_string(),
        user_id: Some(1),
        created_time_ts: Some("2024-05-01 10:00:00".to_string()),
        updated_time_ts: None,
    }
}

fn make_app(route: Route) -> TestHarness {
    make_app_at(TEST_API_BASE, route)
}

fn make_app_at(api_base_url: &str, route: Route) -> TestHarness {
    let (cmd_tx, cmd_rx) = unbounded();
    let (evt_tx, evt_rx) = unbounded();
    let app = ArticlePadApp::with_backend(
        BackendHandle::from_test_channels(cmd_tx, evt_rx),
        api_base_url.to_string(),
        Identity::guest(),
        route,
    );
    TestHarness {
        app,
        cmd_rx,
        evt_tx,
    }
}

fn recv_cmd(rx: &Receiver<CoreCmd>) -> CoreCmd {
    rx.recv_timeout(Duration::from_millis(200))
        .expect("expected outbound command")
}

/// Open the editor for `article` and deliver its load reply.
fn make_loaded_editor(article: Article) -> TestHarness {
    make_loaded_editor_at(TEST_API_BASE, article)
}

fn make_loaded_editor_at(api_base_url: &str, article: Article) -> TestHarness {
    let mut harness = make_app_at(api_base_url, Route::Editor { id: article.id });
    harness.answer_load(article);
    harness
}

impl TestHarness {
    /// Answer the pending load command for `article.id` with `article`.
    fn answer_load(&mut self, article: Article) {
        let generation = match recv_cmd(&self.cmd_rx) {
            CoreCmd::LoadArticle { id, generation } => {
                assert_eq!(id, article.id);
                generation
            }
            other => panic!("unexpected command: {:?}", other),
        };
        self.deliver(CoreEvent::ArticleLoaded {
            generation,
            article,
        });
    }
}

fn toast_descriptions(app: &ArticlePadApp) -> Vec<(ToastKind, String)> {
    app.toasts
        .iter()
        .map(|toast| (toast.kind, toast.description.clone()))
        .collect()
}

mod navigation_and_listing;
mod save_flow;
