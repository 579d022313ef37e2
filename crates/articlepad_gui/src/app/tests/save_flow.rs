//! Save command emission and the outcomes of save replies.

use super::*;
use articlepad_core::models::article::ArticleUpdate;

fn expect_save(rx: &Receiver<CoreCmd>) -> (i64, u64, ArticleUpdate) {
    match recv_cmd(rx) {
        CoreCmd::SaveArticle {
            id,
            generation,
            update,
        } => (id, generation, update),
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn save_sends_current_fields_as_guest() {
    let mut harness = make_loaded_editor(sample_article(42));
    harness.edit(EditableField::Title, "New Title");
    harness.app.save_changes();

    let (id, generation, update) = expect_save(&harness.cmd_rx);
    assert_eq!(id, 42);
    assert_eq!(generation, harness.app.load_generation);
    assert_eq!(update.username, "guest");
    assert_eq!(update.new_title, "New Title");
    assert_eq!(update.new_entities, "rust, egui");
    assert_eq!(update.new_article, "Original body");
    assert!(!harness.form().save_enabled);
}

#[test]
fn save_uses_resolved_identity() {
    let mut harness = make_loaded_editor(sample_article(42));
    harness.app.identity = Identity::resolve(Some("ada"));
    harness.app.save_changes();

    let (_, _, update) = expect_save(&harness.cmd_rx);
    assert_eq!(update.username, "ada");
}

#[test]
fn save_without_draft_is_a_no_op() {
    let mut harness = make_app(Route::Editor { id: 42 });
    let _ = recv_cmd(&harness.cmd_rx);
    harness.app.save_changes();
    harness.assert_no_cmd();
    assert!(harness.app.save_in_flight.is_none());
}

#[test]
fn second_save_while_in_flight_is_ignored() {
    let mut harness = make_loaded_editor(sample_article(42));
    harness.app.save_changes();
    let _ = expect_save(&harness.cmd_rx);

    harness.app.save_changes();
    harness.assert_no_cmd();
}

#[test]
fn successful_save_toasts_and_navigates_to_listing_once() {
    let mut harness = make_loaded_editor(sample_article(42));
    harness.app.save_changes();
    let (id, generation, _) = expect_save(&harness.cmd_rx);

    harness.deliver(CoreEvent::ArticleSaved {
        id,
        generation,
        message: Some("Article updated successfully!".to_string()),
    });

    assert_eq!(harness.app.route, Route::Listing);
    assert_eq!(harness.app.navigation_count, 1);
    assert!(harness.app.save_in_flight.is_none());
    assert_eq!(
        toast_descriptions(&harness.app),
        vec![(ToastKind::Success, "Article updated successfully".to_string())]
    );
    assert!(matches!(
        recv_cmd(&harness.cmd_rx),
        CoreCmd::ListArticles { .. }
    ));
}

#[test]
fn failed_save_stays_on_editor_with_draft_intact() {
    let mut harness = make_loaded_editor(sample_article(42));
    harness.edit(EditableField::Content, "Unsaved body");
    harness.app.save_changes();
    let (id, generation, _) = expect_save(&harness.cmd_rx);

    harness.deliver(CoreEvent::ArticleSaveFailed {
        id,
        generation,
        message: "Error updating article".to_string(),
    });

    assert_eq!(harness.app.route, Route::Editor { id: 42 });
    assert_eq!(harness.app.navigation_count, 0);
    let form = harness.form();
    assert_eq!(form.content, "Unsaved body");
    assert!(form.save_enabled);
    assert_eq!(
        toast_descriptions(&harness.app),
        vec![(ToastKind::Error, "Failed to update article".to_string())]
    );
}

#[test]
fn save_reply_after_leaving_editor_does_not_navigate_again() {
    let mut harness = make_loaded_editor(sample_article(42));
    harness.app.save_changes();
    let (id, generation, _) = expect_save(&harness.cmd_rx);
    harness.app.navigate(Route::Editor { id: 7 });
    let _ = recv_cmd(&harness.cmd_rx);

    harness.deliver(CoreEvent::ArticleSaved {
        id,
        generation,
        message: None,
    });

    assert_eq!(harness.app.route, Route::Editor { id: 7 });
    assert_eq!(harness.app.navigation_count, 1);
    assert_eq!(harness.app.toasts.len(), 1);
}

#[test]
fn late_save_reply_keeps_edits_in_reopened_editor() {
    let mut harness = make_loaded_editor(sample_article(42));
    harness.app.save_changes();
    let (id, first_generation, _) = expect_save(&harness.cmd_rx);

    harness.app.cancel();
    assert!(matches!(
        recv_cmd(&harness.cmd_rx),
        CoreCmd::ListArticles { .. }
    ));
    harness.app.navigate(Route::Editor { id: 42 });
    harness.answer_load(sample_article(42));
    harness.edit(EditableField::Title, "Second thoughts");

    // The first save is still outstanding, so the reopened form cannot
    // issue another one.
    assert!(!harness.form().save_enabled);
    harness.app.save_changes();
    harness.assert_no_cmd();

    harness.deliver(CoreEvent::ArticleSaved {
        id,
        generation: first_generation,
        message: None,
    });

    assert_eq!(harness.app.route, Route::Editor { id: 42 });
    assert_eq!(harness.app.navigation_count, 2);
    assert_eq!(harness.form().title, "Second thoughts");
    assert!(harness.form().save_enabled);
    assert_eq!(
        toast_descriptions(&harness.app),
        vec![(ToastKind::Success, "Article updated successfully".to_string())]
    );

    harness.app.save_changes();
    let (_, second_generation, update) = expect_save(&harness.cmd_rx);
    assert_ne!(second_generation, first_generation);
    assert_eq!(update.new_title, "Second thoughts");
}

#[test]
fn late_save_failure_only_releases_the_guard() {
    let mut harness = make_loaded_editor(sample_article(42));
    harness.app.save_changes();
    let (id, generation, _) = expect_save(&harness.cmd_rx);
    harness.app.navigate(Route::Editor { id: 42 });
    harness.answer_load(sample_article(42));

    harness.deliver(CoreEvent::ArticleSaveFailed {
        id,
        generation,
        message: "timeout".to_string(),
    });

    assert_eq!(harness.app.route, Route::Editor { id: 42 });
    assert!(harness.app.save_in_flight.is_none());
    assert!(harness.form().save_enabled);
}

#[test]
fn stored_username_takes_precedence_over_config() {
    let config = Config {
        username: Some("from-env".to_string()),
        ..Config::default()
    };
    assert_eq!(
        resolve_identity(Some("stored".to_string()), &config).username(),
        "stored"
    );
    assert_eq!(
        resolve_identity(Some(String::new()), &config).username(),
        "from-env"
    );
    assert_eq!(
        resolve_identity(None, &Config::default()).username(),
        "guest"
    );
}
