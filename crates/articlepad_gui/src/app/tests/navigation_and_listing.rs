//! Cancel navigation, listing replies, deletes, and toast housekeeping.

use super::*;
use articlepad_core::models::article::ArticleSummary;
use std::time::Instant;

fn summary(id: i64, title: &str) -> ArticleSummary {
    ArticleSummary {
        id,
        title: title.to_string(),
        entities: "a, b".to_string(),
        created_time_ts: Some("2024-05-01 10:00:00".to_string()),
        updated_time_ts: None,
        image_url: String::new(),
    }
}

#[test]
fn cancel_navigates_to_listing_without_saving() {
    let mut harness = make_loaded_editor(sample_article(42));
    harness.edit(EditableField::Title, "discarded");
    harness.app.cancel();

    assert_eq!(harness.app.route, Route::Listing);
    assert!(harness.app.draft.is_none());
    assert!(matches!(
        recv_cmd(&harness.cmd_rx),
        CoreCmd::ListArticles { .. }
    ));
    harness.assert_no_cmd();
}

#[test]
fn listing_requests_history_for_acting_user() {
    let harness = make_app(Route::Listing);
    match recv_cmd(&harness.cmd_rx) {
        CoreCmd::ListArticles { username } => assert_eq!(username, "guest"),
        other => panic!("unexpected command: {:?}", other),
    }
    assert!(harness.app.listing_in_flight);
}

#[test]
fn refresh_is_suppressed_while_history_is_in_flight() {
    let mut harness = make_app(Route::Listing);
    let _ = recv_cmd(&harness.cmd_rx);
    harness.app.refresh_listing();
    harness.assert_no_cmd();
}

#[test]
fn listed_articles_replace_listing() {
    let mut harness = make_app(Route::Listing);
    let _ = recv_cmd(&harness.cmd_rx);
    harness.deliver(CoreEvent::ArticlesListed {
        username: "guest".to_string(),
        items: vec![summary(2, "Two"), summary(1, "One")],
    });

    assert!(harness.app.listing_loaded);
    assert!(!harness.app.listing_in_flight);
    let ids: Vec<i64> = harness.app.listing.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![2, 1]);

    let ctx = egui::Context::default();
    let _ = ctx.run(egui::RawInput::default(), |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| harness.app.render_listing(ui));
    });
    harness.assert_no_cmd();
}

#[test]
fn listing_failure_reports_error() {
    let mut harness = make_app(Route::Listing);
    let _ = recv_cmd(&harness.cmd_rx);
    harness.deliver(CoreEvent::ArticleListFailed {
        message: "User not found".to_string(),
    });
    assert!(!harness.app.listing_in_flight);
    assert_eq!(
        toast_descriptions(&harness.app),
        vec![(ToastKind::Error, "Failed to fetch articles".to_string())]
    );
}

fn make_listed_app(items: Vec<ArticleSummary>) -> TestHarness {
    let mut harness = make_app(Route::Listing);
    let _ = recv_cmd(&harness.cmd_rx);
    harness.deliver(CoreEvent::ArticlesListed {
        username: "guest".to_string(),
        items,
    });
    harness
}

#[test]
fn delete_needs_confirmation_before_sending() {
    let mut harness = make_listed_app(vec![summary(2, "Two"), summary(1, "One")]);
    harness.app.request_delete(2);
    assert_eq!(harness.app.pending_delete, Some(2));
    harness.assert_no_cmd();

    harness.app.dismiss_delete();
    assert_eq!(harness.app.pending_delete, None);
    harness.app.confirm_delete();
    harness.assert_no_cmd();
    assert_eq!(harness.app.listing.len(), 2);
}

#[test]
fn confirmed_delete_sends_acting_user_and_removes_row() {
    let mut harness = make_listed_app(vec![summary(2, "Two"), summary(1, "One")]);
    harness.app.request_delete(2);
    harness.app.confirm_delete();

    match recv_cmd(&harness.cmd_rx) {
        CoreCmd::DeleteArticle { id, username } => {
            assert_eq!(id, 2);
            assert_eq!(username, "guest");
        }
        other => panic!("unexpected command: {:?}", other),
    }
    assert_eq!(harness.app.delete_in_flight, Some(2));
    assert_eq!(harness.app.pending_delete, None);

    // A second row cannot be deleted until the first reply lands.
    harness.app.request_delete(1);
    harness.app.confirm_delete();
    harness.assert_no_cmd();

    harness.deliver(CoreEvent::ArticleDeleted { id: 2 });
    assert_eq!(harness.app.delete_in_flight, None);
    let ids: Vec<i64> = harness.app.listing.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![1]);
    assert_eq!(
        toast_descriptions(&harness.app),
        vec![(ToastKind::Success, "Article deleted successfully".to_string())]
    );
}

#[test]
fn failed_delete_keeps_row_and_reports_error() {
    let mut harness = make_listed_app(vec![summary(2, "Two")]);
    harness.app.request_delete(2);
    harness.app.confirm_delete();
    let _ = recv_cmd(&harness.cmd_rx);

    harness.deliver(CoreEvent::ArticleDeleteFailed {
        id: 2,
        message: "Article with id 2 not found or already deleted".to_string(),
    });
    assert_eq!(harness.app.delete_in_flight, None);
    assert_eq!(harness.app.listing.len(), 1);
    assert_eq!(
        toast_descriptions(&harness.app),
        vec![(ToastKind::Error, "Failed to delete article".to_string())]
    );
}

#[test]
fn leaving_listing_drops_pending_confirmation() {
    let mut harness = make_listed_app(vec![summary(2, "Two")]);
    harness.app.request_delete(2);
    harness.app.navigate(Route::Editor { id: 2 });
    assert_eq!(harness.app.pending_delete, None);

    let ctx = egui::Context::default();
    harness.app.request_delete(2);
    let _ = ctx.run(egui::RawInput::default(), |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| harness.app.render_listing(ui));
    });
    assert_eq!(harness.app.pending_delete, Some(2));
}

#[test]
fn repeated_toast_is_deduplicated_and_limit_is_enforced() {
    let mut harness = make_app(Route::Listing);
    harness.app.notify_error("same");
    harness.app.notify_error("same");
    assert_eq!(harness.app.toasts.len(), 1);

    for index in 0..TOAST_LIMIT + 2 {
        harness.app.notify_success(format!("toast {}", index));
    }
    assert_eq!(harness.app.toasts.len(), TOAST_LIMIT);
    assert_eq!(
        harness.app.toasts.back().map(|toast| toast.description.as_str()),
        Some("toast 5")
    );
}

#[test]
fn toasts_can_be_dismissed_or_expire() {
    let mut harness = make_app(Route::Listing);
    harness.app.notify_success("first");
    harness.app.notify_error("second");
    let first_id = harness.app.toasts[0].id;

    harness.app.dismiss_toast(first_id);
    assert_eq!(
        toast_descriptions(&harness.app),
        vec![(ToastKind::Error, "second".to_string())]
    );

    harness.app.expire_toasts(Instant::now() + TOAST_TTL);
    assert!(harness.app.toasts.is_empty());
}
