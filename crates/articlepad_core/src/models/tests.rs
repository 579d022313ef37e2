//! Model-level unit tests.

use super::article::*;
use crate::identity::Identity;
use serde_json::json;

fn sample_article() -> Article {
    Article {
        id: 42,
        title: "Original title".to_string(),
        entities: "Rust, Tokio".to_string(),
        article: "Body text".to_string(),
        image_url: "photo.png".to_string(),
        meta_title: "A photo".to_string(),
        user_id: Some(3),
        created_time_ts: Some("2024-05-01 10:11:12.123456".to_string()),
        updated_time_ts: None,
    }
}

#[test]
fn article_deserializes_full_api_payload_and_ignores_extra_columns() {
    let payload = json!({
        "id": 42,
        "user_id": 3,
        "article": "Body text",
        "title": "Original title",
        "entities": "Rust, Tokio",
        "image_url": "photo.png",
        "meta_title": "A photo",
        "created_time_ts": "2024-05-01 10:11:12.123456",
        "updated_time_ts": null,
        "is_deleted": 0
    });
    let article: Article = serde_json::from_value(payload).expect("article");
    assert_eq!(article, sample_article());
}

#[test]
fn article_null_text_columns_become_empty_strings() {
    let payload = json!({
        "id": 7,
        "title": "t",
        "entities": null,
        "article": "a",
        "image_url": null,
        "meta_title": null
    });
    let article: Article = serde_json::from_value(payload).expect("article");
    assert_eq!(article.entities, "");
    assert_eq!(article.image_url, "");
    assert_eq!(article.meta_title, "");
    assert!(!article.has_image());
}

#[test]
fn with_field_title_changes_only_title() {
    let before = sample_article();
    let after = before.with_field(EditableField::Title, "New title");

    assert_eq!(after.title, "New title");
    assert_eq!(after.entities, before.entities);
    assert_eq!(after.article, before.article);
    assert_eq!(after.image_url, before.image_url);
    assert_eq!(after.meta_title, before.meta_title);
    assert_eq!(after.id, before.id);
    assert_eq!(after.created_time_ts, before.created_time_ts);
    assert_eq!(before.title, "Original title");
}

#[test]
fn with_field_targets_each_editable_field() {
    let base = sample_article();
    for field in EditableField::ALL {
        let patched = base.with_field(field, "patched");
        assert_eq!(patched.field(field), "patched", "field: {}", field.label());
        for other in EditableField::ALL.into_iter().filter(|f| *f != field) {
            assert_eq!(patched.field(other), base.field(other));
        }
    }
}

#[test]
fn update_payload_uses_draft_fields_and_identity() {
    let draft = sample_article().with_field(EditableField::Content, "Edited body");
    let update = ArticleUpdate::from_draft(&draft, &Identity::resolve(None));
    assert_eq!(
        serde_json::to_value(&update).expect("json"),
        json!({
            "username": "guest",
            "new_article": "Edited body",
            "new_title": "Original title",
            "new_entities": "Rust, Tokio"
        })
    );
}

#[test]
fn history_rows_deserialize_from_positional_arrays() {
    let payload = json!({
        "message": "Fetched active articles successfully",
        "data": [
            [1, "First", "a, b", "2024-05-01 10:00:00.5", "2024-05-02 09:30:00", "one.png"],
            [2, "Second", null, "2024-05-03T08:00:00", null, null]
        ]
    });
    let history: HistoryResponse = serde_json::from_value(payload).expect("history");
    assert_eq!(history.data.len(), 2);

    let first = &history.data[0];
    assert_eq!(first.id, 1);
    assert_eq!(first.entity_tags(), vec!["a".to_string(), "b".to_string()]);
    assert_eq!(first.last_touched_label(), "2024-05-02 09:30");

    let second = &history.data[1];
    assert_eq!(second.entities, "");
    assert_eq!(second.image_url, "");
    assert_eq!(second.last_touched_label(), "2024-05-03 08:00");
}

#[test]
fn summary_serializes_back_to_row_shape() {
    let summary = ArticleSummary {
        id: 5,
        title: "T".to_string(),
        entities: "x".to_string(),
        created_time_ts: None,
        updated_time_ts: None,
        image_url: String::new(),
    };
    assert_eq!(
        serde_json::to_value(&summary).expect("json"),
        json!([5, "T", "x", null, null, null])
    );
}

#[test]
fn entity_tags_skip_blank_items() {
    assert_eq!(
        split_entity_tags(" Rust ,, Tokio , "),
        vec!["Rust".to_string(), "Tokio".to_string()]
    );
    assert!(split_entity_tags("").is_empty());
}

#[test]
fn parse_api_timestamp_rejects_garbage() {
    assert!(parse_api_timestamp("yesterday").is_none());
    assert!(parse_api_timestamp("2024-05-01 10:11:12").is_some());
}
