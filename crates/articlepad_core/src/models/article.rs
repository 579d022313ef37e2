//! Article wire models and draft editing helpers.

use crate::identity::Identity;
use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

/// Text columns are nullable in the backing store; the UI treats null as empty.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// One article as returned by `fetch-single-article`.
///
/// The same struct doubles as the editable draft: the GUI holds an
/// `Option<Article>` that stays `None` until the first successful load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub entities: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub article: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image_url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub meta_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time_ts: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_time_ts: Option<String>,
}

/// The three fields a user may change in the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditableField {
    Title,
    Entities,
    Content,
}

impl EditableField {
    pub const ALL: [EditableField; 3] = [Self::Title, Self::Entities, Self::Content];

    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Entities => "Entities",
            Self::Content => "Content",
        }
    }
}

impl Article {
    /// Read the current value of an editable field.
    pub fn field(&self, field: EditableField) -> &str {
        match field {
            EditableField::Title => &self.title,
            EditableField::Entities => &self.entities,
            EditableField::Content => &self.article,
        }
    }

    /// Mutable access to one editable field, for in-place text binding.
    pub fn field_mut(&mut self, field: EditableField) -> &mut String {
        match field {
            EditableField::Title => &mut self.title,
            EditableField::Entities => &mut self.entities,
            EditableField::Content => &mut self.article,
        }
    }

    /// Clone the article with exactly one editable field replaced.
    ///
    /// Every other field, including `id`, `image_url` and `meta_title`, is
    /// carried over unchanged.
    pub fn with_field(&self, field: EditableField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let value = value.into();
        match field {
            EditableField::Title => next.title = value,
            EditableField::Entities => next.entities = value,
            EditableField::Content => next.article = value,
        }
        next
    }

    /// Whether an image block should be shown for this article.
    pub fn has_image(&self) -> bool {
        !self.image_url.is_empty()
    }

    /// Entity tags split out of the comma-joined `entities` column.
    pub fn entity_tags(&self) -> Vec<String> {
        split_entity_tags(&self.entities)
    }
}

/// Split a comma-joined entity list, dropping blank items.
pub fn split_entity_tags(entities: &str) -> Vec<String> {
    entities
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// JSON body of `POST /update-article`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleUpdate {
    pub username: String,
    pub new_article: String,
    pub new_title: String,
    pub new_entities: String,
}

impl ArticleUpdate {
    /// Build the save payload from a draft and the acting identity.
    pub fn from_draft(draft: &Article, identity: &Identity) -> Self {
        Self {
            username: identity.username().to_string(),
            new_article: draft.article.clone(),
            new_title: draft.title.clone(),
            new_entities: draft.entities.clone(),
        }
    }
}

/// Positional row shape used by the history endpoint:
/// `[id, title, entities, created_time_ts, updated_time_ts, image_url]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ArticleRow(
    i64,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
);

/// Lightweight article row rendered by the listing view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ArticleRow", into = "ArticleRow")]
pub struct ArticleSummary {
    pub id: i64,
    pub title: String,
    pub entities: String,
    pub created_time_ts: Option<String>,
    pub updated_time_ts: Option<String>,
    pub image_url: String,
}

impl From<ArticleRow> for ArticleSummary {
    fn from(row: ArticleRow) -> Self {
        let ArticleRow(id, title, entities, created, updated, image_url) = row;
        Self {
            id,
            title: title.unwrap_or_default(),
            entities: entities.unwrap_or_default(),
            created_time_ts: created,
            updated_time_ts: updated,
            image_url: image_url.unwrap_or_default(),
        }
    }
}

impl From<ArticleSummary> for ArticleRow {
    fn from(summary: ArticleSummary) -> Self {
        let empty_as_null = |value: String| (!value.is_empty()).then_some(value);
        ArticleRow(
            summary.id,
            Some(summary.title),
            Some(summary.entities),
            summary.created_time_ts,
            summary.updated_time_ts,
            empty_as_null(summary.image_url),
        )
    }
}

impl ArticleSummary {
    /// Most recent known modification time (updated, else created).
    pub fn last_touched(&self) -> Option<NaiveDateTime> {
        self.updated_time_ts
            .as_deref()
            .and_then(parse_api_timestamp)
            .or_else(|| self.created_time_ts.as_deref().and_then(parse_api_timestamp))
    }

    /// Short human label for the listing column.
    pub fn last_touched_label(&self) -> String {
        self.last_touched()
            .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string())
    }

    pub fn entity_tags(&self) -> Vec<String> {
        split_entity_tags(&self.entities)
    }
}

/// Envelope returned by `fetch-generated-history`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Vec<ArticleSummary>,
}

/// Parse timestamps as the API emits them (space or `T` separator, optional
/// fractional seconds). Unparseable input yields `None`.
pub fn parse_api_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}
