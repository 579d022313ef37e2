//! Async article API client built on `reqwest`.

use crate::ClientError;
use articlepad_core::constants::{
    DELETE_ARTICLE_PATH, DOWNLOAD_ARTICLE_PATH, FETCH_ARTICLE_PATH, FETCH_HISTORY_PATH,
    IMAGES_PATH_SEGMENT, UPDATE_ARTICLE_PATH,
};
use articlepad_core::models::article::{Article, ArticleUpdate, HistoryResponse};
use reqwest::{Response, Url};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Cheaply cloneable handle to the article API.
#[derive(Debug, Clone)]
pub struct ArticleClient {
    http: reqwest::Client,
    base: Url,
}

/// Build the direct image URL for an article's relative `image_url`.
///
/// The relative part is appended verbatim (`{base}/images/{image_url}`), so
/// nested paths keep their slashes and no segment is encoded or trimmed. Only
/// a trailing slash on the base is dropped.
pub fn image_url(base_url: &str, relative: &str) -> String {
    format!(
        "{}/{}/{}",
        base_url.trim_end_matches('/'),
        IMAGES_PATH_SEGMENT,
        relative
    )
}

fn error_message_for_response(status: reqwest::StatusCode, body: &str) -> String {
    if body.trim().is_empty() {
        return status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string();
    }

    if let Ok(value) = serde_json::from_str::<Value>(body) {
        return ["message", "error"]
            .iter()
            .find_map(|key| value.get(key).and_then(Value::as_str))
            .unwrap_or(body)
            .to_string();
    }

    body.to_string()
}

/// Any 2xx counts as success; the body's `message`, if present, is returned.
async fn success_message(res: Response) -> Result<Option<String>, ClientError> {
    let body = ensure_success(res)
        .await?
        .text()
        .await
        .map_err(ClientError::Transport)?;
    Ok(serde_json::from_str::<Value>(&body).ok().and_then(|value| {
        value
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
    }))
}

async fn ensure_success(res: Response) -> Result<Response, ClientError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }

    let body = match res.text().await {
        Ok(body) => body,
        Err(err) => format!("failed to read error response body: {}", err),
    };
    Err(ClientError::Status {
        status,
        message: error_message_for_response(status, &body),
    })
}

impl ArticleClient {
    /// Create a client for the API rooted at `base_url`.
    ///
    /// `timeout` of `None` lets requests wait indefinitely.
    ///
    /// # Errors
    /// Returns [`ClientError::InvalidBaseUrl`] when the URL does not parse or
    /// cannot carry path segments, and [`ClientError::Transport`] when the
    /// HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ClientError> {
        let base = Url::parse(base_url.trim()).map_err(|err| ClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: err.to_string(),
        })?;
        if base.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "URL cannot be used as an API base".to_string(),
            });
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ClientError::Transport)?;
        Ok(Self { http, base })
    }

    /// Base URL as configured, without a trailing slash.
    pub fn base_url(&self) -> String {
        self.base.as_str().trim_end_matches('/').to_string()
    }

    /// Direct image URL for an article's relative `image_url`.
    pub fn image_url(&self, relative: &str) -> String {
        image_url(&self.base_url(), relative)
    }

    fn endpoint(&self, segment: &str, query: &[(&str, &str)]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty();
            path.push(segment);
        }
        url.query_pairs_mut().extend_pairs(query);
        url
    }

    /// `GET /fetch-single-article?id={id}`.
    ///
    /// # Errors
    /// Any transport failure, non-2xx status, or undecodable body.
    pub async fn fetch_article(&self, id: i64) -> Result<Article, ClientError> {
        let url = self.endpoint(FETCH_ARTICLE_PATH, &[("id", &id.to_string())]);
        debug!("fetching article {} from {}", id, url);
        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(ClientError::Transport)?;
        ensure_success(res)
            .await?
            .json::<Article>()
            .await
            .map_err(ClientError::Decode)
    }

    /// `POST /update-article?id={id}` with the update payload.
    ///
    /// Any 2xx counts as success. Returns the server's `message` when the
    /// body carries one.
    ///
    /// # Errors
    /// Any transport failure or non-2xx status.
    pub async fn update_article(
        &self,
        id: i64,
        update: &ArticleUpdate,
    ) -> Result<Option<String>, ClientError> {
        let url = self.endpoint(UPDATE_ARTICLE_PATH, &[("id", &id.to_string())]);
        debug!("updating article {} as '{}'", id, update.username);
        let res = self
            .http
            .post(url)
            .json(update)
            .send()
            .await
            .map_err(ClientError::Transport)?;
        success_message(res).await
    }

    /// `GET /fetch-generated-history?username={username}`.
    ///
    /// # Errors
    /// Any transport failure, non-2xx status, or undecodable body.
    pub async fn fetch_history(&self, username: &str) -> Result<HistoryResponse, ClientError> {
        let url = self.endpoint(FETCH_HISTORY_PATH, &[("username", username)]);
        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(ClientError::Transport)?;
        ensure_success(res)
            .await?
            .json::<HistoryResponse>()
            .await
            .map_err(ClientError::Decode)
    }

    /// `DELETE /delete-article?id={id}&username={username}`.
    ///
    /// The API soft-deletes the row; it disappears from history afterwards.
    ///
    /// # Errors
    /// Any transport failure or non-2xx status (unknown user or article).
    pub async fn delete_article(
        &self,
        id: i64,
        username: &str,
    ) -> Result<Option<String>, ClientError> {
        let url = self.endpoint(
            DELETE_ARTICLE_PATH,
            &[("id", &id.to_string()), ("username", username)],
        );
        debug!("deleting article {} as '{}'", id, username);
        let res = self
            .http
            .delete(url)
            .send()
            .await
            .map_err(ClientError::Transport)?;
        success_message(res).await
    }

    /// `GET /download-article?id={id}`: the article body as plain text.
    ///
    /// # Errors
    /// Any transport failure or non-2xx status.
    pub async fn download_article(&self, id: i64) -> Result<String, ClientError> {
        let url = self.endpoint(DOWNLOAD_ARTICLE_PATH, &[("id", &id.to_string())]);
        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(ClientError::Transport)?;
        ensure_success(res)
            .await?
            .text()
            .await
            .map_err(ClientError::Decode)
    }
}
