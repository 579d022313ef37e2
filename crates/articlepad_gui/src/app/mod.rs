//! Native egui app shell for the article editor.

mod image_display;
mod routes;
mod state_feedback;
mod state_ops;
mod style;
mod ui;

use crate::backend::{spawn_backend_with_waker, BackendHandle};
use articlepad_client::{ArticleClient, ClientError};
use articlepad_core::models::article::{Article, ArticleSummary};
use articlepad_core::{Config, Identity};
use eframe::egui;
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tracing::{info, warn};

pub(crate) use image_display::ImageDisplay;
pub(crate) use routes::Route;
use style::*;

/// Native egui application shell.
///
/// Owns the UI state and talks to the background worker via channels so the
/// `update` loop never blocks on network I/O.
pub(crate) struct ArticlePadApp {
    backend: BackendHandle,
    api_base_url: String,
    identity: Identity,
    route: Route,
    navigation_count: u64,
    draft: Option<Article>,
    load_generation: u64,
    /// Generation of the route entry whose save is still outstanding.
    save_in_flight: Option<u64>,
    image: ImageDisplay,
    listing: Vec<ArticleSummary>,
    listing_loaded: bool,
    listing_in_flight: bool,
    pending_delete: Option<i64>,
    delete_in_flight: Option<i64>,
    toasts: VecDeque<ToastMessage>,
    next_toast_id: u64,
    style_applied: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub(crate) struct ToastMessage {
    id: u64,
    kind: ToastKind,
    title: String,
    description: String,
    expires_at: Instant,
}

const TOAST_TTL: Duration = Duration::from_secs(5);
const TOAST_LIMIT: usize = 4;
const IDLE_REPAINT_INTERVAL: Duration = Duration::from_secs(2);
#[doc = "Default initial window size for startup."]
pub(crate) const DEFAULT_WINDOW_SIZE: [f32; 2] = [1000.0, 760.0];
#[doc = "Minimum window size that keeps the form controls usable."]
pub(crate) const MIN_WINDOW_SIZE: [f32; 2] = [640.0, 480.0];

/// Prefer the persisted username, then the environment, then `guest`.
fn resolve_identity(stored: Option<String>, config: &Config) -> Identity {
    let stored = stored.filter(|name| !name.is_empty());
    Identity::resolve(stored.as_deref().or(config.username.as_deref()))
}

impl ArticlePadApp {
    /// Construct the app, spawn the backend worker, and enter the initial route.
    ///
    /// # Errors
    /// Returns an error if the configured API base URL is unusable.
    pub(crate) fn new(
        ctx: &egui::Context,
        config: Config,
        stored_username: Option<String>,
    ) -> Result<Self, ClientError> {
        let client = ArticleClient::new(&config.api_base_url, config.request_timeout())?;
        let repaint_ctx = ctx.clone();
        let backend = spawn_backend_with_waker(client, move || repaint_ctx.request_repaint());
        let identity = resolve_identity(stored_username, &config);
        info!("acting as '{}'", identity);

        let initial_route = match Route::parse(&config.initial_route) {
            Ok(route) => route,
            Err(err) => {
                warn!("{}; opening the listing instead", err);
                Route::Listing
            }
        };
        Ok(Self::with_backend(
            backend,
            config.api_base_url,
            identity,
            initial_route,
        ))
    }

    pub(crate) fn with_backend(
        backend: BackendHandle,
        api_base_url: String,
        identity: Identity,
        initial_route: Route,
    ) -> Self {
        let mut app = Self {
            backend,
            api_base_url,
            identity,
            route: Route::Listing,
            navigation_count: 0,
            draft: None,
            load_generation: 0,
            save_in_flight: None,
            image: ImageDisplay::Showing,
            listing: Vec::new(),
            listing_loaded: false,
            listing_in_flight: false,
            pending_delete: None,
            delete_in_flight: None,
            toasts: VecDeque::with_capacity(TOAST_LIMIT),
            next_toast_id: 0,
            style_applied: false,
        };
        app.enter_route(initial_route);
        app
    }

    fn drain_backend_events(&mut self) {
        while let Ok(event) = self.backend.evt_rx.try_recv() {
            self.apply_event(event);
        }
    }
}

impl eframe::App for ArticlePadApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_style(ctx);
        self.expire_toasts(Instant::now());
        self.drain_backend_events();

        self.render_top_bar(ctx);
        egui::CentralPanel::default().show(ctx, |ui| match self.route {
            Route::Editor { .. } => self.render_editor(ui),
            Route::Listing => self.render_listing(ui),
        });
        self.render_toasts(ctx);

        let mut repaint_after = IDLE_REPAINT_INTERVAL;
        if let Some(expires_at) = self.toasts.iter().map(|toast| toast.expires_at).min() {
            repaint_after = repaint_after.min(expires_at.saturating_duration_since(Instant::now()));
        }
        ctx.request_repaint_after(repaint_after);
    }
}

#[cfg(test)]
mod tests;
