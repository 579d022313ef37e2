//! Desktop article editor library entry point.
//!
//! Exposes a `run` helper so the workspace root can launch the UI without
//! duplicating initialization logic.

mod app;
/// Backend worker + protocol types used by the GUI and headless tests.
pub mod backend;

use app::ArticlePadApp;
use articlepad_core::constants::USERNAME_STORAGE_KEY;
use articlepad_core::Config;
use eframe::egui;
use tracing::info;
use tracing_subscriber::EnvFilter;

type AppCreationError = Box<dyn std::error::Error + Send + Sync>;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("articlepad=warn,articlepad_gui=info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init();
}

/// Start the article editor UI with tracing enabled.
///
/// The acting username is read once from eframe's persistent storage (key
/// `username`), falling back to `ARTICLEPAD_USERNAME` and then `guest`.
///
/// # Errors
/// Propagates any `eframe` initialization or runtime error, including an
/// unusable API base URL.
pub fn run() -> eframe::Result<()> {
    init_tracing();
    let config = Config::from_env();
    info!("article API at {}", config.api_base_url);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(app::DEFAULT_WINDOW_SIZE)
            .with_min_inner_size(app::MIN_WINDOW_SIZE)
            .with_title("ArticlePad"),
        ..Default::default()
    };

    eframe::run_native(
        "ArticlePad",
        options,
        Box::new(move |cc: &eframe::CreationContext<'_>| -> Result<Box<dyn eframe::App>, AppCreationError> {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            let stored_username = cc
                .storage
                .and_then(|storage| storage.get_string(USERNAME_STORAGE_KEY));
            let app = ArticlePadApp::new(&cc.egui_ctx, config, stored_username)?;
            Ok(Box::new(app))
        }),
    )
}
