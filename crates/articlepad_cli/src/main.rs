//! Command-line client for the article API.

use articlepad_client::{ArticleClient, ClientError};
use articlepad_core::config::{env_flag_enabled, normalize_base_url};
use articlepad_core::constants::DEFAULT_CLI_TIMEOUT_SECS;
use articlepad_core::models::article::{Article, ArticleSummary, ArticleUpdate, EditableField};
use articlepad_core::{AppError, Identity, DEFAULT_API_BASE_URL};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use serde_json::json;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "apad", about = "ArticlePad CLI", version)]
struct Cli {
    /// API base URL (can also be set via ARTICLEPAD_API env var)
    #[arg(short, long, env = "ARTICLEPAD_API")]
    server: Option<String>,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    json: bool,

    /// Print timing for API requests
    #[arg(long, global = true)]
    timing: bool,

    /// Request timeout in seconds
    #[arg(short = 't', long, default_value_t = DEFAULT_CLI_TIMEOUT_SECS)]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Print one article's body
    Get { id: i64 },
    /// Change an article's title, entities, or body
    Update {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        entities: Option<String>,
        /// Read the new body from a file, or `-` for stdin
        #[arg(short, long)]
        file: Option<String>,
        /// Acting username (falls back to `guest`)
        #[arg(short, long, env = "ARTICLEPAD_USERNAME")]
        username: Option<String>,
    },
    /// List a user's articles
    History {
        #[arg(short, long, env = "ARTICLEPAD_USERNAME")]
        username: Option<String>,
    },
    /// Delete one of a user's articles
    Delete {
        id: i64,
        /// Acting username (falls back to `guest`)
        #[arg(short, long, env = "ARTICLEPAD_USERNAME")]
        username: Option<String>,
    },
    /// Download an article as plain text
    Download {
        id: i64,
        /// Write to this file, or into this directory as `article_<id>.txt`
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

fn log_timing(timing: bool, label: &str, duration: Duration) {
    if timing {
        eprintln!(
            "[timing] {}: {:.1} ms",
            label,
            duration.as_secs_f64() * 1000.0
        );
    }
}

fn failure_line(action: &str, err: &ClientError) -> String {
    match err {
        ClientError::Status { status, message } => {
            format!("{} failed ({}): {}", action, status, message)
        }
        other => format!("{} failed: {}", action, other),
    }
}

fn exit_with(action: &str, message: impl std::fmt::Display) -> ! {
    eprintln!("{} failed: {}", action, message);
    std::process::exit(1);
}

fn ok_or_exit<T>(result: Result<T, ClientError>, action: &str) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            eprintln!("{}", failure_line(action, &err));
            std::process::exit(1);
        }
    }
}

fn resolve_server(server: Option<String>) -> String {
    server
        .map(|value| normalize_base_url(&value))
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

fn read_content(source: &str) -> Result<String, AppError> {
    if source == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }
    Ok(std::fs::read_to_string(source)?)
}

/// Apply only the requested field changes to a freshly fetched article.
fn patch_article(
    article: &Article,
    title: Option<String>,
    entities: Option<String>,
    content: Option<String>,
) -> Result<Article, AppError> {
    let changes: Vec<(EditableField, String)> = [
        (EditableField::Title, title),
        (EditableField::Entities, entities),
        (EditableField::Content, content),
    ]
    .into_iter()
    .filter_map(|(field, value)| value.map(|value| (field, value)))
    .collect();
    if changes.is_empty() {
        return Err(AppError::BadRequest(
            "nothing to update; pass --title, --entities, or --file".to_string(),
        ));
    }
    Ok(changes
        .into_iter()
        .fold(article.clone(), |draft, (field, value)| {
            draft.with_field(field, value)
        }))
}

fn format_get_output(article: &Article, json: bool) -> Result<String, AppError> {
    if json {
        return Ok(serde_json::to_string_pretty(article)?);
    }
    Ok(article.article.clone())
}

fn format_update_output(id: i64, message: Option<&str>, json: bool) -> Result<String, AppError> {
    if json {
        return Ok(serde_json::to_string_pretty(
            &json!({ "id": id, "message": message }),
        )?);
    }
    Ok(format!(
        "Updated article {}: {}",
        id,
        message.unwrap_or("ok")
    ))
}

fn format_history_output(items: &[ArticleSummary], json: bool) -> Result<String, AppError> {
    if json {
        return Ok(serde_json::to_string_pretty(items)?);
    }
    Ok(items
        .iter()
        .map(|item| {
            format!(
                "{:>6}  {:<16}  {}",
                item.id,
                item.last_touched_label(),
                item.title
            )
        })
        .collect::<Vec<_>>()
        .join("\n"))
}

fn format_delete_output(id: i64, message: Option<&str>, json: bool) -> Result<String, AppError> {
    if json {
        return Ok(serde_json::to_string_pretty(
            &json!({ "id": id, "message": message }),
        )?);
    }
    Ok(format!(
        "Deleted article {}: {}",
        id,
        message.unwrap_or("ok")
    ))
}

/// Where a download lands: directories get the API's `article_<id>.txt` name.
fn download_target(id: i64, output: &Path) -> PathBuf {
    if output.is_dir() {
        output.join(format!("article_{}.txt", id))
    } else {
        output.to_path_buf()
    }
}

fn write_download(id: i64, body: &str, output: &Path) -> Result<PathBuf, AppError> {
    let target = download_target(id, output);
    std::fs::write(&target, body)?;
    Ok(target)
}

fn print_or_exit(output: Result<String, AppError>, action: &str) {
    match output {
        Ok(output) if output.is_empty() => {}
        Ok(output) => println!("{}", output),
        Err(err) => exit_with(action, err),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let Cli {
        server,
        json,
        timing,
        timeout,
        command,
    } = Cli::parse();
    let timing = timing || env_flag_enabled("ARTICLEPAD_TIMING");

    if let Commands::Completions { shell } = &command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(*shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    let server = resolve_server(server);
    debug!("using API at {}", server);
    let client = ArticleClient::new(&server, Some(Duration::from_secs(timeout)))?;

    match command {
        Commands::Completions { .. } => unreachable!("completions handled before client setup"),
        Commands::Get { id } => {
            let request_start = Instant::now();
            let article = ok_or_exit(client.fetch_article(id).await, "Get");
            log_timing(timing, "get", request_start.elapsed());
            print_or_exit(format_get_output(&article, json), "Get");
        }
        Commands::Update {
            id,
            title,
            entities,
            file,
            username,
        } => {
            let content = match file.as_deref().map(read_content).transpose() {
                Ok(content) => content,
                Err(err) => exit_with("Update", err),
            };
            let identity = Identity::resolve(username.as_deref());
            if identity.is_guest() {
                warn!("no username given; saving as '{}'", identity);
            }

            let request_start = Instant::now();
            let current = ok_or_exit(client.fetch_article(id).await, "Update");
            let draft = match patch_article(&current, title, entities, content) {
                Ok(draft) => draft,
                Err(err) => exit_with("Update", err),
            };
            let update = ArticleUpdate::from_draft(&draft, &identity);
            let message = ok_or_exit(client.update_article(id, &update).await, "Update");
            log_timing(timing, "update", request_start.elapsed());
            print_or_exit(format_update_output(id, message.as_deref(), json), "Update");
        }
        Commands::History { username } => {
            let identity = Identity::resolve(username.as_deref());
            let request_start = Instant::now();
            let history = ok_or_exit(client.fetch_history(identity.username()).await, "History");
            log_timing(timing, "history", request_start.elapsed());
            print_or_exit(format_history_output(&history.data, json), "History");
        }
        Commands::Delete { id, username } => {
            let identity = Identity::resolve(username.as_deref());
            let request_start = Instant::now();
            let message = ok_or_exit(
                client.delete_article(id, identity.username()).await,
                "Delete",
            );
            log_timing(timing, "delete", request_start.elapsed());
            print_or_exit(format_delete_output(id, message.as_deref(), json), "Delete");
        }
        Commands::Download { id, output } => {
            let request_start = Instant::now();
            let body = ok_or_exit(client.download_article(id).await, "Download");
            log_timing(timing, "download", request_start.elapsed());
            match output {
                Some(output) => match write_download(id, &body, &output) {
                    Ok(target) => eprintln!("Saved article {} to {}", id, target.display()),
                    Err(err) => exit_with("Download", err),
                },
                None => print!("{}", body),
            }
        }
    }

    Ok(())
}
