use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use folio_api::ApiClient;
use folio_core::Config;
use folio_tui::{ApiEvent, ApiRequest, App, EventReader};
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = resolve_config_path();
    let config = Config::load(&config_path)?;

    let client = ApiClient::new(folio_api::client::default_client(), &config.api.base_url);

    // `folio health` probes the backend and exits; no terminal takeover.
    if is_health_command(std::env::args().skip(1)) {
        tracing_subscriber::fmt::init();
        let payload = client
            .health()
            .await
            .with_context(|| format!("backend unreachable at {}", config.api.base_url))?;
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    // The TUI owns the terminal, so tracing goes to a file.
    init_subscriber(&config.log_file);
    tracing::info!(
        api = %config.api.base_url,
        user = %config.user.name,
        "starting folio v{}",
        env!("CARGO_PKG_VERSION")
    );

    let (event_tx, event_rx) = mpsc::channel(256);
    let (api_req_tx, api_req_rx) = mpsc::channel::<ApiRequest>(32);
    let (api_event_tx, api_event_rx) = mpsc::channel::<ApiEvent>(32);

    let reader = EventReader::new(event_tx, Duration::from_millis(100));
    std::thread::spawn(move || reader.run());

    let uploaded_by = config.user.name.clone();
    tokio::spawn(api_worker(client, uploaded_by, api_req_rx, api_event_tx));

    let mut app = App::new(api_req_tx, config.user.name, config.api.base_url);
    app.request_refresh();

    folio_tui::run_tui(app, event_rx, api_event_rx).await?;
    Ok(())
}

/// Serves backend requests one at a time, in submission order. Owns the
/// HTTP client; the UI never blocks on the network.
async fn api_worker(
    client: ApiClient,
    uploaded_by: String,
    mut req_rx: mpsc::Receiver<ApiRequest>,
    event_tx: mpsc::Sender<ApiEvent>,
) {
    while let Some(request) = req_rx.recv().await {
        let event = match request {
            ApiRequest::RefreshDocuments => {
                let result = client.list_documents().await.map_err(|e| {
                    tracing::error!(error = %e, "list documents failed");
                    e.to_string()
                });
                ApiEvent::Documents(result)
            }
            ApiRequest::Upload {
                path,
                file_name,
                description,
            } => {
                let result = upload_file(&client, &uploaded_by, &path, &file_name, description)
                    .await
                    .map_err(|e| {
                        tracing::error!(error = %e, file = %file_name, "upload failed");
                        e.to_string()
                    });
                ApiEvent::Uploaded(result)
            }
            ApiRequest::Delete { id } => {
                let result = client.delete_document(id).await.map(|()| id).map_err(|e| {
                    tracing::error!(error = %e, id, "delete failed");
                    e.to_string()
                });
                ApiEvent::Deleted(result)
            }
            ApiRequest::Ask {
                question,
                document_id,
            } => {
                let result = match document_id {
                    Some(id) => client.ask_about_document(id, &question).await,
                    None => client.ask(&question).await,
                }
                .map_err(|e| {
                    tracing::error!(error = %e, "chat request failed");
                    e.to_string()
                });
                ApiEvent::Answered(result)
            }
        };
        if event_tx.send(event).await.is_err() {
            break;
        }
    }
}

async fn upload_file(
    client: &ApiClient,
    uploaded_by: &str,
    path: &std::path::Path,
    file_name: &str,
    description: Option<String>,
) -> anyhow::Result<folio_api::Document> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    let document = client
        .upload_document(file_name, bytes, uploaded_by, description.as_deref())
        .await?;
    Ok(document)
}

fn init_subscriber(log_file: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    if let Ok(file) = std::fs::File::create(log_file) {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(file)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// `health` anywhere among the args selects the probe, so flag order does
/// not matter (`folio --config foo.toml health`). Flag values are skipped
/// so a file literally named `health` cannot trigger it.
fn is_health_command<I: IntoIterator<Item = String>>(args: I) -> bool {
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == "--config" {
            args.next();
        } else if arg == "health" {
            return true;
        }
    }
    false
}

/// Priority: CLI --config > `FOLIO_CONFIG` env > ./folio.toml
fn resolve_config_path() -> PathBuf {
    let args: Vec<String> = std::env::args().collect();
    if let Some(path) = args.windows(2).find(|w| w[0] == "--config").map(|w| &w[1]) {
        return PathBuf::from(path);
    }
    if let Ok(path) = std::env::var("FOLIO_CONFIG") {
        return PathBuf::from(path);
    }
    PathBuf::from("folio.toml")
}
